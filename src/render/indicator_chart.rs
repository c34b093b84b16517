//! Morphology-based impact chart: the raw indicator values as bars.

use super::{Bar, BarChartDescriptor, ChartColor, Orientation};
use crate::core::UrbanMorphologyIndicators;

pub const INDICATOR_CAPTION: &str =
    "Higher aspect ratio and lower SVF generally improve shading and reduce cooling load.";

pub fn indicator_chart(umi: &UrbanMorphologyIndicators) -> BarChartDescriptor {
    BarChartDescriptor {
        title: None,
        orientation: Orientation::Vertical,
        bars: umi
            .values()
            .into_iter()
            .map(|(indicator, value)| Bar::new(indicator.abbreviation(), value, ChartColor::Teal))
            .collect(),
        value_bounds: None,
        value_label: Some("Value".to_string()),
        caption: Some(INDICATOR_CAPTION.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_lists_raw_values_in_order() {
        let chart = indicator_chart(&UrbanMorphologyIndicators::default());
        let bars: Vec<(&str, f64)> = chart
            .bars
            .iter()
            .map(|bar| (bar.label.as_str(), bar.value))
            .collect();
        assert_eq!(
            bars,
            [("AR", 1.5), ("SVF", 0.35), ("PSF", 0.45), ("FAR", 2.5), ("GSI", 0.6)]
        );
        assert!(chart.bars.iter().all(|bar| bar.color == ChartColor::Teal));
        assert_eq!(chart.value_label.as_deref(), Some("Value"));
        assert_eq!(chart.max_value(), 2.5);
    }
}
