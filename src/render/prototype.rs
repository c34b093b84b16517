//! Urban prototype visualizer.

use super::{AxisBounds, Bar, BarChartDescriptor, ChartColor, Orientation, VisualizationDescriptor};
use crate::core::{LczType, PrototypeTweak};

pub const PLACEHOLDER_TEXT: &str = "Enable prototype tweak to visualize";

/// Value axis of the prototype chart; both bars are percentages.
pub const PERCENT_BOUNDS: AxisBounds = AxisBounds {
    min: 0.0,
    max: 100.0,
};

/// Title line embedding the zone and the three tweak values verbatim.
pub fn prototype_title(lcz: LczType, tweak: &PrototypeTweak) -> String {
    format!(
        "{}\nBD: {}%, Veg: {}%, Height SD: {}m",
        lcz, tweak.building_density_pct, tweak.vegetation_pct, tweak.height_stddev_m
    )
}

/// Describe the prototype panel.
///
/// Disabled always yields the placeholder, whatever `lcz` and `tweak` hold.
/// Enabled without a tweak falls back to the default slider values.
pub fn render_prototype(
    enabled: bool,
    lcz: LczType,
    tweak: Option<PrototypeTweak>,
) -> VisualizationDescriptor {
    if !enabled {
        return VisualizationDescriptor::Placeholder {
            text: PLACEHOLDER_TEXT.to_string(),
        };
    }

    let tweak = tweak.unwrap_or_default();

    VisualizationDescriptor::Chart(BarChartDescriptor {
        title: Some(prototype_title(lcz, &tweak)),
        orientation: Orientation::Horizontal,
        bars: vec![
            Bar::new(
                "Buildings",
                f64::from(tweak.building_density_pct),
                ChartColor::Gray,
            ),
            Bar::new("Vegetation", f64::from(tweak.vegetation_pct), ChartColor::Green),
        ],
        value_bounds: Some(PERCENT_BOUNDS),
        value_label: None,
        caption: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn disabled_renders_placeholder_for_any_input() {
        for lcz in LczType::ALL {
            let descriptor = render_prototype(false, lcz, Some(PrototypeTweak::new(95, 5, 20)));
            assert_eq!(
                descriptor,
                VisualizationDescriptor::Placeholder {
                    text: PLACEHOLDER_TEXT.to_string()
                }
            );
        }
        assert!(render_prototype(false, LczType::LowPlants, None).is_placeholder());
    }

    #[test]
    fn enabled_renders_title_and_two_bars() {
        let tweak = PrototypeTweak::new(60, 30, 5);
        let descriptor = render_prototype(true, LczType::CompactHighRise, Some(tweak));
        let chart = descriptor.chart().unwrap();

        assert_eq!(
            chart.title.as_deref(),
            Some("LCZ 1 - Compact High-Rise\nBD: 60%, Veg: 30%, Height SD: 5m")
        );
        assert_eq!(chart.orientation, Orientation::Horizontal);
        assert_eq!(
            chart.bars,
            vec![
                Bar::new("Buildings", 60.0, ChartColor::Gray),
                Bar::new("Vegetation", 30.0, ChartColor::Green),
            ]
        );
        assert_eq!(chart.value_bounds, Some(PERCENT_BOUNDS));
    }

    #[test]
    fn enabled_without_tweak_uses_defaults() {
        let descriptor = render_prototype(true, LczType::OpenLowRise, None);
        assert_eq!(
            descriptor.chart().and_then(|c| c.title.clone()).as_deref(),
            Some("LCZ 6 - Open Low-Rise\nBD: 60%, Veg: 30%, Height SD: 5m")
        );
    }

    #[test]
    fn render_is_idempotent() {
        let tweak = Some(PrototypeTweak::new(45, 70, 12));
        assert_eq!(
            render_prototype(true, LczType::ScatteredTrees, tweak),
            render_prototype(true, LczType::ScatteredTrees, tweak)
        );
    }
}
