//! Properties of the prototype and indicator chart descriptors

use coolmap::core::{LczType, PrototypeTweak, TweakField, UrbanMorphologyIndicators};
use coolmap::render::{indicator_chart, render_prototype, PLACEHOLDER_TEXT};
use coolmap::VisualizationDescriptor;
use proptest::prelude::*;

fn lcz() -> impl Strategy<Value = LczType> {
    prop::sample::select(LczType::ALL.to_vec())
}

fn tweak() -> impl Strategy<Value = PrototypeTweak> {
    let bd = TweakField::BuildingDensity.range();
    let veg = TweakField::Vegetation.range();
    let hsd = TweakField::HeightStdDev.range();
    (bd.min..=bd.max, veg.min..=veg.max, hsd.min..=hsd.max)
        .prop_map(|(b, v, h)| PrototypeTweak::new(b, v, h))
}

proptest! {
    #[test]
    fn prop_disabled_is_always_placeholder(lcz in lcz(), tweak in prop::option::of(tweak())) {
        let descriptor = render_prototype(false, lcz, tweak);
        prop_assert_eq!(
            descriptor,
            VisualizationDescriptor::Placeholder { text: PLACEHOLDER_TEXT.to_string() }
        );
    }

    #[test]
    fn prop_enabled_title_embeds_inputs(lcz in lcz(), tweak in tweak()) {
        let descriptor = render_prototype(true, lcz, Some(tweak));
        let chart = descriptor.chart().expect("enabled render draws a chart");
        let title = chart.title.clone().unwrap_or_default();
        let expected_values = format!(
            "BD: {}%, Veg: {}%, Height SD: {}m",
            tweak.building_density_pct, tweak.vegetation_pct, tweak.height_stddev_m
        );

        prop_assert!(title.starts_with(&lcz.label()));
        prop_assert!(title.ends_with(&expected_values));
        prop_assert_eq!(chart.bars[0].value, f64::from(tweak.building_density_pct));
        prop_assert_eq!(chart.bars[1].value, f64::from(tweak.vegetation_pct));
    }

    #[test]
    fn prop_render_is_idempotent(enabled in any::<bool>(), lcz in lcz(), tweak in tweak()) {
        prop_assert_eq!(
            render_prototype(enabled, lcz, Some(tweak)),
            render_prototype(enabled, lcz, Some(tweak))
        );
    }
}

#[test]
fn test_prototype_axis_is_fixed_percent() {
    let descriptor = render_prototype(true, LczType::LargeLowRise, Some(PrototypeTweak::new(10, 0, 0)));
    let bounds = descriptor.chart().and_then(|chart| chart.value_bounds).unwrap();
    assert_eq!((bounds.min, bounds.max), (0.0, 100.0));
}

#[test]
fn test_indicator_chart_has_five_labelled_bars() {
    let chart = indicator_chart(&UrbanMorphologyIndicators::default());
    let labels: Vec<&str> = chart.bars.iter().map(|bar| bar.label.as_str()).collect();
    assert_eq!(labels, ["AR", "SVF", "PSF", "FAR", "GSI"]);
    assert_eq!(chart.value_label.as_deref(), Some("Value"));
}
