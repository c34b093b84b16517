//! Urban morphology indicators (UMIs).

use super::ranges::RangeSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five morphology indicators the score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    AspectRatio,
    SkyViewFactor,
    PermeableSurfaceFraction,
    FloorAreaRatio,
    GroundSpaceIndex,
}

impl Indicator {
    /// Display order used by every chart and table.
    pub const ALL: [Indicator; 5] = [
        Indicator::AspectRatio,
        Indicator::SkyViewFactor,
        Indicator::PermeableSurfaceFraction,
        Indicator::FloorAreaRatio,
        Indicator::GroundSpaceIndex,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::AspectRatio => "AR",
            Self::SkyViewFactor => "SVF",
            Self::PermeableSurfaceFraction => "PSF",
            Self::FloorAreaRatio => "FAR",
            Self::GroundSpaceIndex => "GSI",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AspectRatio => "Aspect Ratio",
            Self::SkyViewFactor => "Sky View Factor",
            Self::PermeableSurfaceFraction => "Permeable Surface Fraction",
            Self::FloorAreaRatio => "Floor Area Ratio",
            Self::GroundSpaceIndex => "Ground Space Index",
        }
    }

    /// Control label, e.g. `Aspect Ratio (AR)`.
    pub fn label(self) -> String {
        format!("{} ({})", self.name(), self.abbreviation())
    }

    pub fn range(self) -> RangeSpec {
        match self {
            Self::AspectRatio => RangeSpec::new(0.5, 4.0, 0.1, 1.5, 1),
            Self::SkyViewFactor => RangeSpec::new(0.1, 1.0, 0.05, 0.35, 2),
            Self::PermeableSurfaceFraction => RangeSpec::new(0.0, 1.0, 0.05, 0.45, 2),
            Self::FloorAreaRatio => RangeSpec::new(0.5, 5.0, 0.1, 2.5, 1),
            Self::GroundSpaceIndex => RangeSpec::new(0.1, 1.0, 0.05, 0.6, 2),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Immutable snapshot of the five indicator values.
///
/// Fields are public so callers can build arbitrary (even out-of-range)
/// snapshots; the scoring path clamps its output regardless. Use
/// [`UrbanMorphologyIndicators::new`] at input boundaries to clamp each
/// field into its declared range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrbanMorphologyIndicators {
    pub aspect_ratio: f64,
    pub sky_view_factor: f64,
    pub permeable_surface_fraction: f64,
    pub floor_area_ratio: f64,
    pub ground_space_index: f64,
}

impl Default for UrbanMorphologyIndicators {
    fn default() -> Self {
        Self {
            aspect_ratio: Indicator::AspectRatio.range().default,
            sky_view_factor: Indicator::SkyViewFactor.range().default,
            permeable_surface_fraction: Indicator::PermeableSurfaceFraction.range().default,
            floor_area_ratio: Indicator::FloorAreaRatio.range().default,
            ground_space_index: Indicator::GroundSpaceIndex.range().default,
        }
    }
}

impl UrbanMorphologyIndicators {
    /// Build a snapshot with every field clamped into its range.
    pub fn new(
        aspect_ratio: f64,
        sky_view_factor: f64,
        permeable_surface_fraction: f64,
        floor_area_ratio: f64,
        ground_space_index: f64,
    ) -> Self {
        Self {
            aspect_ratio,
            sky_view_factor,
            permeable_surface_fraction,
            floor_area_ratio,
            ground_space_index,
        }
        .clamped()
    }

    pub fn clamped(self) -> Self {
        Indicator::ALL
            .into_iter()
            .fold(self, |umi, indicator| umi.with(indicator, umi.get(indicator)))
    }

    pub fn is_in_range(&self) -> bool {
        Indicator::ALL
            .into_iter()
            .all(|indicator| indicator.range().contains(self.get(indicator)))
    }

    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::AspectRatio => self.aspect_ratio,
            Indicator::SkyViewFactor => self.sky_view_factor,
            Indicator::PermeableSurfaceFraction => self.permeable_surface_fraction,
            Indicator::FloorAreaRatio => self.floor_area_ratio,
            Indicator::GroundSpaceIndex => self.ground_space_index,
        }
    }

    /// Copy with one field replaced; the new value is clamped into range.
    pub fn with(self, indicator: Indicator, value: f64) -> Self {
        let value = indicator.range().clamp(value);
        let mut next = self;
        match indicator {
            Indicator::AspectRatio => next.aspect_ratio = value,
            Indicator::SkyViewFactor => next.sky_view_factor = value,
            Indicator::PermeableSurfaceFraction => next.permeable_surface_fraction = value,
            Indicator::FloorAreaRatio => next.floor_area_ratio = value,
            Indicator::GroundSpaceIndex => next.ground_space_index = value,
        }
        next
    }

    /// Indicator/value pairs in display order.
    pub fn values(&self) -> [(Indicator, f64); 5] {
        Indicator::ALL.map(|indicator| (indicator, self.get(indicator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_control_defaults() {
        let umi = UrbanMorphologyIndicators::default();
        assert_eq!(umi.aspect_ratio, 1.5);
        assert_eq!(umi.sky_view_factor, 0.35);
        assert_eq!(umi.permeable_surface_fraction, 0.45);
        assert_eq!(umi.floor_area_ratio, 2.5);
        assert_eq!(umi.ground_space_index, 0.6);
        assert!(umi.is_in_range());
    }

    #[test]
    fn new_clamps_every_field() {
        let umi = UrbanMorphologyIndicators::new(10.0, -1.0, 2.0, 0.0, 5.0);
        assert_eq!(umi.aspect_ratio, 4.0);
        assert_eq!(umi.sky_view_factor, 0.1);
        assert_eq!(umi.permeable_surface_fraction, 1.0);
        assert_eq!(umi.floor_area_ratio, 0.5);
        assert_eq!(umi.ground_space_index, 1.0);
    }

    #[test]
    fn raw_struct_literal_is_not_clamped() {
        let umi = UrbanMorphologyIndicators {
            aspect_ratio: 9.0,
            ..Default::default()
        };
        assert!(!umi.is_in_range());
        assert_eq!(umi.clamped().aspect_ratio, 4.0);
    }

    #[test]
    fn with_replaces_single_field() {
        let umi = UrbanMorphologyIndicators::default().with(Indicator::FloorAreaRatio, 3.2);
        assert_eq!(umi.floor_area_ratio, 3.2);
        assert_eq!(umi.aspect_ratio, 1.5);
    }

    #[test]
    fn values_follow_display_order() {
        let labels: Vec<_> = UrbanMorphologyIndicators::default()
            .values()
            .iter()
            .map(|(indicator, _)| indicator.abbreviation())
            .collect();
        assert_eq!(labels, ["AR", "SVF", "PSF", "FAR", "GSI"]);
    }

    #[test]
    fn label_combines_name_and_abbreviation() {
        assert_eq!(Indicator::SkyViewFactor.label(), "Sky View Factor (SVF)");
    }
}
