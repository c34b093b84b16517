use serde::{Deserialize, Serialize};

use crate::core::{
    EstimatorInputs, Indicator, LczType, PrototypeTweak, TweakField, UrbanMorphologyIndicators,
};
use crate::io::output::OutputFormat;

/// Root configuration structure for coolmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CoolmapConfig {
    /// Starting indicator values
    #[serde(default)]
    pub indicators: Option<IndicatorsConfig>,

    /// Starting Local Climate Zone
    #[serde(default)]
    pub zone: Option<ZoneConfig>,

    /// Prototype toggle and starting tweak values
    #[serde(default)]
    pub prototype: Option<PrototypeConfig>,

    /// Report output preferences
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IndicatorsConfig {
    pub aspect_ratio: Option<f64>,
    pub sky_view_factor: Option<f64>,
    pub permeable_surface_fraction: Option<f64>,
    pub floor_area_ratio: Option<f64>,
    pub ground_space_index: Option<f64>,
}

impl IndicatorsConfig {
    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::AspectRatio => self.aspect_ratio,
            Indicator::SkyViewFactor => self.sky_view_factor,
            Indicator::PermeableSurfaceFraction => self.permeable_surface_fraction,
            Indicator::FloorAreaRatio => self.floor_area_ratio,
            Indicator::GroundSpaceIndex => self.ground_space_index,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ZoneConfig {
    pub lcz: Option<LczType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PrototypeConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Signed so a negative value is clamped rather than rejecting the file
    pub building_density: Option<i64>,
    pub vegetation: Option<i64>,
    pub height_sd: Option<i64>,
}

impl PrototypeConfig {
    pub fn get(&self, field: TweakField) -> Option<i64> {
        match field {
            TweakField::BuildingDensity => self.building_density,
            TweakField::Vegetation => self.vegetation,
            TweakField::HeightStdDev => self.height_sd,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    /// Disable colors and decorations
    #[serde(default)]
    pub plain: bool,
    /// Include the per-indicator score breakdown
    #[serde(default)]
    pub explain: bool,
}

impl CoolmapConfig {
    /// Starting inputs described by this configuration.
    ///
    /// Missing values fall back to the control defaults. Present values are
    /// clamped into range; clamping is logged, never rejected.
    pub fn inputs(&self) -> EstimatorInputs {
        let indicators = self
            .indicators
            .as_ref()
            .map(configured_indicators)
            .unwrap_or_default();

        let prototype = self.prototype.clone().unwrap_or_default();

        EstimatorInputs {
            indicators,
            lcz: self
                .zone
                .as_ref()
                .and_then(|zone| zone.lcz)
                .unwrap_or_default(),
            tweak_enabled: prototype.enabled,
            tweak: configured_tweak(&prototype),
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn plain(&self) -> bool {
        self.output.as_ref().is_some_and(|output| output.plain)
    }

    pub fn explain(&self) -> bool {
        self.output.as_ref().is_some_and(|output| output.explain)
    }
}

fn configured_indicators(config: &IndicatorsConfig) -> UrbanMorphologyIndicators {
    Indicator::ALL
        .into_iter()
        .fold(UrbanMorphologyIndicators::default(), |umi, indicator| {
            match config.get(indicator) {
                Some(value) => {
                    let clamped = indicator.range().clamp(value);
                    if clamped != value {
                        log::warn!(
                            "Configured {} = {} is out of range, using {}",
                            indicator.abbreviation(),
                            value,
                            clamped
                        );
                    }
                    umi.with(indicator, clamped)
                }
                None => umi,
            }
        })
}

fn configured_tweak(config: &PrototypeConfig) -> PrototypeTweak {
    TweakField::ALL
        .into_iter()
        .fold(PrototypeTweak::default(), |tweak, field| {
            match config.get(field) {
                Some(value) => {
                    let range = field.range();
                    let clamped = value.clamp(i64::from(range.min), i64::from(range.max));
                    if clamped != value {
                        log::warn!(
                            "Configured {} = {} is out of range, using {}",
                            field.label(),
                            value,
                            clamped
                        );
                    }
                    // Already inside the u32 bounds
                    tweak.with(field, u32::try_from(clamped).unwrap_or(range.default))
                }
                None => tweak,
            }
        })
}
