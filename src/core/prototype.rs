//! Urban prototype tweak values.

use super::ranges::IntRangeSpec;
use serde::{Deserialize, Serialize};

/// One of the three prototype controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweakField {
    BuildingDensity,
    Vegetation,
    HeightStdDev,
}

impl TweakField {
    pub const ALL: [TweakField; 3] = [
        TweakField::BuildingDensity,
        TweakField::Vegetation,
        TweakField::HeightStdDev,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BuildingDensity => "Building Density (%)",
            Self::Vegetation => "Vegetation Cover (%)",
            Self::HeightStdDev => "Building Height Std. Dev. (m)",
        }
    }

    pub fn range(self) -> IntRangeSpec {
        match self {
            Self::BuildingDensity => IntRangeSpec::new(10, 100, 5, 60),
            Self::Vegetation => IntRangeSpec::new(0, 100, 5, 30),
            Self::HeightStdDev => IntRangeSpec::new(0, 20, 1, 5),
        }
    }
}

/// Building density, vegetation cover and height variance of the prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrototypeTweak {
    pub building_density_pct: u32,
    pub vegetation_pct: u32,
    pub height_stddev_m: u32,
}

impl Default for PrototypeTweak {
    fn default() -> Self {
        Self {
            building_density_pct: TweakField::BuildingDensity.range().default,
            vegetation_pct: TweakField::Vegetation.range().default,
            height_stddev_m: TweakField::HeightStdDev.range().default,
        }
    }
}

impl PrototypeTweak {
    /// Build a tweak with every field clamped into its range.
    pub fn new(building_density_pct: u32, vegetation_pct: u32, height_stddev_m: u32) -> Self {
        Self {
            building_density_pct,
            vegetation_pct,
            height_stddev_m,
        }
        .clamped()
    }

    pub fn clamped(self) -> Self {
        TweakField::ALL
            .into_iter()
            .fold(self, |tweak, field| tweak.with(field, tweak.get(field)))
    }

    pub fn get(&self, field: TweakField) -> u32 {
        match field {
            TweakField::BuildingDensity => self.building_density_pct,
            TweakField::Vegetation => self.vegetation_pct,
            TweakField::HeightStdDev => self.height_stddev_m,
        }
    }

    pub fn with(self, field: TweakField, value: u32) -> Self {
        let value = field.range().clamp(value);
        let mut next = self;
        match field {
            TweakField::BuildingDensity => next.building_density_pct = value,
            TweakField::Vegetation => next.vegetation_pct = value,
            TweakField::HeightStdDev => next.height_stddev_m = value,
        }
        next
    }
}
