//! Value types shared by the scoring engine, the renderers and the UI.

pub mod indicators;
pub mod lcz;
pub mod prototype;
pub mod ranges;

pub use indicators::{Indicator, UrbanMorphologyIndicators};
pub use lcz::LczType;
pub use prototype::{PrototypeTweak, TweakField};
pub use ranges::{IntRangeSpec, RangeSpec};

use serde::{Deserialize, Serialize};

/// Everything one evaluation cycle reads: the indicators, the selected zone
/// and the prototype toggle with its values.
///
/// The tweak values are kept while the toggle is off so re-enabling restores
/// them; [`EstimatorInputs::active_tweak`] is what renderers receive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimatorInputs {
    pub indicators: UrbanMorphologyIndicators,
    pub lcz: LczType,
    pub tweak_enabled: bool,
    pub tweak: PrototypeTweak,
}

impl EstimatorInputs {
    pub fn active_tweak(&self) -> Option<PrototypeTweak> {
        self.tweak_enabled.then_some(self.tweak)
    }
}
