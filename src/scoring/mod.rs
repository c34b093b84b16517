//! Cooling efficiency scoring.
//!
//! The score is a linear penalty model over the five morphology indicators:
//!
//! ```text
//! raw   = 100 - (AR*10 + (1-SVF)*25 + PSF*15 + FAR*5 + GSI*10)
//! score = clamp(raw, 0, 100)
//! ```
//!
//! The coefficients are fixed. They are a heuristic stand-in for a trained
//! model and are kept exactly as published so scores stay comparable.
//!
//! # Examples
//!
//! ```rust
//! use coolmap::core::UrbanMorphologyIndicators;
//! use coolmap::scoring::score;
//!
//! let umi = UrbanMorphologyIndicators::new(0.5, 1.0, 0.0, 0.5, 0.1);
//! assert!((score(&umi).value() - 91.5).abs() < 1e-9);
//! ```

pub mod breakdown;

pub use breakdown::{explain, PenaltyTerm, ScoreBreakdown};

use crate::core::{Indicator, UrbanMorphologyIndicators};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the score scale and the starting value penalties are
/// subtracted from.
pub const MAX_SCORE: f64 = 100.0;

/// Penalty weight applied to each indicator term.
pub fn penalty_weight(indicator: Indicator) -> f64 {
    match indicator {
        Indicator::AspectRatio => 10.0,
        Indicator::SkyViewFactor => 25.0,
        Indicator::PermeableSurfaceFraction => 15.0,
        Indicator::FloorAreaRatio => 5.0,
        Indicator::GroundSpaceIndex => 10.0,
    }
}

/// Weighted penalty contributed by one indicator value.
///
/// Sky view factor is penalized through its complement: a more enclosed
/// canyon (lower SVF) costs more.
pub fn penalty(indicator: Indicator, value: f64) -> f64 {
    let weight = penalty_weight(indicator);
    match indicator {
        Indicator::SkyViewFactor => (1.0 - value) * weight,
        _ => value * weight,
    }
}

/// Sum of all penalty terms, accumulated in display order.
pub fn total_penalty(umi: &UrbanMorphologyIndicators) -> f64 {
    umi.values()
        .into_iter()
        .map(|(indicator, value)| penalty(indicator, value))
        .fold(0.0, |sum, term| sum + term)
}

/// Unclamped score; may fall outside [0, 100] for extreme inputs.
pub fn raw_score(umi: &UrbanMorphologyIndicators) -> f64 {
    MAX_SCORE - total_penalty(umi)
}

/// Cooling efficiency score of an indicator snapshot.
///
/// Never fails: out-of-range input yields a score clamped into [0, 100].
pub fn score(umi: &UrbanMorphologyIndicators) -> CoolingScore {
    CoolingScore::new(raw_score(umi))
}

/// Cooling efficiency on a 0-100 scale.
///
/// Values are clamped to [0.0, 100.0]; NaN maps to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct CoolingScore(f64);

impl CoolingScore {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_SCORE))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Metric string shown to the user, e.g. `43.5/100`.
    pub fn metric(self) -> String {
        format!("{:.1}/{}", self.0, MAX_SCORE as u32)
    }
}

impl fmt::Display for CoolingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn umi(ar: f64, svf: f64, psf: f64, far: f64, gsi: f64) -> UrbanMorphologyIndicators {
        UrbanMorphologyIndicators {
            aspect_ratio: ar,
            sky_view_factor: svf,
            permeable_surface_fraction: psf,
            floor_area_ratio: far,
            ground_space_index: gsi,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn best_case_bounds_score_91_5() {
        assert_close(score(&umi(0.5, 1.0, 0.0, 0.5, 0.1)).value(), 91.5);
    }

    #[test]
    fn worst_case_bounds_clamp_to_zero() {
        let worst = umi(4.0, 0.1, 1.0, 5.0, 1.0);
        assert_close(raw_score(&worst), -12.5);
        assert_eq!(score(&worst).value(), 0.0);
    }

    #[test]
    fn default_inputs_score_43_5() {
        let defaults = UrbanMorphologyIndicators::default();
        assert_close(score(&defaults).value(), 43.5);
        assert_eq!(score(&defaults).metric(), "43.5/100");
    }

    #[test]
    fn raw_above_hundred_is_clamped() {
        let impossible = umi(-5.0, 1.0, 0.0, 0.0, 0.0);
        assert_close(raw_score(&impossible), 150.0);
        assert_eq!(score(&impossible).value(), 100.0);
    }

    #[test]
    fn nan_input_yields_zero() {
        let broken = umi(f64::NAN, 0.5, 0.5, 1.0, 0.5);
        assert_eq!(score(&broken).value(), 0.0);
    }

    #[test]
    fn sky_view_factor_is_penalized_through_complement() {
        assert_close(penalty(Indicator::SkyViewFactor, 0.35), 16.25);
        assert_close(penalty(Indicator::AspectRatio, 1.5), 15.0);
    }

    #[test]
    fn score_is_idempotent() {
        let defaults = UrbanMorphologyIndicators::default();
        assert_eq!(score(&defaults), score(&defaults));
    }

    #[test]
    fn display_uses_one_decimal() {
        assert_eq!(CoolingScore::new(43.46).to_string(), "43.5");
        assert_eq!(CoolingScore::new(0.0).metric(), "0.0/100");
    }
}
