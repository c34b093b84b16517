//! Per-indicator explanation of a score.

use super::{penalty, penalty_weight, CoolingScore, MAX_SCORE};
use crate::core::{Indicator, UrbanMorphologyIndicators};
use serde::Serialize;

/// One weighted penalty term of the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PenaltyTerm {
    pub indicator: Indicator,
    pub value: f64,
    pub weight: f64,
    pub penalty: f64,
}

/// All penalty terms of an evaluation plus the raw and clamped results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub terms: Vec<PenaltyTerm>,
    pub total_penalty: f64,
    pub raw_score: f64,
    pub score: CoolingScore,
}

impl ScoreBreakdown {
    /// Term with the largest penalty; ties resolve to the earlier indicator.
    pub fn dominant_term(&self) -> Option<&PenaltyTerm> {
        self.terms.iter().fold(None, |best, term| match best {
            Some(current) if current.penalty >= term.penalty => Some(current),
            _ => Some(term),
        })
    }

    /// Whether the raw value fell outside [0, 100] and was clamped.
    pub fn was_clamped(&self) -> bool {
        self.raw_score != self.score.value()
    }
}

/// Explain `umi`'s score term by term.
///
/// Terms are accumulated in the same order as [`super::score`], so
/// `explain(umi).score == score(umi)` holds exactly.
pub fn explain(umi: &UrbanMorphologyIndicators) -> ScoreBreakdown {
    let terms: Vec<PenaltyTerm> = umi
        .values()
        .into_iter()
        .map(|(indicator, value)| PenaltyTerm {
            indicator,
            value,
            weight: penalty_weight(indicator),
            penalty: penalty(indicator, value),
        })
        .collect();

    let total_penalty = terms.iter().fold(0.0, |sum, term| sum + term.penalty);
    let raw_score = MAX_SCORE - total_penalty;

    log::debug!(
        "score breakdown: penalty {:.3}, raw {:.3}",
        total_penalty,
        raw_score
    );

    ScoreBreakdown {
        terms,
        total_penalty,
        raw_score,
        score: CoolingScore::new(raw_score),
    }
}
