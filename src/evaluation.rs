//! One evaluation cycle: current inputs in, score and chart descriptors out.

use crate::core::{EstimatorInputs, LczType, UrbanMorphologyIndicators};
use crate::render::{indicator_chart, render_prototype, BarChartDescriptor, VisualizationDescriptor};
use crate::scoring::{explain, score, CoolingScore, ScoreBreakdown};
use serde::Serialize;

/// Everything a presentation layer needs to draw one frame or one report.
///
/// Built from scratch for every input change; holds no reference back to
/// the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub indicators: UrbanMorphologyIndicators,
    pub lcz: LczType,
    pub score: CoolingScore,
    pub metric: String,
    pub indicator_chart: BarChartDescriptor,
    pub prototype: VisualizationDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

pub fn evaluate(inputs: &EstimatorInputs) -> Evaluation {
    let score = score(&inputs.indicators);
    log::trace!("evaluated {:?} -> {}", inputs, score);

    Evaluation {
        indicators: inputs.indicators,
        lcz: inputs.lcz,
        score,
        metric: score.metric(),
        indicator_chart: indicator_chart(&inputs.indicators),
        prototype: render_prototype(inputs.tweak_enabled, inputs.lcz, inputs.active_tweak()),
        breakdown: None,
    }
}

/// Same as [`evaluate`], with the per-indicator breakdown attached.
pub fn evaluate_explained(inputs: &EstimatorInputs) -> Evaluation {
    Evaluation {
        breakdown: Some(explain(&inputs.indicators)),
        ..evaluate(inputs)
    }
}
