//! Urban cooling efficiency estimator.
//!
//! Five urban morphology indicators map to a cooling efficiency score in
//! [0, 100] through a fixed linear heuristic. The crate also describes two
//! charts (the raw indicator values, and an optional building/vegetation
//! prototype for the selected Local Climate Zone) as plain data that the
//! terminal UI and the report writers draw.
//!
//! ```
//! use coolmap::core::{EstimatorInputs, UrbanMorphologyIndicators};
//! use coolmap::evaluation::evaluate;
//!
//! let evaluation = evaluate(&EstimatorInputs::default());
//! assert_eq!(evaluation.metric, "43.5/100");
//!
//! let open = UrbanMorphologyIndicators::new(0.5, 1.0, 0.0, 0.5, 0.1);
//! assert_eq!(coolmap::scoring::score(&open).metric(), "91.5/100");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod evaluation;
pub mod formatting;
pub mod io;
pub mod render;
pub mod scoring;
pub mod tui;

pub use crate::core::{
    EstimatorInputs, Indicator, LczType, PrototypeTweak, TweakField, UrbanMorphologyIndicators,
};
pub use crate::errors::{CoolmapError, Result};
pub use crate::evaluation::{evaluate, evaluate_explained, Evaluation};
pub use crate::render::{render_prototype, BarChartDescriptor, VisualizationDescriptor};
pub use crate::scoring::{explain, score, CoolingScore, ScoreBreakdown};
