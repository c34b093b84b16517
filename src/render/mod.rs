//! Chart descriptors.
//!
//! Renderers here are pure: they turn input values into plain data that a
//! presentation layer (the terminal UI, the report writers) knows how to
//! draw. Nothing in this module touches a terminal or a file.

pub mod indicator_chart;
pub mod prototype;

pub use indicator_chart::indicator_chart;
pub use prototype::{render_prototype, PLACEHOLDER_TEXT};

use serde::Serialize;

pub const APP_TITLE: &str = "Urban Energy & Thermal Comfort Evaluator";
pub const APP_INTRO: &str = "Enter Urban Morphology Indicators (UMIs) and select an LCZ type to \
     estimate cooling energy performance and visualize prototype impacts.";
pub const SCORE_HEADING: &str = "Estimated Energy Performance";
pub const SCORE_LABEL: &str = "Estimated Cooling Efficiency Score";
pub const IMPACT_HEADING: &str = "Morphology-Based Impact";
pub const PROTOTYPE_HEADING: &str = "Urban Prototype Visualizer";

/// Named bar colors, mapped to concrete colors by each presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartColor {
    Teal,
    Gray,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Bars grow upward from a category axis
    Vertical,
    /// Bars grow rightward from a category axis
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: ChartColor,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64, color: ChartColor) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Fixed bounds of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

/// A bar chart ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartDescriptor {
    pub title: Option<String>,
    pub orientation: Orientation,
    pub bars: Vec<Bar>,
    /// Fixed value-axis bounds; `None` lets the drawer autoscale
    pub value_bounds: Option<AxisBounds>,
    pub value_label: Option<String>,
    pub caption: Option<String>,
}

impl BarChartDescriptor {
    /// Largest bar value, or 0.0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }
}

/// What the prototype panel should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualizationDescriptor {
    /// No axes; centered explanatory text only
    Placeholder { text: String },
    Chart(BarChartDescriptor),
}

impl VisualizationDescriptor {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    pub fn chart(&self) -> Option<&BarChartDescriptor> {
        match self {
            Self::Chart(chart) => Some(chart),
            Self::Placeholder { .. } => None,
        }
    }
}
