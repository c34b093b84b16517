//! Color themes and styling for TUI components.

use crate::render::ChartColor;
use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the estimator TUI
pub struct Theme {
    /// Primary accent color (cyan for focused controls)
    pub primary: Color,
    /// Success color (green for the score metric)
    pub success: Color,
    /// Muted color (dark gray for hints and inactive elements)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Concrete color for a chart's named bar color
    pub fn chart_color(&self, color: ChartColor) -> Color {
        match color {
            ChartColor::Teal => Color::Rgb(0, 128, 128),
            ChartColor::Gray => Color::Gray,
            ChartColor::Green => Color::Green,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for control labels (based on focus)
    pub fn control_style(&self, is_focused: bool) -> Style {
        if is_focused {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn gauge_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn gauge_bg_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn metric_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
