//! Frame rendering for the estimator view.

use super::actions::KEY_HELP;
use super::app::{Control, EstimatorApp};
use super::theme::Theme;
use crate::core::{EstimatorInputs, TweakField};
use crate::render::{
    BarChartDescriptor, Orientation, VisualizationDescriptor, APP_INTRO, APP_TITLE,
    IMPACT_HEADING, PROTOTYPE_HEADING, SCORE_HEADING, SCORE_LABEL,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar as ChartBar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 42;
const GAUGE_WIDTH: usize = 24;
/// Indicator values are fractional; bars are drawn in hundredths.
const INDICATOR_SCALE: f64 = 100.0;

/// Render one frame.
pub fn render(frame: &mut Frame, app: &EstimatorApp) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(frame, app, body[0], &theme);
    render_main(frame, app, body[1], &theme);
    render_footer(frame, chunks[2], &theme);

    if app.help_visible() {
        render_help(frame, &theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(APP_TITLE, theme.title_style())),
        Line::from(Span::styled(APP_INTRO, Style::default().fg(theme.text))),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn render_sidebar(frame: &mut Frame, app: &EstimatorApp, area: Rect, theme: &Theme) {
    let focused = app.focused_control();
    let mut lines = Vec::new();

    for control in app.visible_controls() {
        let is_focused = control == focused;
        let marker = if is_focused { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, control.label()),
            theme.control_style(is_focused),
        )));
        lines.push(control_value_line(control, app.inputs(), theme));
    }

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Input Parameters")
            .border_style(theme.border_style(true)),
    );
    frame.render_widget(sidebar, area);
}

/// Second sidebar line for a control: a gauge for sliders, text otherwise.
fn control_value_line<'a>(control: Control, inputs: &EstimatorInputs, theme: &Theme) -> Line<'a> {
    match control {
        Control::Indicator(indicator) => {
            let range = indicator.range();
            let value = inputs.indicators.get(indicator);
            gauge_line(range.fraction(value), range.format(value), theme)
        }
        Control::Tweak(field) => {
            let value = inputs.tweak.get(field);
            let unit = match field {
                TweakField::HeightStdDev => "m",
                TweakField::BuildingDensity | TweakField::Vegetation => "%",
            };
            gauge_line(field.range().fraction(value), format!("{}{}", value, unit), theme)
        }
        Control::Zone => Line::from(Span::styled(
            format!("    ◂ {} ▸", inputs.lcz),
            Style::default().fg(theme.text),
        )),
        Control::TweakToggle => {
            let text = if inputs.tweak_enabled {
                "    [x] on"
            } else {
                "    [ ] off"
            };
            Line::from(Span::styled(text, Style::default().fg(theme.text)))
        }
    }
}

fn gauge_line<'a>(fraction: f64, value: String, theme: &Theme) -> Line<'a> {
    let filled = (fraction.clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round() as usize;
    Line::from(vec![
        Span::raw("    "),
        Span::styled("━".repeat(filled), theme.gauge_style()),
        Span::styled("─".repeat(GAUGE_WIDTH - filled), theme.gauge_bg_style()),
        Span::styled(format!(" {}", value), Style::default().fg(theme.text)),
    ])
}

fn render_main(frame: &mut Frame, app: &EstimatorApp, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Score
            Constraint::Percentage(55), // Indicator chart
            Constraint::Min(6),         // Prototype
        ])
        .split(area);

    render_score(frame, app, chunks[0], theme);
    render_indicator_chart(frame, &app.evaluation().indicator_chart, chunks[1], theme);
    render_prototype(frame, &app.evaluation().prototype, chunks[2], theme);
}

fn render_score(frame: &mut Frame, app: &EstimatorApp, area: Rect, theme: &Theme) {
    let evaluation = app.evaluation();
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", SCORE_LABEL), Style::default().fg(theme.text)),
        Span::styled(evaluation.metric.clone(), theme.metric_style()),
    ])];

    if let Some(term) = evaluation
        .breakdown
        .as_ref()
        .and_then(|breakdown| breakdown.dominant_term())
    {
        lines.push(Line::from(Span::styled(
            format!(
                "Largest penalty: {} (-{:.1})",
                term.indicator.label(),
                term.penalty
            ),
            theme.hint_style(),
        )));
    }

    let score = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(SCORE_HEADING)
            .border_style(theme.border_style(false)),
    );
    frame.render_widget(score, area);
}

fn render_indicator_chart(
    frame: &mut Frame,
    chart: &BarChartDescriptor,
    area: Rect,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(IMPACT_HEADING)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let bars: Vec<ChartBar> = chart
        .bars
        .iter()
        .map(|bar| {
            ChartBar::default()
                .value((bar.value * INDICATOR_SCALE).round() as u64)
                .text_value(format!("{}", bar.value))
                .label(Line::from(bar.label.clone()))
                .style(Style::default().fg(theme.chart_color(bar.color)))
        })
        .collect();

    let widget = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .direction(to_direction(chart.orientation))
        .bar_width(7)
        .bar_gap(2);
    frame.render_widget(widget, rows[0]);

    if let Some(caption) = &chart.caption {
        frame.render_widget(
            Paragraph::new(caption.as_str()).style(theme.hint_style()),
            rows[1],
        );
    }
}

fn render_prototype(
    frame: &mut Frame,
    descriptor: &VisualizationDescriptor,
    area: Rect,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(PROTOTYPE_HEADING)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chart = match descriptor {
        VisualizationDescriptor::Placeholder { text } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .split(inner);
            frame.render_widget(
                Paragraph::new(text.as_str())
                    .alignment(Alignment::Center)
                    .style(theme.hint_style()),
                rows[1],
            );
            return;
        }
        VisualizationDescriptor::Chart(chart) => chart,
    };

    let title_lines: Vec<Line> = chart
        .title
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(title_lines.len() as u16),
            Constraint::Min(0),
        ])
        .split(inner);
    frame.render_widget(
        Paragraph::new(title_lines).style(Style::default().fg(theme.text)),
        rows[0],
    );

    let bars: Vec<ChartBar> = chart
        .bars
        .iter()
        .map(|bar| {
            ChartBar::default()
                .value(bar.value.round() as u64)
                .text_value(format!("{}%", bar.value))
                .label(Line::from(bar.label.clone()))
                .style(Style::default().fg(theme.chart_color(bar.color)))
        })
        .collect();

    let mut widget = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .direction(to_direction(chart.orientation))
        .bar_width(1)
        .bar_gap(1);
    if let Some(bounds) = chart.value_bounds {
        widget = widget.max(bounds.max.round() as u64);
    }
    frame.render_widget(widget, rows[1]);
}

fn to_direction(orientation: Orientation) -> Direction {
    match orientation {
        Orientation::Vertical => Direction::Vertical,
        Orientation::Horizontal => Direction::Horizontal,
    }
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", theme.title_style()),
        Span::styled(" focus  ", theme.hint_style()),
        Span::styled("←→", theme.title_style()),
        Span::styled(" adjust  ", theme.hint_style()),
        Span::styled("space", theme.title_style()),
        Span::styled(" toggle  ", theme.hint_style()),
        Span::styled("r", theme.title_style()),
        Span::styled(" reset  ", theme.hint_style()),
        Span::styled("?", theme.title_style()),
        Span::styled(" help  ", theme.hint_style()),
        Span::styled("q", theme.title_style()),
        Span::styled(" quit", theme.hint_style()),
    ]));
    frame.render_widget(footer, area);
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered(frame.area(), 52, KEY_HELP.len() as u16 + 4);
    let lines: Vec<Line> = KEY_HELP
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{:<18}", keys), theme.title_style()),
                Span::styled(*description, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys (? to close)")
                .border_style(theme.border_style(true)),
        ),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PLACEHOLDER_TEXT;
    use crate::tui::actions::Action;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &EstimatorApp) -> String {
        let backend = TestBackend::new(140, 45);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn enable_tweak(app: &mut EstimatorApp) {
        while app.focused_control() != Control::TweakToggle {
            app.dispatch(Action::FocusNext);
        }
        app.dispatch(Action::Activate);
    }

    #[test]
    fn default_frame_shows_score_and_placeholder() {
        let screen = draw(&EstimatorApp::new(EstimatorInputs::default()));
        assert!(screen.contains(APP_TITLE));
        assert!(screen.contains("43.5/100"));
        assert!(screen.contains(PLACEHOLDER_TEXT));
        assert!(screen.contains("Aspect Ratio (AR)"));
        assert!(!screen.contains("Building Density"));
    }

    #[test]
    fn enabled_tweak_shows_prototype_title() {
        let mut app = EstimatorApp::new(EstimatorInputs::default());
        enable_tweak(&mut app);
        let screen = draw(&app);
        assert!(screen.contains("LCZ 1 - Compact High-Rise"));
        assert!(screen.contains("BD: 60%, Veg: 30%, Height SD: 5m"));
        assert!(!screen.contains(PLACEHOLDER_TEXT));
        assert!(screen.contains("Building Density"));
    }

    #[test]
    fn help_overlay_lists_keys() {
        let mut app = EstimatorApp::new(EstimatorInputs::default());
        app.dispatch(Action::ToggleHelp);
        let screen = draw(&app);
        assert!(screen.contains("Keys (? to close)"));
        assert!(screen.contains("Reset all inputs"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = EstimatorApp::new(EstimatorInputs::default());
        app.dispatch(Action::ToggleHelp);
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
