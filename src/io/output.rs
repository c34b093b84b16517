use crate::errors::Result;
use crate::evaluation::Evaluation;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::render::{
    BarChartDescriptor, VisualizationDescriptor, APP_TITLE, IMPACT_HEADING, PROTOTYPE_HEADING,
    SCORE_HEADING, SCORE_LABEL,
};
use crate::scoring::ScoreBreakdown;
use clap::ValueEnum;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Width of text bars in terminal reports, in characters
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait ReportWriter {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

/// Horizontal text bar filling `fraction` of `width` cells.
pub fn text_bar(fraction: f64, width: usize, fill: char) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let cells = (fraction * width as f64).round() as usize;
    std::iter::repeat_n(fill, cells).collect()
}

/// Fraction of the chart's value axis a bar covers.
fn bar_fraction(chart: &BarChartDescriptor, value: f64) -> f64 {
    match chart.value_bounds {
        Some(bounds) => (value - bounds.min) / (bounds.max - bounds.min),
        None => {
            let max = chart.max_value();
            if max > 0.0 {
                value / max
            } else {
                0.0
            }
        }
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> Result<()> {
        let json = serde_json::to_string_pretty(evaluation)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_score(&mut self, evaluation: &Evaluation) -> Result<()> {
        writeln!(self.writer, "# {}", APP_TITLE)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## {}", SCORE_HEADING)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}:** {}", SCORE_LABEL, evaluation.metric)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_indicators(&mut self, evaluation: &Evaluation) -> Result<()> {
        writeln!(self.writer, "## {}", IMPACT_HEADING)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Indicator | Value | Range |")?;
        writeln!(self.writer, "|-----------|-------|-------|")?;
        for (indicator, value) in evaluation.indicators.values() {
            let range = indicator.range();
            writeln!(
                self.writer,
                "| {} | {} | {} - {} |",
                indicator.label(),
                range.format(value),
                range.format(range.min),
                range.format(range.max)
            )?;
        }
        writeln!(self.writer)?;
        if let Some(caption) = &evaluation.indicator_chart.caption {
            writeln!(self.writer, "_{}_", caption)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_prototype(&mut self, evaluation: &Evaluation) -> Result<()> {
        writeln!(self.writer, "## {}", PROTOTYPE_HEADING)?;
        writeln!(self.writer)?;
        match &evaluation.prototype {
            VisualizationDescriptor::Placeholder { text } => {
                writeln!(self.writer, "_{}_", text)?;
            }
            VisualizationDescriptor::Chart(chart) => {
                if let Some(title) = &chart.title {
                    for line in title.lines() {
                        writeln!(self.writer, "**{}**  ", line)?;
                    }
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "| Category | Share (%) |")?;
                writeln!(self.writer, "|----------|-----------|")?;
                for bar in &chart.bars {
                    writeln!(self.writer, "| {} | {} |", bar.label, bar.value)?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, breakdown: &ScoreBreakdown) -> Result<()> {
        writeln!(self.writer, "## Score Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Indicator | Value | Weight | Penalty |")?;
        writeln!(self.writer, "|-----------|-------|--------|---------|")?;
        for term in &breakdown.terms {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} |",
                term.indicator,
                term.indicator.range().format(term.value),
                term.weight,
                term.penalty
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Total penalty {:.2}, raw score {:.2}{}",
            breakdown.total_penalty,
            breakdown.raw_score,
            if breakdown.was_clamped() {
                " (clamped)"
            } else {
                ""
            }
        )?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> Result<()> {
        self.write_score(evaluation)?;
        self.write_indicators(evaluation)?;
        self.write_prototype(evaluation)?;
        if let Some(breakdown) = &evaluation.breakdown {
            self.write_breakdown(breakdown)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            plain: !formatting.emoji.should_use_emoji(),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(if self.plain { ASCII_FULL } else { UTF8_FULL });
        table
    }

    fn fill(&self) -> char {
        if self.plain {
            '#'
        } else {
            '█'
        }
    }

    fn heading(&mut self, emoji: &str, text: &str) -> Result<()> {
        let marker = self.formatter.emoji(emoji, "==");
        writeln!(self.writer)?;
        writeln!(self.writer, "{} {}", marker, self.formatter.header(text))?;
        Ok(())
    }

    fn write_score(&mut self, evaluation: &Evaluation) -> Result<()> {
        let title = format!("{} {}", self.formatter.emoji("🏙️", ""), APP_TITLE);
        writeln!(self.writer, "{}", self.formatter.header(title.trim()))?;
        self.heading("📊", SCORE_HEADING)?;
        writeln!(
            self.writer,
            "{}: {}",
            SCORE_LABEL,
            self.formatter.metric(&evaluation.metric)
        )?;
        Ok(())
    }

    fn write_indicators(&mut self, evaluation: &Evaluation) -> Result<()> {
        self.heading("🌡️", IMPACT_HEADING)?;

        let chart = &evaluation.indicator_chart;
        let mut table = self.table();
        table.set_header(vec!["Indicator", "Value", "Range", "Chart"]);
        for ((indicator, value), bar) in evaluation.indicators.values().iter().zip(&chart.bars) {
            let range = indicator.range();
            table.add_row(vec![
                indicator.label(),
                range.format(*value),
                format!("{} - {}", range.format(range.min), range.format(range.max)),
                text_bar(bar_fraction(chart, bar.value), BAR_WIDTH, self.fill()),
            ]);
        }
        writeln!(self.writer, "{}", table)?;

        if let Some(caption) = &chart.caption {
            writeln!(self.writer, "{}", self.formatter.dim(caption))?;
        }
        Ok(())
    }

    fn write_prototype(&mut self, evaluation: &Evaluation) -> Result<()> {
        self.heading("🧱", PROTOTYPE_HEADING)?;

        match &evaluation.prototype {
            VisualizationDescriptor::Placeholder { text } => {
                writeln!(self.writer, "{}", self.formatter.dim(text))?;
            }
            VisualizationDescriptor::Chart(chart) => {
                if let Some(title) = &chart.title {
                    writeln!(self.writer, "{}", title)?;
                }
                let label_width = chart
                    .bars
                    .iter()
                    .map(|bar| bar.label.len())
                    .max()
                    .unwrap_or(0);
                for bar in &chart.bars {
                    writeln!(
                        self.writer,
                        "{:<width$}  {:<bar_width$}  {}",
                        bar.label,
                        text_bar(bar_fraction(chart, bar.value), BAR_WIDTH, self.fill()),
                        bar.value,
                        width = label_width,
                        bar_width = BAR_WIDTH
                    )?;
                }
            }
        }
        Ok(())
    }

    fn write_breakdown(&mut self, breakdown: &ScoreBreakdown) -> Result<()> {
        self.heading("🔎", "Score Breakdown")?;

        let mut table = self.table();
        table.set_header(vec!["Indicator", "Value", "Weight", "Penalty"]);
        for term in &breakdown.terms {
            table.add_row(vec![
                term.indicator.to_string(),
                term.indicator.range().format(term.value),
                format!("{}", term.weight),
                format!("{:.2}", term.penalty),
            ]);
        }
        writeln!(self.writer, "{}", table)?;
        writeln!(
            self.writer,
            "Total penalty {:.2}, raw score {:.2}{}",
            breakdown.total_penalty,
            breakdown.raw_score,
            if breakdown.was_clamped() {
                " (clamped to 0-100)"
            } else {
                ""
            }
        )?;
        if let Some(term) = breakdown.dominant_term() {
            writeln!(
                self.writer,
                "Largest penalty: {} ({:.2})",
                term.indicator.label(),
                term.penalty
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_evaluation(&mut self, evaluation: &Evaluation) -> Result<()> {
        self.write_score(evaluation)?;
        self.write_indicators(evaluation)?;
        self.write_prototype(evaluation)?;
        if let Some(breakdown) = &evaluation.breakdown {
            self.write_breakdown(breakdown)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
