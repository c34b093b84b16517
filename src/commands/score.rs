//! `coolmap score`: one-shot evaluation and report.

use crate::cli::ScoreArgs;
use crate::config::{resolve_config, CoolmapConfig};
use crate::core::{EstimatorInputs, Indicator, RangeSpec, TweakField};
use crate::evaluation::{evaluate, evaluate_explained};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Everything `score` needs once flags and config are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreConfig {
    pub inputs: EstimatorInputs,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub explain: bool,
    pub plain: bool,
}

impl ScoreConfig {
    /// Merge command-line flags over the configuration file.
    ///
    /// Flags win; anything unset falls back to the file and then to the
    /// control defaults. Every value ends up clamped into range.
    pub fn from_args(args: &ScoreArgs, config: &CoolmapConfig) -> Self {
        Self {
            inputs: apply_args(config.inputs(), args),
            format: args.format.or(config.output_format()).unwrap_or_default(),
            output: args.output.clone(),
            explain: args.explain || config.explain(),
            plain: args.plain || config.plain(),
        }
    }
}

fn indicator_flag(args: &ScoreArgs, indicator: Indicator) -> Option<f64> {
    match indicator {
        Indicator::AspectRatio => args.ar,
        Indicator::SkyViewFactor => args.svf,
        Indicator::PermeableSurfaceFraction => args.psf,
        Indicator::FloorAreaRatio => args.far,
        Indicator::GroundSpaceIndex => args.gsi,
    }
}

fn tweak_flag(args: &ScoreArgs, field: TweakField) -> Option<u32> {
    match field {
        TweakField::BuildingDensity => args.building_density,
        TweakField::Vegetation => args.vegetation,
        TweakField::HeightStdDev => args.height_sd,
    }
}

fn warn_if_clamped(name: &str, range: &RangeSpec, value: f64) {
    if !range.contains(value) {
        log::warn!(
            "--{} {} is outside {} to {}; clamped to {}",
            name,
            value,
            range.format(range.min),
            range.format(range.max),
            range.format(range.clamp(value))
        );
    }
}

/// Overlay the flags that were given onto `inputs`.
///
/// Any prototype value on the command line implies `--tweak`.
pub fn apply_args(inputs: EstimatorInputs, args: &ScoreArgs) -> EstimatorInputs {
    let mut next = inputs;

    for indicator in Indicator::ALL {
        if let Some(value) = indicator_flag(args, indicator) {
            warn_if_clamped(
                &indicator.abbreviation().to_ascii_lowercase(),
                &indicator.range(),
                value,
            );
            next.indicators = next.indicators.with(indicator, value);
        }
    }

    if let Some(lcz) = args.lcz {
        next.lcz = lcz;
    }

    let mut tweak_given = false;
    for field in TweakField::ALL {
        if let Some(value) = tweak_flag(args, field) {
            let range = field.range();
            if !range.contains(value) {
                log::warn!(
                    "{} {} is outside {} to {}; clamped to {}",
                    field.label(),
                    value,
                    range.min,
                    range.max,
                    range.clamp(value)
                );
            }
            next.tweak = next.tweak.with(field, value);
            tweak_given = true;
        }
    }
    next.tweak_enabled = next.tweak_enabled || args.tweak || tweak_given;

    next
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Evaluate and write the report described by `config`.
pub fn run_score(config: &ScoreConfig) -> Result<()> {
    let evaluation = if config.explain {
        evaluate_explained(&config.inputs)
    } else {
        evaluate(&config.inputs)
    };
    log::info!("score {} for {}", evaluation.metric, evaluation.lcz);

    // Color codes make no sense in a file
    let formatting = FormattingConfig::for_plain_flag(config.plain || config.output.is_some());
    let mut writer = create_writer(
        config.format,
        open_output(config.output.as_deref())?,
        formatting,
    );
    writer.write_evaluation(&evaluation)?;

    if let Some(path) = &config.output {
        log::info!("wrote {:?} report to {}", config.format, path.display());
    }
    Ok(())
}

pub fn handle_score(args: &ScoreArgs, config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    run_score(&ScoreConfig::from_args(args, &config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::core::{LczType, PrototypeTweak};
    use indoc::indoc;

    fn config(toml: &str) -> CoolmapConfig {
        parse_config(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn no_flags_no_config_gives_defaults() {
        let merged = ScoreConfig::from_args(&ScoreArgs::default(), &CoolmapConfig::default());
        assert_eq!(merged.inputs, EstimatorInputs::default());
        assert_eq!(merged.format, OutputFormat::Terminal);
        assert!(!merged.explain);
    }

    #[test]
    fn flags_override_config() {
        let config = config(indoc! {r#"
            [indicators]
            aspect_ratio = 3.0
            sky_view_factor = 0.8

            [output]
            format = "markdown"
        "#});
        let args = ScoreArgs {
            ar: Some(1.0),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let merged = ScoreConfig::from_args(&args, &config);
        assert_eq!(merged.inputs.indicators.aspect_ratio, 1.0);
        assert_eq!(merged.inputs.indicators.sky_view_factor, 0.8);
        assert_eq!(merged.format, OutputFormat::Json);
    }

    #[test]
    fn out_of_range_flags_are_clamped() {
        let args = ScoreArgs {
            ar: Some(9.0),
            gsi: Some(-1.0),
            building_density: Some(3),
            ..Default::default()
        };
        let inputs = apply_args(EstimatorInputs::default(), &args);
        assert_eq!(inputs.indicators.aspect_ratio, 4.0);
        assert_eq!(inputs.indicators.ground_space_index, 0.1);
        assert_eq!(inputs.tweak.building_density_pct, 10);
    }

    #[test]
    fn prototype_value_implies_tweak() {
        let args = ScoreArgs {
            vegetation: Some(70),
            lcz: Some(LczType::ScatteredTrees),
            ..Default::default()
        };
        let inputs = apply_args(EstimatorInputs::default(), &args);
        assert!(inputs.tweak_enabled);
        assert_eq!(inputs.lcz, LczType::ScatteredTrees);
        assert_eq!(inputs.active_tweak(), Some(PrototypeTweak::new(60, 70, 5)));
    }

    #[test]
    fn report_is_written_to_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let config = ScoreConfig {
            inputs: EstimatorInputs::default(),
            format: OutputFormat::Json,
            output: Some(path.clone()),
            explain: true,
            plain: false,
        };
        run_score(&config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["metric"], "43.5/100");
        assert!(json["breakdown"].is_object());
    }
}
