use crate::core::LczType;
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coolmap")]
#[command(about = "Urban energy and thermal comfort evaluator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (skips discovery of .coolmap.toml)
    #[arg(long, global = true, env = "COOLMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

impl Cli {
    /// The subcommand to run; `explore` when none was given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Explore)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Adjust indicators interactively and watch the score change
    Explore,

    /// Evaluate one set of indicators and print a report
    Score(ScoreArgs),

    /// List the Local Climate Zone types
    Zones,

    /// Write a default .coolmap.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Flags of `coolmap score`. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ScoreArgs {
    /// Aspect ratio, 0.5 to 4.0
    #[arg(long)]
    pub ar: Option<f64>,

    /// Sky view factor, 0.1 to 1.0
    #[arg(long)]
    pub svf: Option<f64>,

    /// Permeable surface fraction, 0.0 to 1.0
    #[arg(long)]
    pub psf: Option<f64>,

    /// Floor area ratio, 0.5 to 5.0
    #[arg(long)]
    pub far: Option<f64>,

    /// Ground space index, 0.1 to 1.0
    #[arg(long)]
    pub gsi: Option<f64>,

    /// Local Climate Zone type
    #[arg(long, value_enum)]
    pub lcz: Option<LczType>,

    /// Enable the urban prototype visualization
    #[arg(long)]
    pub tweak: bool,

    /// Prototype building density in percent, 10 to 100
    #[arg(long = "building-density")]
    pub building_density: Option<u32>,

    /// Prototype vegetation cover in percent, 0 to 100
    #[arg(long)]
    pub vegetation: Option<u32>,

    /// Prototype building height standard deviation in meters, 0 to 20
    #[arg(long = "height-sd")]
    pub height_sd: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include the per-indicator penalty breakdown
    #[arg(long)]
    pub explain: bool,

    /// Plain output without colors or emoji
    #[arg(long)]
    pub plain: bool,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
