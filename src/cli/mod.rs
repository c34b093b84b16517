//! CLI module for coolmap
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, ScoreArgs};
pub use setup::{init_logging, level_for_tui, level_for_verbosity};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
