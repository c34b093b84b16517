use anyhow::Result;
use coolmap::cli::{self, Cli, Commands};
use coolmap::commands;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.resolved_command();
    let config = cli.config.as_deref();

    let level = match command {
        Commands::Explore => cli::level_for_tui(cli.verbosity),
        _ => cli::level_for_verbosity(cli.verbosity),
    };
    cli::init_logging(level);

    match command {
        Commands::Explore => commands::explore(config),
        Commands::Score(args) => commands::handle_score(&args, config),
        Commands::Zones => commands::list_zones(),
        Commands::Init { force } => commands::init_config(force),
    }
}
