//! Runtime setup for the CLI: logging initialization.

use log::LevelFilter;

/// Log level for a `-v` count: warn by default, then info, debug, trace.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Default level while the TUI owns the terminal.
///
/// Log lines written to stderr would tear the alternate screen, so only
/// errors get through unless the user asked for more with `-v`.
pub fn level_for_tui(verbosity: u8) -> LevelFilter {
    if verbosity == 0 {
        LevelFilter::Error
    } else {
        level_for_verbosity(verbosity)
    }
}

/// Initialize `env_logger`. `RUST_LOG`, when set, wins over `default_level`.
pub fn init_logging(default_level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A second init (e.g. from tests) is harmless
    let _ = builder.format_timestamp(None).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn tui_is_quiet_by_default() {
        assert_eq!(level_for_tui(0), LevelFilter::Error);
        assert_eq!(level_for_tui(2), LevelFilter::Debug);
    }
}
