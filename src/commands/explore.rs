use crate::config::resolve_config;
use crate::tui::EstimatorTui;
use anyhow::Result;
use std::path::Path;

/// Start the interactive estimator from the configured starting values.
pub fn explore(config_path: Option<&Path>) -> Result<()> {
    let inputs = resolve_config(config_path)?.inputs();
    log::info!("starting estimator with {:?}", inputs);

    let mut tui = EstimatorTui::new(inputs)?;
    tui.run()
}
