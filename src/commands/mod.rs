//! CLI command implementations.
//!
//! - **explore**: interactive estimator (default)
//! - **score**: one-shot evaluation report
//! - **zones**: list Local Climate Zones
//! - **init**: write a default configuration file

pub mod explore;
pub mod init;
pub mod score;
pub mod zones;

pub use explore::explore;
pub use init::{init_config, init_config_in};
pub use score::{handle_score, run_score, ScoreConfig};
pub use zones::list_zones;
