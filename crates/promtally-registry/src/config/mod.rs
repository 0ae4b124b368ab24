//! Registry config loader (strict parsing).

pub mod schema;

use std::fs;

use promtally_core::error::{MetricsError, Result};

pub use schema::{Config, CounterConfig, LoadConfig};

pub fn load_from_file(path: &str) -> Result<Config> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetricsError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<Config> {
    let cfg: Config = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
