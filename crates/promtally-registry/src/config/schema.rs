use serde::Deserialize;

use promtally_core::error::{MetricsError, Result};
use promtally_core::{validate_label_names, LabelKey};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub version: u32,

    #[serde(default)]
    pub counters: Vec<CounterConfig>,

    #[serde(default)]
    pub load: LoadConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        if self.counters.is_empty() {
            return Err(MetricsError::Config("counters must not be empty".into()));
        }

        self.load.validate()?;

        Ok(())
    }
}

/// One counter definition. Name, help, and const labels are checked when
/// the registry builds the counter.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterConfig {
    pub name: String,
    pub help: String,

    #[serde(default)]
    pub const_labels: LabelKey,
}

/// Load run driven by the binary.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default = "default_iterations")]
    pub iterations: u64,

    #[serde(default)]
    pub labels: LabelKey,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            iterations: default_iterations(),
            labels: LabelKey::default(),
        }
    }
}

impl LoadConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=256).contains(&self.workers) {
            return Err(MetricsError::InvalidArgument(
                "load.workers must be between 1 and 256".into(),
            ));
        }
        if !(1..=1_000_000).contains(&self.iterations) {
            return Err(MetricsError::InvalidArgument(
                "load.iterations must be between 1 and 1000000".into(),
            ));
        }
        validate_label_names(self.labels.names())?;
        Ok(())
    }
}

fn default_workers() -> usize {
    4
}
fn default_iterations() -> u64 {
    1000
}
