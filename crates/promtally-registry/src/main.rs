//! promtally load driver
//!
//! - Config: first CLI argument, or `promtally.yaml`
//! - Builds the registry from config
//! - `load.workers` tasks each `inc` every counter `load.iterations` times
//! - Logs each counter's values and checks nothing was lost

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use promtally_registry::{config, Registry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "promtally.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let registry = Arc::new(Registry::from_config(&cfg)?);

    let labels: Vec<(String, String)> = cfg
        .load
        .labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let labels = Arc::new(labels);

    tracing::info!(
        %path,
        counters = registry.len(),
        workers = cfg.load.workers,
        iterations = cfg.load.iterations,
        "promtally load run starting"
    );

    let counters = registry.counters();
    let mut handles = Vec::with_capacity(cfg.load.workers);
    for worker in 0..cfg.load.workers {
        let counters = counters.clone();
        let labels = Arc::clone(&labels);
        let iterations = cfg.load.iterations;
        handles.push(tokio::task::spawn_blocking(move || {
            let pairs: Vec<(&str, &str)> =
                labels.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            for counter in &counters {
                for _ in 0..iterations {
                    counter.inc(&pairs)?;
                }
            }
            tracing::debug!(worker, "worker done");
            Ok::<(), promtally_core::MetricsError>(())
        }));
    }
    for h in handles {
        h.await??;
    }

    let expected = cfg.load.workers as f64 * cfg.load.iterations as f64;
    for snap in registry.snapshot() {
        for (labels, value) in &snap.values {
            tracing::info!(name = %snap.name, %labels, value, "counter value");
        }
        let got = snap
            .values
            .iter()
            .find(|(k, _)| k == &cfg.load.labels)
            .map(|(_, v)| *v)
            .unwrap_or(0.0);
        if got != expected {
            tracing::error!(name = %snap.name, got, expected, "lost updates detected");
        }
    }

    tracing::info!("promtally load run finished");
    Ok(())
}
