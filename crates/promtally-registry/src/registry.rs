//! Name -> counter registry read by exporters.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use promtally_core::error::{MetricsError, Result};
use promtally_core::{LabelKey, LabelSet};

use crate::config::Config;
use crate::counter::Counter;

/// Finished values of one counter, as handed to an exporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterSnapshot {
    pub name: String,
    pub help_text: String,
    pub const_labels: LabelSet,
    pub values: Vec<(LabelKey, f64)>,
}

#[derive(Default)]
pub struct Registry {
    counters: DashMap<String, Arc<Counter>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Build one counter per config entry.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let registry = Self::new();
        for c in &cfg.counters {
            let counter = Counter::new(c.name.clone(), c.help.clone(), c.const_labels.clone())?;
            registry.register(counter)?;
        }
        Ok(registry)
    }

    /// Register a counter; names are unique.
    pub fn register(&self, counter: Counter) -> Result<Arc<Counter>> {
        let name = counter.name().to_string();
        match self.counters.entry(name) {
            dashmap::mapref::entry::Entry::Occupied(e) => {
                tracing::warn!(name = %e.key(), "counter already registered");
                Err(MetricsError::AlreadyRegistered(e.key().clone()))
            }
            dashmap::mapref::entry::Entry::Vacant(e) => {
                tracing::debug!(name = %e.key(), "counter registered");
                let counter = Arc::new(counter);
                e.insert(Arc::clone(&counter));
                Ok(counter)
            }
        }
    }

    pub fn counter(&self, name: &str) -> Option<Arc<Counter>> {
        self.counters.get(name).map(|r| Arc::clone(r.value()))
    }

    /// Registered counters, sorted by name.
    pub fn counters(&self) -> Vec<Arc<Counter>> {
        let mut out: Vec<Arc<Counter>> =
            self.counters.iter().map(|e| Arc::clone(e.value())).collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        out
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.counters.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Snapshot of every counter, sorted by name.
    pub fn snapshot(&self) -> Vec<CounterSnapshot> {
        self.counters()
            .iter()
            .map(|c| CounterSnapshot {
                name: c.name().to_string(),
                help_text: c.help_text().to_string(),
                const_labels: c.const_labels().clone(),
                values: c.snapshot(),
            })
            .collect()
    }
}
