//! Label-keyed value store.
//!
//! Holds at most one value per distinct `LabelKey`. Entries are created on
//! first write and never removed. There is no locking here; the owning
//! collector serializes access.

use std::collections::HashMap;

use promtally_core::error::{MetricsError, Result};
use promtally_core::LabelKey;

#[derive(Debug, Default)]
pub struct LabelKeyedStore {
    values: HashMap<LabelKey, f64>,
}

impl LabelKeyedStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert or overwrite the value for `key`.
    pub fn set(&mut self, key: LabelKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Exact-match lookup; partial label sets never match.
    pub fn get(&self, key: &LabelKey) -> Result<f64> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| MetricsError::NotFound(format!("no value for labels {key}")))
    }

    /// Slot for `key`, starting at zero when absent.
    pub fn entry_or_zero(&mut self, key: LabelKey) -> &mut f64 {
        self.values.entry(key).or_insert(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LabelKey, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    /// All entries, sorted by key.
    pub fn snapshot(&self) -> Vec<(LabelKey, f64)> {
        let mut out: Vec<(LabelKey, f64)> = self.iter().map(|(k, v)| (k.clone(), v)).collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}
