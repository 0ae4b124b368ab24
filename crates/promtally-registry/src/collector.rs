//! Base collector: name, help text, const labels, and one locked store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use promtally_core::error::{MetricsError, Result};
use promtally_core::{LabelKey, LabelSet};

use crate::store::LabelKeyedStore;

/// Owns exactly one `LabelKeyedStore` behind its own lock.
/// Collectors never contend with each other.
#[derive(Debug)]
pub struct Collector {
    name: String,
    help_text: String,
    const_labels: LabelSet,
    store: Mutex<LabelKeyedStore>,
}

impl Collector {
    /// Fails with `InvalidArgument` on empty name/help and `InvalidLabel`
    /// when `const_labels` uses a reserved name.
    pub fn new(
        name: impl Into<String>,
        help_text: impl Into<String>,
        const_labels: LabelKey,
    ) -> Result<Self> {
        let name = name.into();
        let help_text = help_text.into();

        if name.trim().is_empty() {
            return Err(MetricsError::InvalidArgument("name is required".into()));
        }
        if help_text.trim().is_empty() {
            return Err(MetricsError::InvalidArgument(format!(
                "help text is required (collector={name})"
            )));
        }
        let const_labels = LabelSet::try_from(const_labels)?;

        tracing::debug!(%name, %const_labels, "collector created");
        Ok(Self {
            name,
            help_text,
            const_labels,
            store: Mutex::new(LabelKeyedStore::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn const_labels(&self) -> &LabelSet {
        &self.const_labels
    }

    /// Validate `labels`, then overwrite the stored value.
    pub fn set_value(&self, labels: &[(&str, &str)], value: f64) -> Result<()> {
        let labels = LabelSet::new(labels)?;
        self.store().set(labels.into_key(), value);
        Ok(())
    }

    /// Stored value for exactly `labels`, or `NotFound`.
    pub fn get_value(&self, labels: &[(&str, &str)]) -> Result<f64> {
        let key = LabelKey::from_pairs(labels);
        self.store().get(&key)
    }

    /// Add `delta` to the value for `labels` under a single lock acquisition.
    /// An unseen label set starts from zero.
    pub(crate) fn add_value(&self, labels: &[(&str, &str)], delta: f64) -> Result<f64> {
        let labels = LabelSet::new(labels)?;
        let mut store = self.store();
        let slot = store.entry_or_zero(labels.into_key());
        *slot += delta;
        Ok(*slot)
    }

    /// Number of distinct label sets recorded.
    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    /// Every recorded value, sorted by label key.
    pub fn snapshot(&self) -> Vec<(LabelKey, f64)> {
        self.store().snapshot()
    }

    // Writes are single assignments, so a poisoned store is still consistent.
    fn store(&self) -> MutexGuard<'_, LabelKeyedStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
