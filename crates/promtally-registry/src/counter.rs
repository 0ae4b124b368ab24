//! Monotonic counter built on `Collector`.
//!
//! `add`/`inc` refuse to decrease the value. `set` writes whatever it is
//! given, so resets and test fixtures can use it.

use std::ops::Deref;

use promtally_core::error::{MetricsError, Result};
use promtally_core::LabelKey;

use crate::collector::Collector;

#[derive(Debug)]
pub struct Counter {
    collector: Collector,
}

impl Counter {
    pub fn new(
        name: impl Into<String>,
        help_text: impl Into<String>,
        const_labels: LabelKey,
    ) -> Result<Self> {
        Ok(Self {
            collector: Collector::new(name, help_text, const_labels)?,
        })
    }

    /// Set to an arbitrary value. No monotonicity check.
    pub fn set(&self, labels: &[(&str, &str)], value: f64) -> Result<()> {
        self.collector.set_value(labels, value)
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> Result<f64> {
        self.collector.get_value(labels)
    }

    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) -> Result<()> {
        self.add(labels, 1.0)
    }

    /// Add a non-negative value. Read, sum, and write happen under one lock,
    /// so concurrent adds never lose updates.
    pub fn add(&self, labels: &[(&str, &str)], value: f64) -> Result<()> {
        if value.is_nan() || value < 0.0 {
            return Err(MetricsError::InvalidArgument(format!(
                "counters can't decrease (counter={}, value={value})",
                self.collector.name()
            )));
        }
        self.collector.add_value(labels, value)?;
        Ok(())
    }
}

impl Deref for Counter {
    type Target = Collector;

    fn deref(&self) -> &Collector {
        &self.collector
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use promtally_core::ErrorCode;

    fn counter() -> Counter {
        Counter::new("requests_total", "Total requests.", LabelKey::new()).unwrap()
    }

    #[test]
    fn add_twice_sums() {
        let c = counter();
        c.add(&[("a", "1")], 1.5).unwrap();
        c.add(&[("a", "1")], 2.0).unwrap();
        assert_eq!(c.get(&[("a", "1")]).unwrap(), 3.5);
    }

    #[test]
    fn negative_add_rejected_without_change() {
        let c = counter();
        c.add(&[("a", "1")], 4.0).unwrap();
        let err = c.add(&[("a", "1")], -1.0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert_eq!(c.get(&[("a", "1")]).unwrap(), 4.0);

        let err = c.add(&[("b", "1")], -1.0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert!(c.get(&[("b", "1")]).is_err());
    }

    #[test]
    fn nan_add_rejected() {
        let c = counter();
        assert!(c.add(&[], f64::NAN).is_err());
        assert!(c.is_empty());
    }

    #[test]
    fn set_may_decrease() {
        let c = counter();
        c.add(&[("a", "1")], 10.0).unwrap();
        c.set(&[("a", "1")], 3.0).unwrap();
        assert_eq!(c.get(&[("a", "1")]).unwrap(), 3.0);
    }

    #[test]
    fn inc_on_empty_labels() {
        let c = counter();
        c.inc(&[]).unwrap();
        c.inc(&[]).unwrap();
        assert_eq!(c.get(&[]).unwrap(), 2.0);
    }

    #[test]
    fn inc_with_reserved_label_fails() {
        let c = counter();
        let err = c.inc(&[("__name__", "x")]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidLabel);
        assert!(c.is_empty());
    }
}
