//! Label keys and validated label sets.
//!
//! A `LabelKey` is the normalized lookup key: pairs are kept sorted by name so
//! that sets built in different orders compare and hash the same. A `LabelSet`
//! is a `LabelKey` that has passed the reserved-name check.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};

/// Label names reserved for system-internal use.
pub const RESERVED_LABEL_NAMES: [&str; 1] = ["job"];
/// Label name prefixes reserved for system-internal use.
pub const RESERVED_LABEL_PREFIXES: [&str; 1] = ["__"];

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Normalized name -> value mapping. No validation is applied.
///
/// When the same name appears more than once, the last pair wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelKey {
    pairs: BTreeMap<String, String>,
}

impl LabelKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(labels: &[(&str, &str)]) -> Self {
        labels.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for LabelKey {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}=\"{}\"", k, escape_label(v))?;
        }
        f.write_str("}")
    }
}

/// Fail with `InvalidLabel` if any name is reserved or carries a reserved prefix.
/// Only names are checked, never values.
pub fn validate_label_names<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for name in names {
        if RESERVED_LABEL_NAMES.contains(&name) {
            return Err(MetricsError::InvalidLabel(format!(
                "label name {name:?} is reserved"
            )));
        }
        if let Some(prefix) = RESERVED_LABEL_PREFIXES
            .iter()
            .find(|p| name.starts_with(*p))
        {
            return Err(MetricsError::InvalidLabel(format!(
                "label name {name:?} uses reserved prefix {prefix:?}"
            )));
        }
    }
    Ok(())
}

/// A label key whose names passed `validate_label_names`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LabelSet(LabelKey);

impl LabelSet {
    /// The only way to build a `LabelSet` from raw pairs.
    pub fn new(labels: &[(&str, &str)]) -> Result<Self> {
        Self::try_from(LabelKey::from_pairs(labels))
    }

    pub fn key(&self) -> &LabelKey {
        &self.0
    }

    pub fn into_key(self) -> LabelKey {
        self.0
    }
}

impl TryFrom<LabelKey> for LabelSet {
    type Error = MetricsError;

    fn try_from(key: LabelKey) -> Result<Self> {
        validate_label_names(key.names())?;
        Ok(Self(key))
    }
}

impl TryFrom<BTreeMap<String, String>> for LabelSet {
    type Error = MetricsError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self> {
        Self::try_from(LabelKey { pairs: map })
    }
}

impl TryFrom<HashMap<String, String>> for LabelSet {
    type Error = MetricsError;

    fn try_from(map: HashMap<String, String>) -> Result<Self> {
        Self::try_from(map.into_iter().collect::<LabelKey>())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
