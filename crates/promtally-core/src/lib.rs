//! promtally core: label types, reserved-name rules, and the error surface.
//!
//! This crate carries no runtime or locking dependencies; the registry crate
//! builds stores and collectors on top of it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `MetricsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod labels;

/// Shared result type.
pub use error::{ErrorCode, MetricsError, Result};
pub use labels::{validate_label_names, LabelKey, LabelSet};
