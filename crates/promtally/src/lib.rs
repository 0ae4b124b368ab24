//! Top-level facade crate for promtally.
//!
//! Re-exports core types and the registry library so users can depend on a single crate.

pub mod core {
    pub use promtally_core::*;
}

pub mod registry {
    pub use promtally_registry::*;
}
