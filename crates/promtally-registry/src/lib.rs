//! promtally registry library entry.
//!
//! Label-keyed stores, the collector/counter pair built on them, a name ->
//! counter registry for exporters, and strict YAML config loading. Consumed
//! by the `promtally` binary and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod collector;
pub mod config;
pub mod counter;
pub mod registry;
pub mod store;

pub use collector::Collector;
pub use counter::Counter;
pub use registry::{CounterSnapshot, Registry};
pub use store::LabelKeyedStore;
