//! Developer tooling: read-only level inspection for the CLI and debugging.
//!
//! # Invariants
//! - Tools never mutate the level they inspect.

mod inspector;

pub use inspector::{CellInfo, LevelInspector, LevelSummary};

pub fn crate_info() -> &'static str {
    "gridlight-tools v0.1.0"
}
