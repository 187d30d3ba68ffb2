//! Ray queries against the walls and floor of individual level cells.
//!
//! # Invariants
//! - Every wall plane's positive half-space is the room interior.
//! - A cell whose bounding box the ray misses never reports a hit.
//! - Queries are read-only and allocation-free.

mod boundary;

pub use boundary::CellBoundary;

pub fn crate_info() -> &'static str {
    "gridlight-query v0.1.0"
}
