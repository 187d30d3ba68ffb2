//! Shared geometry primitives used across the gridlight workspace.
//!
//! # Invariants
//! - Planes are stored as `normal · p = d` with a unit normal.
//! - Ray distances are parametric: `t` is measured in multiples of the ray's
//!   direction vector, so a unit direction yields world-space distance.
//! - A miss is `None`, never a sentinel distance.

mod geometry;
mod types;

pub use geometry::{Aabb, PARALLEL_EPSILON, Plane, Ray};
pub use types::CellCoord;

pub fn crate_info() -> &'static str {
    "gridlight-common v0.1.0"
}
