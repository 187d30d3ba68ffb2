//! Level grid: a fixed width×height occupancy map of floor and solid cells.
//!
//! # Invariants
//! - Every cell has exactly one state; new grids are entirely solid.
//! - Side occupancy is derived on demand, never stored.
//! - Out-of-range cell access is a caller bug and panics.

mod dimensions;
mod grid;
mod layout;
mod sides;

pub use dimensions::WorldDimensions;
pub use grid::{CellState, GridDescription};
pub use layout::{FLOOR_CHAR, GridError, LevelLayout, SOLID_CHAR};
pub use sides::{CellSide, CellSides};

pub fn crate_info() -> &'static str {
    "gridlight-grid v0.1.0"
}
