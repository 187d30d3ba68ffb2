//! Rendering adapter: everything a renderer needs from a built level.
//!
//! # Invariants
//! - Renderers read level geometry; they never mutate it.
//! - A level draws as exactly two indexed ranges: walls, then floors.
//! - Picking and light aiming go through `LevelMesh::pick`, never through
//!   GPU state.
//!
//! # Workaround
//! Provides a trait-based renderer interface with a debug text renderer in
//! place of a GPU backend. Vertex and index data are packed as plain bytes so
//! any backend can upload them once at level load.

mod camera;
mod light;
mod renderer;
mod upload;

pub use camera::TopDownCamera;
pub use light::{SpotLight, aim_light};
pub use renderer::{DebugTextRenderer, DrawCall, DrawPlan, LevelRenderer};
pub use upload::{GpuVertex, index_bytes, pack_vertices, vertex_bytes};

pub fn crate_info() -> &'static str {
    "gridlight-render v0.1.0"
}
