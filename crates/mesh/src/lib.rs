//! Level mesh generation: turns a floor/solid grid into wall and floor
//! triangle lists plus the per-cell boundaries used for ray picking.
//!
//! # Invariants
//! - A vertex is identified by its grid corner, height level and facing;
//!   equal identities always share one stored vertex.
//! - Wall triangles precede floor triangles in the index buffer, and each
//!   range is triangle-aligned.
//! - Every triangle is clockwise when viewed from the side its normal faces.
//! - A built `LevelMesh` is immutable and safe to share between threads.

mod builder;
mod level;
mod vertex;

pub use builder::MeshBuilder;
pub use level::{LevelMaterials, LevelMesh, PickHit};
pub use vertex::{FaceKind, MeshFace, MeshVertex, NormalDirection, VertexKey};

pub fn crate_info() -> &'static str {
    "gridlight-mesh v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("mesh"));
    }
}
