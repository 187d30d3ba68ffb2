use bytemuck::{Pod, Zeroable};
use gridlight_mesh::{LevelMesh, MeshVertex};

/// Vertex layout handed to the GPU: position, normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl From<&MeshVertex> for GpuVertex {
    fn from(v: &MeshVertex) -> Self {
        Self {
            position: v.position.to_array(),
            normal: v.normal.to_array(),
            uv: v.uv.to_array(),
        }
    }
}

/// Convert the level's vertices into the upload layout, preserving order so
/// the level's indices stay valid.
pub fn pack_vertices(level: &LevelMesh) -> Vec<GpuVertex> {
    let packed: Vec<GpuVertex> = level.vertices().iter().map(GpuVertex::from).collect();
    tracing::trace!(
        vertices = packed.len(),
        bytes = packed.len() * std::mem::size_of::<GpuVertex>(),
        "packed level vertices"
    );
    packed
}

pub fn vertex_bytes(vertices: &[GpuVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// The level's 32-bit index buffer as raw bytes.
pub fn index_bytes(level: &LevelMesh) -> &[u8] {
    bytemuck::cast_slice(level.indices())
}
