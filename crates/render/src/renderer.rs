use gridlight_mesh::{FaceKind, LevelMesh};

use crate::camera::TopDownCamera;

/// One indexed draw over a contiguous slice of the level's index buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub kind: FaceKind,
    pub material: String,
    pub first_index: u32,
    pub index_count: u32,
}

/// Draw calls needed to render a level: walls with the wall material, then
/// floors with the floor material. Empty ranges are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawPlan {
    pub calls: Vec<DrawCall>,
}

impl DrawPlan {
    pub fn for_level(level: &LevelMesh) -> Self {
        let materials = level.materials();
        let calls = [
            (FaceKind::Wall, level.wall_range(), &materials.wall),
            (FaceKind::Floor, level.floor_range(), &materials.floor),
        ]
        .into_iter()
        .filter(|(_, range, _)| !range.is_empty())
        .map(|(kind, range, material)| DrawCall {
            kind,
            material: material.clone(),
            first_index: range.start as u32,
            index_count: range.len() as u32,
        })
        .collect();
        Self { calls }
    }

    /// Total triangles across all calls.
    pub fn triangle_count(&self) -> u32 {
        self.calls.iter().map(|c| c.index_count / 3).sum()
    }
}

/// Backend seam for drawing a built level. A backend consumes the level's
/// `DrawPlan` and buffers; the level itself is read-only.
pub trait LevelRenderer {
    type Output;

    /// Draw the wall and floor ranges of `level` from `camera`.
    fn render(&self, level: &LevelMesh, camera: &TopDownCamera) -> Self::Output;
}

/// Writes the draw plan and per-cell walls as text. Used by `gridlight-cli build`.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl LevelRenderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, level: &LevelMesh, camera: &TopDownCamera) -> String {
        let plan = DrawPlan::for_level(level);
        let mut out = String::new();
        out.push_str(&format!(
            "=== Level (cells={}, vertices={}, triangles={}) ===\n",
            level.boundaries().len(),
            level.vertices().len(),
            level.triangle_count()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            camera.eye.x,
            camera.eye.y,
            camera.eye.z,
            camera.target.x,
            camera.target.y,
            camera.target.z,
            camera.fov.to_degrees()
        ));

        for call in &plan.calls {
            out.push_str(&format!(
                "  draw {:?} material={} first={} count={}\n",
                call.kind, call.material, call.first_index, call.index_count
            ));
        }

        for boundary in level.boundaries() {
            let sides: Vec<String> = boundary.solid_sides().iter().map(|s| s.to_string()).collect();
            out.push_str(&format!(
                "  cell {} walls=[{}]\n",
                boundary.cell(),
                sides.join(", ")
            ));
        }

        out
    }
}
