use std::ops::Range;

use glam::Vec3;
use gridlight_common::{CellCoord, Ray};
use gridlight_grid::WorldDimensions;
use gridlight_query::CellBoundary;
use serde::{Deserialize, Serialize};

use crate::vertex::{FaceKind, MeshFace, MeshVertex};

/// Material names the renderer binds for each draw range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMaterials {
    pub wall: String,
    pub floor: String,
}

impl Default for LevelMaterials {
    fn default() -> Self {
        Self {
            wall: "wall".into(),
            floor: "floor".into(),
        }
    }
}

/// Result of a successful pick against the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Parametric distance along the ray.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Floor cell whose boundary produced the hit.
    pub cell: CellCoord,
}

/// Built level geometry plus the per-cell boundaries used for ray queries.
///
/// Produced once by [`crate::MeshBuilder`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LevelMesh {
    dimensions: WorldDimensions,
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    wall_range: Range<usize>,
    floor_range: Range<usize>,
    boundaries: Vec<CellBoundary>,
    materials: LevelMaterials,
}

impl LevelMesh {
    pub(crate) fn new(
        dimensions: WorldDimensions,
        vertices: Vec<MeshVertex>,
        faces: &[MeshFace],
        boundaries: Vec<CellBoundary>,
        materials: LevelMaterials,
    ) -> Self {
        let mut indices = Vec::with_capacity(faces.len() * 3);
        for kind in [FaceKind::Wall, FaceKind::Floor] {
            for face in faces.iter().filter(|f| f.kind == kind) {
                indices.extend_from_slice(&face.indices);
            }
        }
        let wall_len = 3 * faces.iter().filter(|f| f.kind == FaceKind::Wall).count();

        Self {
            dimensions,
            vertices,
            wall_range: 0..wall_len,
            floor_range: wall_len..indices.len(),
            indices,
            boundaries,
            materials,
        }
    }

    pub fn dimensions(&self) -> &WorldDimensions {
        &self.dimensions
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Full index buffer: wall triangles followed by floor triangles.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn wall_range(&self) -> Range<usize> {
        self.wall_range.clone()
    }

    pub fn floor_range(&self) -> Range<usize> {
        self.floor_range.clone()
    }

    pub fn wall_indices(&self) -> &[u32] {
        &self.indices[self.wall_range.clone()]
    }

    pub fn floor_indices(&self) -> &[u32] {
        &self.indices[self.floor_range.clone()]
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn wall_triangle_count(&self) -> usize {
        self.wall_range.len() / 3
    }

    pub fn floor_triangle_count(&self) -> usize {
        self.floor_range.len() / 3
    }

    /// Triangles in index-buffer order.
    pub fn faces(&self) -> impl Iterator<Item = MeshFace> + '_ {
        self.indices.chunks_exact(3).enumerate().map(|(i, tri)| MeshFace {
            indices: [tri[0], tri[1], tri[2]],
            kind: if i * 3 < self.wall_range.end {
                FaceKind::Wall
            } else {
                FaceKind::Floor
            },
        })
    }

    /// One boundary per floor cell, in row-major cell order.
    pub fn boundaries(&self) -> &[CellBoundary] {
        &self.boundaries
    }

    pub fn boundary(&self, cell: CellCoord) -> Option<&CellBoundary> {
        self.boundaries.iter().find(|b| b.cell() == cell)
    }

    pub fn materials(&self) -> &LevelMaterials {
        &self.materials
    }

    /// Nearest distance at which `ray` hits any cell's floor or walls.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.boundaries
            .iter()
            .filter_map(|b| b.intersect(ray))
            .min_by(f32::total_cmp)
    }

    /// Like [`LevelMesh::intersect`], but also reports the hit point and cell.
    pub fn pick(&self, ray: &Ray) -> Option<PickHit> {
        let (distance, cell) = self
            .boundaries
            .iter()
            .filter_map(|b| b.intersect(ray).map(|t| (t, b.cell())))
            .min_by(|a, b| a.0.total_cmp(&b.0))?;

        tracing::trace!(distance, %cell, "level pick hit");
        Some(PickHit {
            distance,
            point: ray.at(distance),
            cell,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeshBuilder;
    use gridlight_grid::GridDescription;

    /// Two rooms separated by a solid column:
    /// ```text
    /// #####
    /// #.#.#
    /// #####
    /// ```
    fn two_rooms() -> LevelMesh {
        let mut grid = GridDescription::new(5, 3);
        grid.set_floor(1, 1);
        grid.set_floor(3, 1);
        MeshBuilder::build(&grid, WorldDimensions::new(1.0, 2.0))
    }

    #[test]
    fn intersect_returns_global_nearest() {
        let level = two_rooms();
        // Enters the first room's box through its left wall plane at x = 1.
        let ray = Ray::new(Vec3::new(0.0, 1.0, 1.5), Vec3::X);
        assert_eq!(level.intersect(&ray), Some(1.0));

        let hit = level.pick(&ray).unwrap();
        assert_eq!(hit.cell, CellCoord::new(1, 1));
        assert_eq!(hit.point, Vec3::new(1.0, 1.0, 1.5));
    }

    #[test]
    fn vertical_ray_hits_the_room_below() {
        let level = two_rooms();
        let ray = Ray::new(Vec3::new(3.5, 10.0, 1.5), Vec3::NEG_Y);
        let hit = level.pick(&ray).unwrap();
        assert_eq!(hit.distance, 10.0);
        assert_eq!(hit.cell, CellCoord::new(3, 1));
        assert_eq!(hit.point, Vec3::new(3.5, 0.0, 1.5));
    }

    #[test]
    fn ray_over_solid_rock_misses() {
        let level = two_rooms();
        let ray = Ray::new(Vec3::new(2.5, 10.0, 1.5), Vec3::NEG_Y);
        assert_eq!(level.intersect(&ray), None);
        assert!(level.pick(&ray).is_none());
    }

    #[test]
    fn miss_is_distinct_from_zero_distance() {
        let level = two_rooms();
        // Starts exactly on the floor of the first room.
        let on_floor = Ray::new(Vec3::new(1.5, 0.0, 1.5), Vec3::NEG_Y);
        assert_eq!(level.intersect(&on_floor), Some(0.0));

        let away = Ray::new(Vec3::new(1.5, 5.0, 1.5), Vec3::Y);
        assert_eq!(level.intersect(&away), None);
    }

    #[test]
    fn boundary_lookup_by_cell() {
        let level = two_rooms();
        assert_eq!(level.boundaries().len(), 2);
        assert!(level.boundary(CellCoord::new(3, 1)).is_some());
        assert!(level.boundary(CellCoord::new(2, 1)).is_none());
    }

    #[test]
    fn faces_follow_draw_ranges() {
        let level = two_rooms();
        let walls = level.faces().filter(|f| f.kind == FaceKind::Wall).count();
        let floors = level.faces().filter(|f| f.kind == FaceKind::Floor).count();
        assert_eq!(walls, level.wall_triangle_count());
        assert_eq!(floors, level.floor_triangle_count());
        assert_eq!(walls, 16);
        assert_eq!(floors, 4);
    }

    #[test]
    fn level_mesh_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LevelMesh>();

        let level = std::sync::Arc::new(two_rooms());
        let ray = Ray::new(Vec3::new(1.5, 4.0, 1.5), Vec3::NEG_Y);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let level = std::sync::Arc::clone(&level);
                std::thread::spawn(move || level.intersect(&ray))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(4.0));
        }
    }
}
