use std::collections::HashMap;

use gridlight_common::CellCoord;
use gridlight_grid::{CellSide, GridDescription, WorldDimensions};
use gridlight_query::CellBoundary;

use crate::level::{LevelMaterials, LevelMesh};
use crate::vertex::{FaceKind, MeshFace, MeshVertex, NormalDirection, VertexKey};

/// Converts a [`GridDescription`] into a [`LevelMesh`].
///
/// Each floor cell contributes a floor quad, one wall quad per solid side and
/// a [`CellBoundary`]. Solid cells contribute nothing.
pub struct MeshBuilder {
    dimensions: WorldDimensions,
    materials: LevelMaterials,
    vertices: Vec<MeshVertex>,
    lookup: HashMap<VertexKey, u32>,
    faces: Vec<MeshFace>,
    boundaries: Vec<CellBoundary>,
}

impl MeshBuilder {
    pub fn new(dimensions: WorldDimensions) -> Self {
        Self {
            dimensions,
            materials: LevelMaterials::default(),
            vertices: Vec::new(),
            lookup: HashMap::new(),
            faces: Vec::new(),
            boundaries: Vec::new(),
        }
    }

    pub fn with_materials(mut self, materials: LevelMaterials) -> Self {
        self.materials = materials;
        self
    }

    /// Build a level with default materials.
    pub fn build(grid: &GridDescription, dimensions: WorldDimensions) -> LevelMesh {
        Self::new(dimensions).build_grid(grid)
    }

    /// Emit geometry and boundaries for every floor cell of `grid`.
    pub fn build_grid(mut self, grid: &GridDescription) -> LevelMesh {
        let _span = tracing::info_span!(
            "build_level",
            width = grid.width(),
            height = grid.height()
        )
        .entered();

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_solid(x, y) {
                    continue;
                }
                self.add_cell(grid, x, y);
            }
        }

        tracing::info!(
            cells = self.boundaries.len(),
            vertices = self.vertices.len(),
            triangles = self.faces.len(),
            "level mesh built"
        );

        LevelMesh::new(
            self.dimensions,
            self.vertices,
            &self.faces,
            self.boundaries,
            self.materials,
        )
    }

    fn add_cell(&mut self, grid: &GridDescription, x: usize, y: usize) {
        let cell = CellCoord::new(x, y);
        let (gx, gy) = grid_corner(x, y, grid.width(), grid.height());

        self.add_floor(gx, gy);

        let mut boundary = CellBoundary::new(cell, self.dimensions.cell_bounds(cell));
        for side in grid.solid_sides(x, y).iter() {
            // Wall endpoints as seen from inside the room, facing the wall.
            let (left, right) = match side {
                CellSide::Left => ((gx, gy + 1), (gx, gy)),
                CellSide::Top => ((gx, gy), (gx + 1, gy)),
                CellSide::Right => ((gx + 1, gy), (gx + 1, gy + 1)),
                CellSide::Bottom => ((gx + 1, gy + 1), (gx, gy + 1)),
            };
            tracing::debug!(%cell, %side, "wall");
            self.add_wall(left, right, NormalDirection::for_wall(side));
            boundary.add_solid_side(side);
        }
        self.boundaries.push(boundary);
    }

    fn add_floor(&mut self, x: u32, y: u32) {
        let key = |x, y| VertexKey::new(x, y, false, NormalDirection::Up);
        self.add_quad(
            [key(x, y), key(x, y + 1), key(x + 1, y + 1), key(x + 1, y)],
            FaceKind::Floor,
        );
    }

    fn add_wall(&mut self, left: (u32, u32), right: (u32, u32), direction: NormalDirection) {
        self.add_quad(
            [
                VertexKey::new(left.0, left.1, true, direction),
                VertexKey::new(left.0, left.1, false, direction),
                VertexKey::new(right.0, right.1, false, direction),
                VertexKey::new(right.0, right.1, true, direction),
            ],
            FaceKind::Wall,
        );
    }

    /// Corners `[a, b, c, d]` run around the quad; emits `(a, c, b)` and `(c, a, d)`.
    fn add_quad(&mut self, corners: [VertexKey; 4], kind: FaceKind) {
        let [a, b, c, d] = corners.map(|key| self.find_or_add(key));
        self.faces.push(MeshFace {
            indices: [a, c, b],
            kind,
        });
        self.faces.push(MeshFace {
            indices: [c, a, d],
            kind,
        });
    }

    fn find_or_add(&mut self, key: VertexKey) -> u32 {
        if let Some(&index) = self.lookup.get(&key) {
            return index;
        }
        let index = vertex_index(self.vertices.len());
        self.vertices.push(MeshVertex::from_key(key, &self.dimensions));
        self.lookup.insert(key, index);
        index
    }
}

/// Corner coordinates of cell `(x, y)`. Panics unless the far corner
/// `(x + 1, y + 1)` also fits in `u32`.
fn grid_corner(x: usize, y: usize, width: usize, height: usize) -> (u32, u32) {
    match (u32::try_from(x + 1), u32::try_from(y + 1)) {
        (Ok(x1), Ok(y1)) => (x1 - 1, y1 - 1),
        _ => panic!(
            "cell ({x}, {y}) of the {width}x{height} grid exceeds the u32 vertex coordinate range"
        ),
    }
}

fn vertex_index(len: usize) -> u32 {
    u32::try_from(len)
        .unwrap_or_else(|_| panic!("{len} vertices exceed the u32 index buffer range"))
}
