use gridlight_common::CellCoord;
use gridlight_mesh::LevelMesh;
use serde::Serialize;

/// Level inspector for developer tooling.
///
/// Provides read-only queries against a built level for debugging and CLI
/// output.
pub struct LevelInspector;

impl LevelInspector {
    /// Produce a summary of the level.
    pub fn summary(level: &LevelMesh) -> LevelSummary {
        LevelSummary {
            cells: level.boundaries().len(),
            vertices: level.vertices().len(),
            wall_triangles: level.wall_triangle_count(),
            floor_triangles: level.floor_triangle_count(),
            wall_planes: level.boundaries().iter().map(|b| b.wall_count()).sum(),
        }
    }

    /// Describe the boundary of one floor cell, or `None` for solid cells.
    pub fn inspect_cell(level: &LevelMesh, cell: CellCoord) -> Option<CellInfo> {
        level.boundary(cell).map(|b| CellInfo {
            cell,
            min: b.bounds().min.to_array(),
            max: b.bounds().max.to_array(),
            walls: b.solid_sides().iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Summary of a built level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub cells: usize,
    pub vertices: usize,
    pub wall_triangles: usize,
    pub floor_triangles: usize,
    pub wall_planes: usize,
}

impl std::fmt::Display for LevelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level: cells={} vertices={} wall_triangles={} floor_triangles={} wall_planes={}",
            self.cells, self.vertices, self.wall_triangles, self.floor_triangles, self.wall_planes
        )
    }
}

/// Boundary details of a single floor cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellInfo {
    pub cell: CellCoord,
    pub min: [f32; 3],
    pub max: [f32; 3],
    pub walls: Vec<String>,
}

impl std::fmt::Display for CellInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell {} box=({:.2}, {:.2}, {:.2})..({:.2}, {:.2}, {:.2}) walls=[{}]",
            self.cell,
            self.min[0],
            self.min[1],
            self.min[2],
            self.max[0],
            self.max[1],
            self.max[2],
            self.walls.join(", ")
        )
    }
}
