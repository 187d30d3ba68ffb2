use gridlight_common::CellCoord;

use crate::sides::{CellSide, CellSides};

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Solid,
    Floor,
}

/// Fixed-size occupancy grid describing a single-storey level.
///
/// Cells are stored row-major (`y * width + x`). The grid never resizes; a
/// level is described once and handed to the mesh builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDescription {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl GridDescription {
    /// Create an all-solid grid.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid must be at least 1x1, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![CellState::Solid; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn state(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        self.state(x, y) == CellState::Solid
    }

    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.state(x, y) == CellState::Floor
    }

    pub fn set_floor(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.cells[i] = CellState::Floor;
    }

    pub fn set_solid(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.cells[i] = CellState::Solid;
    }

    /// Sides of `(x, y)` that border a solid cell or the edge of the grid.
    pub fn solid_sides(&self, x: usize, y: usize) -> CellSides {
        // Validates the coordinate even though the cell's own state is unused.
        let _ = self.index(x, y);

        let mut sides = CellSides::NONE;
        if x == 0 || self.is_solid(x - 1, y) {
            sides.insert(CellSide::Left);
        }
        if y == 0 || self.is_solid(x, y - 1) {
            sides.insert(CellSide::Top);
        }
        if x == self.width - 1 || self.is_solid(x + 1, y) {
            sides.insert(CellSide::Right);
        }
        if y == self.height - 1 || self.is_solid(x, y + 1) {
            sides.insert(CellSide::Bottom);
        }
        sides
    }

    /// Floor cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.is_floor(x, y))
                .map(move |x| CellCoord::new(x, y))
        })
    }

    /// Number of floor cells.
    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == CellState::Floor).count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }
}
