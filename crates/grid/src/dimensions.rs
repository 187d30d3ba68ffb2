use glam::Vec3;
use gridlight_common::{Aabb, CellCoord};

/// World-space sizing of the level: how wide a cell is and how tall the walls are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldDimensions {
    horizontal_size: f32,
    ceiling_height: f32,
}

impl WorldDimensions {
    pub fn new(horizontal_size: f32, ceiling_height: f32) -> Self {
        assert!(
            horizontal_size.is_finite() && horizontal_size > 0.0,
            "horizontal_size must be positive, got {horizontal_size}"
        );
        assert!(
            ceiling_height.is_finite() && ceiling_height > 0.0,
            "ceiling_height must be positive, got {ceiling_height}"
        );
        Self {
            horizontal_size,
            ceiling_height,
        }
    }

    pub fn horizontal_size(&self) -> f32 {
        self.horizontal_size
    }

    pub fn ceiling_height(&self) -> f32 {
        self.ceiling_height
    }

    /// World position of grid corner `(x, y)` at floor or ceiling level.
    pub fn corner_position(&self, x: u32, y: u32, ceiling: bool) -> Vec3 {
        Vec3::new(
            x as f32 * self.horizontal_size,
            if ceiling { self.ceiling_height } else { 0.0 },
            y as f32 * self.horizontal_size,
        )
    }

    /// World box of a cell, from the floor up to the ceiling.
    pub fn cell_bounds(&self, cell: CellCoord) -> Aabb {
        let (x, y) = (cell.x as f32, cell.y as f32);
        let h = self.horizontal_size;
        Aabb::new(
            Vec3::new(x * h, 0.0, y * h),
            Vec3::new((x + 1.0) * h, self.ceiling_height, (y + 1.0) * h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_bounds_scale_with_horizontal_size() {
        let dims = WorldDimensions::new(1.0, 2.0);
        let b = dims.cell_bounds(CellCoord::new(1, 1));
        assert_eq!(b.min, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(b.max, Vec3::new(2.0, 2.0, 2.0));

        let wide = WorldDimensions::new(4.0, 3.0);
        let b = wide.cell_bounds(CellCoord::new(2, 0));
        assert_eq!(b.min, Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(b.max, Vec3::new(12.0, 3.0, 4.0));
    }

    #[test]
    fn corner_position_maps_grid_y_to_world_z() {
        let dims = WorldDimensions::new(2.0, 5.0);
        assert_eq!(dims.corner_position(1, 3, false), Vec3::new(2.0, 0.0, 6.0));
        assert_eq!(dims.corner_position(1, 3, true), Vec3::new(2.0, 5.0, 6.0));
    }

    #[test]
    #[should_panic(expected = "horizontal_size must be positive")]
    fn zero_horizontal_size_panics() {
        WorldDimensions::new(0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "ceiling_height must be positive")]
    fn negative_ceiling_panics() {
        WorldDimensions::new(1.0, -1.0);
    }
}
