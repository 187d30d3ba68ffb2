use glam::Vec3;
use gridlight_common::{Aabb, CellCoord, Plane, Ray};
use gridlight_grid::{CellSide, CellSides};

/// Ray-query volume for one floor cell.
///
/// Holds the cell's world box, the floor plane through the bottom of the box,
/// and one inward-facing plane per solid side. The box is tested first so
/// that rays passing elsewhere in the level are rejected before any plane math.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBoundary {
    cell: CellCoord,
    bounds: Aabb,
    floor: Plane,
    walls: [Option<Plane>; 4],
}

impl CellBoundary {
    pub fn new(cell: CellCoord, bounds: Aabb) -> Self {
        Self {
            cell,
            bounds,
            floor: Plane::from_point_normal(bounds.min, Vec3::Y),
            walls: [None; 4],
        }
    }

    pub fn cell(&self) -> CellCoord {
        self.cell
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn floor_plane(&self) -> &Plane {
        &self.floor
    }

    pub fn wall_plane(&self, side: CellSide) -> Option<&Plane> {
        self.walls[side.index()].as_ref()
    }

    /// Sides that currently have a wall plane.
    pub fn solid_sides(&self) -> CellSides {
        CellSide::ALL
            .into_iter()
            .filter(|s| self.walls[s.index()].is_some())
            .collect()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().flatten().count()
    }

    /// Register a wall on `side`. Returns `false` if the side was already solid.
    pub fn add_solid_side(&mut self, side: CellSide) -> bool {
        let slot = &mut self.walls[side.index()];
        if slot.is_some() {
            return false;
        }

        let (normal, point) = match side {
            CellSide::Left => (Vec3::X, self.bounds.min),
            CellSide::Right => (Vec3::NEG_X, self.bounds.max),
            CellSide::Top => (Vec3::Z, self.bounds.min),
            CellSide::Bottom => (Vec3::NEG_Z, self.bounds.max),
        };
        *slot = Some(Plane::from_point_normal(point, normal));
        true
    }

    /// Nearest non-negative distance at which `ray` meets the floor or a wall
    /// plane of this cell, or `None` if the ray misses the cell's box or every plane.
    ///
    /// Planes are infinite. Once the box accepts the ray, a wall plane crossed
    /// outside the box (for example above the ceiling, before the ray drops in
    /// through the open top) still counts as the nearest hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        ray.intersect_aabb(&self.bounds)?;

        std::iter::once(&self.floor)
            .chain(self.walls.iter().flatten())
            .filter_map(|plane| ray.intersect_plane(plane))
            .min_by(f32::total_cmp)
    }
}
