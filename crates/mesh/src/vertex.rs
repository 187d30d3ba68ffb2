use glam::{Vec2, Vec3};
use gridlight_grid::{CellSide, WorldDimensions};
use serde::{Deserialize, Serialize};

/// Facing of a mesh vertex. North is world -Z, East is world +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalDirection {
    North,
    East,
    South,
    West,
    Up,
}

impl NormalDirection {
    /// Unit normal in world space.
    pub fn normal(self) -> Vec3 {
        match self {
            NormalDirection::North => Vec3::NEG_Z,
            NormalDirection::East => Vec3::X,
            NormalDirection::South => Vec3::Z,
            NormalDirection::West => Vec3::NEG_X,
            NormalDirection::Up => Vec3::Y,
        }
    }

    /// Facing of a wall built on `side` of a floor cell: always into the room.
    pub fn for_wall(side: CellSide) -> Self {
        match side {
            CellSide::Left => NormalDirection::East,
            CellSide::Top => NormalDirection::South,
            CellSide::Right => NormalDirection::West,
            CellSide::Bottom => NormalDirection::North,
        }
    }
}

/// Identity of a stored vertex. Compared by value so that vertices requested
/// by neighbouring faces collapse without any floating-point comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexKey {
    pub x: u32,
    pub y: u32,
    pub ceiling: bool,
    pub direction: NormalDirection,
}

impl VertexKey {
    pub fn new(x: u32, y: u32, ceiling: bool, direction: NormalDirection) -> Self {
        Self {
            x,
            y,
            ceiling,
            direction,
        }
    }

    /// Texture coordinate. Floors map grid corners directly; walls run U along
    /// the wall (x + y grows by one per cell edge) and V from ceiling to floor.
    pub fn uv(&self) -> Vec2 {
        match self.direction {
            NormalDirection::Up => Vec2::new(self.x as f32, self.y as f32),
            _ => Vec2::new(
                (self.x + self.y) as f32,
                if self.ceiling { 0.0 } else { 1.0 },
            ),
        }
    }
}

/// A vertex ready for upload: identity plus derived attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    pub key: VertexKey,
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl MeshVertex {
    pub fn from_key(key: VertexKey, dims: &WorldDimensions) -> Self {
        Self {
            key,
            position: dims.corner_position(key.x, key.y, key.ceiling),
            normal: key.direction.normal(),
            uv: key.uv(),
        }
    }
}

/// Which draw range a triangle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    Wall,
    Floor,
}

/// One emitted triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshFace {
    pub indices: [u32; 3],
    pub kind: FaceKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_normals_point_away_from_their_side() {
        assert_eq!(NormalDirection::for_wall(CellSide::Left).normal(), Vec3::X);
        assert_eq!(NormalDirection::for_wall(CellSide::Right).normal(), Vec3::NEG_X);
        assert_eq!(NormalDirection::for_wall(CellSide::Top).normal(), Vec3::Z);
        assert_eq!(NormalDirection::for_wall(CellSide::Bottom).normal(), Vec3::NEG_Z);
        assert_eq!(NormalDirection::Up.normal(), Vec3::Y);
    }

    #[test]
    fn uv_layout() {
        let floor = VertexKey::new(3, 2, false, NormalDirection::Up);
        assert_eq!(floor.uv(), Vec2::new(3.0, 2.0));

        let wall_top = VertexKey::new(3, 2, true, NormalDirection::East);
        let wall_bottom = VertexKey::new(3, 2, false, NormalDirection::East);
        assert_eq!(wall_top.uv(), Vec2::new(5.0, 0.0));
        assert_eq!(wall_bottom.uv(), Vec2::new(5.0, 1.0));
    }

    #[test]
    fn vertex_attributes_derive_from_key() {
        let dims = WorldDimensions::new(2.0, 3.0);
        let v = MeshVertex::from_key(VertexKey::new(1, 4, true, NormalDirection::West), &dims);
        assert_eq!(v.position, Vec3::new(2.0, 3.0, 8.0));
        assert_eq!(v.normal, Vec3::NEG_X);
    }

    #[test]
    fn keys_differing_only_in_direction_are_distinct() {
        let a = VertexKey::new(1, 1, false, NormalDirection::North);
        let b = VertexKey::new(1, 1, false, NormalDirection::East);
        assert_ne!(a, b);
        assert_eq!(a, VertexKey::new(1, 1, false, NormalDirection::North));
    }
}
