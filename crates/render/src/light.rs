use glam::{Mat4, Vec3};
use gridlight_common::Ray;
use gridlight_mesh::{LevelMesh, PickHit};

/// Position and aim of the level's spot light. Cone and attenuation belong to
/// the shading layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    /// Unit direction the light points in.
    pub direction: Vec3,
}

impl SpotLight {
    /// A zero `direction` falls back to pointing straight down.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Y),
        }
    }

    /// Point the light at `target`. Returns `false` and leaves the direction
    /// unchanged if the target coincides with the light.
    pub fn aim_at(&mut self, target: Vec3) -> bool {
        match (target - self.position).try_normalize() {
            Some(direction) => {
                self.direction = direction;
                true
            }
            None => false,
        }
    }

    /// View matrix for rendering the shadow map. Falls back to +Z as the up
    /// vector when the light points straight up or down.
    pub fn view_matrix(&self) -> Mat4 {
        let up = if self.direction.cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_to_rh(self.position, self.direction, up)
    }
}

/// Re-aim `light` at the point where `ray` hits the level.
pub fn aim_light(light: &mut SpotLight, level: &LevelMesh, ray: &Ray) -> Option<PickHit> {
    let hit = level.pick(ray)?;
    if light.aim_at(hit.point) {
        tracing::debug!(
            cell = %hit.cell,
            x = hit.point.x,
            y = hit.point.y,
            z = hit.point.z,
            "light re-aimed"
        );
    }
    Some(hit)
}
