use glam::{Mat4, Vec3};
use gridlight_common::Ray;

/// Perspective camera looking down onto the level at an angle.
/// Used to turn cursor positions into pick rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopDownCamera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for TopDownCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::new(5.0, 0.0, 5.0),
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 50.0,
        }
    }
}

impl TopDownCamera {
    /// Camera above `center`, pulled back towards +Z by half its height so
    /// the view direction is never parallel to the up vector.
    pub fn framing(center: Vec3, height: f32) -> Self {
        Self {
            eye: center + Vec3::new(0.0, height, height * 0.5),
            target: center,
            far: height * 10.0,
            ..Self::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray through normalized screen coordinates (`0,0` top-left, `1,1`
    /// bottom-right), starting on the near plane.
    pub fn screen_ray(&self, u: f32, v: f32) -> Ray {
        let ndc_x = u * 2.0 - 1.0;
        let ndc_y = 1.0 - v * 2.0;
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, (far - near).normalize())
    }
}
