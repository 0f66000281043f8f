use glam::{Mat4, Vec3};

pub const DEFAULT_FOV: f32 = 75.0_f32 * std::f32::consts::PI / 180.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const INITIAL_POSITION: Vec3 = Vec3::new(-3.0, 0.0, 30.0);

/// Perspective camera looking down -Z.
///
/// `aspect` changes do not take effect until `update_projection_matrix`
/// runs; the resize handler always pairs the two.
pub struct Camera {
    pub position: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            position: INITIAL_POSITION,
            fov: DEFAULT_FOV,
            aspect,
            near: NEAR_PLANE,
            far: FAR_PLANE,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recomputes the cached projection from the current parameters
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_position() {
        let camera = Camera::new(800.0 / 600.0);

        assert_eq!(camera.position, Vec3::new(-3.0, 0.0, 30.0));
        assert!((camera.fov - 75.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn view_projection_is_finite() {
        let camera = Camera::new(1.0);
        let vp = camera.view_projection();

        for col in 0..4 {
            assert!(vp.col(col).is_finite());
        }
    }

    #[test]
    fn projection_tracks_aspect_only_after_update() {
        let mut camera = Camera::new(800.0 / 600.0);
        let before = camera.projection_matrix();

        camera.aspect = 1024.0 / 768.0;
        assert_eq!(camera.projection_matrix(), before);

        camera.update_projection_matrix();
        // 1024/768 == 800/600, so the matrix is unchanged either way
        assert_eq!(camera.projection_matrix(), before);

        camera.aspect = 2.0;
        camera.update_projection_matrix();
        assert_ne!(camera.projection_matrix(), before);
    }
}
