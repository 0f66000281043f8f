use crate::camera::Camera;
use crate::scene::Scene;
use glam::Vec3;

/// Extra spin applied to the torus on every scroll event
pub const SCROLL_SPIN: Vec3 = Vec3::new(0.05, 0.075, 0.05);
/// Camera x/y displacement per scroll pixel
pub const SCROLL_CAMERA_XY: f32 = -0.0002;
/// Camera z displacement per scroll pixel
pub const SCROLL_CAMERA_Z: f32 = -0.01;

/// Last size applied to the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Scroll handler: bumps the torus spin and repositions the camera.
///
/// Camera position is assigned, not incremented; it is a pure function
/// of the scroll offset `t` regardless of prior state.
pub fn apply_scroll(t: f32, camera: &mut Camera, scene: &mut Scene) {
    scene.primary_mut().transform.rotation += SCROLL_SPIN;

    camera.position.x = t * SCROLL_CAMERA_XY;
    camera.position.y = t * SCROLL_CAMERA_XY;
    camera.position.z = t * SCROLL_CAMERA_Z;
}

/// Resize handler: recomputes the camera aspect and projection and
/// records the new surface size. Runs once eagerly at startup and then
/// on every resize event, with no debouncing; repeated identical sizes
/// are no-ops in effect.
pub fn apply_resize(camera: &mut Camera, viewport: &mut Viewport, width: u32, height: u32) {
    *viewport = Viewport::new(width, height);
    camera.aspect = viewport.aspect();
    camera.update_projection_matrix();
}
