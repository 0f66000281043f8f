use glam::Vec3;
use scrollspace::camera::Camera;
use scrollspace::controller::{apply_resize, apply_scroll, Viewport};
use scrollspace::scene::{build_scene, Scene, SceneOptions};
use scrollspace::scroll::ScrollTracker;
use scrollspace::starfield::SplitMix64;

fn fixture() -> (Scene, Camera) {
    build_scene(&SceneOptions::default(), &mut SplitMix64::new(17))
}

#[cfg(test)]
mod scroll_tests {
    use super::*;

    #[test]
    fn test_scroll_offset_minus_1000_moves_camera() {
        let (mut scene, mut camera) = fixture();

        apply_scroll(-1000.0, &mut camera, &mut scene);

        assert!((camera.position.x - 0.2).abs() < 1e-6);
        assert!((camera.position.y - 0.2).abs() < 1e-6);
        assert!((camera.position.z - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_camera_position_ignores_prior_state() {
        let (mut scene, mut camera) = fixture();

        // Wander around first; the final assignment must win outright
        for t in [-5.0, -9000.0, -1.0, -250.0] {
            apply_scroll(t, &mut camera, &mut scene);
        }
        apply_scroll(-1000.0, &mut camera, &mut scene);

        assert_eq!(camera.position, Vec3::new(0.2, 0.2, 10.0));
    }

    #[test]
    fn test_scroll_at_top_restores_initial_z_axis_view() {
        let (mut scene, mut camera) = fixture();

        apply_scroll(-500.0, &mut camera, &mut scene);
        apply_scroll(0.0, &mut camera, &mut scene);

        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn test_each_scroll_event_bumps_torus_rotation() {
        let (mut scene, mut camera) = fixture();
        let before = scene.primary().transform.rotation;

        apply_scroll(-100.0, &mut camera, &mut scene);

        let after = scene.primary().transform.rotation;
        assert!((after.x - before.x - 0.05).abs() < 1e-6);
        assert!((after.y - before.y - 0.075).abs() < 1e-6);
        assert!((after.z - before.z - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_tracker_feeds_handler_with_clamped_offset() {
        let (mut scene, mut camera) = fixture();
        let mut tracker = ScrollTracker::new();

        tracker.scroll_pixels(500.0); // above the top: clamped
        apply_scroll(tracker.offset(), &mut camera, &mut scene);
        assert_eq!(camera.position, Vec3::ZERO);

        tracker.scroll_pixels(-1000.0);
        apply_scroll(tracker.offset(), &mut camera, &mut scene);
        assert_eq!(camera.position, Vec3::new(0.2, 0.2, 10.0));
    }
}

#[cfg(test)]
mod resize_tests {
    use super::*;

    #[test]
    fn test_startup_sizing_800_by_600() {
        let (_, mut camera) = fixture();
        let mut viewport = Viewport::default();

        apply_resize(&mut camera, &mut viewport, 800, 600);

        assert!((camera.aspect - 1.333_333_3).abs() < 1e-5);
        assert_eq!(viewport, Viewport::new(800, 600));
    }

    #[test]
    fn test_repeated_identical_resize_changes_nothing() {
        let (_, mut camera) = fixture();
        let mut viewport = Viewport::default();

        apply_resize(&mut camera, &mut viewport, 800, 600);
        let aspect = camera.aspect;
        let projection = camera.projection_matrix();

        // 1024x768 has the same aspect; projection must not move
        apply_resize(&mut camera, &mut viewport, 1024, 768);
        assert!((camera.aspect - aspect).abs() < 1e-6);
        assert_eq!(camera.projection_matrix(), projection);
        assert_eq!(viewport, Viewport::new(1024, 768));

        apply_resize(&mut camera, &mut viewport, 1024, 768);
        assert_eq!(viewport, Viewport::new(1024, 768));
        assert_eq!(camera.projection_matrix(), projection);
    }

    #[test]
    fn test_aspect_change_recomputes_projection() {
        let (_, mut camera) = fixture();
        let mut viewport = Viewport::default();

        apply_resize(&mut camera, &mut viewport, 800, 600);
        let before = camera.projection_matrix();

        apply_resize(&mut camera, &mut viewport, 1600, 600);
        assert_ne!(camera.projection_matrix(), before);
        assert!((camera.aspect - 1600.0 / 600.0).abs() < 1e-6);
    }
}
