use crate::scene::Scene;
use glam::Vec3;

/// Idle spin added to the torus every tick, in radians per frame.
/// Deliberately not delta-time scaled: the spin rate tracks the display
/// refresh rate, as in the original.
pub const IDLE_SPIN: Vec3 = Vec3::new(0.01, 0.005, 0.01);

/// Drives the per-frame scene update.
///
/// The host event loop calls `tick` once per redraw; `stop` exists so
/// tests can run a bounded number of ticks.
#[derive(Debug)]
pub struct FrameDriver {
    frame_count: u64,
    running: bool,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            running: true,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances the torus spin by one frame. Returns false once stopped.
    pub fn tick(&mut self, scene: &mut Scene) -> bool {
        if !self.running {
            return false;
        }
        scene.primary_mut().transform.rotation += IDLE_SPIN;
        self.frame_count += 1;
        true
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{build_scene, SceneOptions};
    use crate::starfield::SplitMix64;

    fn test_scene() -> Scene {
        build_scene(&SceneOptions::default(), &mut SplitMix64::new(5)).0
    }

    #[test]
    fn tick_advances_rotation_linearly() {
        let mut scene = test_scene();
        let mut driver = FrameDriver::new();

        for _ in 0..100 {
            assert!(driver.tick(&mut scene));
        }

        let rotation = scene.primary().transform.rotation;
        assert!((rotation.x - 1.0).abs() < 1e-4);
        assert!((rotation.y - 0.5).abs() < 1e-4);
        assert!((rotation.z - 1.0).abs() < 1e-4);
        assert_eq!(driver.frame_count(), 100);
    }

    #[test]
    fn stop_halts_ticking() {
        let mut scene = test_scene();
        let mut driver = FrameDriver::new();

        driver.tick(&mut scene);
        driver.stop();
        assert!(!driver.tick(&mut scene));
        assert_eq!(driver.frame_count(), 1);

        let rotation = scene.primary().transform.rotation;
        assert!((rotation.x - 0.01).abs() < 1e-6);
    }
}
