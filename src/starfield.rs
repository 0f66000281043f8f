use glam::Vec3;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};

pub const STAR_COUNT: usize = 200;
pub const STAR_MIN_RADIUS: f32 = 0.1;
pub const STAR_RADIUS_SPAN: f32 = 0.5;
pub const STAR_POSITION_SPREAD: f32 = 100.0;

/// Uniform random values in [0, 1)
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

/// Deterministic splitmix64-based source for seeded star generation
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for SplitMix64 {
    fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^= z >> 31;
        // Top 24 bits give a float with full mantissa coverage
        (z >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Derives a process-unique seed by hashing with a randomly keyed hasher
pub fn entropy_seed() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    std::process::id().hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub radius: f32,
    pub position: Vec3,
}

/// Uniform sample in a symmetric interval of width `range` centered at 0
pub fn float_spread(range: f32, rng: &mut dyn RandomSource) -> f32 {
    (rng.next_f32() - 0.5) * range
}

/// Generates `count` stars: radius in [0.1, 0.6), each position axis
/// sampled independently in [-50, 50).
pub fn generate(count: usize, rng: &mut dyn RandomSource) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let radius = STAR_MIN_RADIUS + rng.next_f32() * STAR_RADIUS_SPAN;
            let position = Vec3::new(
                float_spread(STAR_POSITION_SPREAD, rng),
                float_spread(STAR_POSITION_SPREAD, rng),
                float_spread(STAR_POSITION_SPREAD, rng),
            );
            Star { radius, position }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix_stays_in_unit_interval() {
        let mut rng = SplitMix64::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "value {v} outside [0, 1)");
        }
    }

    #[test]
    fn splitmix_is_reproducible() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn generated_stars_respect_bounds() {
        let mut rng = SplitMix64::new(1);
        let stars = generate(STAR_COUNT, &mut rng);

        assert_eq!(stars.len(), 200);
        for star in &stars {
            assert!(star.radius >= 0.1, "radius {} below minimum", star.radius);
            assert!(star.radius < 0.6, "radius {} above maximum", star.radius);
            for axis in [star.position.x, star.position.y, star.position.z] {
                assert!((-50.0..50.0).contains(&axis), "position axis {axis} out of range");
            }
        }
    }

    #[test]
    fn same_seed_same_stars() {
        let mut a = SplitMix64::new(99);
        let mut b = SplitMix64::new(99);

        assert_eq!(generate(20, &mut a), generate(20, &mut b));
    }

    #[test]
    fn injected_source_controls_output() {
        struct Fixed(f32);
        impl RandomSource for Fixed {
            fn next_f32(&mut self) -> f32 {
                self.0
            }
        }

        let stars = generate(3, &mut Fixed(0.5));
        for star in &stars {
            assert_eq!(star.radius, 0.1 + 0.5 * 0.5);
            assert_eq!(star.position, Vec3::ZERO);
        }
    }
}
