//! Random initial populations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Boid, BoidConfig, Vector2D};

/// Closed spawn interval along one axis. Collapses to the centre when the
/// margin leaves no room.
fn spawn_range(extent: f32, margin: f32) -> (f32, f32) {
    if extent - margin >= margin {
        (margin, extent - margin)
    } else {
        (extent / 2.0, extent / 2.0)
    }
}

/// A boid placed inside the spawn margin, heading in a random direction at a
/// random speed in `[min_speed, max_speed]`, with no acceleration.
pub fn random_boid<R: Rng + ?Sized>(rng: &mut R, config: &BoidConfig) -> Boid {
    let (x_min, x_max) = spawn_range(config.world.width, config.spawn_margin);
    let (y_min, y_max) = spawn_range(config.world.height, config.spawn_margin);
    let position = Vector2D::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max));

    let heading = loop {
        let direction = Vector2D::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if !direction.is_zero() {
            break direction.normalize();
        }
    };
    let speed = rng.gen_range(config.min_speed.min(config.max_speed)..=config.max_speed);

    Boid::new(position, heading * speed)
}

pub fn random_population<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    config: &BoidConfig,
) -> Vec<Boid> {
    (0..count).map(|_| random_boid(rng, config)).collect()
}

/// `config.population` boids from the thread-local generator
pub fn generate(config: &BoidConfig) -> Vec<Boid> {
    random_population(&mut rand::thread_rng(), config.population, config)
}

/// Reproducible population for a given seed
pub fn seeded(seed: u64, config: &BoidConfig) -> Vec<Boid> {
    random_population(&mut StdRng::seed_from_u64(seed), config.population, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count() {
        let config = BoidConfig::default();
        assert_eq!(generate(&config).len(), 100);

        let small = BoidConfig {
            population: 7,
            ..config
        };
        assert_eq!(generate(&small).len(), 7);
    }

    #[test]
    fn test_spawn_within_margin() {
        let config = BoidConfig {
            min_speed: 1.0,
            max_speed: 3.0,
            ..BoidConfig::default()
        };
        for boid in seeded(7, &config) {
            assert!(boid.position.x >= 50.0 && boid.position.x <= 590.0);
            assert!(boid.position.y >= 50.0 && boid.position.y <= 590.0);
            assert!(boid.speed() >= 1.0 - 1.0e-4 && boid.speed() <= 3.0 + 1.0e-4);
            assert_eq!(boid.acceleration, Vector2D::zero());
        }
    }

    #[test]
    fn test_default_speed_is_pinned() {
        for boid in seeded(11, &BoidConfig::default()) {
            assert!((boid.speed() - 2.0).abs() < 1.0e-4);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let config = BoidConfig::default();
        assert_eq!(seeded(42, &config), seeded(42, &config));
        assert_ne!(seeded(42, &config), seeded(43, &config));
    }

    #[test]
    fn test_narrow_world_spawns_at_centre() {
        let config = BoidConfig {
            world: crate::WorldBounds::new(60.0, 640.0),
            ..BoidConfig::default()
        };
        for boid in seeded(3, &config) {
            assert_eq!(boid.position.x, 30.0);
        }
    }
}
