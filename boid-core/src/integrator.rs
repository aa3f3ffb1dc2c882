//! One simulation step for a whole population.
//!
//! Every boid of the next generation is computed from the tick-start
//! snapshot only. Results go into a separate buffer; nothing written during
//! a pass is visible to the rest of that pass.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{behavior, boundary, Boid, BoidConfig, SpatialGrid, Vector2D};

/// Kinematic update of one boid.
///
/// Position and velocity advance with the boid's previous acceleration;
/// `acceleration` is only stored for the next step. The new speed is
/// clamped into `[min_speed, max_speed]` keeping the direction.
pub fn integrate(boid: &Boid, acceleration: Vector2D, config: &BoidConfig, d: f32) -> Boid {
    let position = boid.position + boid.velocity * d + boid.acceleration * (0.5 * d * d);
    let raw_velocity = boid.velocity + boid.acceleration * d;
    let velocity = raw_velocity.normalize() * config.clamp_speed(raw_velocity.magnitude());

    Boid {
        position,
        velocity,
        acceleration,
    }
}

/// Next state of `boid` scanning the whole snapshot
pub fn advance(boid: &Boid, snapshot: &[Boid], config: &BoidConfig, d: f32) -> Boid {
    let images = boundary::virtual_images(boid, &config.world);
    let neighbors = snapshot.iter().chain(images.iter());
    let acceleration = behavior::steering(boid, neighbors, config);
    integrate(boid, acceleration, config, d)
}

/// Next state of `boid` visiting only `candidates`, indices into `snapshot`
/// in ascending order.
pub fn advance_among(
    boid: &Boid,
    snapshot: &[Boid],
    candidates: &[usize],
    config: &BoidConfig,
    d: f32,
) -> Boid {
    let images = boundary::virtual_images(boid, &config.world);
    let neighbors = candidates
        .iter()
        .map(move |&index| &snapshot[index])
        .chain(images.iter());
    let acceleration = behavior::steering(boid, neighbors, config);
    integrate(boid, acceleration, config, d)
}

/// Writes the next generation of `current` into `next`
pub fn step(current: &[Boid], next: &mut Vec<Boid>, config: &BoidConfig, d: f32) {
    next.clear();
    next.extend(current.iter().map(|boid| advance(boid, current, config, d)));
}

/// Same result as [`step`], with neighbour candidates taken from `grid`
pub fn step_with_grid(
    current: &[Boid],
    next: &mut Vec<Boid>,
    grid: &mut SpatialGrid,
    config: &BoidConfig,
    d: f32,
) {
    grid.rebuild(current);
    next.clear();

    let mut candidates = Vec::new();
    for boid in current {
        grid.candidates_into(boid.position, &mut candidates);
        next.push(advance_among(boid, current, &candidates, config, d));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vector2D, b: Vector2D) -> bool {
        (a.x - b.x).abs() < 1.0e-4 && (a.y - b.y).abs() < 1.0e-4
    }

    #[test]
    fn test_integrate_uses_previous_acceleration() {
        let config = BoidConfig {
            min_speed: 0.0,
            max_speed: 100.0,
            ..BoidConfig::default()
        };
        let boid = Boid {
            position: Vector2D::new(10.0, 10.0),
            velocity: Vector2D::new(1.0, 0.0),
            acceleration: Vector2D::new(0.0, 2.0),
        };
        let fresh = Vector2D::new(-50.0, -50.0);

        let next = integrate(&boid, fresh, &config, 2.0);

        // 10 + 1*2, 10 + 0.5*2*4
        assert!(approx(next.position, Vector2D::new(12.0, 14.0)));
        assert!(approx(next.velocity, Vector2D::new(1.0, 4.0)));
        assert_eq!(next.acceleration, fresh);
    }

    #[test]
    fn test_integrate_clamps_speed_keeping_direction() {
        let config = BoidConfig::default();
        let boid = Boid::new(Vector2D::zero(), Vector2D::new(30.0, 40.0));

        let next = integrate(&boid, Vector2D::zero(), &config, 1.0);

        assert!(approx(next.velocity, Vector2D::new(1.2, 1.6)));
    }

    #[test]
    fn test_integrate_raises_slow_boids_to_min_speed() {
        let config = BoidConfig::default();
        let boid = Boid::new(Vector2D::zero(), Vector2D::new(0.0, 0.5));

        let next = integrate(&boid, Vector2D::zero(), &config, 1.0);

        assert!(approx(next.velocity, Vector2D::new(0.0, 2.0)));
    }

    #[test]
    fn test_stationary_boid_stays_stationary() {
        let config = BoidConfig::default();
        let boid = Boid::new(Vector2D::new(5.0, 5.0), Vector2D::zero());

        let next = integrate(&boid, Vector2D::zero(), &config, 1.0);

        assert_eq!(next.velocity, Vector2D::zero());
        assert_eq!(next.position, boid.position);
    }

    #[test]
    fn test_step_preserves_order_and_length() {
        let config = BoidConfig::default();
        let current = vec![
            Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(2.0, 0.0)),
            Boid::new(Vector2D::new(400.0, 300.0), Vector2D::new(0.0, 2.0)),
        ];
        let mut next = vec![Boid::new(Vector2D::zero(), Vector2D::zero()); 7];

        step(&current, &mut next, &config, 1.0);

        assert_eq!(next.len(), 2);
        assert!(approx(next[0].position, Vector2D::new(102.0, 100.0)));
        assert!(approx(next[1].position, Vector2D::new(400.0, 302.0)));
    }

    #[test]
    fn test_step_reads_only_snapshot() {
        let config = BoidConfig::default();
        let current = vec![
            Boid::new(Vector2D::new(300.0, 320.0), Vector2D::new(0.0, 2.0)),
            Boid::new(Vector2D::new(315.0, 320.0), Vector2D::new(0.0, -2.0)),
        ];
        let mut next = Vec::new();

        step(&current, &mut next, &config, 1.0);

        let reversed: Vec<Boid> = current.iter().rev().cloned().collect();
        let mut next_reversed = Vec::new();
        step(&reversed, &mut next_reversed, &config, 1.0);

        assert_eq!(next[0], next_reversed[1]);
        assert_eq!(next[1], next_reversed[0]);
    }
}
