//! The three flocking rules.
//!
//! Each rule receives the subject and an iterator over every candidate
//! neighbour (the real snapshot followed by the subject's boundary images)
//! and applies its own distance filter. The subject is part of the snapshot,
//! so it shows up as its own neighbour at distance zero.

use crate::{Boid, BoidConfig, Vector2D};

/// Neighbours within `separation_radius`, used by separation and cohesion
pub fn in_separation_band(distance: f32, config: &BoidConfig) -> bool {
    distance <= config.separation_radius()
}

/// Neighbours in the annulus `(separation_radius, alignment_radius]`
pub fn in_alignment_band(distance: f32, config: &BoidConfig) -> bool {
    distance > config.separation_radius() && distance <= config.alignment_radius()
}

/// Mean inverse-square repulsion away from close neighbours.
///
/// The squared gap to the neighbour's rim is floored at
/// `config.separation_floor`, which bounds the magnitude when two agents
/// touch exactly.
pub fn separation<'a, I>(boid: &Boid, others: I, config: &BoidConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid>,
{
    let mut steering = Vector2D::zero();
    let mut count = 0;

    for other in others {
        let distance = boid.position.distance(&other.position);
        if in_separation_band(distance, config) {
            let gap = distance - config.agent_radius;
            let magnitude = config.separation_strength / (gap * gap).max(config.separation_floor);
            steering += (boid.position - other.position).normalize() * magnitude;
            count += 1;
        }
    }

    if count > 0 {
        steering / count as f32
    } else {
        Vector2D::zero()
    }
}

/// Mean velocity of the alignment annulus minus the subject's velocity
pub fn alignment<'a, I>(boid: &Boid, others: I, config: &BoidConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in others {
        let distance = boid.position.distance(&other.position);
        if in_alignment_band(distance, config) {
            sum += other.velocity;
            count += 1;
        }
    }

    if count > 0 {
        sum / count as f32 - boid.velocity
    } else {
        Vector2D::zero()
    }
}

/// Centroid of close neighbours minus the subject's position
pub fn cohesion<'a, I>(boid: &Boid, others: I, config: &BoidConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in others {
        let distance = boid.position.distance(&other.position);
        if in_separation_band(distance, config) {
            sum += other.position;
            count += 1;
        }
    }

    if count > 0 {
        sum / count as f32 - boid.position
    } else {
        Vector2D::zero()
    }
}

/// Weighted sum of the three rules.
///
/// Separation keeps its magnitude; alignment and cohesion only contribute a
/// direction.
pub fn steering<'a, I>(boid: &Boid, neighbors: I, config: &BoidConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid> + Clone,
{
    let sep = separation(boid, neighbors.clone(), config) * config.separation_weight;
    let ali = alignment(boid, neighbors.clone(), config).normalize() * config.alignment_weight;
    let coh = cohesion(boid, neighbors, config).normalize() * config.cohesion_weight;
    sep + ali + coh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boid_at(x: f32, y: f32) -> Boid {
        Boid::new(Vector2D::new(x, y), Vector2D::zero())
    }

    fn approx(a: Vector2D, b: Vector2D) -> bool {
        (a.x - b.x).abs() < 1.0e-4 && (a.y - b.y).abs() < 1.0e-4
    }

    #[test]
    fn test_bands() {
        let config = BoidConfig::default();
        assert!(in_separation_band(0.0, &config));
        assert!(in_separation_band(25.0, &config));
        assert!(!in_separation_band(25.1, &config));
        assert!(!in_alignment_band(25.0, &config));
        assert!(in_alignment_band(25.1, &config));
        assert!(in_alignment_band(30.0, &config));
        assert!(!in_alignment_band(30.1, &config));
    }

    #[test]
    fn test_empty_neighbourhood_is_neutral() {
        let config = BoidConfig::default();
        let boid = boid_at(100.0, 100.0);
        let none: [Boid; 0] = [];

        assert_eq!(separation(&boid, none.iter(), &config), Vector2D::zero());
        assert_eq!(alignment(&boid, none.iter(), &config), Vector2D::zero());
        assert_eq!(cohesion(&boid, none.iter(), &config), Vector2D::zero());
        assert_eq!(steering(&boid, none.iter(), &config), Vector2D::zero());
    }

    #[test]
    fn test_self_only_is_neutral() {
        let config = BoidConfig::default();
        let boid = boid_at(100.0, 100.0);
        let flock = [boid.clone()];

        assert_eq!(separation(&boid, flock.iter(), &config), Vector2D::zero());
        assert_eq!(alignment(&boid, flock.iter(), &config), Vector2D::zero());
        assert_eq!(cohesion(&boid, flock.iter(), &config), Vector2D::zero());
    }

    #[test]
    fn test_separation_inverse_square() {
        let config = BoidConfig::default();
        let boid = boid_at(100.0, 100.0);
        // 15 apart: gap 10, magnitude 1000 / 100
        let other = boid_at(115.0, 100.0);

        let force = separation(&boid, [other].iter(), &config);

        assert!(approx(force, Vector2D::new(-10.0, 0.0)));
    }

    #[test]
    fn test_separation_averages_over_count() {
        let config = BoidConfig::default();
        let boid = boid_at(100.0, 100.0);
        let flock = [boid.clone(), boid_at(100.0, 115.0)];

        let force = separation(&boid, flock.iter(), &config);

        assert!(approx(force, Vector2D::new(0.0, -5.0)));
    }

    #[test]
    fn test_separation_saturates_at_contact() {
        let config = BoidConfig::default();
        let boid = boid_at(100.0, 100.0);
        let touching = boid_at(105.0, 100.0);

        let force = separation(&boid, [touching].iter(), &config);

        assert!(force.x.is_finite());
        let ceiling = config.separation_strength / config.separation_floor;
        assert!((force.x + ceiling).abs() < 1.0);
    }

    #[test]
    fn test_alignment_uses_annulus_only() {
        let config = BoidConfig::default();
        let boid = boid_at(100.0, 100.0);
        let near = Boid::new(Vector2D::new(110.0, 100.0), Vector2D::new(0.0, 5.0));
        let annulus = Boid::new(Vector2D::new(128.0, 100.0), Vector2D::new(2.0, 0.0));
        let far = Boid::new(Vector2D::new(200.0, 100.0), Vector2D::new(-9.0, 0.0));

        let force = alignment(&boid, [near, annulus, far].iter(), &config);

        assert_eq!(force, Vector2D::new(2.0, 0.0));
    }

    #[test]
    fn test_alignment_subtracts_own_velocity() {
        let config = BoidConfig::default();
        let boid = Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 1.0));
        let annulus = Boid::new(Vector2D::new(100.0, 127.0), Vector2D::new(3.0, 1.0));

        let force = alignment(&boid, [annulus].iter(), &config);

        assert_eq!(force, Vector2D::new(2.0, 0.0));
    }

    #[test]
    fn test_cohesion_points_to_centroid() {
        let config = BoidConfig::default();
        let boid = boid_at(100.0, 100.0);
        let flock = [boid.clone(), boid_at(110.0, 100.0), boid_at(100.0, 120.0)];

        let force = cohesion(&boid, flock.iter(), &config);

        assert!(approx(force, Vector2D::new(10.0 / 3.0, 20.0 / 3.0)));
    }

    #[test]
    fn test_steering_weights() {
        let config = BoidConfig::default();
        let boid = boid_at(300.0, 320.0);
        let flock = [boid.clone(), boid_at(315.0, 320.0)];

        // separation (-5, 0) * 5, cohesion towards (307.5, 320) normalised * 1
        let force = steering(&boid, flock.iter(), &config);

        assert!(approx(force, Vector2D::new(-24.0, 0.0)));
    }
}
