//! Virtual boundary images.
//!
//! Every agent sees four phantom copies of itself, one projected onto each
//! edge of the world. They take part in neighbour filtering like any real
//! agent, so an agent close to an edge is pushed away from it and steered
//! along it. Images far from the agent fall out of the distance bands
//! naturally.

use crate::{Boid, Vector2D, WorldBounds};

/// The four images of `boid` on the edges `x = 0`, `x = width`, `y = 0`
/// and `y = height`, in that order.
///
/// Images keep the real velocity and carry no acceleration.
pub fn virtual_images(boid: &Boid, world: &WorldBounds) -> [Boid; 4] {
    let Vector2D { x, y } = boid.position;
    [
        Vector2D::new(0.0, y),
        Vector2D::new(world.width, y),
        Vector2D::new(x, 0.0),
        Vector2D::new(x, world.height),
    ]
    .map(|position| Boid::new(position, boid.velocity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_sit_on_each_edge() {
        let world = WorldBounds::new(640.0, 480.0);
        let boid = Boid {
            position: Vector2D::new(100.0, 200.0),
            velocity: Vector2D::new(1.0, -1.0),
            acceleration: Vector2D::new(3.0, 3.0),
        };

        let images = virtual_images(&boid, &world);

        assert_eq!(images[0].position, Vector2D::new(0.0, 200.0));
        assert_eq!(images[1].position, Vector2D::new(640.0, 200.0));
        assert_eq!(images[2].position, Vector2D::new(100.0, 0.0));
        assert_eq!(images[3].position, Vector2D::new(100.0, 480.0));
        for image in &images {
            assert_eq!(image.velocity, boid.velocity);
            assert_eq!(image.acceleration, Vector2D::zero());
        }
    }

    #[test]
    fn test_images_for_agent_outside_world() {
        let world = WorldBounds::default();
        let boid = Boid::new(Vector2D::new(-20.0, 700.0), Vector2D::zero());

        let images = virtual_images(&boid, &world);

        assert_eq!(images[0].position, Vector2D::new(0.0, 700.0));
        assert_eq!(images[3].position, Vector2D::new(-20.0, 640.0));
    }
}
