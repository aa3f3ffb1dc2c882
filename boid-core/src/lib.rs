#![cfg_attr(not(feature = "std"), no_std)]

//! Flocking simulation core.
//!
//! Agents follow separation, alignment and cohesion against the previous
//! frame's snapshot, with four virtual boundary images per agent standing in
//! for the world edges. [`Simulation`] is the event-driven entry point used
//! by hosts; [`Flock`] and [`integrator`] expose the same update as plain
//! functions.

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod behavior;
pub mod boundary;
pub mod config;
pub mod flock;
pub mod integrator;
#[cfg(feature = "std")]
pub mod population;
pub mod simulation;
pub mod spatial;
mod vector;

pub use config::{BoidConfig, WorldBounds, DEFAULT_POPULATION};
pub use flock::{Flock, NeighborStrategy};
pub use simulation::{Simulation, SimulationEvent, SimulationState};
pub use spatial::SpatialGrid;
pub use vector::Vector2D;

/// A single boid entity
#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2D::zero(),
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    /// Unit heading, zero for a stationary boid
    pub fn heading(&self) -> Vector2D {
        self.velocity.normalize()
    }
}
