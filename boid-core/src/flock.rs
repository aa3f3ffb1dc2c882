//! A population of boids and the buffers it is stepped through.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{integrator, Boid, BoidConfig, SpatialGrid};

/// How a step finds each boid's neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborStrategy {
    /// Scan the whole population for every boid
    #[default]
    Naive,
    /// Only visit boids in adjacent grid cells
    Grid,
}

/// A fixed-size population advanced with double buffering.
///
/// `boids` always holds a complete generation. A step writes the next
/// generation into `scratch` and then swaps the two.
#[derive(Debug, Clone)]
pub struct Flock {
    boids: Vec<Boid>,
    scratch: Vec<Boid>,
    config: BoidConfig,
    strategy: NeighborStrategy,
    grid: SpatialGrid,
}

impl Flock {
    pub fn new(config: BoidConfig) -> Self {
        Self::with_boids(config, Vec::new())
    }

    pub fn with_boids(config: BoidConfig, boids: Vec<Boid>) -> Self {
        Self {
            scratch: Vec::with_capacity(boids.len()),
            boids,
            grid: SpatialGrid::for_config(&config),
            config,
            strategy: NeighborStrategy::default(),
        }
    }

    /// A flock of `config.population` randomly placed boids
    #[cfg(feature = "std")]
    pub fn random(config: BoidConfig) -> Self {
        Self::with_boids(config, crate::population::generate(&config))
    }

    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> NeighborStrategy {
        self.strategy
    }

    pub fn config(&self) -> &BoidConfig {
        &self.config
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Replaces the whole population
    pub fn replace(&mut self, boids: Vec<Boid>) {
        self.boids = boids;
        self.scratch.clear();
    }

    /// Advances every boid by the integration step `d`
    pub fn step(&mut self, d: f32) {
        match self.strategy {
            NeighborStrategy::Naive => {
                integrator::step(&self.boids, &mut self.scratch, &self.config, d)
            }
            NeighborStrategy::Grid => integrator::step_with_grid(
                &self.boids,
                &mut self.scratch,
                &mut self.grid,
                &self.config,
                d,
            ),
        }
        core::mem::swap(&mut self.boids, &mut self.scratch);
    }

    /// Advances the flock for a frame that took `delta_millis`
    pub fn tick(&mut self, delta_millis: f32) {
        self.step(self.config.time_step(delta_millis));
    }
}
