//! Event-driven driver around a [`Flock`].
//!
//! The driver starts `Uninitialized` with no boids and ignores frames until
//! a population arrives. From then on every frame advances the flock by one
//! full pass. The population is swapped as a whole at the end of each pass,
//! so [`Simulation::current_population`] never observes a half-updated
//! generation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Boid, BoidConfig, Flock, NeighborStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Waiting for the initial population
    Uninitialized,
    /// Advancing once per frame
    Running,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// The initial population has been generated
    PopulationReady(Vec<Boid>),
    /// A frame took `delta_millis` milliseconds
    FrameElapsed { delta_millis: f32 },
}

#[derive(Debug, Clone)]
pub struct Simulation {
    flock: Flock,
    state: SimulationState,
    frames: u64,
}

impl Simulation {
    pub fn new(config: BoidConfig) -> Self {
        Self {
            flock: Flock::new(config),
            state: SimulationState::Uninitialized,
            frames: 0,
        }
    }

    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.flock = self.flock.with_strategy(strategy);
        self
    }

    /// Dispatches an event. Returns whether the population changed.
    pub fn handle(&mut self, event: SimulationEvent) -> bool {
        match event {
            SimulationEvent::PopulationReady(population) => self.on_population_ready(population),
            SimulationEvent::FrameElapsed { delta_millis } => self.on_frame_elapsed(delta_millis),
        }
    }

    /// Installs the initial population and starts running.
    ///
    /// Only the first non-empty population is accepted.
    pub fn on_population_ready(&mut self, population: Vec<Boid>) -> bool {
        if self.state == SimulationState::Running {
            log::warn!(
                "Ignoring population of {} boids: simulation already running",
                population.len()
            );
            return false;
        }
        if population.is_empty() {
            log::warn!("Ignoring empty population");
            return false;
        }
        if population.len() != self.flock.config().population {
            log::debug!(
                "Population has {} boids, configured for {}",
                population.len(),
                self.flock.config().population
            );
        }

        log::info!("Simulation running with {} boids", population.len());
        self.flock.replace(population);
        self.state = SimulationState::Running;
        true
    }

    /// Advances one full pass. A no-op until the population is ready.
    pub fn on_frame_elapsed(&mut self, delta_millis: f32) -> bool {
        if self.state == SimulationState::Uninitialized {
            log::debug!("Frame of {delta_millis}ms before population ready");
            return false;
        }

        self.flock.tick(delta_millis);
        self.frames += 1;
        log::trace!("Frame {} advanced by {delta_millis}ms", self.frames);
        true
    }

    /// Snapshot for renderers
    pub fn current_population(&self) -> &[Boid] {
        self.flock.boids()
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    /// Frames advanced since the simulation started running
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &BoidConfig {
        self.flock.config()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(BoidConfig::default())
    }
}
