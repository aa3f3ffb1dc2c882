use std::io::{self, Write};

use anyhow::{ensure, Context, Result};
use boid_core::{
    population, Boid, BoidConfig, NeighborStrategy, Simulation, SimulationEvent, Vector2D,
};
use boid_shared::{AgentSnapshot, FlockStats, FrameSnapshot, Vector2};

/// How long and how fast to run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub frames: u64,
    pub delta_millis: f32,
    /// Seed for the initial population; `None` draws from the thread RNG
    pub seed: Option<u64>,
    /// Log statistics every this many frames; 0 only logs the final frame
    pub stats_every: u64,
    pub strategy: NeighborStrategy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            delta_millis: 1000.0 / 60.0,
            seed: None,
            stats_every: 60,
            strategy: NeighborStrategy::Naive,
        }
    }
}

impl RunOptions {
    /// Rejects frame deltas that would corrupt the flock
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.delta_millis.is_finite() && self.delta_millis >= 0.0,
            "frame delta must be finite and non-negative, got {}ms",
            self.delta_millis
        );
        Ok(())
    }
}

fn vector(v: Vector2D) -> Vector2 {
    Vector2::new(v.x, v.y)
}

pub fn agent_snapshot(boid: &Boid) -> AgentSnapshot {
    AgentSnapshot {
        position: vector(boid.position),
        velocity: vector(boid.velocity),
        acceleration: vector(boid.acceleration),
    }
}

pub fn frame_snapshot(frame: u64, elapsed_millis: f64, boids: &[Boid]) -> FrameSnapshot {
    FrameSnapshot {
        frame,
        elapsed_millis,
        agents: boids.iter().map(agent_snapshot).collect(),
    }
}

/// Drives a [`Simulation`] with a fixed frame clock
pub struct Runner<W: Write> {
    simulation: Simulation,
    options: RunOptions,
    snapshots: Option<W>,
    elapsed_millis: f64,
}

impl Runner<io::Sink> {
    /// A runner that does not stream snapshots
    pub fn new(config: BoidConfig, options: RunOptions) -> Self {
        Self::build(config, options, None)
    }
}

impl<W: Write> Runner<W> {
    /// A runner that writes one JSON line per frame to `writer`
    pub fn with_writer(config: BoidConfig, options: RunOptions, writer: W) -> Self {
        Self::build(config, options, Some(writer))
    }

    fn build(config: BoidConfig, options: RunOptions, snapshots: Option<W>) -> Self {
        Self {
            simulation: Simulation::new(config).with_strategy(options.strategy),
            options,
            snapshots,
            elapsed_millis: 0.0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Generates the initial population and hands it to the simulation
    pub fn initialize(&mut self) {
        let config = *self.simulation.config();
        let boids = match self.options.seed {
            Some(seed) => {
                log::debug!("Seeding population with {seed}");
                population::seeded(seed, &config)
            }
            None => population::generate(&config),
        };
        self.simulation
            .handle(SimulationEvent::PopulationReady(boids));
    }

    /// Delivers one frame event and streams the resulting snapshot
    pub fn advance(&mut self) -> Result<()> {
        let delta_millis = self.options.delta_millis;
        if self
            .simulation
            .handle(SimulationEvent::FrameElapsed { delta_millis })
        {
            self.elapsed_millis += f64::from(delta_millis);
        }
        self.write_snapshot()
    }

    fn write_snapshot(&mut self) -> Result<()> {
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };
        let snapshot = frame_snapshot(
            self.simulation.frame_count(),
            self.elapsed_millis,
            self.simulation.current_population(),
        );
        let line = snapshot
            .to_json()
            .context("Failed to serialize frame snapshot")?;
        writeln!(writer, "{line}").context("Failed to write frame snapshot")?;
        Ok(())
    }

    pub fn stats(&self) -> FlockStats {
        let agents: Vec<AgentSnapshot> = self
            .simulation
            .current_population()
            .iter()
            .map(agent_snapshot)
            .collect();
        FlockStats::from_agents(self.simulation.frame_count(), &agents)
    }

    fn log_stats(&self) {
        let stats = self.stats();
        log::info!(
            "frame {}: {} boids, speed {:.3} [{:.3}, {:.3}], accel {:.3}, centroid ({:.1}, {:.1})",
            stats.frame,
            stats.boid_count,
            stats.mean_speed,
            stats.min_speed,
            stats.max_speed,
            stats.mean_acceleration,
            stats.centroid.x,
            stats.centroid.y
        );
    }

    /// Initializes if needed, runs every frame and returns the final stats
    pub fn run(&mut self) -> Result<FlockStats> {
        self.options.validate()?;
        if !self.simulation.is_running() {
            self.initialize();
        }
        log::info!(
            "Running {} frames of {:.3}ms",
            self.options.frames,
            self.options.delta_millis
        );

        for frame in 1..=self.options.frames {
            self.advance()?;
            if self.options.stats_every > 0 && frame % self.options.stats_every == 0 {
                self.log_stats();
            }
        }

        if let Some(writer) = self.snapshots.as_mut() {
            writer.flush().context("Failed to flush snapshots")?;
        }
        self.log_stats();
        Ok(self.stats())
    }

    pub fn into_writer(self) -> Option<W> {
        self.snapshots
    }
}
