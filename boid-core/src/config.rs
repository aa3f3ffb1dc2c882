/// Default number of agents in a flock
pub const DEFAULT_POPULATION: usize = 100;

/// Rectangular simulation area with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(640.0, 640.0)
    }
}

/// Configuration for the boid simulation
///
/// `min_speed` and `max_speed` both default to 2, which pins every agent to
/// a constant speed after its first tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidConfig {
    pub world: WorldBounds,
    pub population: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    pub agent_radius: f32,
    /// Numerator of the inverse-square separation law
    pub separation_strength: f32,
    /// Lower bound on the squared gap `(distance - agent_radius)²`
    pub separation_floor: f32,
    /// Separation and cohesion reach, in agent radii
    pub separation_reach: f32,
    /// Outer edge of the alignment annulus, in agent radii
    pub alignment_reach: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    /// Frame milliseconds per unit of simulation time
    pub time_scale: f32,
    /// Inset from every edge when spawning agents
    pub spawn_margin: f32,
}

impl Default for BoidConfig {
    fn default() -> Self {
        Self {
            world: WorldBounds::default(),
            population: DEFAULT_POPULATION,
            min_speed: 2.0,
            max_speed: 2.0,
            agent_radius: 5.0,
            separation_strength: 1000.0,
            separation_floor: 0.01,
            separation_reach: 5.0,
            alignment_reach: 6.0,
            separation_weight: 5.0,
            alignment_weight: 2.0,
            cohesion_weight: 1.0,
            time_scale: 50.0,
            spawn_margin: 50.0,
        }
    }
}

impl BoidConfig {
    /// Distance within which neighbours repel and attract
    pub fn separation_radius(&self) -> f32 {
        self.separation_reach * self.agent_radius
    }

    /// Outer distance of the alignment annulus
    pub fn alignment_radius(&self) -> f32 {
        self.alignment_reach * self.agent_radius
    }

    /// Converts a frame delta into the integration step `d`
    pub fn time_step(&self, delta_millis: f32) -> f32 {
        delta_millis / self.time_scale
    }

    /// Rescales `speed` into `[min_speed, max_speed]`.
    ///
    /// Applied as `max` then `min`, so an inverted range resolves to
    /// `max_speed` instead of panicking.
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.max(self.min_speed).min(self.max_speed)
    }
}
