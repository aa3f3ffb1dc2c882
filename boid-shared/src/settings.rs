use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a [`SimulationSettings`] cannot drive a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("world must have a positive size, got {width}x{height}")]
    InvalidWorld { width: f32, height: f32 },

    #[error("population must contain at least one boid")]
    EmptyPopulation,

    #[error("speeds must be finite and non-negative, got min {min} max {max}")]
    InvalidSpeed { min: f32, max: f32 },

    #[error("min_speed {min} exceeds max_speed {max}")]
    InvertedSpeedRange { min: f32, max: f32 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("spawn margin {margin} leaves no room in a {width}x{height} world")]
    SpawnMarginTooLarge { margin: f32, width: f32, height: f32 },

    #[error("alignment reach {alignment} must exceed separation reach {separation}")]
    EmptyAlignmentBand { separation: f32, alignment: f32 },
}

/// Boid simulation configuration as read from a settings file.
///
/// Missing fields fall back to the defaults of the standard 640×640 flock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub world_width: f32,
    pub world_height: f32,
    pub population: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    pub agent_radius: f32,
    pub separation_strength: f32,
    pub separation_floor: f32,
    pub separation_reach: f32,
    pub alignment_reach: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub time_scale: f32,
    pub spawn_margin: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            world_width: 640.0,
            world_height: 640.0,
            population: 100,
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

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !is_positive(self.world_width) || !is_positive(self.world_height) {
            return Err(SettingsError::InvalidWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if self.population == 0 {
            return Err(SettingsError::EmptyPopulation);
        }
        let speeds_valid = [self.min_speed, self.max_speed]
            .iter()
            .all(|speed| speed.is_finite() && *speed >= 0.0);
        if !speeds_valid {
            return Err(SettingsError::InvalidSpeed {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.min_speed > self.max_speed {
            return Err(SettingsError::InvertedSpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        let positive = [
            ("agent_radius", self.agent_radius),
            ("separation_floor", self.separation_floor),
            ("separation_reach", self.separation_reach),
            ("alignment_reach", self.alignment_reach),
            ("time_scale", self.time_scale),
        ];
        for (name, value) in positive {
            if !is_positive(value) {
                return Err(SettingsError::NotPositive { name, value });
            }
        }

        let finite = [
            ("separation_strength", self.separation_strength),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("spawn_margin", self.spawn_margin),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { name, value });
            }
        }

        if self.alignment_reach <= self.separation_reach {
            return Err(SettingsError::EmptyAlignmentBand {
                separation: self.separation_reach,
                alignment: self.alignment_reach,
            });
        }
        if self.spawn_margin < 0.0
            || 2.0 * self.spawn_margin > self.world_width
            || 2.0 * self.spawn_margin > self.world_height
        {
            return Err(SettingsError::SpawnMarginTooLarge {
                margin: self.spawn_margin,
                width: self.world_width,
                height: self.world_height,
            });
        }

        Ok(())
    }
}
