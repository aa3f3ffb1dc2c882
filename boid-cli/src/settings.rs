use std::path::Path;

use anyhow::{Context, Result};
use boid_core::{BoidConfig, WorldBounds};
use boid_shared::SimulationSettings;

/// Reads a JSON settings file, or the defaults when no path is given
pub fn load_settings(path: Option<&Path>) -> Result<SimulationSettings> {
    let Some(path) = path else {
        return Ok(SimulationSettings::default());
    };

    log::info!("Loading settings from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    Ok(settings)
}

pub fn to_config(settings: &SimulationSettings) -> BoidConfig {
    BoidConfig {
        world: WorldBounds::new(settings.world_width, settings.world_height),
        population: settings.population,
        min_speed: settings.min_speed,
        max_speed: settings.max_speed,
        agent_radius: settings.agent_radius,
        separation_strength: settings.separation_strength,
        separation_floor: settings.separation_floor,
        separation_reach: settings.separation_reach,
        alignment_reach: settings.alignment_reach,
        separation_weight: settings.separation_weight,
        alignment_weight: settings.alignment_weight,
        cohesion_weight: settings.cohesion_weight,
        time_scale: settings.time_scale,
        spawn_margin: settings.spawn_margin,
    }
}
