#![cfg_attr(not(feature = "std"), no_std)]

use serde::{Deserialize, Serialize};

mod settings;

pub use settings::{SettingsError, SimulationSettings};

/// A 2D vector in world coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y)
    }

    /// Calculate distance to another point
    pub fn distance_to(&self, other: &Vector2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

/// State of one boid as seen by a renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgentSnapshot {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
}

/// Summary of a flock at one frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FlockStats {
    pub frame: u64,
    pub boid_count: usize,
    pub mean_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub mean_acceleration: f32,
    pub centroid: Vector2,
}

impl FlockStats {
    /// Aggregates a frame's agents. An empty slice yields all zeros.
    pub fn from_agents(frame: u64, agents: &[AgentSnapshot]) -> Self {
        if agents.is_empty() {
            return Self {
                frame,
                boid_count: 0,
                mean_speed: 0.0,
                min_speed: 0.0,
                max_speed: 0.0,
                mean_acceleration: 0.0,
                centroid: Vector2::default(),
            };
        }

        let count = agents.len() as f32;
        let mut speed_sum = 0.0;
        let mut min_speed = f32::INFINITY;
        let mut max_speed = 0.0f32;
        let mut acceleration_sum = 0.0;
        let mut position_sum = Vector2::default();

        for agent in agents {
            let speed = agent.velocity.length();
            speed_sum += speed;
            min_speed = min_speed.min(speed);
            max_speed = max_speed.max(speed);
            acceleration_sum += agent.acceleration.length();
            position_sum.x += agent.position.x;
            position_sum.y += agent.position.y;
        }

        Self {
            frame,
            boid_count: agents.len(),
            mean_speed: speed_sum / count,
            min_speed,
            max_speed,
            mean_acceleration: acceleration_sum / count,
            centroid: Vector2::new(position_sum.x / count, position_sum.y / count),
        }
    }
}

/// One line of the snapshot stream
#[cfg(feature = "std")]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub elapsed_millis: f64,
    pub agents: Vec<AgentSnapshot>,
}

#[cfg(feature = "std")]
impl FrameSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn stats(&self) -> FlockStats {
        FlockStats::from_agents(self.frame, &self.agents)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn agent(px: f32, py: f32, vx: f32, vy: f32) -> AgentSnapshot {
        AgentSnapshot {
            position: Vector2::new(px, py),
            velocity: Vector2::new(vx, vy),
            acceleration: Vector2::new(0.0, 3.0),
        }
    }

    #[test]
    fn test_vector_distance() {
        let p1 = Vector2::new(0.0, 0.0);
        let p2 = Vector2::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
        assert_eq!(p2.length(), 5.0);
    }

    #[test]
    fn test_stats_from_agents() {
        let agents = [agent(0.0, 0.0, 3.0, 4.0), agent(10.0, 20.0, 0.0, 1.0)];
        let stats = FlockStats::from_agents(7, &agents);

        assert_eq!(stats.frame, 7);
        assert_eq!(stats.boid_count, 2);
        assert_eq!(stats.mean_speed, 3.0);
        assert_eq!(stats.min_speed, 1.0);
        assert_eq!(stats.max_speed, 5.0);
        assert_eq!(stats.mean_acceleration, 3.0);
        assert_eq!(stats.centroid, Vector2::new(5.0, 10.0));
    }

    #[test]
    fn test_stats_of_empty_frame() {
        let stats = FlockStats::from_agents(0, &[]);
        assert_eq!(stats.boid_count, 0);
        assert_eq!(stats.min_speed, 0.0);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = FrameSnapshot {
            frame: 3,
            elapsed_millis: 50.0,
            agents: vec![agent(1.0, 2.0, 0.0, 2.0)],
        };

        let json = snapshot.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["frame"], 3);
        assert_eq!(value["agents"][0]["position"]["x"], 1.0);
        assert_eq!(value["agents"][0]["velocity"]["y"], 2.0);
    }
}
