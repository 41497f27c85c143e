//! Scenario configuration, loadable from TOML.

use crate::core::types::{Point2D, Pose2D};
use crate::localization::ParticleFilterConfig;
use crate::map::Wall;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full description of a simulation scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Wall segments of the environment, in order.
    pub walls: Vec<Wall>,
    /// Ground-truth starting pose of the agent.
    pub agent_start: Pose2D,
    /// Initial path goal.
    pub goal: Point2D,
    /// Particle filter configuration.
    pub filter: ParticleFilterConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::demo_room()
    }
}

impl ScenarioConfig {
    /// The original demo environment: a 1000x1000 bordered room with an
    /// L-shaped interior obstacle.
    pub fn demo_room() -> Self {
        Self {
            walls: vec![
                Wall::from_coords(10.0, 10.0, 990.0, 10.0),   // Top
                Wall::from_coords(10.0, 990.0, 990.0, 990.0), // Bottom
                Wall::from_coords(10.0, 10.0, 10.0, 990.0),   // Left
                Wall::from_coords(990.0, 10.0, 990.0, 990.0), // Right
                Wall::from_coords(400.0, 400.0, 600.0, 400.0),
                Wall::from_coords(400.0, 400.0, 400.0, 600.0),
            ],
            agent_start: Pose2D::new(100.0, 100.0, 0.0),
            goal: Point2D::new(500.0, 500.0),
            filter: ParticleFilterConfig::default(),
        }
    }

    /// Parse a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> crate::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a scenario from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
