//! Tunable simulation constants, loadable from JSON.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Scales the per-second gravity force to the tick length.
    pub compensator: f32,
    /// Terminal fall speed as a multiple of the gravity force.
    pub max_modifier: f32,
    /// Converts pixel-space forces into level units (level units per pixel).
    pub unit_scale: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            compensator: 20.0,
            max_modifier: 3.0,
            unit_scale: 1.0 / 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal speed in level units per second.
    pub speed: f32,
    /// Jump impulse as a multiple of the entity's gravity force (pixel space).
    pub jump_multiplier: f32,
    /// Side length of the square attack hurtbox.
    pub hurtbox_size: f32,
    /// Seconds an attack hurtbox stays alive.
    pub hurtbox_lifetime: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 0.625,
            jump_multiplier: 5.0,
            hurtbox_size: 0.07,
            hurtbox_lifetime: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Tick length used by `Simulation::advance`.
    pub fixed_dt: f32,
    /// Most ticks `Simulation::advance` runs per call before dropping time.
    pub max_catchup_steps: u32,
    pub gravity: GravityConfig,
    pub player: PlayerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_catchup_steps: 8,
            gravity: GravityConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json).context("malformed config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("unable to read config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.fixed_dt > 0.0, "fixed_dt must be positive, got {}", self.fixed_dt);
        ensure!(self.max_catchup_steps > 0, "max_catchup_steps must be at least 1");
        ensure!(
            self.gravity.unit_scale > 0.0,
            "gravity.unit_scale must be positive, got {}",
            self.gravity.unit_scale
        );
        ensure!(
            self.player.hurtbox_size >= 0.0,
            "player.hurtbox_size must be non-negative, got {}",
            self.player.hurtbox_size
        );
        Ok(())
    }
}
