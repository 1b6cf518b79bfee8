//! Appendage configuration (TOML)
//!
//! Built once at startup and passed by reference into constructors. Defaults
//! reproduce the tuned tail constants, so an empty file behaves exactly like
//! no file at all.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{AppendageError, Result};

/// Highest accepted simulation rate in Hz
pub const MAX_TICK_RATE: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppendageConfig {
    #[serde(default)]
    pub tail: TailConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub body: BodyConfig,
}

/// Spring and ribbon shape constants for a tail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailConfig {
    /// Blend factor toward the spring target per tick, must be in (0, 1)
    #[serde(default = "default_spring")]
    pub spring: f32,
    /// How far past its spine point an anchor is pulled, in tangent lengths
    #[serde(default = "default_shift")]
    pub shift: f32,
    /// Scale applied to the lateral offset when emitting ribbon vertices
    #[serde(default = "default_depth_factor")]
    pub depth_factor: f32,
    /// Lateral offset reached at the tip of the tail
    #[serde(default = "default_max_lateral_offset")]
    pub max_lateral_offset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target tick rate in Hz
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    /// Maximum frame delta in milliseconds (prevents spiral of death)
    #[serde(default = "default_max_delta_ms")]
    pub max_delta_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Half-width of the body at its widest vertebra
    #[serde(default = "default_radius")]
    pub radius: f32,
}

fn default_spring() -> f32 { 0.55 }
fn default_shift() -> f32 { 0.5 }
fn default_depth_factor() -> f32 { 0.5 }
fn default_max_lateral_offset() -> f32 { 0.2 }
fn default_tick_rate() -> u32 { 60 }
fn default_max_delta_ms() -> u64 { 100 }
fn default_radius() -> f32 { 0.3 }

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            spring: default_spring(),
            shift: default_shift(),
            depth_factor: default_depth_factor(),
            max_lateral_offset: default_max_lateral_offset(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            max_delta_ms: default_max_delta_ms(),
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
        }
    }
}

impl SimulationConfig {
    /// Duration of one simulation tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    pub fn max_delta(&self) -> Duration {
        Duration::from_millis(self.max_delta_ms)
    }
}

impl AppendageConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AppendageError::InvalidConfig(e.to_string()))
    }

    /// Reject values the relaxation or the mesh cannot work with
    pub fn validate(&self) -> Result<()> {
        let tail = &self.tail;
        if !(tail.spring > 0.0 && tail.spring < 1.0) {
            return Err(AppendageError::InvalidConfig(format!(
                "tail.spring must be in (0, 1), got {}",
                tail.spring
            )));
        }
        if !tail.shift.is_finite() {
            return Err(AppendageError::InvalidConfig(format!(
                "tail.shift must be finite, got {}",
                tail.shift
            )));
        }
        if !(tail.depth_factor >= 0.0) || !(tail.max_lateral_offset >= 0.0) {
            return Err(AppendageError::InvalidConfig(
                "tail.depth_factor and tail.max_lateral_offset must be >= 0".to_string(),
            ));
        }
        if !(1..=MAX_TICK_RATE).contains(&self.simulation.tick_rate) {
            return Err(AppendageError::InvalidConfig(format!(
                "simulation.tick_rate must be in 1..={}, got {}",
                MAX_TICK_RATE, self.simulation.tick_rate
            )));
        }
        if !(self.body.radius >= 0.0) {
            return Err(AppendageError::InvalidConfig(format!(
                "body.radius must be >= 0, got {}",
                self.body.radius
            )));
        }
        Ok(())
    }
}
