//! Fixed timestep clock with render interpolation

use std::time::Duration;

use tracing::warn;

use crate::config::SimulationConfig;
use crate::error::{AppendageError, Result};

/// Accumulates frame time and hands out whole simulation ticks
///
/// Whatever is left over after the ticks becomes the render interpolation
/// factor between the previous and current simulation state.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_duration: Duration,
    max_delta: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    /// Fails on a zero `tick_duration`, which would never drain the accumulator
    pub fn new(tick_duration: Duration, max_delta: Duration) -> Result<Self> {
        if tick_duration.is_zero() {
            return Err(AppendageError::InvalidConfig(
                "tick duration must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            tick_duration,
            max_delta,
            accumulator: Duration::ZERO,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::new(config.tick_duration(), config.max_delta())
    }

    /// Add one frame's elapsed time, returning the number of ticks to run
    pub fn advance(&mut self, delta: Duration) -> u32 {
        let delta = if delta > self.max_delta {
            warn!(
                "Frame took {:?}, clamping to {:?}",
                delta, self.max_delta
            );
            self.max_delta
        } else {
            delta
        };
        self.accumulator += delta;

        let mut ticks = 0u32;
        while self.accumulator >= self.tick_duration {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }
        ticks
    }

    /// Fraction of a tick elapsed since the last one, in `[0, 1)`
    pub fn interpolation(&self) -> f32 {
        (self.accumulator.as_secs_f64() / self.tick_duration.as_secs_f64()) as f32
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
