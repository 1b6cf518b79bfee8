//! Scalar samplers for blueprint parameters

use serde::{Deserialize, Serialize};

/// Maps an opaque random value `x` in `[0, 1)` onto a parameter value
pub trait ScalarSampler {
    fn sample(&self, x: f32) -> f32;
}

/// Linear mapping from `[0, 1)` onto `[min, max)`
///
/// `min` may exceed `max`, in which case the range runs backwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sampler {
    pub min: f32,
    pub max: f32,
}

impl Sampler {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl ScalarSampler for Sampler {
    fn sample(&self, x: f32) -> f32 {
        self.min + (self.max - self.min) * x
    }
}

/// Mapping biased toward `min` by raising `x` to `power` first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerPower {
    pub min: f32,
    pub max: f32,
    pub power: f32,
}

impl SamplerPower {
    pub const fn new(min: f32, max: f32, power: f32) -> Self {
        Self { min, max, power }
    }
}

impl ScalarSampler for SamplerPower {
    fn sample(&self, x: f32) -> f32 {
        self.min + (self.max - self.min) * x.powf(self.power)
    }
}
