//! Curve and scalar samplers
//!
//! `CubicHermite` places spine points along a smooth curve through a set of
//! control points. The scalar samplers map an opaque random value in `[0, 1)`
//! onto a parameter range for blueprints.

mod cubic_hermite;
mod scalar;

pub use cubic_hermite::CubicHermite;
pub use scalar::{Sampler, SamplerPower, ScalarSampler};
