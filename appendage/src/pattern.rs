//! Pattern atlas region
//!
//! A fish pattern is rendered into one region of a shared texture atlas. The
//! body maps onto `[u_start, u_fin_start)` along its length, the fins sample
//! `[u_fin_start, u_fin_end)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternRegion {
    pub u_start: f32,
    pub u_fin_start: f32,
    pub u_fin_end: f32,
    pub v_start: f32,
    pub v_end: f32,
}

impl PatternRegion {
    pub const fn new(u_start: f32, u_fin_start: f32, u_fin_end: f32, v_start: f32, v_end: f32) -> Self {
        Self {
            u_start,
            u_fin_start,
            u_fin_end,
            v_start,
            v_end,
        }
    }

    /// Texture coordinate at the centre of the fin area
    ///
    /// Fins are flat shaded, every fin vertex samples this one texel.
    pub fn fin_uv_midpoint(&self) -> Vec2 {
        Vec2::new(
            self.u_fin_start + (self.u_fin_end - self.u_fin_start) * 0.5,
            self.v_start + (self.v_end - self.v_start) * 0.5,
        )
    }

    /// Body texture U at fraction `t` of the body length
    pub fn body_u(&self, t: f32) -> f32 {
        self.u_start + (self.u_fin_start - self.u_start) * t
    }

    pub fn v_mid(&self) -> f32 {
        self.v_start + (self.v_end - self.v_start) * 0.5
    }
}

impl Default for PatternRegion {
    fn default() -> Self {
        Self::new(0.0, 0.75, 1.0, 0.0, 1.0)
    }
}
