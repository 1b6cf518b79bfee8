//! Piecewise cubic Hermite spline through 2D control points

use glam::Vec2;

use crate::error::{AppendageError, Result};

/// A cubic Hermite spline
///
/// Neighbour lookups are clamped at both ends, so the curve passes exactly
/// through the first and last control point.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicHermite {
    points: Vec<Vec2>,
}

impl CubicHermite {
    /// Create a spline from at least two control points
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(AppendageError::DegenerateCurve {
                points: points.len(),
            });
        }

        Ok(Self { points })
    }

    /// Catmull-Rom style Hermite basis evaluated at `t` between `b` and `c`
    #[inline]
    pub fn interpolate(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
        let cubic = -0.5 * a + 1.5 * b - 1.5 * c + 0.5 * d;
        let quadratic = a - 2.5 * b + 2.0 * c - 0.5 * d;
        let linear = -0.5 * a + 0.5 * c;

        cubic * t * t * t + quadratic * t * t + linear * t + b
    }

    /// Sample the curve at `t` in `[0, 1]`
    ///
    /// Values outside the range are clamped to it.
    pub fn sample(&self, t: f32) -> Vec2 {
        let last = self.points.len() - 1;
        let scaled = last as f32 * t.clamp(0.0, 1.0);
        let i1 = (scaled.floor() as usize).min(last);
        let i0 = i1.saturating_sub(1);
        let i2 = (i1 + 1).min(last);
        let i3 = (i2 + 1).min(last);
        let f = scaled - i1 as f32;

        let (p0, p1, p2, p3) = (
            self.points[i0],
            self.points[i1],
            self.points[i2],
            self.points[i3],
        );

        Vec2::new(
            Self::interpolate(p0.x, p1.x, p2.x, p3.x, f),
            Self::interpolate(p0.y, p1.y, p2.y, p3.y, f),
        )
    }

    /// Fill `out` with samples evenly spaced from start to end
    ///
    /// Writes in place so a host can regenerate its spine every tick without
    /// allocating. A single-element slice receives the start point.
    pub fn sample_into(&self, out: &mut [Vec2]) {
        let steps = out.len().saturating_sub(1).max(1) as f32;
        for (i, point) in out.iter_mut().enumerate() {
            *point = self.sample(i as f32 / steps);
        }
    }

    /// First control point (copy)
    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    /// Last control point (copy)
    pub fn end(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Mutable access to the first control point; writes move the curve
    pub fn start_mut(&mut self) -> &mut Vec2 {
        &mut self.points[0]
    }

    /// Mutable access to the last control point; writes move the curve
    pub fn end_mut(&mut self) -> &mut Vec2 {
        let last = self.points.len() - 1;
        &mut self.points[last]
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Control points for in-place animation. The count cannot change.
    pub fn points_mut(&mut self) -> &mut [Vec2] {
        &mut self.points
    }
}
