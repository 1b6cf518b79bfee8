//! Swimming motion for the spine control points

use glam::Vec2;

/// Travelling sine wave applied to a fish's control points
///
/// Amplitude grows from zero at the head to `amplitude` at the last control
/// point, so the head stays steady and the tail sweeps.
#[derive(Debug, Clone)]
pub struct SwimCycle {
    rest: Vec<Vec2>,
    phase: f32,
    /// Phase advance per tick (radians)
    pub speed: f32,
    /// Phase lag per control point (radians)
    pub wavelength: f32,
    pub amplitude: f32,
}

impl SwimCycle {
    pub fn new(rest: &[Vec2]) -> Self {
        Self {
            rest: rest.to_vec(),
            phase: 0.0,
            speed: 0.15,
            wavelength: 1.1,
            amplitude: 0.25,
        }
    }

    /// Advance one tick and write the displaced control points
    pub fn step(&mut self, points: &mut [Vec2]) {
        self.phase += self.speed;
        let last = self.rest.len().saturating_sub(1).max(1) as f32;

        for (i, (point, rest)) in points.iter_mut().zip(&self.rest).enumerate() {
            let weight = i as f32 / last;
            let sway = (self.phase - i as f32 * self.wavelength).sin() * self.amplitude * weight;
            *point = *rest + Vec2::new(0.0, sway);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_stays_put() {
        let rest = vec![Vec2::new(0.0, 0.0), Vec2::new(-1.0, 0.0), Vec2::new(-2.0, 0.0)];
        let mut swim = SwimCycle::new(&rest);
        let mut points = rest.clone();

        for _ in 0..20 {
            swim.step(&mut points);
            assert_eq!(points[0], rest[0]);
            assert!(points[2].y.abs() <= swim.amplitude + 1e-6);
            assert_eq!(points[2].x, rest[2].x);
        }
    }

    #[test]
    fn test_tail_moves() {
        let rest = vec![Vec2::ZERO, Vec2::NEG_X];
        let mut swim = SwimCycle::new(&rest);
        let mut points = rest.clone();
        swim.step(&mut points);
        let first = points[1];
        swim.step(&mut points);
        assert_ne!(points[1], first);
    }
}
