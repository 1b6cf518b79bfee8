//! Fish body hosting a tail

use glam::Vec2;
use tracing::{debug, trace};

use crate::config::AppendageConfig;
use crate::error::{AppendageError, Result};
use crate::mesh::body::{self, VERTICES_PER_VERTEBRA};
use crate::mesh::{MeshRange, MeshSink};
use crate::pattern::PatternRegion;
use crate::sampler::CubicHermite;
use crate::tail::{MIN_SPINE_LENGTH, Tail};

/// A fish body: a spine sampled from a control curve, plus its tail
///
/// The caller animates the control points between ticks; `tick` re-samples
/// the spine in place and lets the tail follow it.
#[derive(Debug, Clone)]
pub struct FishBody {
    config: AppendageConfig,
    controls: CubicHermite,
    spine: Vec<Vec2>,
    spine_previous: Vec<Vec2>,
    tail: Tail,
    /// Last spine index not governed by the tail
    last_unused: usize,
    pattern: PatternRegion,
}

impl FishBody {
    /// Build a body with `segments` spine vertebrae and connect `tail` to it
    pub fn new(
        config: &AppendageConfig,
        controls: CubicHermite,
        segments: usize,
        mut tail: Tail,
        pattern: PatternRegion,
    ) -> Result<Self> {
        config.validate()?;
        if segments < MIN_SPINE_LENGTH {
            return Err(AppendageError::SpineTooShort {
                len: segments,
                required: MIN_SPINE_LENGTH,
            });
        }

        let mut spine = vec![Vec2::ZERO; segments];
        controls.sample_into(&mut spine);
        let last_unused = tail.connect(&spine)?;

        debug!(
            "Fish body created: {} vertebrae, tail covers {} from index {}",
            segments,
            tail.anchors(),
            tail.spine_offset()
        );

        Ok(Self {
            config: config.clone(),
            controls,
            spine_previous: spine.clone(),
            spine,
            tail,
            last_unused,
            pattern,
        })
    }

    /// Advance one simulation tick
    pub fn tick(&mut self) -> Result<()> {
        self.spine_previous.copy_from_slice(&self.spine);
        self.controls.sample_into(&mut self.spine);
        self.tail.update(&self.spine)
    }

    /// Instantly move the whole fish without simulating
    pub fn shift(&mut self, dx: f32, dy: f32) {
        let delta = Vec2::new(dx, dy);
        for point in self.controls.points_mut() {
            *point += delta;
        }
        for (current, previous) in self.spine.iter_mut().zip(self.spine_previous.iter_mut()) {
            *current += delta;
            *previous += delta;
        }
        self.tail.shift(dx, dy);
    }

    /// Render body and tail at interpolation factor `time`
    ///
    /// Draw order: tail bottom, body, tail top.
    pub fn render<S: MeshSink + ?Sized>(&self, sink: &mut S, time: f32) -> Result<MeshRange> {
        let vertex_start = sink.vertex_count();
        let index_start = sink.index_count();

        let body_first = body::render_vertices(
            sink,
            &self.spine_previous,
            &self.spine,
            time,
            self.config.body.radius,
            &self.pattern,
        );
        let tail_start = sink.vertex_count();
        let first_vertebra = body_first + VERTICES_PER_VERTEBRA * self.last_unused as u32;

        self.tail
            .render_bottom(sink, tail_start, first_vertebra, time, &self.pattern)?;
        body::render_triangles(sink, body_first, self.spine.len());
        self.tail.render_top(sink, tail_start, first_vertebra)?;

        let range = MeshRange::since(sink, vertex_start, index_start);
        trace!(
            "Fish rendered: {} vertices, {} triangles",
            range.vertices.len(),
            range.triangle_count()
        );
        Ok(range)
    }

    /// Vertices written by one `render` call
    pub fn vertex_count(&self) -> u32 {
        self.spine.len() as u32 * VERTICES_PER_VERTEBRA + self.tail.vertex_count()
    }

    pub fn spine(&self) -> &[Vec2] {
        &self.spine
    }

    pub fn spine_previous(&self) -> &[Vec2] {
        &self.spine_previous
    }

    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    pub fn controls(&self) -> &CubicHermite {
        &self.controls
    }

    /// Control curve for animation; changes apply on the next `tick`
    pub fn controls_mut(&mut self) -> &mut CubicHermite {
        &mut self.controls
    }

    pub fn pattern(&self) -> &PatternRegion {
        &self.pattern
    }

    pub fn last_unused_vertebra(&self) -> usize {
        self.last_unused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshArena;

    fn controls() -> CubicHermite {
        CubicHermite::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.1),
            Vec2::new(2.0, -0.1),
            Vec2::new(3.0, 0.0),
        ])
        .unwrap()
    }

    fn fish() -> FishBody {
        FishBody::new(
            &AppendageConfig::default(),
            controls(),
            12,
            Tail::new(0.4).unwrap(),
            PatternRegion::default(),
        )
        .unwrap()
    }

    fn wiggle(fish: &mut FishBody, phase: f32) {
        for (i, point) in fish.controls_mut().points_mut().iter_mut().enumerate() {
            point.y = (phase + i as f32).sin() * 0.3;
        }
    }

    #[test]
    fn test_new_samples_spine_and_connects_tail() {
        let fish = fish();
        assert_eq!(fish.spine().len(), 12);
        assert_eq!(fish.spine()[0], Vec2::new(0.0, 0.0));
        assert_eq!(fish.spine()[11], Vec2::new(3.0, 0.0));
        assert!(fish.tail().is_connected());
        assert_eq!(fish.last_unused_vertebra() + 1, fish.tail().spine_offset());
    }

    #[test]
    fn test_new_rejects_short_spine() {
        let err = FishBody::new(
            &AppendageConfig::default(),
            controls(),
            2,
            Tail::new(0.4).unwrap(),
            PatternRegion::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AppendageError::SpineTooShort { len: 2, .. }));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = AppendageConfig::default();
        config.tail.spring = 2.0;
        let err = FishBody::new(
            &config,
            controls(),
            12,
            Tail::new(0.4).unwrap(),
            PatternRegion::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AppendageError::InvalidConfig(_)));
    }

    #[test]
    fn test_render_indices_in_range() {
        let mut fish = fish();
        let mut arena = MeshArena::new();
        for tick in 0..5 {
            wiggle(&mut fish, tick as f32 * 0.4);
            fish.tick().unwrap();

            arena.clear();
            let range = fish.render(&mut arena, 0.5).unwrap();
            assert_eq!(range.vertices, 0..fish.vertex_count());
            assert!(arena.indices().iter().all(|&i| i < fish.vertex_count()));
            assert!(arena.vertex_floats().iter().all(|f| f.is_finite()));
        }
    }

    #[test]
    fn test_render_after_existing_geometry() {
        let fish = fish();
        let mut arena = MeshArena::new();
        arena.push_vertex(Vec2::ZERO, Vec2::ZERO);
        arena.push_triangle(0, 0, 0);

        let range = fish.render(&mut arena, 0.0).unwrap();
        assert_eq!(range.vertices, 1..1 + fish.vertex_count());
        assert_eq!(range.indices.start, 3);
        // Only the pre-existing triangle may reference vertex 0
        assert!(arena.indices()[3..].iter().all(|&i| i >= 1));
    }

    #[test]
    fn test_tick_keeps_previous_spine() {
        let mut fish = fish();
        wiggle(&mut fish, 1.0);
        let before = fish.spine().to_vec();
        fish.tick().unwrap();
        assert_eq!(fish.spine_previous(), before.as_slice());
        assert_ne!(fish.spine(), before.as_slice());
    }

    #[test]
    fn test_shift_translates_render() {
        let mut fish = fish();
        wiggle(&mut fish, 0.5);
        fish.tick().unwrap();

        let mut before = MeshArena::new();
        fish.render(&mut before, 0.3).unwrap();
        fish.shift(5.0, -2.0);
        let mut after = MeshArena::new();
        fish.render(&mut after, 0.3).unwrap();

        assert_eq!(before.indices(), after.indices());
        for (a, b) in before.vertices().iter().zip(after.vertices()) {
            let moved = a.position() + Vec2::new(5.0, -2.0);
            assert!((moved - b.position()).length() < 1e-5);
        }
    }
}
