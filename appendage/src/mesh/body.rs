//! Body ribbon along the spine
//!
//! Vertex layout is 3 vertices per vertebra: `[centre, left, right]`. Tail
//! stitching addresses body vertices positionally, so this layout must not
//! change.

use std::f32::consts::PI;

use glam::Vec2;

use super::types::{MeshRange, MeshSink};
use crate::pattern::PatternRegion;

/// Vertices emitted per spine vertebra
pub const VERTICES_PER_VERTEBRA: u32 = 3;

/// Half-width of the body at vertebra `index` of `count`
///
/// Sine profile, widest mid-body and never exactly zero.
pub fn radius_profile(radius: f32, index: usize, count: usize) -> f32 {
    radius * (PI * (index + 1) as f32 / (count + 1) as f32).sin()
}

/// Emit body vertices interpolated between two spine states
///
/// `previous` and `current` must have equal length. Returns the index of the
/// first body vertex.
pub fn render_vertices<S: MeshSink + ?Sized>(
    sink: &mut S,
    previous: &[Vec2],
    current: &[Vec2],
    time: f32,
    radius: f32,
    pattern: &PatternRegion,
) -> u32 {
    let first = sink.vertex_count();
    let count = current.len();
    let last = count.saturating_sub(1);

    let at = |index: usize| previous[index] + (current[index] - previous[index]) * time;

    for vertebra in 0..count {
        let centre = at(vertebra);

        // Direction from the neighbouring vertebrae, clamped at the ends
        let ahead = at(vertebra.saturating_sub(1));
        let behind = at((vertebra + 1).min(last));
        let normal = (behind - ahead).normalize_or_zero().perp();
        let offset = normal * radius_profile(radius, vertebra, count);

        let u = pattern.body_u(vertebra as f32 / last.max(1) as f32);

        sink.push_vertex(centre, Vec2::new(u, pattern.v_mid()));
        sink.push_vertex(centre + offset, Vec2::new(u, pattern.v_start));
        sink.push_vertex(centre - offset, Vec2::new(u, pattern.v_end));
    }

    first
}

/// Emit the triangles joining consecutive vertebrae
pub fn render_triangles<S: MeshSink + ?Sized>(sink: &mut S, first: u32, vertebrae: usize) -> MeshRange {
    let index_start = sink.index_count();

    for vertebra in 0..vertebrae.saturating_sub(1) as u32 {
        let centre = first + vertebra * VERTICES_PER_VERTEBRA;
        let left = centre + 1;
        let right = centre + 2;
        let next_centre = centre + VERTICES_PER_VERTEBRA;
        let next_left = next_centre + 1;
        let next_right = next_centre + 2;

        sink.push_triangle(centre, left, next_left);
        sink.push_triangle(centre, next_left, next_centre);
        sink.push_triangle(centre, next_centre, next_right);
        sink.push_triangle(centre, next_right, right);
    }

    MeshRange {
        vertices: first..first + vertebrae as u32 * VERTICES_PER_VERTEBRA,
        indices: index_start..sink.index_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshArena;

    fn straight_spine(count: usize) -> Vec<Vec2> {
        (0..count).map(|i| Vec2::new(i as f32, 0.0)).collect()
    }

    #[test]
    fn test_three_vertices_per_vertebra() {
        let spine = straight_spine(6);
        let mut arena = MeshArena::new();
        arena.push_vertex(Vec2::ZERO, Vec2::ZERO); // pre-existing geometry

        let first = render_vertices(&mut arena, &spine, &spine, 0.5, 0.3, &PatternRegion::default());
        assert_eq!(first, 1);
        assert_eq!(arena.vertex_count(), 1 + 6 * VERTICES_PER_VERTEBRA);

        // Centre vertex sits on the spine, sides mirror across it
        for (vertebra, point) in spine.iter().enumerate() {
            let base = (first + vertebra as u32 * VERTICES_PER_VERTEBRA) as usize;
            let vertices = arena.vertices();
            assert_eq!(vertices[base].position(), *point);
            let left = vertices[base + 1].position();
            let right = vertices[base + 2].position();
            assert!(((left + right) * 0.5 - *point).length() < 1e-6);
            assert!(left.y > 0.0);
        }
    }

    #[test]
    fn test_triangles_reference_body_only() {
        let spine = straight_spine(5);
        let mut arena = MeshArena::new();
        let first = render_vertices(&mut arena, &spine, &spine, 1.0, 0.3, &PatternRegion::default());
        let range = render_triangles(&mut arena, first, spine.len());

        assert_eq!(range.triangle_count(), 4 * 4);
        assert_eq!(range.vertices, 0..15);
        assert!(arena.indices().iter().all(|&i| range.vertices.contains(&i)));
    }

    #[test]
    fn test_radius_profile_positive() {
        for index in 0..10 {
            let r = radius_profile(1.0, index, 10);
            assert!(r > 0.0 && r <= 1.0);
        }
    }

    #[test]
    fn test_coincident_spine_points() {
        let spine = vec![Vec2::ONE; 4];
        let mut arena = MeshArena::new();
        render_vertices(&mut arena, &spine, &spine, 0.0, 0.3, &PatternRegion::default());
        assert!(arena.vertex_floats().iter().all(|f| f.is_finite()));
    }
}
