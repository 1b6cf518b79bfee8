//! Ribbon mesh emission for a tail
//!
//! The bottom pass writes two vertices per anchor (the ribbon's two faces
//! share positions but not indices) and stitches the even vertices to the
//! body. The top pass writes no vertices and stitches the odd ones.

use glam::Vec2;
use tracing::trace;

use super::chain::Tail;
use crate::error::{AppendageError, Result};
use crate::mesh::body::VERTICES_PER_VERTEBRA;
use crate::mesh::{MeshRange, MeshSink};
use crate::pattern::PatternRegion;

impl Tail {
    /// Number of vertices `render_bottom` emits
    pub fn vertex_count(&self) -> u32 {
        (self.anchors << 1) as u32
    }

    /// Render the bottom part of the tail
    ///
    /// # Arguments
    /// * `start_index` - Index of the first tail vertex in the sink
    /// * `first_vertebra` - Index of the first body vertex block to stitch to
    /// * `time` - Interpolation factor between the last two ticks
    pub fn render_bottom<S: MeshSink + ?Sized>(
        &self,
        sink: &mut S,
        start_index: u32,
        first_vertebra: u32,
        time: f32,
        pattern: &PatternRegion,
    ) -> Result<MeshRange> {
        self.check_connected()?;

        let vertex_start = sink.vertex_count();
        let index_start = sink.index_count();
        let uv = pattern.fin_uv_midpoint();
        let depth_factor = self.config.depth_factor;

        trace!(
            "Tail bottom: {} anchors at vertex {}, vertebra {}",
            self.anchors, start_index, first_vertebra
        );

        sink.push_triangle(first_vertebra, first_vertebra + VERTICES_PER_VERTEBRA, start_index);

        for vertebra in 0..self.anchors {
            let position = self.interpolated(vertebra, time);
            let depth = Vec2::new(0.0, self.distances[vertebra] * depth_factor);

            sink.push_vertex(position + depth, uv);
            sink.push_vertex(position - depth, uv);

            self.stitch_segment(sink, start_index, first_vertebra, vertebra, 0);
        }

        Ok(MeshRange::since(sink, vertex_start, index_start))
    }

    /// Render the top part of the tail
    ///
    /// Reuses the vertices written by `render_bottom` at `start_index`.
    pub fn render_top<S: MeshSink + ?Sized>(
        &self,
        sink: &mut S,
        start_index: u32,
        first_vertebra: u32,
    ) -> Result<MeshRange> {
        self.check_connected()?;

        let vertex_start = sink.vertex_count();
        let index_start = sink.index_count();

        for vertebra in 0..self.anchors {
            self.stitch_segment(sink, start_index, first_vertebra, vertebra, 1);
        }

        Ok(MeshRange::since(sink, vertex_start, index_start))
    }

    /// Bridge triangles between anchors `vertebra` and `vertebra + 1`
    ///
    /// The segment ending at the tip reads the body vertex one before the
    /// tip vertebra's block instead of the block itself.
    fn stitch_segment<S: MeshSink + ?Sized>(
        &self,
        sink: &mut S,
        start_index: u32,
        first_vertebra: u32,
        vertebra: usize,
        face: u32,
    ) {
        if vertebra == self.anchors - 1 {
            return;
        }

        let v = vertebra as u32;
        let far = if vertebra == self.anchors - 2 {
            first_vertebra + VERTICES_PER_VERTEBRA * (v + 2) - 1
        } else {
            first_vertebra + VERTICES_PER_VERTEBRA * (v + 2)
        };
        let near = first_vertebra + VERTICES_PER_VERTEBRA * (v + 1);
        let ribbon = start_index + (v << 1) + face;
        let ribbon_next = start_index + ((v + 1) << 1) + face;

        sink.push_triangle(far, near, ribbon);
        sink.push_triangle(ribbon, ribbon_next, far);
    }

    fn check_connected(&self) -> Result<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(AppendageError::NotConnected)
        }
    }
}
