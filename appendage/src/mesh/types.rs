//! Mesh output types

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Interleaved vertex: `[x, y, u, v]`, 16 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FinVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl FinVertex {
    pub fn new(position: Vec2, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

/// Trait for mesh output - lets producers write to any growable buffer pair
pub trait MeshSink {
    /// Append a vertex, returning its global index
    fn push_vertex(&mut self, position: Vec2, uv: Vec2) -> u32;

    /// Append a triangle using three global vertex indices
    fn push_triangle(&mut self, i0: u32, i1: u32, i2: u32);

    /// Number of vertices written so far (the index of the next vertex)
    fn vertex_count(&self) -> u32;

    /// Number of indices written so far
    fn index_count(&self) -> usize;
}

/// Vertex and index ranges written by one producer call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeshRange {
    pub vertices: Range<u32>,
    pub indices: Range<usize>,
}

impl MeshRange {
    /// Range covering everything written to `sink` since the given marks
    pub fn since<S: MeshSink + ?Sized>(sink: &S, vertex_start: u32, index_start: usize) -> Self {
        Self {
            vertices: vertex_start..sink.vertex_count(),
            indices: index_start..sink.index_count(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Smallest range covering both (ranges are expected to be adjacent)
    pub fn union(&self, other: &MeshRange) -> MeshRange {
        MeshRange {
            vertices: self.vertices.start.min(other.vertices.start)
                ..self.vertices.end.max(other.vertices.end),
            indices: self.indices.start.min(other.indices.start)
                ..self.indices.end.max(other.indices.end),
        }
    }
}
