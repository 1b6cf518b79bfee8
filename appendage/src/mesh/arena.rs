//! Growable vertex/index arena shared by all mesh producers

use bytemuck::cast_slice;
use glam::Vec2;

use super::types::{FinVertex, MeshSink};

/// CPU-side vertex and index buffers for one frame
///
/// Cleared by the host between frames; capacity is kept so steady-state
/// frames do not allocate.
#[derive(Debug, Clone, Default)]
pub struct MeshArena {
    vertices: Vec<FinVertex>,
    indices: Vec<u32>,
}

impl MeshArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Reset for the next frame without releasing memory
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn vertices(&self) -> &[FinVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Interleaved `[x, y, u, v]` float stream
    pub fn vertex_floats(&self) -> &[f32] {
        cast_slice(&self.vertices)
    }

    /// Vertex data ready for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        cast_slice(&self.vertices)
    }

    /// Index data ready for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Index triples as triangles
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}

impl MeshSink for MeshArena {
    fn push_vertex(&mut self, position: Vec2, uv: Vec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(FinVertex::new(position, uv));
        index
    }

    fn push_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn index_count(&self) -> usize {
        self.indices.len()
    }
}
