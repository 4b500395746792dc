//! Mesh geometry buffers.
//!
//! A mesh stores every unique vertex once; triangles are reconstructed
//! from the index buffer. The per-triangle buffers start empty and are
//! filled by the geometry pipeline each frame, staying in lockstep with
//! the index buffer through culling.

use crate::math::Vector3;

/// One mesh vertex: a position and its normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vector3,
    pub normal: Vector3,
}

impl Vertex {
    pub const fn new(position: Vector3, normal: Vector3) -> Self {
        Self { position, normal }
    }
}

/// Triangle mesh with per-frame shading buffers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Unique vertices, deduplicated by the loader.
    pub vertex_buffer: Vec<Vertex>,
    /// One `[usize; 3]` of vertex indices per triangle, wound clockwise.
    pub index_buffer: Vec<[usize; 3]>,
    /// Face normal per triangle, unnormalized until shading reads it.
    pub tri_normals: Vec<Vector3>,
    /// Brightness per triangle in [0, 1].
    pub tri_brightness: Vec<f32>,
}

impl Mesh {
    pub fn new(vertex_buffer: Vec<Vertex>, index_buffer: Vec<[usize; 3]>) -> Self {
        Self {
            vertex_buffer,
            index_buffer,
            tri_normals: Vec::new(),
            tri_brightness: Vec::new(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.index_buffer.len()
    }
}
