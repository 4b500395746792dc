//! Renderable object entity.

use crate::error::Result;
use crate::mesh::Mesh;
use crate::transform::Transform;

/// A mesh in local/object space paired with its transform.
///
/// The stored mesh is never mutated; [`Object3D::world_mesh`] hands out a
/// transformed copy each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Object3D {
    transform: Transform,
    mesh: Mesh,
}

impl Object3D {
    pub fn new(mesh: Mesh, transform: Transform) -> Self {
        Self { transform, mesh }
    }

    /// Copy of the mesh in world space: positions through the model
    /// matrix, normals through the rotation matrix only, re-normalized.
    pub fn world_mesh(&self) -> Result<Mesh> {
        let model_mat = self.transform.model_matrix();
        let rotation_mat = self.transform.rotation_matrix();

        let mut mesh = self.mesh.clone();
        for vertex in &mut mesh.vertex_buffer {
            vertex.position = model_mat.mul_vec(vertex.position)?;
            vertex.normal = rotation_mat.mul_vec(vertex.normal)?.normalized();
        }

        Ok(mesh)
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
