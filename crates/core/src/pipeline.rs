//! Geometry pipeline: per-frame processing from world space to screen
//! space.
//!
//! [`GeometryPipeline::process`] runs the stages in a fixed order: view
//! matrix, projection matrix (only while the camera is dirty), world
//! mesh, face normals, backface culling, flat shading, view transform,
//! projection transform, screen mapping. The output mesh has vertices in
//! pixel coordinates (z carried as depth) and exactly the front-facing
//! triangles, in their incoming order.
//!
//! Frustum clipping is not performed; geometry close to the camera plane
//! surfaces as a [`Error::DegenerateW`](crate::error::Error) from the
//! projection step, which aborts the frame.

use crate::camera::Camera;
use crate::error::Result;
use crate::light::DirectionalLight;
use crate::math::{Matrix4x4, Vector3};
use crate::mesh::Mesh;
use crate::scene::Scene;
use crate::screen::Screen;

#[derive(Debug, Clone, Default)]
pub struct GeometryPipeline {
    view_mat: Matrix4x4,
    projection_mat: Matrix4x4,
}

impl GeometryPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the scene into a screen-space mesh for one frame.
    ///
    /// Borrows the scene mutably only to clear the camera's projection
    /// dirty flag; no entity transform is touched.
    pub fn process(&mut self, scene: &mut Scene, screen: &Screen) -> Result<Mesh> {
        self.update_view_matrix(&scene.camera);

        if scene.camera.is_projection_dirty() {
            self.update_projection_matrix(&mut scene.camera, screen);
        }

        let mut mesh = scene.object.world_mesh()?;

        compute_tri_normals(&mut mesh);
        cull_backfaces(&mut mesh, &scene.camera);
        shade_flat(&mut mesh, &scene.light);

        self.apply_view(&mut mesh)?;
        self.apply_projection(&mut mesh)?;
        self.map_to_screen(&mut mesh, screen);

        Ok(mesh)
    }

    pub fn view_matrix(&self) -> &Matrix4x4 {
        &self.view_mat
    }

    pub fn projection_matrix(&self) -> &Matrix4x4 {
        &self.projection_mat
    }

    /// Rebuild the view matrix from the camera pose. Runs every frame.
    ///
    /// The camera basis goes in transposed with the translation in the
    /// fourth row, which is the inverse of the camera's world transform
    /// for a row-vector multiply.
    fn update_view_matrix(&mut self, camera: &Camera) {
        let right = camera.transform().right();
        let up = camera.transform().up();
        let forward = camera.transform().forward();
        let position = camera.transform().position();

        let mut view = Matrix4x4::new();
        view.m[0][0] = right.x;
        view.m[0][1] = up.x;
        view.m[0][2] = forward.x;
        view.m[1][0] = right.y;
        view.m[1][1] = up.y;
        view.m[1][2] = forward.y;
        view.m[2][0] = right.z;
        view.m[2][1] = up.z;
        view.m[2][2] = forward.z;
        view.m[3][0] = -right.dot(position);
        view.m[3][1] = -up.dot(position);
        view.m[3][2] = -forward.dot(position);
        view.m[3][3] = 1.0;

        self.view_mat = view;
    }

    /// Rebuild the projection matrix and clear the camera's dirty flag.
    ///
    /// The x scale is the aspect ratio squared; the fov term scales y only.
    fn update_projection_matrix(&mut self, camera: &mut Camera, screen: &Screen) {
        let q = camera.z_far() / (camera.z_far() - camera.z_near());
        let aspect = screen.aspect_ratio();

        let mut projection = Matrix4x4::new();
        projection.m[0][0] = aspect * aspect;
        projection.m[1][1] = camera.fov_scale();
        projection.m[2][2] = q;
        projection.m[2][3] = 1.0;
        projection.m[3][2] = -q * camera.z_near();

        self.projection_mat = projection;
        camera.clear_projection_dirty();
    }

    fn apply_view(&self, mesh: &mut Mesh) -> Result<()> {
        for vertex in &mut mesh.vertex_buffer {
            vertex.position = vertex.position.mul_mat(&self.view_mat)?;
        }
        Ok(())
    }

    fn apply_projection(&self, mesh: &mut Mesh) -> Result<()> {
        for vertex in &mut mesh.vertex_buffer {
            vertex.position = vertex.position.mul_mat(&self.projection_mat)?;
        }
        Ok(())
    }

    /// Remap x/y from normalized device coordinates in [-1, 1] to pixel
    /// coordinates. z stays as it is and rides along as depth.
    fn map_to_screen(&self, mesh: &mut Mesh, screen: &Screen) {
        for vertex in &mut mesh.vertex_buffer {
            vertex.position.x = (vertex.position.x + 1.0) * 0.5 * f32::from(screen.width());
            vertex.position.y = (vertex.position.y + 1.0) * 0.5 * f32::from(screen.height());
        }
    }
}

/// Face normal per triangle: cross of the two edges leaving the first
/// vertex. Clockwise winding makes these point away from the viewer for
/// visible faces. Left unnormalized; shading normalizes its own copy.
fn compute_tri_normals(mesh: &mut Mesh) {
    mesh.tri_normals
        .resize(mesh.index_buffer.len(), Vector3::default());

    for (i, tri) in mesh.index_buffer.iter().enumerate() {
        let v0 = mesh.vertex_buffer[tri[0]].position;
        let edge1 = mesh.vertex_buffer[tri[1]].position - v0;
        let edge2 = mesh.vertex_buffer[tri[2]].position - v0;

        mesh.tri_normals[i] = edge1.cross(edge2);
    }
}

/// Drop triangles facing away from the camera.
///
/// The ray runs from the camera to the triangle's first vertex; the
/// triangle survives iff its normal points against that ray. Surviving
/// index and normal entries are compacted, keeping their relative order.
fn cull_backfaces(mesh: &mut Mesh, camera: &Camera) {
    let camera_position = camera.transform().position();

    let mut kept_indices = Vec::with_capacity(mesh.index_buffer.len());
    let mut kept_normals = Vec::with_capacity(mesh.tri_normals.len());

    for (tri, normal) in mesh.index_buffer.iter().zip(&mesh.tri_normals) {
        let camera_ray = mesh.vertex_buffer[tri[0]].position - camera_position;

        if normal.dot(camera_ray) < 0.0 {
            kept_indices.push(*tri);
            kept_normals.push(*normal);
        }
    }

    mesh.index_buffer = kept_indices;
    mesh.tri_normals = kept_normals;
}

/// One brightness value per surviving triangle.
fn shade_flat(mesh: &mut Mesh, light: &DirectionalLight) {
    // Lambertian reflectance model.
    const DIFFUSE_REFLECTION_COEFFICIENT: f32 = 0.8;

    let light_forward = light.transform().forward();
    let intensity = light.intensity();

    mesh.tri_brightness.resize(mesh.tri_normals.len(), 0.0);

    for (brightness, normal) in mesh.tri_brightness.iter_mut().zip(&mesh.tri_normals) {
        let alignment = normal.normalized().dot(light_forward);

        *brightness = (DIFFUSE_REFLECTION_COEFFICIENT * alignment.max(0.0) * intensity).min(1.0);
    }
}
