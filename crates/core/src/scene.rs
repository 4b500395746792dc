//! Scene: the fixed trio the pipeline renders.

use crate::camera::Camera;
use crate::light::DirectionalLight;
use crate::object::Object3D;

/// Exactly one object, one camera, and one directional light.
///
/// This is not a scene graph; the shape is fixed and the members are
/// owned by value. The pipeline and rasterizer borrow them per call and
/// never hold on to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub object: Object3D,
    pub camera: Camera,
    pub light: DirectionalLight,
}

impl Scene {
    pub fn new(object: Object3D, camera: Camera, light: DirectionalLight) -> Self {
        Self {
            object,
            camera,
            light,
        }
    }
}
