//! Perspective camera entity.

use crate::error::{Error, Result};
use crate::math::deg_to_rad;
use crate::transform::Transform;

/// Perspective camera: a transform plus the projection parameters.
///
/// Unlike [`Transform`]'s eagerly rebuilt matrices, the projection matrix
/// lives in the geometry pipeline and is rebuilt lazily: every successful
/// setter call here raises the dirty flag, and the pipeline clears it
/// after rebuilding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    transform: Transform,
    fov_deg: f32,
    z_near: f32,
    z_far: f32,
    projection_dirty: bool,
}

impl Camera {
    /// Build a camera, validating fov, then the near plane, then the far
    /// plane against the near plane.
    pub fn new(fov_deg: f32, z_near: f32, z_far: f32, transform: Transform) -> Result<Self> {
        let mut camera = Self {
            transform,
            fov_deg: 0.0,
            z_near: 0.0,
            z_far: 0.0,
            projection_dirty: true,
        };

        camera.set_fov_deg(fov_deg)?;
        camera.set_z_near(z_near)?;
        camera.set_z_far(z_far)?;

        Ok(camera)
    }

    /// Set the field of view in degrees, strictly inside (0, 180).
    pub fn set_fov_deg(&mut self, fov_deg: f32) -> Result<()> {
        if fov_deg <= 0.0 || fov_deg >= 180.0 {
            return Err(Error::FovOutOfRange);
        }

        self.fov_deg = fov_deg;
        self.projection_dirty = true;
        Ok(())
    }

    /// Set the near plane distance, which must be greater than 0.
    ///
    /// Only checked against zero; lowering the far plane below an already
    /// accepted near plane is caught by [`Camera::set_z_far`], not here.
    pub fn set_z_near(&mut self, z_near: f32) -> Result<()> {
        if z_near <= 0.0 {
            return Err(Error::NearPlaneOutOfRange);
        }

        self.z_near = z_near;
        self.projection_dirty = true;
        Ok(())
    }

    /// Set the far plane distance, which must exceed the current near plane.
    pub fn set_z_far(&mut self, z_far: f32) -> Result<()> {
        if z_far <= self.z_near {
            return Err(Error::FarPlaneOutOfRange);
        }

        self.z_far = z_far;
        self.projection_dirty = true;
        Ok(())
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    /// Projection scale factor derived from the field of view:
    /// `1 / tan(fov / 2)`.
    pub fn fov_scale(&self) -> f32 {
        1.0 / (deg_to_rad(self.fov_deg) * 0.5).tan()
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    pub fn is_projection_dirty(&self) -> bool {
        self.projection_dirty
    }

    pub fn clear_projection_dirty(&mut self) {
        self.projection_dirty = false;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
