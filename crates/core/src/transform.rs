//! Position, rotation, and scale for a single entity.
//!
//! The derived matrices are rebuilt synchronously on every mutation, so
//! they are never stale. Rotation is Euler angles in degrees, composed
//! through a half-angle quaternion into the rotation matrix; the model
//! matrix is `translation * rotation * scaling` and multiplies column
//! vectors.

use crate::error::{Error, Result};
use crate::math::{deg_to_rad, Matrix4x4, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vector3,
    rotation: Vector3,
    scale: Vector3,
    rotation_mat: Matrix4x4,
    model_mat: Matrix4x4,
}

impl Transform {
    /// Build a transform, validating that no scale component is negative.
    pub fn new(position: Vector3, rotation: Vector3, scale: Vector3) -> Result<Self> {
        if scale.x < 0.0 || scale.y < 0.0 || scale.z < 0.0 {
            return Err(Error::NegativeScale);
        }

        let mut transform = Self {
            position,
            rotation,
            scale,
            rotation_mat: Matrix4x4::new(),
            model_mat: Matrix4x4::new(),
        };
        transform.update_matrices();
        Ok(transform)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Euler angles in degrees.
    pub fn rotation(&self) -> Vector3 {
        self.rotation
    }

    pub fn scale(&self) -> Vector3 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
        self.update_matrices();
    }

    pub fn set_rotation(&mut self, rotation: Vector3) {
        self.rotation = rotation;
        self.update_matrices();
    }

    pub fn set_scale(&mut self, scale: Vector3) -> Result<()> {
        if scale.x < 0.0 || scale.y < 0.0 || scale.z < 0.0 {
            return Err(Error::NegativeScale);
        }

        self.scale = scale;
        self.update_matrices();
        Ok(())
    }

    /// Translate by `movement`, in world units.
    pub fn apply_movement(&mut self, movement: Vector3) {
        self.position += movement;
        self.update_matrices();
    }

    /// Add `rotation` to the current Euler angles, in degrees.
    pub fn apply_rotation(&mut self, rotation: Vector3) {
        self.rotation += rotation;
        self.update_matrices();
    }

    /// Local x axis direction. Unrotated, this is world +x.
    pub fn right(&self) -> Vector3 {
        Vector3::new(
            self.rotation_mat.m[0][0],
            self.rotation_mat.m[1][0],
            self.rotation_mat.m[2][0],
        )
        .normalized()
    }

    /// Local y axis direction. Unrotated, this is world +y, which points
    /// down on screen.
    pub fn up(&self) -> Vector3 {
        Vector3::new(
            self.rotation_mat.m[0][1],
            self.rotation_mat.m[1][1],
            self.rotation_mat.m[2][1],
        )
        .normalized()
    }

    /// Local z axis direction. Unrotated, this is world +z, into the screen.
    pub fn forward(&self) -> Vector3 {
        Vector3::new(
            self.rotation_mat.m[0][2],
            self.rotation_mat.m[1][2],
            self.rotation_mat.m[2][2],
        )
        .normalized()
    }

    pub fn rotation_matrix(&self) -> &Matrix4x4 {
        &self.rotation_mat
    }

    pub fn model_matrix(&self) -> &Matrix4x4 {
        &self.model_mat
    }

    fn update_matrices(&mut self) {
        let mut translation = Matrix4x4::identity();
        translation.m[0][3] = self.position.x;
        translation.m[1][3] = self.position.y;
        translation.m[2][3] = self.position.z;

        let x_rotation = deg_to_rad(self.rotation.x * 0.5);
        let y_rotation = deg_to_rad(self.rotation.y * 0.5);
        let z_rotation = deg_to_rad(self.rotation.z * 0.5);

        let (sinx, cosx) = x_rotation.sin_cos();
        let (siny, cosy) = y_rotation.sin_cos();
        let (sinz, cosz) = z_rotation.sin_cos();

        // Quaternion composed from the half angles.
        let x = cosz * cosy * sinx;
        let y = cosz * siny * cosx + sinz * cosy * sinx;
        let z = -cosz * siny * sinx + sinz * cosy * cosx;
        let w = cosz * cosy * cosx;

        let mut rotation = Matrix4x4::new();
        rotation.m[0][0] = 1.0 - 2.0 * (y * y + z * z);
        rotation.m[0][1] = 2.0 * (x * y - z * w);
        rotation.m[0][2] = 2.0 * (x * z + y * w);
        rotation.m[1][0] = 2.0 * (x * y + z * w);
        rotation.m[1][1] = 1.0 - 2.0 * (x * x + z * z);
        rotation.m[1][2] = 2.0 * (y * z - x * w);
        rotation.m[2][0] = 2.0 * (x * z - y * w);
        rotation.m[2][1] = 2.0 * (y * z + x * w);
        rotation.m[2][2] = 1.0 - 2.0 * (x * x + y * y);
        rotation.m[3][3] = 1.0;
        self.rotation_mat = rotation;

        let mut scaling = Matrix4x4::new();
        scaling.m[0][0] = self.scale.x;
        scaling.m[1][1] = self.scale.y;
        scaling.m[2][2] = self.scale.z;
        scaling.m[3][3] = 1.0;

        self.model_mat = translation * rotation * scaling;
    }
}

impl Default for Transform {
    /// Identity pose: position (0,0,0), rotation (0,0,0), scale (1,1,1).
    fn default() -> Self {
        let mut transform = Self {
            position: Vector3::default(),
            rotation: Vector3::default(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation_mat: Matrix4x4::new(),
            model_mat: Matrix4x4::new(),
        };
        transform.update_matrices();
        transform
    }
}
