//! Directional light entity.

use crate::error::{Error, Result};
use crate::transform::Transform;

/// Directional light: parallel rays along its transform's forward
/// direction. Only that direction and the intensity matter to shading;
/// the position is unused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    transform: Transform,
    intensity: f32,
}

impl DirectionalLight {
    pub fn new(intensity: f32, transform: Transform) -> Result<Self> {
        let mut light = Self {
            transform,
            intensity: 0.0,
        };
        light.set_intensity(intensity)?;
        Ok(light)
    }

    /// Set the light intensity, which must be greater than 0.
    pub fn set_intensity(&mut self, intensity: f32) -> Result<()> {
        if intensity <= 0.0 {
            return Err(Error::IntensityOutOfRange);
        }

        self.intensity = intensity;
        Ok(())
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
