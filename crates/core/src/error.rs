//! Error type shared by the render core.

use thiserror::Error;

/// Errors produced by the render core.
///
/// Everything here is fatal to the operation that produced it. Startup
/// validation errors come from entity constructors and setters; the two
/// divide variants come from per-frame math and abort the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Scalar division where the divisor is within machine epsilon of zero.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Homogeneous transform produced a w component within machine epsilon
    /// of zero, so the perspective divide is undefined.
    #[error("homogeneous w component is too close to zero")]
    DegenerateW,

    /// Camera field of view outside the open interval (0, 180) degrees.
    #[error("field of view must be between 0 and 180 degrees")]
    FovOutOfRange,

    /// Camera near plane at or below zero.
    #[error("near plane must be greater than 0")]
    NearPlaneOutOfRange,

    /// Camera far plane at or below the near plane.
    #[error("far plane must be greater than the near plane")]
    FarPlaneOutOfRange,

    /// Directional light intensity at or below zero.
    #[error("light intensity must be greater than 0")]
    IntensityOutOfRange,

    /// Transform scale with a negative component.
    #[error("scale components cannot be negative")]
    NegativeScale,

    /// Screen constructed or resized with a zero dimension.
    #[error("screen width and height must be greater than 0")]
    InvalidScreenSize,
}

pub type Result<T> = std::result::Result<T, Error>;
