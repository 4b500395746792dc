//! Shared types module - renderer settings and control actions
//!
//! This crate defines the constants and small enums shared by every other
//! crate in the workspace. All of it is pure data with no external
//! dependencies, so it can be used from the render core, the terminal
//! layer, and tests alike.
//!
//! # Screen Dimensions
//!
//! The render target is a fixed character grid:
//!
//! - **Width**: 300 logical pixels (each printed as two terminal columns)
//! - **Height**: 300 rows
//!
//! The doubling happens in the terminal writer; everything upstream works
//! in logical pixels.
//!
//! # Camera Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FOV_DEG` | 90.0 | Vertical field of view in degrees |
//! | `DEFAULT_Z_NEAR` | 0.1 | Near clip plane distance |
//! | `DEFAULT_Z_FAR` | 1000.0 | Far clip plane distance |
//!
//! # Frame Timing
//!
//! `FRAME_RATE_LIMIT` names the intended cap (not enforced by a limiter);
//! `TARGET_FRAME_TIME` is its reciprocal in seconds and doubles as the
//! delta-time value reported for the very first frame, before a previous
//! timestamp exists.
//!
//! # Examples
//!
//! ```
//! use rastty_types::{ControlAction, SCREEN_WIDTH, SCREEN_HEIGHT, TARGET_FRAME_TIME};
//!
//! assert_eq!(SCREEN_WIDTH, 300);
//! assert_eq!(SCREEN_HEIGHT, 300);
//! assert!(TARGET_FRAME_TIME > 0.016 && TARGET_FRAME_TIME < 0.017);
//!
//! let action = ControlAction::Shutdown;
//! assert_eq!(action.as_str(), "shutdown");
//! ```

/// Render target width in logical pixels (doubled to terminal columns on output)
pub const SCREEN_WIDTH: u16 = 300;

/// Render target height in rows
pub const SCREEN_HEIGHT: u16 = 300;

/// Default vertical field of view in degrees
pub const DEFAULT_FOV_DEG: f32 = 90.0;

/// Default near clip plane distance
pub const DEFAULT_Z_NEAR: f32 = 0.1;

/// Default far clip plane distance
pub const DEFAULT_Z_FAR: f32 = 1000.0;

/// Intended frame rate cap in frames per second (informational, not enforced)
pub const FRAME_RATE_LIMIT: f32 = 60.0;

/// Target duration of one frame in seconds
///
/// Also substituted as the delta time of the first frame, when no previous
/// frame timestamp exists yet.
pub const TARGET_FRAME_TIME: f32 = 1.0 / FRAME_RATE_LIMIT;

/// Actions a user can request through live input
///
/// The renderer recognizes a single command today. Keeping it an enum (and
/// batching it through the input layer) leaves room for camera controls
/// without reshaping the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Stop the frame loop and restore the terminal
    Shutdown,
}

impl ControlAction {
    /// Parse an action from a string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use rastty_types::ControlAction;
    ///
    /// assert_eq!(ControlAction::from_str("shutdown"), Some(ControlAction::Shutdown));
    /// assert_eq!(ControlAction::from_str("Shutdown"), Some(ControlAction::Shutdown));
    /// assert_eq!(ControlAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shutdown" => Some(ControlAction::Shutdown),
            _ => None,
        }
    }

    /// Convert to a lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_constants_match_render_target() {
        assert_eq!(SCREEN_WIDTH, 300);
        assert_eq!(SCREEN_HEIGHT, 300);
    }

    #[test]
    fn target_frame_time_is_reciprocal_of_limit() {
        assert_eq!(TARGET_FRAME_TIME, 1.0 / FRAME_RATE_LIMIT);
    }

    #[test]
    fn control_action_round_trips() {
        let action = ControlAction::Shutdown;
        assert_eq!(ControlAction::from_str(action.as_str()), Some(action));
    }
}
