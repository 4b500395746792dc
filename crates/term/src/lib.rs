//! Terminal presentation layer.
//!
//! This module owns the terminal lifecycle (raw mode, alternate screen) and
//! flushes rendered frames to stdout. It intentionally avoids any widget or
//! layout framework: a frame is a [`rastty_core::Screen`] of glyphs, and
//! drawing it is a single buffered write.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Restore the terminal even when a frame later fails
//! - Compensate for non-square terminal cells (each glyph is printed twice)

pub mod session;

pub use rastty_core as core;

pub use session::{encode_frame_into, TerminalSession};
