//! Terminal input module (render-loop facing).
//!
//! This module is intentionally independent of the presentation layer. It
//! maps `crossterm` key events into [`crate::types::ControlAction`] and
//! drains pending events without blocking, so the render loop never stalls
//! waiting for a key.

pub mod map;

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

pub use rastty_types as types;

pub use map::handle_key_event;

use types::ControlAction;

/// Upper bound on actions collected per frame; later events wait a frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 8;

/// Drain all pending terminal events without blocking.
///
/// Only key-press events are considered; terminal auto-repeat and release
/// events are ignored. Returns the mapped actions in arrival order.
pub fn poll_actions() -> io::Result<ArrayVec<ControlAction, MAX_ACTIONS_PER_FRAME>> {
    let mut actions = ArrayVec::new();

    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = handle_key_event(key) {
                if actions.try_push(action).is_err() {
                    break;
                }
            }
        }
    }

    Ok(actions)
}
