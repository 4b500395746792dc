//! Frame clock: measures the delta time between consecutive frames.

use std::time::Instant;

use rastty::types::TARGET_FRAME_TIME;

/// Reports how much wall time passed since the previous tick.
///
/// The first tick has no previous frame to measure against and reports
/// the target frame time instead, so the first animation step is neither
/// zero nor an arbitrary startup gap.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and return the delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.duration_since(last).as_secs_f32(),
            None => TARGET_FRAME_TIME,
        };
        self.last_frame = Some(now);
        dt
    }
}
