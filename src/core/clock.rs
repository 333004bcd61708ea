use crate::core::state::Ticks;

/// Monotonic simulated clock. Time only moves when the engine explicitly
/// advances it, either across an idle gap or after a slice of execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimClock {
    now: Ticks,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now: 0 }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Jump to an absolute tick. Must not move backwards.
    pub fn advance_to(&mut self, t: Ticks) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {t}", self.now);
        self.now = t;
    }

    pub fn advance_by(&mut self, dt: Ticks) {
        self.now = self.now.saturating_add(dt);
    }
}
