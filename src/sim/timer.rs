//! Elapsed play-time counter
//!
//! Driven by an external one-second clock, independent of the frame step.
//! It only ever touches its own counter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTimer {
    elapsed_secs: u32,
    running: bool,
}

impl PlayTimer {
    /// Restart from zero and begin counting
    pub fn start(&mut self) {
        self.elapsed_secs = 0;
        self.running = true;
    }

    /// Stop counting. Stopping a stopped timer is a no-op.
    /// Returns true if the timer was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// One second passed. Returns the new total if the timer is running.
    pub fn tick_second(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        Some(self.elapsed_secs)
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
