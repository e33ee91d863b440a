//! Soft drop hold tracking for terminal environments.
//!
//! Terminals with keyboard enhancement report releases; most only send
//! presses, repeated while the key is held. Without a release, the hold ends
//! once no press has arrived for the grace period.

use crate::map::is_soft_drop_key;
use crate::types::{Intent, SOFT_DROP_GRACE_MS};
use crossterm::event::KeyCode;

#[derive(Debug, Clone)]
pub struct SoftDropTracker {
    held: bool,
    since_press_ms: u32,
    grace_ms: u32,
}

impl SoftDropTracker {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            since_press_ms: 0,
            grace_ms,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Record a soft drop press (or auto-repeat)
    pub fn press(&mut self) {
        self.held = true;
        self.since_press_ms = 0;
    }

    /// A release event for `code`; yields the release intent if it ends a hold
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<Intent> {
        if is_soft_drop_key(code) {
            self.release()
        } else {
            None
        }
    }

    /// Advance the grace clock; yields the release intent once it runs out
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Intent> {
        if !self.held {
            return None;
        }
        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.since_press_ms > self.grace_ms {
            self.release()
        } else {
            None
        }
    }

    /// Forget any hold without reporting it (new game, reset)
    pub fn reset(&mut self) {
        self.held = false;
        self.since_press_ms = 0;
    }

    fn release(&mut self) -> Option<Intent> {
        if !self.held {
            return None;
        }
        self.reset();
        Some(Intent::SoftDropRelease)
    }
}

impl Default for SoftDropTracker {
    fn default() -> Self {
        Self::new()
    }
}
