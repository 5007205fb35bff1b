//! The Fn latch: which table the translator reads.
//!
//! The latch is an ordinary value owned by whoever calls
//! [`crate::keymap::translate`]; there is no global state.  It is momentary:
//! the alternate table is selected while at least one Fn key is held.
//! Tracking the number of held Fn keys keeps the layer active when both Fn
//! keys are pressed and only one is released.

/// Momentary Fn modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnLatch {
    held: u8,
}

impl FnLatch {
    /// Creates a released latch.
    pub const fn new() -> Self {
        Self { held: 0 }
    }

    /// Records an Fn key going down.
    pub fn press(&mut self) {
        self.held = self.held.saturating_add(1);
    }

    /// Records an Fn key coming back up.
    pub fn release(&mut self) {
        self.held = self.held.saturating_sub(1);
    }

    /// Returns `true` while the alternate table is selected.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.held > 0
    }

    /// Forces the latch back to the released state.
    pub fn reset(&mut self) {
        self.held = 0;
    }
}
