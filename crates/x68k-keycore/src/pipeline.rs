//! Translation pipeline: key transitions in, X68000 bytes out.
//!
//! [`KeyPipeline`] owns everything with state: the table pair of the
//! configured model, the [`FnLatch`], the outgoing [`ByteFifo`] and a record
//! of which byte each held key was pressed with.  The translator itself stays
//! a pure function.
//!
//! # Event flow
//!
//! ```text
//! KeyEvent ──► Fn key? ──yes──► FnLatch::press / release      (nothing queued)
//!                 │
//!                 no
//!                 ▼
//!           translate(usage, latch) ──0x00──► dropped          (unmapped)
//!                 │
//!                 ▼
//!           ByteFifo::push(make | break) ──full──► PipelineError::QueueFull
//! ```
//!
//! # Release codes
//!
//! A key released after the Fn latch changed state must still report the
//! keycode it was pressed with, otherwise the X68000 would see a key that
//! never comes up.  The pipeline therefore remembers the make code of every
//! held key and derives the break code from it, not from a fresh lookup.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::fifo::{ByteFifo, FifoError};
use crate::keymap::{translate, x68k, TABLE_LEN};
use crate::latch::FnLatch;
use crate::model::{KeyboardModel, TablePair};

/// Errors raised by [`KeyPipeline`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    /// The outgoing queue could not be created.
    #[error("invalid queue: {0}")]
    Queue(#[from] FifoError),

    /// `0x00` cannot mark the Fn key because it already means "unmapped".
    #[error("fn keycode 0x00 is reserved for unmapped keys")]
    ReservedFnKeycode,

    /// The outgoing queue was full; `code` was dropped.
    #[error("keycode queue full, dropped 0x{code:02x} for usage 0x{usage:02x}")]
    QueueFull {
        /// HID Usage ID of the dropped event.
        usage: u8,
        /// X68000 byte that could not be queued.
        code: u8,
    },
}

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTransition {
    Pressed,
    Released,
}

/// One key going down or up, as decoded by the HID layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// HID Usage ID (page 0x07).
    pub usage: u8,
    pub transition: KeyTransition,
}

impl KeyEvent {
    /// A key press.
    pub fn pressed(usage: u8) -> Self {
        Self {
            usage,
            transition: KeyTransition::Pressed,
        }
    }

    /// A key release.
    pub fn released(usage: u8) -> Self {
        Self {
            usage,
            transition: KeyTransition::Released,
        }
    }
}

/// What [`KeyPipeline::handle`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// This byte was appended to the queue.
    Queued(u8),
    /// The key has no mapping in the active table.
    Unmapped,
    /// An Fn key went down.
    FnPressed,
    /// An Fn key came up.
    FnReleased,
    /// A release for a key that was never reported pressed.
    Ignored,
}

/// Translates key events and buffers the resulting X68000 bytes.
#[derive(Debug, Clone)]
pub struct KeyPipeline {
    tables: TablePair,
    fn_keycode: u8,
    latch: FnLatch,
    fifo: ByteFifo,
    /// Make code each held key was sent with, `0x00` when not held.
    held: [u8; TABLE_LEN],
}

impl KeyPipeline {
    /// Creates a pipeline for `model` with a queue of `depth` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ReservedFnKeycode`] if `fn_keycode` is 0 and
    /// [`PipelineError::Queue`] if `depth` is 0.
    pub fn new(model: KeyboardModel, fn_keycode: u8, depth: u8) -> Result<Self, PipelineError> {
        Self::with_tables(model.tables(fn_keycode), fn_keycode, depth)
    }

    /// Creates a pipeline around an explicit table pair.
    ///
    /// # Errors
    ///
    /// Same as [`KeyPipeline::new`].
    pub fn with_tables(tables: TablePair, fn_keycode: u8, depth: u8) -> Result<Self, PipelineError> {
        if fn_keycode == 0 {
            return Err(PipelineError::ReservedFnKeycode);
        }
        Ok(Self {
            tables,
            fn_keycode,
            latch: FnLatch::new(),
            fifo: ByteFifo::new(depth)?,
            held: [0; TABLE_LEN],
        })
    }

    /// Feeds one key transition through the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::QueueFull`] when the outgoing queue has no
    /// room.  Queued bytes are not affected.  A rejected press is forgotten;
    /// a rejected release leaves the key held so the caller can retry it
    /// after draining the queue.
    pub fn handle(&mut self, event: KeyEvent) -> Result<Outcome, PipelineError> {
        let usage = event.usage;

        if self.tables.is_fn_key(usage, self.fn_keycode) {
            return Ok(match event.transition {
                KeyTransition::Pressed => {
                    self.latch.press();
                    debug!(usage, "fn latch pressed");
                    Outcome::FnPressed
                }
                KeyTransition::Released => {
                    self.latch.release();
                    debug!(usage, active = self.latch.is_active(), "fn latch released");
                    Outcome::FnReleased
                }
            });
        }

        match event.transition {
            KeyTransition::Pressed => self.press(usage),
            KeyTransition::Released => self.release(usage),
        }
    }

    fn press(&mut self, usage: u8) -> Result<Outcome, PipelineError> {
        let code = translate(
            usage,
            self.latch.is_active(),
            &self.tables.primary,
            &self.tables.alternate,
        );
        if code == 0 {
            trace!(usage, fn_active = self.latch.is_active(), "unmapped key");
            return Ok(Outcome::Unmapped);
        }

        let byte = x68k::make_code(code);
        self.enqueue(usage, byte)?;
        self.held[usize::from(usage)] = byte;
        debug!(
            usage,
            code = byte,
            key = x68k::key_name(byte).unwrap_or("?"),
            fn_active = self.latch.is_active(),
            "key pressed"
        );
        Ok(Outcome::Queued(byte))
    }

    fn release(&mut self, usage: u8) -> Result<Outcome, PipelineError> {
        let make = self.held[usize::from(usage)];
        if make == 0 {
            trace!(usage, "release without press");
            return Ok(Outcome::Ignored);
        }

        // The key stays held until its break code is queued, so a release
        // rejected by a full queue can be retried.
        let byte = x68k::break_code(make);
        self.enqueue(usage, byte)?;
        self.held[usize::from(usage)] = 0;
        debug!(usage, code = byte, key = x68k::key_name(byte).unwrap_or("?"), "key released");
        Ok(Outcome::Queued(byte))
    }

    fn enqueue(&mut self, usage: u8, byte: u8) -> Result<(), PipelineError> {
        self.fifo.push(byte).map_err(|_| {
            warn!(usage, code = byte, depth = self.fifo.capacity(), "keycode queue full, event dropped");
            PipelineError::QueueFull { usage, code: byte }
        })
    }

    /// Removes and returns the next byte to transmit.
    pub fn next_code(&mut self) -> Option<u8> {
        self.fifo.pop()
    }

    /// Returns the next byte to transmit without removing it.
    pub fn peek_code(&self) -> Option<u8> {
        self.fifo.peek()
    }

    /// Number of bytes waiting for transmission.
    pub fn pending(&self) -> u8 {
        self.fifo.len()
    }

    /// Returns `true` if any non-Fn key is currently held.
    pub fn any_key_held(&self) -> bool {
        self.held.iter().any(|&code| code != 0)
    }

    /// Current Fn latch state.
    pub fn latch(&self) -> FnLatch {
        self.latch
    }

    /// The table pair this pipeline translates with.
    pub fn tables(&self) -> &TablePair {
        &self.tables
    }

    /// The keycode that marks Fn keys in the tables.
    pub fn fn_keycode(&self) -> u8 {
        self.fn_keycode
    }

    /// Drops all queued bytes, releases the latch and forgets held keys.
    ///
    /// Used when the USB keyboard is unplugged or the host resets the port.
    pub fn reset(&mut self) {
        self.fifo.clear();
        self.latch.reset();
        self.held = [0; TABLE_LEN];
        debug!("pipeline reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{HidKeyCode, FN_KEYCODE};

    fn pipeline(model: KeyboardModel) -> KeyPipeline {
        KeyPipeline::new(model, FN_KEYCODE, 16).expect("valid pipeline")
    }

    fn drain(p: &mut KeyPipeline) -> Vec<u8> {
        std::iter::from_fn(|| p.next_code()).collect()
    }

    #[test]
    fn test_new_rejects_zero_depth_and_zero_fn_keycode() {
        assert_eq!(
            KeyPipeline::new(KeyboardModel::ZuiKey, FN_KEYCODE, 0).unwrap_err(),
            PipelineError::Queue(FifoError::ZeroCapacity)
        );
        assert_eq!(
            KeyPipeline::new(KeyboardModel::ZuiKey, 0, 8).unwrap_err(),
            PipelineError::ReservedFnKeycode
        );
    }

    #[test]
    fn test_press_and_release_queue_make_then_break_code() {
        // Arrange
        let mut p = pipeline(KeyboardModel::ZuiKey);
        let a = HidKeyCode::KeyA.as_u8();

        // Act
        let down = p.handle(KeyEvent::pressed(a)).unwrap();
        let up = p.handle(KeyEvent::released(a)).unwrap();

        // Assert
        assert_eq!(down, Outcome::Queued(x68k::A));
        assert_eq!(up, Outcome::Queued(x68k::break_code(x68k::A)));
        assert_eq!(drain(&mut p), vec![0x1e, 0x9e]);
    }

    #[test]
    fn test_unmapped_key_is_not_queued() {
        let mut p = pipeline(KeyboardModel::ZuiKey);
        assert_eq!(p.handle(KeyEvent::pressed(0x31)).unwrap(), Outcome::Unmapped);
        assert_eq!(p.handle(KeyEvent::released(0x31)).unwrap(), Outcome::Ignored);
        assert_eq!(p.pending(), 0);
    }

    #[test]
    fn test_fn_key_switches_to_alternate_table_without_queueing() {
        // Arrange
        let mut p = pipeline(KeyboardModel::ZuiKeyNumFn);
        let fn_key = HidKeyCode::ControlLeft.as_u8();
        let i = HidKeyCode::KeyI.as_u8();

        // Act
        assert_eq!(p.handle(KeyEvent::pressed(fn_key)).unwrap(), Outcome::FnPressed);
        let layered = p.handle(KeyEvent::pressed(i)).unwrap();
        p.handle(KeyEvent::released(i)).unwrap();
        assert_eq!(p.handle(KeyEvent::released(fn_key)).unwrap(), Outcome::FnReleased);
        let plain = p.handle(KeyEvent::pressed(i)).unwrap();

        // Assert
        assert_eq!(layered, Outcome::Queued(x68k::KP_5));
        assert_eq!(plain, Outcome::Queued(x68k::I));
        assert_eq!(drain(&mut p), vec![x68k::KP_5, x68k::break_code(x68k::KP_5), x68k::I]);
        assert!(!p.latch().is_active());
    }

    #[test]
    fn test_release_after_fn_change_uses_press_time_code() {
        // Arrange: press I inside the Fn layer, let go of Fn first.
        let mut p = pipeline(KeyboardModel::ZuiKeyNumFn);
        let fn_key = HidKeyCode::MetaRight.as_u8();
        let i = HidKeyCode::KeyI.as_u8();
        p.handle(KeyEvent::pressed(fn_key)).unwrap();
        p.handle(KeyEvent::pressed(i)).unwrap();
        p.handle(KeyEvent::released(fn_key)).unwrap();

        // Act
        let up = p.handle(KeyEvent::released(i)).unwrap();

        // Assert
        assert_eq!(up, Outcome::Queued(x68k::break_code(x68k::KP_5)));
    }

    #[test]
    fn test_zuikey_model_sends_left_ctrl_as_ctrl() {
        let mut p = pipeline(KeyboardModel::ZuiKey);
        let outcome = p.handle(KeyEvent::pressed(HidKeyCode::ControlLeft.as_u8())).unwrap();
        assert_eq!(outcome, Outcome::Queued(x68k::CTRL));
        assert!(!p.latch().is_active());
    }

    #[test]
    fn test_queue_full_drops_event_and_keeps_existing_bytes() {
        // Arrange
        let mut p = KeyPipeline::new(KeyboardModel::ZuiKey, FN_KEYCODE, 1).unwrap();
        let a = HidKeyCode::KeyA.as_u8();
        let b = HidKeyCode::KeyB.as_u8();
        p.handle(KeyEvent::pressed(a)).unwrap();

        // Act
        let err = p.handle(KeyEvent::pressed(b)).unwrap_err();

        // Assert
        assert_eq!(err, PipelineError::QueueFull { usage: b, code: x68k::B });
        // The dropped press is not remembered, so its release is ignored.
        assert_eq!(p.next_code(), Some(x68k::A));
        assert_eq!(p.handle(KeyEvent::released(b)).unwrap(), Outcome::Ignored);
    }

    #[test]
    fn test_release_rejected_by_full_queue_can_be_retried() {
        // Arrange
        let mut p = KeyPipeline::new(KeyboardModel::ZuiKey, FN_KEYCODE, 1).unwrap();
        let a = HidKeyCode::KeyA.as_u8();
        p.handle(KeyEvent::pressed(a)).unwrap();

        // Act
        let err = p.handle(KeyEvent::released(a)).unwrap_err();
        let still_held = p.any_key_held();
        assert_eq!(p.next_code(), Some(x68k::A));
        let retried = p.handle(KeyEvent::released(a)).unwrap();

        // Assert
        assert_eq!(err, PipelineError::QueueFull { usage: a, code: x68k::break_code(x68k::A) });
        assert!(still_held, "key must stay held until its break code is queued");
        assert_eq!(retried, Outcome::Queued(0x9e));
        assert!(!p.any_key_held());
        assert_eq!(p.handle(KeyEvent::released(a)).unwrap(), Outcome::Ignored);
    }

    #[test]
    fn test_reset_clears_queue_latch_and_held_keys() {
        // Arrange
        let mut p = pipeline(KeyboardModel::NumFn);
        p.handle(KeyEvent::pressed(0xE0)).unwrap();
        p.handle(KeyEvent::pressed(HidKeyCode::KeyA.as_u8())).unwrap();

        // Act
        p.reset();

        // Assert
        assert_eq!(p.pending(), 0);
        assert!(!p.latch().is_active());
        assert!(!p.any_key_held());
        assert_eq!(
            p.handle(KeyEvent::released(HidKeyCode::KeyA.as_u8())).unwrap(),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_peek_code_does_not_consume() {
        let mut p = pipeline(KeyboardModel::ZuiKey);
        p.handle(KeyEvent::pressed(HidKeyCode::Escape.as_u8())).unwrap();
        assert_eq!(p.peek_code(), Some(x68k::ESC));
        assert_eq!(p.pending(), 1);
        assert_eq!(p.next_code(), Some(x68k::ESC));
    }
}
