//! # x68k-keycore
//!
//! Translation and buffering core for a USB keyboard adapter that drives the
//! keyboard port of an X68000-family computer.
//!
//! This crate has zero dependencies on OS APIs, USB stacks, or serial drivers.
//! The host-side `x68k-bridge` binary drives it from decoded USB reports.
//!
//! # Architecture overview (for beginners)
//!
//! A USB keyboard reports every key as a *HID Usage ID* (0x04 is "A", 0xE0 is
//! Left-Ctrl, and so on).  The X68000 does not understand those numbers; its
//! keyboard port speaks a proprietary one-byte *keycode* per key.  The adapter
//! therefore sits between the two and does two things:
//!
//! - **`keymap`** – Looks up the X68000 keycode for a HID Usage ID in a fixed
//!   256-entry table.  Several tables exist (one per supported keyboard
//!   layout, plus an "Fn + NUM" variant that is selected while the Fn key is
//!   held).
//!
//! - **`fifo`** – A tiny fixed-capacity byte queue.  USB events arrive in
//!   bursts, while the X68000 serial line drains one byte at a time, so the
//!   translated keycodes are parked here until the transmitter is ready.
//!
//! - **`model`**, **`latch`**, **`pipeline`** – Glue: the configured keyboard
//!   model picks a table pair, the Fn latch records whether the alternate
//!   table is active, and the pipeline ties translation to buffering.
//!
//! # Concurrency
//!
//! Nothing in this crate synchronises.  Each [`ByteFifo`] and
//! [`KeyPipeline`] is meant to be owned by a single sequential flow of
//! control.  The [`KeyMap`] tables are immutable and can be read from
//! anywhere.

pub mod fifo;
pub mod keymap;
pub mod latch;
pub mod model;
pub mod pipeline;

// Re-export the most-used types at the crate root so callers can write
// `x68k_keycore::ByteFifo` instead of `x68k_keycore::fifo::ByteFifo`.
pub use fifo::{ByteFifo, FifoError};
pub use keymap::hid::HidKeyCode;
pub use keymap::{translate, KeyMap, FN_KEYCODE};
pub use latch::FnLatch;
pub use model::{KeyboardModel, ModelError, TablePair};
pub use pipeline::{KeyEvent, KeyPipeline, KeyTransition, Outcome, PipelineError};
