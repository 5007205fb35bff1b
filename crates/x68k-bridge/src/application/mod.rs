//! Application layer use cases for the bridge.
//!
//! Use cases orchestrate the `x68k-keycore` domain objects and depend on the
//! infrastructure only through traits ([`crate::infrastructure::transmit::KeyTransmitter`])
//! and plain data ([`crate::infrastructure::hid::BootReport`]), so they run
//! unchanged against real hardware, the stdin simulator, or test mocks.
//!
//! # Sub-modules
//!
//! - **`forward_keys`** – Decodes HID boot reports into key transitions,
//!   translates them to X68000 keycodes and drains the queue into a
//!   transmitter.  Runs once per USB report.

pub mod forward_keys;
