//! Infrastructure layer for the bridge.
//!
//! Contains the adapters at both ends of the translation core: USB HID report
//! decoding on the input side, keycode transmitters on the output side, and
//! configuration file storage.
//!
//! **Dependency rule**: this layer may depend on `x68k_keycore`, but MUST NOT
//! import from `application`.

pub mod hid;
pub mod storage;
pub mod transmit;
