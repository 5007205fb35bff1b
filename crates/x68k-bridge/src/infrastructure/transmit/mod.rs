//! Output side of the bridge: delivering X68000 keycodes to the host.
//!
//! The X68000 keyboard line is a one-byte-per-event serial stream.  The
//! [`KeyTransmitter`] trait is the seam between the use case and whatever
//! carries those bytes; [`writer::WriterTransmitter`] writes them as text to
//! any [`std::io::Write`].

use thiserror::Error;

pub mod writer;

/// Error type for keycode transmission.
#[derive(Debug, Error)]
pub enum TransmitError {
    /// The host is not ready to accept a byte; retry later.
    #[error("host not ready")]
    Busy,
    /// The output has gone away.
    #[error("output closed")]
    Closed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sends one keycode byte to the X68000.
///
/// Infrastructure implementations write to a device; tests use the
/// `mockall`-generated `MockKeyTransmitter`.
#[cfg_attr(test, mockall::automock)]
pub trait KeyTransmitter: Send {
    /// Sends `keycode`.  On error the byte is considered not delivered.
    fn send(&mut self, keycode: u8) -> Result<(), TransmitError>;
}
