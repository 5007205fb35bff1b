//! Text transmitter: one line per keycode.
//!
//! ```text
//! 0x1e make  A
//! 0x9e break A
//! ```
//!
//! A line is never written twice.  When the writer accepts only part of a
//! line and then reports `WouldBlock`, the unwritten tail is kept and
//! finished by the next [`KeyTransmitter::send`] for that keycode.

use std::io::{ErrorKind, Write};

use tracing::trace;
use x68k_keycore::keymap::x68k;

use super::{KeyTransmitter, TransmitError};

/// Writes each keycode as a line of text to `W`.
#[derive(Debug)]
pub struct WriterTransmitter<W: Write> {
    out: W,
    /// Unwritten tail of the line for `pending_code`.
    pending: Vec<u8>,
    pending_code: Option<u8>,
}

impl<W: Write> WriterTransmitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: Vec::new(),
            pending_code: None,
        }
    }

    /// Consumes the transmitter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Formats one output line (without the newline).
pub fn format_keycode(keycode: u8) -> String {
    let kind = if x68k::is_break(keycode) { "break" } else { "make " };
    let name = x68k::key_name(keycode).unwrap_or("?");
    format!("0x{keycode:02x} {kind} {name}")
}

impl<W: Write + Send> KeyTransmitter for WriterTransmitter<W> {
    fn send(&mut self, keycode: u8) -> Result<(), TransmitError> {
        if self.pending_code != Some(keycode) {
            let line = format_keycode(keycode);
            trace!(%line, "transmit");
            self.pending = format!("{line}\n").into_bytes();
            self.pending_code = Some(keycode);
        }

        while !self.pending.is_empty() {
            match self.out.write(&self.pending) {
                Ok(0) => return Err(TransmitError::Closed),
                Ok(n) => {
                    self.pending.drain(..n);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(map_io_error(e)),
            }
        }
        self.pending_code = None;
        self.out.flush().map_err(map_io_error)
    }
}

fn map_io_error(e: std::io::Error) -> TransmitError {
    match e.kind() {
        ErrorKind::BrokenPipe => TransmitError::Closed,
        ErrorKind::WouldBlock => TransmitError::Busy,
        _ => TransmitError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keycode_names_make_and_break() {
        assert_eq!(format_keycode(0x1E), "0x1e make  A");
        assert_eq!(format_keycode(0x9E), "0x9e break A");
        assert_eq!(format_keycode(0x6D), "0x6d make  ?");
    }

    #[test]
    fn test_writer_transmitter_appends_one_line_per_byte() {
        // Arrange
        let mut tx = WriterTransmitter::new(Vec::new());

        // Act
        tx.send(x68k::SPACE).unwrap();
        tx.send(x68k::break_code(x68k::SPACE)).unwrap();

        // Assert
        let text = String::from_utf8(tx.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0x35 make"));
        assert!(lines[1].starts_with("0xb5 break"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Accepts `budget` bytes, then blocks once before accepting the rest.
    struct Stalling {
        written: Vec<u8>,
        budget: Option<usize>,
    }

    impl Write for Stalling {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            match self.budget {
                Some(0) => {
                    self.budget = None;
                    Err(std::io::Error::from(ErrorKind::WouldBlock))
                }
                Some(n) => {
                    let take = n.min(buf.len());
                    self.budget = Some(n - take);
                    self.written.extend_from_slice(&buf[..take]);
                    Ok(take)
                }
                None => {
                    self.written.extend_from_slice(buf);
                    Ok(buf.len())
                }
            }
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_partial_write_then_would_block_finishes_line_without_repeating() {
        // Arrange
        let mut tx = WriterTransmitter::new(Stalling {
            written: Vec::new(),
            budget: Some(4),
        });

        // Act
        let first = tx.send(x68k::A);
        let retry = tx.send(x68k::A);
        tx.send(x68k::break_code(x68k::A)).unwrap();

        // Assert
        assert!(matches!(first, Err(TransmitError::Busy)));
        assert!(retry.is_ok());
        let text = String::from_utf8(tx.into_inner().written).unwrap();
        assert_eq!(text, "0x1e make  A\n0x9e break A\n");
    }

    #[test]
    fn test_broken_pipe_maps_to_closed() {
        let mut tx = WriterTransmitter::new(BrokenPipe);
        assert!(matches!(tx.send(0x1E), Err(TransmitError::Closed)));
    }
}
