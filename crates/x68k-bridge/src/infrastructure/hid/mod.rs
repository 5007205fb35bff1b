//! USB HID keyboard input.
//!
//! A boot-protocol keyboard reports its whole state every time anything
//! changes: one modifier bitmap and up to six pressed Usage IDs.  The
//! translator works on individual press and release events, so
//! [`ReportTracker`] compares each report with the previous one and emits the
//! difference.
//!
//! ```text
//!  byte 0      byte 1     bytes 2..8
//! ┌─────────┬──────────┬──────────────────────────────┐
//! │modifiers│ reserved │ key0 key1 key2 key3 key4 key5│
//! └─────────┴──────────┴──────────────────────────────┘
//!  bit 0 = LeftCtrl (0xE0) … bit 7 = RightGUI (0xE7)
//! ```
//!
//! # Testability
//!
//! The [`HidSource`] trait lets tests feed reports through
//! [`mock::MockHidSource`] instead of a real device.

use std::io::BufRead;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc, Arc,
};

use tracing::{debug, warn};
use x68k_keycore::{HidKeyCode, KeyEvent};

pub mod mock;

/// Length in bytes of a boot-protocol keyboard report.
pub const BOOT_REPORT_LEN: usize = 8;

/// Usage ID the keyboard puts in every key slot when too many keys are down.
pub const ERROR_ROLLOVER: u8 = 0x01;

/// Error type for HID input operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum HidError {
    #[error("boot report must be {expected} bytes, got {actual}")]
    ReportLength { expected: usize, actual: usize },
    #[error("invalid hex report: {0:?}")]
    InvalidHex(String),
    #[error("HID source unavailable: {0}")]
    SourceUnavailable(String),
}

/// One decoded boot-protocol keyboard report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootReport {
    /// Modifier bitmap, bit n = Usage ID `0xE0 + n`.
    pub modifiers: u8,
    /// Pressed Usage IDs; `0x00` marks an empty slot.
    pub keys: [u8; 6],
}

impl BootReport {
    /// Decodes an 8-byte boot report.
    ///
    /// # Errors
    ///
    /// Returns [`HidError::ReportLength`] if `bytes` is not exactly
    /// [`BOOT_REPORT_LEN`] long.
    pub fn parse(bytes: &[u8]) -> Result<Self, HidError> {
        if bytes.len() != BOOT_REPORT_LEN {
            return Err(HidError::ReportLength {
                expected: BOOT_REPORT_LEN,
                actual: bytes.len(),
            });
        }
        let mut keys = [0u8; 6];
        keys.copy_from_slice(&bytes[2..BOOT_REPORT_LEN]);
        Ok(Self {
            modifiers: bytes[0],
            keys,
        })
    }

    /// Returns `true` if the keyboard signalled a phantom state.
    pub fn is_rollover(&self) -> bool {
        self.keys.iter().any(|&k| k == ERROR_ROLLOVER)
    }

    /// Returns `true` if `usage` is down in this report, modifiers included.
    pub fn is_pressed(&self, usage: u8) -> bool {
        if let Some(bit) = HidKeyCode::from_u8(usage).modifier_bit() {
            return self.modifiers & (1 << bit) != 0;
        }
        usage != 0 && self.keys.contains(&usage)
    }

    /// Iterates the non-modifier keys that are down.
    fn keys_down(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys.iter().copied().filter(|&k| k != 0)
    }
}

/// Turns successive boot reports into press and release events.
#[derive(Debug, Clone, Default)]
pub struct ReportTracker {
    previous: BootReport,
}

impl ReportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events that lead from the previous report to `report`.
    ///
    /// Releases come first so a key that moved between slots in the same
    /// report is never seen as pressed twice.  Within each group modifiers
    /// are released after ordinary keys and pressed before them, which keeps
    /// Shift held around the key it modifies.
    ///
    /// A rollover report yields no events and does not replace the stored
    /// state.
    pub fn diff(&mut self, report: BootReport) -> Vec<KeyEvent> {
        if report.is_rollover() {
            warn!("keyboard reported rollover, report ignored");
            return Vec::new();
        }

        let prev = self.previous;
        let mut events = Vec::new();

        events.extend(
            prev.keys_down()
                .filter(|&k| !report.keys.contains(&k))
                .map(KeyEvent::released),
        );
        events.extend(
            changed_modifiers(prev.modifiers & !report.modifiers).map(KeyEvent::released),
        );
        events.extend(
            changed_modifiers(report.modifiers & !prev.modifiers).map(KeyEvent::pressed),
        );
        events.extend(
            report
                .keys_down()
                .filter(|&k| !prev.keys.contains(&k))
                .map(KeyEvent::pressed),
        );

        if !events.is_empty() {
            debug!(count = events.len(), "report produced key events");
        }
        self.previous = report;
        events
    }

    /// Forgets the previous report, as after a device reconnect.
    pub fn reset(&mut self) {
        self.previous = BootReport::default();
    }
}

/// Usage IDs of the modifier bits set in `mask`, lowest bit first.
fn changed_modifiers(mask: u8) -> impl Iterator<Item = u8> {
    (0..8u8)
        .filter(move |bit| mask & (1 << bit) != 0)
        .filter_map(HidKeyCode::from_modifier_bit)
        .map(HidKeyCode::as_u8)
}

/// Decodes a line of hex text such as `"02 00 04 00 00 00 00 00"` into bytes.
///
/// Whitespace, `,` and `:` between bytes are ignored, so `"0200040000000000"`
/// decodes to the same report.
///
/// # Errors
///
/// Returns [`HidError::InvalidHex`] for an odd digit count or a non-hex
/// character.
pub fn parse_hex_report(line: &str) -> Result<Vec<u8>, HidError> {
    let digits: Vec<u8> = line
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b',' && *b != b':')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(HidError::InvalidHex(line.to_string()));
    }
    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| HidError::InvalidHex(line.to_string()))
        })
        .collect()
}

/// Trait abstracting where raw HID reports come from.
///
/// The binary uses [`StdinHidSource`]; tests use [`mock::MockHidSource`].
pub trait HidSource: Send {
    /// Starts the source and returns a receiver of raw report bytes.
    fn start(&self) -> Result<mpsc::Receiver<Vec<u8>>, HidError>;
    /// Stops the source.
    fn stop(&self);
}

/// Reads hex-encoded reports from standard input, one per line.
///
/// Blank lines and lines starting with `#` are skipped; lines that are not
/// valid hex are logged and skipped.  The reader thread blocks on stdin, so
/// [`HidSource::stop`] takes effect after the next line or at end of input.
#[derive(Debug, Default)]
pub struct StdinHidSource {
    stopped: Arc<AtomicBool>,
}

impl StdinHidSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HidSource for StdinHidSource {
    fn start(&self) -> Result<mpsc::Receiver<Vec<u8>>, HidError> {
        let (tx, rx) = mpsc::channel();
        let stopped = Arc::clone(&self.stopped);
        stopped.store(false, Ordering::SeqCst);

        std::thread::Builder::new()
            .name("hid-stdin".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    if stopped.load(Ordering::SeqCst) {
                        break;
                    }
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            warn!("stdin read failed: {e}");
                            break;
                        }
                    };
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    match parse_hex_report(trimmed) {
                        Ok(bytes) => {
                            if tx.send(bytes).is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!("skipping input line: {e}"),
                    }
                }
                debug!("stdin HID source finished");
            })
            .map_err(|e| HidError::SourceUnavailable(e.to_string()))?;

        Ok(rx)
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x68k_keycore::KeyTransition;

    fn report(modifiers: u8, keys: &[u8]) -> BootReport {
        let mut bytes = [0u8; BOOT_REPORT_LEN];
        bytes[0] = modifiers;
        bytes[2..2 + keys.len()].copy_from_slice(keys);
        BootReport::parse(&bytes).expect("valid report")
    }

    fn summary(events: &[KeyEvent]) -> Vec<(u8, bool)> {
        events
            .iter()
            .map(|e| (e.usage, e.transition == KeyTransition::Pressed))
            .collect()
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            BootReport::parse(&[0; 7]),
            Err(HidError::ReportLength {
                expected: 8,
                actual: 7
            })
        );
        assert!(BootReport::parse(&[0; 9]).is_err());
    }

    #[test]
    fn test_parse_skips_reserved_byte() {
        let r = BootReport::parse(&[0x02, 0xFF, 0x04, 0, 0, 0, 0, 0x05]).unwrap();
        assert_eq!(r.modifiers, 0x02);
        assert_eq!(r.keys, [0x04, 0, 0, 0, 0, 0x05]);
    }

    #[test]
    fn test_is_pressed_covers_modifier_bits() {
        let r = report(0b0000_0010, &[0x04]);
        assert!(r.is_pressed(0xE1));
        assert!(!r.is_pressed(0xE0));
        assert!(r.is_pressed(0x04));
        assert!(!r.is_pressed(0x00));
    }

    #[test]
    fn test_diff_single_key_press_and_release() {
        // Arrange
        let mut tracker = ReportTracker::new();

        // Act
        let down = tracker.diff(report(0, &[0x04]));
        let up = tracker.diff(report(0, &[]));

        // Assert
        assert_eq!(summary(&down), vec![(0x04, true)]);
        assert_eq!(summary(&up), vec![(0x04, false)]);
    }

    #[test]
    fn test_diff_orders_modifier_press_before_key_and_release_after() {
        // Arrange
        let mut tracker = ReportTracker::new();

        // Act: Shift+A down together, then both up together.
        let down = tracker.diff(report(0b0000_0010, &[0x04]));
        let up = tracker.diff(report(0, &[]));

        // Assert
        assert_eq!(summary(&down), vec![(0xE1, true), (0x04, true)]);
        assert_eq!(summary(&up), vec![(0x04, false), (0xE1, false)]);
    }

    #[test]
    fn test_diff_key_moving_slot_is_not_repressed() {
        let mut tracker = ReportTracker::new();
        tracker.diff(report(0, &[0x04, 0x05]));

        // 0x04 released, 0x05 shifts into slot 0.
        let events = tracker.diff(report(0, &[0x05]));

        assert_eq!(summary(&events), vec![(0x04, false)]);
    }

    #[test]
    fn test_diff_releases_before_presses_in_one_report() {
        let mut tracker = ReportTracker::new();
        tracker.diff(report(0, &[0x04]));

        let events = tracker.diff(report(0, &[0x05]));

        assert_eq!(summary(&events), vec![(0x04, false), (0x05, true)]);
    }

    #[test]
    fn test_diff_ignores_rollover_and_keeps_state() {
        // Arrange
        let mut tracker = ReportTracker::new();
        tracker.diff(report(0, &[0x04]));

        // Act
        let rollover = tracker.diff(report(0, &[ERROR_ROLLOVER; 6]));
        let after = tracker.diff(report(0, &[]));

        // Assert
        assert!(rollover.is_empty());
        assert_eq!(summary(&after), vec![(0x04, false)]);
    }

    #[test]
    fn test_diff_identical_report_yields_nothing() {
        let mut tracker = ReportTracker::new();
        tracker.diff(report(0x01, &[0x04]));
        assert!(tracker.diff(report(0x01, &[0x04])).is_empty());
    }

    #[test]
    fn test_reset_forgets_previous_report() {
        let mut tracker = ReportTracker::new();
        tracker.diff(report(0, &[0x04]));
        tracker.reset();
        assert_eq!(summary(&tracker.diff(report(0, &[0x04]))), vec![(0x04, true)]);
    }

    #[test]
    fn test_parse_hex_report_accepts_spaced_and_packed_forms() {
        let spaced = parse_hex_report("02 00 04 00 00 00 00 00").unwrap();
        let packed = parse_hex_report("0200040000000000").unwrap();
        let colons = parse_hex_report("02:00:04:00:00:00:00:00").unwrap();
        assert_eq!(spaced, vec![0x02, 0, 0x04, 0, 0, 0, 0, 0]);
        assert_eq!(spaced, packed);
        assert_eq!(spaced, colons);
    }

    #[test]
    fn test_parse_hex_report_rejects_bad_input() {
        assert!(matches!(parse_hex_report("0"), Err(HidError::InvalidHex(_))));
        assert!(matches!(parse_hex_report("zz"), Err(HidError::InvalidHex(_))));
    }
}
