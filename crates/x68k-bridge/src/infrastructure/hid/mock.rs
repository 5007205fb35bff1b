//! Mock HID source for testing.
//!
//! Lets tests inject raw report bytes without a keyboard attached.

use std::sync::{
    mpsc::{self, Sender},
    Arc, Mutex,
};

use super::{HidError, HidSource};

/// A mock implementation of [`HidSource`] that allows tests to inject reports.
#[derive(Debug, Default)]
pub struct MockHidSource {
    sender: Arc<Mutex<Option<Sender<Vec<u8>>>>>,
}

impl MockHidSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects raw report bytes, as if read from the device.
    ///
    /// Panics if `start()` has not been called or if `stop()` has been called.
    pub fn inject_report(&self, bytes: &[u8]) {
        let guard = self.sender.lock().expect("lock poisoned");
        match guard.as_ref() {
            Some(sender) => sender
                .send(bytes.to_vec())
                .expect("receiver has been dropped; call start() first"),
            None => panic!("MockHidSource::inject_report called before start()"),
        }
    }
}

impl HidSource for MockHidSource {
    fn start(&self) -> Result<mpsc::Receiver<Vec<u8>>, HidError> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        *self.sender.lock().expect("lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_hid_source_delivers_injected_reports_in_order() {
        // Arrange
        let source = MockHidSource::new();
        let rx = source.start().expect("start should succeed");

        // Act
        source.inject_report(&[0, 0, 0x04, 0, 0, 0, 0, 0]);
        source.inject_report(&[0; 8]);

        // Assert
        assert_eq!(rx.recv().unwrap()[2], 0x04);
        assert_eq!(rx.recv().unwrap(), vec![0; 8]);
    }

    #[test]
    fn test_mock_hid_source_stop_closes_channel() {
        let source = MockHidSource::new();
        let rx = source.start().expect("start should succeed");

        source.stop();

        assert!(rx.recv().is_err(), "channel should be closed after stop()");
    }

    #[test]
    #[should_panic(expected = "before start()")]
    fn test_inject_before_start_panics() {
        MockHidSource::new().inject_report(&[0; 8]);
    }
}
