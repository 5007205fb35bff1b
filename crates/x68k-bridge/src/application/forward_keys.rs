//! ForwardKeysUseCase: turns USB keyboard reports into X68000 keycodes.
//!
//! Each raw report is decoded, diffed against the previous one, translated
//! through the active keyboard model and queued.  [`ForwardKeysUseCase::flush`]
//! then drains the queue into a [`KeyTransmitter`].
//!
//! # Architecture
//!
//! The use case depends only on the [`KeyTransmitter`] trait and on
//! `x68k-keycore` types, so it is unit-testable with a mock transmitter.

use thiserror::Error;
use tracing::{debug, warn};
use x68k_keycore::{KeyEvent, KeyPipeline, KeyTransition, Outcome, PipelineError};

use crate::infrastructure::hid::{BootReport, HidError, ReportTracker};
use crate::infrastructure::storage::config::AppConfig;
use crate::infrastructure::transmit::{KeyTransmitter, TransmitError};

/// Error type for the forward-keys use case.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("HID error: {0}")]
    Hid(#[from] HidError),
    #[error("transmit error: {0}")]
    Transmit(#[from] TransmitError),
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Forwards key events from a boot-protocol keyboard to the X68000.
#[derive(Debug)]
pub struct ForwardKeysUseCase {
    tracker: ReportTracker,
    pipeline: KeyPipeline,
    /// Releases rejected by a full queue, retried once it drains.
    deferred: Vec<KeyEvent>,
    dropped: u64,
}

impl ForwardKeysUseCase {
    pub fn new(pipeline: KeyPipeline) -> Self {
        Self {
            tracker: ReportTracker::new(),
            pipeline,
            deferred: Vec::new(),
            dropped: 0,
        }
    }

    /// Builds the use case for the keyboard and queue described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Pipeline`] for a zero Fn keycode or queue depth.
    pub fn from_config(config: &AppConfig) -> Result<Self, ForwardError> {
        let pipeline = KeyPipeline::new(
            config.keyboard.model,
            config.keyboard.fn_keycode,
            config.queue.depth,
        )?;
        debug!(
            model = %config.keyboard.model,
            fn_keycode = config.keyboard.fn_keycode,
            depth = config.queue.depth,
            "forward-keys use case ready"
        );
        Ok(Self::new(pipeline))
    }

    /// Processes one raw boot report and returns what happened to each key
    /// event it contained.
    ///
    /// Presses that do not fit in the queue are dropped and counted in
    /// [`dropped_events`](Self::dropped_events).  Releases that do not fit
    /// are kept and retried by [`flush`](Self::flush), so the X68000 never
    /// sees a key stuck down.  The remaining events of the report are still
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Hid`] if `bytes` is not a valid boot report.
    pub fn handle_report(&mut self, bytes: &[u8]) -> Result<Vec<Outcome>, ForwardError> {
        let report = BootReport::parse(bytes)?;
        let mut outcomes = Vec::new();

        for event in self.tracker.diff(report) {
            match self.pipeline.handle(event) {
                Ok(outcome) => outcomes.push(outcome),
                Err(PipelineError::QueueFull { usage, code })
                    if event.transition == KeyTransition::Released =>
                {
                    debug!(usage, code, "release deferred until the queue drains");
                    self.deferred.push(event);
                }
                Err(PipelineError::QueueFull { usage, code }) => {
                    self.dropped += 1;
                    warn!(usage, code, dropped = self.dropped, "key event dropped");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(outcomes)
    }

    /// Queues as many deferred releases as fit, oldest first.
    fn retry_deferred(&mut self) -> Result<(), ForwardError> {
        while let Some(&event) = self.deferred.first() {
            match self.pipeline.handle(event) {
                Ok(_) => {
                    self.deferred.remove(0);
                }
                Err(PipelineError::QueueFull { .. }) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Sends queued keycodes in order until the queue is empty.
    ///
    /// A byte leaves the queue only after `transmitter` accepted it.  On
    /// failure the failed byte and everything behind it stay queued for the
    /// next flush.  Deferred releases are queued as room frees up.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Transmit`] from the first failed send.
    pub fn flush(&mut self, transmitter: &mut dyn KeyTransmitter) -> Result<usize, ForwardError> {
        let mut sent = 0;
        self.retry_deferred()?;
        while let Some(code) = self.pipeline.peek_code() {
            if let Err(e) = transmitter.send(code) {
                debug!(sent, pending = self.pipeline.pending(), "flush interrupted: {e}");
                return Err(e.into());
            }
            self.pipeline.next_code();
            sent += 1;
            self.retry_deferred()?;
        }
        Ok(sent)
    }

    /// Number of key events lost to a full queue since creation or reset.
    pub fn dropped_events(&self) -> u64 {
        self.dropped
    }

    /// Number of keycodes waiting for [`flush`](Self::flush).
    pub fn pending(&self) -> u8 {
        self.pipeline.pending()
    }

    /// Number of releases waiting for room in the queue.
    pub fn deferred_releases(&self) -> usize {
        self.deferred.len()
    }

    /// Read access to the underlying pipeline.
    pub fn pipeline(&self) -> &KeyPipeline {
        &self.pipeline
    }

    /// Forgets all keyboard state, as after the keyboard is unplugged.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.pipeline.reset();
        self.deferred.clear();
        self.dropped = 0;
    }
}
