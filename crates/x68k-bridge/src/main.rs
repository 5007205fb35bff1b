//! X68000 keyboard bridge entry point.
//!
//! Reads boot-protocol keyboard reports (hex, one per line) from stdin,
//! translates them and writes the X68000 keycodes to stdout.
//!
//! ```text
//! main()
//!  └─ load_config()            -- CLI path, X68K_BRIDGE_CONFIG or platform dir
//!  └─ ForwardKeysUseCase       -- tracker + translator + queue
//!  └─ StdinHidSource           (reader thread)
//!  └─ poll loop                -- handle reports, flush to WriterTransmitter
//! ```
//!
//! Usage: `x68k-bridge [CONFIG_PATH]`

use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::TryRecvError,
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use x68k_bridge::application::forward_keys::{ForwardError, ForwardKeysUseCase};
use x68k_bridge::infrastructure::hid::{HidSource, StdinHidSource};
use x68k_bridge::infrastructure::storage::config;
use x68k_bridge::infrastructure::transmit::{writer::WriterTransmitter, TransmitError};

/// Delay between polls of the report channel when it is empty.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = config::load_config(explicit.as_deref()).context("loading configuration")?;

    // Structured logging goes to stderr; stdout carries keycodes.  `RUST_LOG`
    // overrides the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level)),
        )
        .init();

    info!(
        model = %cfg.keyboard.model,
        fn_keycode = cfg.keyboard.fn_keycode,
        depth = cfg.queue.depth,
        "X68000 keyboard bridge starting"
    );

    let mut use_case = ForwardKeysUseCase::from_config(&cfg)?;
    let mut transmitter = WriterTransmitter::new(std::io::stdout());

    let source = StdinHidSource::new();
    let reports = source.start().context("starting HID source")?;

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            running_clone.store(false, Ordering::Relaxed);
        }
    });

    info!("bridge ready, reading reports from stdin.  Press Ctrl-C to exit.");

    let mut input_open = true;
    while running.load(Ordering::Relaxed) {
        match reports.try_recv() {
            Ok(bytes) => {
                if let Err(e) = use_case.handle_report(&bytes) {
                    warn!("report rejected: {e}");
                }
            }
            Err(TryRecvError::Empty) => tokio::time::sleep(POLL_INTERVAL).await,
            Err(TryRecvError::Disconnected) => {
                debug!("HID source closed");
                input_open = false;
            }
        }

        match use_case.flush(&mut transmitter) {
            Ok(_) => {}
            Err(ForwardError::Transmit(TransmitError::Busy)) => {
                tokio::time::sleep(POLL_INTERVAL).await;
            }
            Err(e) => {
                error!("output failed: {e}");
                break;
            }
        }

        if !input_open && use_case.pending() == 0 && use_case.deferred_releases() == 0 {
            break;
        }
    }

    source.stop();
    if use_case.dropped_events() > 0 {
        warn!(dropped = use_case.dropped_events(), "key events were dropped");
    }
    info!("X68000 keyboard bridge stopped");
    Ok(())
}
