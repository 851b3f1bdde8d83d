//! # Code Scanner
//!
//! Turns raw scanner input into decoded payloads.
//!
//! Hand-held QR scanners present themselves as a keyboard: each read is
//! typed as the payload followed by Enter. [`WedgeScanner`] accepts those
//! lines while the add/remove screen is open.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard ──► Add/Remove screen ──► start()                           │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │               decode(line, now) ──► Some(payload) ──► scan command     │
//! │                      │          └─► None (blank or double-fire)        │
//! │                      ▼                                                  │
//! │  Dashboard ◄── Back ────────────► release()                            │
//! │                                   decode() now fails                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Double-Fire Window
//! Scanners often emit the same code twice for one trigger pull. A repeat
//! of the previous payload within one frame interval (`1s / fps`) is
//! dropped. A repeat after the window is a separate scan.
//!
//! The window also covers lines typed into a prompt opened by a scan, so a
//! double-fire never lands as an item name or a removal quantity.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{AppError, AppResult};

/// Default decode rate.
pub const DEFAULT_SCANNER_FPS: u32 = 10;

/// Highest accepted decode rate.
pub const MAX_SCANNER_FPS: u32 = 60;

/// Scanner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    fps: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            fps: DEFAULT_SCANNER_FPS,
        }
    }
}

impl ScannerConfig {
    /// Creates a config, checking `fps` is within 1..=60.
    pub fn new(fps: u32) -> AppResult<Self> {
        if fps == 0 || fps > MAX_SCANNER_FPS {
            return Err(AppError::config(format!(
                "fps must be between 1 and {}, got {}",
                MAX_SCANNER_FPS, fps
            )));
        }
        Ok(ScannerConfig { fps })
    }

    /// Decode rate.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Time between two decode attempts; also the double-fire window.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

/// Source of decoded codes.
pub trait CodeScanner {
    /// Acquires the scanner. Starting a running scanner is a no-op.
    fn start(&mut self) -> AppResult<()>;

    /// Decodes one raw read taken at `at`.
    ///
    /// ## Returns
    /// * `Ok(Some(payload))` - A new scan
    /// * `Ok(None)` - Nothing to act on (blank read or double-fire)
    /// * `Err(AppError)` - The scanner is not running
    fn decode(&mut self, raw: &str, at: Instant) -> AppResult<Option<String>>;

    /// Releases the scanner.
    fn release(&mut self);

    /// Returns true between `start` and `release`.
    fn is_running(&self) -> bool;
}

/// Keyboard-wedge scanner fed with console lines.
#[derive(Debug, Default)]
pub struct WedgeScanner {
    config: ScannerConfig,
    running: bool,
    last: Option<(String, Instant)>,
}

impl WedgeScanner {
    /// Creates a stopped scanner.
    pub fn new(config: ScannerConfig) -> Self {
        WedgeScanner {
            config,
            running: false,
            last: None,
        }
    }

    /// Active settings.
    pub fn config(&self) -> ScannerConfig {
        self.config
    }

    /// Returns true if `raw` repeats the last decoded payload inside the
    /// double-fire window. Never true while stopped.
    pub fn is_double_fire(&self, raw: &str, at: Instant) -> bool {
        if !self.running {
            return false;
        }

        let payload = raw.trim_end_matches(['\r', '\n']);
        match &self.last {
            Some((previous, seen)) => {
                previous == payload
                    && at.saturating_duration_since(*seen) < self.config.frame_interval()
            }
            None => false,
        }
    }
}

impl CodeScanner for WedgeScanner {
    fn start(&mut self) -> AppResult<()> {
        if !self.running {
            debug!(fps = self.config.fps, "Scanner started");
            self.running = true;
            self.last = None;
        }
        Ok(())
    }

    fn decode(&mut self, raw: &str, at: Instant) -> AppResult<Option<String>> {
        if !self.running {
            return Err(AppError::scanner("Scanner is not running"));
        }

        // The wedge terminates every read with Enter; the payload itself is
        // kept verbatim, including inner and leading spaces.
        let payload = raw.trim_end_matches(['\r', '\n']);
        if payload.is_empty() {
            return Ok(None);
        }

        if self.is_double_fire(payload, at) {
            debug!(payload = %payload, "Dropped double-fire read");
            return Ok(None);
        }

        self.last = Some((payload.to_string(), at));
        Ok(Some(payload.to_string()))
    }

    fn release(&mut self) {
        if self.running {
            debug!("Scanner released");
        }
        self.running = false;
        self.last = None;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
