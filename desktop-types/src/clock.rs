use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::config::ClockConfig;

/// Formatted time and date for the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

impl ClockReading {
    pub fn at(now: NaiveDateTime, config: &ClockConfig) -> Self {
        Self {
            time: format_lossy(now, &config.time_format),
            date: format_lossy(now, &config.date_format),
        }
    }
}

// A bad format string yields whatever was written before the error.
fn format_lossy(now: NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", now.format(format));
    out
}

/// Handle to a recurring callback that can be stopped.
pub trait CancelTimer {
    fn cancel(self);
}

/// Owns a timer handle and cancels it exactly once, on [`dispose`] or drop.
///
/// [`dispose`]: ScopedTimer::dispose
pub struct ScopedTimer<H: CancelTimer> {
    handle: Option<H>,
}

impl<H: CancelTimer> ScopedTimer<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the timer. Returns `false` if it was already released.
    pub fn dispose(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                tracing::debug!("Timer released");
                true
            }
            None => false,
        }
    }
}

impl<H: CancelTimer> Drop for ScopedTimer<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
