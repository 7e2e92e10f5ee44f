//! Local-hour detection for the day/night decision.
//!
//! The styler bases its decision on the current wall-clock hour at the
//! moment it runs. Detection goes through a process-global hour source so
//! tests can pin the hour. Use [`set_hour_source`] to override it.
//!
//! ```rust
//! use pagelight_theme::{current_hour, set_hour_source};
//!
//! // For testing, pin the clock to 23:00
//! set_hour_source(|| 23);
//! assert_eq!(current_hour(), 23);
//! ```

use chrono::Timelike;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// A source of the current local hour (0-23).
pub type HourSource = fn() -> u32;

static HOUR_SOURCE: Lazy<Mutex<HourSource>> = Lazy::new(|| Mutex::new(local_hour));

/// Overrides the source used to determine the current local hour.
///
/// This is useful for testing or when the host wants to drive the styler
/// from its own clock. There is no direct way to reset to the wall clock;
/// tests should restore their changes.
pub fn set_hour_source(source: HourSource) {
    let mut guard = HOUR_SOURCE.lock().unwrap();
    *guard = source;
}

/// Returns the current local hour (0-23).
///
/// Reads the system wall clock unless a source was installed via
/// [`set_hour_source`].
pub fn current_hour() -> u32 {
    let source = HOUR_SOURCE.lock().unwrap();
    (*source)()
}

fn local_hour() -> u32 {
    chrono::Local::now().hour()
}
