//! The brightness reporting loop.

use crate::display::DisplayBrightness;
use crate::error::BrightnessError;
use crate::reading::Brightness;

use log::{debug, trace};
use std::convert::Infallible;
use std::io::Write;
use std::time::Duration;

/// Pause between two samples.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Prefix of every printed line.
pub const LABEL: &str = "Current brightness: ";

/// Format one output line, without the trailing newline.
///
/// ```
/// use brightwatch_core::{format_line, Brightness};
///
/// assert_eq!(format_line(Brightness::from_percent(75)), "Current brightness: 0.75");
/// ```
pub fn format_line(level: Brightness) -> String {
    format!("{}{}", LABEL, level)
}

/// Samples a display and prints one line per reading.
///
/// The loop alternates between sampling (query, print) and waiting
/// (sleep for the interval). It has no exit other than an error.
///
/// # Example
///
/// ```
/// use brightwatch_core::{Brightness, MockDisplay, Reporter};
///
/// let display = MockDisplay::new(Brightness::from_percent(40));
/// let mut out = Vec::new();
/// let mut reporter = Reporter::new(&display, &mut out);
/// reporter.sample()?;
/// drop(reporter);
/// assert_eq!(out, b"Current brightness: 0.40\n");
/// # Ok::<(), brightwatch_core::BrightnessError>(())
/// ```
pub struct Reporter<D, W> {
    display: D,
    out: W,
    interval: Duration,
}

impl<D: DisplayBrightness, W: Write> Reporter<D, W> {
    /// Create a reporter that samples every [`POLL_INTERVAL`].
    pub fn new(display: D, out: W) -> Self {
        Self::with_interval(display, out, POLL_INTERVAL)
    }

    /// Create a reporter with a custom pause between samples.
    pub fn with_interval(display: D, out: W, interval: Duration) -> Self {
        Self {
            display,
            out,
            interval,
        }
    }

    /// The pause between samples.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Query the primary display's current brightness.
    pub fn get_current_brightness(&self) -> Result<Brightness, BrightnessError> {
        self.display.get_current_brightness()
    }

    /// Take one sample and print it.
    ///
    /// Nothing is written if the query fails.
    pub fn sample(&mut self) -> Result<Brightness, BrightnessError> {
        let level = self.get_current_brightness()?;
        let line = format_line(level);
        trace!("{}", line);

        writeln!(self.out, "{}", line).map_err(BrightnessError::Output)?;
        self.out.flush().map_err(BrightnessError::Output)?;
        Ok(level)
    }

    /// Sample, print and sleep forever.
    ///
    /// Returns only when a query or a write fails.
    pub fn run_forever(&mut self) -> Result<Infallible, BrightnessError> {
        debug!(
            "polling {} brightness every {:?}",
            self.display.name(),
            self.interval
        );
        loop {
            self.sample()?;
            std::thread::sleep(self.interval);
        }
    }
}
