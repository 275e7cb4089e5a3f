//! Mock display for testing.

use crate::display::DisplayBrightness;
use crate::error::BrightnessError;
use crate::reading::Brightness;
use std::sync::Mutex;

/// A mock display for testing.
///
/// This allows testing code that depends on [`DisplayBrightness`] without
/// display hardware or platform frameworks.
///
/// # Example
///
/// ```
/// use brightwatch_core::{Brightness, DisplayBrightness, MockDisplay};
///
/// let mock = MockDisplay::new(Brightness::from_percent(75));
/// assert_eq!(mock.get_current_brightness().unwrap().to_string(), "0.75");
/// ```
pub struct MockDisplay {
    state: Mutex<MockState>,
}

struct MockState {
    level: Brightness,
    should_fail: bool,
    reads_left: Option<usize>,
    reads: usize,
}

impl MockDisplay {
    /// Create a mock display at the given brightness.
    pub fn new(level: Brightness) -> Self {
        Self {
            state: Mutex::new(MockState {
                level,
                should_fail: false,
                reads_left: None,
                reads: 0,
            }),
        }
    }

    /// Set whether every operation should fail as if no display were present.
    pub fn set_failure_mode(&self, should_fail: bool) {
        self.lock().should_fail = should_fail;
    }

    /// Let `reads` more queries succeed, then fail every later one.
    pub fn fail_after(&self, reads: usize) {
        self.lock().reads_left = Some(reads);
    }

    /// Number of successful queries so far.
    pub fn reads(&self) -> usize {
        self.lock().reads
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new(Brightness::MAX)
    }
}

impl DisplayBrightness for MockDisplay {
    fn get_current_brightness(&self) -> Result<Brightness, BrightnessError> {
        let mut state = self.lock();
        if state.should_fail {
            return Err(BrightnessError::NoDisplay);
        }
        if let Some(left) = state.reads_left.as_mut() {
            if *left == 0 {
                return Err(BrightnessError::NoDisplay);
            }
            *left -= 1;
        }
        state.reads += 1;
        Ok(state.level)
    }

    fn set_brightness(&self, level: Brightness) -> Result<(), BrightnessError> {
        let mut state = self.lock();
        if state.should_fail {
            return Err(BrightnessError::NoDisplay);
        }
        state.level = level;
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
