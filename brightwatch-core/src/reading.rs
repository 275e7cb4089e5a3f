//! Brightness reading.

use crate::error::BrightnessError;
use log::trace;
use std::fmt;

/// A display brightness level as a fraction of maximum, in `[0.0, 1.0]`.
///
/// Formats with exactly two decimal digits:
///
/// ```
/// use brightwatch_core::Brightness;
///
/// let level = Brightness::new(0.75)?;
/// assert_eq!(level.to_string(), "0.75");
/// # Ok::<(), brightwatch_core::BrightnessError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f32);

impl Brightness {
    /// Minimum brightness.
    pub const MIN: Self = Self(0.0);
    /// Maximum brightness.
    pub const MAX: Self = Self(1.0);

    /// Create a reading from a brightness fraction.
    ///
    /// Finite values outside `[0.0, 1.0]` are clamped into range.
    ///
    /// # Errors
    /// Returns [`BrightnessError::OutOfRange`] if `value` is NaN or infinite.
    pub fn new(value: f32) -> Result<Self, BrightnessError> {
        if !value.is_finite() {
            return Err(BrightnessError::OutOfRange(value));
        }
        let clamped = value.clamp(0.0, 1.0);
        if clamped != value {
            trace!("clamped brightness {} to {}", value, clamped);
        }
        Ok(Self(clamped))
    }

    /// Create a reading from integer hardware steps, as backlight devices report them.
    ///
    /// # Errors
    /// Returns [`BrightnessError::Unsupported`] if `max` is zero.
    pub fn from_raw(raw: u64, max: u64) -> Result<Self, BrightnessError> {
        if max == 0 {
            return Err(BrightnessError::Unsupported(
                "maximum brightness is zero".to_string(),
            ));
        }
        Self::new((raw as f64 / max as f64) as f32)
    }

    /// Convert back to integer hardware steps out of `max`.
    pub fn to_raw(self, max: u64) -> u64 {
        (self.0 as f64 * max as f64).round() as u64
    }

    /// Create a reading from a percentage (0-100). Larger values are clamped.
    pub fn from_percent(percent: u8) -> Self {
        Self(f32::from(percent.min(100)) / 100.0)
    }

    /// Convert to a percentage (0-100).
    pub fn to_percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    /// The brightness fraction.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
