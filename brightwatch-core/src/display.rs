//! Display brightness backends.

use crate::error::BrightnessError;
use crate::reading::Brightness;

// =============================================================================
// Display Brightness Trait
// =============================================================================

/// Trait for reading and writing the primary display's brightness.
///
/// This allows for mock implementations in tests.
pub trait DisplayBrightness: Send + Sync {
    /// Query the current brightness of the primary display.
    ///
    /// The primary display is resolved on every call.
    fn get_current_brightness(&self) -> Result<Brightness, BrightnessError>;

    /// Set the brightness of the primary display.
    fn set_brightness(&self, level: Brightness) -> Result<(), BrightnessError>;

    /// A short name for the backend, used in log messages.
    fn name(&self) -> &str;
}

impl<T: DisplayBrightness + ?Sized> DisplayBrightness for Box<T> {
    fn get_current_brightness(&self) -> Result<Brightness, BrightnessError> {
        (**self).get_current_brightness()
    }

    fn set_brightness(&self, level: Brightness) -> Result<(), BrightnessError> {
        (**self).set_brightness(level)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: DisplayBrightness + ?Sized> DisplayBrightness for &T {
    fn get_current_brightness(&self) -> Result<Brightness, BrightnessError> {
        (**self).get_current_brightness()
    }

    fn set_brightness(&self, level: Brightness) -> Result<(), BrightnessError> {
        (**self).set_brightness(level)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Open the brightness backend for the current operating system.
///
/// # Errors
///
/// - [`BrightnessError::FrameworkLoad`] if the macOS display frameworks are missing
/// - [`BrightnessError::Unsupported`] on platforms without a backend
#[cfg(target_os = "macos")]
pub fn system_display() -> Result<Box<dyn DisplayBrightness>, BrightnessError> {
    Ok(Box::new(crate::macos::DisplayServicesDisplay::new()?))
}

/// Open the brightness backend for the current operating system.
///
/// # Errors
///
/// - [`BrightnessError::FrameworkLoad`] if the macOS display frameworks are missing
/// - [`BrightnessError::Unsupported`] on platforms without a backend
#[cfg(target_os = "linux")]
pub fn system_display() -> Result<Box<dyn DisplayBrightness>, BrightnessError> {
    Ok(Box::new(crate::sysfs::SysfsBacklight::new()))
}

/// Open the brightness backend for the current operating system.
///
/// # Errors
///
/// - [`BrightnessError::FrameworkLoad`] if the macOS display frameworks are missing
/// - [`BrightnessError::Unsupported`] on platforms without a backend
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn system_display() -> Result<Box<dyn DisplayBrightness>, BrightnessError> {
    Err(BrightnessError::Unsupported(format!(
        "no brightness backend for {}",
        std::env::consts::OS
    )))
}
