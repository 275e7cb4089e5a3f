//! Read the primary display's hardware brightness.
//!
//! This crate reports the brightness of the system's main display as a
//! fraction in `[0.0, 1.0]`, and provides the loop that prints it every two
//! seconds.
//!
//! # Platforms
//!
//! - macOS: the DisplayServices framework, loaded at runtime
//! - Linux: the kernel backlight class under `/sys/class/backlight`
//!
//! # Example
//!
//! ```no_run
//! use brightwatch_core::{system_display, BrightnessError, DisplayBrightness, Reporter};
//!
//! fn main() -> Result<(), BrightnessError> {
//!     let display = system_display()?;
//!
//!     // Single reading
//!     let level = display.get_current_brightness()?;
//!     println!("Current brightness: {}%", level.to_percent());
//!
//!     // Print a line every two seconds until something fails
//!     let mut reporter = Reporter::new(display, std::io::stdout());
//!     reporter.run_forever()?;
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockDisplay`] to test code without hardware:
//!
//! ```
//! use brightwatch_core::{Brightness, DisplayBrightness, MockDisplay};
//!
//! let mock = MockDisplay::new(Brightness::from_percent(50));
//! mock.set_brightness(Brightness::from_percent(90)).unwrap();
//! assert_eq!(mock.get_current_brightness().unwrap().to_percent(), 90);
//! ```

#![warn(missing_docs)]

mod display;
mod error;
mod macos;
mod mock;
mod reading;
mod reporter;
mod sysfs;

// Re-export public API
pub use display::{DisplayBrightness, system_display};
pub use error::BrightnessError;
#[cfg(target_os = "macos")]
pub use macos::DisplayServicesDisplay;
pub use mock::MockDisplay;
pub use reading::Brightness;
pub use reporter::{LABEL, POLL_INTERVAL, Reporter, format_line};
pub use sysfs::SysfsBacklight;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_display_levels() {
        let mock = MockDisplay::new(Brightness::from_percent(75));
        assert_eq!(mock.get_current_brightness().unwrap().to_string(), "0.75");

        mock.set_brightness(Brightness::from_percent(10)).unwrap();
        assert_eq!(mock.get_current_brightness().unwrap().to_percent(), 10);
        assert_eq!(mock.reads(), 2);
    }

    #[test]
    fn test_mock_display_failure_mode() {
        let mock = MockDisplay::default();
        mock.set_failure_mode(true);
        assert!(mock.get_current_brightness().is_err());
        assert!(mock.set_brightness(Brightness::MIN).is_err());

        mock.set_failure_mode(false);
        assert_eq!(mock.get_current_brightness().unwrap(), Brightness::MAX);
    }

    #[test]
    fn test_boxed_display_delegates() {
        let boxed: Box<dyn DisplayBrightness> = Box::new(MockDisplay::new(Brightness::MIN));
        assert_eq!(boxed.name(), "mock");
        assert_eq!(boxed.get_current_brightness().unwrap(), Brightness::MIN);

        let mut out = Vec::new();
        Reporter::new(boxed, &mut out).sample().unwrap();
        assert_eq!(out, b"Current brightness: 0.00\n");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(BrightnessError::NoDisplay.to_string(), "No display detected");
        assert_eq!(
            BrightnessError::QueryFailed(1001).to_string(),
            "Brightness query failed (error code: 1001)"
        );
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    #[test]
    fn test_unsupported_platform() {
        assert!(matches!(
            system_display(),
            Err(BrightnessError::Unsupported(_))
        ));
    }
}
