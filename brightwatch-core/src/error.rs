//! Error types for brightness queries.

use std::path::PathBuf;

/// Errors that can occur while reading or writing display brightness.
///
/// Every variant except [`BrightnessError::Output`] is a failure of the
/// underlying platform query.
#[derive(Debug, thiserror::Error)]
pub enum BrightnessError {
    /// A display-services framework or one of its symbols could not be loaded.
    #[error("Failed to load display services: {0}")]
    FrameworkLoad(#[from] libloading::Error),

    /// No primary display was detected.
    #[error("No display detected")]
    NoDisplay,

    /// The display or operating system cannot report brightness.
    #[error("Brightness control not supported: {0}")]
    Unsupported(String),

    /// The process lacks permission to access hardware brightness.
    #[error("Permission denied reading {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The platform call returned a nonzero status.
    #[error("Brightness query failed (error code: {0})")]
    QueryFailed(i32),

    /// The platform returned a value that is not a number.
    #[error("Brightness value {0} is not a finite number")]
    OutOfRange(f32),

    /// A backlight attribute did not contain an integer.
    #[error("Invalid value {value:?} in {}", .path.display())]
    Parse {
        /// The attribute file.
        path: PathBuf,
        /// The contents that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading a backlight device.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a reading to the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
