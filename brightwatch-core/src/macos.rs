//! macOS backend over the DisplayServices and CoreGraphics frameworks.

use crate::error::BrightnessError;

#[cfg(target_os = "macos")]
pub use ffi::DisplayServicesDisplay;

/// `kCGNullDirectDisplay`
const NULL_DISPLAY: u32 = 0;

/// A null main display ID means no display is attached.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn check_display_id(id: u32) -> Result<u32, BrightnessError> {
    if id == NULL_DISPLAY {
        Err(BrightnessError::NoDisplay)
    } else {
        Ok(id)
    }
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn check_supported(id: u32, supported: bool) -> Result<(), BrightnessError> {
    if supported {
        Ok(())
    } else {
        Err(BrightnessError::Unsupported(format!(
            "display {} does not expose brightness",
            id
        )))
    }
}

/// DisplayServices calls return a `CGError`, zero on success.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn check_status(status: i32) -> Result<(), BrightnessError> {
    if status == 0 {
        Ok(())
    } else {
        Err(BrightnessError::QueryFailed(status))
    }
}

#[cfg(target_os = "macos")]
mod ffi {
    use super::{check_display_id, check_status, check_supported};
    use crate::display::DisplayBrightness;
    use crate::error::BrightnessError;
    use crate::reading::Brightness;

    use libloading::{Library, Symbol};
    use log::{debug, trace};

    const CORE_GRAPHICS_PATH: &str =
        "/System/Library/Frameworks/CoreGraphics.framework/CoreGraphics";
    const DISPLAY_SERVICES_PATH: &str =
        "/System/Library/PrivateFrameworks/DisplayServices.framework/DisplayServices";

    type MainDisplayIdFn = unsafe extern "C" fn() -> u32;
    type CanChangeBrightnessFn = unsafe extern "C" fn(u32) -> bool;
    type GetBrightnessFn = unsafe extern "C" fn(u32, *mut f32) -> i32;
    type SetBrightnessFn = unsafe extern "C" fn(u32, f32) -> i32;

    /// Brightness of the main display through the private DisplayServices framework.
    ///
    /// The frameworks are loaded once; the main display ID is looked up on every
    /// query so that a change of main display is picked up.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # #[cfg(target_os = "macos")]
    /// # fn main() -> Result<(), brightwatch_core::BrightnessError> {
    /// use brightwatch_core::{DisplayBrightness, DisplayServicesDisplay};
    ///
    /// let display = DisplayServicesDisplay::new()?;
    /// println!("{}", display.get_current_brightness()?);
    /// # Ok(())
    /// # }
    /// # #[cfg(not(target_os = "macos"))]
    /// # fn main() {}
    /// ```
    pub struct DisplayServicesDisplay {
        core_graphics: Library,
        display_services: Library,
    }

    impl DisplayServicesDisplay {
        /// Load the display frameworks.
        ///
        /// # Errors
        ///
        /// - [`BrightnessError::FrameworkLoad`] if either framework fails to load
        pub fn new() -> Result<Self, BrightnessError> {
            let core_graphics = unsafe { Library::new(CORE_GRAPHICS_PATH)? };
            let display_services = unsafe { Library::new(DISPLAY_SERVICES_PATH)? };
            debug!("loaded display services frameworks");
            Ok(Self {
                core_graphics,
                display_services,
            })
        }

        fn main_display_id(&self) -> Result<u32, BrightnessError> {
            let id = unsafe {
                let main_display: Symbol<MainDisplayIdFn> =
                    self.core_graphics.get(b"CGMainDisplayID")?;
                main_display()
            };
            trace!("main display id: {}", id);
            check_display_id(id)
        }

        fn ensure_supported(&self, id: u32) -> Result<(), BrightnessError> {
            let supported = unsafe {
                let can_change: Symbol<CanChangeBrightnessFn> = self
                    .display_services
                    .get(b"DisplayServicesCanChangeBrightness")?;
                can_change(id)
            };
            check_supported(id, supported)
        }
    }

    impl DisplayBrightness for DisplayServicesDisplay {
        fn get_current_brightness(&self) -> Result<Brightness, BrightnessError> {
            let id = self.main_display_id()?;
            self.ensure_supported(id)?;

            let mut value: f32 = 0.0;
            let status = unsafe {
                let get_brightness: Symbol<GetBrightnessFn> =
                    self.display_services.get(b"DisplayServicesGetBrightness")?;
                get_brightness(id, &mut value)
            };
            trace!("display {} brightness {}, status {}", id, value, status);

            check_status(status)?;
            Brightness::new(value)
        }

        fn set_brightness(&self, level: Brightness) -> Result<(), BrightnessError> {
            let id = self.main_display_id()?;
            self.ensure_supported(id)?;

            let status = unsafe {
                let set_brightness: Symbol<SetBrightnessFn> =
                    self.display_services.get(b"DisplayServicesSetBrightness")?;
                set_brightness(id, level.value())
            };
            debug!("set display {} brightness to {}, result: {}", id, level, status);

            check_status(status)
        }

        fn name(&self) -> &str {
            "display-services"
        }
    }
}
