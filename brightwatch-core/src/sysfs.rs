//! Linux backend over the kernel's backlight device class.

use crate::display::DisplayBrightness;
use crate::error::BrightnessError;
use crate::reading::Brightness;

use log::{debug, trace};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BACKLIGHT_ROOT: &str = "/sys/class/backlight";

/// Brightness of the primary backlight under `/sys/class/backlight`.
///
/// The primary device is chosen on every query by its `type` attribute:
/// `firmware` first, then `platform`, then `raw`, ties broken by name.
#[derive(Debug, Clone)]
pub struct SysfsBacklight {
    root: PathBuf,
}

impl SysfsBacklight {
    /// Use the system backlight class directory.
    pub fn new() -> Self {
        Self::with_root(BACKLIGHT_ROOT)
    }

    /// Use a different class directory, e.g. a fake tree in tests.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the directory of the primary backlight device.
    ///
    /// # Errors
    ///
    /// - [`BrightnessError::NoDisplay`] if there is no backlight device
    pub fn primary_device(&self) -> Result<PathBuf, BrightnessError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BrightnessError::NoDisplay);
            }
            Err(e) => return Err(map_io(e, &self.root)),
        };

        let mut best: Option<(u8, String, PathBuf)> = None;
        for entry in entries {
            let entry = entry.map_err(|e| map_io(e, &self.root))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let rank = device_rank(&path);
            trace!("backlight candidate {} (rank {})", name, rank);

            let better = match &best {
                Some((best_rank, best_name, _)) => (rank, &name) < (*best_rank, best_name),
                None => true,
            };
            if better {
                best = Some((rank, name, path));
            }
        }

        match best {
            Some((_, name, path)) => {
                debug!("primary backlight: {}", name);
                Ok(path)
            }
            None => Err(BrightnessError::NoDisplay),
        }
    }
}

impl Default for SysfsBacklight {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBrightness for SysfsBacklight {
    fn get_current_brightness(&self) -> Result<Brightness, BrightnessError> {
        let device = self.primary_device()?;
        let max = read_number(&device.join("max_brightness"))?;
        let raw = read_number(&device.join("brightness"))?;
        trace!("backlight {}/{}", raw, max);
        Brightness::from_raw(raw, max)
    }

    fn set_brightness(&self, level: Brightness) -> Result<(), BrightnessError> {
        let device = self.primary_device()?;
        let max = read_number(&device.join("max_brightness"))?;
        let raw = level.to_raw(max);
        let path = device.join("brightness");
        fs::write(&path, raw.to_string()).map_err(|e| map_io(e, &path))?;
        debug!("set backlight to {} ({}/{})", level, raw, max);
        Ok(())
    }

    fn name(&self) -> &str {
        "sysfs"
    }
}

fn device_rank(device: &Path) -> u8 {
    match fs::read_to_string(device.join("type")) {
        Ok(kind) => match kind.trim() {
            "firmware" => 0,
            "platform" => 1,
            "raw" => 2,
            _ => 3,
        },
        Err(_) => 3,
    }
}

fn read_number(path: &Path) -> Result<u64, BrightnessError> {
    let contents = fs::read_to_string(path).map_err(|e| map_io(e, path))?;
    let value = contents.trim();
    value.parse().map_err(|_| BrightnessError::Parse {
        path: path.to_path_buf(),
        value: value.to_string(),
    })
}

fn map_io(e: io::Error, path: &Path) -> BrightnessError {
    match e.kind() {
        io::ErrorKind::PermissionDenied => BrightnessError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::NotFound => BrightnessError::NoDisplay,
        _ => BrightnessError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn add_device(root: &Path, name: &str, kind: &str, brightness: u64, max: u64) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("type"), format!("{}\n", kind)).unwrap();
        fs::write(dir.join("brightness"), format!("{}\n", brightness)).unwrap();
        fs::write(dir.join("max_brightness"), format!("{}\n", max)).unwrap();
    }

    #[test]
    fn test_reads_fraction() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "intel_backlight", "raw", 96000, 120000);

        let backlight = SysfsBacklight::with_root(root.path());
        let level = backlight.get_current_brightness().unwrap();
        assert_eq!(level.to_string(), "0.80");
    }

    #[test]
    fn test_prefers_firmware_device() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "intel_backlight", "raw", 10, 100);
        add_device(root.path(), "acpi_video0", "firmware", 75, 100);
        add_device(root.path(), "nvidia_0", "platform", 20, 100);

        let backlight = SysfsBacklight::with_root(root.path());
        assert_eq!(
            backlight.primary_device().unwrap(),
            root.path().join("acpi_video0")
        );
        assert_eq!(backlight.get_current_brightness().unwrap().to_string(), "0.75");
    }

    #[test]
    fn test_requeries_primary_device() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "intel_backlight", "raw", 50, 100);

        let backlight = SysfsBacklight::with_root(root.path());
        assert_eq!(backlight.get_current_brightness().unwrap().to_string(), "0.50");

        add_device(root.path(), "acpi_video0", "firmware", 90, 100);
        assert_eq!(backlight.get_current_brightness().unwrap().to_string(), "0.90");
    }

    #[test]
    fn test_no_display() {
        let root = TempDir::new().unwrap();
        let backlight = SysfsBacklight::with_root(root.path());
        assert!(matches!(
            backlight.get_current_brightness(),
            Err(BrightnessError::NoDisplay)
        ));

        let missing = SysfsBacklight::with_root(root.path().join("missing"));
        assert!(matches!(
            missing.get_current_brightness(),
            Err(BrightnessError::NoDisplay)
        ));
    }

    #[test]
    fn test_parse_error() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "intel_backlight", "raw", 1, 100);
        fs::write(root.path().join("intel_backlight/brightness"), "bright\n").unwrap();

        let backlight = SysfsBacklight::with_root(root.path());
        match backlight.get_current_brightness() {
            Err(BrightnessError::Parse { value, .. }) => assert_eq!(value, "bright"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_max_is_unsupported() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "intel_backlight", "raw", 0, 0);

        let backlight = SysfsBacklight::with_root(root.path());
        assert!(matches!(
            backlight.get_current_brightness(),
            Err(BrightnessError::Unsupported(_))
        ));
    }

    #[test]
    fn test_skips_stray_files() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("intel_backlight");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("brightness"), "30\n").unwrap();
        fs::write(dir.join("max_brightness"), "100\n").unwrap();
        fs::write(root.path().join("README"), "not a device\n").unwrap();

        let backlight = SysfsBacklight::with_root(root.path());
        assert_eq!(backlight.primary_device().unwrap(), dir);
        assert_eq!(backlight.get_current_brightness().unwrap().to_string(), "0.30");
    }

    #[test]
    fn test_io_error_mapping() {
        let path = Path::new("/sys/class/backlight/intel_backlight/brightness");

        match map_io(io::Error::from(io::ErrorKind::PermissionDenied), path) {
            BrightnessError::PermissionDenied(denied) => assert_eq!(denied, path),
            other => panic!("expected permission error, got {:?}", other),
        }
        assert!(matches!(
            map_io(io::Error::from(io::ErrorKind::NotADirectory), path),
            BrightnessError::Io(_)
        ));
        assert!(matches!(
            map_io(io::Error::from(io::ErrorKind::NotFound), path),
            BrightnessError::NoDisplay
        ));
    }

    #[test]
    fn test_set_brightness_writes_raw_steps() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "intel_backlight", "raw", 0, 255);

        let backlight = SysfsBacklight::with_root(root.path());
        backlight.set_brightness(Brightness::from_percent(50)).unwrap();

        let written = fs::read_to_string(root.path().join("intel_backlight/brightness")).unwrap();
        assert_eq!(written, "128");
        assert_eq!(backlight.get_current_brightness().unwrap().to_string(), "0.50");
    }
}
