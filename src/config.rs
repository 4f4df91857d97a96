use std::path::{Path, PathBuf};

use crate::registry::{PinId, PinRegistry};

pub const DEFAULT_SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";
pub const SYSFS_ROOT_ENV: &str = "NLED_SYSFS_ROOT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsLayout {
    root: PathBuf,
}

impl SysfsLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn export_path(&self) -> PathBuf {
        self.root.join("export")
    }

    pub fn pin_dir(&self, pin: PinId) -> PathBuf {
        self.root.join(pin.dir_name())
    }

    pub fn value_path(&self, pin: PinId) -> PathBuf {
        self.pin_dir(pin).join("value")
    }
}

impl Default for SysfsLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_GPIO_ROOT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedConfig {
    pub sysfs: SysfsLayout,
    pub pins: PinRegistry,
}

impl LedConfig {
    pub fn new(sysfs: SysfsLayout, pins: PinRegistry) -> Self {
        Self { sysfs, pins }
    }

    pub fn from_env() -> Self {
        Self::from_root_override(std::env::var(SYSFS_ROOT_ENV).ok())
    }

    pub fn from_root_override(root: Option<String>) -> Self {
        let sysfs = match root {
            Some(root) if !root.is_empty() => SysfsLayout::new(root),
            _ => SysfsLayout::default(),
        };
        Self::new(sysfs, PinRegistry::default())
    }
}
