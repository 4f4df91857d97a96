use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::trace;

use crate::controller::GpioBackend;

#[derive(Debug, Default, Clone, Copy)]
pub struct SysfsBackend;

impl SysfsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl GpioBackend for SysfsBackend {
    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn write_value(&self, path: &Path, value: &[u8]) -> io::Result<()> {
        // sysfs attributes are created by the kernel; never create them here.
        let mut file = OpenOptions::new().write(true).open(path)?;
        trace!("writing {} byte(s) to {}", value.len(), path.display());
        file.write_all(value)
    }
}
