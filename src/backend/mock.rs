use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::SysfsLayout;
use crate::controller::GpioBackend;
use crate::registry::PinRegistry;

// Writing a pin number to `export` creates `gpio<N>/value`, as the kernel would.
pub struct MockGpioBackend {
    layout: SysfsLayout,
    tree: Mutex<MockTree>,
}

#[derive(Default)]
struct MockTree {
    dirs: FxHashSet<PathBuf>,
    files: FxHashMap<PathBuf, Vec<u8>>,
    failing: FxHashSet<PathBuf>,
    writes: Vec<(PathBuf, Vec<u8>)>,
}

impl MockGpioBackend {
    pub fn new(layout: SysfsLayout) -> Self {
        let mut tree = MockTree::default();
        tree.dirs.insert(layout.root().to_path_buf());
        tree.files.insert(layout.export_path(), Vec::new());
        Self {
            layout,
            tree: Mutex::new(tree),
        }
    }

    pub fn with_exported(layout: SysfsLayout, pins: &PinRegistry) -> Self {
        let backend = Self::new(layout);
        {
            let mut tree = backend.tree.lock();
            for pin in pins.export_set() {
                let dir = backend.layout.pin_dir(pin);
                tree.files.insert(backend.layout.value_path(pin), b"0".to_vec());
                tree.dirs.insert(dir);
            }
        }
        backend
    }

    pub fn add_dir<P: Into<PathBuf>>(&self, path: P) {
        self.tree.lock().dirs.insert(path.into());
    }

    pub fn add_file<P: Into<PathBuf>>(&self, path: P, contents: &[u8]) {
        self.tree.lock().files.insert(path.into(), contents.to_vec());
    }

    pub fn fail_writes_to<P: Into<PathBuf>>(&self, path: P) {
        self.tree.lock().failing.insert(path.into());
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.tree.lock().files.get(path).cloned()
    }

    pub fn writes(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.tree.lock().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.tree.lock().writes.clear();
    }
}

impl Default for MockGpioBackend {
    fn default() -> Self {
        Self::new(SysfsLayout::default())
    }
}

impl GpioBackend for MockGpioBackend {
    fn is_dir(&self, path: &Path) -> bool {
        self.tree.lock().dirs.contains(path)
    }

    fn write_value(&self, path: &Path, value: &[u8]) -> io::Result<()> {
        let mut tree = self.tree.lock();

        if !tree.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
        if tree.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not writable", path.display()),
            ));
        }

        if path == self.layout.export_path() {
            let pin = std::str::from_utf8(value)
                .ok()
                .and_then(|s| s.trim().parse::<u32>().ok())
                .ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "invalid GPIO number")
                })?;
            let dir = self.layout.root().join(format!("gpio{pin}"));
            if tree.dirs.contains(&dir) {
                return Err(io::Error::new(
                    io::ErrorKind::ResourceBusy,
                    format!("gpio{pin} is already exported"),
                ));
            }
            tree.files.insert(dir.join("value"), b"0".to_vec());
            tree.dirs.insert(dir);
        }

        tree.files.insert(path.to_path_buf(), value.to_vec());
        tree.writes.push((path.to_path_buf(), value.to_vec()));
        Ok(())
    }
}
