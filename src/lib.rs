mod backend;
mod cli;
mod config;
mod controller;
mod error;
mod registry;

pub use cli::{Command, usage};
pub use config::{LedConfig, SysfsLayout};
pub use controller::{GpioBackend, LedController};
pub use error::AppError;
pub use registry::{LedColor, PinId, PinRegistry, PinState};

pub use backend::MockGpioBackend;
#[cfg(feature = "sysfs-gpio")]
pub use backend::SysfsBackend;
