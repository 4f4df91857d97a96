use std::io;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::config::LedConfig;
use crate::error::AppError;
use crate::registry::{LedColor, PinId, PinState};

pub trait GpioBackend: Send + Sync {
    fn is_dir(&self, path: &Path) -> bool;
    // must not create `path`
    fn write_value(&self, path: &Path, value: &[u8]) -> io::Result<()>;
}

pub struct LedController<B: GpioBackend> {
    config: Arc<LedConfig>,
    backend: Arc<B>,
}

impl<B: GpioBackend> LedController<B> {
    pub fn new(config: Arc<LedConfig>, backend: Arc<B>) -> Self {
        Self { config, backend }
    }

    /// Exports every LED pin whose `gpio<N>` directory is missing and returns
    /// the pins exported by this call. Stops at the first failed export.
    pub fn initialize(&self) -> Result<Vec<PinId>, AppError> {
        let mut exported = Vec::new();

        for pin in self.config.pins.export_set() {
            let dir = self.config.sysfs.pin_dir(pin);
            if self.backend.is_dir(&dir) {
                debug!("GPIO pin {pin} already exported at {}", dir.display());
                continue;
            }

            let export = self.config.sysfs.export_path();
            self.backend
                .write_value(&export, pin.to_string().as_bytes())
                .map_err(|source| AppError::ExportFailed { pin, source })?;
            info!("exported GPIO pin {pin}");
            exported.push(pin);
        }

        Ok(exported)
    }

    pub fn set(&self, color: LedColor, state: PinState) -> Result<(), AppError> {
        let pin = self.config.pins.pin(color);
        let value = state.sysfs_value();
        let path = self.config.sysfs.value_path(pin);

        self.backend
            .write_value(&path, value.as_bytes())
            .map_err(|source| AppError::WriteFailed { pin, value, source })?;
        info!("{} LED (GPIO pin {pin}) switched {}", color.name(), state.word());
        Ok(())
    }

    // Ok(false) on an unrecognized word, before any write.
    pub fn set_status(&self, color_name: &str, command_word: &str) -> Result<bool, AppError> {
        let Some(state) = PinState::from_word(command_word) else {
            debug!("unrecognized status {command_word:?}");
            return Ok(false);
        };
        let Some(color) = LedColor::from_name(color_name) else {
            debug!("unrecognized color {color_name:?}");
            return Ok(false);
        };

        self.set(color, state)?;
        Ok(true)
    }
}
