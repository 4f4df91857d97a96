use std::io;

use thiserror::Error;

use crate::registry::PinId;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unable to export GPIO pin {pin}!")]
    ExportFailed {
        pin: PinId,
        #[source]
        source: io::Error,
    },
    #[error("Unable to set GPIO pin {pin} status to {value}!")]
    WriteFailed {
        pin: PinId,
        value: &'static str,
        #[source]
        source: io::Error,
    },
}
