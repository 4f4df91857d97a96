use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use nled::{AppError, Command, GpioBackend, LedConfig, LedController, usage};

#[cfg(any(feature = "mock-gpio", not(feature = "sysfs-gpio")))]
use nled::MockGpioBackend;
#[cfg(all(feature = "sysfs-gpio", not(feature = "mock-gpio")))]
use nled::SysfsBackend;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let progname = args
        .first()
        .cloned()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let config = Arc::new(LedConfig::from_env());
    debug!("using sysfs GPIO root {}", config.sysfs.root().display());

    let backend = {
        #[cfg(all(feature = "sysfs-gpio", not(feature = "mock-gpio")))]
        {
            Arc::new(SysfsBackend::new())
        }
        #[cfg(any(feature = "mock-gpio", not(feature = "sysfs-gpio")))]
        {
            // every run is a fresh process; start as if `init` already ran
            Arc::new(MockGpioBackend::with_exported(
                config.sysfs.clone(),
                &config.pins,
            ))
        }
    };

    let controller = LedController::new(config, backend);
    let command = Command::from_args(args.get(1..).unwrap_or_default());

    let code = report(run(&controller, command), &progname, &mut io::stdout());
    ExitCode::from(code)
}

// Ok(false) means usage should be shown.
fn run<B: GpioBackend>(controller: &LedController<B>, command: Command) -> Result<bool, AppError> {
    match command {
        Command::Set { color, status } => controller.set_status(&color, &status),
        Command::Init => controller.initialize().map(|_| true),
        Command::Usage => Ok(false),
    }
}

fn report<W: Write>(outcome: Result<bool, AppError>, progname: &str, out: &mut W) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => {
            let _ = write!(out, "{}", usage(progname));
            0
        }
        Err(e) => {
            if let Some(cause) = std::error::Error::source(&e) {
                debug!("{e} ({cause})");
            }
            let _ = writeln!(out, "{e}");
            1
        }
    }
}
