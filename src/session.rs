use std::path::Path;

use log::info;

use crate::config::Config;
use crate::config_gen::{self, ConfigGenError, ConfigReport};
use crate::launcher::{self, LaunchError};

/// What one run did after validation passed.
#[derive(Debug)]
pub struct Session {
    pub report: ConfigReport,
    pub launch: Result<(), LaunchError>,
}

/// Regenerates the configuration and starts the emulator.
///
/// Only a map file failure is returned as an error; INI and launch failures
/// are logged and kept in the returned `Session`.
pub fn run(config: &Config, dat_path: &Path) -> Result<Session, ConfigGenError> {
    info!("Target file: {}", dat_path.display());

    let report = config_gen::process_config_files(config, dat_path)?;

    let launch = launcher::run_dosbox(config, dat_path);
    launcher::report(&launch);

    info!("Done!");
    Ok(Session {
        report,
        launch,
    })
}
