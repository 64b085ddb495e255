pub mod command;

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::{error, info};
use thiserror::Error;

use crate::config::Config;
use crate::config_gen::see4cg_dir;

pub use command::{cmap_sub_command, LaunchCommand};

const DOSBOX_DIR: [&str; 3] = ["dosbox-x", "mingw-build", "mingw"];
const DOSBOX_EXE: &str = "dosbox-x.exe";
const DOSBOX_CONF: &str = "dosbox-x.conf";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("DOSBox executable does not exist: {}", .0.display())]
    MissingExecutable(PathBuf),
    #[error("DOSBox configuration does not exist: {}", .0.display())]
    MissingConfig(PathBuf),
    #[error("failed to start DOSBox: {0}")]
    Spawn(#[from] io::Error),
    #[error("DOSBox exited with {status}{}", stderr_suffix(.stderr))]
    Failed { status: ExitStatus, stderr: String },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

pub fn dosbox_dir(config: &Config) -> PathBuf {
    DOSBOX_DIR
        .iter()
        .fold(config.root.clone(), |dir, part| dir.join(part))
}

/// Builds the launch command, checking that the emulator build is in place.
pub fn prepare(config: &Config, dat_path: &Path) -> Result<LaunchCommand, LaunchError> {
    let dir = dosbox_dir(config);
    let exe = dir.join(DOSBOX_EXE);
    let conf = dir.join(DOSBOX_CONF);

    if !exe.exists() {
        return Err(LaunchError::MissingExecutable(exe));
    }
    if !conf.exists() {
        return Err(LaunchError::MissingConfig(conf));
    }

    Ok(LaunchCommand::new(
        exe,
        conf,
        see4cg_dir(config),
        config.cg_path.clone(),
        dat_path,
    ))
}

/// Runs the emulator to completion. Nothing is spawned when the build is
/// missing; every failure comes back as a value.
pub fn run_dosbox(config: &Config, dat_path: &Path) -> Result<(), LaunchError> {
    info!("Starting DOSBox...");

    let command = prepare(config, dat_path)?;
    info!("Running command: {}", command);

    let output = Command::new(&command.exe).args(command.args()).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(LaunchError::Failed {
            status: output.status,
            stderr,
        });
    }

    Ok(())
}

/// Logs the launch result. Launch failures never change the exit code.
pub fn report(result: &Result<(), LaunchError>) {
    match result {
        Ok(()) => info!("DOSBox finished"),
        Err(e) => error!("DOSBox run failed: {}", e),
    }
}
