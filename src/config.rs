use std::path::{Path, PathBuf};

use log::{error, info, warn};
use thiserror::Error;

/// CrossGate resource root, mounted as drive D: inside the emulator.
pub const CG_PATH_VAR: &str = "CG_PATH";

pub const REQUIRED_VARS: [&str; 1] = [CG_PATH_VAR];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
}

/// Settings resolved once at startup and handed to every later stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub cg_path: PathBuf,
    /// Directory holding `see4cg/` and the emulator build.
    pub root: PathBuf,
}

impl Config {
    /// Loads `<root>/.env` (if any) and validates the process environment.
    pub fn from_env(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        load_env_file(&root);
        Self::from_lookup(root, |name| std::env::var(name).ok())
    }

    /// Checks every required variable before giving up, so the user sees
    /// all missing names in one run.
    pub fn from_lookup<F>(root: impl Into<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Checking environment variables...");

        let mut missing = Vec::new();
        let mut cg_path = None;

        for name in REQUIRED_VARS {
            match lookup(name).filter(|v| !v.is_empty()) {
                None => {
                    error!("{}: not set", name);
                    missing.push(name.to_string());
                }
                Some(value) => {
                    info!("{}: {}", name, value);
                    if !Path::new(&value).exists() {
                        warn!("{} path does not exist: {}", name, value);
                    }
                    if name == CG_PATH_VAR {
                        cg_path = Some(PathBuf::from(value));
                    }
                }
            }
        }

        match cg_path {
            Some(cg_path) if missing.is_empty() => Ok(Config {
                cg_path,
                root: root.into(),
            }),
            _ => {
                error!("Missing required environment variables: {}", missing.join(", "));
                error!("Check the .env file and set the correct paths");
                Err(ConfigError::MissingVars(missing))
            }
        }
    }
}

/// Reads `<root>/.env` only; parent directories are not searched.
/// Variables already set in the process win.
pub fn load_env_file(root: &Path) -> bool {
    let env_file = root.join(".env");
    match dotenvy::from_path(&env_file) {
        Ok(()) => {
            info!("Loaded {}", env_file.display());
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            warn!("Ignoring unreadable .env file: {}", e);
            false
        }
    }
}
