pub mod map_path;
pub mod templates;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};
use thiserror::Error;

use crate::config::Config;

pub use map_path::{derive_map_fragment, MapFragmentError};
pub use templates::generate_ini;

/// Local configuration directory, mounted as drive C: in the emulator.
pub const SEE4CG_DIR: &str = "see4cg";
pub const INI_FILES: [&str; 3] = ["cpath.ini", "puk2-cpath.ini", "puk3-cpath.ini"];
pub const CMAP_FILE: &str = "cmap.ini";

#[derive(Debug, Error)]
pub enum ConfigGenError {
    #[error(transparent)]
    MapFragment(#[from] MapFragmentError),
    #[error("failed to write {}: {source}", path.display())]
    WriteMap { path: PathBuf, source: io::Error },
}

/// Result of writing one INI file. A failure here never stops the others.
#[derive(Debug)]
pub struct IniOutcome {
    pub path: PathBuf,
    pub result: io::Result<()>,
}

#[derive(Debug)]
pub struct ConfigReport {
    pub ini: Vec<IniOutcome>,
    pub map_fragment: String,
}

impl ConfigReport {
    pub fn failed_ini(&self) -> impl Iterator<Item = &IniOutcome> {
        self.ini.iter().filter(|o| o.result.is_err())
    }
}

pub fn see4cg_dir(config: &Config) -> PathBuf {
    config.root.join(SEE4CG_DIR)
}

/// Overwrites `path` with the template for its file name.
pub fn write_ini(path: &Path) -> io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let lines = generate_ini(&file_name);

    info!("Regenerating {}", file_name);
    fs::write(path, lines.join("\n"))
}

/// Rewrites every INI file, then points `cmap.ini` at the data file's map
/// directory.
pub fn process_config_files(
    config: &Config,
    dat_path: &Path,
) -> Result<ConfigReport, ConfigGenError> {
    let dir = see4cg_dir(config);
    info!("Processing configuration files...");

    let ini = INI_FILES
        .iter()
        .map(|name| {
            let path = dir.join(name);
            info!("Processing {}...", name);
            let result = write_ini(&path);
            match &result {
                Ok(()) => info!("Generated {}", name),
                Err(e) => error!("Error while processing {}: {}", path.display(), e),
            }
            IniOutcome { path, result }
        })
        .collect();

    let map_fragment = derive_map_fragment(&dat_path.to_string_lossy())?;
    let cmap_path = dir.join(CMAP_FILE);
    info!("Updating {} to: {}", CMAP_FILE, map_fragment);
    fs::write(&cmap_path, &map_fragment).map_err(|source| ConfigGenError::WriteMap {
        path: cmap_path,
        source,
    })?;

    Ok(ConfigReport { ini, map_fragment })
}
