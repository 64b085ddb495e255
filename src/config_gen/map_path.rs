use thiserror::Error;

/// Drive the CrossGate root is mounted on inside the emulator.
pub const DRIVE_ROOT: &str = "D:\\";

const MAP_MARKER: &str = "map";

#[derive(Debug, Error, PartialEq)]
pub enum MapFragmentError {
    #[error("no \"map\" segment in data file path: {0}")]
    NoMapSegment(String),
}

/// Turns a data file path into the DOS directory the map tool reads from.
///
/// Everything from the last `map` onward is re-rooted on `D:\`, then cut
/// at the last backslash. `/` is treated as `\`.
pub fn derive_map_fragment(dat_path: &str) -> Result<String, MapFragmentError> {
    let dos_path = dat_path.replace('/', "\\");
    let start = dos_path
        .rfind(MAP_MARKER)
        .ok_or_else(|| MapFragmentError::NoMapSegment(dat_path.to_string()))?;

    let rooted = format!("{}{}", DRIVE_ROOT, &dos_path[start..]);
    // DRIVE_ROOT guarantees at least one backslash
    let end = rooted.rfind('\\').unwrap_or(rooted.len());
    Ok(rooted[..end].to_string())
}
