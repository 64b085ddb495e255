use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{error, warn};
use thiserror::Error;

pub const DAT_EXTENSION: &str = ".dat";

const USAGE: &str = "cgmap --dat D:\\path\\to\\file.dat";

/// Regenerate the see4cg configuration and open a map in DOSBox-X
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Map data file to open; only the first occurrence counts
    #[arg(long, value_name = "PATH", action = ArgAction::Append, allow_hyphen_values = true)]
    pub dat: Vec<String>,

    /// Stray values, ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgError {
    #[error("no .dat file path given (usage: {})", USAGE)]
    MissingDat,
    #[error("unrecognized argument: {0}")]
    Unrecognized(String),
    #[error("file does not exist: {0}")]
    NotFound(String),
    #[error("file must be in .dat format: {0}")]
    WrongExtension(String),
}

/// Parses the raw argument list (program name first).
///
/// `--help` and `--version` print and exit here, as clap normally does.
pub fn parse_cli<I, T>(args: I) -> Result<Cli, ArgError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let message = e.to_string();
            let message = message
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            if e.kind() == ErrorKind::UnknownArgument {
                Err(report(ArgError::Unrecognized(message)))
            } else {
                error!("{}", message);
                Err(report(ArgError::MissingDat))
            }
        }
    }
}

/// Checks the first `--dat` value: present, existing, `.dat`.
pub fn validate_dat(cli: &Cli) -> Result<PathBuf, ArgError> {
    if !cli.rest.is_empty() {
        warn!("Ignoring extra arguments: {}", cli.rest.join(" "));
    }

    let Some(dat) = cli.dat.first().filter(|d| !d.is_empty()).cloned() else {
        return Err(report(ArgError::MissingDat));
    };

    if !Path::new(&dat).exists() {
        return Err(report(ArgError::NotFound(dat)));
    }

    if !dat.ends_with(DAT_EXTENSION) {
        return Err(report(ArgError::WrongExtension(dat)));
    }

    Ok(PathBuf::from(dat))
}

/// Parses and validates in one step.
pub fn resolve_dat<I, T>(args: I) -> Result<PathBuf, ArgError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    validate_dat(&parse_cli(args)?)
}

fn report(err: ArgError) -> ArgError {
    match &err {
        ArgError::MissingDat => {
            error!("Please provide a .dat file path");
            error!("Usage: {}", USAGE);
        }
        other => error!("{}", other),
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(rest: &[&str]) -> Vec<String> {
        std::iter::once("cgmap")
            .chain(rest.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_flag_absent() {
        assert_eq!(resolve_dat(args(&[])), Err(ArgError::MissingDat));
    }

    #[test]
    fn test_flag_without_value() {
        assert_eq!(resolve_dat(args(&["--dat"])), Err(ArgError::MissingDat));
    }

    #[test]
    fn test_nonexistent_file() {
        let result = resolve_dat(args(&["--dat", "/no/such/map/1.dat"]));
        assert_eq!(result, Err(ArgError::NotFound("/no/such/map/1.dat".into())));
    }

    #[test]
    fn test_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let txt = dir.path().join("file.txt");
        fs::write(&txt, b"").unwrap();
        let txt = txt.to_string_lossy().into_owned();

        assert_eq!(
            resolve_dat(args(&["--dat", &txt])),
            Err(ArgError::WrongExtension(txt))
        );
    }

    #[test]
    fn test_valid_dat() {
        let dir = TempDir::new().unwrap();
        let dat = dir.path().join("12345.dat");
        fs::write(&dat, b"").unwrap();

        let resolved = resolve_dat(args(&["--dat", &dat.to_string_lossy()])).unwrap();
        assert_eq!(resolved, dat);
    }

    #[test]
    fn test_extra_token_after_value_is_ignored() {
        let dir = TempDir::new().unwrap();
        let dat = dir.path().join("12345.dat");
        fs::write(&dat, b"").unwrap();

        let resolved = resolve_dat(args(&["--dat", &dat.to_string_lossy(), "extra"])).unwrap();
        assert_eq!(resolved, dat);
    }

    #[test]
    fn test_repeated_flag_takes_first() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("1.dat");
        fs::write(&first, b"").unwrap();
        let first_arg = first.to_string_lossy().into_owned();

        let resolved = resolve_dat(args(&["--dat", &first_arg, "--dat", &first_arg])).unwrap();
        assert_eq!(resolved, first);

        let resolved = resolve_dat(args(&["--dat", &first_arg, "--dat", "/no/such/2.dat"])).unwrap();
        assert_eq!(resolved, first);
    }

    #[test]
    fn test_unknown_flag_is_named() {
        let dir = TempDir::new().unwrap();
        let dat = dir.path().join("12345.dat");
        fs::write(&dat, b"").unwrap();

        let result = resolve_dat(args(&["--verbose", "--dat", &dat.to_string_lossy()]));
        assert!(matches!(result, Err(ArgError::Unrecognized(msg)) if msg.contains("--verbose")));
    }

    #[test]
    fn test_parse_then_validate() {
        let cli = parse_cli(args(&["--dat", "/no/such/map/1.dat"])).unwrap();
        assert_eq!(cli.dat, vec!["/no/such/map/1.dat"]);
        assert_eq!(
            validate_dat(&cli),
            Err(ArgError::NotFound("/no/such/map/1.dat".into()))
        );
    }
}
