use std::fmt;
use std::path::{Path, PathBuf};

use crate::args::DAT_EXTENSION;

/// Numeric parameter the map tool takes after the map name.
const CMAP_MODE: u8 = 1;

/// Everything needed to start one DOSBox-X session that runs `cmap`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCommand {
    pub exe: PathBuf,
    pub conf: PathBuf,
    /// Mounted as C:.
    pub tool_dir: PathBuf,
    /// Mounted as D:.
    pub cg_path: PathBuf,
    pub sub_command: String,
}

impl LaunchCommand {
    pub fn new(
        exe: PathBuf,
        conf: PathBuf,
        tool_dir: PathBuf,
        cg_path: PathBuf,
        dat_path: &Path,
    ) -> Self {
        LaunchCommand {
            exe,
            conf,
            tool_dir,
            cg_path,
            sub_command: cmap_sub_command(&dat_path.to_string_lossy()),
        }
    }

    /// Emulator arguments, in order, without shell quoting.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-set".to_string(),
            "dos lfn=true".to_string(),
            "-conf".to_string(),
            self.conf.display().to_string(),
        ];
        for directive in self.directives() {
            args.push("-c".to_string());
            args.push(directive);
        }
        args
    }

    fn directives(&self) -> [String; 5] {
        [
            format!("mount c {}", self.tool_dir.display()),
            format!("mount d {}", self.cg_path.display()),
            "C:".to_string(),
            self.sub_command.clone(),
            "exit".to_string(),
        ]
    }
}

/// The single-line, shell-quoted form shown to the user.
impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" -set \"dos lfn=true\" -conf \"{}\"",
            self.exe.display(),
            self.conf.display()
        )?;
        for directive in self.directives() {
            write!(f, " -c \"{}\"", directive)?;
        }
        Ok(())
    }
}

/// `cmap <name> 1`, where `<name>` is the file name without `.dat`.
pub fn cmap_sub_command(dat_path: &str) -> String {
    let file_name = dat_path.rsplit(['\\', '/']).next().unwrap_or(dat_path);
    let map_name = file_name.strip_suffix(DAT_EXTENSION).unwrap_or(file_name);
    format!("cmap {} {}", map_name, CMAP_MODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchCommand {
        LaunchCommand::new(
            PathBuf::from("/tool/dosbox-x/mingw-build/mingw/dosbox-x.exe"),
            PathBuf::from("/tool/dosbox-x/mingw-build/mingw/dosbox-x.conf"),
            PathBuf::from("/tool/see4cg"),
            PathBuf::from("/games/cg"),
            Path::new("/games/cg/map/0/12345.dat"),
        )
    }

    #[test]
    fn test_sub_command_strips_directory_and_extension() {
        assert_eq!(cmap_sub_command("C:\\cg\\map\\0\\12345.dat"), "cmap 12345 1");
        assert_eq!(cmap_sub_command("/cg/map/0/mapadrn_2.dat"), "cmap mapadrn_2 1");
        assert_eq!(cmap_sub_command("77.dat"), "cmap 77 1");
    }

    #[test]
    fn test_args_order() {
        assert_eq!(
            sample().args(),
            vec![
                "-set",
                "dos lfn=true",
                "-conf",
                "/tool/dosbox-x/mingw-build/mingw/dosbox-x.conf",
                "-c",
                "mount c /tool/see4cg",
                "-c",
                "mount d /games/cg",
                "-c",
                "C:",
                "-c",
                "cmap 12345 1",
                "-c",
                "exit",
            ]
        );
    }

    #[test]
    fn test_rendered_command_line() {
        assert_eq!(
            sample().to_string(),
            "\"/tool/dosbox-x/mingw-build/mingw/dosbox-x.exe\" -set \"dos lfn=true\" \
             -conf \"/tool/dosbox-x/mingw-build/mingw/dosbox-x.conf\" \
             -c \"mount c /tool/see4cg\" -c \"mount d /games/cg\" -c \"C:\" \
             -c \"cmap 12345 1\" -c \"exit\""
        );
    }
}
