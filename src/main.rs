use std::env;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use cgmap::args;
use cgmap::config::Config;
use cgmap::session;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Parsed up front so --help and --version work without any setup
    let Ok(cli) = args::parse_cli(env::args_os()) else {
        return ExitCode::FAILURE;
    };

    info!("CrossGate Map Generator");
    info!("=======================");

    let root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("Failed to resolve working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Ok(config) = Config::from_env(root) else {
        return ExitCode::FAILURE;
    };

    let Ok(dat_path) = args::validate_dat(&cli) else {
        return ExitCode::FAILURE;
    };

    if let Err(e) = session::run(&config, &dat_path) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
