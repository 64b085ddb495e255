pub mod args;
pub mod config;
pub mod config_gen;
pub mod launcher;
pub mod session;
