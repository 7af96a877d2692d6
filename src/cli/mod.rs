//! Command-line interface: argument parsing and exit codes

pub mod args;
pub mod exit;

pub use args::{BuildArgs, Cli, Command};
pub use exit::ExitCode;
