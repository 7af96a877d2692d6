pub mod archive;
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod select;

use clap::Parser;

use cli::{Cli, Command, ExitCode};
use config::BuildConfig;
use report::Reporter;

/// Run the distzip CLI and return an exit code.
pub fn run() -> u8 {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        eprintln!("distzip: no command provided. Try --help.");
        return ExitCode::Refusal.into();
    };

    match command {
        Command::Build(args) => {
            let config = match BuildConfig::resolve(&args) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("distzip: {e}");
                    return e.exit_code().into();
                }
            };

            let mut reporter = Reporter::stdout();
            match build::execute_build(&config, &mut reporter) {
                Ok(summary) => {
                    reporter.summary(&summary.artifact, summary.files_added, summary.archive_bytes);
                    ExitCode::Success.into()
                }
                Err(e) => {
                    eprintln!("distzip: {e}");
                    e.exit_code().into()
                }
            }
        }
    }
}
