// file: src/main.rs
// version: 1.0.0
// guid: d7c35b92-48e6-4f01-a6d4-b95e20c8f317

//! Testbed profile generator - main entry point

use clap::Parser;
use std::process::ExitCode;
use testbed_profile_gen::{
    cli::{
        args::{Cli, Commands},
        commands::{generate_command, list_images_command, validate_command},
    },
    logging::logger,
};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Commands::Generate { params, output } => generate_command(params, output.as_ref()),
        Commands::Validate { params } => validate_command(params),
        Commands::ListImages { json } => list_images_command(*json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
