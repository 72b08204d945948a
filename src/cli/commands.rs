// file: src/cli/commands.rs
// version: 1.1.0
// guid: 1b6f93d8-20c4-4e57-a9b1-7e84f5c2d690

//! Command implementations for the CLI

use crate::cli::args::ParamArgs;
use crate::params::{validator, ParamLoader, ProfileParams, IMAGE_CATALOG};
use crate::rspec;
use crate::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Generate a request RSpec and print it, or write it to a file
pub fn generate_command(args: &ParamArgs, output: Option<&PathBuf>) -> Result<()> {
    let params = resolve_params(args)?;
    let document = rspec::generate(&params)?;

    match output {
        Some(path) => {
            fs::write(path, &document)?;
            info!("RSpec written to {}", path.display());
        }
        None => {
            // stdout carries the document for the portal; diagnostics stay
            // on stderr
            let mut stdout = std::io::stdout();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Validate a parameter set and report every violation
pub fn validate_command(args: &ParamArgs) -> Result<()> {
    let params = resolve_params(args)?;
    validator::validate(&params)?;

    info!(
        "Parameters are valid: {} client node(s), {} variant",
        params.node_count,
        params.variant.as_str()
    );
    Ok(())
}

/// List the OS image catalog
pub fn list_images_command(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(IMAGE_CATALOG)?);
    } else {
        for image in IMAGE_CATALOG {
            println!("{}  {}", image.urn, image.display);
        }
    }
    Ok(())
}

/// Resolve the parameter set from a YAML file or from the individual flags
fn resolve_params(args: &ParamArgs) -> Result<ProfileParams> {
    if let Some(path) = &args.params {
        return ParamLoader::new().load(path);
    }

    Ok(ProfileParams {
        node_count: args.node_count,
        os_image: args.os_image.clone(),
        phys_type: args.phys_type.clone(),
        dual_port: args.dual_port,
        best_effort: args.best_effort,
        same_switch: args.same_switch,
        variant: args.variant.into(),
    })
}
