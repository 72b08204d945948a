// file: src/cli/args.rs
// version: 1.1.0
// guid: 8d47a2c6-5e09-4b31-9f78-c05e3b6a1d24

//! Command line argument definitions

use crate::params::{ProfileVariant, DEFAULT_OS_IMAGE, DEFAULT_PHYS_TYPE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "testbed-profile-gen")]
#[command(about = "Generate request RSpecs for NFS-backed LAN testbed experiments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a request RSpec document
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(short, long, help = "Write the document to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Validate a parameter set without emitting a document
    Validate {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// List available OS images
    ListImages {
        #[arg(short, long)]
        json: bool,
    },
}

/// Parameter sources shared by `generate` and `validate`
#[derive(clap::Args)]
pub struct ParamArgs {
    #[arg(
        short = 'p',
        long,
        help = "Load parameters from a YAML file; the flags below are then ignored"
    )]
    pub params: Option<PathBuf>,

    #[arg(short = 'n', long, default_value_t = 1, help = "Number of client nodes")]
    pub node_count: u32,

    #[arg(long, default_value = DEFAULT_OS_IMAGE, help = "OS image URN for all nodes")]
    pub os_image: String,

    #[arg(
        long,
        default_value = DEFAULT_PHYS_TYPE,
        help = "Physical node type (a single type, e.g. pc3000 or d710)"
    )]
    pub phys_type: String,

    #[arg(
        long,
        value_name = "BOOL",
        action = clap::ArgAction::Set,
        default_value_t = true,
        help = "Ask for two interfaces per node"
    )]
    pub dual_port: bool,

    #[arg(long, help = "Tell the resource mapper to ignore LAN bandwidth constraints")]
    pub best_effort: bool,

    #[arg(long, help = "Keep all nodes on the same switch")]
    pub same_switch: bool,

    #[arg(long, value_enum, default_value = "addressed", help = "Profile flavor to emit")]
    pub variant: VariantArg,
}

/// Profile variant argument for the CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum VariantArg {
    /// Static 10.10.1.x addressing, dependencies served from the NFS mount
    Addressed,
    /// Unaddressed interfaces, dependencies installed at boot
    Basic,
}

impl From<VariantArg> for ProfileVariant {
    fn from(variant: VariantArg) -> Self {
        match variant {
            VariantArg::Addressed => ProfileVariant::Addressed,
            VariantArg::Basic => ProfileVariant::Basic,
        }
    }
}

impl From<ProfileVariant> for VariantArg {
    fn from(variant: ProfileVariant) -> Self {
        match variant {
            ProfileVariant::Addressed => VariantArg::Addressed,
            ProfileVariant::Basic => VariantArg::Basic,
        }
    }
}
