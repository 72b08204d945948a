// file: src/lib.rs
// version: 1.0.0
// guid: 9a2d4e71-0c5b-4f38-8e6a-d17b93c0f254

//! # Testbed Profile Generator
//!
//! Generates request RSpec documents for an NFS-backed LAN experiment
//! topology: one NFS server with an ephemeral blockstore, a variable number
//! of client nodes with deterministic static addressing, and the boot-time
//! setup scripts each node runs.
//!
//! The generator is a pure transformation: a validated parameter set in, a
//! serialized XML document out. The provisioning portal consumes the
//! document from standard output and maps it onto physical resources.

pub mod cli;
pub mod error;
pub mod logging;
pub mod params;
pub mod rspec;
pub mod topology;

pub use error::{ParameterError, ParameterReport, ProfileError, Result};

/// Version information for the generator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
