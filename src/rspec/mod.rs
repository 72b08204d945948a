// file: src/rspec/mod.rs
// version: 1.0.0
// guid: 6e91d3b7-450a-4c28-bf69-13a7e8d05c42

//! Request RSpec document generation

pub mod writer;

pub use writer::write_document;

use crate::params::{validator, ProfileParams};
use crate::topology;
use crate::Result;
use tracing::info;

/// Validate parameters, build the topology, and serialize it.
///
/// The single entry point for the whole transformation; a pure function
/// from parameters to document text. No document is produced unless every
/// parameter check passes.
pub fn generate(params: &ProfileParams) -> Result<String> {
    validator::validate(params)?;

    let topology = topology::build(params);
    info!(
        "Generated {} topology: 1 server, {} client(s)",
        params.variant.as_str(),
        topology.clients.len()
    );

    write_document(&topology)
}
