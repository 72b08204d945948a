// file: src/params/validator.rs
// version: 1.0.0
// guid: e4a8b6d0-1f72-4c59-a3e8-67d490b2c815

//! Parameter validation
//!
//! Portal semantics: every violation is collected into one report and
//! surfaced together. Nothing downstream runs while the report is
//! non-empty.

use super::{ProfileParams, ProfileVariant};
use crate::error::{ParameterError, ParameterReport, ProfileError};
use crate::Result;
use tracing::debug;

/// Highest client count that still fits the 10.10.1.0/24 client range.
pub const MAX_ADDRESSED_NODE_COUNT: u32 = 253;

/// Validate a parameter set, collecting every violation before reporting.
pub fn validate(params: &ProfileParams) -> Result<()> {
    let report = check(params);
    if report.is_empty() {
        Ok(())
    } else {
        Err(ProfileError::InvalidParameters(report))
    }
}

/// Run all parameter checks and return the collected report.
pub fn check(params: &ProfileParams) -> ParameterReport {
    debug!("Validating parameters: {:?}", params);

    let mut report = ParameterReport::default();

    if params.node_count < 1 {
        report.push(ParameterError::new(
            "You must choose at least 1 node.",
            &["nodeCount"],
        ));
    }

    if params.variant == ProfileVariant::Addressed
        && params.node_count > MAX_ADDRESSED_NODE_COUNT
    {
        report.push(ParameterError::new(
            format!(
                "At most {} nodes fit the client address range.",
                MAX_ADDRESSED_NODE_COUNT
            ),
            &["nodeCount"],
        ));
    }

    if !params.phys_type.is_empty() {
        let tokens: Vec<&str> = params.phys_type.split(',').collect();
        if tokens.len() != 1 {
            report.push(ParameterError::new(
                "Only a single physical node type is allowed.",
                &["physType"],
            ));
        }
    }

    report
}
