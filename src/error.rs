// file: src/error.rs
// version: 1.0.0
// guid: 3f6b1c2a-8d4e-4a97-b5c3-2e9f70d1a486

use std::fmt;
use thiserror::Error;

/// Result type alias for the generator
pub type Result<T> = std::result::Result<T, ProfileError>;

/// A single parameter validation failure, naming the portal parameter(s)
/// at fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterError {
    pub message: String,
    pub params: Vec<String>,
}

impl ParameterError {
    pub fn new(message: impl Into<String>, params: &[&str]) -> Self {
        Self {
            message: message.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} [{}]", self.message, self.params.join(", "))
        }
    }
}

/// Ordered collection of parameter errors. Violations are collected and
/// surfaced together; no document is emitted while the report is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterReport(pub Vec<ParameterError>);

impl ParameterReport {
    pub fn push(&mut self, error: ParameterError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterError> {
        self.0.iter()
    }
}

impl fmt::Display for ParameterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

/// Error types for the profile generator
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("parameter validation failed:\n{0}")]
    InvalidParameters(ParameterReport),
}

impl ProfileError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
