// file: src/params/loader.rs
// version: 1.0.0
// guid: 7d3c9f42-6a1e-48b5-bd28-9e05c4a7f163

//! Parameter file loading

use super::ProfileParams;
use crate::Result;
use std::fs;
use std::path::Path;

/// Loads parameter sets from YAML files using the portal's camelCase
/// parameter names.
pub struct ParamLoader;

impl ParamLoader {
    /// Create a new parameter loader
    pub fn new() -> Self {
        Self
    }

    /// Load a parameter set from a YAML file. Missing fields fall back to
    /// the portal defaults.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ProfileParams> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::ProfileError::Config(format!(
                "Failed to read parameter file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let params: ProfileParams = serde_yaml::from_str(&content)?;
        Ok(params)
    }
}

impl Default for ParamLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ProfileVariant, DEFAULT_OS_IMAGE};
    use tempfile::TempDir;

    #[test]
    fn test_load_full_parameter_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("params.yaml");
        let content = r#"
nodeCount: 5
osImage: urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD
physType: pc3000
dualPort: false
bestEffort: true
sameSwitch: false
variant: basic
"#;
        fs::write(&path, content).unwrap();

        let params = ParamLoader::new().load(&path).unwrap();

        assert_eq!(params.node_count, 5);
        assert_eq!(params.phys_type, "pc3000");
        assert!(!params.dual_port);
        assert!(params.best_effort);
        assert_eq!(params.variant, ProfileVariant::Basic);
    }

    #[test]
    fn test_partial_file_uses_portal_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("params.yaml");
        fs::write(&path, "nodeCount: 3\n").unwrap();

        let params = ParamLoader::new().load(&path).unwrap();

        assert_eq!(params.node_count, 3);
        assert_eq!(params.os_image, DEFAULT_OS_IMAGE);
        assert_eq!(params.phys_type, "d710");
        assert!(params.dual_port);
        assert_eq!(params.variant, ProfileVariant::Addressed);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = ParamLoader::new().load("/nonexistent/params.yaml");

        let error = result.unwrap_err();
        assert!(error.to_string().contains("/nonexistent/params.yaml"));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("params.yaml");
        fs::write(&path, "nodeCount: [not an integer\n").unwrap();

        assert!(ParamLoader::new().load(&path).is_err());
    }
}
