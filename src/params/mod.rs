// file: src/params/mod.rs
// version: 1.0.0
// guid: c81f5a09-2b7d-4e63-9c40-5af382d16e97

//! Experiment parameter definitions
//!
//! The parameter set mirrors what the portal presents at instantiation
//! time, so the wire names stay camelCase (`nodeCount`, `osImage`, ...).

pub mod loader;
pub mod validator;

pub use loader::ParamLoader;

use serde::{Deserialize, Serialize};

/// Default OS image URN offered by the portal.
pub const DEFAULT_OS_IMAGE: &str =
    "urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU22-64-STD";

/// Default physical node type handed to the resource mapper.
pub const DEFAULT_PHYS_TYPE: &str = "d710";

/// A selectable OS image: the URN the testbed understands plus a
/// human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OsImage {
    pub urn: &'static str,
    pub display: &'static str,
}

/// Images offered to the portal user.
pub const IMAGE_CATALOG: &[OsImage] = &[OsImage {
    urn: DEFAULT_OS_IMAGE,
    display: "UBUNTU 22.04",
}];

/// Which of the two profile flavors to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVariant {
    /// Static 10.10.1.x addressing; clients pick up their dependencies
    /// from the shared NFS mount.
    #[default]
    Addressed,
    /// Unaddressed interfaces; clients install dependencies at boot.
    Basic,
}

impl ProfileVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileVariant::Addressed => "addressed",
            ProfileVariant::Basic => "basic",
        }
    }
}

/// User-supplied parameter set, immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileParams {
    /// Number of client nodes.
    pub node_count: u32,
    /// OS image URN for all nodes. Empty or `default` leaves the client
    /// image choice to the testbed.
    pub os_image: String,
    /// Optional physical node type (pc3000, d710, ...) instead of letting
    /// the resource mapper choose. At most one type.
    pub phys_type: String,
    /// Ask for two interfaces per node. Mapper hint only; the emitted
    /// topology is unchanged.
    pub dual_port: bool,
    /// Tell the mapper to ignore bandwidth constraints on large LANs.
    pub best_effort: bool,
    /// Ask the mapper to keep every node on one switch.
    pub same_switch: bool,
    /// Profile flavor to emit.
    pub variant: ProfileVariant,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            node_count: 1,
            os_image: DEFAULT_OS_IMAGE.to_string(),
            phys_type: DEFAULT_PHYS_TYPE.to_string(),
            dual_port: true,
            best_effort: false,
            same_switch: false,
            variant: ProfileVariant::default(),
        }
    }
}
