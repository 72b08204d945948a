// file: src/topology/mod.rs
// version: 1.0.0
// guid: b5e072c8-94af-4d16-8b3a-f20c6d19e573

//! Immutable experiment topology model
//!
//! Built once per invocation, serialized, then discarded. The boot
//! scripts shipped with the profile repository rely on the fixed names
//! below; do not change one without the other.

pub mod builder;

pub use builder::build;

use std::net::Ipv4Addr;

/// Name of the NFS server node.
pub const NFS_SERVER_NAME: &str = "nfs";

/// Name of the shared LAN.
pub const NFS_LAN_NAME: &str = "nfsLan";

/// Mount point for the NFS blockstore.
pub const NFS_DIRECTORY: &str = "/nfs";

/// Blockstore resource name.
pub const NFS_BLOCKSTORE_NAME: &str = "nfsBS";

/// Blockstore capacity in gigabytes.
pub const NFS_BLOCKSTORE_SIZE_GB: u32 = 200;

/// Netmask shared by every addressed interface.
pub const LAN_NETMASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

/// Host octet reserved for the server.
pub const SERVER_HOST_OCTET: u8 = 100;

/// A boot-time service invocation registered on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootService {
    pub shell: String,
    pub command: String,
}

impl BootService {
    pub fn new(shell: &str, command: &str) -> Self {
        Self {
            shell: shell.to_string(),
            command: command.to_string(),
        }
    }
}

/// Static IPv4 assignment for a LAN interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub address: Ipv4Addr,
    pub netmask: Ipv4Addr,
}

/// A node interface attached to the LAN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// RSpec client id, `<node>:if0`.
    pub client_id: String,
    pub address: Option<InterfaceAddress>,
}

/// Ephemeral block storage attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockstore {
    pub name: String,
    pub mount_point: String,
    pub size_gb: u32,
}

/// A physical machine in the experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub disk_image: Option<String>,
    pub hardware_type: Option<String>,
    pub routable_control_ip: bool,
    pub interface: Interface,
    pub blockstore: Option<Blockstore>,
    /// Boot services in registration order; the testbed runs them in
    /// sequence.
    pub services: Vec<BootService>,
}

/// The shared broadcast segment aggregating every node interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lan {
    pub name: String,
    pub best_effort: bool,
    pub vlan_tagging: bool,
    pub link_multiplexing: bool,
    /// Interface client ids in attachment order, server first.
    pub members: Vec<String>,
}

/// Complete experiment topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pub lan: Lan,
    pub server: Node,
    pub clients: Vec<Node>,
}

impl Topology {
    /// All nodes in document order, server first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(&self.server).chain(self.clients.iter())
    }
}
