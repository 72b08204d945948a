// file: src/topology/builder.rs
// version: 1.1.0
// guid: a9c47e15-3d80-4b62-95fe-08b1d6c3a729

//! Topology construction from a validated parameter set

use super::{
    Blockstore, BootService, Interface, InterfaceAddress, Lan, Node, Topology, LAN_NETMASK,
    NFS_BLOCKSTORE_NAME, NFS_BLOCKSTORE_SIZE_GB, NFS_DIRECTORY, NFS_LAN_NAME, NFS_SERVER_NAME,
    SERVER_HOST_OCTET,
};
use crate::params::{ProfileParams, ProfileVariant};
use std::net::Ipv4Addr;
use tracing::debug;

// Boot scripts shipped in the profile repository.
const NFS_SERVER_SETUP: &str = "sudo /bin/bash /local/repository/nfs-server.sh";
const NFS_CLIENT_SETUP: &str = "sudo /bin/bash /local/repository/nfs-client.sh";
const SSH_KEY_SETUP: &str = "/local/repository/ssh.sh > /tmp/ssh.log 2>&1";
const INSTALL_DEPENDENCIES: &str =
    "/local/repository/install-dependencies.sh > /tmp/dependencies.log 2>&1";
const ULIMIT_SETUP: &str = "/local/repository/ulimit.sh > /tmp/ulimit.log 2>&1";

/// Build the experiment topology for a validated parameter set.
///
/// Pure construction: identical parameters always yield an identical
/// topology. LAN members are attached server first, then clients in
/// index order.
pub fn build(params: &ProfileParams) -> Topology {
    debug!(
        "Building topology: {} client(s), {} variant",
        params.node_count,
        params.variant.as_str()
    );

    let mut lan = Lan {
        name: NFS_LAN_NAME.to_string(),
        best_effort: true,
        vlan_tagging: true,
        link_multiplexing: true,
        members: Vec::with_capacity(params.node_count as usize + 1),
    };

    let server = build_server(params);
    lan.members.push(server.interface.client_id.clone());

    let mut clients = Vec::with_capacity(params.node_count as usize);
    for i in 0..params.node_count {
        let client = build_client(params, i);
        lan.members.push(client.interface.client_id.clone());
        clients.push(client);
    }

    Topology {
        lan,
        server,
        clients,
    }
}

fn build_server(params: &ProfileParams) -> Node {
    Node {
        name: NFS_SERVER_NAME.to_string(),
        disk_image: if params.os_image.is_empty() {
            None
        } else {
            Some(params.os_image.clone())
        },
        hardware_type: None,
        routable_control_ip: false,
        interface: Interface {
            client_id: interface_id(NFS_SERVER_NAME),
            address: server_address(params.variant),
        },
        blockstore: Some(Blockstore {
            name: NFS_BLOCKSTORE_NAME.to_string(),
            mount_point: NFS_DIRECTORY.to_string(),
            size_gb: NFS_BLOCKSTORE_SIZE_GB,
        }),
        services: vec![BootService::new("sh", NFS_SERVER_SETUP)],
    }
}

fn build_client(params: &ProfileParams, index: u32) -> Node {
    let name = format!("node{}", index);

    let mut services = vec![
        BootService::new("sh", NFS_CLIENT_SETUP),
        BootService::new("bash", SSH_KEY_SETUP),
    ];
    if params.variant == ProfileVariant::Basic {
        services.push(BootService::new("bash", INSTALL_DEPENDENCIES));
    }
    services.push(BootService::new("bash", ULIMIT_SETUP));

    Node {
        interface: Interface {
            client_id: interface_id(&name),
            address: client_address(params.variant, index),
        },
        name,
        disk_image: client_disk_image(params),
        hardware_type: if params.phys_type.is_empty() {
            None
        } else {
            Some(params.phys_type.clone())
        },
        routable_control_ip: false,
        blockstore: None,
        services,
    }
}

fn interface_id(node: &str) -> String {
    format!("{}:if0", node)
}

/// Client disk image override; empty or `default` leaves the choice to
/// the testbed.
fn client_disk_image(params: &ProfileParams) -> Option<String> {
    if params.os_image.is_empty() || params.os_image == "default" {
        None
    } else {
        Some(params.os_image.clone())
    }
}

fn server_address(variant: ProfileVariant) -> Option<InterfaceAddress> {
    match variant {
        ProfileVariant::Addressed => Some(InterfaceAddress {
            address: Ipv4Addr::new(10, 10, 1, SERVER_HOST_OCTET),
            netmask: LAN_NETMASK,
        }),
        ProfileVariant::Basic => None,
    }
}

/// Client `i` always sits at 10.10.1.(i+1). The validator bounds the
/// index so the host octet fits.
fn client_address(variant: ProfileVariant, index: u32) -> Option<InterfaceAddress> {
    match variant {
        ProfileVariant::Addressed => Some(InterfaceAddress {
            address: Ipv4Addr::new(10, 10, 1, (index + 1) as u8),
            netmask: LAN_NETMASK,
        }),
        ProfileVariant::Basic => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addressed(node_count: u32) -> ProfileParams {
        ProfileParams {
            node_count,
            ..ProfileParams::default()
        }
    }

    fn basic(node_count: u32) -> ProfileParams {
        ProfileParams {
            node_count,
            variant: ProfileVariant::Basic,
            ..ProfileParams::default()
        }
    }

    #[test]
    fn test_node_and_member_counts() {
        let topology = build(&addressed(3));

        assert_eq!(topology.clients.len(), 3);
        assert_eq!(topology.lan.members.len(), 4);
        assert_eq!(topology.nodes().count(), 4);
    }

    #[test]
    fn test_lan_flags_are_fixed() {
        let topology = build(&addressed(1));

        assert_eq!(topology.lan.name, "nfsLan");
        assert!(topology.lan.best_effort);
        assert!(topology.lan.vlan_tagging);
        assert!(topology.lan.link_multiplexing);
    }

    #[test]
    fn test_server_shape() {
        let topology = build(&addressed(1));
        let server = &topology.server;

        assert_eq!(server.name, "nfs");
        assert_eq!(server.hardware_type, None);
        assert_eq!(server.interface.client_id, "nfs:if0");

        let blockstore = server.blockstore.as_ref().unwrap();
        assert_eq!(blockstore.name, "nfsBS");
        assert_eq!(blockstore.mount_point, "/nfs");
        assert_eq!(blockstore.size_gb, 200);

        assert_eq!(server.services.len(), 1);
        assert_eq!(server.services[0].shell, "sh");
        assert!(server.services[0].command.contains("nfs-server.sh"));
    }

    #[test]
    fn test_client_addresses_follow_index() {
        let topology = build(&addressed(3));

        let server_addr = topology.server.interface.address.unwrap();
        assert_eq!(server_addr.address, Ipv4Addr::new(10, 10, 1, 100));
        assert_eq!(server_addr.netmask, Ipv4Addr::new(255, 255, 255, 0));

        for (i, client) in topology.clients.iter().enumerate() {
            assert_eq!(client.name, format!("node{}", i));
            let addr = client.interface.address.unwrap();
            assert_eq!(addr.address, Ipv4Addr::new(10, 10, 1, i as u8 + 1));
        }
    }

    #[test]
    fn test_basic_variant_leaves_interfaces_unaddressed() {
        let topology = build(&basic(2));

        assert_eq!(topology.server.interface.address, None);
        for client in &topology.clients {
            assert_eq!(client.interface.address, None);
        }
    }

    #[test]
    fn test_client_service_order_addressed() {
        let topology = build(&addressed(1));
        let commands: Vec<&str> = topology.clients[0]
            .services
            .iter()
            .map(|s| s.command.as_str())
            .collect();

        assert_eq!(commands.len(), 3);
        assert!(commands[0].contains("nfs-client.sh"));
        assert!(commands[1].contains("ssh.sh"));
        assert!(commands[2].contains("ulimit.sh"));
    }

    #[test]
    fn test_client_service_order_basic_includes_dependencies() {
        let topology = build(&basic(1));
        let commands: Vec<&str> = topology.clients[0]
            .services
            .iter()
            .map(|s| s.command.as_str())
            .collect();

        assert_eq!(commands.len(), 4);
        assert!(commands[0].contains("nfs-client.sh"));
        assert!(commands[1].contains("ssh.sh"));
        assert!(commands[2].contains("install-dependencies.sh"));
        assert!(commands[3].contains("ulimit.sh"));
    }

    #[test]
    fn test_default_image_skips_client_override() {
        let params = ProfileParams {
            os_image: "default".to_string(),
            ..addressed(1)
        };
        let topology = build(&params);

        assert_eq!(topology.clients[0].disk_image, None);
    }

    #[test]
    fn test_empty_phys_type_skips_hardware_type() {
        let params = ProfileParams {
            phys_type: String::new(),
            ..addressed(1)
        };
        let topology = build(&params);

        assert_eq!(topology.clients[0].hardware_type, None);
    }

    #[test]
    fn test_members_are_server_first_in_index_order() {
        let topology = build(&addressed(2));

        assert_eq!(
            topology.lan.members,
            vec!["nfs:if0", "node0:if0", "node1:if0"]
        );
    }

    #[test]
    fn test_construction_is_deterministic() {
        let params = addressed(5);
        assert_eq!(build(&params), build(&params));
    }
}
