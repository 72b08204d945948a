// file: src/rspec/writer.rs
// version: 1.1.0
// guid: f2b84a60-7c3d-49e1-8a52-d490c6e17b38

//! XML serialization of the topology to a GENI v3 request RSpec

use crate::topology::{Lan, Node, Topology};
use crate::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// GENI v3 request namespace.
const RSPEC_NS: &str = "http://www.geni.net/resources/rspec/3";

/// Emulab extension namespace (blockstores, LAN mapper hints).
const EMULAB_NS: &str = "http://www.protogeni.net/resources/rspec/ext/emulab/1";

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

const SCHEMA_LOCATION: &str =
    "http://www.geni.net/resources/rspec/3 http://www.geni.net/resources/rspec/3/request.xsd";

/// Serialize a topology as a request RSpec.
///
/// Document order is fixed: server, clients by index, then the LAN.
/// Output is byte-for-byte deterministic for identical topologies.
pub fn write_document(topology: &Topology) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rspec = BytesStart::new("rspec");
    rspec.push_attribute(("xmlns", RSPEC_NS));
    rspec.push_attribute(("xmlns:emulab", EMULAB_NS));
    rspec.push_attribute(("xmlns:xsi", XSI_NS));
    rspec.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    rspec.push_attribute(("type", "request"));
    writer.write_event(Event::Start(rspec))?;

    for node in topology.nodes() {
        write_node(&mut writer, node)?;
    }
    write_lan(&mut writer, &topology.lan)?;

    writer.write_event(Event::End(BytesEnd::new("rspec")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    let mut el = BytesStart::new("node");
    el.push_attribute(("client_id", node.name.as_str()));
    el.push_attribute(("exclusive", "true"));
    writer.write_event(Event::Start(el))?;

    let mut sliver = BytesStart::new("sliver_type");
    sliver.push_attribute(("name", "raw-pc"));
    if let Some(image) = &node.disk_image {
        writer.write_event(Event::Start(sliver))?;
        let mut disk = BytesStart::new("disk_image");
        disk.push_attribute(("name", image.as_str()));
        writer.write_event(Event::Empty(disk))?;
        writer.write_event(Event::End(BytesEnd::new("sliver_type")))?;
    } else {
        writer.write_event(Event::Empty(sliver))?;
    }

    if let Some(hardware_type) = &node.hardware_type {
        let mut el = BytesStart::new("hardware_type");
        el.push_attribute(("name", hardware_type.as_str()));
        writer.write_event(Event::Empty(el))?;
    }

    if node.routable_control_ip {
        writer.write_event(Event::Empty(BytesStart::new("emulab:routable_control_ip")))?;
    }

    let mut iface = BytesStart::new("interface");
    iface.push_attribute(("client_id", node.interface.client_id.as_str()));
    if let Some(assignment) = &node.interface.address {
        let address = assignment.address.to_string();
        let netmask = assignment.netmask.to_string();

        writer.write_event(Event::Start(iface))?;
        let mut ip = BytesStart::new("ip");
        ip.push_attribute(("address", address.as_str()));
        ip.push_attribute(("mask", netmask.as_str()));
        ip.push_attribute(("type", "ipv4"));
        writer.write_event(Event::Empty(ip))?;
        writer.write_event(Event::End(BytesEnd::new("interface")))?;
    } else {
        writer.write_event(Event::Empty(iface))?;
    }

    if !node.services.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("services")))?;
        for service in &node.services {
            let mut el = BytesStart::new("execute");
            el.push_attribute(("shell", service.shell.as_str()));
            el.push_attribute(("command", service.command.as_str()));
            writer.write_event(Event::Empty(el))?;
        }
        writer.write_event(Event::End(BytesEnd::new("services")))?;
    }

    if let Some(blockstore) = &node.blockstore {
        let size = format!("{}GB", blockstore.size_gb);
        let mut el = BytesStart::new("emulab:blockstore");
        el.push_attribute(("name", blockstore.name.as_str()));
        el.push_attribute(("class", "local"));
        el.push_attribute(("mountpoint", blockstore.mount_point.as_str()));
        el.push_attribute(("size", size.as_str()));
        writer.write_event(Event::Empty(el))?;
    }

    writer.write_event(Event::End(BytesEnd::new("node")))?;
    Ok(())
}

fn write_lan(writer: &mut Writer<Vec<u8>>, lan: &Lan) -> Result<()> {
    let mut el = BytesStart::new("link");
    el.push_attribute(("client_id", lan.name.as_str()));
    writer.write_event(Event::Start(el))?;

    for member in &lan.members {
        let mut iref = BytesStart::new("interface_ref");
        iref.push_attribute(("client_id", member.as_str()));
        writer.write_event(Event::Empty(iref))?;
    }

    let mut link_type = BytesStart::new("link_type");
    link_type.push_attribute(("name", "lan"));
    writer.write_event(Event::Empty(link_type))?;

    write_lan_flag(writer, "emulab:best_effort", lan.best_effort)?;
    write_lan_flag(writer, "emulab:vlan_tagging", lan.vlan_tagging)?;
    write_lan_flag(writer, "emulab:link_multiplexing", lan.link_multiplexing)?;

    writer.write_event(Event::End(BytesEnd::new("link")))?;
    Ok(())
}

fn write_lan_flag(writer: &mut Writer<Vec<u8>>, name: &str, enabled: bool) -> Result<()> {
    if enabled {
        let mut el = BytesStart::new(name);
        el.push_attribute(("enabled", "true"));
        writer.write_event(Event::Empty(el))?;
    }
    Ok(())
}
