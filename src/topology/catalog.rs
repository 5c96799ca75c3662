//! Built-in topology declarations.
//!
//! Each factory reproduces one of the fixed coursework topologies as a
//! pure data table driven through [`TopologyBuilder`]. The factories take
//! no arguments and are deterministic; they are registered by name in
//! [`crate::registry::TopologyRegistry::with_builtins`].

use super::graph::{HostAttrs, Topology, TopologyBuilder, TopologyError};

/// Names of all built-in topologies, in registration order.
pub const BUILTIN_NAMES: [&str; 4] = ["single_switch", "switch_ring", "switch_tree", "leaf_spine"];

/// Three hosts on one switch.
///
/// Hosts carry fixed IP and MAC addresses in 192.168.130.0/27; there are
/// no host-to-host links.
pub fn single_switch() -> Result<Topology, TopologyError> {
    const HOSTS: [(&str, &str, &str); 3] = [
        ("h1", "192.168.130.1/27", "00:00:00:00:00:01"),
        ("h2", "192.168.130.2/27", "00:00:00:00:00:02"),
        ("h3", "192.168.130.3/27", "00:00:00:00:00:03"),
    ];

    let mut builder = TopologyBuilder::new("single_switch");
    builder.add_switch("s1")?;
    for (id, ip, mac) in HOSTS {
        builder.add_host(
            id,
            HostAttrs {
                ip: Some(ip.to_string()),
                mac: Some(mac.to_string()),
                ..Default::default()
            },
        )?;
        builder.add_link("s1", id)?;
    }
    Ok(builder.build())
}

/// Three switches in a ring with a host on two of them.
pub fn switch_ring() -> Result<Topology, TopologyError> {
    const LINKS: [(&str, &str); 5] =
        [("h1", "S1"), ("h2", "S2"), ("S1", "S2"), ("S2", "S3"), ("S3", "S1")];

    let mut builder = TopologyBuilder::new("switch_ring");
    for id in ["S1", "S2", "S3"] {
        builder.add_switch(id)?;
    }
    builder.add_host("h1", HostAttrs { ip: Some("10.0.0.1/24".to_string()), ..Default::default() })?;
    builder.add_host("h2", HostAttrs { ip: Some("10.0.0.2/24".to_string()), ..Default::default() })?;
    for (x, y) in LINKS {
        builder.add_link(x, y)?;
    }
    Ok(builder.build())
}

/// Four switches in a line-plus-branch arrangement with five hosts.
///
/// Hosts carry no addressing attributes; the topology exercises pure
/// connectivity.
pub fn switch_tree() -> Result<Topology, TopologyError> {
    const LINKS: [(&str, &str); 8] = [
        ("h1", "S1"),
        ("h2", "S2"),
        ("h3", "S3"),
        ("S1", "S2"),
        ("S2", "S3"),
        ("h4", "S4"),
        ("S2", "S4"),
        ("h5", "S4"),
    ];

    let mut builder = TopologyBuilder::new("switch_tree");
    for id in ["h1", "h2", "h3", "h4", "h5"] {
        builder.add_host(id, HostAttrs::default())?;
    }
    for id in ["S1", "S2", "S3", "S4"] {
        builder.add_switch(id)?;
    }
    for (x, y) in LINKS {
        builder.add_link(x, y)?;
    }
    Ok(builder.build())
}

/// Gateway IP shared by all leaf-spine hosts.
const LEAF_SPINE_GATEWAY: &str = "10.6.1.254";

/// Link MTU applied to leaf-spine hosts by the configuration hook.
const LEAF_SPINE_MTU: u32 = 1490;

/// Five switches in a leaf-spine fabric with three gateway-routed hosts.
///
/// Switches carry explicit datapath identifiers. Hosts carry the full
/// addressing set (IP, MAC, gateway, MTU) consumed by the host
/// configuration hook.
pub fn leaf_spine() -> Result<Topology, TopologyError> {
    const HOSTS: [(&str, &str, &str); 3] = [
        ("h1", "10.6.1.1/24", "00:00:00:00:00:01"),
        ("h2", "10.6.1.2/24", "00:00:00:00:00:02"),
        ("h3", "10.6.1.3/24", "00:00:00:00:00:03"),
    ];
    const HOST_LINKS: [(&str, &str); 3] = [("s1", "h1"), ("s5", "h2"), ("s3", "h3")];
    const SPINE_LINKS: [(&str, &str); 5] =
        [("s1", "s2"), ("s1", "s4"), ("s2", "s3"), ("s3", "s5"), ("s4", "s5")];

    let mut builder = TopologyBuilder::new("leaf_spine");
    for i in 1..=5u64 {
        builder.add_switch_with_dpid(&format!("s{}", i), &format!("{:016x}", i))?;
    }
    for (id, ip, mac) in HOSTS {
        builder.add_host(
            id,
            HostAttrs {
                ip: Some(ip.to_string()),
                mac: Some(mac.to_string()),
                gateway: Some(LEAF_SPINE_GATEWAY.to_string()),
                mtu: Some(LEAF_SPINE_MTU),
            },
        )?;
    }
    for (x, y) in HOST_LINKS.iter().chain(SPINE_LINKS.iter()) {
        builder.add_link(x, y)?;
    }
    Ok(builder.build())
}
