//! Engine-facing type definitions.
//!
//! These structures are what actually crosses the boundary to the
//! emulation engine: the topology description serialized to YAML and the
//! peer registry serialized to JSON. They mirror the graph model but
//! carry only what the engine consumes, with absent attributes omitted
//! from the output entirely.

use crate::hostcfg::PeerTable;
use crate::topology::{Node, NodeRole, Topology};
use serde::Serialize;

/// One node in the engine's attribute schema.
#[derive(Serialize, Debug)]
pub struct EmulationNode {
    /// Unique node identifier
    pub id: String,
    /// host or switch
    pub role: NodeRole,
    /// IP address with prefix length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// MAC address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// Default gateway IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Link MTU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    /// Datapath identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpid: Option<String>,
}

impl From<&Node> for EmulationNode {
    fn from(node: &Node) -> Self {
        EmulationNode {
            id: node.id.clone(),
            role: node.role,
            ip: node.ip.clone(),
            mac: node.mac.clone(),
            gateway: node.gateway.clone(),
            mtu: node.mtu,
            dpid: node.dpid.clone(),
        }
    }
}

/// One link in the engine's schema.
#[derive(Serialize, Debug)]
pub struct EmulationLink {
    pub source: String,
    pub target: String,
}

/// Root structure of the emitted topology file.
#[derive(Serialize, Debug)]
pub struct EmulationTopology {
    /// Registered topology name
    pub name: String,
    /// All declared nodes, ordered by identifier
    pub nodes: Vec<EmulationNode>,
    /// All declared links, in declaration order
    pub links: Vec<EmulationLink>,
}

impl From<&Topology> for EmulationTopology {
    fn from(topology: &Topology) -> Self {
        EmulationTopology {
            name: topology.name().to_string(),
            nodes: topology.nodes().map(EmulationNode::from).collect(),
            links: topology
                .edges()
                .iter()
                .map(|edge| {
                    let (source, target) = edge.endpoints();
                    EmulationLink { source: source.to_string(), target: target.to_string() }
                })
                .collect(),
        }
    }
}

/// One entry of the peer registry file.
#[derive(Serialize, Debug)]
pub struct PeerInfo {
    /// Host identifier
    pub id: String,
    /// IP address without prefix length
    pub ip_addr: String,
    /// MAC address
    pub mac_addr: String,
}

/// Peer registry written alongside the topology for the engine's host
/// processes to discover each other.
#[derive(Serialize, Debug)]
pub struct PeerRegistry {
    pub peers: Vec<PeerInfo>,
}

impl From<&PeerTable> for PeerRegistry {
    fn from(table: &PeerTable) -> Self {
        PeerRegistry {
            peers: table
                .iter()
                .map(|(id, entry)| PeerInfo {
                    id: id.clone(),
                    ip_addr: entry.ip.clone(),
                    mac_addr: entry.mac.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::catalog;

    #[test]
    fn test_optional_attributes_omitted() {
        let topology = catalog::switch_tree().unwrap();
        let emitted = EmulationTopology::from(&topology);
        let yaml = serde_yaml::to_string(&emitted).unwrap();
        assert!(!yaml.contains("ip:"));
        assert!(!yaml.contains("mac:"));
        assert!(!yaml.contains("dpid:"));
        assert!(yaml.contains("role: switch"));
        assert!(yaml.contains("role: host"));
    }

    #[test]
    fn test_declared_attributes_present() {
        let topology = catalog::leaf_spine().unwrap();
        let emitted = EmulationTopology::from(&topology);
        let yaml = serde_yaml::to_string(&emitted).unwrap();
        assert!(yaml.contains("ip: 10.6.1.1/24"));
        assert!(yaml.contains("gateway: 10.6.1.254"));
        assert!(yaml.contains("mtu: 1490"));
        assert!(yaml.contains("0000000000000005"));
    }

    #[test]
    fn test_link_endpoints_are_declared_nodes() {
        let topology = catalog::leaf_spine().unwrap();
        let emitted = EmulationTopology::from(&topology);
        assert_eq!(emitted.links.len(), topology.edge_count());
        for link in &emitted.links {
            assert!(topology.contains(&link.source));
            assert!(topology.contains(&link.target));
        }
    }

    #[test]
    fn test_peer_registry_json() {
        let topology = catalog::single_switch().unwrap();
        let registry = PeerRegistry::from(&crate::hostcfg::peer_table(&topology));
        assert_eq!(registry.peers.len(), 3);
        let json = serde_json::to_string_pretty(&registry).unwrap();
        assert!(json.contains("\"ip_addr\": \"192.168.130.1\""));
        assert!(json.contains("\"mac_addr\": \"00:00:00:00:00:03\""));
    }
}
