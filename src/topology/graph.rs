//! Neutral topology graph model.
//!
//! This file defines the graph structure handed to the emulation engine:
//! nodes (hosts and switches) with their addressing attributes, and the
//! links connecting them. Construction goes through [`TopologyBuilder`],
//! which checks the declaration invariants up front; a built [`Topology`]
//! is immutable and exposes accessors only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors raised while declaring a topology.
///
/// Every variant is a declaration defect: a well-formed topology table
/// never produces one at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("duplicate node identifier '{0}'")]
    DuplicateNode(String),
    #[error("link references undeclared node '{0}'")]
    UnknownEndpoint(String),
    #[error("link from '{0}' to itself is not allowed")]
    SelfLoop(String),
    #[error("duplicate link between '{0}' and '{1}'")]
    DuplicateLink(String, String),
}

/// Role of a node in the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// End-node capable of running commands and sourcing traffic
    Host,
    /// Forwarding node connecting hosts and other switches
    Switch,
}

/// Host addressing attributes.
///
/// All fields are optional; topologies without addressing (pure
/// connectivity exercises) leave them unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAttrs {
    /// IP address with prefix length, e.g. "10.6.1.1/24"
    pub ip: Option<String>,
    /// MAC address, e.g. "00:00:00:00:00:01"
    pub mac: Option<String>,
    /// Default gateway IP for the configuration hook
    pub gateway: Option<String>,
    /// Link MTU applied by the configuration hook
    pub mtu: Option<u32>,
}

/// A single node in the topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique identifier within the topology
    pub id: String,
    /// Host or switch
    pub role: NodeRole,
    /// IP address with prefix length (hosts only)
    pub ip: Option<String>,
    /// MAC address (hosts only)
    pub mac: Option<String>,
    /// Default gateway IP (hosts only)
    pub gateway: Option<String>,
    /// Link MTU (hosts only)
    pub mtu: Option<u32>,
    /// Datapath identifier (switches only)
    pub dpid: Option<String>,
}

impl Node {
    /// Returns true if this node is a host
    pub fn is_host(&self) -> bool {
        self.role == NodeRole::Host
    }

    /// Returns true if this node is a switch
    pub fn is_switch(&self) -> bool {
        self.role == NodeRole::Switch
    }
}

/// An unordered link between two nodes.
///
/// Endpoints are stored in sorted order so `(a, b)` and `(b, a)` compare
/// equal and deduplicate against each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: String,
    b: String,
}

impl Edge {
    /// Create an edge; endpoint order does not matter.
    pub fn new(x: &str, y: &str) -> Self {
        if x <= y {
            Edge { a: x.to_string(), b: y.to_string() }
        } else {
            Edge { a: y.to_string(), b: x.to_string() }
        }
    }

    /// The two endpoints, in canonical (sorted) order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }

    /// Returns true if `id` is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.a == id {
            Some(&self.b)
        } else if self.b == id {
            Some(&self.a)
        } else {
            None
        }
    }
}

/// A fully-declared topology.
///
/// Built once by [`TopologyBuilder::build`] and immutable afterwards:
/// there is no insertion API, so a topology observed by the engine-facing
/// layers can never be half-constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    name: String,
    nodes: BTreeMap<String, Node>,
    edges: Vec<Edge>,
}

impl Topology {
    /// Name under which this topology is registered
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a node by identifier
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns true if a node with the given identifier is declared
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes, ordered by identifier
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All hosts, ordered by identifier
    pub fn hosts(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| n.is_host())
    }

    /// All switches, ordered by identifier
    pub fn switches(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| n.is_switch())
    }

    /// All links, in declaration order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn host_count(&self) -> usize {
        self.hosts().count()
    }

    pub fn switch_count(&self) -> usize {
        self.switches().count()
    }

    /// Links touching the given node
    pub fn edges_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.touches(id))
    }
}

/// Incremental topology declaration.
///
/// All state is instance-local: two builders never observe each other's
/// nodes or links. Declaration defects (duplicate identifier, link to an
/// undeclared node, self-loop, parallel link) are rejected at the call
/// that introduces them.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    name: String,
    nodes: BTreeMap<String, Node>,
    edges: Vec<Edge>,
}

impl TopologyBuilder {
    /// Start an empty declaration under the given name
    pub fn new(name: &str) -> Self {
        TopologyBuilder {
            name: name.to_string(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    fn insert(&mut self, node: Node) -> Result<(), TopologyError> {
        if self.nodes.contains_key(&node.id) {
            return Err(TopologyError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Declare a host with the given addressing attributes
    pub fn add_host(&mut self, id: &str, attrs: HostAttrs) -> Result<(), TopologyError> {
        self.insert(Node {
            id: id.to_string(),
            role: NodeRole::Host,
            ip: attrs.ip,
            mac: attrs.mac,
            gateway: attrs.gateway,
            mtu: attrs.mtu,
            dpid: None,
        })
    }

    /// Declare a switch without a datapath identifier
    pub fn add_switch(&mut self, id: &str) -> Result<(), TopologyError> {
        self.insert(Node {
            id: id.to_string(),
            role: NodeRole::Switch,
            ip: None,
            mac: None,
            gateway: None,
            mtu: None,
            dpid: None,
        })
    }

    /// Declare a switch with an explicit datapath identifier
    pub fn add_switch_with_dpid(&mut self, id: &str, dpid: &str) -> Result<(), TopologyError> {
        self.insert(Node {
            id: id.to_string(),
            role: NodeRole::Switch,
            ip: None,
            mac: None,
            gateway: None,
            mtu: None,
            dpid: Some(dpid.to_string()),
        })
    }

    /// Declare a link between two already-declared nodes
    pub fn add_link(&mut self, x: &str, y: &str) -> Result<(), TopologyError> {
        if x == y {
            return Err(TopologyError::SelfLoop(x.to_string()));
        }
        for endpoint in [x, y] {
            if !self.nodes.contains_key(endpoint) {
                return Err(TopologyError::UnknownEndpoint(endpoint.to_string()));
            }
        }
        let edge = Edge::new(x, y);
        if self.edges.contains(&edge) {
            let (a, b) = edge.endpoints();
            return Err(TopologyError::DuplicateLink(a.to_string(), b.to_string()));
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Finish the declaration.
    ///
    /// Deterministic: the same sequence of calls always yields a
    /// structurally identical topology.
    pub fn build(self) -> Topology {
        Topology {
            name: self.name,
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
