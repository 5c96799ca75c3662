//! Declarative topology tables.
//!
//! Topologies can be declared in YAML instead of code: a table of nodes
//! (with the same attribute schema the built-in catalog uses) and a table
//! of links. [`TopologyFile::validate`] catches declaration defects before
//! the graph is built, and [`TopologyFile::into_topology`] drives the
//! builder to produce the same [`Topology`] a hand-written factory would.

use crate::topology::{HostAttrs, NodeRole, Topology, TopologyBuilder, TopologyError};
use crate::utils::{gateway_in_subnet, is_valid_cidr, is_valid_ipv4, is_valid_mac};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smallest MTU the engine accepts on a host interface (IPv4 minimum).
const MIN_MTU: u32 = 68;

/// Longest datapath identifier the engine accepts (16 hex digits).
const MAX_DPID_LEN: usize = 16;

/// A single node declaration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NodeDecl {
    pub id: String,
    pub role: NodeRole,
    /// IP address with prefix length (hosts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// MAC address (hosts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// Default gateway IP (hosts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Link MTU (hosts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    /// Datapath identifier (switches only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpid: Option<String>,
}

/// A complete topology declaration as read from a YAML file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TopologyFile {
    pub name: String,
    pub nodes: Vec<NodeDecl>,
    pub links: Vec<(String, String)>,
}

/// Declaration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid topology declaration: {0}")]
    InvalidTopology(String),
    #[error("Invalid node declaration: {0}")]
    InvalidNode(String),
    #[error("Invalid link declaration: {0}")]
    InvalidLink(String),
}

impl TopologyFile {
    /// Validate the declaration tables.
    ///
    /// Checks everything the builder checks (duplicate identifiers,
    /// unknown link endpoints, self-loops) plus the attribute rules the
    /// engine expects: well-formed addresses, gateways inside the host's
    /// subnet, hex dpids, and role-appropriate attributes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::InvalidTopology("name cannot be empty".to_string()));
        }
        if self.nodes.is_empty() {
            return Err(ValidationError::InvalidTopology(
                "topology must declare at least one node".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if node.id.is_empty() {
                return Err(ValidationError::InvalidNode(
                    "node identifier cannot be empty".to_string(),
                ));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(ValidationError::InvalidNode(format!(
                    "duplicate node identifier '{}'",
                    node.id
                )));
            }
            match node.role {
                NodeRole::Host => Self::validate_host(node)?,
                NodeRole::Switch => Self::validate_switch(node)?,
            }
        }

        let mut links = HashSet::new();
        for (x, y) in &self.links {
            if x == y {
                return Err(ValidationError::InvalidLink(format!(
                    "link from '{}' to itself is not allowed",
                    x
                )));
            }
            for endpoint in [x, y] {
                if !seen.contains(endpoint.as_str()) {
                    return Err(ValidationError::InvalidLink(format!(
                        "link references undeclared node '{}'",
                        endpoint
                    )));
                }
            }
            let key = if x <= y { (x.clone(), y.clone()) } else { (y.clone(), x.clone()) };
            if !links.insert(key) {
                return Err(ValidationError::InvalidLink(format!(
                    "duplicate link between '{}' and '{}'",
                    x, y
                )));
            }
        }

        Ok(())
    }

    fn validate_host(node: &NodeDecl) -> Result<(), ValidationError> {
        if node.dpid.is_some() {
            return Err(ValidationError::InvalidNode(format!(
                "host '{}' cannot carry a dpid",
                node.id
            )));
        }
        if let Some(ip) = &node.ip {
            if !is_valid_cidr(ip) {
                return Err(ValidationError::InvalidNode(format!(
                    "host '{}' has malformed ip '{}' (expected address/prefix)",
                    node.id, ip
                )));
            }
        }
        if let Some(mac) = &node.mac {
            if !is_valid_mac(mac) {
                return Err(ValidationError::InvalidNode(format!(
                    "host '{}' has malformed mac '{}'",
                    node.id, mac
                )));
            }
        }
        if let Some(gateway) = &node.gateway {
            if !is_valid_ipv4(gateway) {
                return Err(ValidationError::InvalidNode(format!(
                    "host '{}' has malformed gateway '{}'",
                    node.id, gateway
                )));
            }
            if let Some(ip) = &node.ip {
                if !gateway_in_subnet(ip, gateway) {
                    return Err(ValidationError::InvalidNode(format!(
                        "host '{}' gateway '{}' is outside subnet '{}'",
                        node.id, gateway, ip
                    )));
                }
            }
        }
        if let Some(mtu) = node.mtu {
            if mtu < MIN_MTU {
                return Err(ValidationError::InvalidNode(format!(
                    "host '{}' mtu {} is below the minimum of {}",
                    node.id, mtu, MIN_MTU
                )));
            }
        }
        Ok(())
    }

    fn validate_switch(node: &NodeDecl) -> Result<(), ValidationError> {
        if node.ip.is_some() || node.mac.is_some() || node.gateway.is_some() || node.mtu.is_some() {
            return Err(ValidationError::InvalidNode(format!(
                "switch '{}' cannot carry host addressing attributes",
                node.id
            )));
        }
        if let Some(dpid) = &node.dpid {
            let well_formed = !dpid.is_empty()
                && dpid.len() <= MAX_DPID_LEN
                && dpid.chars().all(|c| c.is_ascii_hexdigit());
            if !well_formed {
                return Err(ValidationError::InvalidNode(format!(
                    "switch '{}' has malformed dpid '{}' (expected up to {} hex digits)",
                    node.id, dpid, MAX_DPID_LEN
                )));
            }
        }
        Ok(())
    }

    /// Build the declared graph.
    ///
    /// The builder re-checks the structural invariants, so a table that
    /// skipped [`validate`](Self::validate) still cannot produce a
    /// malformed topology.
    pub fn into_topology(&self) -> Result<Topology, TopologyError> {
        let mut builder = TopologyBuilder::new(&self.name);
        for node in &self.nodes {
            match node.role {
                NodeRole::Host => builder.add_host(
                    &node.id,
                    HostAttrs {
                        ip: node.ip.clone(),
                        mac: node.mac.clone(),
                        gateway: node.gateway.clone(),
                        mtu: node.mtu,
                    },
                )?,
                NodeRole::Switch => match &node.dpid {
                    Some(dpid) => builder.add_switch_with_dpid(&node.id, dpid)?,
                    None => builder.add_switch(&node.id)?,
                },
            }
        }
        for (x, y) in &self.links {
            builder.add_link(x, y)?;
        }
        Ok(builder.build())
    }
}
