//! Network topology declaration and built-in topology catalog.

pub mod catalog;
pub mod graph;

pub use graph::{Edge, HostAttrs, Node, NodeRole, Topology, TopologyBuilder, TopologyError};
