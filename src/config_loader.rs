//! Topology file loading.
//!
//! Reads a YAML topology declaration from disk, parses it, validates the
//! tables, and builds the graph, wrapping each step with file context.

use crate::config::TopologyFile;
use crate::topology::Topology;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::Path;

/// Load and validate a topology declaration file
pub fn load_topology_file(path: &Path) -> Result<TopologyFile> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read topology file '{}'", path.display()))?;
    let file: TopologyFile = serde_yaml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse topology file '{}'", path.display()))?;
    file.validate()
        .wrap_err_with(|| format!("Invalid topology file '{}'", path.display()))?;
    info!("Loaded topology '{}' from {:?}", file.name, path);
    Ok(file)
}

/// Load a topology declaration file and build the declared graph
pub fn load_topology(path: &Path) -> Result<Topology> {
    let file = load_topology_file(path)?;
    let topology = file
        .into_topology()
        .wrap_err_with(|| format!("Failed to build topology from '{}'", path.display()))?;
    Ok(topology)
}
