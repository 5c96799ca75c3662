//! Artifact generation.
//!
//! Turns a built [`Topology`] into the files the emulation engine
//! consumes: the topology description (`topology.yaml`), the peer
//! registry (`peers.json`, only when any host carries full addressing),
//! and one executable configuration script per gateway-routed host under
//! `scripts/`.

pub mod types;

pub use types::{EmulationLink, EmulationNode, EmulationTopology, PeerInfo, PeerRegistry};

use crate::hostcfg::{self, PeerTable};
use crate::topology::Topology;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of everything written for one topology.
#[derive(Debug)]
pub struct EmittedArtifacts {
    /// The topology description consumed by the engine
    pub topology_path: PathBuf,
    /// The peer registry, if any host carries full addressing
    pub registry_path: Option<PathBuf>,
    /// One configuration script per gateway-routed host
    pub script_paths: Vec<PathBuf>,
}

/// Write a host configuration script and mark it executable.
fn write_script(scripts_dir: &Path, host_id: &str, content: &str) -> Result<PathBuf> {
    let script_path = scripts_dir.join(format!("{}_config.sh", host_id));
    fs::write(&script_path, content)
        .wrap_err_with(|| format!("Failed to write script {:?}", script_path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&script_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms)?;
    }

    Ok(script_path)
}

/// Emit all artifacts for a topology into `output_dir`.
///
/// The directory is created if missing; existing files are overwritten.
pub fn emit(topology: &Topology, output_dir: &Path) -> Result<EmittedArtifacts> {
    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let topology_path = output_dir.join("topology.yaml");
    let description = EmulationTopology::from(topology);
    let yaml = serde_yaml::to_string(&description)
        .wrap_err("Failed to serialize topology description")?;
    fs::write(&topology_path, yaml)
        .wrap_err_with(|| format!("Failed to write {:?}", topology_path))?;
    info!("Wrote topology description: {:?}", topology_path);

    let peers = hostcfg::peer_table(topology);
    let registry_path = if peers.is_empty() {
        None
    } else {
        let path = output_dir.join("peers.json");
        let registry = PeerRegistry::from(&peers);
        let json = serde_json::to_string_pretty(&registry)
            .wrap_err("Failed to serialize peer registry")?;
        fs::write(&path, json).wrap_err_with(|| format!("Failed to write {:?}", path))?;
        info!("Wrote peer registry with {} entries: {:?}", peers.len(), path);
        Some(path)
    };

    let script_paths = emit_host_scripts(topology, &peers, output_dir)?;

    Ok(EmittedArtifacts { topology_path, registry_path, script_paths })
}

/// Write one configuration script per host that declares a gateway.
fn emit_host_scripts(
    topology: &Topology,
    peers: &PeerTable,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let gateway_hosts: Vec<_> =
        topology.hosts().filter(|h| h.gateway.is_some()).collect();
    if gateway_hosts.is_empty() {
        return Ok(Vec::new());
    }

    let scripts_dir = output_dir.join("scripts");
    fs::create_dir_all(&scripts_dir)
        .wrap_err_with(|| format!("Failed to create scripts directory '{}'", scripts_dir.display()))?;

    let mut script_paths = Vec::new();
    for host in gateway_hosts {
        let gateway = host.gateway.as_deref().unwrap();
        let commands = hostcfg::configuration_commands(host, gateway, peers);
        let script = hostcfg::render_script(&host.id, &commands);
        script_paths.push(write_script(&scripts_dir, &host.id, &script)?);
    }
    info!("Wrote {} host configuration scripts", script_paths.len());
    Ok(script_paths)
}
