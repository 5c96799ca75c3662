//! Emulation engine launcher.
//!
//! The interactive entry point: hand the emitted topology to the external
//! engine, let its command shell own the terminal, and pass the exit
//! status through untouched. Teardown on shell exit is the engine's own;
//! nothing here wraps, retries, or translates engine failures.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// How to invoke the external emulation engine.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Engine executable
    pub engine: PathBuf,
    /// Link type passed to the engine
    pub link: String,
    /// Remote controller address, `ip` or `ip:port`
    pub controller: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            engine: PathBuf::from("mn"),
            link: "tc".to_string(),
            controller: "127.0.0.1".to_string(),
        }
    }
}

impl EngineOptions {
    /// The engine's `--controller` argument for the configured address.
    fn controller_arg(&self) -> String {
        match self.controller.split_once(':') {
            Some((ip, port)) => format!("--controller=remote,ip={},port={}", ip, port),
            None => format!("--controller=remote,ip={}", self.controller),
        }
    }
}

/// Arguments handed to the engine for one topology.
fn engine_args(topology_name: &str, topology_path: &Path, options: &EngineOptions) -> Vec<String> {
    vec![
        "--custom".to_string(),
        topology_path.to_string_lossy().to_string(),
        "--topo".to_string(),
        topology_name.to_string(),
        "--link".to_string(),
        options.link.clone(),
        options.controller_arg(),
    ]
}

/// Launch the engine on an emitted topology and wait for its shell to exit.
///
/// Stdio is inherited, so the engine's interactive session runs directly
/// on the caller's terminal. Returns the engine's exit status unmodified.
pub fn run_emulation(
    topology_name: &str,
    topology_path: &Path,
    options: &EngineOptions,
) -> Result<ExitStatus> {
    let args = engine_args(topology_name, topology_path, options);
    info!("Launching {:?} {}", options.engine, args.join(" "));

    let status = Command::new(&options.engine)
        .args(&args)
        .status()
        .wrap_err_with(|| format!("Failed to launch emulation engine {:?}", options.engine))?;

    if !status.success() {
        warn!("Emulation engine exited with {}", status);
    }
    Ok(status)
}
