use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use topolab::config_loader;
use topolab::emitter;
use topolab::launcher::{run_emulation, EngineOptions};
use topolab::registry::TopologyRegistry;
use topolab::topology::Topology;

/// Topology declaration utility for Mininet-style network emulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered topology names
    List,

    /// Build a topology and write the engine artifacts
    Generate {
        /// Name of a registered topology
        #[arg(short, long, conflicts_with = "config")]
        topology: Option<String>,

        /// Path to a YAML topology declaration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for engine artifacts
        #[arg(short, long, default_value = "topolab_output")]
        output: PathBuf,
    },

    /// Build a topology, write the artifacts, and hand off to the engine
    Run {
        /// Name of a registered topology
        #[arg(short, long, conflicts_with = "config")]
        topology: Option<String>,

        /// Path to a YAML topology declaration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for engine artifacts
        #[arg(short, long, default_value = "topolab_output")]
        output: PathBuf,

        /// Remote controller address, ip or ip:port
        #[arg(long, default_value = "127.0.0.1")]
        controller: String,

        /// Link type passed to the engine
        #[arg(long, default_value = "tc")]
        link: String,

        /// Engine executable
        #[arg(long, default_value = "mn")]
        engine: PathBuf,
    },
}

/// Resolve the requested topology from either the registry or a file.
fn resolve_topology(name: Option<&str>, config: Option<&Path>) -> Result<Topology> {
    let registry = TopologyRegistry::with_builtins();
    match (name, config) {
        (Some(name), None) => registry
            .build(name)
            .wrap_err_with(|| format!("Failed to build topology '{}'", name)),
        (None, Some(path)) => config_loader::load_topology(path),
        (None, None) => bail!(
            "either --topology or --config is required (registered: {})",
            registry.names().join(", ")
        ),
        // clap's conflicts_with rules this out
        (Some(_), Some(_)) => unreachable!(),
    }
}

/// Clean up any previous artifacts and recreate the output directory.
fn prepare_output_dir(output: &Path) -> Result<()> {
    if output.exists() && output != Path::new(".") {
        fs::remove_dir_all(output)
            .wrap_err_with(|| format!("Failed to remove output directory '{}'", output.display()))?;
    }
    fs::create_dir_all(output)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match args.command {
        Command::List => {
            let registry = TopologyRegistry::with_builtins();
            for name in registry.names() {
                println!("{}", name);
            }
        }

        Command::Generate { topology, config, output } => {
            let topo = resolve_topology(topology.as_deref(), config.as_deref())?;
            info!(
                "Built topology '{}': {} switches, {} hosts, {} links",
                topo.name(),
                topo.switch_count(),
                topo.host_count(),
                topo.edge_count()
            );
            prepare_output_dir(&output)?;
            let artifacts = emitter::emit(&topo, &output)?;
            info!("Generated engine artifacts: {:?}", artifacts.topology_path);
        }

        Command::Run { topology, config, output, controller, link, engine } => {
            let topo = resolve_topology(topology.as_deref(), config.as_deref())?;
            prepare_output_dir(&output)?;
            let artifacts = emitter::emit(&topo, &output)?;

            let options = EngineOptions { engine, link, controller };
            let status = run_emulation(topo.name(), &artifacts.topology_path, &options)?;

            // The engine's exit code is the session's exit code.
            if !status.success() {
                std::process::exit(status.code().unwrap_or(1));
            }
        }
    }

    Ok(())
}
