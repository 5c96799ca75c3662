//! # Topolab - Topology declaration utility for Mininet-style network emulations
//!
//! This library declares fixed network topologies (hosts, switches, links,
//! IP/MAC addressing, static ARP entries) and generates the artifacts an
//! external network-emulation engine consumes to instantiate them.
//!
//! ## Overview
//!
//! A topology is a neutral in-memory graph built once through a narrow
//! capability interface (add-host, add-switch, add-link) and immutable
//! afterwards. Topologies are discovered by name through a registry of
//! zero-argument factories: the built-in coursework catalog is
//! pre-registered, and further declarations can be loaded from YAML
//! tables at runtime. For hosts that route through a gateway, the host
//! configuration hook produces the fixed post-creation command sequence
//! (interface MTU, default route, static ARP entries) the engine runs
//! before the host participates in traffic.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `topology`: the graph model, builder, and built-in topology catalog
//! - `registry`: name-to-factory mapping the engine-facing layers resolve
//! - `config`: declarative YAML topology tables and their validation
//! - `config_loader`: topology file loading
//! - `hostcfg`: post-creation host configuration command generation
//! - `emitter`: engine-facing serialization and artifact output
//! - `launcher`: interactive hand-off to the external engine
//! - `utils`: IP/CIDR and MAC address helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use topolab::emitter;
//! use topolab::registry::TopologyRegistry;
//!
//! let registry = TopologyRegistry::with_builtins();
//! let topology = registry.build("leaf_spine")?;
//!
//! // The output directory now contains:
//! // - topology.yaml: the engine's topology description
//! // - peers.json: addressing registry for host discovery
//! // - scripts/: one configuration script per gateway-routed host
//! let artifacts = emitter::emit(&topology, "topolab_output".as_ref())?;
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Declaration defects (duplicate identifiers, dangling links, malformed
//! addresses) are construction-time errors surfaced through `thiserror`
//! enums; I/O and orchestration boundaries return
//! `Result<T, color_eyre::eyre::Error>` with file context attached.
//! Nothing recovers from or translates engine failures.

pub mod config;
pub mod config_loader;
pub mod emitter;
pub mod hostcfg;
pub mod launcher;
pub mod registry;
pub mod topology;
pub mod utils;
