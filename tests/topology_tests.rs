//! Integration tests over the public API: registry resolution, declared
//! topology shapes, the host configuration hook, and artifact emission.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use topolab::config_loader;
use topolab::emitter;
use topolab::hostcfg;
use topolab::registry::TopologyRegistry;
use topolab::topology::Edge;

/// Declared node/edge counts for every built-in topology.
#[test]
fn test_builtin_counts_match_declarations() {
    let registry = TopologyRegistry::with_builtins();
    let expected = [
        ("single_switch", 1, 3, 3),
        ("switch_ring", 3, 2, 5),
        ("switch_tree", 4, 5, 8),
        ("leaf_spine", 5, 3, 8),
    ];
    for (name, switches, hosts, edges) in expected {
        let topo = registry.build(name).unwrap();
        assert_eq!(topo.switch_count(), switches, "{} switch count", name);
        assert_eq!(topo.host_count(), hosts, "{} host count", name);
        assert_eq!(topo.edge_count(), edges, "{} edge count", name);
    }
}

/// No built-in topology contains a dangling link.
#[test]
fn test_no_dangling_edges() {
    let registry = TopologyRegistry::with_builtins();
    for name in registry.names() {
        let topo = registry.build(name).unwrap();
        for edge in topo.edges() {
            let (a, b) = edge.endpoints();
            assert!(topo.contains(a), "{}: edge endpoint '{}' undeclared", name, a);
            assert!(topo.contains(b), "{}: edge endpoint '{}' undeclared", name, b);
        }
    }
}

/// Node identifiers are unique: the node count equals the size of the id set.
#[test]
fn test_unique_identifiers() {
    let registry = TopologyRegistry::with_builtins();
    for name in registry.names() {
        let topo = registry.build(name).unwrap();
        let ids: BTreeSet<&str> = topo.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), topo.node_count());
    }
}

/// Repeated factory invocations yield structurally identical graphs.
#[test]
fn test_repeated_builds_are_identical() {
    let registry = TopologyRegistry::with_builtins();
    for name in registry.names() {
        assert_eq!(registry.build(name).unwrap(), registry.build(name).unwrap());
    }
}

/// The star scenario: switch s1 with hosts h1..h3 linked only to s1.
#[test]
fn test_single_switch_star_scenario() {
    let topo = TopologyRegistry::with_builtins().build("single_switch").unwrap();

    let nodes: BTreeSet<&str> = topo.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(nodes, BTreeSet::from(["s1", "h1", "h2", "h3"]));

    let edges: BTreeSet<Edge> = topo.edges().iter().cloned().collect();
    let expected: BTreeSet<Edge> =
        [("s1", "h1"), ("s1", "h2"), ("s1", "h3")].iter().map(|(a, b)| Edge::new(a, b)).collect();
    assert_eq!(edges, expected);
}

/// The hook installs exactly N-1 ARP entries and one default route.
#[test]
fn test_configuration_hook_properties() {
    let topo = TopologyRegistry::with_builtins().build("leaf_spine").unwrap();
    let peers = hostcfg::peer_table(&topo);
    assert_eq!(peers.len(), 3);

    for host in topo.hosts() {
        let gateway = host.gateway.as_deref().unwrap();
        let commands = hostcfg::configuration_commands(host, gateway, &peers);
        assert_eq!(commands.iter().filter(|c| c.starts_with("arp -s ")).count(), peers.len() - 1);
        assert_eq!(
            commands.iter().filter(|c| c.as_str() == "ip route add default via 10.6.1.254").count(),
            1
        );
    }
}

/// A YAML table produces the same graph as the equivalent built-in factory.
#[test]
fn test_file_declaration_matches_builtin() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
name: switch_ring
nodes:
  - id: S1
    role: switch
  - id: S2
    role: switch
  - id: S3
    role: switch
  - id: h1
    role: host
    ip: "10.0.0.1/24"
  - id: h2
    role: host
    ip: "10.0.0.2/24"
links:
  - [h1, S1]
  - [h2, S2]
  - [S1, S2]
  - [S2, S3]
  - [S3, S1]
"#
    )
    .unwrap();

    let from_file = config_loader::load_topology(file.path()).unwrap();
    let builtin = TopologyRegistry::with_builtins().build("switch_ring").unwrap();
    assert_eq!(from_file, builtin);
}

/// End-to-end: build from the registry, emit, and check the artifacts.
#[test]
fn test_generate_artifacts_end_to_end() {
    let dir = TempDir::new().unwrap();
    let topo = TopologyRegistry::with_builtins().build("leaf_spine").unwrap();
    let artifacts = emitter::emit(&topo, dir.path()).unwrap();

    let yaml = fs::read_to_string(&artifacts.topology_path).unwrap();
    assert!(yaml.contains("name: leaf_spine"));
    assert!(yaml.contains("dpid:"));

    let json = fs::read_to_string(artifacts.registry_path.as_ref().unwrap()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["peers"].as_array().unwrap().len(), 3);

    let mut script_names: Vec<String> = artifacts
        .script_paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    script_names.sort();
    assert_eq!(script_names, vec!["h1_config.sh", "h2_config.sh", "h3_config.sh"]);
}

/// Topologies without addressing emit a description but no registry or scripts.
#[test]
fn test_generate_connectivity_only_topology() {
    let dir = TempDir::new().unwrap();
    let topo = TopologyRegistry::with_builtins().build("switch_tree").unwrap();
    let artifacts = emitter::emit(&topo, dir.path()).unwrap();
    assert!(artifacts.topology_path.is_file());
    assert!(artifacts.registry_path.is_none());
    assert!(artifacts.script_paths.is_empty());
}
