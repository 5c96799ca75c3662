//! Topology registry.
//!
//! The registry is the discovery contract between topology declarations
//! and whatever instantiates them: a mapping from topology name to a
//! zero-argument factory producing a populated [`Topology`]. The CLI
//! resolves `--topology` through it, and library users can register their
//! own factories next to the built-ins.

use crate::topology::{catalog, Topology, TopologyError};
use std::collections::BTreeMap;

/// Zero-argument topology factory.
pub type TopologyFactory = Box<dyn Fn() -> Result<Topology, TopologyError> + Send + Sync>;

/// Errors raised by registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("topology '{0}' is already registered")]
    DuplicateName(String),
    #[error("no topology registered under '{0}'")]
    UnknownTopology(String),
    #[error(transparent)]
    Build(#[from] TopologyError),
}

/// Mapping from topology name to factory.
pub struct TopologyRegistry {
    factories: BTreeMap<String, TopologyFactory>,
}

impl TopologyRegistry {
    /// An empty registry
    pub fn new() -> Self {
        TopologyRegistry { factories: BTreeMap::new() }
    }

    /// A registry pre-populated with the built-in catalog
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Registering a fixed set of distinct names cannot fail.
        registry.register("single_switch", catalog::single_switch).unwrap();
        registry.register("switch_ring", catalog::switch_ring).unwrap();
        registry.register("switch_tree", catalog::switch_tree).unwrap();
        registry.register("leaf_spine", catalog::leaf_spine).unwrap();
        registry
    }

    /// Register a factory under a unique name
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Result<Topology, TopologyError> + Send + Sync + 'static,
    {
        if self.factories.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        self.factories.insert(name.to_string(), Box::new(factory));
        Ok(())
    }

    /// Instantiate the topology registered under `name`
    pub fn build(&self, name: &str) -> Result<Topology, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTopology(name.to_string()))?;
        Ok(factory()?)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Returns true if a factory is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for TopologyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::TopologyBuilder;

    #[test]
    fn test_builtins_registered() {
        let registry = TopologyRegistry::with_builtins();
        let mut expected = catalog::BUILTIN_NAMES.to_vec();
        expected.sort();
        assert_eq!(registry.names(), expected);
        for name in catalog::BUILTIN_NAMES {
            assert!(registry.contains(name));
        }
    }

    #[test]
    fn test_build_by_name() {
        let registry = TopologyRegistry::with_builtins();
        let topo = registry.build("single_switch").unwrap();
        assert_eq!(topo.name(), "single_switch");
        assert_eq!(topo.node_count(), 4);
    }

    #[test]
    fn test_unknown_name() {
        let registry = TopologyRegistry::with_builtins();
        let err = registry.build("no_such_topology").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownTopology(_)));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = TopologyRegistry::with_builtins();
        let err = registry
            .register("leaf_spine", catalog::leaf_spine)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
    }

    #[test]
    fn test_custom_factory() {
        let mut registry = TopologyRegistry::new();
        registry
            .register("pair", || {
                let mut builder = TopologyBuilder::new("pair");
                builder.add_switch("s1")?;
                builder.add_switch("s2")?;
                builder.add_link("s1", "s2")?;
                Ok(builder.build())
            })
            .unwrap();
        let topo = registry.build("pair").unwrap();
        assert_eq!(topo.switch_count(), 2);
        assert_eq!(topo.edge_count(), 1);
    }

    #[test]
    fn test_repeated_builds_identical() {
        let registry = TopologyRegistry::with_builtins();
        for name in registry.names() {
            assert_eq!(registry.build(name).unwrap(), registry.build(name).unwrap());
        }
    }
}
