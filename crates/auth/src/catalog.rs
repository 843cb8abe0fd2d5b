//! Static registry of every capability the system recognizes.
//!
//! Protected operations declare their capability at wiring time; the catalog
//! is what makes an unknown `(resource, action)` pair a configuration error
//! surfaced at startup instead of a silently unreachable route.

use std::collections::HashSet;

use thiserror::Error;

use crate::Capability;

/// Capabilities recognized by EZTest, as `(resource, action)` pairs.
const EZTEST_CAPABILITIES: &[(&str, &str)] = &[
    ("session", "read"),
    ("dropdowns", "read"),
    ("projects", "read"),
    ("projects", "write"),
    ("members", "read"),
    ("members", "write"),
    ("settings", "read"),
    ("settings", "write"),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("capability '{0}' is not in the capability catalog")]
    Unknown(Capability),
}

/// The set of grantable capabilities.
///
/// Lookups are exact; the catalog never changes after wiring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityCatalog {
    entries: HashSet<Capability>,
}

impl CapabilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, capability: Capability) {
        self.entries.insert(capability);
    }

    pub fn contains(&self, capability: &Capability) -> bool {
        self.entries.contains(capability)
    }

    /// Fail-fast membership check for wiring code.
    pub fn require(&self, capability: &Capability) -> Result<(), CatalogError> {
        if self.contains(capability) {
            Ok(())
        } else {
            Err(CatalogError::Unknown(capability.clone()))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog of all EZTest capabilities.
pub fn default_catalog() -> CapabilityCatalog {
    let mut catalog = CapabilityCatalog::new();
    for (resource, action) in EZTEST_CAPABILITIES {
        catalog.register(Capability::new(*resource, *action));
    }
    catalog
}
