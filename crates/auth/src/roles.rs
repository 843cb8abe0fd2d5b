use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Capability, CapabilityCatalog, CatalogError};

/// Role identifier.
///
/// Roles are intentionally opaque labels at this layer; what a role is
/// allowed to do lives in the [`RoleGrants`] table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role→capability grant table.
///
/// Expansion happens once, at session resolution, strictly before Identity
/// construction. The gate itself never consults this table — it only does
/// exact membership checks on the already-expanded permission set.
#[derive(Debug, Clone, Default)]
pub struct RoleGrants {
    grants: HashMap<Role, HashSet<Capability>>,
}

impl RoleGrants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, role: Role, capability: Capability) {
        self.grants.entry(role).or_default().insert(capability);
    }

    /// Expand a role label into its granted capabilities.
    ///
    /// Unknown roles expand to the empty set: the caller stays authenticated
    /// but every permission check fails closed.
    pub fn expand(&self, role: &Role) -> HashSet<Capability> {
        self.grants.get(role).cloned().unwrap_or_default()
    }

    /// Wiring-time check that every granted capability is cataloged.
    pub fn validate(&self, catalog: &CapabilityCatalog) -> Result<(), CatalogError> {
        for capabilities in self.grants.values() {
            for capability in capabilities {
                catalog.require(capability)?;
            }
        }
        Ok(())
    }
}

/// Default EZTest grant table, expanded explicitly from the catalog.
///
/// There is deliberately no wildcard entry: `admin` enumerates every
/// cataloged capability instead.
pub fn default_role_grants(catalog: &CapabilityCatalog) -> RoleGrants {
    let mut grants = RoleGrants::new();

    for capability in catalog.iter() {
        grants.grant(Role::new("admin"), capability.clone());

        // Leads run projects day to day but cannot touch project settings.
        if capability != &Capability::new("settings", "write") {
            grants.grant(Role::new("lead"), capability.clone());
        }
    }

    for capability in [
        Capability::new("session", "read"),
        Capability::new("dropdowns", "read"),
        Capability::new("projects", "read"),
        Capability::new("members", "read"),
    ] {
        grants.grant(Role::new("tester"), capability);
    }

    for capability in [
        Capability::new("session", "read"),
        Capability::new("dropdowns", "read"),
        Capability::new("projects", "read"),
    ] {
        grants.grant(Role::new("viewer"), capability);
    }

    grants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_catalog;

    #[test]
    fn default_grants_validate_against_the_default_catalog() {
        let catalog = default_catalog();
        let grants = default_role_grants(&catalog);
        assert!(grants.validate(&catalog).is_ok());
    }

    #[test]
    fn admin_holds_every_cataloged_capability() {
        let catalog = default_catalog();
        let grants = default_role_grants(&catalog);

        let admin = grants.expand(&Role::new("admin"));
        for capability in catalog.iter() {
            assert!(admin.contains(capability), "admin lacks {capability}");
        }
    }

    #[test]
    fn lead_cannot_write_settings() {
        let catalog = default_catalog();
        let grants = default_role_grants(&catalog);

        let lead = grants.expand(&Role::new("lead"));
        assert!(lead.contains(&Capability::new("members", "write")));
        assert!(!lead.contains(&Capability::new("settings", "write")));
    }

    #[test]
    fn unknown_roles_expand_to_nothing() {
        let catalog = default_catalog();
        let grants = default_role_grants(&catalog);

        assert!(grants.expand(&Role::new("intruder")).is_empty());
    }

    #[test]
    fn validate_rejects_uncataloged_grants() {
        let catalog = default_catalog();
        let mut grants = RoleGrants::new();
        grants.grant(Role::new("tester"), Capability::new("defects", "link"));

        assert!(matches!(
            grants.validate(&catalog),
            Err(CatalogError::Unknown(_))
        ));
    }
}
