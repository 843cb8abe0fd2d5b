use std::collections::HashSet;

use eztest_core::UserId;

use crate::{Capability, Role};

/// A fully resolved authenticated caller, scoped to one request.
///
/// Built once at session resolution and immutable afterwards: the permission
/// set is expanded from the caller's role before construction and no mutating
/// accessors exist. Never persisted or shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
    role: Role,
    permissions: HashSet<Capability>,
}

impl Identity {
    pub fn new(user_id: UserId, role: Role, permissions: HashSet<Capability>) -> Self {
        Self {
            user_id,
            role,
            permissions,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Exact membership check, O(1).
    pub fn can(&self, capability: &Capability) -> bool {
        self.permissions.contains(capability)
    }
}
