use eztest_auth::{Capability, Identity, Role};
use eztest_core::UserId;

/// Request-scoped identity, inserted into request extensions by the
/// permission gate once both authentication and authorization pass.
///
/// Immutable for the lifetime of the request.
#[derive(Debug, Clone)]
pub struct CurrentUser(Identity);

impl CurrentUser {
    pub fn new(identity: Identity) -> Self {
        Self(identity)
    }

    pub fn user_id(&self) -> &UserId {
        self.0.user_id()
    }

    pub fn role(&self) -> &Role {
        self.0.role()
    }

    /// Fine-grained check for handlers that branch on an extra capability.
    pub fn can(&self, capability: &Capability) -> bool {
        self.0.can(capability)
    }
}
