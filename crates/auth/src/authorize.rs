use thiserror::Error;

use crate::{Capability, Identity};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("missing permission '{0}'")]
    Forbidden(Capability),
}

/// Authorize an identity against a required capability.
///
/// - No IO
/// - No panics
/// - Exact match only: `dropdowns:read` never implies `dropdowns:write`
///
/// The error names the required capability (for audit logs) and nothing
/// about the identity's own permission set.
pub fn authorize(identity: &Identity, required: &Capability) -> Result<(), AuthzError> {
    if identity.can(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.clone()))
    }
}
