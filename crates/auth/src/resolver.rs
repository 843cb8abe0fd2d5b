//! Session resolution: credential material → authenticated identity.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{Identity, RoleGrants, TokenVerifier};

/// Resolves an inbound request's credential into an [`Identity`].
///
/// Absence of a valid session is a normal outcome, not a fault: a missing
/// credential, a bad signature, an expired token and an unknown payload all
/// resolve to `None`. Implementations must not mutate or retain the
/// credential, and must hold no cross-request state.
pub trait SessionResolver: Send + Sync {
    fn resolve(&self, credential: Option<&str>, now: DateTime<Utc>) -> Option<Identity>;
}

/// [`SessionResolver`] backed by a signed bearer token.
///
/// Role→capability expansion happens here, before the Identity is built;
/// downstream permission checks are exact membership tests only.
pub struct TokenSessionResolver {
    verifier: Arc<dyn TokenVerifier>,
    grants: RoleGrants,
}

impl TokenSessionResolver {
    pub fn new(verifier: Arc<dyn TokenVerifier>, grants: RoleGrants) -> Self {
        Self { verifier, grants }
    }
}

impl SessionResolver for TokenSessionResolver {
    fn resolve(&self, credential: Option<&str>, now: DateTime<Utc>) -> Option<Identity> {
        let token = credential?;

        let claims = match self.verifier.verify(token, now) {
            Ok(claims) => claims,
            Err(err) => {
                // Fail closed; never echo the token itself.
                tracing::debug!(error = %err, "rejected session credential");
                return None;
            }
        };

        let permissions = self.grants.expand(&claims.role);
        Some(Identity::new(claims.user_id, claims.role, permissions))
    }
}
