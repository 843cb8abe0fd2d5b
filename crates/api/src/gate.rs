//! The permission gate: an authorization precondition wrapped around a route.
//!
//! Enforcement happens before the handler is reached, while the routing
//! table stays the single auditable place where capabilities are declared.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, middleware::Next, response::Response};
use chrono::Utc;

use eztest_auth::{authorize, Capability, CapabilityCatalog, CatalogError, SessionResolver};

use crate::app::errors;
use crate::context::CurrentUser;

/// Per-route gate configuration: the shared session resolver plus the one
/// capability this route requires, bound at wiring time.
///
/// Holds no cross-request state; a configured gate is shared across
/// concurrent requests by cloning.
#[derive(Clone)]
pub struct GateState {
    resolver: Arc<dyn SessionResolver>,
    capability: Capability,
}

impl GateState {
    /// Bind a gate to a capability.
    ///
    /// Refuses capabilities absent from the catalog, so a typo in route
    /// wiring fails at startup instead of silently denying all traffic.
    pub fn new(
        catalog: &CapabilityCatalog,
        resolver: Arc<dyn SessionResolver>,
        capability: Capability,
    ) -> Result<Self, CatalogError> {
        catalog.require(&capability)?;
        Ok(Self {
            resolver,
            capability,
        })
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }
}

impl std::fmt::Debug for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateState")
            .field("capability", &self.capability)
            .finish_non_exhaustive()
    }
}

/// Middleware body for `axum::middleware::from_fn_with_state`.
///
/// Session resolution strictly precedes the permission check; the wrapped
/// handler runs at most once, only after both pass, and its response is
/// returned unchanged. Unauthenticated and forbidden outcomes map to
/// distinct responses and never reach the handler.
pub async fn require_capability(
    State(gate): State<GateState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let credential = extract_bearer(req.headers());

    let Some(identity) = gate.resolver.resolve(credential, Utc::now()) else {
        tracing::debug!(capability = %gate.capability, "unauthenticated request");
        return errors::unauthenticated();
    };

    if let Err(err) = authorize(&identity, &gate.capability) {
        tracing::warn!(
            user_id = %identity.user_id(),
            role = %identity.role(),
            capability = %gate.capability,
            "request forbidden",
        );
        return errors::forbidden(&err);
    }

    req.extensions_mut().insert(CurrentUser::new(identity));
    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let token = header.to_str().ok()?.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn extracts_a_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_other_schemes_and_empty_tokens() {
        assert_eq!(extract_bearer(&headers_with("Basic dXNlcjpwdw==")), None);
        assert_eq!(extract_bearer(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }
}
