//! HTTP application wiring (axum router + gates + services).
//!
//! Layout:
//! - `services.rs`: in-memory read/write models behind the gate
//! - `routes/`: HTTP handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses
//!
//! Every protected route declares its capability right here, at wiring
//! time, which keeps the route→capability mapping auditable in one place.

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Extension, Router,
};

use eztest_auth::{
    default_catalog, default_role_grants, Capability, CatalogError, Hs256TokenVerifier,
    SessionResolver, TokenSessionResolver,
};

use crate::gate::{self, GateState};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Fails when the authorization wiring is inconsistent — a gate or a role
/// grant referencing an uncataloged capability — so misconfiguration
/// surfaces at startup, not in production traffic.
pub fn build_app(session_secret: String) -> anyhow::Result<Router> {
    let catalog = default_catalog();
    let grants = default_role_grants(&catalog);
    grants.validate(&catalog)?;

    let verifier = Arc::new(Hs256TokenVerifier::new(session_secret.as_bytes()));
    let resolver: Arc<dyn SessionResolver> =
        Arc::new(TokenSessionResolver::new(verifier, grants));

    let services = Arc::new(services::build_services());

    let gate_for = |resource: &str, action: &str| -> Result<GateState, CatalogError> {
        GateState::new(&catalog, resolver.clone(), Capability::new(resource, action))
    };

    let session = Router::new()
        .route("/whoami", get(routes::system::whoami))
        .route_layer(from_fn_with_state(
            gate_for("session", "read")?,
            gate::require_capability,
        ));

    let dropdowns = Router::new()
        .route("/dropdowns", get(routes::dropdowns::list_kinds))
        .route("/dropdowns/:kind", get(routes::dropdowns::get_options))
        .route_layer(from_fn_with_state(
            gate_for("dropdowns", "read")?,
            gate::require_capability,
        ));

    let members_read = Router::new()
        .route("/projects/:id/members", get(routes::members::list_members))
        .route_layer(from_fn_with_state(
            gate_for("members", "read")?,
            gate::require_capability,
        ));

    let members_write = Router::new()
        .route("/projects/:id/members", post(routes::members::add_member))
        .route(
            "/projects/:id/members/:user_id",
            delete(routes::members::remove_member),
        )
        .route_layer(from_fn_with_state(
            gate_for("members", "write")?,
            gate::require_capability,
        ));

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(session)
        .merge(dropdowns)
        .merge(members_read)
        .merge(members_write)
        .layer(Extension(services)))
}
