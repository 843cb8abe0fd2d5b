//! Contract tests for the permission gate, driven through a minimal router
//! with a counting handler so handler invocations are directly observable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use tower::ServiceExt;

use eztest_api::gate::{self, GateState};
use eztest_auth::{
    default_catalog, default_role_grants, Capability, CatalogError, Hs256TokenVerifier, Role,
    SessionClaims, SessionResolver, TokenSessionResolver,
};
use eztest_core::UserId;

const SECRET: &str = "gate-contract-secret";

fn resolver() -> Arc<dyn SessionResolver> {
    let catalog = default_catalog();
    Arc::new(TokenSessionResolver::new(
        Arc::new(Hs256TokenVerifier::new(SECRET.as_bytes())),
        default_role_grants(&catalog),
    ))
}

fn mint_token(role: &str) -> String {
    let now = Utc::now();
    let claims = SessionClaims {
        user_id: UserId::new("u1"),
        role: Role::new(role.to_string()),
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("failed to encode token")
}

/// A one-route app whose handler counts its own invocations.
fn gated_app(capability: Capability, calls: Arc<AtomicUsize>) -> Router {
    let catalog = default_catalog();
    let state =
        GateState::new(&catalog, resolver(), capability).expect("capability is cataloged");

    Router::new()
        .route(
            "/probe",
            get(move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    "probe-response"
                }
            }),
        )
        .route_layer(from_fn_with_state(state, gate::require_capability))
}

fn request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/probe");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn no_credential_rejects_without_invoking_the_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = gated_app(Capability::new("dropdowns", "read"), calls.clone());

    let response = app.oneshot(request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_grant_rejects_without_invoking_the_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = gated_app(Capability::new("members", "write"), calls.clone());

    let token = mint_token("viewer");
    let response = app.oneshot(request(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn granted_capability_invokes_the_handler_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = gated_app(Capability::new("dropdowns", "read"), calls.clone());

    let token = mint_token("tester");
    let response = app.oneshot(request(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // The handler's response passes through the gate unchanged.
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"probe-response");
}

#[tokio::test]
async fn each_authorized_request_delegates_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = gated_app(Capability::new("dropdowns", "read"), calls.clone());

    let token = mint_token("tester");
    for expected in 1..=3 {
        let response = app.clone().oneshot(request(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), expected);
    }
}

#[test]
fn gate_construction_refuses_uncataloged_capabilities() {
    let catalog = default_catalog();
    let uncataloged = Capability::new("dropdowns", "write");

    let err = GateState::new(&catalog, resolver(), uncataloged.clone()).unwrap_err();
    assert_eq!(err, CatalogError::Unknown(uncataloged));
}
