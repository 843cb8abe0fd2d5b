//! Token verification seam.
//!
//! The API layer depends on `Arc<dyn TokenVerifier>` so the signing
//! algorithm stays swappable. Claim-time validation runs here as well,
//! against an injected clock, so verification outcomes are deterministic.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, SessionClaims, TokenValidationError};

#[derive(Debug, Error)]
pub enum TokenError {
    /// Malformed token, unknown algorithm, or signature mismatch.
    #[error("token failed integrity checks")]
    Integrity(#[source] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verifies a bearer token's integrity and decodes its claims.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError>;
}

/// HS256 (shared-secret) verifier backed by `jsonwebtoken`.
pub struct Hs256TokenVerifier {
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time-window checks run in `validate_claims` with an explicit clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenVerifier for Hs256TokenVerifier {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map_err(TokenError::Integrity)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
