//! `eztest-auth` — pure authentication/authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod authorize;
pub mod capability;
pub mod catalog;
pub mod claims;
pub mod identity;
pub mod resolver;
pub mod roles;
pub mod token;

pub use authorize::{authorize, AuthzError};
pub use capability::{Capability, CapabilityError};
pub use catalog::{default_catalog, CapabilityCatalog, CatalogError};
pub use claims::{validate_claims, SessionClaims, TokenValidationError};
pub use identity::Identity;
pub use resolver::{SessionResolver, TokenSessionResolver};
pub use roles::{default_role_grants, Role, RoleGrants};
pub use token::{Hs256TokenVerifier, TokenError, TokenVerifier};
