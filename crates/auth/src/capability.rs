use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A grantable (resource, action) pair.
///
/// The wire/config form is `"<resource>:<action>"` (e.g. `"dropdowns:read"`).
/// Matching is exact and case-sensitive; there are no wildcard or hierarchy
/// semantics at this layer. Role-based broadening happens upstream, in the
/// grant table consulted at session resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Capability {
    resource: String,
    action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("capability '{0}' is not of the form '<resource>:<action>'")]
    MissingSeparator(String),

    #[error("capability resource must be non-empty")]
    EmptyResource,

    #[error("capability action must be non-empty")]
    EmptyAction,
}

impl FromStr for Capability {
    type Err = CapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s
            .split_once(':')
            .ok_or_else(|| CapabilityError::MissingSeparator(s.to_string()))?;

        if resource.is_empty() {
            return Err(CapabilityError::EmptyResource);
        }
        if action.is_empty() {
            return Err(CapabilityError::EmptyAction);
        }

        Ok(Self::new(resource, action))
    }
}

impl TryFrom<String> for Capability {
    type Error = CapabilityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_form() {
        let cap: Capability = "dropdowns:read".parse().unwrap();
        assert_eq!(cap.resource(), "dropdowns");
        assert_eq!(cap.action(), "read");
        assert_eq!(cap.to_string(), "dropdowns:read");
    }

    #[test]
    fn rejects_missing_separator() {
        let err = "dropdowns".parse::<Capability>().unwrap_err();
        assert!(matches!(err, CapabilityError::MissingSeparator(_)));
    }

    #[test]
    fn rejects_empty_parts() {
        assert_eq!(
            ":read".parse::<Capability>().unwrap_err(),
            CapabilityError::EmptyResource
        );
        assert_eq!(
            "dropdowns:".parse::<Capability>().unwrap_err(),
            CapabilityError::EmptyAction
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let lower = Capability::new("dropdowns", "read");
        let upper = Capability::new("Dropdowns", "read");
        assert_ne!(lower, upper);
    }

    #[test]
    fn serde_uses_the_wire_form() {
        let cap = Capability::new("members", "write");
        let json = serde_json::to_string(&cap).unwrap();
        assert_eq!(json, "\"members:write\"");

        let back: Capability = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cap);
    }
}
