//! Viewer roles that govern which quick actions the dashboard offers.
//!
//! # Design
//! - Role claims arrive as free-form strings; resolution is total and never fails.
//! - Matching is exact and case-sensitive; anything unrecognised is a tenant.
//! - Strict parsing exists separately for validating configuration input.

use std::fmt;
use std::str::FromStr;

use super::ParseKeyError;

/// Closed set of dashboard roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Property owner managing tenants and listings.
    Landlord,
    /// Resident; also the fallback for unrecognised claims.
    #[default]
    Tenant,
}

impl Role {
    /// Every role, in table order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Admin, Self::Landlord, Self::Tenant]
    }

    /// Canonical claim string for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Landlord => "Landlord",
            Self::Tenant => "Tenant",
        }
    }

    /// Resolve a role claim. Only `"Admin"` and `"Landlord"` are recognised;
    /// every other value, including the empty string, is a tenant.
    #[must_use]
    pub fn from_claim(claim: &str) -> Self {
        match claim {
            "Admin" => Self::Admin,
            "Landlord" => Self::Landlord,
            _ => Self::Tenant,
        }
    }

    /// Resolve an optional role claim; an absent claim is a tenant.
    #[must_use]
    pub fn from_optional_claim(claim: Option<&str>) -> Self {
        claim.map_or(Self::Tenant, Self::from_claim)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| ParseKeyError::new("role", value))
    }
}
