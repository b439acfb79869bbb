use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// Prefix marking role-membership authorities.
///
/// Canonical permission names never start with it, so permission-derived
/// authorities and role markers live in disjoint namespaces.
pub const ROLE_PREFIX: &str = "ROLE_";

/// A string token granted to a principal and compared by an external
/// request-authorization mechanism.
///
/// Authorities are derived values with no independent identity: one per
/// permission a role holds plus exactly one role marker, recomputed on
/// demand from the role and never stored by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(Cow<'static, str>);

impl Authority {
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self(token.into())
    }

    /// Authority granted by holding `permission`.
    pub const fn permission(permission: Permission) -> Self {
        Self(Cow::Borrowed(permission.as_str()))
    }

    /// The single authority marking membership in `role` itself.
    pub const fn role_marker(role: Role) -> Self {
        Self(Cow::Borrowed(role.marker_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_role_marker(&self) -> bool {
        self.0.starts_with(ROLE_PREFIX)
    }
}

impl core::fmt::Display for Authority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Permission> for Authority {
    fn from(value: Permission) -> Self {
        Self::permission(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_authority_uses_the_canonical_token() {
        let authority = Authority::permission(Permission::StudentWrite);
        assert_eq!(authority.as_str(), "STUDENT_WRITE");
        assert!(!authority.is_role_marker());
    }

    #[test]
    fn role_marker_is_the_prefixed_role_name() {
        let authority = Authority::role_marker(Role::Admin);
        assert_eq!(authority.as_str(), "ROLE_ADMIN");
        assert!(authority.is_role_marker());
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let json = serde_json::to_string(&Authority::role_marker(Role::Student)).unwrap();
        assert_eq!(json, "\"ROLE_STUDENT\"");
    }
}
