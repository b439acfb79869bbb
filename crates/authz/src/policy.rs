//! Pure access-rule evaluation for the request pipeline.
//!
//! Matching a request to its rule (route tables, method filters) is the
//! pipeline's job; this module only answers whether a given principal
//! satisfies a given rule.

use thiserror::Error;

use crate::{Authority, Permission, Principal, Role};

/// Declarative requirement attached to a protected resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    /// Anyone, authenticated or not.
    PermitAll,
    /// Any authenticated principal, regardless of authorities.
    Authenticated,
    /// Principals carrying the role's marker authority.
    HasRole(Role),
    /// Principals carrying the permission's authority token.
    HasAuthority(Permission),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden: missing authority '{0}'")]
    Forbidden(String),
}

/// Decide whether `principal` satisfies `rule`.
///
/// - No IO
/// - No panics
/// - Pure set membership over authorities attached at authentication time
pub fn authorize(principal: Option<&Principal>, rule: &AccessRule) -> Result<(), AccessError> {
    match rule {
        AccessRule::PermitAll => Ok(()),
        AccessRule::Authenticated => match principal {
            Some(_) => Ok(()),
            None => Err(AccessError::Unauthenticated),
        },
        AccessRule::HasRole(role) => {
            let Some(principal) = principal else {
                return Err(AccessError::Unauthenticated);
            };
            if principal.has_role(*role) {
                Ok(())
            } else {
                deny(principal, &Authority::role_marker(*role))
            }
        }
        AccessRule::HasAuthority(permission) => {
            let Some(principal) = principal else {
                return Err(AccessError::Unauthenticated);
            };
            let required = Authority::permission(*permission);
            if principal.has_authority(&required) {
                Ok(())
            } else {
                deny(principal, &required)
            }
        }
    }
}

fn deny(principal: &Principal, missing: &Authority) -> Result<(), AccessError> {
    tracing::debug!(subject = %principal.subject, missing = %missing, "access denied");
    Err(AccessError::Forbidden(missing.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permit_all_accepts_anonymous_callers() {
        assert_eq!(authorize(None, &AccessRule::PermitAll), Ok(()));
    }

    #[test]
    fn authenticated_rule_rejects_anonymous_callers() {
        let principal = Principal::authenticate("annasmith", Role::Student);

        assert_eq!(
            authorize(None, &AccessRule::Authenticated),
            Err(AccessError::Unauthenticated)
        );
        assert_eq!(authorize(Some(&principal), &AccessRule::Authenticated), Ok(()));
    }

    #[test]
    fn role_rule_is_marker_membership() {
        let student = Principal::authenticate("annasmith", Role::Student);
        let admin = Principal::authenticate("linda", Role::Admin);

        assert_eq!(
            authorize(Some(&student), &AccessRule::HasRole(Role::Student)),
            Ok(())
        );
        assert_eq!(
            authorize(Some(&admin), &AccessRule::HasRole(Role::Student)),
            Err(AccessError::Forbidden("ROLE_STUDENT".to_string()))
        );
    }

    #[test]
    fn authority_rule_is_permission_membership() {
        let trainee = Principal::authenticate("tom", Role::AdminTrainee);

        assert_eq!(
            authorize(
                Some(&trainee),
                &AccessRule::HasAuthority(Permission::CourseRead)
            ),
            Ok(())
        );
        assert_eq!(
            authorize(
                Some(&trainee),
                &AccessRule::HasAuthority(Permission::CourseWrite)
            ),
            Err(AccessError::Forbidden("COURSE_WRITE".to_string()))
        );
    }

    #[test]
    fn gated_rules_require_authentication_before_authority_checks() {
        assert_eq!(
            authorize(None, &AccessRule::HasRole(Role::Admin)),
            Err(AccessError::Unauthenticated)
        );
        assert_eq!(
            authorize(None, &AccessRule::HasAuthority(Permission::StudentRead)),
            Err(AccessError::Unauthenticated)
        );
    }
}
