use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Authority, Role};

/// An authenticated subject with its granted authorities resolved.
///
/// The authority set is derived from the subject's role once, at
/// authentication time, and attached here; per-request checks are plain set
/// membership and never re-derive. The struct is serializable so a session
/// or token layer can carry it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub subject: String,
    pub role: Role,
    pub authorities: HashSet<Authority>,
}

impl Principal {
    /// Build a principal for `subject` holding `role`, deriving the full
    /// authority set up front.
    pub fn authenticate(subject: impl Into<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            role,
            authorities: role.authorities(),
        }
    }

    pub fn has_authority(&self, authority: &Authority) -> bool {
        self.authorities.contains(authority)
    }

    /// Role membership, checked through the attached marker authority so the
    /// answer always agrees with what a set-comparing pipeline would see.
    pub fn has_role(&self, role: Role) -> bool {
        self.authorities.contains(&Authority::role_marker(role))
    }
}
