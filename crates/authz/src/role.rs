//! Role definitions and the role → permission table.
//!
//! This module is the whole static core of the model: a closed role
//! enumeration, the fixed permission set each role owns, and the derivation
//! of the authority tokens a request pipeline grants for a role.

use core::str::FromStr;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Authority, Permission};

/// Named identity class granting a fixed permission set.
///
/// # Invariants
/// - The role set is closed; an invalid role cannot be constructed at runtime.
/// - A role's permission set is a compile-time constant and never changes
///   after process start.
/// - All lookups are pure reads, safe from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Admin,
    AdminTrainee,
}

impl Role {
    /// Every role, for audits and exhaustiveness checks.
    pub const ALL: [Role; 3] = [Role::Student, Role::Admin, Role::AdminTrainee];

    /// Canonical role name, without the `ROLE_` prefix.
    pub const fn name(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Admin => "ADMIN",
            Role::AdminTrainee => "ADMIN_TRAINEE",
        }
    }

    /// Role-marker token: the role name behind [`crate::ROLE_PREFIX`].
    pub(crate) const fn marker_str(&self) -> &'static str {
        match self {
            Role::Student => "ROLE_STUDENT",
            Role::Admin => "ROLE_ADMIN",
            Role::AdminTrainee => "ROLE_ADMIN_TRAINEE",
        }
    }

    /// The fixed permission set owned by this role.
    ///
    /// Pure table lookup; no allocation, no locking.
    pub const fn permissions(&self) -> &'static [Permission] {
        match self {
            // Students reach course content through role-gated routes only.
            Role::Student => &[],
            Role::Admin => &[
                Permission::CourseRead,
                Permission::CourseWrite,
                Permission::StudentRead,
                Permission::StudentWrite,
            ],
            Role::AdminTrainee => &[Permission::CourseRead, Permission::StudentRead],
        }
    }

    /// Complete authority set granted by this role: one authority per owned
    /// permission plus exactly one role marker.
    ///
    /// The marker is present even for roles owning no permissions, so the
    /// result always has `permissions().len() + 1` elements. Computed fresh
    /// on every call; callers that want caching attach the result to their
    /// principal at authentication time.
    pub fn authorities(&self) -> HashSet<Authority> {
        let mut granted: HashSet<Authority> = self
            .permissions()
            .iter()
            .copied()
            .map(Authority::permission)
            .collect();
        granted.insert(Authority::role_marker(*self));
        granted
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A role name outside the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
