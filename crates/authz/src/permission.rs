use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fine-grained capability over a campus resource.
///
/// The set is closed: permissions are defined once at compile time, and no
/// value outside this enum can exist at runtime. Each variant's canonical
/// name is the exact token an external request pipeline compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    CourseRead,
    CourseWrite,
    StudentRead,
    StudentWrite,
}

impl Permission {
    /// Every permission, for audits and exhaustiveness checks.
    pub const ALL: [Permission; 4] = [
        Permission::CourseRead,
        Permission::CourseWrite,
        Permission::StudentRead,
        Permission::StudentWrite,
    ];

    /// Canonical token for this permission.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::CourseRead => "COURSE_READ",
            Permission::CourseWrite => "COURSE_WRITE",
            Permission::StudentRead => "STUDENT_READ",
            Permission::StudentWrite => "STUDENT_WRITE",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A permission token outside the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown permission: {0}")]
pub struct UnknownPermission(pub String);

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_are_stable() {
        assert_eq!(Permission::CourseRead.as_str(), "COURSE_READ");
        assert_eq!(Permission::CourseWrite.as_str(), "COURSE_WRITE");
        assert_eq!(Permission::StudentRead.as_str(), "STUDENT_READ");
        assert_eq!(Permission::StudentWrite.as_str(), "STUDENT_WRITE");
    }

    #[test]
    fn serializes_to_canonical_token() {
        let json = serde_json::to_string(&Permission::CourseWrite).unwrap();
        assert_eq!(json, "\"COURSE_WRITE\"");
    }

    #[test]
    fn parse_rejects_tokens_outside_the_closed_set() {
        assert_eq!(
            "STUDENT_READ".parse::<Permission>().unwrap(),
            Permission::StudentRead
        );

        let err = "COURSE_DELETE".parse::<Permission>().unwrap_err();
        assert_eq!(err, UnknownPermission("COURSE_DELETE".to_string()));
    }
}
