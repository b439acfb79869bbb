//! `campusgate-authz` — pure authorization model (role → permission → authority).
//!
//! This crate is intentionally decoupled from HTTP, credential storage and
//! session handling. An external request pipeline derives a principal's
//! authorities once at authentication time and calls [`authorize`] per request.

pub mod authority;
pub mod permission;
pub mod policy;
pub mod principal;
pub mod role;

pub use authority::{Authority, ROLE_PREFIX};
pub use permission::{Permission, UnknownPermission};
pub use policy::{AccessError, AccessRule, authorize};
pub use principal::Principal;
pub use role::{Role, UnknownRole};
