//! Value types for environment-sourced ACLs.
//!
//! Canonical string forms:
//! - Entry: `scheme|auth|permissions`, e.g. `digest|user1:12345|rwcda`
//! - Permissions: any 1-5 characters from `r w c d a`, rendered in that order
//!
//! Fields are taken verbatim; spaces inside `auth` (certificate names) are kept.

mod access_entry;
mod identity;
mod permission;

pub use access_entry::{AccessEntry, FIELD_SEPARATOR};
pub use identity::Identity;
pub use permission::{MAX_PERMISSION_CHARS, Permission, Permissions};
