//! A single permission-tagged ACL entry.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AclError;

use super::identity::Identity;
use super::permission::Permissions;

/// Separator between `scheme`, `auth` and `permissions` in a descriptor.
pub const FIELD_SEPARATOR: char = '|';

/// Characters that would split `scheme` or `auth` when rendered back to text.
const RESERVED: [char; 2] = [FIELD_SEPARATOR, ','];

/// An access-control entry, e.g. `digest|user1:12345|crdwa`.
///
/// `scheme` and `auth` are never empty and `permissions` always holds at
/// least one flag, however the entry was built.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(try_from = "RawAccessEntry")]
pub struct AccessEntry {
    scheme: String,
    auth: String,
    permissions: Permissions,
}

#[derive(Deserialize)]
struct RawAccessEntry {
    scheme: String,
    auth: String,
    permissions: Permissions,
}

impl TryFrom<RawAccessEntry> for AccessEntry {
    type Error = AclError;

    fn try_from(raw: RawAccessEntry) -> Result<Self, Self::Error> {
        AccessEntry::new(raw.scheme, raw.auth, raw.permissions)
    }
}

impl AccessEntry {
    pub fn new(
        scheme: impl Into<String>,
        auth: impl Into<String>,
        permissions: Permissions,
    ) -> Result<Self, AclError> {
        let entry = AccessEntry {
            scheme: scheme.into(),
            auth: auth.into(),
            permissions,
        };

        for (name, value) in [("scheme", &entry.scheme), ("auth", &entry.auth)] {
            if value.is_empty() {
                return Err(AclError::EmptyField {
                    descriptor: entry.to_string(),
                    field: name.to_string(),
                });
            }
            if let Some(character) = value.chars().find(|c| RESERVED.contains(c)) {
                return Err(AclError::ReservedCharacter {
                    field: name.to_string(),
                    character,
                });
            }
        }
        if entry.permissions.is_empty() {
            return Err(AclError::InvalidPermissionLength(0));
        }

        Ok(entry)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn auth(&self) -> &str {
        &self.auth
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// The identity this entry grants permissions to.
    pub fn identity(&self) -> Identity {
        Identity::new(self.scheme.clone(), self.auth.as_bytes().to_vec())
    }

    pub fn into_identity(self) -> Identity {
        Identity::new(self.scheme, self.auth.into_bytes())
    }
}

impl Display for AccessEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.scheme, self.auth, self.permissions
        )
    }
}

impl FromStr for AccessEntry {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(FIELD_SEPARATOR).collect();
        let &[scheme, auth, perms] = fields.as_slice() else {
            return Err(AclError::WrongFieldCount {
                descriptor: s.to_string(),
                found: fields.len(),
            });
        };

        for (name, value) in [("scheme", scheme), ("auth", auth), ("permissions", perms)] {
            if value.is_empty() {
                return Err(AclError::EmptyField {
                    descriptor: s.to_string(),
                    field: name.to_string(),
                });
            }
        }

        AccessEntry::new(scheme, auth, perms.parse()?)
    }
}
