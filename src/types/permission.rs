//! ZooKeeper permission flags and their bitmask union.
//!
//! Each flag keeps the bit assigned by the ZooKeeper protocol
//! (`READ = 1`, `WRITE = 2`, `CREATE = 4`, `DELETE = 8`, `ADMIN = 16`), so a
//! [`Permissions`] value can be handed to a client as-is via [`Permissions::bits`].
//!
//! Textual form is a short string over the alphabet `r w c d a`, e.g. `"rw"`
//! or `"crdwa"`. Order and repetition do not matter.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter};
use utoipa::ToSchema;

use crate::error::AclError;

/// Longest accepted permission string; one slot per flag.
pub const MAX_PERMISSION_CHARS: usize = 5;

static PERMISSIONS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[rwcda]{1,5}$").expect("permission pattern is valid"));

/// A single ZooKeeper permission flag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    EnumIter,
    AsRefStr,
    StrumDisplay,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Create,
    Delete,
    Admin,
}

impl Permission {
    /// The protocol bit for this flag.
    pub const fn bit(self) -> i32 {
        match self {
            Self::Read => 1,
            Self::Write => 1 << 1,
            Self::Create => 1 << 2,
            Self::Delete => 1 << 3,
            Self::Admin => 1 << 4,
        }
    }

    /// The character used for this flag in configuration strings.
    pub const fn as_char(self) -> char {
        match self {
            Self::Read => 'r',
            Self::Write => 'w',
            Self::Create => 'c',
            Self::Delete => 'd',
            Self::Admin => 'a',
        }
    }
}

impl TryFrom<char> for Permission {
    type Error = AclError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'r' => Ok(Self::Read),
            'w' => Ok(Self::Write),
            'c' => Ok(Self::Create),
            'd' => Ok(Self::Delete),
            'a' => Ok(Self::Admin),
            other => Err(AclError::UnknownPermission(other)),
        }
    }
}

/// A union of [`Permission`] flags, serialized as the raw protocol integer.
///
/// Deserialization only accepts non-empty masks made of the five flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "i32", into = "i32")]
pub struct Permissions(i32);

impl Permissions {
    pub const READ: Permissions = Permissions(Permission::Read.bit());
    pub const WRITE: Permissions = Permissions(Permission::Write.bit());
    pub const CREATE: Permissions = Permissions(Permission::Create.bit());
    pub const DELETE: Permissions = Permissions(Permission::Delete.bit());
    pub const ADMIN: Permissions = Permissions(Permission::Admin.bit());
    pub const ALL: Permissions = Permissions(
        Permission::Read.bit()
            | Permission::Write.bit()
            | Permission::Create.bit()
            | Permission::Delete.bit()
            | Permission::Admin.bit(),
    );

    pub const fn empty() -> Self {
        Permissions(0)
    }

    /// The mask as expected by the ZooKeeper wire protocol.
    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, permission: Permission) -> bool {
        self.0 & permission.bit() != 0
    }

    pub fn insert(&mut self, permission: Permission) {
        self.0 |= permission.bit();
    }

    /// The flags set in this mask, in `r w c d a` order.
    pub fn iter(self) -> impl Iterator<Item = Permission> {
        Permission::iter().filter(move |p| self.contains(*p))
    }
}

impl TryFrom<i32> for Permissions {
    type Error = AclError;

    fn try_from(bits: i32) -> Result<Self, Self::Error> {
        if bits == 0 || bits & !Permissions::ALL.bits() != 0 {
            return Err(AclError::InvalidPermissionBits(bits));
        }
        Ok(Permissions(bits))
    }
}

impl From<Permissions> for i32 {
    fn from(permissions: Permissions) -> Self {
        permissions.bits()
    }
}

impl From<Permission> for Permissions {
    fn from(permission: Permission) -> Self {
        Permissions(permission.bit())
    }
}

impl FromIterator<Permission> for Permissions {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut perms = Permissions::empty();
        for p in iter {
            perms.insert(p);
        }
        perms
    }
}

impl BitOr for Permissions {
    type Output = Permissions;

    fn bitor(self, rhs: Self) -> Self::Output {
        Permissions(self.0 | rhs.0)
    }
}

impl BitOr<Permission> for Permissions {
    type Output = Permissions;

    fn bitor(self, rhs: Permission) -> Self::Output {
        Permissions(self.0 | rhs.bit())
    }
}

impl BitOrAssign<Permission> for Permissions {
    fn bitor_assign(&mut self, rhs: Permission) {
        self.insert(rhs);
    }
}

impl Display for Permissions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let letters: String = self.iter().map(Permission::as_char).collect();
        write!(f, "{letters}")
    }
}

impl FromStr for Permissions {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !PERMISSIONS_PATTERN.is_match(s) {
            return Err(rejection_reason(s));
        }
        Ok(s.chars()
            .filter_map(|c| Permission::try_from(c).ok())
            .collect())
    }
}

/// Why `s` failed [`PERMISSIONS_PATTERN`].
fn rejection_reason(s: &str) -> AclError {
    let len = s.chars().count();
    if len == 0 || len > MAX_PERMISSION_CHARS {
        return AclError::InvalidPermissionLength(len);
    }
    s.chars()
        .find_map(|c| Permission::try_from(c).err())
        .unwrap_or(AclError::InvalidPermissionLength(len))
}
