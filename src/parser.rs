use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AclError;
use crate::types::AccessEntry;

/// Separator between descriptors in a configuration value.
pub const DESCRIPTOR_SEPARATOR: char = ',';

/// A descriptor that was dropped while parsing, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedDescriptor {
    pub descriptor: String,
    pub error: AclError,
}

/// Everything one configuration value produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEntries {
    pub entries: Vec<AccessEntry>,
    pub rejected: Vec<RejectedDescriptor>,
}

/// Parse a comma separated list of `scheme|auth|permissions` descriptors.
///
/// Absent and empty values yield no entries. Malformed descriptors are logged
/// and skipped; see [`parse_with_diagnostics`] to inspect them.
///
/// Example:
/// ```rust
/// use zk_env_acl::{parse, Permissions};
/// let entries = parse(Some("digest|user1:12345|crdwa,x509|Zookeeper CLI|r"));
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].permissions(), Permissions::ALL);
/// ```
pub fn parse(raw: Option<&str>) -> Vec<AccessEntry> {
    parse_with_diagnostics(raw).entries
}

/// Like [`parse`], but also returns the rejected descriptors.
pub fn parse_with_diagnostics(raw: Option<&str>) -> ParsedEntries {
    let mut parsed = ParsedEntries::default();

    for descriptor in raw
        .unwrap_or_default()
        .split(DESCRIPTOR_SEPARATOR)
        .filter(|d| !d.is_empty())
    {
        match descriptor.parse::<AccessEntry>() {
            Ok(entry) => parsed.entries.push(entry),
            Err(error) => {
                warn!(
                    event = "AclParse",
                    phase = "Rejected",
                    descriptor = descriptor,
                    reason = %error,
                    "Ignoring malformed ZooKeeper ACL"
                );
                parsed.rejected.push(RejectedDescriptor {
                    descriptor: descriptor.to_string(),
                    error,
                });
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Permissions;
    use yare::parameterized;

    #[parameterized(
        absent = { None },
        empty = { Some("") },
        only_commas = { Some(",,") },
        single_comma = { Some(",") },
    )]
    fn test_parse_empty_inputs(raw: Option<&str>) {
        let parsed = parse_with_diagnostics(raw);
        assert!(parsed.entries.is_empty());
        assert!(parsed.rejected.is_empty());
    }

    #[parameterized(
        no_separator = { "digestuser1:12345|" },
        no_scheme = { "|tuser1:12345|r" },
        no_auth = { "digest||r" },
        no_permissions = { "digest|user1:12345|" },
        permissions_too_long = { "digest|user1:12345|crwdac" },
        invalid_permission = { "digest|user1:12345|z" },
        only_separators = { "||" },
        missing_auth = { "x509|" },
        legacy_space_form = { "digest user1:12345" },
    )]
    fn test_parse_drops_malformed(raw: &str) {
        let parsed = parse_with_diagnostics(Some(raw));
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].descriptor, raw);
    }

    #[test]
    fn test_parse_keeps_siblings_of_malformed() {
        let parsed =
            parse_with_diagnostics(Some("digest|u1|r,digest||r,,x509|cn|zz,x509|cn|w"));
        assert_eq!(
            parsed.entries,
            vec![
                AccessEntry::new("digest", "u1", Permissions::READ).unwrap(),
                AccessEntry::new("x509", "cn", Permissions::WRITE).unwrap(),
            ]
        );
        let rejected: Vec<&str> = parsed
            .rejected
            .iter()
            .map(|r| r.descriptor.as_str())
            .collect();
        assert_eq!(rejected, vec!["digest||r", "x509|cn|zz"]);
    }

    #[test]
    fn test_parse_leading_and_trailing_commas() {
        let entries = parse(Some(",digest|u1|r,"));
        assert_eq!(entries, vec![AccessEntry::new("digest", "u1", Permissions::READ).unwrap()]);
    }

    #[test]
    fn test_parse_keeps_input_order_and_duplicates() {
        let entries = parse(Some("x509|b|r,digest|a|w,x509|b|r"));
        let auths: Vec<&str> = entries.iter().map(|e| e.auth()).collect();
        assert_eq!(auths, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = Some("digest|user1:12345|rwcda,x509|Zookeeper CLI|r,bad");
        assert_eq!(parse_with_diagnostics(raw), parse_with_diagnostics(raw));
    }

    #[test]
    fn test_parse_whitespace_segment_is_malformed() {
        let parsed = parse_with_diagnostics(Some("digest|u1|r, "));
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.rejected[0].descriptor, " ");
    }
}
