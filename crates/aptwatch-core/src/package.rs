//! Package records parsed from a `Packages` index
//!
//! Identity is deliberately looser than plain field equality: two records
//! describe the same package when their names match and either the checksums
//! agree or, when a checksum is missing on either side, the versions agree.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Field name for the package name in an accumulated paragraph.
pub const FIELD_NAME: &str = "name";
/// Field name for the package version.
pub const FIELD_VERSION: &str = "version";
/// Field name for the package checksum.
pub const FIELD_SHA1: &str = "sha1";
/// Field name for the archive-relative file path.
pub const FIELD_FILENAME: &str = "filename";

/// A single binary package entry from a `Packages` index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package name (`Package:` field)
    pub name: String,

    /// Package version (`Version:` field)
    pub version: String,

    /// SHA1 checksum of the package file, when the index carries one
    #[serde(default)]
    pub sha1: Option<String>,

    /// Archive-relative path of the package file (`Filename:` field)
    pub filename: String,
}

impl Package {
    /// Build a record from the fields accumulated for one index paragraph.
    ///
    /// `sha1` is optional; a paragraph missing any of the other fields is not
    /// a valid record.
    pub fn from_fields(mut fields: HashMap<&'static str, String>) -> Result<Self> {
        let name = fields
            .remove(FIELD_NAME)
            .ok_or(CoreError::MissingField { field: FIELD_NAME })?;
        let version = fields
            .remove(FIELD_VERSION)
            .ok_or(CoreError::MissingField {
                field: FIELD_VERSION,
            })?;
        let filename = fields
            .remove(FIELD_FILENAME)
            .ok_or(CoreError::MissingField {
                field: FIELD_FILENAME,
            })?;
        let sha1 = fields.remove(FIELD_SHA1);

        Ok(Self {
            name,
            version,
            sha1,
            filename,
        })
    }

    fn checksum(&self) -> Option<&str> {
        self.sha1.as_deref().filter(|s| !s.is_empty())
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name {
            return false;
        }

        match (self.checksum(), other.checksum()) {
            (Some(a), Some(b)) => a == b,
            _ => self.version == other.version,
        }
    }
}

impl Eq for Package {}

impl Hash for Package {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Identity falls back to either checksum or version depending on
        // which fields are present, so the name is the only field two equal
        // records are guaranteed to share.
        self.name.hash(state);
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={} ({})",
            self.name,
            self.version,
            self.sha1.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn package(name: &str, version: &str, sha1: Option<&str>) -> Package {
        Package {
            name: name.to_string(),
            version: version.to_string(),
            sha1: sha1.map(String::from),
            filename: format!("pool/main/{}.deb", name),
        }
    }

    #[test]
    fn test_from_fields() {
        let mut fields = HashMap::new();
        fields.insert(FIELD_NAME, "htop".to_string());
        fields.insert(FIELD_VERSION, "3.2.2-2".to_string());
        fields.insert(FIELD_SHA1, "aabbcc".to_string());
        fields.insert(FIELD_FILENAME, "pool/main/h/htop.deb".to_string());

        let pkg = Package::from_fields(fields).unwrap();
        assert_eq!(pkg.name, "htop");
        assert_eq!(pkg.version, "3.2.2-2");
        assert_eq!(pkg.sha1.as_deref(), Some("aabbcc"));
    }

    #[test]
    fn test_from_fields_sha1_optional() {
        let mut fields = HashMap::new();
        fields.insert(FIELD_NAME, "htop".to_string());
        fields.insert(FIELD_VERSION, "3.2.2-2".to_string());
        fields.insert(FIELD_FILENAME, "pool/main/h/htop.deb".to_string());

        let pkg = Package::from_fields(fields).unwrap();
        assert!(pkg.sha1.is_none());
    }

    #[test]
    fn test_from_fields_missing_required() {
        let mut fields = HashMap::new();
        fields.insert(FIELD_NAME, "htop".to_string());

        let err = Package::from_fields(fields).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingField { field: "version" }
        ));
    }

    #[test]
    fn test_eq_by_checksum_ignores_version() {
        let a = package("htop", "1.0", Some("aaa"));
        let b = package("htop", "2.0", Some("aaa"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_eq_differing_checksums() {
        let a = package("htop", "1.0", Some("aaa"));
        let b = package("htop", "1.0", Some("bbb"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_eq_falls_back_to_version() {
        let a = package("htop", "1.0", Some("aaa"));
        let b = package("htop", "1.0", None);
        assert_eq!(a, b);

        let c = package("htop", "2.0", None);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_eq_empty_checksum_treated_as_absent() {
        let a = package("htop", "1.0", Some(""));
        let b = package("htop", "1.0", Some("aaa"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_eq_requires_matching_name() {
        let a = package("htop", "1.0", Some("aaa"));
        let b = package("btop", "1.0", Some("aaa"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        // A checksum-less record must land in the same bucket as the
        // checksummed one it compares equal to, and must never panic.
        let mut set = HashSet::new();
        set.insert(package("htop", "1.0", Some("aaa")));

        assert!(set.contains(&package("htop", "1.0", None)));
        assert!(set.contains(&package("htop", "9.9", Some("aaa"))));
        assert!(!set.contains(&package("htop", "2.0", None)));
        assert!(!set.contains(&package("btop", "1.0", Some("aaa"))));
    }

    #[test]
    fn test_display() {
        let with = package("htop", "3.2.2-2", Some("aabbcc"));
        assert_eq!(with.to_string(), "htop=3.2.2-2 (aabbcc)");

        let without = package("htop", "3.2.2-2", None);
        assert_eq!(without.to_string(), "htop=3.2.2-2 (-)");
    }
}
