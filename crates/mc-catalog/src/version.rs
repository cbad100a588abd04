//! Platform release versions.
//!
//! Versions are totally ordered by `(major, minor, patch)` so that
//! representation ranges can be expressed as half-open intervals.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// A platform release, e.g. `1.16.5`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u16,
    minor: u16,
    patch: u16,
}

impl Version {
    pub const V1_8: Version = Version::new(1, 8, 0);
    pub const V1_9: Version = Version::new(1, 9, 0);
    pub const V1_10: Version = Version::new(1, 10, 0);
    /// First release with distinct entity types for the former mob sub-variants.
    pub const V1_11: Version = Version::new(1, 11, 0);
    pub const V1_12: Version = Version::new(1, 12, 0);
    /// The flattening: per-block platform keys replace numeric ids with data values.
    pub const V1_13: Version = Version::new(1, 13, 0);
    pub const V1_14: Version = Version::new(1, 14, 0);
    pub const V1_15: Version = Version::new(1, 15, 0);
    pub const V1_16: Version = Version::new(1, 16, 0);
    pub const V1_17: Version = Version::new(1, 17, 0);

    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    #[must_use]
    pub const fn major(self) -> u16 {
        self.major
    }

    #[must_use]
    pub const fn minor(self) -> u16 {
        self.minor
    }

    #[must_use]
    pub const fn patch(self) -> u16 {
        self.patch
    }

    /// Whether mobs use their own entity types instead of a sub-flag on a shared type.
    #[must_use]
    pub fn uses_new_mob_names(self) -> bool {
        self >= Self::V1_11
    }

    /// Whether blocks and items use flattened per-type keys.
    #[must_use]
    pub fn is_flattened(self) -> bool {
        self >= Self::V1_13
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{self}")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

impl FromStr for Version {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidVersion(s.to_string());

        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u16, CatalogError> {
            match parts.next() {
                Some(part) => part.parse().map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };

        let major = next(true)?;
        let minor = next(true)?;
        let patch = next(false)?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor, patch))
    }
}

impl TryFrom<String> for Version {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
