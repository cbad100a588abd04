//! Catalog error types.

use thiserror::Error;

use crate::{IdentityKind, RangeDefect, Version};

/// Errors raised while building or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No representation of the identity is valid for the platform version.
    #[error("{id} is not available on {version}")]
    UnsupportedVersion { id: String, version: Version },

    /// A string id did not resolve to any identity or category.
    #[error("unknown id: {0}")]
    NotFound(String),

    /// An identity or category id was registered twice.
    #[error("id already registered: {0}")]
    DuplicateId(String),

    /// A member or nested category has the wrong element kind.
    #[error("{id} is a {found} but a {expected} was expected")]
    KindMismatch {
        id: String,
        expected: IdentityKind,
        found: IdentityKind,
    },

    /// A category would contain itself.
    #[error("category {0} would contain itself")]
    SelfInclusion(String),

    /// Category definitions reference each other in a loop.
    #[error("category cycle: {}", .0.join(" -> "))]
    CategoryCycle(Vec<String>),

    /// A representation table has overlapping, unordered or empty ranges.
    #[error("invalid version range for {id}: {reason}")]
    InvalidRange { id: String, reason: RangeDefect },

    /// A split identity starts before the identity it was carved out of.
    #[error("{id} splits at {first_version} but its previous type starts at {previous_first}")]
    SplitBeforePrevious {
        id: String,
        first_version: Version,
        previous_first: Version,
    },

    /// A version string could not be parsed.
    #[error("invalid version: {0:?}")]
    InvalidVersion(String),

    /// Catalog overlay could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Catalog overlay could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
