//! Stable, version-independent identities.
//!
//! An [`Identity`] names one item or mob by a logical key that never changes,
//! and carries the [`RepresentationTable`] that maps it onto whatever key the
//! running platform version uses. Identities are built once at catalog
//! construction and shared by `Arc` afterwards.

use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{CatalogError, Representation, RepresentationTable, Result, Split, Version};

/// What kind of platform object an identity describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    /// Blocks and item stacks.
    Item,
    /// Spawnable entities.
    Mob,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => f.write_str("item"),
            Self::Mob => f.write_str("mob"),
        }
    }
}

/// Species tag of an identity, stable across platform versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Species(Cow<'static, str>);

impl Species {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can be a member of a category.
pub trait Categorizable {
    /// Stable string id.
    fn id(&self) -> &str;
}

/// A stable logical item or mob.
pub struct Identity {
    key: Cow<'static, str>,
    kind: IdentityKind,
    species: Species,
    legacy_key: Option<Cow<'static, str>>,
    table: RepresentationTable,
    pub(crate) split: Option<Split>,
}

impl Identity {
    /// Create an identity whose species tag is its upper-cased key.
    #[must_use]
    pub fn new(
        kind: IdentityKind,
        key: impl Into<Cow<'static, str>>,
        table: RepresentationTable,
    ) -> Self {
        let key = key.into();
        let species = Species::new(key.to_ascii_uppercase());
        Self {
            key,
            kind,
            species,
            legacy_key: None,
            table,
            split: None,
        }
    }

    #[must_use]
    pub fn item(key: impl Into<Cow<'static, str>>, table: RepresentationTable) -> Self {
        Self::new(IdentityKind::Item, key, table)
    }

    #[must_use]
    pub fn mob(key: impl Into<Cow<'static, str>>, table: RepresentationTable) -> Self {
        Self::new(IdentityKind::Mob, key, table)
    }

    #[must_use]
    pub fn with_species(mut self, species: Species) -> Self {
        self.species = species;
        self
    }

    /// Id the identity was known by on older platforms.
    #[must_use]
    pub fn with_legacy_key(mut self, legacy_key: impl Into<Cow<'static, str>>) -> Self {
        self.legacy_key = Some(legacy_key.into());
        self
    }

    /// Logical key, e.g. `oak_log`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn kind(&self) -> IdentityKind {
        self.kind
    }

    #[must_use]
    pub fn legacy_key(&self) -> Option<&str> {
        self.legacy_key.as_deref()
    }

    /// Species tag. Split identities report the species of their previous type.
    #[must_use]
    pub fn species(&self) -> &Species {
        match &self.split {
            Some(split) => split.previous().species(),
            None => &self.species,
        }
    }

    #[must_use]
    pub fn representations(&self) -> &RepresentationTable {
        &self.table
    }

    /// Representation valid on `version`.
    ///
    /// Below the first version of a split identity, the representation of the
    /// previous type is returned.
    pub fn resolve(&self, version: Version) -> Result<&Representation> {
        if let Some(split) = &self.split {
            if version < split.first_version() {
                return split.previous().resolve(version);
            }
        }

        self.table.resolve(version).ok_or_else(|| {
            tracing::trace!(id = %self.key, %version, "no representation for version");
            CatalogError::UnsupportedVersion {
                id: self.key.to_string(),
                version,
            }
        })
    }

    /// Whether [`Identity::resolve`] succeeds on `version`.
    #[must_use]
    pub fn is_available(&self, version: Version) -> bool {
        self.resolve(version).is_ok()
    }

    /// First version with its own representation.
    #[must_use]
    pub fn first_version(&self) -> Option<Version> {
        self.table.earliest()
    }
}

impl Categorizable for Identity {
    fn id(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Identity");
        s.field("key", &self.key).field("kind", &self.kind);
        if let Some(split) = &self.split {
            s.field("previous", &split.previous().key())
                .field("first_version", &split.first_version());
        }
        s.field("representations", &self.table.len()).finish()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Element type of a category.
///
/// Converting from an [`Identity`] is fallible: an identity of the wrong kind
/// is simply not a member.
pub trait Member: Categorizable + Clone + Eq + Hash + Send + Sync + 'static {
    const KIND: IdentityKind;

    fn from_identity(identity: &Arc<Identity>) -> Option<Self>;

    fn identity(&self) -> &Arc<Identity>;
}

macro_rules! member_handle {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(Arc<Identity>);

        impl $name {
            /// Wrap an identity, or `None` if it has a different kind.
            #[must_use]
            pub fn new(identity: Arc<Identity>) -> Option<Self> {
                (identity.kind() == IdentityKind::$kind).then_some(Self(identity))
            }
        }

        impl Member for $name {
            const KIND: IdentityKind = IdentityKind::$kind;

            fn from_identity(identity: &Arc<Identity>) -> Option<Self> {
                Self::new(Arc::clone(identity))
            }

            fn identity(&self) -> &Arc<Identity> {
                &self.0
            }
        }

        impl Categorizable for $name {
            fn id(&self) -> &str {
                self.0.key()
            }
        }

        impl Deref for $name {
            type Target = Identity;

            fn deref(&self) -> &Identity {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0.key())
            }
        }
    };
}

member_handle!(
    /// Handle to an identity of kind [`IdentityKind::Item`].
    Item,
    Item
);
member_handle!(
    /// Handle to an identity of kind [`IdentityKind::Mob`].
    Mob,
    Mob
);
