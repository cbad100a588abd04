//! Identities carved out of an older, shared type.
//!
//! Until 1.11 several mobs were sub-flags of one entity type (an elder
//! guardian was a guardian with `elder = true`). A split identity keeps a
//! link to that previous type so it can answer for it on old platforms:
//! species and resolution below the split fall through to `previous`, and
//! [`Identity::materialize`] sets the sub-flag on the created object.

use std::{borrow::Cow, sync::Arc};

use crate::{
    CatalogError, HorseVariant, Identity, Location, PlatformHost, PlatformObject, RangeDefect,
    RepresentationTable, Result, SkeletonType, Version, VillagerProfession,
};

/// Link from a split identity to the type it was carved out of.
#[derive(Clone)]
pub struct Split {
    previous: Arc<Identity>,
    first_version: Version,
    variant: Option<Variant>,
}

impl Split {
    /// The identity this one used to be a sub-type of.
    #[must_use]
    pub fn previous(&self) -> &Arc<Identity> {
        &self.previous
    }

    /// First version with a dedicated platform type.
    #[must_use]
    pub const fn first_version(&self) -> Version {
        self.first_version
    }

    #[must_use]
    pub const fn variant(&self) -> Option<Variant> {
        self.variant
    }
}

/// Sub-flag that distinguishes a split mob on platforms predating its split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    ElderGuardian,
    WitherSkeleton,
    Stray,
    Husk,
    ZombieVillager,
    SkeletonHorse,
    ZombieHorse,
    Donkey,
    Mule,
}

impl Variant {
    /// Adjustment registered for a logical key.
    #[must_use]
    pub fn for_key(key: &str) -> Option<Self> {
        let variant = match key {
            "elder_guardian" => Self::ElderGuardian,
            "wither_skeleton" => Self::WitherSkeleton,
            "stray" => Self::Stray,
            "husk" => Self::Husk,
            "zombie_villager" => Self::ZombieVillager,
            "skeleton_horse" => Self::SkeletonHorse,
            "zombie_horse" => Self::ZombieHorse,
            "donkey" => Self::Donkey,
            "mule" => Self::Mule,
            _ => return None,
        };
        Some(variant)
    }

    pub fn apply<O: PlatformObject + ?Sized>(self, object: &mut O) {
        match self {
            Self::ElderGuardian => object.set_elder(true),
            Self::WitherSkeleton => object.set_skeleton_type(SkeletonType::Wither),
            Self::Stray => object.set_skeleton_type(SkeletonType::Stray),
            Self::Husk => object.set_villager_profession(VillagerProfession::Husk),
            Self::ZombieVillager => object.set_villager(true),
            Self::SkeletonHorse => object.set_horse_variant(HorseVariant::SkeletonHorse),
            Self::ZombieHorse => object.set_horse_variant(HorseVariant::UndeadHorse),
            Self::Donkey => object.set_horse_variant(HorseVariant::Donkey),
            Self::Mule => object.set_horse_variant(HorseVariant::Mule),
        }
    }
}

impl Identity {
    /// Create an identity split out of `previous`.
    ///
    /// The split becomes independently valid at the first version of `table`,
    /// which must not predate `previous`. The split inherits the kind and
    /// legacy key of `previous`.
    pub fn split(
        previous: Arc<Identity>,
        key: impl Into<Cow<'static, str>>,
        table: RepresentationTable,
    ) -> Result<Self> {
        let key = key.into();

        let Some(first_version) = table.earliest() else {
            return Err(CatalogError::InvalidRange {
                id: key.into_owned(),
                reason: RangeDefect::Missing,
            });
        };

        if let Some(previous_first) = previous.first_version() {
            if first_version < previous_first {
                return Err(CatalogError::SplitBeforePrevious {
                    id: key.into_owned(),
                    first_version,
                    previous_first,
                });
            }
        }

        let legacy_key = previous
            .legacy_key()
            .unwrap_or_else(|| previous.key())
            .to_string();
        let variant = Variant::for_key(&key);

        let mut identity = Identity::new(previous.kind(), key, table).with_legacy_key(legacy_key);
        identity.split = Some(Split {
            previous,
            first_version,
            variant,
        });
        Ok(identity)
    }

    #[must_use]
    pub fn split_link(&self) -> Option<&Split> {
        self.split.as_ref()
    }

    /// The type this identity was carved out of, if it is a split identity.
    #[must_use]
    pub fn previous(&self) -> Option<&Arc<Identity>> {
        self.split.as_ref().map(Split::previous)
    }

    #[must_use]
    pub fn is_split(&self) -> bool {
        self.split.is_some()
    }

    /// Create the live platform object for this identity at `location`.
    ///
    /// On versions before a split the object is created from the previous
    /// type's key and then flagged as the right sub-variant. Host failures are
    /// returned unchanged; no adjustment happens if creation fails.
    pub fn materialize<H>(
        &self,
        host: &mut H,
        location: Location,
        version: Version,
    ) -> std::result::Result<H::Object, H::Error>
    where
        H: PlatformHost,
        H::Error: From<CatalogError>,
    {
        let representation = self.resolve(version)?;
        let mut object = host.create_platform_object(representation.platform_key(), location)?;

        if let Some(split) = &self.split {
            if version < split.first_version {
                if let Some(variant) = split.variant {
                    tracing::debug!(id = %self.key(), ?variant, %version, "applying legacy variant");
                    variant.apply(&mut object);
                }
            }
        }

        Ok(object)
    }
}
