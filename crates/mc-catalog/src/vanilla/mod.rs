//! Built-in vanilla catalog.
//!
//! The data lives in const tables ([`items::ITEMS`], [`mobs::MOBS`],
//! [`mobs::SPLITS`], [`categories::CATEGORIES`]) and is published in
//! dependency order by [`register`]:
//!
//! ```text
//!   ITEMS, MOBS ──▶ SPLITS ──▶ CATEGORIES ──▶ Catalog
//!                 (previous)   (#nested ids)
//! ```
//!
//! Every id is also exported as a named constant, e.g.
//! `catalog.item_category(categories::LOGS)`.

pub mod categories;
pub mod items;
pub mod mobs;

use crate::{
    Catalog, CatalogBuilder, CategoryDefinition, Identity, IdentityKind, RepresentationTable,
    Result, Version,
};

/// Declare `pub const NAME: &str = "id";` handles.
macro_rules! keys {
    ($($name:ident => $key:literal),* $(,)?) => {
        $(pub const $name: &str = $key;)*
    };
}
pub(crate) use keys;

/// One row of a representation table.
#[derive(Debug, Clone, Copy)]
pub struct RepresentationDef {
    pub since: Version,
    pub until: Option<Version>,
    pub platform_key: &'static str,
    pub numeric_id: Option<i32>,
}

/// Representation from `since` onwards.
pub(crate) const fn since(
    since: Version,
    platform_key: &'static str,
    numeric_id: Option<i32>,
) -> RepresentationDef {
    RepresentationDef {
        since,
        until: None,
        platform_key,
        numeric_id,
    }
}

/// Representation in `[since, until)`.
pub(crate) const fn span(
    since: Version,
    until: Version,
    platform_key: &'static str,
    numeric_id: Option<i32>,
) -> RepresentationDef {
    RepresentationDef {
        since,
        until: Some(until),
        platform_key,
        numeric_id,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IdentityDef {
    pub key: &'static str,
    pub kind: IdentityKind,
    pub legacy_key: Option<&'static str>,
    pub representations: &'static [RepresentationDef],
}

impl IdentityDef {
    pub(crate) const fn item(key: &'static str, representations: &'static [RepresentationDef]) -> Self {
        Self {
            key,
            kind: IdentityKind::Item,
            legacy_key: None,
            representations,
        }
    }

    pub(crate) const fn mob(key: &'static str, representations: &'static [RepresentationDef]) -> Self {
        Self {
            key,
            kind: IdentityKind::Mob,
            legacy_key: None,
            representations,
        }
    }

    pub(crate) const fn legacy(mut self, legacy_key: &'static str) -> Self {
        self.legacy_key = Some(legacy_key);
        self
    }
}

/// Identity carved out of `previous`.
#[derive(Debug, Clone, Copy)]
pub struct SplitDef {
    pub key: &'static str,
    pub previous: &'static str,
    pub representations: &'static [RepresentationDef],
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub id: &'static str,
    pub kind: IdentityKind,
    /// Identity ids, or `#id` for nested categories.
    pub members: &'static [&'static str],
}

fn table(id: &str, representations: &[RepresentationDef]) -> Result<RepresentationTable> {
    RepresentationTable::from_rows(
        id,
        representations
            .iter()
            .map(|def| (def.since, def.until, def.platform_key, def.numeric_id)),
    )
}

/// Publish the vanilla identities, splits and category definitions.
pub fn register(builder: &mut CatalogBuilder) -> Result<()> {
    for def in items::ITEMS.iter().chain(mobs::MOBS) {
        let mut identity = Identity::new(def.kind, def.key, table(def.key, def.representations)?);
        if let Some(legacy_key) = def.legacy_key {
            identity = identity.with_legacy_key(legacy_key);
        }
        builder.register(identity)?;
    }

    for def in mobs::SPLITS {
        builder.register_split(def.key, def.previous, table(def.key, def.representations)?)?;
    }

    for def in categories::CATEGORIES {
        builder.define_category(CategoryDefinition::new(
            def.id,
            def.kind,
            def.members.iter().copied(),
        ))?;
    }

    tracing::debug!(
        identities = items::ITEMS.len() + mobs::MOBS.len() + mobs::SPLITS.len(),
        categories = categories::CATEGORIES.len(),
        "registered vanilla catalog"
    );

    Ok(())
}

/// The vanilla catalog for `platform_version`.
pub fn catalog(platform_version: Version) -> Result<Catalog> {
    let mut builder = CatalogBuilder::new(platform_version);
    register(&mut builder)?;
    builder.build()
}
