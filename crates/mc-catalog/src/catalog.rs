//! String-keyed registry of identities and categories.
//!
//! The catalog is populated in a single registration pass, in dependency
//! order: identities, then split identities (which look up their previous
//! type), then categories. [`CatalogBuilder::build`] freezes everything into
//! an immutable [`Catalog`] that can be shared across threads.
//!
//! Categories may be defined by string ids. A member id prefixed with `#`
//! refers to another category; anything else is an identity id (logical or
//! legacy key). Definitions can reference each other in any order, they are
//! built depth-first and cycles are rejected.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    CatalogError, Category, CategoryMember, Identity, IdentityKind, Item, Member, Mob,
    Representation, RepresentationTable, Result, Version,
};

/// Prefix marking a category reference in a member list.
pub const CATEGORY_PREFIX: char = '#';

/// Category defined by member ids, resolved when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDefinition {
    pub id: String,
    pub kind: IdentityKind,
    #[serde(default)]
    pub members: Vec<String>,
}

impl CategoryDefinition {
    #[must_use]
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        kind: IdentityKind,
        members: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Built categories, one map per element kind.
#[derive(Default)]
pub struct Categories {
    items: FxHashMap<String, Category<Item>>,
    mobs: FxHashMap<String, Category<Mob>>,
}

impl Categories {
    fn kind_of(&self, id: &str) -> Option<IdentityKind> {
        if self.items.contains_key(id) {
            Some(IdentityKind::Item)
        } else if self.mobs.contains_key(id) {
            Some(IdentityKind::Mob)
        } else {
            None
        }
    }
}

/// Member types the catalog stores categories for.
pub trait Catalogued: Member {
    fn store(categories: &Categories) -> &FxHashMap<String, Category<Self>>;
    fn store_mut(categories: &mut Categories) -> &mut FxHashMap<String, Category<Self>>;
}

impl Catalogued for Item {
    fn store(categories: &Categories) -> &FxHashMap<String, Category<Self>> {
        &categories.items
    }

    fn store_mut(categories: &mut Categories) -> &mut FxHashMap<String, Category<Self>> {
        &mut categories.items
    }
}

impl Catalogued for Mob {
    fn store(categories: &Categories) -> &FxHashMap<String, Category<Self>> {
        &categories.mobs
    }

    fn store_mut(categories: &mut Categories) -> &mut FxHashMap<String, Category<Self>> {
        &mut categories.mobs
    }
}

/// Lookup tables shared by the builder and the frozen catalog.
#[derive(Default)]
struct Index {
    /// Logical key -> identity.
    identities: FxHashMap<String, Arc<Identity>>,
    /// Legacy key -> first identity registered with it.
    legacy: FxHashMap<String, Arc<Identity>>,
    /// Platform key -> identities using it in any range, in registration order.
    platform_keys: FxHashMap<String, SmallVec<[Arc<Identity>; 1]>>,
    /// Registration order.
    order: Vec<Arc<Identity>>,
    categories: Categories,
}

impl Index {
    fn identity(&self, id: &str) -> Option<&Arc<Identity>> {
        self.identities.get(id).or_else(|| self.legacy.get(id))
    }

    fn resolve_identity_by_id(&self, id: &str) -> Result<Arc<Identity>> {
        self.identity(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// First registered identity using `key` on `version`, optionally of one kind only.
    fn identity_by_platform_key(
        &self,
        key: &str,
        version: Version,
        kind: Option<IdentityKind>,
    ) -> Option<&Arc<Identity>> {
        self.platform_keys.get(key)?.iter().find(|identity| {
            kind.is_none_or(|kind| identity.kind() == kind)
                && identity
                    .representations()
                    .resolve(version)
                    .is_some_and(|representation| representation.platform_key() == key)
        })
    }

    fn category_kind(&self, id: &str) -> Option<IdentityKind> {
        self.categories.kind_of(id)
    }

    /// Build a category from member ids; every referenced category must exist.
    fn category_from_ids<T, S>(&self, id: &str, members: &[S]) -> Result<Category<T>>
    where
        T: Catalogued,
        S: AsRef<str>,
    {
        let mut resolved: Vec<CategoryMember<'_, T>> = Vec::with_capacity(members.len());

        for member in members {
            let member = member.as_ref();
            if let Some(nested_id) = member.strip_prefix(CATEGORY_PREFIX) {
                let nested = T::store(&self.categories).get(nested_id).ok_or_else(|| {
                    match self.category_kind(nested_id) {
                        Some(found) => CatalogError::KindMismatch {
                            id: member.to_string(),
                            expected: T::KIND,
                            found,
                        },
                        None => CatalogError::NotFound(member.to_string()),
                    }
                })?;
                resolved.push(CategoryMember::Nested(nested));
            } else {
                let identity = self.resolve_identity_by_id(member)?;
                let direct =
                    T::from_identity(&identity).ok_or_else(|| CatalogError::KindMismatch {
                        id: member.to_string(),
                        expected: T::KIND,
                        found: identity.kind(),
                    })?;
                resolved.push(CategoryMember::Direct(direct));
            }
        }

        Category::new(id.to_string(), resolved)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    InProgress,
    Done,
}

/// Single-threaded registration pass producing a [`Catalog`].
pub struct CatalogBuilder {
    platform_version: Version,
    index: Index,
    definitions: Vec<CategoryDefinition>,
}

impl CatalogBuilder {
    /// Start an empty catalog for the running platform version.
    #[must_use]
    pub fn new(platform_version: Version) -> Self {
        Self {
            platform_version,
            index: Index::default(),
            definitions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn platform_version(&self) -> Version {
        self.platform_version
    }

    /// Publish an identity under its logical key (and legacy key, if unused).
    pub fn register(&mut self, identity: Identity) -> Result<Arc<Identity>> {
        let key = identity.key().to_string();
        if self.index.identities.contains_key(&key) {
            return Err(CatalogError::DuplicateId(key));
        }

        let identity = Arc::new(identity);

        if let Some(legacy) = identity.legacy_key() {
            self.index
                .legacy
                .entry(legacy.to_string())
                .or_insert_with(|| Arc::clone(&identity));
        }

        for representation in identity.representations().iter() {
            let entry = self
                .index
                .platform_keys
                .entry(representation.platform_key().to_string())
                .or_default();
            if !entry.iter().any(|existing| Arc::ptr_eq(existing, &identity)) {
                entry.push(Arc::clone(&identity));
            }
        }

        tracing::debug!(
            id = %key,
            kind = %identity.kind(),
            representations = identity.representations().len(),
            split = identity.is_split(),
            "registered identity"
        );

        self.index.order.push(Arc::clone(&identity));
        self.index.identities.insert(key, Arc::clone(&identity));
        Ok(identity)
    }

    /// Register an identity split out of the already registered `previous_id`.
    pub fn register_split(
        &mut self,
        key: impl Into<String>,
        previous_id: &str,
        table: RepresentationTable,
    ) -> Result<Arc<Identity>> {
        let previous = self.index.resolve_identity_by_id(previous_id)?;
        let identity = Identity::split(previous, key.into(), table)?;
        self.register(identity)
    }

    /// Look up an identity registered so far.
    pub fn resolve_identity_by_id(&self, id: &str) -> Result<Arc<Identity>> {
        self.index.resolve_identity_by_id(id)
    }

    /// Build a category now from member ids. Referenced categories must
    /// already be inserted.
    pub fn category_from_ids<T, S>(&self, id: &str, members: &[S]) -> Result<Category<T>>
    where
        T: Catalogued,
        S: AsRef<str>,
    {
        self.index.category_from_ids(id, members)
    }

    /// Publish a category built elsewhere.
    pub fn insert_category<T: Catalogued>(&mut self, category: Category<T>) -> Result<()> {
        self.ensure_unused_category_id(category.id())?;
        T::store_mut(&mut self.index.categories).insert(category.id().to_string(), category);
        Ok(())
    }

    /// Queue a category to be built from member ids by [`CatalogBuilder::build`].
    pub fn define_category(&mut self, definition: CategoryDefinition) -> Result<()> {
        self.ensure_unused_category_id(&definition.id)?;
        self.definitions.push(definition);
        Ok(())
    }

    fn ensure_unused_category_id(&self, id: &str) -> Result<()> {
        let queued = self.definitions.iter().any(|definition| definition.id == id);
        if queued || self.index.category_kind(id).is_some() {
            return Err(CatalogError::DuplicateId(format!("{CATEGORY_PREFIX}{id}")));
        }
        Ok(())
    }

    /// Resolve queued category definitions and freeze the catalog.
    pub fn build(mut self) -> Result<Catalog> {
        let definitions = std::mem::take(&mut self.definitions);
        let positions: FxHashMap<&str, usize> = definitions
            .iter()
            .enumerate()
            .map(|(position, definition)| (definition.id.as_str(), position))
            .collect();
        let mut visits = vec![Visit::Pending; definitions.len()];
        let mut path = Vec::new();

        for position in 0..definitions.len() {
            self.build_definition(position, &definitions, &positions, &mut visits, &mut path)?;
        }

        tracing::debug!(
            version = %self.platform_version,
            identities = self.index.identities.len(),
            item_categories = self.index.categories.items.len(),
            mob_categories = self.index.categories.mobs.len(),
            "catalog built"
        );

        Ok(Catalog {
            platform_version: self.platform_version,
            index: self.index,
        })
    }

    fn build_definition(
        &mut self,
        position: usize,
        definitions: &[CategoryDefinition],
        positions: &FxHashMap<&str, usize>,
        visits: &mut [Visit],
        path: &mut Vec<String>,
    ) -> Result<()> {
        let definition = &definitions[position];

        match visits[position] {
            Visit::Done => return Ok(()),
            Visit::InProgress => {
                let start = path
                    .iter()
                    .position(|id| *id == definition.id)
                    .unwrap_or_default();
                let mut cycle = path[start..].to_vec();
                cycle.push(definition.id.clone());
                return Err(CatalogError::CategoryCycle(cycle));
            }
            Visit::Pending => {}
        }

        visits[position] = Visit::InProgress;
        path.push(definition.id.clone());

        for member in &definition.members {
            let Some(nested_id) = member.strip_prefix(CATEGORY_PREFIX) else {
                continue;
            };
            if let Some(&nested) = positions.get(nested_id) {
                self.build_definition(nested, definitions, positions, visits, path)?;
            }
        }

        match definition.kind {
            IdentityKind::Item => {
                let category = self
                    .index
                    .category_from_ids::<Item, _>(&definition.id, &definition.members)?;
                self.index
                    .categories
                    .items
                    .insert(definition.id.clone(), category);
            }
            IdentityKind::Mob => {
                let category = self
                    .index
                    .category_from_ids::<Mob, _>(&definition.id, &definition.members)?;
                self.index
                    .categories
                    .mobs
                    .insert(definition.id.clone(), category);
            }
        }

        path.pop();
        visits[position] = Visit::Done;
        Ok(())
    }
}

/// Immutable registry for one running platform version.
pub struct Catalog {
    platform_version: Version,
    index: Index,
}

impl Catalog {
    #[must_use]
    pub const fn platform_version(&self) -> Version {
        self.platform_version
    }

    /// Identity by logical or legacy key.
    pub fn resolve_identity_by_id(&self, id: &str) -> Result<Arc<Identity>> {
        self.index.resolve_identity_by_id(id)
    }

    #[must_use]
    pub fn identity(&self, id: &str) -> Option<&Arc<Identity>> {
        self.index.identity(id)
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<Item> {
        self.identity(id).and_then(Item::from_identity)
    }

    #[must_use]
    pub fn mob(&self, id: &str) -> Option<Mob> {
        self.identity(id).and_then(Mob::from_identity)
    }

    /// Identities in registration order.
    pub fn identities(&self) -> impl Iterator<Item = &Arc<Identity>> {
        self.index.order.iter()
    }

    /// Representation of `id` on the catalog's platform version.
    pub fn resolve(&self, id: &str) -> Result<&Representation> {
        let identity = self
            .index
            .identity(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        identity.resolve(self.platform_version)
    }

    /// Identity whose representation on the catalog's platform version uses `key`.
    ///
    /// When several identities share a key (pre-flattening data values), the
    /// first registered wins.
    #[must_use]
    pub fn identity_by_platform_key(&self, key: &str) -> Option<&Arc<Identity>> {
        self.identity_by_platform_key_at(key, self.platform_version)
    }

    #[must_use]
    pub fn identity_by_platform_key_at(
        &self,
        key: &str,
        version: Version,
    ) -> Option<&Arc<Identity>> {
        let identity = self.index.identity_by_platform_key(key, version, None);
        if identity.is_none() {
            tracing::trace!(key, %version, "platform key does not map to an identity");
        }
        identity
    }

    /// Like [`Catalog::identity_by_platform_key`], but only identities of
    /// `kind` are considered. Items and mobs often share a key (`ARROW`).
    #[must_use]
    pub fn identity_by_platform_key_of(
        &self,
        kind: IdentityKind,
        key: &str,
    ) -> Option<&Arc<Identity>> {
        let identity = self
            .index
            .identity_by_platform_key(key, self.platform_version, Some(kind));
        if identity.is_none() {
            tracing::trace!(key, %kind, "platform key does not map to an identity of this kind");
        }
        identity
    }

    #[must_use]
    pub fn category<T: Catalogued>(&self, id: &str) -> Option<&Category<T>> {
        T::store(&self.index.categories).get(id)
    }

    #[must_use]
    pub fn item_category(&self, id: &str) -> Option<&Category<Item>> {
        self.category(id)
    }

    #[must_use]
    pub fn mob_category(&self, id: &str) -> Option<&Category<Mob>> {
        self.category(id)
    }

    /// Category by id, or [`CatalogError::NotFound`].
    pub fn require_category<T: Catalogued>(&self, id: &str) -> Result<&Category<T>> {
        self.category(id)
            .ok_or_else(|| CatalogError::NotFound(format!("{CATEGORY_PREFIX}{id}")))
    }

    /// Kind of the category with `id`, if one exists.
    #[must_use]
    pub fn category_kind(&self, id: &str) -> Option<IdentityKind> {
        self.index.category_kind(id)
    }

    /// Ids of every category of kind `T`, sorted.
    #[must_use]
    pub fn category_ids<T: Catalogued>(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = T::store(&self.index.categories)
            .keys()
            .map(String::as_str)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of the categories `identity` belongs to, sorted.
    #[must_use]
    pub fn categories_of(&self, identity: &Arc<Identity>) -> Vec<&str> {
        let mut ids: Vec<&str> = match identity.kind() {
            IdentityKind::Item => Self::containing(&self.index.categories.items, identity),
            IdentityKind::Mob => Self::containing(&self.index.categories.mobs, identity),
        };
        ids.sort_unstable();
        ids
    }

    fn containing<'c, T: Member>(
        categories: &'c FxHashMap<String, Category<T>>,
        identity: &Arc<Identity>,
    ) -> Vec<&'c str> {
        categories
            .values()
            .filter(|category| category.contains_identity(identity))
            .map(Category::id)
            .collect()
    }
}
