//! Named, flattened groups of identities.
//!
//! A [`Category`] is built once from a list of [`CategoryMember`]s. Nested
//! categories are folded in at construction time, so the stored member set
//! is always flat and every membership test is a single hash lookup:
//!
//! ```text
//!   LOGS = [LOGS_THAT_BURN, CRIMSON_STEMS, WARPED_STEMS]
//!            │
//!            └─ OAK_LOGS ∪ SPRUCE_LOGS ∪ … ∪ DARK_OAK_LOGS
//!
//!   stored: { oak_log, oak_wood, …, warped_hyphae }   (32 members, no edges)
//! ```
//!
//! Only the ids of folded categories survive construction, to reject a
//! category that would end up containing itself.

use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use rustc_hash::FxHashSet;

use crate::{Catalog, Categorizable, CatalogError, Identity, Member, PlatformKeyed, Result};

/// Constructor argument of a category.
pub enum CategoryMember<'a, T> {
    /// Inserted as is.
    Direct(T),
    /// All current members are unioned in.
    Nested(&'a Category<T>),
}

/// A named, de-duplicated set of members.
pub struct Category<T> {
    id: Cow<'static, str>,
    members: FxHashSet<T>,
    /// Ids of every category folded in, transitively.
    lineage: FxHashSet<Cow<'static, str>>,
}

impl<T: Member> Category<T> {
    /// A category without members.
    #[must_use]
    pub fn empty(id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            members: FxHashSet::default(),
            lineage: FxHashSet::default(),
        }
    }

    /// Build a category, flattening nested categories in argument order.
    ///
    /// Fails with [`CatalogError::SelfInclusion`] if a nested category is, or
    /// was built from, a category with the same id.
    pub fn new<'a>(
        id: impl Into<Cow<'static, str>>,
        members: impl IntoIterator<Item = CategoryMember<'a, T>>,
    ) -> Result<Self> {
        let mut category = Self::empty(id);

        for member in members {
            match member {
                CategoryMember::Direct(member) => {
                    category.members.insert(member);
                }
                CategoryMember::Nested(nested) => {
                    if nested.id == category.id || nested.lineage.contains(category.id.as_ref()) {
                        return Err(CatalogError::SelfInclusion(category.id.into_owned()));
                    }
                    category.lineage.insert(nested.id.clone());
                    category.lineage.extend(nested.lineage.iter().cloned());
                    category.members.extend(nested.members.iter().cloned());
                }
            }
        }

        tracing::debug!(
            id = %category.id,
            members = category.members.len(),
            nested = category.lineage.len(),
            "built category"
        );

        Ok(category)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The flattened member set.
    #[must_use]
    pub fn elements(&self) -> &FxHashSet<T> {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the category with `id` was folded into this one.
    #[must_use]
    pub fn includes_category(&self, id: &str) -> bool {
        self.lineage.contains(id)
    }

    /// Exact membership test; `None` is never a member.
    pub fn contains<'m>(&self, member: impl Into<Option<&'m T>>) -> bool
    where
        T: 'm,
    {
        member
            .into()
            .is_some_and(|member| self.members.contains(member))
    }

    /// Membership of an identity of any kind. Identities of another kind are
    /// not members.
    #[must_use]
    pub fn contains_identity(&self, identity: &Arc<Identity>) -> bool {
        T::from_identity(identity).is_some_and(|member| self.members.contains(&member))
    }

    /// Resolve `key` to an identity first, then test membership.
    ///
    /// Absent keys and keys the resolver cannot map are not members.
    pub fn contains_by<K>(
        &self,
        key: Option<K>,
        resolve: impl FnOnce(K) -> Option<Arc<Identity>>,
    ) -> bool {
        match key.and_then(resolve) {
            Some(identity) => self.contains_identity(&identity),
            None => false,
        }
    }

    /// Membership of the identity of this category's kind that `catalog` maps
    /// the platform key to on its platform version.
    ///
    /// Approximate for pre-1.13 data-value keys: a key like `LOG` stands for
    /// several identities but only resolves to the first one registered.
    pub fn contains_by_material_key(&self, key: Option<&str>, catalog: &Catalog) -> bool {
        self.contains_by(key, |key| {
            catalog.identity_by_platform_key_of(T::KIND, key).cloned()
        })
    }

    /// Membership of a live block, item stack or entity.
    pub fn contains_by_platform_object<O>(&self, object: Option<&O>, catalog: &Catalog) -> bool
    where
        O: PlatformKeyed + ?Sized,
    {
        self.contains_by_material_key(object.and_then(PlatformKeyed::platform_key), catalog)
    }
}

impl<T> Categorizable for Category<T> {
    fn id(&self) -> &str {
        &self.id
    }
}

impl<T> PartialEq for Category<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Category<T> {}

impl<T> Hash for Category<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Category<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Category")
            .field("id", &self.id)
            .field("members", &self.members.len())
            .finish()
    }
}
