#![allow(clippy::missing_fields_in_debug)]

//! Version-independent Minecraft identities and categories.
//!
//! Platform keys for the same block or mob change between releases (`LOG`
//! with a data value became `OAK_LOG` in 1.13, a wither skeleton was a
//! `SKELETON` with a type flag until 1.11). This crate names every item and
//! mob by a stable logical key and resolves it to whatever the running
//! platform version calls it.
//!
//! # Key Concepts
//!
//! - **Identity**: a logical item or mob with a [`RepresentationTable`] of
//!   disjoint version ranges
//! - **Split identity**: an identity carved out of an older shared type; it
//!   answers for that type on platforms predating the split
//! - **Category**: a named, flattened set of identities, possibly built from
//!   other categories
//! - **Catalog**: the immutable registry, populated once in dependency order
//!
//! # Usage
//!
//! ```ignore
//! use mc_catalog::{Version, vanilla};
//!
//! let catalog = vanilla::catalog(Version::V1_12)?;
//!
//! let log = catalog.resolve(vanilla::items::OAK_LOG)?;
//! assert_eq!(log.platform_key(), "LOG");
//!
//! let logs = catalog.item_category(vanilla::categories::LOGS).unwrap();
//! assert!(logs.contains_by_material_key(Some("LOG"), &catalog));
//! ```

mod catalog;
mod category;
mod config;
mod display;
mod error;
mod identity;
mod platform;
mod representation;
mod split;
mod version;

pub mod vanilla;

pub use catalog::{CATEGORY_PREFIX, Catalog, CatalogBuilder, Catalogued, Categories, CategoryDefinition};
pub use category::{Category, CategoryMember};
pub use config::{CatalogConfig, IdentityConfig, RepresentationConfig, SplitConfig};
pub use display::format_id;
pub use error::{CatalogError, Result};
pub use identity::{Categorizable, Identity, IdentityKind, Item, Member, Mob, Species};
pub use platform::{
    HorseVariant, Location, PlatformHost, PlatformKeyed, PlatformObject, SkeletonType,
    VillagerProfession,
};
pub use representation::{RangeDefect, Representation, RepresentationTable, TableBuilder, VersionRange};
pub use split::{Split, Variant};
pub use version::Version;
