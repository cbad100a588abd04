//! JSON catalog overlays.
//!
//! An overlay adds identities, split identities and categories on top of a
//! builder, typically after the built-in vanilla data:
//!
//! ```json
//! {
//!   "identities": [
//!     { "key": "ruby_ore", "kind": "item",
//!       "representations": [{ "since": "1.13", "platform_key": "RUBY_ORE" }] }
//!   ],
//!   "splits": [
//!     { "key": "glow_squid", "previous": "squid",
//!       "representations": [{ "since": "1.17", "platform_key": "GLOW_SQUID" }] }
//!   ],
//!   "categories": [
//!     { "id": "gem_ores", "kind": "item", "members": ["ruby_ore", "#diamond_ores"] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{
    CatalogBuilder, CategoryDefinition, Identity, IdentityKind, RepresentationTable, Result,
    Species, Version,
};

/// Root of a catalog overlay file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub identities: Vec<IdentityConfig>,
    pub splits: Vec<SplitConfig>,
    pub categories: Vec<CategoryDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    pub key: String,
    pub kind: IdentityKind,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub legacy_key: Option<String>,
    pub representations: Vec<RepresentationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitConfig {
    pub key: String,
    /// Id of the identity the split was carved out of.
    pub previous: String,
    pub representations: Vec<RepresentationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepresentationConfig {
    pub since: Version,
    /// Exclusive; omitted for the current representation.
    #[serde(default)]
    pub until: Option<Version>,
    pub platform_key: String,
    #[serde(default)]
    pub numeric_id: Option<i32>,
}

fn table(id: &str, representations: &[RepresentationConfig]) -> Result<RepresentationTable> {
    RepresentationTable::from_rows(
        id,
        representations.iter().map(|row| {
            (row.since, row.until, row.platform_key.clone(), row.numeric_id)
        }),
    )
}

impl IdentityConfig {
    fn to_identity(&self) -> Result<Identity> {
        let table = table(&self.key, &self.representations)?;
        let mut identity = Identity::new(self.kind, self.key.clone(), table);
        if let Some(species) = &self.species {
            identity = identity.with_species(Species::new(species.clone()));
        }
        if let Some(legacy_key) = &self.legacy_key {
            identity = identity.with_legacy_key(legacy_key.clone());
        }
        Ok(identity)
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            identities = config.identities.len(),
            splits = config.splits.len(),
            categories = config.categories.len(),
            "loaded catalog overlay"
        );
        Ok(config)
    }

    /// Register everything in the overlay: identities, then splits, then
    /// category definitions (resolved when the builder is built).
    pub fn apply(&self, builder: &mut CatalogBuilder) -> Result<()> {
        for identity in &self.identities {
            builder.register(identity.to_identity()?)?;
        }

        for split in &self.splits {
            let table = table(&split.key, &split.representations)?;
            builder.register_split(split.key.clone(), &split.previous, table)?;
        }

        for category in &self.categories {
            builder.define_category(category.clone())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::CatalogError;

    const OVERLAY: &str = r##"{
        "identities": [
            {
                "key": "squid",
                "kind": "mob",
                "legacy_key": "Squid",
                "representations": [{ "since": "1.8", "platform_key": "SQUID", "numeric_id": 94 }]
            },
            {
                "key": "ruby_ore",
                "kind": "item",
                "species": "ORE",
                "representations": [
                    { "since": "1.8", "until": "1.13", "platform_key": "STONE", "numeric_id": 1 },
                    { "since": "1.13", "platform_key": "RUBY_ORE" }
                ]
            }
        ],
        "splits": [
            {
                "key": "glow_squid",
                "previous": "squid",
                "representations": [{ "since": "1.17", "platform_key": "GLOW_SQUID" }]
            }
        ],
        "categories": [
            { "id": "ores", "kind": "item", "members": ["ruby_ore"] },
            { "id": "squids", "kind": "mob", "members": ["Squid", "glow_squid"] }
        ]
    }"##;

    #[test]
    fn test_parse_overlay() {
        let config = CatalogConfig::from_json_str(OVERLAY).unwrap();
        assert_eq!(config.identities.len(), 2);
        assert_eq!(config.splits[0].previous, "squid");
        assert_eq!(config.identities[1].representations[0].until, Some(Version::V1_13));
        assert_eq!(config.categories[1].kind, IdentityKind::Mob);
    }

    #[test]
    fn test_empty_overlay() {
        let config = CatalogConfig::from_json_str("{}").unwrap();
        assert!(config.identities.is_empty());
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CatalogConfig::from_json_str(r#"{ "mobs": [] }"#);
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_bad_version_rejected() {
        let json = r#"{ "identities": [{ "key": "a", "kind": "item",
            "representations": [{ "since": "one", "platform_key": "A" }] }] }"#;
        assert!(matches!(
            CatalogConfig::from_json_str(json),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_apply_overlay() {
        let config = CatalogConfig::from_json_str(OVERLAY).unwrap();
        let mut builder = CatalogBuilder::new(Version::V1_12);
        config.apply(&mut builder).unwrap();
        let catalog = builder.build().unwrap();

        let ruby = catalog.resolve_identity_by_id("ruby_ore").unwrap();
        assert_eq!(ruby.species().as_str(), "ORE");
        assert_eq!(catalog.resolve("ruby_ore").unwrap().platform_key(), "STONE");

        let glow = catalog.resolve_identity_by_id("glow_squid").unwrap();
        assert_eq!(glow.resolve(Version::V1_12).unwrap().platform_key(), "SQUID");
        assert_eq!(glow.resolve(Version::V1_17).unwrap().platform_key(), "GLOW_SQUID");

        let squids = catalog.mob_category("squids").unwrap();
        assert_eq!(squids.len(), 2);
    }

    #[test]
    fn test_overlapping_ranges_rejected() {
        let json = r#"{ "identities": [{ "key": "a", "kind": "item", "representations": [
            { "since": "1.8", "until": "1.14", "platform_key": "A" },
            { "since": "1.13", "platform_key": "B" }
        ] }] }"#;
        let config = CatalogConfig::from_json_str(json).unwrap();
        let mut builder = CatalogBuilder::new(Version::V1_16);
        assert!(matches!(
            config.apply(&mut builder),
            Err(CatalogError::InvalidRange { ref id, .. }) if id == "a"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(OVERLAY.as_bytes()).unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.splits.len(), 1);

        let missing = CatalogConfig::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(CatalogError::Io(_))));
    }
}
