//! Blocks and item stacks.
//!
//! Before the flattening (1.13) many items shared one platform key and were
//! told apart by a data value, e.g. every oak/spruce/birch/jungle log was
//! `LOG` (#17). Resolving such a key back to an identity yields the first
//! identity registered with it.

use super::{IdentityDef, keys, since, span};
use crate::Version;

const V1_8: Version = Version::V1_8;
const V1_13: Version = Version::V1_13;
const V1_14: Version = Version::V1_14;
const V1_16: Version = Version::V1_16;

keys! {
    OAK_LOG => "oak_log",
    OAK_WOOD => "oak_wood",
    STRIPPED_OAK_LOG => "stripped_oak_log",
    STRIPPED_OAK_WOOD => "stripped_oak_wood",
    SPRUCE_LOG => "spruce_log",
    SPRUCE_WOOD => "spruce_wood",
    STRIPPED_SPRUCE_LOG => "stripped_spruce_log",
    STRIPPED_SPRUCE_WOOD => "stripped_spruce_wood",
    BIRCH_LOG => "birch_log",
    BIRCH_WOOD => "birch_wood",
    STRIPPED_BIRCH_LOG => "stripped_birch_log",
    STRIPPED_BIRCH_WOOD => "stripped_birch_wood",
    JUNGLE_LOG => "jungle_log",
    JUNGLE_WOOD => "jungle_wood",
    STRIPPED_JUNGLE_LOG => "stripped_jungle_log",
    STRIPPED_JUNGLE_WOOD => "stripped_jungle_wood",
    ACACIA_LOG => "acacia_log",
    ACACIA_WOOD => "acacia_wood",
    STRIPPED_ACACIA_LOG => "stripped_acacia_log",
    STRIPPED_ACACIA_WOOD => "stripped_acacia_wood",
    DARK_OAK_LOG => "dark_oak_log",
    DARK_OAK_WOOD => "dark_oak_wood",
    STRIPPED_DARK_OAK_LOG => "stripped_dark_oak_log",
    STRIPPED_DARK_OAK_WOOD => "stripped_dark_oak_wood",
    CRIMSON_STEM => "crimson_stem",
    CRIMSON_HYPHAE => "crimson_hyphae",
    STRIPPED_CRIMSON_STEM => "stripped_crimson_stem",
    STRIPPED_CRIMSON_HYPHAE => "stripped_crimson_hyphae",
    WARPED_STEM => "warped_stem",
    WARPED_HYPHAE => "warped_hyphae",
    STRIPPED_WARPED_STEM => "stripped_warped_stem",
    STRIPPED_WARPED_HYPHAE => "stripped_warped_hyphae",
    SOUL_SAND => "soul_sand",
    SOUL_SOIL => "soul_soil",
    SAND => "sand",
    RED_SAND => "red_sand",
    GRAVEL => "gravel",
    DIRT => "dirt",
    COARSE_DIRT => "coarse_dirt",
    PODZOL => "podzol",
    GRASS_BLOCK => "grass_block",
    MYCELIUM => "mycelium",
    BAMBOO => "bamboo",
    BAMBOO_SAPLING => "bamboo_sapling",
}

pub const ITEMS: &[IdentityDef] = &[
    IdentityDef::item(OAK_LOG, &[span(V1_8, V1_13, "LOG", Some(17)), since(V1_13, "OAK_LOG", None)]),
    IdentityDef::item(OAK_WOOD, &[since(V1_13, "OAK_WOOD", None)]),
    IdentityDef::item(STRIPPED_OAK_LOG, &[since(V1_13, "STRIPPED_OAK_LOG", None)]),
    IdentityDef::item(STRIPPED_OAK_WOOD, &[since(V1_13, "STRIPPED_OAK_WOOD", None)]),
    IdentityDef::item(SPRUCE_LOG, &[span(V1_8, V1_13, "LOG", Some(17)), since(V1_13, "SPRUCE_LOG", None)]),
    IdentityDef::item(SPRUCE_WOOD, &[since(V1_13, "SPRUCE_WOOD", None)]),
    IdentityDef::item(STRIPPED_SPRUCE_LOG, &[since(V1_13, "STRIPPED_SPRUCE_LOG", None)]),
    IdentityDef::item(STRIPPED_SPRUCE_WOOD, &[since(V1_13, "STRIPPED_SPRUCE_WOOD", None)]),
    IdentityDef::item(BIRCH_LOG, &[span(V1_8, V1_13, "LOG", Some(17)), since(V1_13, "BIRCH_LOG", None)]),
    IdentityDef::item(BIRCH_WOOD, &[since(V1_13, "BIRCH_WOOD", None)]),
    IdentityDef::item(STRIPPED_BIRCH_LOG, &[since(V1_13, "STRIPPED_BIRCH_LOG", None)]),
    IdentityDef::item(STRIPPED_BIRCH_WOOD, &[since(V1_13, "STRIPPED_BIRCH_WOOD", None)]),
    IdentityDef::item(JUNGLE_LOG, &[span(V1_8, V1_13, "LOG", Some(17)), since(V1_13, "JUNGLE_LOG", None)]),
    IdentityDef::item(JUNGLE_WOOD, &[since(V1_13, "JUNGLE_WOOD", None)]),
    IdentityDef::item(STRIPPED_JUNGLE_LOG, &[since(V1_13, "STRIPPED_JUNGLE_LOG", None)]),
    IdentityDef::item(STRIPPED_JUNGLE_WOOD, &[since(V1_13, "STRIPPED_JUNGLE_WOOD", None)]),
    IdentityDef::item(ACACIA_LOG, &[span(V1_8, V1_13, "LOG_2", Some(162)), since(V1_13, "ACACIA_LOG", None)]),
    IdentityDef::item(ACACIA_WOOD, &[since(V1_13, "ACACIA_WOOD", None)]),
    IdentityDef::item(STRIPPED_ACACIA_LOG, &[since(V1_13, "STRIPPED_ACACIA_LOG", None)]),
    IdentityDef::item(STRIPPED_ACACIA_WOOD, &[since(V1_13, "STRIPPED_ACACIA_WOOD", None)]),
    IdentityDef::item(DARK_OAK_LOG, &[span(V1_8, V1_13, "LOG_2", Some(162)), since(V1_13, "DARK_OAK_LOG", None)]),
    IdentityDef::item(DARK_OAK_WOOD, &[since(V1_13, "DARK_OAK_WOOD", None)]),
    IdentityDef::item(STRIPPED_DARK_OAK_LOG, &[since(V1_13, "STRIPPED_DARK_OAK_LOG", None)]),
    IdentityDef::item(STRIPPED_DARK_OAK_WOOD, &[since(V1_13, "STRIPPED_DARK_OAK_WOOD", None)]),
    // nether stems
    IdentityDef::item(CRIMSON_STEM, &[since(V1_16, "CRIMSON_STEM", None)]),
    IdentityDef::item(CRIMSON_HYPHAE, &[since(V1_16, "CRIMSON_HYPHAE", None)]),
    IdentityDef::item(STRIPPED_CRIMSON_STEM, &[since(V1_16, "STRIPPED_CRIMSON_STEM", None)]),
    IdentityDef::item(STRIPPED_CRIMSON_HYPHAE, &[since(V1_16, "STRIPPED_CRIMSON_HYPHAE", None)]),
    IdentityDef::item(WARPED_STEM, &[since(V1_16, "WARPED_STEM", None)]),
    IdentityDef::item(WARPED_HYPHAE, &[since(V1_16, "WARPED_HYPHAE", None)]),
    IdentityDef::item(STRIPPED_WARPED_STEM, &[since(V1_16, "STRIPPED_WARPED_STEM", None)]),
    IdentityDef::item(STRIPPED_WARPED_HYPHAE, &[since(V1_16, "STRIPPED_WARPED_HYPHAE", None)]),
    // ground
    IdentityDef::item(SOUL_SAND, &[since(V1_8, "SOUL_SAND", Some(88))]),
    IdentityDef::item(SOUL_SOIL, &[since(V1_16, "SOUL_SOIL", None)]),
    IdentityDef::item(SAND, &[span(V1_8, V1_13, "SAND", Some(12)), since(V1_13, "SAND", None)]),
    IdentityDef::item(RED_SAND, &[span(V1_8, V1_13, "SAND", Some(12)), since(V1_13, "RED_SAND", None)]),
    IdentityDef::item(GRAVEL, &[since(V1_8, "GRAVEL", Some(13))]),
    IdentityDef::item(DIRT, &[span(V1_8, V1_13, "DIRT", Some(3)), since(V1_13, "DIRT", None)]),
    IdentityDef::item(COARSE_DIRT, &[span(V1_8, V1_13, "DIRT", Some(3)), since(V1_13, "COARSE_DIRT", None)]),
    IdentityDef::item(PODZOL, &[span(V1_8, V1_13, "DIRT", Some(3)), since(V1_13, "PODZOL", None)]),
    IdentityDef::item(GRASS_BLOCK, &[span(V1_8, V1_13, "GRASS", Some(2)), since(V1_13, "GRASS_BLOCK", None)]),
    IdentityDef::item(MYCELIUM, &[span(V1_8, V1_13, "MYCEL", Some(110)), since(V1_13, "MYCELIUM", None)]),
    IdentityDef::item(BAMBOO, &[since(V1_14, "BAMBOO", None)]),
    IdentityDef::item(BAMBOO_SAPLING, &[since(V1_14, "BAMBOO_SAPLING", None)]),
];
