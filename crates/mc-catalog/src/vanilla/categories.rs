//! Category definitions.
//!
//! Members are identity ids or `#id` references to other categories. The
//! soul-block categories share one member list but stay distinct: each is
//! looked up by a different game mechanic.

use super::{CategoryDef, items, keys, mobs};
use crate::IdentityKind::{Item, Mob};

keys! {
    OAK_LOGS => "oak_logs",
    SPRUCE_LOGS => "spruce_logs",
    BIRCH_LOGS => "birch_logs",
    JUNGLE_LOGS => "jungle_logs",
    ACACIA_LOGS => "acacia_logs",
    DARK_OAK_LOGS => "dark_oak_logs",
    CRIMSON_STEMS => "crimson_stems",
    WARPED_STEMS => "warped_stems",
    LOGS_THAT_BURN => "logs_that_burn",
    LOGS => "logs",
    SOUL_FIRE_BASE_BLOCKS => "soul_fire_base_blocks",
    SOUL_SPEED_BLOCKS => "soul_speed_blocks",
    WITHER_SUMMON_BASE_BLOCKS => "wither_summon_base_blocks",
    SAND => "sand",
    DIRT_LIKE => "dirt_like",
    BAMBOO_PLANTABLE_ON => "bamboo_plantable_on",
    SKELETONS => "skeletons",
    ZOMBIES => "zombies",
    HORSES => "horses",
    RAIDERS => "raiders",
    ARROWS => "arrows",
    IMPACT_PROJECTILES => "impact_projectiles",
}

const SOUL_BLOCKS: &[&str] = &[items::SOUL_SAND, items::SOUL_SOIL];

pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: OAK_LOGS,
        kind: Item,
        members: &[items::OAK_LOG, items::OAK_WOOD, items::STRIPPED_OAK_LOG, items::STRIPPED_OAK_WOOD],
    },
    CategoryDef {
        id: SPRUCE_LOGS,
        kind: Item,
        members: &[items::SPRUCE_LOG, items::SPRUCE_WOOD, items::STRIPPED_SPRUCE_LOG, items::STRIPPED_SPRUCE_WOOD],
    },
    CategoryDef {
        id: BIRCH_LOGS,
        kind: Item,
        members: &[items::BIRCH_LOG, items::BIRCH_WOOD, items::STRIPPED_BIRCH_LOG, items::STRIPPED_BIRCH_WOOD],
    },
    CategoryDef {
        id: JUNGLE_LOGS,
        kind: Item,
        members: &[items::JUNGLE_LOG, items::JUNGLE_WOOD, items::STRIPPED_JUNGLE_LOG, items::STRIPPED_JUNGLE_WOOD],
    },
    CategoryDef {
        id: ACACIA_LOGS,
        kind: Item,
        members: &[items::ACACIA_LOG, items::ACACIA_WOOD, items::STRIPPED_ACACIA_LOG, items::STRIPPED_ACACIA_WOOD],
    },
    CategoryDef {
        id: DARK_OAK_LOGS,
        kind: Item,
        members: &[
            items::DARK_OAK_LOG,
            items::DARK_OAK_WOOD,
            items::STRIPPED_DARK_OAK_LOG,
            items::STRIPPED_DARK_OAK_WOOD,
        ],
    },
    CategoryDef {
        id: CRIMSON_STEMS,
        kind: Item,
        members: &[
            items::CRIMSON_STEM,
            items::STRIPPED_CRIMSON_STEM,
            items::CRIMSON_HYPHAE,
            items::STRIPPED_CRIMSON_HYPHAE,
        ],
    },
    CategoryDef {
        id: WARPED_STEMS,
        kind: Item,
        members: &[
            items::WARPED_STEM,
            items::STRIPPED_WARPED_STEM,
            items::WARPED_HYPHAE,
            items::STRIPPED_WARPED_HYPHAE,
        ],
    },
    CategoryDef {
        id: LOGS_THAT_BURN,
        kind: Item,
        members: &["#oak_logs", "#spruce_logs", "#birch_logs", "#jungle_logs", "#acacia_logs", "#dark_oak_logs"],
    },
    CategoryDef {
        id: LOGS,
        kind: Item,
        members: &["#logs_that_burn", "#crimson_stems", "#warped_stems"],
    },
    CategoryDef {
        id: SOUL_FIRE_BASE_BLOCKS,
        kind: Item,
        members: SOUL_BLOCKS,
    },
    CategoryDef {
        id: SOUL_SPEED_BLOCKS,
        kind: Item,
        members: SOUL_BLOCKS,
    },
    CategoryDef {
        id: WITHER_SUMMON_BASE_BLOCKS,
        kind: Item,
        members: SOUL_BLOCKS,
    },
    CategoryDef {
        id: SAND,
        kind: Item,
        members: &[items::SAND, items::RED_SAND],
    },
    CategoryDef {
        id: DIRT_LIKE,
        kind: Item,
        members: &[items::DIRT, items::COARSE_DIRT, items::PODZOL, items::GRASS_BLOCK, items::MYCELIUM],
    },
    CategoryDef {
        id: BAMBOO_PLANTABLE_ON,
        kind: Item,
        members: &["#sand", "#dirt_like", items::GRAVEL, items::BAMBOO, items::BAMBOO_SAPLING],
    },
    CategoryDef {
        id: SKELETONS,
        kind: Mob,
        members: &[mobs::SKELETON, mobs::WITHER_SKELETON, mobs::STRAY],
    },
    CategoryDef {
        id: ZOMBIES,
        kind: Mob,
        members: &[mobs::ZOMBIE, mobs::HUSK, mobs::ZOMBIE_VILLAGER],
    },
    CategoryDef {
        id: HORSES,
        kind: Mob,
        members: &[mobs::HORSE, mobs::SKELETON_HORSE, mobs::ZOMBIE_HORSE, mobs::DONKEY, mobs::MULE],
    },
    CategoryDef {
        id: RAIDERS,
        kind: Mob,
        members: &[mobs::EVOKER, mobs::ILLUSIONER, mobs::PILLAGER, mobs::RAVAGER, mobs::VINDICATOR, mobs::WITCH],
    },
    CategoryDef {
        id: ARROWS,
        kind: Mob,
        members: &[mobs::ARROW, mobs::TIPPED_ARROW, mobs::SPECTRAL_ARROW],
    },
    CategoryDef {
        id: IMPACT_PROJECTILES,
        kind: Mob,
        members: &[
            "#arrows",
            mobs::SNOWBALL,
            mobs::EGG,
            mobs::FIREBALL,
            mobs::SMALL_FIREBALL,
            mobs::DRAGON_FIREBALL,
            mobs::WITHER_SKULL,
            mobs::TRIDENT,
        ],
    },
];
