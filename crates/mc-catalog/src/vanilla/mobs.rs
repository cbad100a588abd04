//! Spawnable entities.
//!
//! 1.11 gave each former sub-variant its own entity type; those live in
//! [`SPLITS`] and fall back to their previous type on older platforms.

use super::{IdentityDef, SplitDef, keys, since, span};
use crate::Version;

const V1_8: Version = Version::V1_8;
const V1_9: Version = Version::V1_9;
const V1_11: Version = Version::V1_11;
const V1_12: Version = Version::V1_12;
const V1_13: Version = Version::V1_13;
const V1_14: Version = Version::V1_14;

keys! {
    GUARDIAN => "guardian",
    ELDER_GUARDIAN => "elder_guardian",
    SKELETON => "skeleton",
    WITHER_SKELETON => "wither_skeleton",
    STRAY => "stray",
    ZOMBIE => "zombie",
    HUSK => "husk",
    ZOMBIE_VILLAGER => "zombie_villager",
    HORSE => "horse",
    SKELETON_HORSE => "skeleton_horse",
    ZOMBIE_HORSE => "zombie_horse",
    DONKEY => "donkey",
    MULE => "mule",
    EVOKER => "evoker",
    ILLUSIONER => "illusioner",
    PILLAGER => "pillager",
    RAVAGER => "ravager",
    VINDICATOR => "vindicator",
    WITCH => "witch",
    ARROW => "arrow",
    TIPPED_ARROW => "tipped_arrow",
    SPECTRAL_ARROW => "spectral_arrow",
    SNOWBALL => "snowball",
    EGG => "egg",
    FIREBALL => "fireball",
    SMALL_FIREBALL => "small_fireball",
    DRAGON_FIREBALL => "dragon_fireball",
    WITHER_SKULL => "wither_skull",
    TRIDENT => "trident",
}

pub const MOBS: &[IdentityDef] = &[
    IdentityDef::mob(GUARDIAN, &[since(V1_8, "GUARDIAN", Some(68))]).legacy("Guardian"),
    IdentityDef::mob(SKELETON, &[since(V1_8, "SKELETON", Some(51))]).legacy("Skeleton"),
    IdentityDef::mob(ZOMBIE, &[since(V1_8, "ZOMBIE", Some(54))]).legacy("Zombie"),
    IdentityDef::mob(HORSE, &[since(V1_8, "HORSE", Some(100))]).legacy("EntityHorse"),
    // raiders
    IdentityDef::mob(EVOKER, &[span(V1_11, V1_13, "EVOCATION_ILLAGER", Some(34)), since(V1_13, "EVOKER", Some(34))]),
    IdentityDef::mob(VINDICATOR, &[span(V1_11, V1_13, "VINDICATION_ILLAGER", Some(36)), since(V1_13, "VINDICATOR", Some(36))]),
    IdentityDef::mob(ILLUSIONER, &[since(V1_12, "ILLUSIONER", Some(37))]),
    IdentityDef::mob(PILLAGER, &[since(V1_14, "PILLAGER", None)]),
    IdentityDef::mob(RAVAGER, &[since(V1_14, "RAVAGER", None)]),
    IdentityDef::mob(WITCH, &[since(V1_8, "WITCH", Some(66))]),
    // projectiles
    IdentityDef::mob(ARROW, &[since(V1_8, "ARROW", Some(10))]),
    IdentityDef::mob(TIPPED_ARROW, &[span(V1_9, V1_14, "TIPPED_ARROW", None)]),
    IdentityDef::mob(SPECTRAL_ARROW, &[since(V1_9, "SPECTRAL_ARROW", Some(24))]),
    IdentityDef::mob(SNOWBALL, &[since(V1_8, "SNOWBALL", Some(11))]),
    IdentityDef::mob(EGG, &[since(V1_8, "EGG", Some(7))]),
    IdentityDef::mob(FIREBALL, &[since(V1_8, "FIREBALL", Some(12))]),
    IdentityDef::mob(SMALL_FIREBALL, &[since(V1_8, "SMALL_FIREBALL", Some(13))]),
    IdentityDef::mob(DRAGON_FIREBALL, &[since(V1_9, "DRAGON_FIREBALL", Some(26))]),
    IdentityDef::mob(WITHER_SKULL, &[since(V1_8, "WITHER_SKULL", Some(19))]),
    IdentityDef::mob(TRIDENT, &[since(V1_13, "TRIDENT", None)]),
];

pub const SPLITS: &[SplitDef] = &[
    SplitDef {
        key: ELDER_GUARDIAN,
        previous: GUARDIAN,
        representations: &[since(V1_11, "ELDER_GUARDIAN", Some(4))],
    },
    SplitDef {
        key: WITHER_SKELETON,
        previous: SKELETON,
        representations: &[since(V1_11, "WITHER_SKELETON", Some(5))],
    },
    SplitDef {
        key: STRAY,
        previous: SKELETON,
        representations: &[since(V1_11, "STRAY", Some(6))],
    },
    SplitDef {
        key: HUSK,
        previous: ZOMBIE,
        representations: &[since(V1_11, "HUSK", Some(23))],
    },
    SplitDef {
        key: ZOMBIE_VILLAGER,
        previous: ZOMBIE,
        representations: &[since(V1_11, "ZOMBIE_VILLAGER", Some(27))],
    },
    SplitDef {
        key: SKELETON_HORSE,
        previous: HORSE,
        representations: &[since(V1_11, "SKELETON_HORSE", Some(28))],
    },
    SplitDef {
        key: ZOMBIE_HORSE,
        previous: HORSE,
        representations: &[since(V1_11, "ZOMBIE_HORSE", Some(29))],
    },
    SplitDef {
        key: DONKEY,
        previous: HORSE,
        representations: &[since(V1_11, "DONKEY", Some(31))],
    },
    SplitDef {
        key: MULE,
        previous: HORSE,
        representations: &[since(V1_11, "MULE", Some(32))],
    },
];
