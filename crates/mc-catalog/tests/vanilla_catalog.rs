//! Scenarios over the built-in vanilla catalog.

use mc_catalog::{
    CatalogBuilder, CatalogConfig, CatalogError, HorseVariant, Item, Location, Mob, PlatformHost,
    PlatformKeyed, PlatformObject, SkeletonType, Version, VillagerProfession,
    vanilla::{self, categories, items, mobs},
};

struct Block(Option<&'static str>);

impl PlatformKeyed for Block {
    fn platform_key(&self) -> Option<&str> {
        self.0
    }
}

#[derive(Debug, Default)]
struct Entity {
    key: String,
    skeleton_type: Option<SkeletonType>,
    horse_variant: Option<HorseVariant>,
}

impl PlatformObject for Entity {
    fn set_elder(&mut self, _elder: bool) {}

    fn set_skeleton_type(&mut self, skeleton_type: SkeletonType) {
        self.skeleton_type = Some(skeleton_type);
    }

    fn set_villager_profession(&mut self, _profession: VillagerProfession) {}

    fn set_villager(&mut self, _villager: bool) {}

    fn set_horse_variant(&mut self, variant: HorseVariant) {
        self.horse_variant = Some(variant);
    }
}

struct World;

impl PlatformHost for World {
    type Object = Entity;
    type Error = CatalogError;

    fn create_platform_object(
        &mut self,
        platform_key: &str,
        _location: Location,
    ) -> Result<Entity, CatalogError> {
        Ok(Entity {
            key: platform_key.to_string(),
            ..Entity::default()
        })
    }
}

#[test]
fn test_logs_flattening() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();

    let logs_that_burn = catalog.item_category(categories::LOGS_THAT_BURN).unwrap();
    assert_eq!(logs_that_burn.len(), 24);

    let logs = catalog.item_category(categories::LOGS).unwrap();
    assert_eq!(logs.len(), 32);
    assert!(logs.contains(&catalog.item(items::OAK_LOG).unwrap()));
    assert!(logs.contains(&catalog.item(items::STRIPPED_WARPED_HYPHAE).unwrap()));
    assert!(!logs.contains(&catalog.item(items::SAND).unwrap()));
    assert!(logs.includes_category(categories::DARK_OAK_LOGS));
}

#[test]
fn test_soul_block_categories_distinct() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    let fire = catalog.item_category(categories::SOUL_FIRE_BASE_BLOCKS).unwrap();
    let speed = catalog.item_category(categories::SOUL_SPEED_BLOCKS).unwrap();
    let wither = catalog.item_category(categories::WITHER_SUMMON_BASE_BLOCKS).unwrap();

    assert_eq!(fire.elements(), speed.elements());
    assert_eq!(speed.elements(), wither.elements());
    assert_ne!(fire, speed);
    assert_ne!(speed, wither);
}

#[test]
fn test_material_key_before_flattening() {
    let catalog = vanilla::catalog(Version::V1_12).unwrap();
    let logs = catalog.item_category(categories::LOGS).unwrap();

    assert_eq!(
        catalog.identity_by_platform_key("LOG").unwrap().key(),
        items::OAK_LOG
    );
    assert!(logs.contains_by_material_key(Some("LOG"), &catalog));
    assert!(logs.contains_by_material_key(Some("LOG_2"), &catalog));
    assert!(!logs.contains_by_material_key(Some("OAK_LOG"), &catalog));
    assert!(!logs.contains_by_material_key(Some("STONE"), &catalog));
    assert!(!logs.contains_by_material_key(None, &catalog));

    let plantable = catalog.item_category(categories::BAMBOO_PLANTABLE_ON).unwrap();
    assert!(plantable.contains_by_material_key(Some("MYCEL"), &catalog));
}

#[test]
fn test_material_key_after_flattening() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    let logs = catalog.item_category(categories::LOGS).unwrap();

    assert!(logs.contains_by_material_key(Some("CRIMSON_STEM"), &catalog));
    assert!(logs.contains_by_material_key(Some("OAK_LOG"), &catalog));
    assert!(!logs.contains_by_material_key(Some("LOG"), &catalog));

    let plantable = catalog.item_category(categories::BAMBOO_PLANTABLE_ON).unwrap();
    assert!(plantable.contains_by_material_key(Some("RED_SAND"), &catalog));
    assert!(plantable.contains_by_material_key(Some("PODZOL"), &catalog));
    assert!(!plantable.contains_by_material_key(Some("SOUL_SOIL"), &catalog));
}

#[test]
fn test_platform_object_membership() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    let soul = catalog.item_category(categories::SOUL_SPEED_BLOCKS).unwrap();

    assert!(soul.contains_by_platform_object(Some(&Block(Some("SOUL_SOIL"))), &catalog));
    assert!(!soul.contains_by_platform_object(Some(&Block(Some("SAND"))), &catalog));
    assert!(!soul.contains_by_platform_object(Some(&Block(None)), &catalog));
    assert!(!soul.contains_by_platform_object(None::<&Block>, &catalog));
}

#[test]
fn test_split_species_and_resolution() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    let wither = catalog.resolve_identity_by_id(mobs::WITHER_SKELETON).unwrap();
    let skeleton = catalog.resolve_identity_by_id(mobs::SKELETON).unwrap();

    assert_eq!(wither.previous().unwrap().key(), mobs::SKELETON);
    assert_eq!(wither.species(), skeleton.species());

    let old = wither.resolve(Version::V1_10).unwrap();
    assert_eq!(old.platform_key(), "SKELETON");
    assert_eq!(old.numeric_id(), Some(51));

    let new = wither.resolve(Version::V1_11).unwrap();
    assert_eq!(new.platform_key(), "WITHER_SKELETON");
    assert_eq!(new.numeric_id(), Some(5));
}

#[test]
fn test_legacy_ids() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    assert_eq!(
        catalog.resolve_identity_by_id("EntityHorse").unwrap().key(),
        mobs::HORSE
    );

    let mule = catalog.resolve_identity_by_id(mobs::MULE).unwrap();
    assert_eq!(mule.legacy_key(), Some("EntityHorse"));
    // the alias keeps pointing at the type registered first
    assert_eq!(
        catalog.resolve_identity_by_id("Skeleton").unwrap().key(),
        mobs::SKELETON
    );
}

#[test]
fn test_materialize_on_old_platform() {
    let catalog = vanilla::catalog(Version::V1_10).unwrap();
    let location = Location::new("world", 0.5, 70.0, -3.5);

    let stray = catalog.mob(mobs::STRAY).unwrap();
    let entity = stray
        .materialize(&mut World, location.clone(), catalog.platform_version())
        .unwrap();
    assert_eq!(entity.key, "SKELETON");
    assert_eq!(entity.skeleton_type, Some(SkeletonType::Stray));

    let donkey = catalog.mob(mobs::DONKEY).unwrap();
    let entity = donkey.materialize(&mut World, location, Version::V1_16).unwrap();
    assert_eq!(entity.key, "DONKEY");
    assert_eq!(entity.horse_variant, None);
}

#[test]
fn test_unsupported_version() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    assert!(matches!(
        catalog.resolve(mobs::TIPPED_ARROW),
        Err(CatalogError::UnsupportedVersion { ref id, .. }) if id == mobs::TIPPED_ARROW
    ));

    let arrows = catalog.mob_category(categories::IMPACT_PROJECTILES).unwrap();
    assert!(arrows.contains(&catalog.mob(mobs::TIPPED_ARROW).unwrap()));

    let old = vanilla::catalog(Version::V1_12).unwrap();
    assert!(matches!(
        old.resolve(items::SOUL_SOIL),
        Err(CatalogError::UnsupportedVersion { .. })
    ));
}

#[test]
fn test_mob_categories() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    let raiders = catalog.mob_category(categories::RAIDERS).unwrap();
    assert_eq!(raiders.len(), 6);

    let husk = catalog.identity(mobs::HUSK).unwrap();
    assert_eq!(catalog.categories_of(husk), [categories::ZOMBIES]);

    let zombies = catalog.mob_category(categories::ZOMBIES).unwrap();
    let sand = catalog.identity(items::SAND).unwrap();
    assert!(!zombies.contains_identity(sand));
    assert!(catalog.category::<Item>(categories::ZOMBIES).is_none());
    assert!(catalog.category::<Mob>(categories::ZOMBIES).is_some());
}

#[test]
fn test_overlay_on_vanilla() {
    let overlay = CatalogConfig::from_json_str(
        r##"{
            "identities": [
                { "key": "mangrove_log", "kind": "item",
                  "representations": [{ "since": "1.19", "platform_key": "MANGROVE_LOG" }] }
            ],
            "categories": [
                { "id": "all_logs", "kind": "item", "members": ["#logs", "mangrove_log"] }
            ]
        }"##,
    )
    .unwrap();

    let mut builder = CatalogBuilder::new(Version::new(1, 19, 0));
    vanilla::register(&mut builder).unwrap();
    overlay.apply(&mut builder).unwrap();
    let catalog = builder.build().unwrap();

    let all_logs = catalog.item_category("all_logs").unwrap();
    assert_eq!(all_logs.len(), 33);
    assert!(all_logs.contains_by_material_key(Some("MANGROVE_LOG"), &catalog));
}

#[test]
fn test_material_key_shared_by_item_and_mob() {
    let overlay = CatalogConfig::from_json_str(
        r##"{
            "identities": [
                { "key": "arrow_item", "kind": "item",
                  "representations": [{ "since": "1.8", "platform_key": "ARROW" }] }
            ],
            "categories": [
                { "id": "ammo", "kind": "item", "members": ["arrow_item"] }
            ]
        }"##,
    )
    .unwrap();

    let mut builder = CatalogBuilder::new(Version::V1_16);
    vanilla::register(&mut builder).unwrap();
    overlay.apply(&mut builder).unwrap();
    let catalog = builder.build().unwrap();

    let ammo = catalog.item_category("ammo").unwrap();
    assert!(ammo.contains(&catalog.item("arrow_item").unwrap()));
    assert!(ammo.contains_by_material_key(Some("ARROW"), &catalog));
    assert!(ammo.contains_by_platform_object(Some(&Block(Some("ARROW"))), &catalog));

    let arrows = catalog.mob_category(categories::ARROWS).unwrap();
    assert!(arrows.contains_by_material_key(Some("ARROW"), &catalog));
}

#[test]
fn test_data_value_key_resolves_to_first_registered() {
    let catalog = vanilla::catalog(Version::V1_12).unwrap();
    let oak = catalog.item_category(categories::OAK_LOGS).unwrap();
    let spruce = catalog.item_category(categories::SPRUCE_LOGS).unwrap();

    assert!(oak.contains_by_material_key(Some("LOG"), &catalog));
    assert!(!spruce.contains_by_material_key(Some("LOG"), &catalog));
}

#[test]
fn test_overlay_cycle_rejected() {
    let overlay = CatalogConfig::from_json_str(
        r##"{
            "categories": [
                { "id": "a", "kind": "item", "members": ["#b"] },
                { "id": "b", "kind": "item", "members": ["#logs", "#a"] }
            ]
        }"##,
    )
    .unwrap();

    let mut builder = CatalogBuilder::new(Version::V1_16);
    vanilla::register(&mut builder).unwrap();
    overlay.apply(&mut builder).unwrap();

    match builder.build() {
        Err(CatalogError::CategoryCycle(cycle)) => assert_eq!(cycle, ["a", "b", "a"]),
        other => panic!("expected cycle, got {:?}", other.err()),
    }
}

#[test]
fn test_concurrent_reads() {
    let catalog = vanilla::catalog(Version::V1_16).unwrap();
    let logs = catalog.item_category(categories::LOGS).unwrap();

    std::thread::scope(|scope| {
        for key in ["OAK_LOG", "WARPED_STEM", "BIRCH_WOOD", "STRIPPED_ACACIA_LOG"] {
            let catalog = &catalog;
            scope.spawn(move || assert!(logs.contains_by_material_key(Some(key), catalog)));
        }
    });
}
