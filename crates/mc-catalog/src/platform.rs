//! Host platform boundary.
//!
//! The catalog never owns live world objects. It asks a [`PlatformHost`] to
//! create them and uses the [`PlatformObject`] setters to adjust freshly
//! created mobs on platforms that lack a dedicated entity type.

/// Position in a named world.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    #[must_use]
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

/// Skeleton sub-type flag of pre-1.11 platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonType {
    Normal,
    Wither,
    Stray,
}

/// Villager profession, also carried by zombies on pre-1.11 platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VillagerProfession {
    Farmer,
    Librarian,
    Priest,
    Blacksmith,
    Butcher,
    Nitwit,
    Husk,
}

/// Horse sub-type flag of pre-1.11 platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorseVariant {
    Horse,
    Donkey,
    Mule,
    UndeadHorse,
    SkeletonHorse,
}

/// A live object created by the host.
///
/// The setters are only called on objects whose platform type supports them.
pub trait PlatformObject {
    fn set_elder(&mut self, elder: bool);
    fn set_skeleton_type(&mut self, skeleton_type: SkeletonType);
    fn set_villager_profession(&mut self, profession: VillagerProfession);
    fn set_villager(&mut self, villager: bool);
    fn set_horse_variant(&mut self, variant: HorseVariant);
}

/// Creates live objects from platform keys.
pub trait PlatformHost {
    type Object: PlatformObject;
    type Error;

    fn create_platform_object(
        &mut self,
        platform_key: &str,
        location: Location,
    ) -> Result<Self::Object, Self::Error>;
}

/// Live blocks, item stacks and entities that expose their platform key.
pub trait PlatformKeyed {
    /// `None` when the object has no type the catalog could know (e.g. air).
    fn platform_key(&self) -> Option<&str>;
}
