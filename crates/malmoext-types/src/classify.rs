//! Classification registries layered over the mob and item vocabularies.
//!
//! Each registry is a named, immutable subset of one vocabulary, built on
//! first access and shared for the life of the process. Hostility and
//! edibility are independent axes. Classification is partial: a mob may sit
//! in neither hostility registry when its behaviour does not matter to agent
//! policy.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use crate::item::Item;
use crate::mob::Mob;
use crate::structs::{Entity, EntityKind};
use crate::taxonomy::Taxonomy;

/// A named, read-only subset of a vocabulary.
#[derive(Clone)]
pub struct Registry<T: Taxonomy> {
    name: &'static str,
    members: HashSet<T>,
}

impl<T: Taxonomy> Registry<T> {
    /// Build a registry from its members. Duplicates collapse.
    pub fn new(name: &'static str, members: impl IntoIterator<Item = T>) -> Self {
        Self {
            name,
            members: members.into_iter().collect(),
        }
    }

    /// The registry's label.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `member` belongs to this registry.
    pub fn contains(&self, member: T) -> bool {
        self.members.contains(&member)
    }

    /// Whether a raw engine value names a member of this registry.
    ///
    /// Unknown raw values are simply not contained.
    pub fn contains_raw(&self, raw: &T::Raw) -> bool {
        T::parse(raw).is_some_and(|member| self.contains(member))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the registry has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in vocabulary declaration order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::members()
            .iter()
            .copied()
            .filter(|member| self.members.contains(member))
    }

    /// Whether no member is shared with `other`.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.members.is_disjoint(&other.members)
    }

    /// Whether every member also belongs to `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.members.is_subset(&other.members)
    }
}

impl<T: Taxonomy> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("members", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Mobs that attack agents on sight or when provoked.
pub static HOSTILE_MOBS: LazyLock<Registry<Mob>> = LazyLock::new(|| {
    Registry::new(
        "hostile mobs",
        [
            Mob::Blaze,
            Mob::CaveSpider,
            Mob::Creeper,
            Mob::ElderGuardian,
            Mob::EnderDragon,
            Mob::Enderman,
            Mob::Endermite,
            Mob::EvocationIllager,
            Mob::Ghast,
            Mob::Guardian,
            Mob::Husk,
            Mob::LavaSlime,
            Mob::PigZombie,
            Mob::Shulker,
            Mob::Silverfish,
            Mob::Skeleton,
            Mob::Slime,
            Mob::Spider,
            Mob::Stray,
            Mob::Vex,
            Mob::VindicationIllager,
            Mob::Witch,
            Mob::WitherBoss,
            Mob::WitherSkeleton,
            Mob::Zombie,
            Mob::ZombieVillager,
        ],
    )
});

/// Mobs that never initiate an attack.
pub static PEACEFUL_MOBS: LazyLock<Registry<Mob>> = LazyLock::new(|| {
    Registry::new(
        "peaceful mobs",
        [
            Mob::Bat,
            Mob::Chicken,
            Mob::Cow,
            Mob::Donkey,
            Mob::Giant,
            Mob::Horse,
            Mob::Llama,
            Mob::Mule,
            Mob::MushroomCow,
            Mob::Ozelot,
            Mob::Pig,
            Mob::PolarBear,
            Mob::Rabbit,
            Mob::Sheep,
            Mob::SkeletonHorse,
            Mob::SnowMan,
            Mob::Squid,
            Mob::Villager,
            Mob::VillagerGolem,
            Mob::Wolf,
            Mob::ZombieHorse,
        ],
    )
});

/// Mobs that drop food when killed.
pub static FOOD_MOBS: LazyLock<Registry<Mob>> = LazyLock::new(|| {
    Registry::new(
        "food mobs",
        [
            Mob::Chicken,
            Mob::Cow,
            Mob::MushroomCow,
            Mob::Pig,
            Mob::Rabbit,
            Mob::Sheep,
        ],
    )
});

/// Items an agent can eat.
pub static FOOD_ITEMS: LazyLock<Registry<Item>> = LazyLock::new(|| {
    Registry::new(
        "food items",
        [
            Item::Apple,
            Item::BakedPotato,
            Item::Beef,
            Item::BeetrootSoup,
            Item::Bread,
            Item::Cake,
            Item::Carrot,
            Item::Chicken,
            Item::CookedBeef,
            Item::CookedChicken,
            Item::CookedFish,
            Item::CookedMutton,
            Item::CookedPorkchop,
            Item::CookedRabbit,
            Item::Cookie,
            Item::Fish,
            Item::GoldenApple,
            Item::GoldenCarrot,
            Item::MushroomStew,
            Item::Mutton,
            Item::PoisonousPotato,
            Item::Porkchop,
            Item::Potato,
            Item::PumpkinPie,
            Item::Rabbit,
            Item::RabbitStew,
            Item::RottenFlesh,
        ],
    )
});

/// A mob's disposition towards agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hostility {
    /// Listed in [`HOSTILE_MOBS`].
    Hostile,
    /// Listed in [`PEACEFUL_MOBS`].
    Peaceful,
}

impl Mob {
    /// The mob's disposition, or `None` if it is unclassified.
    pub fn hostility(self) -> Option<Hostility> {
        if HOSTILE_MOBS.contains(self) {
            Some(Hostility::Hostile)
        } else if PEACEFUL_MOBS.contains(self) {
            Some(Hostility::Peaceful)
        } else {
            None
        }
    }

    /// Whether the mob is in [`HOSTILE_MOBS`].
    pub fn is_hostile(self) -> bool {
        HOSTILE_MOBS.contains(self)
    }

    /// Whether the mob is in [`PEACEFUL_MOBS`].
    pub fn is_peaceful(self) -> bool {
        PEACEFUL_MOBS.contains(self)
    }

    /// Whether the mob is in [`FOOD_MOBS`].
    pub fn is_food(self) -> bool {
        FOOD_MOBS.contains(self)
    }
}

impl Item {
    /// Whether the item is in [`FOOD_ITEMS`].
    pub fn is_food(self) -> bool {
        FOOD_ITEMS.contains(self)
    }
}

impl Entity {
    /// Whether the entity is a hostile mob.
    pub fn is_hostile(&self) -> bool {
        self.as_mob().is_some_and(Mob::is_hostile)
    }

    /// Whether the entity is a food source: a food mob or a food item.
    pub fn is_food(&self) -> bool {
        match self.kind() {
            EntityKind::Mob(mob) => mob.is_food(),
            EntityKind::Item(item) => item.is_food(),
            EntityKind::Block(_) => false,
        }
    }
}
