//! Mob identifiers as reported by the engine's entity observations.
//!
//! Hostility and edibility live in [`crate::classify`]; this table only
//! mirrors the engine's naming.

use crate::taxonomy::vocabulary;

vocabulary! {
    /// A living, non-player entity type.
    pub enum Mob: str as "mob" {
        Bat => "Bat",
        Blaze => "Blaze",
        CaveSpider => "CaveSpider",
        Chicken => "Chicken",
        Cow => "Cow",
        Creeper => "Creeper",
        Donkey => "Donkey",
        ElderGuardian => "ElderGuardian",
        EnderDragon => "EnderDragon",
        Enderman => "Enderman",
        Endermite => "Endermite",
        EvocationIllager => "EvocationIllager",
        Ghast => "Ghast",
        Giant => "Giant",
        Guardian => "Guardian",
        Horse => "Horse",
        Husk => "Husk",
        LavaSlime => "LavaSlime",
        Llama => "Llama",
        Mule => "Mule",
        MushroomCow => "MushroomCow",
        Ozelot => "Ozelot",
        Pig => "Pig",
        PigZombie => "PigZombie",
        PolarBear => "PolarBear",
        Rabbit => "Rabbit",
        Sheep => "Sheep",
        Shulker => "Shulker",
        Silverfish => "Silverfish",
        Skeleton => "Skeleton",
        SkeletonHorse => "SkeletonHorse",
        Slime => "Slime",
        SnowMan => "SnowMan",
        Spider => "Spider",
        Squid => "Squid",
        Stray => "Stray",
        Vex => "Vex",
        Villager => "Villager",
        VillagerGolem => "VillagerGolem",
        VindicationIllager => "VindicationIllager",
        Witch => "Witch",
        WitherBoss => "WitherBoss",
        WitherSkeleton => "WitherSkeleton",
        Wolf => "Wolf",
        Zombie => "Zombie",
        ZombieHorse => "ZombieHorse",
        ZombieVillager => "ZombieVillager",
    }
}
