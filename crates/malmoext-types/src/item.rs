//! Item identifiers for inventory contents and dropped item entities.

use crate::taxonomy::vocabulary;

vocabulary! {
    /// An item type, either held in an inventory or lying in the world.
    pub enum Item: str as "item" {
        AcaciaBoat => "acacia_boat",
        AcaciaDoor => "acacia_door",
        Apple => "apple",
        ArmorStand => "armor_stand",
        Arrow => "arrow",
        BakedPotato => "baked_potato",
        Banner => "banner",
        Bed => "bed",
        Beef => "beef",
        Beetroot => "beetroot",
        BeetrootSeeds => "beetroot_seeds",
        BeetrootSoup => "beetroot_soup",
        BirchBoat => "birch_boat",
        BirchDoor => "birch_door",
        BlazePowder => "blaze_powder",
        BlazeRod => "blaze_rod",
        Boat => "boat",
        Bone => "bone",
        Book => "book",
        Bow => "bow",
        Bowl => "bowl",
        Bread => "bread",
        BrewingStand => "brewing_stand",
        Brick => "brick",
        Bucket => "bucket",
        Cake => "cake",
        Carrot => "carrot",
        CarrotOnAStick => "carrot_on_a_stick",
        Cauldron => "cauldron",
        ChainmailBoots => "chainmail_boots",
        ChainmailChestplate => "chainmail_chestplate",
        ChainmailHelmet => "chainmail_helmet",
        ChainmailLeggings => "chainmail_leggings",
        ChestMinecart => "chest_minecart",
        Chicken => "chicken",
        ChorusFruit => "chorus_fruit",
        ChorusFruitPopped => "chorus_fruit_popped",
        ClayBall => "clay_ball",
        Clock => "clock",
        Coal => "coal",
        CommandBlockMinecart => "command_block_minecart",
        Comparator => "comparator",
        Compass => "compass",
        CookedBeef => "cooked_beef",
        CookedChicken => "cooked_chicken",
        CookedFish => "cooked_fish",
        CookedMutton => "cooked_mutton",
        CookedPorkchop => "cooked_porkchop",
        CookedRabbit => "cooked_rabbit",
        Cookie => "cookie",
        DarkOakBoat => "dark_oak_boat",
        DarkOakDoor => "dark_oak_door",
        Diamond => "diamond",
        DiamondAxe => "diamond_axe",
        DiamondBoots => "diamond_boots",
        DiamondChestplate => "diamond_chestplate",
        DiamondHelmet => "diamond_helmet",
        DiamondHoe => "diamond_hoe",
        DiamondHorseArmor => "diamond_horse_armor",
        DiamondLeggings => "diamond_leggings",
        DiamondPickaxe => "diamond_pickaxe",
        DiamondShovel => "diamond_shovel",
        DiamondSword => "diamond_sword",
        DragonBreath => "dragon_breath",
        Dye => "dye",
        Egg => "egg",
        Elytra => "elytra",
        Emerald => "emerald",
        EnchantedBook => "enchanted_book",
        EnderEye => "ender_eye",
        EnderPearl => "ender_pearl",
        ExperienceBottle => "experience_bottle",
        Feather => "feather",
        FermentedSpiderEye => "fermented_spider_eye",
        FilledMap => "filled_map",
        FireCharge => "fire_charge",
        FireworkCharge => "firework_charge",
        Fireworks => "fireworks",
        Fish => "fish",
        FishingRod => "fishing_rod",
        Flint => "flint",
        FlintAndSteel => "flint_and_steel",
        FlowerPot => "flower_pot",
        FurnaceMinecart => "furnace_minecart",
        GhastTear => "ghast_tear",
        GlassBottle => "glass_bottle",
        GlowstoneDust => "glowstone_dust",
        GoldIngot => "gold_ingot",
        GoldNugget => "gold_nugget",
        GoldenApple => "golden_apple",
        GoldenAxe => "golden_axe",
        GoldenBoots => "golden_boots",
        GoldenCarrot => "golden_carrot",
        GoldenChestplate => "golden_chestplate",
        GoldenHelmet => "golden_helmet",
        GoldenHoe => "golden_hoe",
        GoldenHorseArmor => "golden_horse_armor",
        GoldenLeggings => "golden_leggings",
        GoldenPickaxe => "golden_pickaxe",
        GoldenShovel => "golden_shovel",
        GoldenSword => "golden_sword",
        Gunpowder => "gunpowder",
        HopperMinecart => "hopper_minecart",
        IronAxe => "iron_axe",
        IronBoots => "iron_boots",
        IronChestplate => "iron_chestplate",
        IronDoor => "iron_door",
        IronHelmet => "iron_helmet",
        IronHoe => "iron_hoe",
        IronHorseArmor => "iron_horse_armor",
        IronIngot => "iron_ingot",
        IronLeggings => "iron_leggings",
        IronNugget => "iron_nugget",
        IronPickaxe => "iron_pickaxe",
        IronShovel => "iron_shovel",
        IronSword => "iron_sword",
        ItemFrame => "item_frame",
        JungleBoat => "jungle_boat",
        JungleDoor => "jungle_door",
        LavaBucket => "lava_bucket",
        Lead => "lead",
        Leather => "leather",
        LeatherBoots => "leather_boots",
        LeatherChestplate => "leather_chestplate",
        LeatherHelmet => "leather_helmet",
        LeatherLeggings => "leather_leggings",
        LingeringPotion => "lingering_potion",
        MagmaCream => "magma_cream",
        Map => "map",
        Melon => "melon",
        MelonSeeds => "melon_seeds",
        MilkBucket => "milk_bucket",
        Minecart => "minecart",
        MushroomStew => "mushroom_stew",
        Mutton => "mutton",
        NameTag => "name_tag",
        NetherStar => "nether_star",
        NetherWart => "nether_wart",
        Netherbrick => "netherbrick",
        Painting => "painting",
        Paper => "paper",
        PoisonousPotato => "poisonous_potato",
        Porkchop => "porkchop",
        Potato => "potato",
        Potion => "potion",
        PrismarineCrystals => "prismarine_crystals",
        PrismarineShard => "prismarine_shard",
        PumpkinPie => "pumpkin_pie",
        PumpkinSeeds => "pumpkin_seeds",
        Quartz => "quartz",
        Rabbit => "rabbit",
        RabbitFoot => "rabbit_foot",
        RabbitHide => "rabbit_hide",
        RabbitStew => "rabbit_stew",
        Record11 => "record_11",
        Record13 => "record_13",
        RecordBlocks => "record_blocks",
        RecordCat => "record_cat",
        RecordChirp => "record_chirp",
        RecordFar => "record_far",
        RecordMall => "record_mall",
        RecordMellohi => "record_mellohi",
        RecordStal => "record_stal",
        RecordStrad => "record_strad",
        RecordWait => "record_wait",
        RecordWard => "record_ward",
        Redstone => "redstone",
        Reeds => "reeds",
        Repeater => "repeater",
        RottenFlesh => "rotten_flesh",
        Saddle => "saddle",
        Shears => "shears",
        Shield => "shield",
        ShulkerShell => "shulker_shell",
        Sign => "sign",
        Skull => "skull",
        SlimeBall => "slime_ball",
        Snowball => "snowball",
        SpawnEgg => "spawn_egg",
        SpeckledMelon => "speckled_melon",
        SpectralArrow => "spectral_arrow",
        SpiderEye => "spider_eye",
        SplashPotion => "splash_potion",
        SpruceBoat => "spruce_boat",
        SpruceDoor => "spruce_door",
        Stick => "stick",
        StoneAxe => "stone_axe",
        StoneHoe => "stone_hoe",
        StonePickaxe => "stone_pickaxe",
        StoneShovel => "stone_shovel",
        StoneSword => "stone_sword",
        String => "string",
        Sugar => "sugar",
        TippedArrow => "tipped_arrow",
        TntMinecart => "tnt_minecart",
        TotemOfUndying => "totem_of_undying",
        WaterBucket => "water_bucket",
        Wheat => "wheat",
        WheatSeeds => "wheat_seeds",
        WoodenAxe => "wooden_axe",
        WoodenDoor => "wooden_door",
        WoodenHoe => "wooden_hoe",
        WoodenPickaxe => "wooden_pickaxe",
        WoodenShovel => "wooden_shovel",
        WoodenSword => "wooden_sword",
        WritableBook => "writable_book",
        WrittenBook => "written_book",
    }
}
