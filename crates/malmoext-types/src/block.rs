//! Block identifiers as reported by grid observations.
//!
//! Several names (`bed`, `cake`, doors) also exist as items; the two
//! vocabularies are independent and a raw name only means something once the
//! caller knows which one it came from.

use crate::taxonomy::vocabulary;

vocabulary! {
    /// A block type occupying one cell of the world grid.
    pub enum Block: str as "block" {
        AcaciaDoor => "acacia_door",
        AcaciaFence => "acacia_fence",
        AcaciaFenceGate => "acacia_fence_gate",
        AcaciaStairs => "acacia_stairs",
        ActivatorRail => "activator_rail",
        Air => "air",
        Anvil => "anvil",
        Barrier => "barrier",
        Beacon => "beacon",
        Bed => "bed",
        Bedrock => "bedrock",
        Beetroots => "beetroots",
        BirchDoor => "birch_door",
        BirchFence => "birch_fence",
        BirchFenceGate => "birch_fence_gate",
        BirchStairs => "birch_stairs",
        BlackShulkerBox => "black_shulker_box",
        BlueShulkerBox => "blue_shulker_box",
        BoneBlock => "bone_block",
        Bookshelf => "bookshelf",
        BrewingStand => "brewing_stand",
        BrickBlock => "brick_block",
        BrickStairs => "brick_stairs",
        BrownMushroom => "brown_mushroom",
        BrownMushroomBlock => "brown_mushroom_block",
        BrownShulkerBox => "brown_shulker_box",
        Cactus => "cactus",
        Cake => "cake",
        Carpet => "carpet",
        Carrots => "carrots",
        Cauldron => "cauldron",
        ChainCommandBlock => "chain_command_block",
        Chest => "chest",
        ChorusFlower => "chorus_flower",
        ChorusPlant => "chorus_plant",
        Clay => "clay",
        CoalBlock => "coal_block",
        CoalOre => "coal_ore",
        Cobblestone => "cobblestone",
        CobblestoneWall => "cobblestone_wall",
        Cocoa => "cocoa",
        CommandBlock => "command_block",
        CraftingTable => "crafting_table",
        CyanShulkerBox => "cyan_shulker_box",
        DarkOakDoor => "dark_oak_door",
        DarkOakFence => "dark_oak_fence",
        DarkOakFenceGate => "dark_oak_fence_gate",
        DarkOakStairs => "dark_oak_stairs",
        DaylightDetector => "daylight_detector",
        DaylightDetectorInverted => "daylight_detector_inverted",
        Deadbush => "deadbush",
        DetectorRail => "detector_rail",
        DiamondBlock => "diamond_block",
        DiamondOre => "diamond_ore",
        Dirt => "dirt",
        Dispenser => "dispenser",
        DoublePlant => "double_plant",
        DoubleStoneSlab => "double_stone_slab",
        DoubleStoneSlab2 => "double_stone_slab2",
        DoubleWoodenSlab => "double_wooden_slab",
        DragonEgg => "dragon_egg",
        Dropper => "dropper",
        EmeraldBlock => "emerald_block",
        EmeraldOre => "emerald_ore",
        EnchantingTable => "enchanting_table",
        EndBricks => "end_bricks",
        EndGateway => "end_gateway",
        EndPortal => "end_portal",
        EndPortalFrame => "end_portal_frame",
        EndRod => "end_rod",
        EndStone => "end_stone",
        EnderChest => "ender_chest",
        Farmland => "farmland",
        Fence => "fence",
        FenceGate => "fence_gate",
        Fire => "fire",
        FlowerPot => "flower_pot",
        FlowingLava => "flowing_lava",
        FlowingWater => "flowing_water",
        FrostedIce => "frosted_ice",
        Furnace => "furnace",
        Glass => "glass",
        GlassPane => "glass_pane",
        Glowstone => "glowstone",
        GoldBlock => "gold_block",
        GoldOre => "gold_ore",
        GoldenRail => "golden_rail",
        Grass => "grass",
        GrassPath => "grass_path",
        Gravel => "gravel",
        GrayShulkerBox => "gray_shulker_box",
        GreenShulkerBox => "green_shulker_box",
        HardenedClay => "hardened_clay",
        HayBlock => "hay_block",
        HeavyWeightedPressurePlate => "heavy_weighted_pressure_plate",
        Hopper => "hopper",
        Ice => "ice",
        IronBars => "iron_bars",
        IronBlock => "iron_block",
        IronDoor => "iron_door",
        IronOre => "iron_ore",
        IronTrapdoor => "iron_trapdoor",
        Jukebox => "jukebox",
        JungleDoor => "jungle_door",
        JungleFence => "jungle_fence",
        JungleFenceGate => "jungle_fence_gate",
        JungleStairs => "jungle_stairs",
        Ladder => "ladder",
        LapisBlock => "lapis_block",
        LapisOre => "lapis_ore",
        Lava => "lava",
        Leaves => "leaves",
        Leaves2 => "leaves2",
        Lever => "lever",
        LightBlueShulkerBox => "light_blue_shulker_box",
        LightWeightedPressurePlate => "light_weighted_pressure_plate",
        LimeShulkerBox => "lime_shulker_box",
        LitFurnace => "lit_furnace",
        LitPumpkin => "lit_pumpkin",
        LitRedstoneLamp => "lit_redstone_lamp",
        LitRedstoneOre => "lit_redstone_ore",
        Log => "log",
        Log2 => "log2",
        MagentaShulkerBox => "magenta_shulker_box",
        Magma => "magma",
        MelonBlock => "melon_block",
        MelonStem => "melon_stem",
        MobSpawner => "mob_spawner",
        MonsterEgg => "monster_egg",
        MossyCobblestone => "mossy_cobblestone",
        Mycelium => "mycelium",
        NetherBrick => "nether_brick",
        NetherBrickFence => "nether_brick_fence",
        NetherBrickStairs => "nether_brick_stairs",
        NetherWart => "nether_wart",
        NetherWartBlock => "nether_wart_block",
        Netherrack => "netherrack",
        Noteblock => "noteblock",
        OakStairs => "oak_stairs",
        Observer => "observer",
        Obsidian => "obsidian",
        OrangeShulkerBox => "orange_shulker_box",
        PackedIce => "packed_ice",
        PinkShulkerBox => "pink_shulker_box",
        Piston => "piston",
        PistonExtension => "piston_extension",
        PistonHead => "piston_head",
        Planks => "planks",
        Portal => "portal",
        Potatoes => "potatoes",
        PoweredComparator => "powered_comparator",
        PoweredRepeater => "powered_repeater",
        Prismarine => "prismarine",
        Pumpkin => "pumpkin",
        PumpkinStem => "pumpkin_stem",
        PurpleShulkerBox => "purple_shulker_box",
        PurpurBlock => "purpur_block",
        PurpurDoubleSlab => "purpur_double_slab",
        PurpurPillar => "purpur_pillar",
        PurpurSlab => "purpur_slab",
        PurpurStairs => "purpur_stairs",
        QuartzBlock => "quartz_block",
        QuartzOre => "quartz_ore",
        QuartzStairs => "quartz_stairs",
        Rail => "rail",
        RedFlower => "red_flower",
        RedMushroom => "red_mushroom",
        RedMushroomBlock => "red_mushroom_block",
        RedNetherBrick => "red_nether_brick",
        RedSandstone => "red_sandstone",
        RedSandstoneStairs => "red_sandstone_stairs",
        RedShulkerBox => "red_shulker_box",
        RedstoneBlock => "redstone_block",
        RedstoneLamp => "redstone_lamp",
        RedstoneOre => "redstone_ore",
        RedstoneTorch => "redstone_torch",
        RedstoneWire => "redstone_wire",
        Reeds => "reeds",
        RepeatingCommandBlock => "repeating_command_block",
        Sand => "sand",
        Sandstone => "sandstone",
        SandstoneStairs => "sandstone_stairs",
        Sapling => "sapling",
        SeaLantern => "sea_lantern",
        SilverShulkerBox => "silver_shulker_box",
        Skull => "skull",
        Slime => "slime",
        Snow => "snow",
        SnowLayer => "snow_layer",
        SoulSand => "soul_sand",
        Sponge => "sponge",
        SpruceDoor => "spruce_door",
        SpruceFence => "spruce_fence",
        SpruceFenceGate => "spruce_fence_gate",
        SpruceStairs => "spruce_stairs",
        StainedGlass => "stained_glass",
        StainedGlassPane => "stained_glass_pane",
        StainedHardenedClay => "stained_hardened_clay",
        StandingBanner => "standing_banner",
        StandingSign => "standing_sign",
        StickyPiston => "sticky_piston",
        Stone => "stone",
        StoneBrickStairs => "stone_brick_stairs",
        StoneButton => "stone_button",
        StonePressurePlate => "stone_pressure_plate",
        StoneSlab => "stone_slab",
        StoneSlab2 => "stone_slab2",
        StoneStairs => "stone_stairs",
        Stonebrick => "stonebrick",
        StructureBlock => "structure_block",
        StructureVoid => "structure_void",
        Tallgrass => "tallgrass",
        Tnt => "tnt",
        Torch => "torch",
        Trapdoor => "trapdoor",
        TrappedChest => "trapped_chest",
        Tripwire => "tripwire",
        TripwireHook => "tripwire_hook",
        UnlitRedstoneTorch => "unlit_redstone_torch",
        UnpoweredComparator => "unpowered_comparator",
        UnpoweredRepeater => "unpowered_repeater",
        Vine => "vine",
        WallBanner => "wall_banner",
        WallSign => "wall_sign",
        Water => "water",
        Waterlily => "waterlily",
        Web => "web",
        Wheat => "wheat",
        WhiteShulkerBox => "white_shulker_box",
        WoodenButton => "wooden_button",
        WoodenDoor => "wooden_door",
        WoodenPressurePlate => "wooden_pressure_plate",
        WoodenSlab => "wooden_slab",
        Wool => "wool",
        YellowFlower => "yellow_flower",
        YellowShulkerBox => "yellow_shulker_box",
    }
}
