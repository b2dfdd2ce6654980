//! Inventory slot addressing.
//!
//! The engine exposes one 40-slot address space split into three contiguous
//! ranges: the hot bar (0..=8), the main player storage (9..=35), and the four
//! armor slots (36..=39). [`InventorySlot`] classifies a raw index into the
//! right range so callers never have to know which sub-range an index is in.

use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnknownValueError;
use crate::taxonomy::{Candidate, Taxonomy, build_index, vocabulary};

/// Total number of addressable inventory slots.
pub const SLOT_COUNT: usize = 40;

vocabulary! {
    /// A slot used to equip a piece of armor.
    pub enum ArmorSlot: i32 as "armor slot" {
        /// Feet, slot 36.
        Boots => 36,
        /// Legs, slot 37.
        Leggings => 37,
        /// Torso, slot 38.
        Chestplate => 38,
        /// Head, slot 39.
        Helmet => 39,
    }
}

/// A hot bar slot, index 0 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HotBarSlot(u8);

impl HotBarSlot {
    /// First hot bar index.
    pub const FIRST: i32 = 0;
    /// Last hot bar index.
    pub const LAST: i32 = 8;

    /// Validate a raw index as a hot bar slot.
    pub fn new(index: i32) -> Option<Self> {
        if (Self::FIRST..=Self::LAST).contains(&index) {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    /// The slot index.
    pub fn index(self) -> i32 {
        i32::from(self.0)
    }
}

/// A main storage slot, index 9 through 35. Excludes the hot bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerSlot(u8);

impl PlayerSlot {
    /// First storage index.
    pub const FIRST: i32 = 9;
    /// Last storage index.
    pub const LAST: i32 = 35;

    /// Validate a raw index as a storage slot.
    pub fn new(index: i32) -> Option<Self> {
        if (Self::FIRST..=Self::LAST).contains(&index) {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    /// The slot index.
    pub fn index(self) -> i32 {
        i32::from(self.0)
    }
}

/// Any addressable inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InventorySlot {
    /// One of the nine quick-access slots.
    HotBar(HotBarSlot),
    /// One of the 27 main storage slots.
    Player(PlayerSlot),
    /// One of the four armor slots.
    Armor(ArmorSlot),
}

impl InventorySlot {
    /// Classify a raw slot index, returning `None` outside `0..=39`.
    pub fn from_index(index: i32) -> Option<Self> {
        HotBarSlot::new(index)
            .map(Self::HotBar)
            .or_else(|| PlayerSlot::new(index).map(Self::Player))
            .or_else(|| ArmorSlot::parse(&index).map(Self::Armor))
    }

    /// The raw slot index.
    pub fn index(self) -> i32 {
        match self {
            Self::HotBar(slot) => slot.index(),
            Self::Player(slot) => slot.index(),
            Self::Armor(slot) => slot.as_i32(),
        }
    }

    /// Whether the slot holds worn equipment rather than carried items.
    pub const fn is_equipment(self) -> bool {
        matches!(self, Self::Armor(_))
    }
}

static ALL_SLOTS: LazyLock<Vec<InventorySlot>> = LazyLock::new(|| {
    (0..)
        .map_while(InventorySlot::from_index)
        .collect()
});

impl Taxonomy for InventorySlot {
    type Raw = i32;
    type Value = i32;

    const VOCABULARY: &'static str = "inventory slot";

    fn members() -> &'static [Self] {
        ALL_SLOTS.as_slice()
    }

    fn value(self) -> i32 {
        self.index()
    }

    fn lookup_table() -> &'static std::collections::HashMap<i32, Self> {
        static INDEX: LazyLock<std::collections::HashMap<i32, InventorySlot>> =
            LazyLock::new(build_index::<InventorySlot>);
        &INDEX
    }
}

impl Candidate<InventorySlot> for i32 {
    fn resolve(&self) -> Option<InventorySlot> {
        InventorySlot::from_index(*self)
    }
}

impl Candidate<InventorySlot> for serde_json::Value {
    fn resolve(&self) -> Option<InventorySlot> {
        self.as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .and_then(InventorySlot::from_index)
    }
}

impl TryFrom<i32> for InventorySlot {
    type Error = UnknownValueError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Self::try_parse(&index)
    }
}

impl From<InventorySlot> for i32 {
    fn from(slot: InventorySlot) -> Self {
        slot.index()
    }
}

impl Serialize for InventorySlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.index())
    }
}

impl<'de> Deserialize<'de> for InventorySlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = i32::deserialize(deserializer)?;
        Self::try_parse(&index).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_partition_the_slot_space() {
        for index in 0..40 {
            let slot = InventorySlot::from_index(index);
            let expected = match index {
                0..=8 => "hotbar",
                9..=35 => "player",
                _ => "armor",
            };
            let actual = match slot {
                Some(InventorySlot::HotBar(_)) => "hotbar",
                Some(InventorySlot::Player(_)) => "player",
                Some(InventorySlot::Armor(_)) => "armor",
                None => "none",
            };
            assert_eq!(actual, expected, "slot {index}");
            assert_eq!(slot.map(InventorySlot::index), Some(index));
        }
    }

    #[test]
    fn indices_outside_the_space_map_to_nothing() {
        for index in [-1, 40, 41, 100, i32::MIN, i32::MAX] {
            assert_eq!(InventorySlot::from_index(index), None, "slot {index}");
            assert!(InventorySlot::try_from(index).is_err());
        }
    }

    #[test]
    fn members_cover_every_slot_once() {
        let members = InventorySlot::members();
        assert_eq!(members.len(), SLOT_COUNT);
        let indices: Vec<i32> = members.iter().map(|slot| slot.index()).collect();
        let expected: Vec<i32> = (0..40).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn armor_slots_are_named() {
        assert_eq!(
            InventorySlot::from_index(36),
            Some(InventorySlot::Armor(ArmorSlot::Boots))
        );
        assert_eq!(
            InventorySlot::from_index(39),
            Some(InventorySlot::Armor(ArmorSlot::Helmet))
        );
        assert!(InventorySlot::Armor(ArmorSlot::Chestplate).is_equipment());
        assert_eq!(ArmorSlot::try_from(37).ok(), Some(ArmorSlot::Leggings));
    }

    #[test]
    fn sub_range_constructors_reject_neighbours() {
        assert!(HotBarSlot::new(8).is_some());
        assert!(HotBarSlot::new(9).is_none());
        assert!(PlayerSlot::new(8).is_none());
        assert!(PlayerSlot::new(35).is_some());
        assert!(PlayerSlot::new(36).is_none());
    }

    #[test]
    fn slots_serialize_as_indices() {
        let slot = InventorySlot::from_index(12);
        let json = slot.and_then(|s| serde_json::to_string(&s).ok());
        assert_eq!(json.as_deref(), Some("12"));
        let parsed: Result<InventorySlot, _> = serde_json::from_str("38");
        assert_eq!(parsed.ok(), Some(InventorySlot::Armor(ArmorSlot::Chestplate)));
        assert!(serde_json::from_str::<InventorySlot>("40").is_err());
    }
}
