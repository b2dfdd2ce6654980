//! Domain vocabulary and validation layer for Malmo agent environments.
//!
//! Raw values arriving from the game's observation feed (mob names, block
//! names, slot indices, yaw angles) are untrusted. This crate turns them into
//! typed members of closed vocabularies, answers semantic questions about
//! those members, and packages them into immutable records for the agent
//! control layer.
//!
//! # Modules
//!
//! - [`taxonomy`] -- The [`Taxonomy`] trait: build-once lookup tables and
//!   total `contains`/`parse` checks shared by every vocabulary
//! - [`enums`] -- Agent types, times of day, and compass directions
//! - [`inventory`] -- The 40-slot inventory address space
//! - [`mob`], [`item`], [`block`] -- Engine identifier tables
//! - [`classify`] -- Hostile, peaceful, and food registries
//! - [`structs`] -- [`Vector`] and [`Entity`] value records
//! - [`error`] -- Validation errors
//!
//! All tables are immutable after first use and safe to share across threads.

pub mod block;
pub mod classify;
pub mod enums;
pub mod error;
pub mod inventory;
pub mod item;
pub mod mob;
pub mod structs;
pub mod taxonomy;

// Re-export all public types at crate root for convenience.
pub use block::Block;
pub use classify::{FOOD_ITEMS, FOOD_MOBS, HOSTILE_MOBS, Hostility, PEACEFUL_MOBS, Registry};
pub use enums::{AgentType, Direction, TICKS_PER_DAY, TICKS_PER_SECOND, TimeOfDay};
pub use error::{InvalidEntityError, TypesError, UnknownValueError};
pub use inventory::{ArmorSlot, HotBarSlot, InventorySlot, PlayerSlot, SLOT_COUNT};
pub use item::Item;
pub use mob::Mob;
pub use structs::{Entity, EntityCategory, EntityId, EntityKind, EntityRecord, Vector};
pub use taxonomy::{Candidate, Taxonomy};

#[cfg(test)]
mod tests {
    //! Cross-module checks on shared guarantees.

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shared_tables_are_thread_safe() {
        assert_send_sync::<Registry<Mob>>();
        assert_send_sync::<Registry<Item>>();
        assert_send_sync::<Entity>();
        assert_send_sync::<TypesError>();
    }

    #[test]
    fn concurrent_readers_see_the_same_tables() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (
                        Mob::parse("Cow"),
                        Block::contains("bedrock"),
                        HOSTILE_MOBS.contains(Mob::Zombie),
                    )
                })
            })
            .collect();
        for handle in handles {
            let result = handle.join().ok();
            assert_eq!(result, Some((Some(Mob::Cow), true, true)));
        }
    }
}
