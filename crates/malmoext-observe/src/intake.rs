//! Admission of raw observations into typed entities.
//!
//! The observation feed reports nearby entities as loose records: an id, an
//! engine name, coordinates, and an optional stack size. [`Intake`] checks
//! every name against the mob and item vocabularies, validates the record,
//! and either admits it as an [`Entity`] or drops it according to the
//! configured [`InvalidPolicy`].
//!
//! Mob names are capitalized (`"Chicken"`) while item names are snake case
//! (`"chicken"`), so a name resolves to at most one of the two vocabularies.

use malmoext_types::{
    Block, Entity, EntityCategory, EntityId, EntityKind, InvalidEntityError, Item, Mob, Taxonomy,
    UnknownValueError, Vector,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{IntakeConfig, InvalidPolicy};
use crate::error::ObserveError;

/// Vocabulary label used when a name matches neither mobs nor items.
const ENTITY_VOCABULARY: &str = "entity";

/// One entity as reported by the observation feed, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntity {
    /// Engine-assigned instance id.
    pub id: String,
    /// Engine type name (`"Cow"`, `"apple"`).
    pub name: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Stack size; the feed omits it for mobs.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

const fn default_quantity() -> i64 {
    1
}

/// Why an observation was left out of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The name is not a known mob or item.
    Unknown(UnknownValueError),
    /// The record failed validation.
    Invalid(InvalidEntityError),
    /// The entity's category is disabled in configuration.
    CategoryDisabled(EntityCategory),
    /// An empty item stack was dropped by configuration.
    EmptyStack,
}

impl SkipReason {
    /// Whether the skip was requested by configuration rather than caused by
    /// bad input.
    pub const fn is_filtered(&self) -> bool {
        matches!(self, Self::CategoryDisabled(_) | Self::EmptyStack)
    }

    fn into_error(self, id: &str) -> Option<ObserveError> {
        match self {
            Self::Unknown(source) => Some(ObserveError::Unknown {
                id: id.to_owned(),
                source,
            }),
            Self::Invalid(source) => Some(ObserveError::InvalidEntity {
                id: id.to_owned(),
                source,
            }),
            Self::CategoryDisabled(_) | Self::EmptyStack => None,
        }
    }
}

/// An observation that did not become an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    /// Identifier as reported by the feed.
    pub id: String,
    /// Name as reported by the feed.
    pub name: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// The admitted entities of one observation, plus what was left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Entities in feed order.
    pub entities: Vec<Entity>,
    /// Observations that were dropped, in feed order.
    pub skipped: Vec<Skipped>,
}

impl Snapshot {
    /// Hostile mobs in the snapshot.
    pub fn hostiles(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_hostile())
    }

    /// Food mobs and food items in the snapshot.
    pub fn food(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_food())
    }

    /// Look up an entity by instance id.
    ///
    /// Ids are not deduplicated. When the feed reports one id several times,
    /// every copy stays in [`Snapshot::entities`] and this returns the first.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id().as_str() == id)
    }

    /// The entity closest to `from` among those matching `predicate`.
    pub fn nearest(
        &self,
        from: Vector,
        predicate: impl Fn(&Entity) -> bool,
    ) -> Option<&Entity> {
        self.entities
            .iter()
            .filter(|&entity| predicate(entity))
            .map(|entity| (entity, from.distance(entity.position())))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(entity, _)| entity)
    }
}

/// Converts raw observations into typed entities.
#[derive(Debug, Clone, Default)]
pub struct Intake {
    config: IntakeConfig,
}

impl Intake {
    /// Create an intake with the given configuration.
    pub const fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Resolve an entity name as a mob, then as an item.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValueError`] labelled `"entity"` if the name is in
    /// neither vocabulary.
    pub fn resolve_kind(name: &str) -> Result<EntityKind, UnknownValueError> {
        Mob::parse(name)
            .map(EntityKind::Mob)
            .or_else(|| Item::parse(name).map(EntityKind::Item))
            .ok_or_else(|| UnknownValueError::new(ENTITY_VOCABULARY, name))
    }

    /// Admit one observation.
    ///
    /// Returns `Ok(None)` when the observation is dropped.
    ///
    /// # Errors
    ///
    /// Under [`InvalidPolicy::Reject`], returns [`ObserveError`] for unknown
    /// names and invalid records.
    pub fn entity(&self, raw: &RawEntity) -> Result<Option<Entity>, ObserveError> {
        match self.admit(raw) {
            Ok(entity) => Ok(Some(entity)),
            Err(reason) => self.drop_observation(&raw.id, &raw.name, reason).map(|_| None),
        }
    }

    /// Admit every observation of one snapshot.
    ///
    /// Entities keep feed order. Repeated instance ids are admitted as
    /// separate entities; see [`Snapshot::get`].
    ///
    /// # Errors
    ///
    /// Under [`InvalidPolicy::Reject`], returns the first [`ObserveError`]
    /// encountered; nothing from the snapshot is returned in that case.
    pub fn snapshot(&self, raws: &[RawEntity]) -> Result<Snapshot, ObserveError> {
        let mut snapshot = Snapshot::default();
        for raw in raws {
            match self.admit(raw) {
                Ok(entity) => snapshot.entities.push(entity),
                Err(reason) => {
                    let skipped = self.drop_observation(&raw.id, &raw.name, reason)?;
                    snapshot.skipped.push(skipped);
                }
            }
        }
        debug!(
            observed = raws.len(),
            admitted = snapshot.entities.len(),
            skipped = snapshot.skipped.len(),
            "Processed observation snapshot"
        );
        Ok(snapshot)
    }

    /// Resolve a flattened grid of block names.
    ///
    /// Cells with unknown names come back as `None`.
    ///
    /// # Errors
    ///
    /// Under [`InvalidPolicy::Reject`], returns [`ObserveError::Unknown`]
    /// for the first unknown cell, with the cell index as its id.
    pub fn block_grid<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<Option<Block>>, ObserveError> {
        let mut cells = Vec::with_capacity(names.len());
        for (cell, name) in names.iter().enumerate() {
            let name = name.as_ref();
            match Block::try_parse(name) {
                Ok(block) => cells.push(Some(block)),
                Err(err) => {
                    self.drop_observation(&cell.to_string(), name, SkipReason::Unknown(err))?;
                    cells.push(None);
                }
            }
        }
        Ok(cells)
    }

    fn admit(&self, raw: &RawEntity) -> Result<Entity, SkipReason> {
        let kind = Self::resolve_kind(&raw.name).map_err(SkipReason::Unknown)?;
        let category = kind.category();
        if !self.config.categories.admits(category) {
            return Err(SkipReason::CategoryDisabled(category));
        }
        if self.config.drop_empty_stacks && category == EntityCategory::Item && raw.quantity == 0 {
            return Err(SkipReason::EmptyStack);
        }
        let id = EntityId::new(raw.id.as_str()).map_err(SkipReason::Invalid)?;
        let position = Vector::try_new(raw.x, raw.y, raw.z).map_err(SkipReason::Invalid)?;
        Entity::new(id, kind, position, raw.quantity).map_err(SkipReason::Invalid)
    }

    /// Apply the configured policy to an observation that was not admitted.
    fn drop_observation(
        &self,
        id: &str,
        name: &str,
        reason: SkipReason,
    ) -> Result<Skipped, ObserveError> {
        if reason.is_filtered() {
            debug!(id, name, ?reason, "Filtered observation");
        } else {
            match self.config.on_invalid {
                InvalidPolicy::Reject => {
                    if let Some(err) = reason.clone().into_error(id) {
                        return Err(err);
                    }
                }
                InvalidPolicy::Warn => warn!(id, name, ?reason, "Dropped invalid observation"),
                InvalidPolicy::Skip => debug!(id, name, ?reason, "Dropped invalid observation"),
            }
        }
        Ok(Skipped {
            id: id.to_owned(),
            name: name.to_owned(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use malmoext_types::Direction;

    use super::*;
    use crate::config::CategoryConfig;

    fn raw(id: &str, name: &str, quantity: i64) -> RawEntity {
        RawEntity {
            id: id.to_owned(),
            name: name.to_owned(),
            x: 0.0,
            y: 64.0,
            z: 0.0,
            quantity,
        }
    }

    fn intake(on_invalid: InvalidPolicy) -> Intake {
        Intake::new(IntakeConfig {
            on_invalid,
            ..IntakeConfig::default()
        })
    }

    #[test]
    fn resolves_mobs_before_items() {
        assert_eq!(Intake::resolve_kind("Chicken"), Ok(EntityKind::Mob(Mob::Chicken)));
        assert_eq!(Intake::resolve_kind("chicken"), Ok(EntityKind::Item(Item::Chicken)));
        assert_eq!(
            Intake::resolve_kind("Dragon"),
            Err(UnknownValueError::new("entity", "Dragon"))
        );
    }

    #[test]
    fn admits_a_known_mob() {
        let entity = intake(InvalidPolicy::Warn).entity(&raw("e1", "Cow", 1));
        let entity = entity.ok().flatten();
        assert_eq!(entity.as_ref().and_then(Entity::as_mob), Some(Mob::Cow));
        assert_eq!(entity.as_ref().map(Entity::is_food), Some(true));
    }

    #[test]
    fn unknown_names_follow_policy() {
        let observation = raw("e2", "NotAMob", 1);
        assert_eq!(intake(InvalidPolicy::Skip).entity(&observation), Ok(None));
        assert_eq!(intake(InvalidPolicy::Warn).entity(&observation), Ok(None));
        assert_eq!(
            intake(InvalidPolicy::Reject).entity(&observation),
            Err(ObserveError::Unknown {
                id: String::from("e2"),
                source: UnknownValueError::new("entity", "NotAMob"),
            })
        );
    }

    #[test]
    fn invalid_records_follow_policy() {
        let observation = raw("e3", "apple", -2);
        assert_eq!(intake(InvalidPolicy::Warn).entity(&observation), Ok(None));
        let result = intake(InvalidPolicy::Reject).entity(&observation);
        assert!(matches!(
            result,
            Err(ObserveError::InvalidEntity {
                source: InvalidEntityError::NegativeQuantity { quantity: -2, .. },
                ..
            })
        ));
    }

    #[test]
    fn filtered_categories_are_never_errors() {
        let intake = Intake::new(IntakeConfig {
            on_invalid: InvalidPolicy::Reject,
            drop_empty_stacks: true,
            categories: CategoryConfig {
                mobs: false,
                items: true,
            },
        });
        let snapshot = intake.snapshot(&[
            raw("m1", "Zombie", 1),
            raw("i1", "bread", 0),
            raw("i2", "bread", 2),
        ]);
        let snapshot = snapshot.unwrap_or_default();
        assert_eq!(snapshot.entities.len(), 1);
        assert_eq!(snapshot.entities.first().and_then(Entity::as_item), Some(Item::Bread));
        let reasons: Vec<&SkipReason> = snapshot.skipped.iter().map(|s| &s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                &SkipReason::CategoryDisabled(EntityCategory::Mob),
                &SkipReason::EmptyStack,
            ]
        );
    }

    #[test]
    fn snapshot_queries() {
        let mut creeper = raw("c1", "Creeper", 1);
        creeper.x = 10.0;
        let mut far_pig = raw("p1", "Pig", 1);
        far_pig.z = 30.0;
        let mut near_pig = raw("p2", "Pig", 1);
        near_pig.z = -4.0;
        let observations = [creeper, far_pig, near_pig, raw("x", "Dragon", 1)];

        let snapshot = intake(InvalidPolicy::Skip)
            .snapshot(&observations)
            .unwrap_or_default();

        assert_eq!(snapshot.entities.len(), 3);
        assert_eq!(snapshot.skipped.len(), 1);
        let hostile_ids: Vec<&str> = snapshot.hostiles().map(|e| e.id().as_str()).collect();
        assert_eq!(hostile_ids, vec!["c1"]);
        assert_eq!(snapshot.food().count(), 2);

        let origin = Vector::new(0.0, 64.0, 0.0);
        let nearest_food = snapshot.nearest(origin, Entity::is_food);
        assert_eq!(nearest_food.map(|e| e.id().as_str()), Some("p2"));
        assert!(snapshot.get("p1").is_some());
        assert!(snapshot.get("x").is_none());

        let heading = nearest_food
            .and_then(|e| origin.yaw_towards(e.position()))
            .and_then(Direction::from_yaw);
        assert_eq!(heading, Some(Direction::North));
    }

    #[test]
    fn repeated_ids_are_kept_in_feed_order() {
        let mut moved = raw("dup", "Cow", 1);
        moved.x = 4.0;
        let observations = [raw("dup", "Cow", 1), moved];
        let snapshot = intake(InvalidPolicy::Reject)
            .snapshot(&observations)
            .unwrap_or_default();

        assert_eq!(snapshot.entities.len(), 2);
        assert!(snapshot.skipped.is_empty());
        let first_x = snapshot.get("dup").map(|e| e.position().x);
        assert!(first_x.is_some_and(|x| x.abs() < f64::EPSILON));
    }

    #[test]
    fn reject_policy_aborts_snapshot() {
        let observations = [raw("ok", "Sheep", 1), raw("bad", "Dragon", 1)];
        let result = intake(InvalidPolicy::Reject).snapshot(&observations);
        assert!(matches!(result, Err(ObserveError::Unknown { ref id, .. }) if id == "bad"));
    }

    #[test]
    fn block_grid_resolves_cells() {
        let grid = ["stone", "air", "lava", "unobtainium"];
        let cells = intake(InvalidPolicy::Warn).block_grid(&grid);
        assert_eq!(
            cells,
            Ok(vec![Some(Block::Stone), Some(Block::Air), Some(Block::Lava), None])
        );

        let rejected = intake(InvalidPolicy::Reject).block_grid(&grid);
        assert!(matches!(rejected, Err(ObserveError::Unknown { ref id, .. }) if id == "3"));
    }

    #[test]
    fn missing_quantity_defaults_to_one() {
        let json = r#"{"id":"e9","name":"Wolf","x":1.0,"y":2.0,"z":3.0}"#;
        let raw: Option<RawEntity> = serde_json::from_str(json).ok();
        assert_eq!(raw.as_ref().map(|r| r.quantity), Some(1));
    }
}
