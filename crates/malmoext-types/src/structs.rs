//! Value records handed to the agent-control layer: [`Vector`] and [`Entity`].
//!
//! Both are immutable once built. [`Entity`] can only be constructed from
//! already-validated vocabulary members, and its constructor rejects counts
//! and coordinates that break the record's invariants.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::{InvalidEntityError, UnknownValueError};
use crate::item::Item;
use crate::mob::Mob;
use crate::taxonomy::Taxonomy;

// ---------------------------------------------------------------------------
// Vector
// ---------------------------------------------------------------------------

/// A point or displacement in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// East-west axis; positive is East.
    pub x: f64,
    /// Vertical axis; positive is up.
    pub y: f64,
    /// North-south axis; positive is South.
    pub z: f64,
}

impl Vector {
    /// The world origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from raw coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector, rejecting NaN or infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEntityError::NonFiniteCoordinate`] if any coordinate
    /// is not finite.
    pub const fn try_new(x: f64, y: f64, z: f64) -> Result<Self, InvalidEntityError> {
        let vector = Self::new(x, y, z);
        if vector.is_finite() {
            Ok(vector)
        } else {
            Err(InvalidEntityError::NonFiniteCoordinate { x, y, z })
        }
    }

    /// Whether every coordinate is a finite number.
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Multiply every coordinate by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x)
            .hypot(other.y - self.y)
            .hypot(other.z - self.z)
    }

    /// Distance to `other` ignoring height.
    pub fn horizontal_distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.z - self.z)
    }

    /// Yaw in degrees that faces from this point towards `target`.
    ///
    /// Uses the engine convention: 0 faces South (+Z), 90 faces West (-X).
    /// Returns `None` when the two points share the same X and Z.
    pub fn yaw_towards(self, target: Self) -> Option<f64> {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        if dx == 0.0 && dz == 0.0 {
            return None;
        }
        Some((-dx).atan2(dz).to_degrees())
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Entity identity and kind
// ---------------------------------------------------------------------------

/// Opaque identifier of one observed entity instance.
///
/// The engine assigns these; the only requirement enforced here is that the
/// identifier is not blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Wrap a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEntityError::EmptyId`] if `raw` is empty or
    /// whitespace only.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEntityError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidEntityError::EmptyId);
        }
        Ok(Self(raw))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = InvalidEntityError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which vocabulary an entity's type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    /// A living mob.
    Mob,
    /// A dropped or held item.
    Item,
    /// A placed block.
    Block,
}

/// The vocabulary-typed kind of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "type", rename_all = "snake_case")]
pub enum EntityKind {
    /// A mob entity.
    Mob(Mob),
    /// An item entity.
    Item(Item),
    /// A block entity.
    Block(Block),
}

impl EntityKind {
    /// Resolve a raw name within the vocabulary of `category`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValueError`] if `raw` is not a member of that
    /// vocabulary.
    pub fn resolve(category: EntityCategory, raw: &str) -> Result<Self, UnknownValueError> {
        match category {
            EntityCategory::Mob => Mob::try_parse(raw).map(Self::Mob),
            EntityCategory::Item => Item::try_parse(raw).map(Self::Item),
            EntityCategory::Block => Block::try_parse(raw).map(Self::Block),
        }
    }

    /// The vocabulary this kind belongs to.
    pub const fn category(self) -> EntityCategory {
        match self {
            Self::Mob(_) => EntityCategory::Mob,
            Self::Item(_) => EntityCategory::Item,
            Self::Block(_) => EntityCategory::Block,
        }
    }

    /// The engine identifier of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mob(mob) => mob.as_str(),
            Self::Item(item) => item.as_str(),
            Self::Block(block) => block.as_str(),
        }
    }
}

impl From<Mob> for EntityKind {
    fn from(mob: Mob) -> Self {
        Self::Mob(mob)
    }
}

impl From<Item> for EntityKind {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<Block> for EntityKind {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Serialized shape of an [`Entity`]; deserialization goes back through
/// [`Entity::new`] so stored records are re-validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Instance identifier.
    pub id: String,
    /// Vocabulary-typed kind.
    pub kind: EntityKind,
    /// World position.
    pub position: Vector,
    /// Stack size.
    pub quantity: i64,
}

/// One observed mob, item, or block at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EntityRecord", into = "EntityRecord")]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    position: Vector,
    quantity: u32,
}

impl Entity {
    /// Build an entity from validated parts and a raw quantity.
    ///
    /// Mobs must have a quantity of exactly 1. Items and blocks accept any
    /// count from 0 up to `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidEntityError`] if the quantity is negative, too
    /// large, not 1 for a mob, or if the position is not finite.
    pub fn new(
        id: EntityId,
        kind: impl Into<EntityKind>,
        position: Vector,
        quantity: i64,
    ) -> Result<Self, InvalidEntityError> {
        let kind = kind.into();
        if !position.is_finite() {
            return Err(InvalidEntityError::NonFiniteCoordinate {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
        if quantity < 0 {
            return Err(InvalidEntityError::NegativeQuantity {
                id: id.0,
                quantity,
            });
        }
        if matches!(kind, EntityKind::Mob(_)) && quantity != 1 {
            return Err(InvalidEntityError::NonUnitMobQuantity {
                id: id.0,
                quantity,
            });
        }
        let Ok(count) = u32::try_from(quantity) else {
            return Err(InvalidEntityError::QuantityOverflow {
                id: id.0,
                quantity,
            });
        };
        Ok(Self {
            id,
            kind,
            position,
            quantity: count,
        })
    }

    /// Build a single mob instance.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEntityError::NonFiniteCoordinate`] if the position is
    /// not finite.
    pub fn mob(id: EntityId, mob: Mob, position: Vector) -> Result<Self, InvalidEntityError> {
        Self::new(id, mob, position, 1)
    }

    /// Instance identifier.
    pub const fn id(&self) -> &EntityId {
        &self.id
    }

    /// Vocabulary-typed kind.
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// World position.
    pub const fn position(&self) -> Vector {
        self.position
    }

    /// Stack size (always 1 for mobs).
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The mob type, if this entity is a mob.
    pub const fn as_mob(&self) -> Option<Mob> {
        match self.kind {
            EntityKind::Mob(mob) => Some(mob),
            _ => None,
        }
    }

    /// The item type, if this entity is an item.
    pub const fn as_item(&self) -> Option<Item> {
        match self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }

    /// The block type, if this entity is a block.
    pub const fn as_block(&self) -> Option<Block> {
        match self.kind {
            EntityKind::Block(block) => Some(block),
            _ => None,
        }
    }
}

impl TryFrom<EntityRecord> for Entity {
    type Error = InvalidEntityError;

    fn try_from(record: EntityRecord) -> Result<Self, Self::Error> {
        let id = EntityId::new(record.id)?;
        Self::new(id, record.kind, record.position, record.quantity)
    }
}

impl From<Entity> for EntityRecord {
    fn from(entity: Entity) -> Self {
        Self {
            id: entity.id.0,
            kind: entity.kind,
            position: entity.position,
            quantity: i64::from(entity.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> EntityId {
        EntityId::new(raw).unwrap_or_else(|_| EntityId(String::from("fallback")))
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 6.0, 3.0);
        assert_eq!(a + b, Vector::new(5.0, 8.0, 6.0));
        assert_eq!(b - a, Vector::new(3.0, 4.0, 0.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0, -3.0));
        assert_eq!(a.scale(2.0), Vector::new(2.0, 4.0, 6.0));
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
        assert!((a.horizontal_distance(b) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn vector_rejects_non_finite_coordinates() {
        assert!(Vector::try_new(0.0, 64.0, 0.0).is_ok());
        assert!(Vector::try_new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Vector::try_new(0.0, f64::INFINITY, 0.0).is_err());
        assert!(!Vector::new(0.0, 0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn vector_validation_is_const() {
        const SPAWN: Result<Vector, InvalidEntityError> = Vector::try_new(0.5, 64.0, 0.5);
        assert_eq!(SPAWN, Ok(Vector::new(0.5, 64.0, 0.5)));
    }

    #[test]
    fn distance_spans_all_three_axes() {
        let a = Vector::new(1.0, 1.0, 1.0);
        let b = Vector::new(3.0, 4.0, 7.0);
        assert!((a.distance(b) - 7.0).abs() < 1e-12);
        assert!((b.distance(a) - 7.0).abs() < 1e-12);
        assert!((a.horizontal_distance(b) - 40.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn yaw_towards_follows_engine_convention() {
        let origin = Vector::ORIGIN;
        let south = origin.yaw_towards(Vector::new(0.0, 0.0, 5.0));
        let west = origin.yaw_towards(Vector::new(-5.0, 3.0, 0.0));
        assert!(south.is_some_and(|yaw| yaw.abs() < 1e-9));
        assert!(west.is_some_and(|yaw| (yaw - 90.0).abs() < 1e-9));
        assert_eq!(origin.yaw_towards(Vector::new(0.0, 10.0, 0.0)), None);
    }

    #[test]
    fn entity_id_must_not_be_blank() {
        assert_eq!(EntityId::new(""), Err(InvalidEntityError::EmptyId));
        assert_eq!(EntityId::new("   "), Err(InvalidEntityError::EmptyId));
        assert_eq!(id("e1").as_str(), "e1");
    }

    #[test]
    fn cow_entity_builds() {
        let entity = Entity::new(id("e1"), Mob::Cow, Vector::new(0.0, 64.0, 0.0), 1).ok();
        assert_eq!(entity.as_ref().map(Entity::kind), Some(EntityKind::Mob(Mob::Cow)));
        assert_eq!(entity.as_ref().and_then(Entity::as_mob), Some(Mob::Cow));
        assert_eq!(entity.as_ref().and_then(Entity::as_item), None);
        assert_eq!(entity.as_ref().map(Entity::quantity), Some(1));
        assert_eq!(entity.as_ref().map(|e| e.id().as_str()), Some("e1"));
    }

    #[test]
    fn mobs_are_single_instances() {
        let err = Entity::new(id("m"), Mob::Pig, Vector::ORIGIN, 2).err();
        assert_eq!(
            err,
            Some(InvalidEntityError::NonUnitMobQuantity {
                id: String::from("m"),
                quantity: 2,
            })
        );
    }

    #[test]
    fn item_stacks_may_be_empty_but_not_negative() {
        assert!(Entity::new(id("i"), Item::Apple, Vector::ORIGIN, 0).is_ok());
        assert!(Entity::new(id("i"), Item::Apple, Vector::ORIGIN, 64).is_ok());
        let err = Entity::new(id("i"), Item::Apple, Vector::ORIGIN, -1).err();
        assert!(matches!(err, Some(InvalidEntityError::NegativeQuantity { quantity: -1, .. })));
        let err = Entity::new(id("i"), Item::Apple, Vector::ORIGIN, i64::MAX).err();
        assert!(matches!(err, Some(InvalidEntityError::QuantityOverflow { .. })));
    }

    #[test]
    fn entity_rejects_non_finite_position() {
        let err = Entity::new(id("b"), Block::Stone, Vector::new(f64::NAN, 0.0, 0.0), 1).err();
        assert!(matches!(err, Some(InvalidEntityError::NonFiniteCoordinate { .. })));
    }

    #[test]
    fn unknown_kind_never_reaches_an_entity() {
        let kind = EntityKind::resolve(EntityCategory::Mob, "NotAMob");
        assert_eq!(kind, Err(UnknownValueError::new("mob", "NotAMob")));
        let kind = EntityKind::resolve(EntityCategory::Block, "cake");
        assert_eq!(kind.map(EntityKind::category), Ok(EntityCategory::Block));
    }

    #[test]
    fn entity_serializes_with_tagged_kind() {
        let entity = Entity::new(id("drop-7"), Item::Bread, Vector::new(1.5, 63.0, -2.0), 3);
        let json = entity.ok().and_then(|e| serde_json::to_value(e).ok());
        assert_eq!(
            json,
            Some(serde_json::json!({
                "id": "drop-7",
                "kind": { "category": "item", "type": "bread" },
                "position": { "x": 1.5, "y": 63.0, "z": -2.0 },
                "quantity": 3,
            }))
        );
    }

    #[test]
    fn entity_deserialization_revalidates() {
        let valid = r#"{"id":"e1","kind":{"category":"mob","type":"Cow"},"position":{"x":0.0,"y":64.0,"z":0.0},"quantity":1}"#;
        let parsed: Result<Entity, _> = serde_json::from_str(valid);
        assert_eq!(parsed.ok().and_then(|e| e.as_mob()), Some(Mob::Cow));

        let unknown = r#"{"id":"e1","kind":{"category":"mob","type":"NotAMob"},"position":{"x":0.0,"y":64.0,"z":0.0},"quantity":1}"#;
        assert!(serde_json::from_str::<Entity>(unknown).is_err());

        let negative = r#"{"id":"e2","kind":{"category":"item","type":"apple"},"position":{"x":0.0,"y":64.0,"z":0.0},"quantity":-4}"#;
        assert!(serde_json::from_str::<Entity>(negative).is_err());

        let blank = r#"{"id":" ","kind":{"category":"item","type":"apple"},"position":{"x":0.0,"y":64.0,"z":0.0},"quantity":4}"#;
        assert!(serde_json::from_str::<Entity>(blank).is_err());
    }
}
