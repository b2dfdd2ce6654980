//! Error types for the `malmoext-types` crate.
//!
//! Validation never panics. Raw values that fall outside a vocabulary surface
//! as [`UnknownValueError`]; records that break their construction invariants
//! surface as [`InvalidEntityError`]. [`TypesError`] unifies both for callers
//! that do not care which stage failed.

/// A raw value did not match any member of the named vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} value: {value:?}")]
pub struct UnknownValueError {
    /// Label of the vocabulary that was consulted (e.g. `"mob"`).
    pub vocabulary: &'static str,
    /// The rejected raw value, rendered as text.
    pub value: String,
}

impl UnknownValueError {
    /// Create an error for `value` rejected by `vocabulary`.
    pub fn new(vocabulary: &'static str, value: impl Into<String>) -> Self {
        Self {
            vocabulary,
            value: value.into(),
        }
    }
}

/// An entity record could not be built because one of its fields broke an
/// invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidEntityError {
    /// The instance identifier was empty or whitespace only.
    #[error("entity id must not be empty")]
    EmptyId,

    /// A negative quantity was observed.
    #[error("entity {id} has negative quantity {quantity}")]
    NegativeQuantity {
        /// The offending entity.
        id: String,
        /// The observed quantity.
        quantity: i64,
    },

    /// The quantity does not fit the record's count type.
    #[error("entity {id} quantity {quantity} exceeds the supported maximum")]
    QuantityOverflow {
        /// The offending entity.
        id: String,
        /// The observed quantity.
        quantity: i64,
    },

    /// Mobs are single instances and must carry a quantity of exactly one.
    #[error("mob entity {id} must have quantity 1, got {quantity}")]
    NonUnitMobQuantity {
        /// The offending entity.
        id: String,
        /// The observed quantity.
        quantity: i64,
    },

    /// A position coordinate was NaN or infinite.
    #[error("non-finite coordinate in position ({x}, {y}, {z})")]
    NonFiniteCoordinate {
        /// X coordinate as observed.
        x: f64,
        /// Y coordinate as observed.
        y: f64,
        /// Z coordinate as observed.
        z: f64,
    },
}

/// Any failure produced by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypesError {
    /// A raw value was not part of its vocabulary.
    #[error(transparent)]
    Unknown(#[from] UnknownValueError),

    /// A record failed its construction invariants.
    #[error(transparent)]
    InvalidEntity(#[from] InvalidEntityError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_message_names_vocabulary() {
        let err = UnknownValueError::new("mob", "Dragon");
        assert_eq!(err.to_string(), "unknown mob value: \"Dragon\"");
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let err: TypesError = InvalidEntityError::EmptyId.into();
        assert_eq!(err.to_string(), "entity id must not be empty");
    }
}
