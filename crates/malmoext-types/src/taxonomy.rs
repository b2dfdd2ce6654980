//! The taxonomy abstraction shared by every closed vocabulary.
//!
//! A vocabulary is a Rust enum whose members each carry one underlying engine
//! value (a string such as `"Cow"` or an integer such as `180`). The
//! [`Taxonomy`] trait turns untrusted raw values into typed members through a
//! value-to-member table that is built once, on first use, and shared by every
//! thread for the rest of the process.
//!
//! Concrete vocabularies are declared with the crate-internal `vocabulary!`
//! macro, which generates the enum, its [`Taxonomy`] impl, the raw-value
//! [`Candidate`] impls, and serde support that round-trips through the
//! engine value.
//!
//! Membership checks are total: a raw value of the wrong shape (for example a
//! JSON number offered to a string vocabulary) is simply not contained.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::UnknownValueError;

/// A closed set of named constants mirroring identifiers defined by the game
/// engine.
pub trait Taxonomy: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The borrowed form of a raw engine value (`str` or `i32`).
    type Raw: ?Sized + Eq + Hash + fmt::Display;

    /// The owned form of a member's engine value.
    type Value: Copy + Eq + Hash + Borrow<Self::Raw> + fmt::Debug + Send + Sync + 'static;

    /// Short label used in error messages (e.g. `"mob"`).
    const VOCABULARY: &'static str;

    /// Every member, in declaration order.
    fn members() -> &'static [Self];

    /// The engine value carried by this member.
    fn value(self) -> Self::Value;

    /// The process-wide value-to-member table.
    fn lookup_table() -> &'static HashMap<Self::Value, Self>;

    /// Resolve a raw engine value to its member, if any.
    fn parse(raw: &Self::Raw) -> Option<Self> {
        Self::lookup_table().get(raw).copied()
    }

    /// Resolve a raw engine value, reporting unknown values as an error.
    fn try_parse(raw: &Self::Raw) -> Result<Self, UnknownValueError> {
        Self::parse(raw).ok_or_else(|| UnknownValueError::new(Self::VOCABULARY, raw.to_string()))
    }

    /// Whether `candidate` (a raw value or a member) designates a member of
    /// this vocabulary.
    fn contains<C>(candidate: &C) -> bool
    where
        C: Candidate<Self> + ?Sized,
    {
        candidate.resolve().is_some()
    }
}

/// Something that may designate a member of vocabulary `T`.
///
/// Implemented for the vocabulary's own members, for its raw primitive type,
/// and for [`serde_json::Value`] so loosely-typed observation payloads can be
/// checked without first being coerced.
pub trait Candidate<T: Taxonomy> {
    /// The member this candidate designates, or `None`.
    fn resolve(&self) -> Option<T>;
}

impl<T: Taxonomy> Candidate<T> for T {
    fn resolve(&self) -> Option<T> {
        let value = self.value();
        T::parse(Borrow::<T::Raw>::borrow(&value))
    }
}

/// Build the value-to-member table for `T` from its member list.
pub(crate) fn build_index<T: Taxonomy>() -> HashMap<T::Value, T> {
    T::members()
        .iter()
        .map(|member| (member.value(), *member))
        .collect()
}

/// Declares a closed vocabulary backed by string or `i32` engine values.
///
/// String vocabularies get a generated doc line per member naming its engine
/// identifier, followed by any doc comment written on the member; integer
/// vocabularies require an explicit doc comment on every member.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: str as $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("Engine identifier `", $raw, "`.")]
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// The engine identifier for this member.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $raw,)+
                }
            }

            /// The Rust-side member name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl $crate::taxonomy::Taxonomy for $name {
            type Raw = str;
            type Value = &'static str;

            const VOCABULARY: &'static str = $label;

            fn members() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn value(self) -> &'static str {
                self.as_str()
            }

            fn lookup_table() -> &'static ::std::collections::HashMap<&'static str, Self> {
                static INDEX: ::std::sync::LazyLock<::std::collections::HashMap<&'static str, $name>> =
                    ::std::sync::LazyLock::new($crate::taxonomy::build_index::<$name>);
                &INDEX
            }
        }

        impl $crate::taxonomy::Candidate<$name> for str {
            fn resolve(&self) -> Option<$name> {
                <$name as $crate::taxonomy::Taxonomy>::parse(self)
            }
        }

        impl $crate::taxonomy::Candidate<$name> for ::std::string::String {
            fn resolve(&self) -> Option<$name> {
                <$name as $crate::taxonomy::Taxonomy>::parse(self.as_str())
            }
        }

        impl $crate::taxonomy::Candidate<$name> for ::serde_json::Value {
            fn resolve(&self) -> Option<$name> {
                self.as_str()
                    .and_then(<$name as $crate::taxonomy::Taxonomy>::parse)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::taxonomy::Taxonomy>::try_parse(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::taxonomy::Taxonomy>::try_parse(raw.as_str())
                    .map_err(::serde::de::Error::custom)
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub enum $name:ident: i32 as $label:literal {
            $($(#[$vmeta:meta])+ $variant:ident => $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])+
                $variant,
            )+
        }

        impl $name {
            /// The engine value for this member.
            pub const fn as_i32(self) -> i32 {
                match self {
                    $(Self::$variant => $raw,)+
                }
            }

            /// The Rust-side member name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl $crate::taxonomy::Taxonomy for $name {
            type Raw = i32;
            type Value = i32;

            const VOCABULARY: &'static str = $label;

            fn members() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn value(self) -> i32 {
                self.as_i32()
            }

            fn lookup_table() -> &'static ::std::collections::HashMap<i32, Self> {
                static INDEX: ::std::sync::LazyLock<::std::collections::HashMap<i32, $name>> =
                    ::std::sync::LazyLock::new($crate::taxonomy::build_index::<$name>);
                &INDEX
            }
        }

        impl $crate::taxonomy::Candidate<$name> for i32 {
            fn resolve(&self) -> Option<$name> {
                <$name as $crate::taxonomy::Taxonomy>::parse(self)
            }
        }

        impl $crate::taxonomy::Candidate<$name> for ::serde_json::Value {
            fn resolve(&self) -> Option<$name> {
                self.as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .and_then(|n| <$name as $crate::taxonomy::Taxonomy>::parse(&n))
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::error::UnknownValueError;

            fn try_from(raw: i32) -> Result<Self, Self::Error> {
                <$name as $crate::taxonomy::Taxonomy>::try_parse(&raw)
            }
        }

        impl From<$name> for i32 {
            fn from(member: $name) -> Self {
                member.as_i32()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.as_i32())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <i32 as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::taxonomy::Taxonomy>::try_parse(&raw)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use vocabulary;
