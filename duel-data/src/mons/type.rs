use std::{
    fmt,
    str::FromStr,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use thiserror::Error;

use crate::Effectiveness;

/// The type of a creature or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// All 18 types, in chart order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// Parses a type name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, UnknownTypeError> {
        Self::from_str(name.trim()).map_err(|_| UnknownTypeError::new(name))
    }
}

/// A type name that does not belong to the type chart.
///
/// Never fatal: the offending type contributes a neutral multiplier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type \"{name}\"")]
pub struct UnknownTypeError {
    name: String,
}

impl UnknownTypeError {
    /// Constructs a new unknown type error.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self { name: name.into() }
    }

    /// The type name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value < 0f32 || value.abs() < f32::EPSILON {
            Self::None
        } else if value < 0.5 || (value - 0.5).abs() < f32::EPSILON {
            Self::Weak
        } else if value < 1f32 || (value - 1f32).abs() < f32::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f32(f32::from(*self)),
            _ => serializer.serialize_u32(f32::from(*self) as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// Non-neutral matchups of the standard chart, keyed by attacking type.
const STANDARD_MATCHUPS: &[(Type, &[(Type, TypeEffectiveness)])] = {
    use Type::*;
    use TypeEffectiveness::{
        None as Immune,
        Strong,
        Weak,
    };
    &[
        (Normal, &[(Rock, Weak), (Ghost, Immune), (Steel, Weak)]),
        (
            Fighting,
            &[
                (Normal, Strong),
                (Flying, Weak),
                (Poison, Weak),
                (Rock, Strong),
                (Bug, Weak),
                (Ghost, Immune),
                (Steel, Strong),
                (Psychic, Weak),
                (Ice, Strong),
                (Dark, Strong),
                (Fairy, Weak),
            ],
        ),
        (
            Flying,
            &[
                (Fighting, Strong),
                (Rock, Weak),
                (Bug, Strong),
                (Steel, Weak),
                (Grass, Strong),
                (Electric, Weak),
            ],
        ),
        (
            Poison,
            &[
                (Poison, Weak),
                (Ground, Weak),
                (Rock, Weak),
                (Ghost, Weak),
                (Steel, Immune),
                (Grass, Strong),
                (Fairy, Strong),
            ],
        ),
        (
            Ground,
            &[
                (Flying, Immune),
                (Poison, Strong),
                (Rock, Strong),
                (Bug, Weak),
                (Steel, Strong),
                (Fire, Strong),
                (Grass, Weak),
                (Electric, Strong),
            ],
        ),
        (
            Rock,
            &[
                (Fighting, Weak),
                (Flying, Strong),
                (Ground, Weak),
                (Bug, Strong),
                (Steel, Weak),
                (Fire, Strong),
                (Ice, Strong),
            ],
        ),
        (
            Bug,
            &[
                (Fighting, Weak),
                (Flying, Weak),
                (Poison, Weak),
                (Ghost, Weak),
                (Steel, Weak),
                (Fire, Weak),
                (Grass, Strong),
                (Psychic, Strong),
                (Dark, Strong),
                (Fairy, Weak),
            ],
        ),
        (
            Ghost,
            &[
                (Normal, Immune),
                (Ghost, Strong),
                (Psychic, Strong),
                (Dark, Weak),
            ],
        ),
        (
            Steel,
            &[
                (Rock, Strong),
                (Steel, Weak),
                (Fire, Weak),
                (Water, Weak),
                (Electric, Weak),
                (Ice, Strong),
                (Fairy, Strong),
            ],
        ),
        (
            Fire,
            &[
                (Rock, Weak),
                (Bug, Strong),
                (Steel, Strong),
                (Fire, Weak),
                (Water, Weak),
                (Grass, Strong),
                (Ice, Strong),
                (Dragon, Weak),
            ],
        ),
        (
            Water,
            &[
                (Ground, Strong),
                (Rock, Strong),
                (Fire, Strong),
                (Water, Weak),
                (Grass, Weak),
                (Dragon, Weak),
            ],
        ),
        (
            Grass,
            &[
                (Flying, Weak),
                (Poison, Weak),
                (Ground, Strong),
                (Rock, Strong),
                (Bug, Weak),
                (Steel, Weak),
                (Fire, Weak),
                (Water, Strong),
                (Grass, Weak),
                (Dragon, Weak),
            ],
        ),
        (
            Electric,
            &[
                (Flying, Strong),
                (Ground, Immune),
                (Water, Strong),
                (Grass, Weak),
                (Electric, Weak),
                (Dragon, Weak),
            ],
        ),
        (
            Psychic,
            &[
                (Fighting, Strong),
                (Poison, Strong),
                (Steel, Weak),
                (Psychic, Weak),
                (Dark, Immune),
            ],
        ),
        (
            Ice,
            &[
                (Flying, Strong),
                (Ground, Strong),
                (Steel, Weak),
                (Fire, Weak),
                (Water, Weak),
                (Grass, Strong),
                (Ice, Weak),
                (Dragon, Strong),
            ],
        ),
        (Dragon, &[(Steel, Weak), (Dragon, Strong), (Fairy, Immune)]),
        (
            Dark,
            &[
                (Fighting, Weak),
                (Ghost, Strong),
                (Psychic, Strong),
                (Dark, Weak),
                (Fairy, Weak),
            ],
        ),
        (
            Fairy,
            &[
                (Fighting, Strong),
                (Poison, Weak),
                (Steel, Weak),
                (Fire, Weak),
                (Dragon, Strong),
                (Dark, Strong),
            ],
        ),
    ]
};

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// Matchups missing from the chart are neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// The standard 18-type chart.
    pub fn standard() -> Self {
        Self::from_filled(
            STANDARD_MATCHUPS
                .iter()
                .map(|(offense, row)| (*offense, row.iter().copied().collect()))
                .collect(),
        )
    }

    /// Looks up the effectiveness of a single attacking type against a single defending type.
    pub fn matchup(&self, offense: Type, defense: Type) -> TypeEffectiveness {
        self.types
            .get(&offense)
            .and_then(|row| row.get(&defense))
            .copied()
            .unwrap_or_default()
    }

    /// Combined effectiveness of an attacking type against every type of a defender.
    pub fn effectiveness(&self, offense: Type, defense: &[Type]) -> Effectiveness {
        defense
            .iter()
            .fold(Effectiveness::Normal, |effectiveness, defense| {
                effectiveness.combine(self.matchup(offense, *defense))
            })
    }

    /// Combined effectiveness, with types given by name.
    ///
    /// Unknown names never fail the lookup. An unknown defending type contributes nothing to the
    /// result, and an unknown attacking type makes the whole matchup [`Effectiveness::Normal`].
    /// Every unknown name is returned alongside the result, in the order it was given.
    pub fn effectiveness_of_names<S>(
        &self,
        offense: &str,
        defense: &[S],
    ) -> (Effectiveness, Vec<UnknownTypeError>)
    where
        S: AsRef<str>,
    {
        let offense = Type::from_name(offense);
        let (defense, mut unknown): (Vec<_>, Vec<_>) = defense
            .iter()
            .map(|name| Type::from_name(name.as_ref()))
            .partition_result();
        match offense {
            Ok(offense) => (self.effectiveness(offense, &defense), unknown),
            Err(err) => {
                unknown.insert(0, err);
                (Effectiveness::Normal, unknown)
            }
        }
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}
