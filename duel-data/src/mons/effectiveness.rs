use std::fmt;

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::TypeEffectiveness;

/// Combined type effectiveness of a move against every type of its target.
///
/// Each defending type contributes a factor of 0, 1/2, 1 or 2, so the combined multiplier for a
/// dual-typed defender is always one of 0, 1/4, 1/2, 1, 2 or 4.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Effectiveness {
    #[string = "no effect"]
    NoEffect,
    #[string = "barely effective"]
    BarelyEffective,
    #[string = "resisted"]
    Resisted,
    #[string = "normal"]
    #[default]
    Normal,
    #[string = "super effective"]
    SuperEffective,
    #[string = "ultra effective"]
    UltraEffective,
}

impl Effectiveness {
    /// The damage multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::NoEffect => 0.0,
            Self::BarelyEffective => 0.25,
            Self::Resisted => 0.5,
            Self::Normal => 1.0,
            Self::SuperEffective => 2.0,
            Self::UltraEffective => 4.0,
        }
    }

    /// Is the target immune?
    pub fn is_immune(&self) -> bool {
        *self == Self::NoEffect
    }

    /// Folds the matchup against one more defending type into this effectiveness.
    ///
    /// Immunity absorbs everything. The result saturates at the 1/4 and 4 bounds.
    pub fn combine(self, matchup: TypeEffectiveness) -> Self {
        let step = match self {
            Self::NoEffect => return Self::NoEffect,
            Self::BarelyEffective => -2,
            Self::Resisted => -1,
            Self::Normal => 0,
            Self::SuperEffective => 1,
            Self::UltraEffective => 2,
        };
        let step = match matchup {
            TypeEffectiveness::None => return Self::NoEffect,
            TypeEffectiveness::Weak => step - 1,
            TypeEffectiveness::Normal => step,
            TypeEffectiveness::Strong => step + 1,
        };
        match step {
            i8::MIN..=-2 => Self::BarelyEffective,
            -1 => Self::Resisted,
            0 => Self::Normal,
            1 => Self::SuperEffective,
            _ => Self::UltraEffective,
        }
    }

    /// The battle log event name for this effectiveness, if it is worth announcing.
    pub fn event(&self) -> Option<&'static str> {
        match self {
            Self::NoEffect => Some("immune"),
            Self::BarelyEffective | Self::Resisted => Some("resisted"),
            Self::Normal => None,
            Self::SuperEffective | Self::UltraEffective => Some("supereffective"),
        }
    }

    /// The message shown to players after an attack with this effectiveness lands.
    pub fn message(self) -> EffectivenessMessage {
        EffectivenessMessage(self)
    }
}

/// A human-readable message, as shown after an attack lands.
pub struct EffectivenessMessage(Effectiveness);

impl fmt::Display for EffectivenessMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Effectiveness::NoEffect => write!(f, "No effect!"),
            Effectiveness::BarelyEffective => write!(f, "It's barely effective..."),
            Effectiveness::Resisted => write!(f, "It's not very effective..."),
            Effectiveness::Normal => Ok(()),
            Effectiveness::SuperEffective => write!(f, "It's super effective!"),
            Effectiveness::UltraEffective => write!(f, "It's ultra effective!"),
        }
    }
}
