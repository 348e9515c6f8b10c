use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// The category of a move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "Physical"]
    #[default]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}

impl MoveCategory {
    /// The attacker's stat that powers a move of this category.
    pub fn offensive_stat(&self) -> Option<Stat> {
        match self {
            Self::Physical => Some(Stat::Atk),
            Self::Special => Some(Stat::SpAtk),
            Self::Status => None,
        }
    }

    /// The defender's stat that resists a move of this category.
    pub fn defensive_stat(&self) -> Option<Stat> {
        match self {
            Self::Physical => Some(Stat::Def),
            Self::Special => Some(Stat::SpDef),
            Self::Status => None,
        }
    }
}

#[cfg(test)]
mod move_category_test {
    use crate::{
        MoveCategory,
        Stat,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(MoveCategory::Physical, "Physical");
        test_string_serialization(MoveCategory::Special, "Special");
        test_string_serialization(MoveCategory::Status, "Status");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("physical", MoveCategory::Physical);
        test_string_deserialization("special", MoveCategory::Special);
        test_string_deserialization("status", MoveCategory::Status);
    }

    #[test]
    fn selects_stats_by_category() {
        assert_eq!(MoveCategory::Physical.offensive_stat(), Some(Stat::Atk));
        assert_eq!(MoveCategory::Physical.defensive_stat(), Some(Stat::Def));
        assert_eq!(MoveCategory::Special.offensive_stat(), Some(Stat::SpAtk));
        assert_eq!(MoveCategory::Special.defensive_stat(), Some(Stat::SpDef));
        assert_eq!(MoveCategory::Status.offensive_stat(), None);
    }
}
