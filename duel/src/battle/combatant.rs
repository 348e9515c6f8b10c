use anyhow::Result;
use duel_data::{
    Accuracy,
    MoveCategory,
    MoveData,
    StatTable,
    Type,
    UnknownTypeError,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::SpeedOrderable,
    error::invalid_accuracy_error,
};

/// One of the two sides of a battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Side {
    #[string = "side_1"]
    #[alias = "1"]
    One,
    #[string = "side_2"]
    #[alias = "2"]
    Two,
}

impl Side {
    /// The opposing side.
    pub fn foe(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// The side number, starting at 1.
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// A single combatant, as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantData {
    /// Name of the combatant.
    pub name: String,
    /// Type names, in order.
    ///
    /// Names that are not on the type chart are dropped with a warning when the battle is set up.
    pub types: Vec<String>,
    /// Stats.
    pub stats: StatTable,
    /// The one move the combatant uses every round.
    #[serde(rename = "move", default)]
    pub move_data: Option<MoveData>,
    /// HP at the start of the battle.
    ///
    /// Defaults to full HP. A battle only starts with combatants at full HP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_hp: Option<u16>,
}

impl CombatantData {
    /// Checks that the chosen move's accuracy is a percentage a move can be given.
    pub fn validate_accuracy(&self) -> Result<()> {
        match self.move_data.as_ref().map(|move_data| move_data.accuracy) {
            Some(Accuracy::Chance(accuracy)) if !(1..=100).contains(&accuracy) => {
                Err(invalid_accuracy_error(accuracy))
            }
            _ => Ok(()),
        }
    }

    /// Every reason this combatant cannot battle the given foe.
    pub fn problems(&self, side: Side, foe: &CombatantData) -> Vec<String> {
        let mut problems = Vec::new();
        let who = if self.name.is_empty() {
            problems.push(format!("{side} has no name"));
            side.to_string()
        } else {
            format!("{} ({side})", self.name)
        };

        if !(1..=2).contains(&self.types.len()) {
            problems.push(format!(
                "{who} must have 1 or 2 types, found {}",
                self.types.len()
            ));
        }

        for (stat, value) in [
            ("hp", self.stats.hp),
            ("atk", self.stats.atk),
            ("def", self.stats.def),
            ("spe", self.stats.spe),
        ] {
            if value == 0 {
                problems.push(format!("{who} has 0 {stat}"));
            }
        }

        if let Some(current_hp) = self.current_hp {
            if current_hp != self.stats.hp {
                problems.push(format!(
                    "{who} must start at full HP, found {current_hp}/{}",
                    self.stats.hp
                ));
            }
        }

        match &self.move_data {
            None => problems.push(format!("{who} has no move")),
            Some(move_data) => {
                if move_data.category == MoveCategory::Status {
                    problems.push(format!(
                        "{who} uses {}, which is a status move",
                        move_data.name
                    ));
                }
                if move_data.base_power <= 0 {
                    problems.push(format!(
                        "{who} uses {}, which has power {}",
                        move_data.name, move_data.base_power
                    ));
                }
                if move_data.category == MoveCategory::Special && self.stats.spa == 0 {
                    problems.push(format!("{who} has 0 spa for a special move"));
                }
            }
        }

        if let Some(MoveCategory::Special) = foe.move_data.as_ref().map(|m| m.category) {
            if self.stats.spd == 0 {
                problems.push(format!("{who} has 0 spd against a special move"));
            }
        }

        problems
    }
}

/// A combatant in a battle.
///
/// Everything but HP is fixed when the battle is created.
#[derive(Debug, Clone)]
pub struct Combatant {
    side: Side,
    name: String,
    types: Vec<Type>,
    stats: StatTable,
    move_data: MoveData,
    move_type: Option<Type>,
    hp: u16,
}

impl Combatant {
    /// Creates a combatant from validated data.
    ///
    /// Type names that do not resolve are returned, so that they can be reported as warnings.
    pub(crate) fn new(side: Side, data: CombatantData) -> (Self, Vec<UnknownTypeError>) {
        let mut unknown = Vec::new();
        let mut types = Vec::with_capacity(data.types.len());
        for name in &data.types {
            match Type::from_name(name) {
                Ok(typ) => {
                    if !types.contains(&typ) {
                        types.push(typ);
                    }
                }
                Err(err) => unknown.push(err),
            }
        }
        let move_data = data.move_data.unwrap_or_default();
        let move_type = match Type::from_name(&move_data.primary_type) {
            Ok(typ) => Some(typ),
            Err(err) => {
                unknown.push(err);
                None
            }
        };
        let combatant = Self {
            side,
            name: data.name,
            types,
            hp: data.stats.hp,
            stats: data.stats,
            move_data,
            move_type,
        };
        (combatant, unknown)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Known types. May be empty if every type name was unknown.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn move_data(&self) -> &MoveData {
        &self.move_data
    }

    /// The type of the move, if it is on the type chart.
    pub fn move_type(&self) -> Option<Type> {
        self.move_type
    }

    pub fn hp(&self) -> u16 {
        self.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Health, as written to the battle log.
    pub fn health(&self) -> String {
        format!("{}/{}", self.hp, self.stats.hp)
    }

    /// The stat used when attacking with the combatant's own move.
    pub fn attack_stat(&self) -> u16 {
        match self.move_data.category.offensive_stat() {
            Some(stat) => self.stats.get(stat),
            None => 0,
        }
    }

    /// The stat used when defending against a move of the given category.
    pub fn defense_stat(&self, category: MoveCategory) -> u16 {
        match category.defensive_stat() {
            Some(stat) => self.stats.get(stat),
            None => 0,
        }
    }

    /// Subtracts damage from HP, clamping at 0.
    ///
    /// Returns the HP actually lost.
    pub(crate) fn apply_damage(&mut self, damage: u32) -> u16 {
        let lost = self.hp.min(u16::try_from(damage).unwrap_or(u16::MAX));
        self.hp -= lost;
        lost
    }
}

impl SpeedOrderable for Combatant {
    fn speed(&self) -> u32 {
        self.stats.spe as u32
    }
}

#[cfg(test)]
mod combatant_test {
    use duel_data::{
        Type,
        UnknownTypeError,
    };
    use pretty_assertions::assert_eq;

    use crate::battle::{
        Combatant,
        CombatantData,
        Side,
    };

    fn data(types: &[&str], move_type: &str) -> CombatantData {
        serde_json::from_value(serde_json::json!({
            "name": "Ditto",
            "types": types,
            "stats": { "hp": 48, "atk": 48, "def": 48, "spa": 48, "spd": 48, "spe": 48 },
            "move": { "name": "Pound", "type": move_type, "power": 40 },
        }))
        .unwrap()
    }

    #[test]
    fn sides_are_opposites() {
        assert_eq!(Side::One.foe(), Side::Two);
        assert_eq!(Side::Two.foe(), Side::One);
        assert_eq!(Side::One.to_string(), "side_1");
        assert_eq!("2".parse::<Side>().unwrap(), Side::Two);
    }

    #[test]
    fn valid_data_has_no_problems() {
        let data = data(&["normal"], "normal");
        assert_eq!(data.problems(Side::One, &data), Vec::<String>::new());
    }

    #[test]
    fn collects_every_problem() {
        let mut bad = data(&[], "normal");
        bad.stats.atk = 0;
        bad.current_hp = Some(10);
        bad.move_data.as_mut().unwrap().base_power = 0;
        let foe = data(&["normal"], "normal");
        assert_eq!(
            bad.problems(Side::Two, &foe),
            vec![
                "Ditto (side_2) must have 1 or 2 types, found 0",
                "Ditto (side_2) has 0 atk",
                "Ditto (side_2) must start at full HP, found 10/48",
                "Ditto (side_2) uses Pound, which has power 0",
            ]
        );

        bad.move_data = None;
        assert!(
            bad.problems(Side::Two, &foe)
                .contains(&"Ditto (side_2) has no move".to_owned())
        );
    }

    #[test]
    fn resolves_types_and_reports_unknown_names() {
        let (combatant, unknown) = Combatant::new(Side::One, data(&["fire", "Shadow"], "Cosmic"));
        assert_eq!(combatant.types(), &[Type::Fire]);
        assert_eq!(combatant.move_type(), None);
        assert_eq!(
            unknown,
            vec![
                UnknownTypeError::new("Shadow"),
                UnknownTypeError::new("Cosmic")
            ]
        );
    }

    #[test]
    fn clamps_damage_at_zero_hp() {
        let (mut combatant, _) = Combatant::new(Side::One, data(&["normal"], "normal"));
        assert_eq!(combatant.apply_damage(8), 8);
        assert_eq!(combatant.health(), "40/48");
        assert_eq!(combatant.apply_damage(100_000), 40);
        assert_eq!(combatant.hp(), 0);
        assert!(combatant.is_fainted());
        assert_eq!(combatant.apply_damage(5), 0);
    }
}
