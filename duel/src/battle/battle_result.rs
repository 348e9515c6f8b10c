use duel_data::Effectiveness;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::battle::Side;

/// What happened when a combatant tried to act.
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
pub enum ActionOutcome {
    #[string = "hit"]
    Hit,
    #[string = "miss"]
    Miss,
    /// The combatant fainted before it could act.
    #[string = "skipped"]
    Skipped,
}

/// One action in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLogEntry {
    pub round: u32,
    pub attacker_side: Side,
    pub attacker: String,
    pub defender: String,
    #[serde(rename = "move")]
    pub move_name: String,
    pub outcome: ActionOutcome,
    /// HP removed from the defender. 0 on a miss, a skip or an immune hit.
    pub damage: u16,
    pub defender_hp: u16,
    /// Only set for hits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<Effectiveness>,
}

impl RoundLogEntry {
    /// Did the move hit?
    pub fn hit(&self) -> bool {
        self.outcome == ActionOutcome::Hit
    }

    /// A short human-readable note on the action.
    pub fn note(&self) -> String {
        match (self.outcome, self.effectiveness) {
            (ActionOutcome::Miss, _) => "Missed!".to_owned(),
            (ActionOutcome::Skipped, _) => format!("{} fainted before acting.", self.attacker),
            (ActionOutcome::Hit, Some(effectiveness)) => effectiveness.message().to_string(),
            (ActionOutcome::Hit, None) => String::new(),
        }
    }
}

/// HP of both combatants at the end of a round.
///
/// Round 0 is the start of the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpSnapshot {
    pub round: u32,
    pub side_1: u16,
    pub side_2: u16,
}

impl HpSnapshot {
    /// HP of the combatant on the given side.
    pub fn hp(&self, side: Side) -> u16 {
        match side {
            Side::One => self.side_1,
            Side::Two => self.side_2,
        }
    }
}

/// The outcome of a concluded battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    winner: Side,
    winner_name: String,
    loser_name: String,
    rounds: u32,
    seed: u64,
    entries: Vec<RoundLogEntry>,
    hp_history: Vec<HpSnapshot>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    logs: Vec<String>,
}

impl BattleResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        winner: Side,
        winner_name: String,
        loser_name: String,
        rounds: u32,
        seed: u64,
        entries: Vec<RoundLogEntry>,
        hp_history: Vec<HpSnapshot>,
        warnings: Vec<String>,
        logs: Vec<String>,
    ) -> Self {
        Self {
            winner,
            winner_name,
            loser_name,
            rounds,
            seed,
            entries,
            hp_history,
            warnings,
            logs,
        }
    }

    pub fn winner(&self) -> Side {
        self.winner
    }

    pub fn loser(&self) -> Side {
        self.winner.foe()
    }

    pub fn winner_name(&self) -> &str {
        &self.winner_name
    }

    pub fn loser_name(&self) -> &str {
        &self.loser_name
    }

    /// Number of rounds played, including the final one.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The seed the battle's random number generator started from.
    ///
    /// Running the same setup with this seed replays the battle exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Every action, in order.
    pub fn entries(&self) -> &[RoundLogEntry] {
        &self.entries
    }

    /// HP after every round, starting with round 0.
    pub fn hp_history(&self) -> &[HpSnapshot] {
        &self.hp_history
    }

    /// Non-fatal data problems found when the battle was set up.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The full event log.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod battle_result_test {
    use duel_data::Effectiveness;
    use pretty_assertions::assert_eq;

    use crate::battle::{
        ActionOutcome,
        RoundLogEntry,
        Side,
    };

    fn entry(outcome: ActionOutcome, effectiveness: Option<Effectiveness>) -> RoundLogEntry {
        RoundLogEntry {
            round: 1,
            attacker_side: Side::One,
            attacker: "Charmander".to_owned(),
            defender: "Bulbasaur".to_owned(),
            move_name: "Ember".to_owned(),
            outcome,
            damage: 0,
            defender_hp: 100,
            effectiveness,
        }
    }

    #[test]
    fn notes_describe_the_action() {
        assert_eq!(entry(ActionOutcome::Miss, None).note(), "Missed!");
        assert_eq!(
            entry(ActionOutcome::Hit, Some(Effectiveness::SuperEffective)).note(),
            "It's super effective!"
        );
        assert_eq!(
            entry(ActionOutcome::Hit, Some(Effectiveness::Normal)).note(),
            ""
        );
        assert_eq!(
            entry(ActionOutcome::Skipped, None).note(),
            "Charmander fainted before acting."
        );
    }

    #[test]
    fn serializes_entry() {
        let entry = entry(ActionOutcome::Hit, Some(Effectiveness::Resisted));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "round": 1,
                "attacker_side": "side_1",
                "attacker": "Charmander",
                "defender": "Bulbasaur",
                "move": "Ember",
                "outcome": "hit",
                "damage": 0,
                "defender_hp": 100,
                "effectiveness": "resisted",
            })
        );
    }
}
