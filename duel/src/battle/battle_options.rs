use anyhow::Result;
use duel_data::TypeChart;
use duel_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        CombatantData,
        Side,
    },
    error::{
        InvalidBattleSetupError,
        WrapError,
    },
};

/// Battle engine option for how damage should be randomized in the damage calculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEngineRandomizeDamage {
    /// Randomize the damage.
    ///
    /// This is the default behavior.
    #[default]
    Randomize,
    /// Only use the maximum damage value.
    Max,
    /// Only use the minimum damage value.
    Min,
}

/// How the battle engine should resolve ties when ordering combatants by speed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEngineSpeedTieResolution {
    /// Resolves ties randomly by advancing RNG.
    #[default]
    Random,
    /// Do not resolve ties and keep side 1 first.
    Keep,
    /// Reverse the original order, so side 2 goes first.
    Reverse,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_max_rounds() -> u32 {
    100
}

fn default_level() -> u8 {
    50
}

/// Options that change how the battle engine itself behaves, which is not specific to any
/// individual pair of combatants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Number of rounds that may complete without a faint before the battle is abandoned as a
    /// stalemate.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,

    /// The level every combatant fights at.
    #[serde(default = "default_level")]
    pub level: u8,

    /// Describes how damage should be randomized in the damage calculation.
    ///
    /// By default, damage is randomized at the end of the damage calculation. This is useful for
    /// tests against the damage calculator to discover the minimum and maximum damage values.
    #[serde(default)]
    pub randomize_damage: BattleEngineRandomizeDamage,

    /// Describes how ties should be resolved when ordering combatants by speed.
    ///
    /// By default, speed ties are resolved randomly. Tests can avoid using RNG for turn order
    /// completely.
    #[serde(default)]
    pub speed_tie_resolution: BattleEngineSpeedTieResolution,

    /// The type chart used for effectiveness.
    #[serde(default)]
    pub type_chart: TypeChart,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl BattleEngineOptions {
    /// Validates the engine options.
    pub fn validate(&self) -> Result<()> {
        let mut problems = InvalidBattleSetupError::default();
        if self.max_rounds == 0 {
            problems.push("max_rounds must be positive");
        }
        if !(1..=100).contains(&self.level) {
            problems.push(format!("level {} must be between 1 and 100", self.level));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.wrap_error())
        }
    }
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
            level: default_level(),
            randomize_damage: BattleEngineRandomizeDamage::default(),
            speed_tie_resolution: BattleEngineSpeedTieResolution::default(),
            type_chart: TypeChart::default(),
            rng_factory: default_rng_factory(),
        }
    }
}

/// Core options for a new battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    #[serde(default)]
    pub seed: Option<u64>,
    /// One side of the battle.
    pub side_1: CombatantData,
    /// The other side of the battle.
    pub side_2: CombatantData,
}

impl BattleOptions {
    /// The combatant on the given side.
    pub fn side(&self, side: Side) -> &CombatantData {
        match side {
            Side::One => &self.side_1,
            Side::Two => &self.side_2,
        }
    }

    /// Validates the battle options.
    ///
    /// Out-of-range accuracy is reported on its own, before any other problem. Every other problem
    /// on both sides is collected into a single [`InvalidBattleSetupError`].
    pub fn validate(&self) -> Result<()> {
        for side in [Side::One, Side::Two] {
            self.side(side).validate_accuracy()?;
        }
        let mut problems = InvalidBattleSetupError::default();
        for side in [Side::One, Side::Two] {
            let foe = self.side(side.foe());
            problems.extend(self.side(side).problems(side, foe));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.wrap_error())
        }
    }
}
