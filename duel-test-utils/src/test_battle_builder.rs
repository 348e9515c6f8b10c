use anyhow::Result;
use duel::{
    Battle,
    BattleEngineOptions,
    BattleEngineRandomizeDamage,
    BattleEngineSpeedTieResolution,
    BattleOptions,
    CombatantData,
    data::TypeChart,
    error::{
        WrapOptionError,
        WrapResultError,
    },
};

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    seed: Option<u64>,
    side_1: Option<CombatantData>,
    side_2: Option<CombatantData>,
    engine_options: BattleEngineOptions,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            seed: None,
            side_1: None,
            side_2: None,
            engine_options: BattleEngineOptions::default(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    ///
    /// A missing side is an error, so tests can build battles with invalid data.
    pub fn build(mut self) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        let side_1 = self.side_1.wrap_expectation("side 1 is missing")?;
        let side_2 = self.side_2.wrap_expectation("side 2 is missing")?;
        Battle::new(
            BattleOptions {
                seed: self.seed,
                side_1,
                side_2,
            },
            self.engine_options,
        )
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_side_1(mut self, combatant: CombatantData) -> Self {
        self.side_1 = Some(combatant);
        self
    }

    pub fn with_side_2(mut self, combatant: CombatantData) -> Self {
        self.side_2 = Some(combatant);
        self
    }

    /// Sets side 1 from a JSON combatant.
    pub fn with_side_1_json(self, json: &str) -> Result<Self> {
        let combatant = serde_json::from_str(json).wrap_error_with_message("invalid side 1")?;
        Ok(self.with_side_1(combatant))
    }

    /// Sets side 2 from a JSON combatant.
    pub fn with_side_2_json(self, json: &str) -> Result<Self> {
        let combatant = serde_json::from_str(json).wrap_error_with_message("invalid side 2")?;
        Ok(self.with_side_2(combatant))
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.engine_options.max_rounds = max_rounds;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.engine_options.level = level;
        self
    }

    pub fn with_type_chart(mut self, type_chart: TypeChart) -> Self {
        self.engine_options.type_chart = type_chart;
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_damage_randomization(
        mut self,
        randomize_damage: BattleEngineRandomizeDamage,
    ) -> Self {
        self.engine_options.randomize_damage = randomize_damage;
        self
    }

    pub fn with_speed_tie_resolution(
        mut self,
        speed_tie_resolution: BattleEngineSpeedTieResolution,
    ) -> Self {
        self.engine_options.speed_tie_resolution = speed_tie_resolution;
        self
    }
}

impl Default for TestBattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
