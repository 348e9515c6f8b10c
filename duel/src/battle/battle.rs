use anyhow::Result;
use duel_data::Effectiveness;
use duel_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use log::{
    debug,
    info,
    warn,
};

use crate::{
    battle::{
        ActionOutcome,
        BattleEngineOptions,
        BattleEngineRandomizeDamage,
        BattleOptions,
        BattleResult,
        Combatant,
        DamageContext,
        HpSnapshot,
        MAX_VARIANCE,
        MIN_VARIANCE,
        RoundLogEntry,
        Side,
        calculate_damage,
        order_by_speed,
        resolve_hit,
    },
    battle_event,
    error::{
        WrapResultError,
        general_error,
        stalemate_exceeded_error,
    },
    log::EventLog,
};

/// Where a round in progress is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStep {
    FirstActs,
    SecondActs,
    RoundComplete,
}

/// The state of a [`Battle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    NotStarted,
    /// `round` is the latest round to begin. Round 0 completes when the battle starts.
    InProgress { round: u32, step: RoundStep },
    Concluded { winner: Side },
}

/// A battle between two combatants.
///
/// Each combatant uses its one move every round until one of them faints. Every round, the faster
/// combatant acts first. A combatant that faints before its turn does not act.
pub struct Battle {
    engine_options: BattleEngineOptions,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    log: EventLog,
    state: BattleState,
    combatants: [Combatant; 2],
    entries: Vec<RoundLogEntry>,
    hp_history: Vec<HpSnapshot>,
    warnings: Vec<String>,
}

impl Battle {
    /// Creates a new battle.
    ///
    /// Every setup problem is reported here, before any round can be played. Type names that are
    /// not on the type chart are not fatal: they are recorded as warnings and treated as neutral.
    pub fn new(options: BattleOptions, engine_options: BattleEngineOptions) -> Result<Self> {
        engine_options
            .validate()
            .wrap_error_with_message("invalid engine options")?;
        options.validate()?;

        let prng = (engine_options.rng_factory)(options.seed);
        let mut warnings = Vec::new();
        let combatants = [(Side::One, options.side_1), (Side::Two, options.side_2)].map(
            |(side, data)| {
                let (combatant, unknown) = Combatant::new(side, data);
                for err in unknown {
                    warn!("{} ({side}): {err}; treating it as neutral", combatant.name());
                    warnings.push(format!("{} ({side}): {err}", combatant.name()));
                }
                combatant
            },
        );

        Ok(Self {
            engine_options,
            prng,
            log: EventLog::new(),
            state: BattleState::NotStarted,
            combatants,
            entries: Vec::new(),
            hp_history: Vec::new(),
            warnings,
        })
    }

    /// The current state of the battle.
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Has the battle started?
    pub fn started(&self) -> bool {
        self.state != BattleState::NotStarted
    }

    /// Has the battle concluded?
    pub fn concluded(&self) -> bool {
        matches!(self.state, BattleState::Concluded { .. })
    }

    /// The combatant on the given side.
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::One => &self.combatants[0],
            Side::Two => &self.combatants[1],
        }
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::One => &mut self.combatants[0],
            Side::Two => &mut self.combatants[1],
        }
    }

    /// Every action so far.
    pub fn entries(&self) -> &[RoundLogEntry] {
        &self.entries
    }

    /// HP at the end of every completed round so far.
    pub fn hp_history(&self) -> &[HpSnapshot] {
        &self.hp_history
    }

    /// Non-fatal data problems found during setup.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns all battle logs.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.log.logs()
    }

    /// Returns new battle logs since the last call to [`Self::new_logs`].
    pub fn new_logs(&mut self) -> impl Iterator<Item = &str> {
        self.log.read_out()
    }

    /// The battle's random number generator.
    pub fn prng(&self) -> &dyn PseudoRandomNumberGenerator {
        self.prng.as_ref()
    }

    /// The battle's random number generator, for tests that need to control it.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Starts the battle.
    pub fn start(&mut self) -> Result<()> {
        if self.started() {
            return Err(general_error("battle already started"));
        }
        info!(
            "battle started: {} vs. {} (seed {})",
            self.combatant(Side::One).name(),
            self.combatant(Side::Two).name(),
            self.prng.initial_seed()
        );
        for side in [Side::One, Side::Two] {
            let combatant = self.combatant(side);
            let event = battle_event!(
                "combatant",
                format!("side:{}", side.number()),
                format!("mon:{}", combatant.name()),
                format!("health:{}", combatant.health()),
            );
            self.log.push(event);
        }
        self.state = BattleState::InProgress {
            round: 0,
            step: RoundStep::RoundComplete,
        };
        self.record_hp(0);
        Ok(())
    }

    /// Plays a single round.
    ///
    /// Fails with a stalemate error if the round cap has been reached without either combatant
    /// fainting, and keeps failing on every later call.
    pub fn play_round(&mut self) -> Result<()> {
        let round = match self.state {
            BattleState::NotStarted => return Err(general_error("battle has not started")),
            BattleState::Concluded { .. } => {
                return Err(general_error("battle has already concluded"));
            }
            BattleState::InProgress {
                round,
                step: RoundStep::RoundComplete,
            } => {
                if round >= self.engine_options.max_rounds {
                    return Err(stalemate_exceeded_error(self.engine_options.max_rounds));
                }
                round + 1
            }
            BattleState::InProgress { round, step } => {
                return Err(general_error(format!(
                    "round {round} was interrupted at {step:?}"
                )));
            }
        };

        debug!("round {round} begins");
        self.log
            .push(battle_event!("turn", format!("turn:{round}")));

        self.state = BattleState::InProgress {
            round,
            step: RoundStep::FirstActs,
        };
        let [side_1, side_2] = &self.combatants;
        let (first, second) = order_by_speed(
            side_1,
            side_2,
            self.prng.as_mut(),
            self.engine_options.speed_tie_resolution,
        );
        let (first, second) = (first.side(), second.side());
        self.act(round, first)?;

        self.state = BattleState::InProgress {
            round,
            step: RoundStep::SecondActs,
        };
        if self.combatant(second).is_fainted() {
            self.skip(round, second);
        } else {
            self.act(round, second)?;
        }

        self.state = BattleState::InProgress {
            round,
            step: RoundStep::RoundComplete,
        };
        self.record_hp(round);

        if let Some(loser) = [Side::One, Side::Two]
            .into_iter()
            .find(|side| self.combatant(*side).is_fainted())
        {
            self.conclude(loser.foe(), round);
            return Ok(());
        }

        if round >= self.engine_options.max_rounds {
            warn!(
                "no winner after {round} rounds: {} at {}, {} at {}",
                self.combatant(Side::One).name(),
                self.combatant(Side::One).health(),
                self.combatant(Side::Two).name(),
                self.combatant(Side::Two).health(),
            );
            return Err(stalemate_exceeded_error(self.engine_options.max_rounds));
        }
        Ok(())
    }

    /// Runs the battle to completion.
    pub fn run(mut self) -> Result<BattleResult> {
        if !self.started() {
            self.start()?;
        }
        while !self.concluded() {
            self.play_round()?;
        }
        self.into_result()
    }

    /// The result of the battle.
    ///
    /// Fails if the battle has not concluded.
    pub fn result(&self) -> Result<BattleResult> {
        let winner = self.winner()?;
        Ok(BattleResult::new(
            winner,
            self.combatant(winner).name().to_owned(),
            self.combatant(winner.foe()).name().to_owned(),
            self.rounds_played(),
            self.prng.initial_seed(),
            self.entries.clone(),
            self.hp_history.clone(),
            self.warnings.clone(),
            self.log.logs().map(|log| log.to_owned()).collect(),
        ))
    }

    /// Consumes a concluded battle, returning its result.
    pub fn into_result(self) -> Result<BattleResult> {
        let winner = self.winner()?;
        let rounds = self.rounds_played();
        let [side_1, side_2] = self.combatants;
        let (winner_name, loser_name) = match winner {
            Side::One => (side_1.name().to_owned(), side_2.name().to_owned()),
            Side::Two => (side_2.name().to_owned(), side_1.name().to_owned()),
        };
        Ok(BattleResult::new(
            winner,
            winner_name,
            loser_name,
            rounds,
            self.prng.initial_seed(),
            self.entries,
            self.hp_history,
            self.warnings,
            self.log.into_logs(),
        ))
    }

    fn winner(&self) -> Result<Side> {
        match self.state {
            BattleState::Concluded { winner } => Ok(winner),
            _ => Err(general_error("battle has not concluded")),
        }
    }

    fn rounds_played(&self) -> u32 {
        self.hp_history
            .last()
            .map(|snapshot| snapshot.round)
            .unwrap_or_default()
    }

    fn record_hp(&mut self, round: u32) {
        self.hp_history.push(HpSnapshot {
            round,
            side_1: self.combatant(Side::One).hp(),
            side_2: self.combatant(Side::Two).hp(),
        });
    }

    fn damage_variance(&mut self) -> u8 {
        match self.engine_options.randomize_damage {
            BattleEngineRandomizeDamage::Randomize => {
                MAX_VARIANCE - rand_util::range(self.prng.as_mut(), 0, 16) as u8
            }
            BattleEngineRandomizeDamage::Max => MAX_VARIANCE,
            BattleEngineRandomizeDamage::Min => MIN_VARIANCE,
        }
    }

    fn act(&mut self, round: u32, side: Side) -> Result<()> {
        let attacker = self.combatant(side);
        let defender = self.combatant(side.foe());
        let move_data = attacker.move_data().clone();
        let attacker_name = attacker.name().to_owned();
        let defender_name = defender.name().to_owned();

        self.log.push(battle_event!(
            "move",
            format!("mon:{attacker_name}"),
            format!("name:{}", move_data.name),
            format!("target:{defender_name}"),
        ));

        let hit = resolve_hit(move_data.accuracy, self.prng.as_mut())
            .wrap_error_with_format(format_args!("{attacker_name} could not use {}", move_data.name))?;
        if !hit {
            debug!("{attacker_name} used {} and missed", move_data.name);
            self.log.push(battle_event!(
                "miss",
                format!("mon:{attacker_name}"),
                format!("target:{defender_name}"),
            ));
            self.entries.push(RoundLogEntry {
                round,
                attacker_side: side,
                attacker: attacker_name,
                defender: defender_name,
                move_name: move_data.name,
                outcome: ActionOutcome::Miss,
                damage: 0,
                defender_hp: self.combatant(side.foe()).hp(),
                effectiveness: None,
            });
            return Ok(());
        }

        let attacker = self.combatant(side);
        let defender = self.combatant(side.foe());
        let effectiveness = match attacker.move_type() {
            Some(move_type) => self
                .engine_options
                .type_chart
                .effectiveness(move_type, defender.types()),
            None => Effectiveness::Normal,
        };
        let attack = attacker.attack_stat();
        let defense = defender.defense_stat(move_data.category);
        let damage = calculate_damage(&DamageContext {
            level: self.engine_options.level,
            power: u32::try_from(move_data.base_power).unwrap_or_default(),
            attack,
            defense,
            effectiveness,
            variance: self.damage_variance(),
        });

        let defender = self.combatant_mut(side.foe());
        let lost = defender.apply_damage(damage);
        let defender_hp = defender.hp();
        let health = defender.health();
        let fainted = defender.is_fainted();
        debug!(
            "{attacker_name} used {} on {defender_name} for {damage} damage ({effectiveness}), leaving {health}",
            move_data.name
        );

        if let Some(event) = effectiveness.event() {
            self.log
                .push(battle_event!(event, format!("mon:{defender_name}")));
        }
        if !effectiveness.is_immune() {
            self.log.push(battle_event!(
                "damage",
                format!("mon:{defender_name}"),
                format!("health:{health}"),
            ));
        }
        if fainted {
            self.log
                .push(battle_event!("faint", format!("mon:{defender_name}")));
        }

        self.entries.push(RoundLogEntry {
            round,
            attacker_side: side,
            attacker: attacker_name,
            defender: defender_name,
            move_name: move_data.name,
            outcome: ActionOutcome::Hit,
            damage: lost,
            defender_hp,
            effectiveness: Some(effectiveness),
        });
        Ok(())
    }

    fn skip(&mut self, round: u32, side: Side) {
        let attacker = self.combatant(side);
        let defender = self.combatant(side.foe());
        debug!("{} fainted before acting", attacker.name());
        let entry = RoundLogEntry {
            round,
            attacker_side: side,
            attacker: attacker.name().to_owned(),
            defender: defender.name().to_owned(),
            move_name: attacker.move_data().name.clone(),
            outcome: ActionOutcome::Skipped,
            damage: 0,
            defender_hp: defender.hp(),
            effectiveness: None,
        };
        self.entries.push(entry);
    }

    fn conclude(&mut self, winner: Side, round: u32) {
        let name = self.combatant(winner).name().to_owned();
        info!("{name} ({winner}) won after {round} rounds");
        self.log.push(battle_event!(
            "win",
            format!("side:{}", winner.number()),
            format!("mon:{name}"),
        ));
        self.state = BattleState::Concluded { winner };
    }
}
