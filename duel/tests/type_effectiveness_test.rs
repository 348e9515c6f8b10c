use duel::{
    ActionOutcome,
    BattleEngineRandomizeDamage,
    DamageContext,
    Side,
    calculate_damage,
    data::Effectiveness,
};
use duel_test_utils::{
    TestBattleBuilder,
    assert_logs_eq,
    setup_test_environment,
};
use pretty_assertions::assert_eq;

const CHARMANDER: &str = r#"{
    "name": "Charmander",
    "types": ["Fire"],
    "stats": { "hp": 100, "atk": 80, "def": 40, "spa": 60, "spd": 50, "spe": 100 },
    "move": { "name": "Ember", "type": "Fire", "power": 50, "accuracy": 100 }
}"#;

const BULBASAUR: &str = r#"{
    "name": "Bulbasaur",
    "types": ["Grass", "Poison"],
    "stats": { "hp": 100, "atk": 49, "def": 40, "spa": 65, "spd": 65, "spe": 50 },
    "move": { "name": "Tackle", "type": "Normal", "power": 40, "accuracy": 100 }
}"#;

#[test]
fn faster_super_effective_attacker_acts_first_every_round() {
    setup_test_environment();
    let result = TestBattleBuilder::new()
        .with_seed(0)
        .with_side_1_json(CHARMANDER)
        .unwrap()
        .with_side_2_json(BULBASAUR)
        .unwrap()
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.winner(), Side::One);
    for round in 1..=result.rounds() {
        let first = result
            .entries()
            .iter()
            .find(|entry| entry.round == round)
            .unwrap();
        assert_eq!(first.attacker, "Charmander");
    }

    let first = &result.entries()[0];
    assert_eq!(first.outcome, ActionOutcome::Hit);
    assert_eq!(first.effectiveness, Some(Effectiveness::SuperEffective));
    let neutral_max = calculate_damage(&DamageContext {
        level: 50,
        power: 50,
        attack: 80,
        defense: 40,
        effectiveness: Effectiveness::Normal,
        variance: 100,
    });
    assert_eq!(neutral_max, 46);
    assert!(
        u32::from(first.damage) > neutral_max,
        "{} <= {neutral_max}",
        first.damage
    );
    assert_eq!(first.note(), "It's super effective!");
}

#[test]
fn logs_full_battle_at_max_damage() {
    setup_test_environment();
    let result = TestBattleBuilder::new()
        .with_seed(0)
        .with_damage_randomization(BattleEngineRandomizeDamage::Max)
        .with_side_1_json(CHARMANDER)
        .unwrap()
        .with_side_2_json(BULBASAUR)
        .unwrap()
        .build()
        .unwrap()
        .run()
        .unwrap();

    // Tackle: 22 * 40 * 49 / 40 / 50 + 2 = 23.56, floored to 23.
    assert_logs_eq(
        &result,
        &[
            "combatant|side:1|mon:Charmander|health:100/100",
            "combatant|side:2|mon:Bulbasaur|health:100/100",
            "turn|turn:1",
            "move|mon:Charmander|name:Ember|target:Bulbasaur",
            "supereffective|mon:Bulbasaur",
            "damage|mon:Bulbasaur|health:8/100",
            "move|mon:Bulbasaur|name:Tackle|target:Charmander",
            "damage|mon:Charmander|health:77/100",
            "turn|turn:2",
            "move|mon:Charmander|name:Ember|target:Bulbasaur",
            "supereffective|mon:Bulbasaur",
            "damage|mon:Bulbasaur|health:0/100",
            "faint|mon:Bulbasaur",
            "win|side:1|mon:Charmander",
        ],
    );
    assert_eq!(
        result
            .hp_history()
            .iter()
            .map(|snapshot| (snapshot.round, snapshot.side_1, snapshot.side_2))
            .collect::<Vec<_>>(),
        vec![(0, 100, 100), (1, 77, 8), (2, 77, 0)]
    );
}

#[test]
fn resisted_and_immune_hits() {
    setup_test_environment();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_damage_randomization(BattleEngineRandomizeDamage::Max)
        .with_side_1_json(
            r#"{
                "name": "Squirtle",
                "types": ["Water"],
                "stats": { "hp": 100, "atk": 80, "def": 40, "spe": 100 },
                "move": { "name": "Tackle", "type": "Normal", "power": 50 }
            }"#,
        )
        .unwrap()
        .with_side_2_json(
            r#"{
                "name": "Gastly",
                "types": ["Ghost", "Grass"],
                "stats": { "hp": 100, "atk": 80, "def": 40, "spe": 50 },
                "move": { "name": "Ember", "type": "Fire", "power": 50 }
            }"#,
        )
        .unwrap()
        .build()
        .unwrap();
    battle.start().unwrap();
    battle.play_round().unwrap();

    let entries = battle.entries();
    assert_eq!(entries[0].effectiveness, Some(Effectiveness::NoEffect));
    assert_eq!(entries[0].damage, 0);
    assert_eq!(entries[0].defender_hp, 100);
    assert_eq!(entries[0].note(), "No effect!");
    assert_eq!(entries[1].effectiveness, Some(Effectiveness::Resisted));
    assert_eq!(entries[1].damage, 23);
    assert_eq!(entries[1].defender_hp, 77);
    assert_eq!(entries[1].note(), "It's not very effective...");
    assert!(battle.logs().any(|log| log == "immune|mon:Gastly"));
    assert!(battle.logs().any(|log| log == "resisted|mon:Squirtle"));
}

#[test]
fn special_moves_use_special_stats() {
    setup_test_environment();
    let result = TestBattleBuilder::new()
        .with_seed(0)
        .with_damage_randomization(BattleEngineRandomizeDamage::Max)
        .with_side_1_json(
            r#"{
                "name": "Abra",
                "types": ["Psychic"],
                "stats": { "hp": 100, "atk": 1, "def": 40, "spa": 80, "spd": 40, "spe": 100 },
                "move": { "name": "Confusion", "type": "Psychic", "category": "Special", "power": 50 }
            }"#,
        )
        .unwrap()
        .with_side_2_json(
            r#"{
                "name": "Rattata",
                "types": ["Normal"],
                "stats": { "hp": 46, "atk": 40, "def": 200, "spd": 40, "spe": 50 },
                "move": { "name": "Tackle", "type": "Normal", "power": 40 }
            }"#,
        )
        .unwrap()
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(result.rounds(), 1);
    assert_eq!(result.entries()[0].damage, 46);
}
