use duel::{
    Battle,
    BattleResult,
};

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle.new_logs().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want)
}

/// Asserts that the full log of a concluded battle is equal to the given logs.
#[track_caller]
pub fn assert_logs_eq(result: &BattleResult, want: &[&str]) {
    let got = result.logs().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want)
}
