use std::fmt::Display;

use itertools::Itertools;

/// A single line of the event log, such as `move|mon:Charmander|name:Ember|target:Bulbasaur`.
///
/// Built with the [`battle_event`] macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleEvent(String);

impl BattleEvent {
    /// Joins the displayed form of every part with `|`.
    pub fn from_parts(parts: &[&dyn Display]) -> Self {
        Self(parts.iter().join("|"))
    }

    /// The formatted event.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Builds a [`BattleEvent`] from any number of [`Display`][std::fmt::Display] parts.
///
/// The first part names the event. Named values are passed preformatted as `key:value`.
#[macro_export]
macro_rules! battle_event {
    ($($arg:expr),* $(,)?) => {{
        $crate::log::BattleEvent::from_parts(&[$(&$arg),*])
    }};
}

/// Append-only record of everything that happened in a battle.
///
/// Keeps a read cursor so that callers can stream events as they are produced.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<String>,
    cursor: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event.0);
    }

    /// Every event, oldest first.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }

    /// Events pushed since the previous call, which are then marked as read.
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let start = self.cursor;
        self.cursor = self.events.len();
        self.events[start..].iter().map(String::as_str)
    }

    pub fn into_logs(self) -> Vec<String> {
        self.events
    }
}

#[cfg(test)]
mod event_log_test {
    use std::fmt;

    use pretty_assertions::assert_eq;

    use crate::log::{
        BattleEvent,
        EventLog,
    };

    struct Health {
        hp: u16,
        max: u16,
    }

    impl fmt::Display for Health {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "health:{}/{}", self.hp, self.max)
        }
    }

    #[test]
    fn joins_parts_with_pipes() {
        assert_eq!(battle_event!("turn", format!("turn:{}", 3)).as_str(), "turn|turn:3");
        assert_eq!(
            battle_event!("damage", "mon:Bulbasaur", Health { hp: 8, max: 100 }).as_str(),
            "damage|mon:Bulbasaur|health:8/100"
        );
        assert_eq!(battle_event!("win", 2u8,).as_str(), "win|2");
    }

    #[test]
    fn builds_events_from_display_parts() {
        let side = 1;
        assert_eq!(
            BattleEvent::from_parts(&[&"combatant", &format!("side:{side}")]),
            battle_event!("combatant", "side:1")
        );
    }

    #[test]
    fn reads_out_each_event_once() {
        let mut log = EventLog::new();
        assert_eq!(log.read_out().count(), 0);
        log.push(battle_event!("turn", "turn:1"));
        log.push(battle_event!("miss", "mon:Gengar"));
        assert_eq!(
            log.read_out().collect::<Vec<_>>(),
            vec!["turn|turn:1", "miss|mon:Gengar"]
        );
        assert_eq!(log.read_out().count(), 0);
        log.push(battle_event!("turn", "turn:2"));
        assert_eq!(log.read_out().collect::<Vec<_>>(), vec!["turn|turn:2"]);
        assert_eq!(log.logs().count(), 3);
        assert_eq!(log.into_logs().last().map(String::as_str), Some("turn|turn:2"));
    }
}
