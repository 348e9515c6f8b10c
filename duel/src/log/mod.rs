mod log;

pub use log::{
    BattleEvent,
    EventLog,
};
