mod accuracy;
mod battle;
mod battle_options;
mod battle_result;
mod combatant;
mod damage;
mod speed_order;

pub use accuracy::{
    resolve_hit,
    validate_accuracy,
};
pub use battle::{
    Battle,
    BattleState,
    RoundStep,
};
pub use battle_options::{
    BattleEngineOptions,
    BattleEngineRandomizeDamage,
    BattleEngineSpeedTieResolution,
    BattleOptions,
};
pub use battle_result::{
    ActionOutcome,
    BattleResult,
    HpSnapshot,
    RoundLogEntry,
};
pub use combatant::{
    Combatant,
    CombatantData,
    Side,
};
pub use damage::{
    DamageContext,
    MAX_VARIANCE,
    MIN_VARIANCE,
    calculate_damage,
};
pub use speed_order::{
    SpeedOrderable,
    compare_speed,
    order_by_speed,
};
