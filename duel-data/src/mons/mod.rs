mod effectiveness;
mod stat;
mod r#type;

pub use effectiveness::{
    Effectiveness,
    EffectivenessMessage,
};
pub use stat::{
    Stat,
    StatTable,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
    UnknownTypeError,
};
