mod context;
mod duel_error;
mod error;

pub use duel_data::UnknownTypeError;
pub use duel_error::{
    GeneralError,
    InvalidAccuracyError,
    InvalidBattleSetupError,
    StalemateExceededError,
    general_error,
    invalid_accuracy_error,
    invalid_battle_setup_error,
    stalemate_exceeded_error,
};
pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
