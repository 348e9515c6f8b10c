use duel_data::Accuracy;
use duel_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::error::InvalidAccuracyError;

/// Checks that an accuracy is a percentage.
pub fn validate_accuracy(accuracy: Accuracy) -> Result<(), InvalidAccuracyError> {
    match accuracy {
        Accuracy::Chance(chance) if !(0..=100).contains(&chance) => {
            Err(InvalidAccuracyError::new(chance))
        }
        _ => Ok(()),
    }
}

/// Rolls for whether a move with the given accuracy hits.
///
/// A percentage draws a uniform value in `[0, 100)` and hits if the value is below the accuracy,
/// consuming exactly one random value. Exempt moves always hit without consuming randomness.
pub fn resolve_hit(
    accuracy: Accuracy,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<bool, InvalidAccuracyError> {
    validate_accuracy(accuracy)?;
    match accuracy {
        Accuracy::Chance(chance) => Ok(rand_util::chance(prng, chance as u64, 100)),
        Accuracy::Exempt => Ok(true),
    }
}
