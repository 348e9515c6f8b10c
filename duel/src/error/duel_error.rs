use std::fmt::{
    self,
    Display,
};

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A battle could not be set up from the given combatants and options.
///
/// Collects every problem found, so a caller can fix all of them at once.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
pub struct InvalidBattleSetupError {
    problems: Vec<String>,
}

impl InvalidBattleSetupError {
    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Records a new problem.
    pub fn push<S>(&mut self, problem: S)
    where
        S: Into<String>,
    {
        self.problems.push(problem.into())
    }
}

impl Display for InvalidBattleSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid battle setup: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for InvalidBattleSetupError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl<S> Extend<S> for InvalidBattleSetupError
where
    S: Into<String>,
{
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.problems.extend(iter.into_iter().map(|s| s.into()))
    }
}

/// A move accuracy outside of `[0, 100]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid accuracy {accuracy}: must be between 0 and 100")]
pub struct InvalidAccuracyError {
    accuracy: i64,
}

impl InvalidAccuracyError {
    /// Constructs a new invalid accuracy error.
    pub fn new(accuracy: i64) -> Self {
        Self { accuracy }
    }

    /// The rejected accuracy value.
    pub fn accuracy(&self) -> i64 {
        self.accuracy
    }
}

/// The round cap was reached without either combatant fainting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no winner after {max_rounds} rounds")]
pub struct StalemateExceededError {
    max_rounds: u32,
}

impl StalemateExceededError {
    /// Constructs a new stalemate error.
    pub fn new(max_rounds: u32) -> Self {
        Self { max_rounds }
    }

    /// The round cap that was reached.
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidBattleSetupError`].
#[track_caller]
pub fn invalid_battle_setup_error<I, S>(problems: I) -> Error
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    InvalidBattleSetupError::from_iter(problems).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidAccuracyError`].
#[track_caller]
pub fn invalid_accuracy_error(accuracy: i64) -> Error {
    InvalidAccuracyError::new(accuracy).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`StalemateExceededError`].
#[track_caller]
pub fn stalemate_exceeded_error(max_rounds: u32) -> Error {
    StalemateExceededError::new(max_rounds).wrap_error()
}

#[cfg(test)]
mod duel_error_test {
    use crate::error::{
        InvalidAccuracyError,
        InvalidBattleSetupError,
        StalemateExceededError,
        invalid_accuracy_error,
        invalid_battle_setup_error,
        stalemate_exceeded_error,
    };

    #[test]
    fn joins_setup_problems() {
        let err = invalid_battle_setup_error(["side 1 has no move", "side 2 has 0 HP"]);
        assert_eq!(
            err.to_string(),
            "invalid battle setup: side 1 has no move; side 2 has 0 HP"
        );
        let setup = err.downcast_ref::<InvalidBattleSetupError>().unwrap();
        assert_eq!(
            setup.problems().collect::<Vec<_>>(),
            vec!["side 1 has no move", "side 2 has 0 HP"]
        );
    }

    #[test]
    fn collects_problems_incrementally() {
        let mut err = InvalidBattleSetupError::default();
        assert!(err.is_empty());
        err.push("a");
        err.extend(["b", "c"]);
        assert_eq!(err.problems().count(), 3);
    }

    #[test]
    fn downcasts_to_error_kinds() {
        let err = invalid_accuracy_error(150);
        assert_eq!(
            err.downcast_ref::<InvalidAccuracyError>(),
            Some(&InvalidAccuracyError::new(150))
        );
        assert_eq!(
            err.to_string(),
            "invalid accuracy 150: must be between 0 and 100"
        );

        let err = stalemate_exceeded_error(100);
        assert_eq!(
            err.downcast_ref::<StalemateExceededError>()
                .map(|err| err.max_rounds()),
            Some(100)
        );
    }
}
