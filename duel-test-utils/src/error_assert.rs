use std::fmt::{
    Debug,
    Display,
};

use anyhow::Error;

/// [`assert`]s that the result is an [`Error`] with the given message.
///
/// The message includes the full context chain, joined by `: `.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got a value"),
        Err(err) => pretty_assertions::assert_eq!(format!("{err:#}"), message),
    }
}

/// [`assert`]s that the result is an [`Error`] that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    match result {
        Ok(_) => panic!("expected error containing \"{message}\", got a value"),
        Err(err) => {
            let got = format!("{err:#}");
            assert!(
                got.contains(message),
                "\"{got}\" does not contain \"{message}\""
            );
        }
    }
}

/// [`assert`]s that the result is an [`Error`] of the given kind, returning it for further checks.
#[track_caller]
pub fn assert_error_kind<E, T>(result: Result<T, Error>) -> E
where
    E: Display + Debug + Clone + Send + Sync + 'static,
{
    match result {
        Ok(_) => panic!("expected {}, got a value", std::any::type_name::<E>()),
        Err(err) => match err.downcast_ref::<E>() {
            Some(kind) => kind.clone(),
            None => panic!("expected {}, got {err:#}", std::any::type_name::<E>()),
        },
    }
}
