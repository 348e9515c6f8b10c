use std::fmt::{
    Arguments,
    Display,
};

use anyhow::Error;

use crate::error::{
    context::ContextError,
    general_error,
};

/// Conversion of engine and data errors into [`Error`].
///
/// Context added through this trait records the caller's location.
pub trait WrapError {
    #[track_caller]
    fn wrap_error(self) -> Error;

    /// Converts the error and layers `message` over it. The original error stays downcastable.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display;
}

impl<E> WrapError for E
where
    E: Into<Error>,
{
    #[track_caller]
    fn wrap_error(self) -> Error {
        self.into()
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display,
    {
        let context = ContextError::new(message);
        Into::<Error>::into(self).context(context)
    }
}

/// [`WrapError`] lifted over the error side of a [`Result`].
pub trait WrapResultError<T> {
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Like [`Self::wrap_error_with_message`], for messages built with [`format_args!`].
    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error>;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: WrapError,
{
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error> {
        self.map_err(WrapError::wrap_error)
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        // Closures do not forward the caller's location.
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.wrap_error_with_message(message)),
        }
    }

    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.wrap_error_with_message(args)
    }
}

/// Turns a missing value into a [`GeneralError`][crate::error::GeneralError].
pub trait WrapOptionError<T> {
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T> WrapOptionError<T> for Option<T> {
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| general_error(message))
    }
}
