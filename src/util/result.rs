use std::error::Error;

use super::error::ReserveError;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

pub(crate) trait ReserveResultExtension<T> {
    /// Unwraps the value of a reservation, diverging through [`ReserveError::handle`] on failure.
    fn or_handle(self) -> T;
}

impl<T> ReserveResultExtension<T> for Result<T, ReserveError> {
    fn or_handle(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => error.handle(),
        }
    }
}
