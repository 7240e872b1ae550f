//! Top-level failure handling: log, then panic or carry on.

use tracing::{debug, error};

/// Log the error and panic with the same message.
pub fn log_and_panic<Err: core::fmt::Display>(error: Err, message: &str) -> ! {
    error!("{message}: {error}");

    panic!("{message}: {error}");
}

/// Log the error and continue.
pub fn report<Err: core::fmt::Display>(error: Err, message: &str) {
    error!("{message}: {error}");
}

/// Failure handling on `Result` and `Option`.
pub trait Failure<T> {
    /// Log the failure and panic.
    fn log_and_panic(self, message: &str) -> T;

    /// Log the failure and continue with `None`.
    fn report(self, message: &str) -> Option<T>;
}

/// Explicitly discard a failure.
pub trait Ignore {
    /// Discard the failure, leaving a debug log entry behind.
    fn ignore(self);
}

impl<T, E: core::fmt::Display> Failure<T> for Result<T, E> {
    fn log_and_panic(self, message: &str) -> T {
        match self {
            Ok(value) => value,
            Err(error) => log_and_panic(error, message),
        }
    }

    fn report(self, message: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                report(error, message);
                None
            }
        }
    }
}

impl<T, E> Ignore for Result<T, E> {
    #[track_caller]
    fn ignore(self) {
        if self.is_err() {
            debug!("Ignoring error ({})", core::panic::Location::caller());
        }
    }
}

impl<T> Failure<T> for Option<T> {
    fn log_and_panic(self, message: &str) -> T {
        match self {
            Some(value) => value,
            None => log_and_panic("Was None", message),
        }
    }

    fn report(self, message: &str) -> Self {
        match self {
            Some(value) => Some(value),
            None => {
                report("Was None", message);
                None
            }
        }
    }
}

impl<T> Ignore for Option<T> {
    #[track_caller]
    fn ignore(self) {
        if self.is_none() {
            debug!("Ignoring None ({})", core::panic::Location::caller());
        }
    }
}
