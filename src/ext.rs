//! Logged fallbacks and side-effect taps for outcomes.
//!
//! The pure operations in [`crate::outcome`] never log. When a pipeline
//! wants the failure recorded at the point it is discarded, these
//! combinators do that through `tracing`.

use std::fmt::Display;

use crate::outcome::Outcome;

/// Fallback combinators that log the discarded failure.
pub trait LoggedExt<T> {
    /// Convert to an `Option`, logging the failure payload if present.
    fn into_option_logged(self) -> Option<T>;

    /// The wrapped value or a default, logging the failure payload if
    /// present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: Display> LoggedExt<T> for Outcome<T, E> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Outcome::Ok(success) => Some(success.get()),
            Outcome::Err(failure) => {
                tracing::error!("Discarding failed outcome: {}", failure.error());
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Outcome::Ok(success) => success.get(),
            Outcome::Err(failure) => {
                tracing::error!("Failed outcome, using default: {}", failure.error());
                default
            }
        }
    }
}

/// Side-effect taps for pipelines.
pub trait OutcomeExt<T, E> {
    /// Observe the success payload without consuming the outcome.
    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Observe the failure payload without consuming the outcome.
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> OutcomeExt<T, E> for Outcome<T, E> {
    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Outcome::Ok(ref success) = self {
            f(success.value());
        }
        self
    }

    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Outcome::Err(ref failure) = self {
            f(failure.error());
        }
        self
    }
}
