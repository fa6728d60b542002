//! Tagged success and failure values with a shared operation surface.
//!
//! [`ok`] and [`err`] wrap a payload in an immutable value object. Both
//! variants, and the [`Outcome`] union over them, implement [`Uncertain`]
//! so that extraction with a fallback works without narrowing first.
//! Variant-only operations ([`Success::get`], [`Success::map`],
//! [`Failure::get_error`]) live on the variant types and are reached by
//! matching on [`Outcome`].

use crate::error::{FaultMessage, Take, TakeError};

/// A success value wrapping a payload of type `T`.
///
/// Constructed once via [`ok`], never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Success<T> {
    value: T,
}

/// A failure value wrapping a payload of type `E`.
///
/// Constructed once via [`err`], never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Failure<E> {
    error: E,
}

/// The union of the two variants, discriminated by the enum tag.
///
/// Matching on an `Outcome` is the narrowing step that unlocks the
/// variant-only operations:
///
/// ```
/// use uncertain::{ok, Outcome};
///
/// let outcome: Outcome<u32, String> = ok(7).into();
/// let doubled = match outcome {
///     Outcome::Ok(success) => success.map(|v| v.saturating_mul(2)),
///     Outcome::Err(failure) => failure.get_error().len() as u32,
/// };
/// assert_eq!(doubled, 14);
/// ```
#[derive(Debug, Clone)]
pub enum Outcome<T, E> {
    /// The success variant.
    Ok(Success<T>),
    /// The failure variant.
    Err(Failure<E>),
}

/// Wrap a success value. Accepts any payload; never fails.
#[must_use]
pub const fn ok<T>(value: T) -> Success<T> {
    Success { value }
}

/// Wrap a failure value. Accepts any payload; never fails.
#[must_use]
pub const fn err<E>(error: E) -> Failure<E> {
    Failure { error }
}

/// The operation surface shared by both variants.
///
/// `T` is the type of the value extracted on the success path; for a
/// [`Failure`] it is pinned by the supplied default. Extraction is by
/// value, none of these operations mutate the wrapped payload, and none
/// perform I/O.
pub trait Uncertain<T>: Sized {
    /// The discriminant: `true` on the success variant.
    fn is_ok(&self) -> bool;

    /// The wrapped value, or `default` unchanged on failure.
    fn get_or(self, default: T) -> T;

    /// The wrapped value, or the result of running `run` on failure.
    ///
    /// `run` is lazy: on success it is never invoked, on failure it is
    /// invoked exactly once, synchronously, at call time.
    fn get_or_run<F: FnOnce() -> T>(self, run: F) -> T;

    /// The wrapped value, or an error built from the failure payload.
    ///
    /// # Errors
    ///
    /// On failure, [`TakeError::Message`] when the payload is textual
    /// ([`FaultMessage`] yields its content), [`TakeError::Opaque`]
    /// otherwise. Never errors on success.
    fn get_or_throw(self) -> Take<T>;

    /// The wrapped value, or an error built from `error`.
    ///
    /// # Errors
    ///
    /// On failure, `error.into()`: an [`anyhow::Error`] passes through
    /// untouched as [`TakeError::Supplied`], text becomes
    /// [`TakeError::Message`]. The wrapped payload is ignored. Never
    /// errors on success.
    fn get_or_throw_with<R: Into<TakeError>>(self, error: R) -> Take<T>;

    /// Apply `map` to the wrapped value on success, or to `default` on
    /// failure.
    ///
    /// The failure path feeds the supplied default to `map`, not the
    /// error payload, so the transform's input differs by variant.
    /// Callers that need the payload itself should narrow first, or use
    /// [`Outcome::map_or`] for the symmetric behavior.
    fn map_with_default<U, F: FnOnce(T) -> U>(self, default: T, map: F) -> U;
}

impl<T> Success<T> {
    /// The discriminant: always `true` on this variant.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        true
    }

    /// The wrapped value, moved out verbatim.
    #[must_use]
    pub fn get(self) -> T {
        self.value
    }

    /// Borrow the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Apply `map` to the wrapped value and return its result directly,
    /// without re-wrapping.
    pub fn map<U, F: FnOnce(T) -> U>(self, map: F) -> U {
        map(self.value)
    }
}

impl<E> Failure<E> {
    /// The discriminant: always `false` on this variant.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        false
    }

    /// The wrapped payload, moved out verbatim.
    #[must_use]
    pub fn get_error(self) -> E {
        self.error
    }

    /// Borrow the wrapped payload.
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }
}

impl<T> Uncertain<T> for Success<T> {
    fn is_ok(&self) -> bool {
        true
    }

    fn get_or(self, _default: T) -> T {
        self.value
    }

    fn get_or_run<F: FnOnce() -> T>(self, _run: F) -> T {
        self.value
    }

    fn get_or_throw(self) -> Take<T> {
        Ok(self.value)
    }

    fn get_or_throw_with<R: Into<TakeError>>(self, _error: R) -> Take<T> {
        Ok(self.value)
    }

    fn map_with_default<U, F: FnOnce(T) -> U>(self, _default: T, map: F) -> U {
        map(self.value)
    }
}

impl<T, E: FaultMessage> Uncertain<T> for Failure<E> {
    fn is_ok(&self) -> bool {
        false
    }

    fn get_or(self, default: T) -> T {
        default
    }

    fn get_or_run<F: FnOnce() -> T>(self, run: F) -> T {
        run()
    }

    fn get_or_throw(self) -> Take<T> {
        match self.error.fault_message() {
            Some(message) => Err(TakeError::Message(message)),
            None => Err(TakeError::Opaque),
        }
    }

    fn get_or_throw_with<R: Into<TakeError>>(self, error: R) -> Take<T> {
        Err(error.into())
    }

    fn map_with_default<U, F: FnOnce(T) -> U>(self, default: T, map: F) -> U {
        map(default)
    }
}

impl<T, E> Outcome<T, E> {
    /// The discriminant: `true` on the success variant.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// The discriminant, inverted.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Apply `map` to the wrapped value on success, or return `default`
    /// unchanged on failure.
    ///
    /// The symmetric counterpart to
    /// [`map_with_default`](Uncertain::map_with_default): the default is
    /// never fed through the transform.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, map: F) -> U {
        match self {
            Outcome::Ok(success) => success.map(map),
            Outcome::Err(_) => default,
        }
    }

    /// Convert into the standard library result.
    pub fn into_result(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E: FaultMessage> Uncertain<T> for Outcome<T, E> {
    fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    fn get_or(self, default: T) -> T {
        match self {
            Outcome::Ok(success) => success.get_or(default),
            Outcome::Err(failure) => failure.get_or(default),
        }
    }

    fn get_or_run<F: FnOnce() -> T>(self, run: F) -> T {
        match self {
            Outcome::Ok(success) => success.get_or_run(run),
            Outcome::Err(failure) => failure.get_or_run(run),
        }
    }

    fn get_or_throw(self) -> Take<T> {
        match self {
            Outcome::Ok(success) => success.get_or_throw(),
            Outcome::Err(failure) => failure.get_or_throw(),
        }
    }

    fn get_or_throw_with<R: Into<TakeError>>(self, error: R) -> Take<T> {
        match self {
            Outcome::Ok(success) => success.get_or_throw_with(error),
            Outcome::Err(failure) => failure.get_or_throw_with(error),
        }
    }

    fn map_with_default<U, F: FnOnce(T) -> U>(self, default: T, map: F) -> U {
        match self {
            Outcome::Ok(success) => success.map_with_default(default, map),
            Outcome::Err(failure) => failure.map_with_default(default, map),
        }
    }
}

impl<T, E: FaultMessage> Uncertain<T> for std::result::Result<T, E> {
    fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    fn get_or(self, default: T) -> T {
        Outcome::from(self).get_or(default)
    }

    fn get_or_run<F: FnOnce() -> T>(self, run: F) -> T {
        Outcome::from(self).get_or_run(run)
    }

    fn get_or_throw(self) -> Take<T> {
        Outcome::from(self).get_or_throw()
    }

    fn get_or_throw_with<R: Into<TakeError>>(self, error: R) -> Take<T> {
        Outcome::from(self).get_or_throw_with(error)
    }

    fn map_with_default<U, F: FnOnce(T) -> U>(self, default: T, map: F) -> U {
        Outcome::from(self).map_with_default(default, map)
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    fn from(success: Success<T>) -> Self {
        Outcome::Ok(success)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    fn from(failure: Failure<E>) -> Self {
        Outcome::Err(failure)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(ok(value)),
            Err(error) => Outcome::Err(err(error)),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(success) => Ok(success.get()),
            Outcome::Err(failure) => Err(failure.get_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_discriminant() {
        assert!(ok("foo").is_ok());
    }

    #[test]
    fn test_ok_get_returns_value() {
        assert_eq!(ok("foo").get(), "foo");
    }

    #[test]
    fn test_ok_get_moves_value_out() {
        // Non-Clone payload moves through untouched.
        struct Token(u32);
        let token = ok(Token(9)).get();
        assert_eq!(token.0, 9);
    }

    #[test]
    fn test_ok_get_or_ignores_default() {
        assert_eq!(ok("foo").get_or("bar"), "foo");
    }

    #[test]
    fn test_ok_get_or_run_never_invokes() {
        let mut calls = 0_u32;
        let value = ok("foo").get_or_run(|| {
            calls = calls.saturating_add(1);
            "bar"
        });
        assert_eq!(value, "foo");
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_ok_map_applies_to_value() {
        assert_eq!(ok("foo").map(str::to_uppercase), "FOO");
    }

    #[test]
    fn test_ok_map_doubles() {
        assert_eq!(ok(42_u32).map(|x| x.saturating_mul(2)), 84);
    }

    #[test]
    fn test_ok_map_with_default_ignores_default() {
        assert_eq!(ok("foo").map_with_default("bar", str::to_uppercase), "FOO");
    }

    #[test]
    fn test_ok_get_or_throw_returns_value() {
        let taken = ok("foo").get_or_throw();
        assert!(matches!(taken, Ok("foo")));
    }

    #[test]
    fn test_ok_get_or_throw_with_ignores_argument() {
        let taken = ok("foo").get_or_throw_with("Can not get value");
        assert!(matches!(taken, Ok("foo")));
    }

    #[test]
    fn test_err_discriminant() {
        assert!(!err("foo").is_ok());
    }

    #[test]
    fn test_err_get_error_returns_payload() {
        assert_eq!(err("foo").get_error(), "foo");
    }

    #[test]
    fn test_err_get_or_returns_default() {
        assert_eq!(err("fail").get_or("fallback"), "fallback");
    }

    #[test]
    fn test_err_get_or_run_invokes_exactly_once() {
        let mut calls = 0_u32;
        let value = err("foo").get_or_run(|| {
            calls = calls.saturating_add(1);
            "bar"
        });
        assert_eq!(value, "bar");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_err_map_with_default_applies_to_default() {
        // The transform receives the default, not the payload.
        assert_eq!(err("foo").map_with_default("bar", str::to_uppercase), "BAR");
    }

    #[test]
    fn test_err_get_or_throw_uses_textual_payload() {
        let taken: Take<u32> = err("msg".to_string()).get_or_throw();
        let message = match taken {
            Err(error) => error.to_string(),
            Ok(value) => format!("unexpected success: {value}"),
        };
        assert_eq!(message, "msg");
    }

    #[test]
    fn test_err_get_or_throw_falls_back_on_opaque_payload() {
        #[derive(Debug)]
        struct Code {
            code: u32,
        }

        impl FaultMessage for Code {}

        let taken: Take<u32> = err(Code { code: 1 }).get_or_throw();
        let message = match taken {
            Err(error) => error.to_string(),
            Ok(value) => format!("unexpected success: {value}"),
        };
        assert_eq!(message, "Attempted to retrieve value on erroneous result");
    }

    #[test]
    fn test_err_get_or_throw_with_text_overrides_payload() {
        let taken: Take<u32> = err("msg").get_or_throw_with("override");
        let message = match taken {
            Err(error) => error.to_string(),
            Ok(value) => format!("unexpected success: {value}"),
        };
        assert_eq!(message, "override");
    }

    #[test]
    fn test_err_get_or_throw_with_preserves_supplied_error() {
        #[derive(Debug, thiserror::Error)]
        #[error("disk offline")]
        struct DiskOffline;

        let taken: Take<u32> = err("msg").get_or_throw_with(anyhow::Error::new(DiskOffline));
        let preserved = match taken {
            Err(TakeError::Supplied(ref source)) => {
                source.downcast_ref::<DiskOffline>().is_some()
            }
            _ => false,
        };
        assert!(preserved);
    }

    #[test]
    fn test_outcome_narrowing_reaches_variant_operations() {
        let outcome: Outcome<&str, &str> = err("nope").into();
        let seen = match outcome {
            Outcome::Ok(success) => success.get(),
            Outcome::Err(failure) => failure.get_error(),
        };
        assert_eq!(seen, "nope");
    }

    #[test]
    fn test_outcome_shared_contract() {
        let success: Outcome<u32, String> = ok(7).into();
        assert!(success.is_ok());
        assert_eq!(success.get_or(0), 7);

        let failure: Outcome<u32, String> = err("down".to_string()).into();
        assert!(failure.is_err());
        assert_eq!(failure.get_or(0), 0);
    }

    #[test]
    fn test_outcome_map_or_on_success() {
        let outcome: Outcome<u32, String> = ok(21).into();
        assert_eq!(outcome.map_or(0, |v| v.saturating_mul(2)), 42);
    }

    #[test]
    fn test_outcome_map_or_returns_default_untransformed() {
        let outcome: Outcome<u32, String> = err("down".to_string()).into();
        assert_eq!(outcome.map_or(9, |v| v.saturating_mul(2)), 9);
    }

    #[test]
    fn test_round_trip_through_std_result() {
        let outcome = Outcome::<u32, String>::from(Ok(5));
        assert!(matches!(outcome.into_result(), Ok(5)));

        let outcome = Outcome::<u32, String>::from(Err("down".to_string()));
        assert!(matches!(outcome.into_result(), Err(ref e) if e == "down"));
    }

    #[test]
    fn test_std_result_shared_contract() {
        let present: std::result::Result<u32, String> = Ok(3);
        assert_eq!(present.get_or(0), 3);

        let missing: std::result::Result<u32, String> = Err("down".to_string());
        assert_eq!(missing.get_or_run(|| 8), 8);
    }

    #[test]
    fn test_borrow_accessors() {
        let success = ok(5_u32);
        assert_eq!(*success.value(), 5);

        let failure = err("down");
        assert_eq!(*failure.error(), "down");
    }
}
