//! Error surface for taking values out of failed outcomes.
//!
//! Taking never panics. The single raising operation returns [`Take`],
//! whose error side carries either a caller-supplied error (passed through
//! untouched), a message, or a fixed fallback when no message exists.

use std::borrow::Cow;

use thiserror::Error;

/// Result alias for take operations.
pub type Take<T> = std::result::Result<T, TakeError>;

/// Error produced when a value is taken from a failed outcome.
#[derive(Debug, Error)]
pub enum TakeError {
    /// A caller-supplied error, passed through by value. The original
    /// instance is recoverable via [`anyhow::Error::downcast_ref`].
    #[error(transparent)]
    Supplied(#[from] anyhow::Error),

    /// A message, supplied by the caller or taken from a textual payload.
    #[error("{0}")]
    Message(String),

    /// The payload carried no usable message.
    #[error("Attempted to retrieve value on erroneous result")]
    Opaque,
}

impl TakeError {
    /// Create a message error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl From<String> for TakeError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for TakeError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

/// Message extraction from failure payloads.
///
/// Textual payloads surface their own content when a value is taken from a
/// failed outcome; everything else falls back to [`TakeError::Opaque`].
/// Custom payload types opt in with an empty impl:
///
/// ```
/// use uncertain::FaultMessage;
///
/// #[derive(Debug)]
/// struct Diagnostics {
///     code: u32,
/// }
///
/// impl FaultMessage for Diagnostics {}
/// ```
pub trait FaultMessage {
    /// The message this payload raises, when it is textual.
    fn fault_message(&self) -> Option<String> {
        None
    }
}

impl FaultMessage for String {
    fn fault_message(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl FaultMessage for &str {
    fn fault_message(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl FaultMessage for Box<str> {
    fn fault_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl FaultMessage for Cow<'_, str> {
    fn fault_message(&self) -> Option<String> {
        Some(self.clone().into_owned())
    }
}
