//! Error types shared by hosts and swipe handlers.

use std::fmt;

/// Failure reported by a [`Host`](crate::Host) operation.
///
/// None of these ever reach callers of the public helpers; they are logged
/// and the operation degrades to a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The host API (window, document, history, storage) is not present.
    Unavailable { api: &'static str },
    /// The element the operation targeted is no longer attached.
    ElementMissing,
    /// The host rejected the call.
    Rejected(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Unavailable { api } => write!(f, "host api `{api}` unavailable"),
            HostError::ElementMissing => write!(f, "element missing from document"),
            HostError::Rejected(reason) => write!(f, "host rejected call: {reason}"),
        }
    }
}

impl std::error::Error for HostError {}

/// Failure raised by an embedder's swipe handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerError(String);

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swipe handler failed: {}", self.0)
    }
}

impl std::error::Error for HandlerError {}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self(message)
    }
}
