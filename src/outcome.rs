//! Typed outcome container for remote operations.
//!
//! Every public service operation returns an [`Outcome`] instead of raising:
//! success with a payload, success without one (void operations), or failure
//! with a user-facing message plus the original fault kept opaque for
//! diagnostics. Callers branch on the state before touching the payload; only
//! [`Outcome::value_or_fail`] deliberately re-raises, for callers that have
//! already asserted success.
//!
//! The container holds no policy: no logging, no retry, no backoff.

use crate::error::CoreError;

/// Result of a remote operation: exactly one of success or failure.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Operation succeeded; the payload is `None` only for void operations.
    Success(Option<T>),
    /// Operation failed with a user-facing message and an optional cause.
    Failure {
        message: String,
        cause: Option<anyhow::Error>,
    },
}

impl<T> Outcome<T> {
    /// Success carrying a payload.
    pub fn success(value: T) -> Self {
        Outcome::Success(Some(value))
    }

    /// Success for operations with no meaningful return value.
    pub fn success_empty() -> Self {
        Outcome::Success(None)
    }

    /// Failure with a user-facing message and an optional underlying cause.
    ///
    /// The cause is preserved for diagnostics and never interpreted here.
    pub fn failure(message: impl Into<String>, cause: Option<anyhow::Error>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "failure message must be non-empty");
        Outcome::Failure { message, cause }
    }

    /// Failure whose message is the cause's display rendering.
    pub fn from_fault(cause: anyhow::Error) -> Self {
        Outcome::Failure {
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the payload, if this is a success that carries one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(v) => v.as_ref(),
            Outcome::Failure { .. } => None,
        }
    }

    /// Borrow the failure message, if this is a failure.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { message, .. } => Some(message.as_str()),
        }
    }

    /// Borrow the underlying cause, if this is a failure that kept one.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { cause, .. } => cause.as_ref(),
        }
    }

    /// Consume the outcome, yielding the payload or the fault behind it.
    ///
    /// Calling this on an empty success is a contract violation and fails
    /// loudly rather than fabricating a payload.
    pub fn value_or_fail(self) -> Result<T, CoreError> {
        match self {
            Outcome::Success(Some(value)) => Ok(value),
            Outcome::Success(None) => Err(CoreError::Contract {
                message: "value_or_fail called on a success with no payload".into(),
            }),
            Outcome::Failure { message, cause } => Err(match cause {
                Some(cause) => cause.into(),
                None => CoreError::Internal { message },
            }),
        }
    }

    /// Transform the payload; failures pass through with message and cause
    /// untouched, and an empty success stays an empty success.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(Some(value)) => Outcome::Success(Some(f(value))),
            Outcome::Success(None) => Outcome::Success(None),
            Outcome::Failure { message, cause } => Outcome::Failure { message, cause },
        }
    }

    /// Transform the payload with a fallible function.
    ///
    /// A fault from the transform becomes a new failure carrying it as cause;
    /// it is never swallowed and never left looking like a success.
    pub fn try_map<U>(self, f: impl FnOnce(T) -> anyhow::Result<U>) -> Outcome<U> {
        match self {
            Outcome::Success(Some(value)) => match f(value) {
                Ok(mapped) => Outcome::Success(Some(mapped)),
                Err(fault) => Outcome::Failure {
                    message: format!("transform failed: {}", fault),
                    cause: Some(fault),
                },
            },
            Outcome::Success(None) => Outcome::Success(None),
            Outcome::Failure { message, cause } => Outcome::Failure { message, cause },
        }
    }
}

impl<T> From<CoreError> for Outcome<T> {
    fn from(err: CoreError) -> Self {
        Outcome::from_fault(anyhow::Error::new(err))
    }
}
