use std::backtrace::Backtrace;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidOperation { name: name.into() }.into())
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfBounds { index, len }.into())
    }

    pub fn kind_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error(
            ErrorKind::KindMismatch {
                expected: expected.into(),
                actual: actual.into(),
            }
            .into(),
        )
    }

    /// Builds the error raised when a closed-set dispatch falls through
    /// every known case.
    ///
    /// Reaching it means the variant set grew without the dispatch being
    /// updated; the condition is a logic defect and is never retried.
    pub fn unmatched_branch() -> Error {
        Error(ErrorKind::UnmatchedBranch.into())
    }

    /// Builds a raised (host-thrown) error from an optional message and an
    /// optional cause.
    ///
    /// The message is used verbatim when present; otherwise the cause's
    /// string form stands in; otherwise the message stays absent. A stack
    /// snapshot is captured at construction, see [`capture_stack`].
    pub fn raised(message: Option<String>, cause: Option<Error>) -> Error {
        let message = message.or_else(|| cause.as_ref().map(|cause| cause.to_string()));
        Error(
            ErrorKind::Raised {
                message,
                stack: capture_stack(),
                source: cause.map(Box::new),
            }
            .into(),
        )
    }

    /// Returns the stack snapshot recorded for raised errors.
    pub fn stack(&self) -> Option<&Backtrace> {
        match self.kind() {
            ErrorKind::Raised { stack, .. } => Some(stack),
            _ => None,
        }
    }
}

/// Best-effort stack capture.
///
/// Uses the runtime's native capture facility when the standard backtrace
/// environment variables enable it, and records the disabled placeholder
/// otherwise.
pub fn capture_stack() -> Backtrace {
    Backtrace::capture()
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid operation {name}")]
    InvalidOperation { name: String },

    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("element kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: String, actual: String },

    #[error("no branch of an exhaustive dispatch matched")]
    UnmatchedBranch,

    #[error("{}", message.as_deref().unwrap_or("unspecified error"))]
    Raised {
        message: Option<String>,
        stack: Backtrace,
        source: Option<Box<Error>>,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
