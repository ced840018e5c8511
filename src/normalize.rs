//! Normalization of thrown values into a stable `{name, message, stack}`
//! triple.

use alloc::string::{String, ToString};
use core::fmt;

use crate::thrown::{Thrown, ThrownShape};

/// The name given to values that are not error-like.
pub const DEFAULT_ERROR_NAME: &str = "Error";

/// The normalized form of a thrown value.
///
/// All three fields are always populated, whatever was thrown. The
/// [`Display`](fmt::Display) implementation renders the error summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedError {
    /// The classification of the error, `"Error"` when unknown.
    pub name: String,
    /// The description of the error.
    pub message: String,
    /// The call stack text, empty when unknown.
    pub stack: String,
}

impl NormalizedError {
    /// Returns `"{name}: {message}"`, or just the name if the message is
    /// empty.
    pub fn summary(&self) -> String {
        error_summary(&self.name, &self.message)
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ErrorSummary::new(&self.name, &self.message), f)
    }
}

/// Normalizes a thrown value.
///
/// Structured errors are taken as-is. Everything else becomes an error named
/// `"Error"` whose message is the string coercion of the value and whose
/// stack is empty.
///
/// # Examples
///
/// ```rust
/// use boundary_report::{normalize::normalize, thrown::Thrown};
///
/// let error = normalize(&Thrown::message(404));
/// assert_eq!(error.name, "Error");
/// assert_eq!(error.message, "404");
/// assert_eq!(error.stack, "");
/// ```
pub fn normalize(value: &Thrown) -> NormalizedError {
    match value.shape() {
        ThrownShape::StructuredError {
            name,
            message,
            stack,
        } => NormalizedError {
            name: name.to_string(),
            message: message.to_string(),
            stack: stack.to_string(),
        },
        ThrownShape::OpaqueThrow { raw } => NormalizedError {
            name: DEFAULT_ERROR_NAME.to_string(),
            message: raw.to_string(),
            stack: String::new(),
        },
    }
}

/// `"{name}: {message}"`, or just the name if the message is empty.
pub(crate) struct ErrorSummary<'a> {
    name: &'a str,
    message: &'a str,
}

impl<'a> ErrorSummary<'a> {
    pub(crate) fn new(name: &'a str, message: &'a str) -> Self {
        Self { name, message }
    }
}

impl fmt::Display for ErrorSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

pub(crate) fn error_summary(name: &str, message: &str) -> String {
    ErrorSummary::new(name, message).to_string()
}
