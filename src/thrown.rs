//! Thrown values and structural detection of error-like values.
//!
//! Component logic can fail with anything: a proper error, a bare string, a
//! panic payload of unknown type. A [`Thrown`] owns such a value without
//! trusting its shape. Whether it can be treated as an error is decided
//! structurally: a value is *error-like* when it exposes a `name`, a `message`
//! and a `stack`, all as strings (see [`ErrorLike`] and [`is_error_like`]).
//!
//! # Examples
//!
//! ```rust
//! use boundary_report::thrown::{ErrorRecord, Thrown, ThrownShape, is_error_like};
//!
//! let structured = Thrown::error_like(ErrorRecord::with_stack(
//!     "RangeError",
//!     "bad",
//!     "RangeError: bad\n    at Widget",
//! ));
//! assert!(is_error_like(&structured));
//!
//! let bare = Thrown::from("something broke");
//! assert!(matches!(bare.shape(), ThrownShape::OpaqueThrow { .. }));
//! assert_eq!(bare.to_string(), "something broke");
//! ```

use alloc::{
    boxed::Box,
    string::{String, ToString},
};
use core::{any::Any, fmt};

use crate::normalize::{ErrorSummary, error_summary};

/// A value that may expose the three fields of an error.
///
/// Each accessor returns `None` when the value does not carry that field.
/// Only values returning `Some` from all three are treated as structured
/// errors; anything else is reported through its [`Display`](fmt::Display)
/// output.
///
/// # Examples
///
/// ```rust
/// use std::fmt;
///
/// use boundary_report::thrown::{ErrorLike, Thrown, is_error_like};
///
/// /// An error without any call stack information.
/// struct Timeout;
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "operation timed out")
///     }
/// }
///
/// impl ErrorLike for Timeout {
///     fn name(&self) -> Option<&str> {
///         Some("Timeout")
///     }
///
///     fn message(&self) -> Option<&str> {
///         Some("operation timed out")
///     }
///
///     fn stack(&self) -> Option<&str> {
///         None
///     }
/// }
///
/// assert!(!is_error_like(&Thrown::error_like(Timeout)));
/// ```
pub trait ErrorLike: fmt::Display + Send + 'static {
    /// The classification of the error, such as `"TypeError"`.
    fn name(&self) -> Option<&str>;

    /// The human-readable description of the error.
    fn message(&self) -> Option<&str>;

    /// The call stack text recorded when the error was created.
    fn stack(&self) -> Option<&str>;
}

/// An error with all three error-like fields populated.
///
/// By convention `stack` starts with the error summary (`"{name}:
/// {message}"`), followed by one line per call stack frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorRecord {
    /// The classification of the error.
    pub name: String,
    /// The human-readable description of the error.
    pub message: String,
    /// The call stack text, possibly empty.
    pub stack: String,
}

impl ErrorRecord {
    /// Creates a record whose stack consists of the summary line only.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        let message = message.into();
        let stack = error_summary(&name, &message);
        Self {
            name,
            message,
            stack,
        }
    }

    /// Creates a record with an explicit stack text.
    pub fn with_stack(
        name: impl Into<String>,
        message: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Creates a record and captures the current call stack into it.
    ///
    /// With the `backtrace` feature disabled this is the same as
    /// [`ErrorRecord::new`].
    pub fn capture(name: impl Into<String>, message: impl Into<String>) -> Self {
        #[allow(unused_mut, reason = "only mutated with the backtrace feature")]
        let mut record = Self::new(name, message);

        #[cfg(feature = "backtrace")]
        crate::backtrace::append_call_stack(&mut record.stack);

        record
    }

    /// Creates a record from a Rust error.
    ///
    /// The name is the unqualified type name of the error, the message is
    /// its [`Display`](fmt::Display) output, and the stack is captured as in
    /// [`ErrorRecord::capture`].
    ///
    /// ```rust
    /// use boundary_report::thrown::ErrorRecord;
    ///
    /// let error = "x".parse::<u32>().unwrap_err();
    /// let record = ErrorRecord::from_error(&error);
    /// assert_eq!(record.name, "ParseIntError");
    /// assert_eq!(record.message, "invalid digit found in string");
    /// ```
    pub fn from_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        Self::capture(
            short_type_name(core::any::type_name::<E>()),
            error.to_string(),
        )
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ErrorSummary::new(&self.name, &self.message), f)
    }
}

impl ErrorLike for ErrorRecord {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn stack(&self) -> Option<&str> {
        Some(&self.stack)
    }
}

/// Strips the module path and generic arguments from a type name.
fn short_type_name(full: &str) -> &str {
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

/// A value thrown by component logic.
///
/// The [`Display`](fmt::Display) implementation is the string coercion used
/// whenever the value is not error-like.
pub struct Thrown(Repr);

enum Repr {
    ErrorLike(Box<dyn ErrorLike>),
    Message(Box<dyn fmt::Display + Send>),
    Opaque {
        #[allow(dead_code, reason = "only held, never inspected")]
        payload: Box<dyn Any + Send>,
        type_name: Option<&'static str>,
    },
}

impl Thrown {
    /// Wraps a value that may expose the error-like fields.
    pub fn error_like<E: ErrorLike>(value: E) -> Self {
        Self(Repr::ErrorLike(Box::new(value)))
    }

    /// Wraps a Rust error as an [`ErrorRecord`].
    pub fn from_error<E: core::error::Error>(error: E) -> Self {
        Self::error_like(ErrorRecord::from_error(&error))
    }

    /// Wraps a plain value that coerces to its [`Display`](fmt::Display)
    /// output, such as a string or a number.
    pub fn message<M>(value: M) -> Self
    where
        M: fmt::Display + Send + 'static,
    {
        Self(Repr::Message(Box::new(value)))
    }

    /// Wraps a value with no known formatting.
    pub fn opaque<T: Any + Send>(value: T) -> Self {
        Self(Repr::Opaque {
            payload: Box::new(value),
            type_name: Some(core::any::type_name::<T>()),
        })
    }

    /// Wraps a panic payload, such as the error returned by
    /// `std::panic::catch_unwind`.
    ///
    /// Payloads that are a [`Thrown`], an [`ErrorRecord`], a `&'static str`
    /// or a [`String`] are recognized. Any other payload coerces to
    /// `"Box<dyn Any>"`, the same text the standard panic handler prints.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Thrown>() {
            Ok(thrown) => return *thrown,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<ErrorRecord>() {
            Ok(record) => return Self::error_like(*record),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Self::message(*message),
            Err(payload) => payload,
        };
        match payload.downcast::<String>() {
            Ok(message) => Self::message(*message),
            Err(payload) => Self(Repr::Opaque {
                payload,
                type_name: None,
            }),
        }
    }

    /// Classifies the value by its structure.
    pub fn shape(&self) -> ThrownShape<'_> {
        if let Repr::ErrorLike(value) = &self.0
            && let (Some(name), Some(message), Some(stack)) =
                (value.name(), value.message(), value.stack())
        {
            ThrownShape::StructuredError {
                name,
                message,
                stack,
            }
        } else {
            ThrownShape::OpaqueThrow { raw: self }
        }
    }
}

impl From<&'static str> for Thrown {
    fn from(message: &'static str) -> Self {
        Self::message(message)
    }
}

impl From<String> for Thrown {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<ErrorRecord> for Thrown {
    fn from(record: ErrorRecord) -> Self {
        Self::error_like(record)
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::ErrorLike(value) => fmt::Display::fmt(value, f),
            Repr::Message(value) => fmt::Display::fmt(value, f),
            Repr::Opaque {
                type_name: Some(type_name),
                ..
            } => write!(f, "An object of type {type_name}"),
            Repr::Opaque {
                type_name: None, ..
            } => f.write_str("Box<dyn Any>"),
        }
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Thrown")
            .field(&format_args!("{self}"))
            .finish()
    }
}

/// The structural classification of a [`Thrown`] value.
#[derive(Copy, Clone, Debug)]
pub enum ThrownShape<'a> {
    /// The value exposes all three error fields as strings.
    StructuredError {
        /// The error name.
        name: &'a str,
        /// The error message.
        message: &'a str,
        /// The call stack text.
        stack: &'a str,
    },
    /// Anything else: strings, numbers, partial shapes, unknown payloads.
    OpaqueThrow {
        /// The original value.
        raw: &'a Thrown,
    },
}

/// Returns `true` if `value` exposes string `name`, `message` and `stack`
/// fields.
pub fn is_error_like(value: &Thrown) -> bool {
    matches!(value.shape(), ThrownShape::StructuredError { .. })
}
