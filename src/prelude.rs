//! Commonly used items for convenient importing.
//!
//! ```rust
//! use boundary_report::prelude::*;
//!
//! let captured = CapturedError::new(ErrorRecord::new("TypeError", "x is null"))
//!     .with_component_name("Profile");
//! let text = format_report(&captured, ReportMode::Development).to_string();
//! assert!(text.starts_with("An error was thrown by Profile."));
//! ```

pub use crate::{
    CapturedError, Reporter,
    format::{ReportMode, format_report},
    inject,
    injection::{ReportPredicate, Verdict},
    report,
    sink::ErrorSink,
    thrown::{ErrorLike, ErrorRecord, Thrown},
};
