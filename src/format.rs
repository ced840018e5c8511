//! Building the report text for a captured error.
//!
//! Formatting is a pure function of the [`CapturedError`] and a
//! [`ReportMode`]. The mode is resolved once by the host (usually with
//! [`ReportMode::from_build`]) and passed in explicitly, so both variants can
//! be produced side by side:
//!
//! ```rust
//! use boundary_report::{
//!     CapturedError,
//!     format::{ReportMode, format_report},
//!     thrown::ErrorRecord,
//! };
//!
//! let captured = CapturedError::new(ErrorRecord::with_stack(
//!     "RangeError",
//!     "bad",
//!     "RangeError: bad\n    at render (widget.rs:10)",
//! ))
//! .with_component_name("Widget")
//! .with_component_stack("at Widget");
//!
//! let verbose = format_report(&captured, ReportMode::Development).to_string();
//! assert!(verbose.starts_with("An error was thrown by Widget."));
//! assert!(verbose.contains("The error is located at: at Widget"));
//!
//! let minimal = format_report(&captured, ReportMode::Production).to_string();
//! assert!(!minimal.contains("Widget."));
//! ```

use alloc::string::{String, ToString};
use core::fmt;

use crate::{
    captured::CapturedError,
    normalize::{NormalizedError, normalize},
};

/// The indentation written in front of every call stack line in development
/// reports.
pub const CALL_STACK_INDENT: &str = "    ";

/// The reference given to users whose component tree has no error boundary.
pub const ERROR_BOUNDARY_DOCS_URL: &str =
    "https://docs.rs/boundary-report/latest/boundary_report/captured/index.html";

/// Selects between the detailed and the minimal report text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReportMode {
    /// Verbose reports naming the component, the error boundary and the
    /// re-indented call stack.
    Development,
    /// A generic sentence followed by the raw call stack.
    Production,
}

impl ReportMode {
    /// Resolves the mode from the build profile: [`ReportMode::Development`]
    /// when debug assertions are enabled, [`ReportMode::Production`]
    /// otherwise.
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Returns `true` for [`ReportMode::Development`].
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl Default for ReportMode {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Formats `captured` in the given mode.
///
/// The thrown value is normalized once; the returned value renders the
/// report through its [`Display`](fmt::Display) implementation.
pub fn format_report(captured: &CapturedError, mode: ReportMode) -> FormattedReport<'_> {
    FormattedReport {
        captured,
        error: normalize(captured.error()),
        mode,
    }
}

/// A report ready to be written, as returned by [`format_report`].
#[derive(Debug)]
pub struct FormattedReport<'a> {
    captured: &'a CapturedError,
    error: NormalizedError,
    mode: ReportMode,
}

impl FormattedReport<'_> {
    /// The normalized form of the thrown value.
    pub fn error(&self) -> &NormalizedError {
        &self.error
    }

    /// The mode the report is rendered in.
    pub fn mode(&self) -> ReportMode {
        self.mode
    }

    fn fmt_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let captured = self.captured;
        let summary = self.error.summary();

        match non_empty(captured.component_name()) {
            Some(name) => write!(f, "An error was thrown by {name}.")?,
            None => f.write_str("An error was thrown by one of your components.")?,
        }
        f.write_str(" You should fix this error in your code. ")?;
        write!(f, "{}", BoundaryOutcome::of(captured))?;

        write!(
            f,
            "\n\nThe error is located at: {}",
            captured.component_stack().unwrap_or("<unknown>")
        )?;

        let call_stack = CallStack::new(&self.error.stack, &summary);
        if call_stack.is_empty() {
            f.write_str("\n\nThe error was thrown at: <unknown>")
        } else {
            write!(f, "\n\nThe error was thrown at:{call_stack}")
        }
    }

    fn fmt_minimal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("An error was thrown by a component.\n")?;
        f.write_str(&self.error.stack)
    }
}

impl fmt::Display for FormattedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ReportMode::Development => self.fmt_verbose(f),
            ReportMode::Production => self.fmt_minimal(f),
        }
    }
}

/// What happens to the component tree, as far as the report is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BoundaryOutcome<'a> {
    Retry { boundary: &'a str },
    Unmount { boundary: &'a str },
    NoBoundary,
}

impl<'a> BoundaryOutcome<'a> {
    fn of(captured: &'a CapturedError) -> Self {
        match (
            captured.error_boundary_found(),
            non_empty(captured.error_boundary_name()),
        ) {
            (true, Some(boundary)) if captured.will_retry() => Self::Retry { boundary },
            (true, Some(boundary)) => Self::Unmount { boundary },
            _ => Self::NoBoundary,
        }
    }
}

impl fmt::Display for BoundaryOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retry { boundary } => write!(
                f,
                "The error boundary {boundary} will try to recreate this component tree from scratch."
            ),
            Self::Unmount { boundary } => write!(
                f,
                "This error was initially handled by the error boundary {boundary}.\n\
                 Recreating the tree from scratch failed so the tree will be unmounted."
            ),
            Self::NoBoundary => write!(
                f,
                "Consider adding an error boundary to your tree to customize error handling behavior.\n\
                 You can learn more about error boundaries at {ERROR_BOUNDARY_DOCS_URL}."
            ),
        }
    }
}

/// Empty names count as unavailable.
fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|name| !name.is_empty())
}

/// A call stack with the leading summary removed, rendered one indented
/// line per frame.
struct CallStack<'a> {
    stack: &'a str,
}

impl<'a> CallStack<'a> {
    fn new(stack: &'a str, summary: &str) -> Self {
        let stack = stack.strip_prefix(summary).unwrap_or(stack);
        Self {
            stack: stack.trim(),
        }
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl fmt::Display for CallStack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stack.is_empty() {
            return Ok(());
        }
        for line in self.stack.lines() {
            write!(f, "\n{CALL_STACK_INDENT}{}", line.trim())?;
        }
        Ok(())
    }
}

/// Removes one leading copy of `summary` from `stack` and re-indents every
/// remaining line with [`CALL_STACK_INDENT`].
///
/// Each output line is preceded by a newline; an empty stack yields an empty
/// string.
///
/// ```rust
/// use boundary_report::format::format_call_stack;
///
/// let stack = "TypeError: x is null\nat render (app.rs:3)\n  at main (main.rs:1)";
/// assert_eq!(
///     format_call_stack(stack, "TypeError: x is null"),
///     "\n    at render (app.rs:3)\n    at main (main.rs:1)",
/// );
/// ```
pub fn format_call_stack(stack: &str, summary: &str) -> String {
    CallStack::new(stack, summary).to_string()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::thrown::{ErrorRecord, Thrown};

    fn range_error() -> ErrorRecord {
        ErrorRecord::with_stack(
            "RangeError",
            "bad",
            "RangeError: bad\n    at Widget.render (widget.rs:12:5)\n    at reconcile (tree.rs:80:9)",
        )
    }

    #[test]
    fn test_widget_example() {
        let captured = CapturedError::new(range_error())
            .with_component_name("Widget")
            .with_component_stack("at Widget");

        let report = format_report(&captured, ReportMode::Development);
        assert_eq!(report.error().name, "RangeError");
        assert_eq!(report.error().message, "bad");
        assert_eq!(report.error().stack, range_error().stack);

        let text = report.to_string();
        assert!(text.contains("An error was thrown by Widget."));
        assert!(text.contains("Consider adding an error boundary to your tree"));
        assert!(text.contains(ERROR_BOUNDARY_DOCS_URL));
        assert!(text.contains("The error is located at: at Widget"));
        assert!(text.ends_with(
            "The error was thrown at:\n    at Widget.render (widget.rs:12:5)\n    at reconcile (tree.rs:80:9)"
        ));
    }

    #[test]
    fn test_full_verbose_text() {
        let captured = CapturedError::new(range_error())
            .with_component_name("Widget")
            .with_component_stack("at Widget");
        let text = format_report(&captured, ReportMode::Development).to_string();

        assert_eq!(
            text,
            "An error was thrown by Widget. You should fix this error in your code. \
             Consider adding an error boundary to your tree to customize error handling behavior.\n\
             You can learn more about error boundaries at \
             https://docs.rs/boundary-report/latest/boundary_report/captured/index.html.\n\
             \n\
             The error is located at: at Widget\n\
             \n\
             The error was thrown at:\n    at Widget.render (widget.rs:12:5)\n    at reconcile (tree.rs:80:9)"
        );
    }

    #[test]
    fn test_boundary_will_retry() {
        let captured = CapturedError::new(range_error())
            .with_error_boundary("Boundary1")
            .with_will_retry(true);
        let text = format_report(&captured, ReportMode::Development).to_string();

        assert!(text.contains(
            "The error boundary Boundary1 will try to recreate this component tree from scratch."
        ));
        assert!(!text.contains("unmounted"));
    }

    #[test]
    fn test_boundary_will_unmount() {
        let captured = CapturedError::new(range_error())
            .with_error_boundary("Boundary1")
            .with_will_retry(false);
        let text = format_report(&captured, ReportMode::Development).to_string();

        assert!(text.contains("This error was initially handled by the error boundary Boundary1."));
        assert!(text.contains("so the tree will be unmounted."));
        assert!(!text.contains("will try to recreate"));
    }

    #[test]
    fn test_no_boundary_omits_name() {
        let captured = CapturedError::new(range_error())
            .with_error_boundary("Boundary1")
            .with_error_boundary_found(false)
            .with_will_retry(true);
        let text = format_report(&captured, ReportMode::Development).to_string();

        assert!(text.contains("Consider adding an error boundary"));
        assert!(!text.contains("Boundary1"));
    }

    #[test]
    fn test_unnamed_boundary_falls_back_to_suggestion() {
        let captured = CapturedError::new(range_error()).with_error_boundary_found(true);
        assert_eq!(BoundaryOutcome::of(&captured), BoundaryOutcome::NoBoundary);
    }

    #[test]
    fn test_empty_names_count_as_unavailable() {
        let captured = CapturedError::new(ErrorRecord::new("RangeError", "bad"))
            .with_component_name("")
            .with_error_boundary("")
            .with_will_retry(true);
        assert_eq!(BoundaryOutcome::of(&captured), BoundaryOutcome::NoBoundary);

        let text = format_report(&captured, ReportMode::Development).to_string();
        assert!(text.starts_with("An error was thrown by one of your components."));
        assert!(!text.contains("thrown by ."));
        assert!(!text.contains("The error boundary  will"));
        assert!(text.contains("Consider adding an error boundary to your tree"));

        let captured = CapturedError::new(ErrorRecord::new("RangeError", "bad"))
            .with_error_boundary("")
            .with_will_retry(false);
        let text = format_report(&captured, ReportMode::Development).to_string();
        assert!(!text.contains("unmounted"));
    }

    #[test]
    fn test_anonymous_component_and_unknown_locations() {
        let captured = CapturedError::new(Thrown::message(37));
        let text = format_report(&captured, ReportMode::Development).to_string();

        assert!(text.starts_with("An error was thrown by one of your components."));
        assert!(text.contains("The error is located at: <unknown>"));
        assert!(text.ends_with("The error was thrown at: <unknown>"));
        assert!(!text.contains("Error: 37"));
    }

    #[test]
    fn test_call_stack_reindent_preserves_line_count() {
        let stack = "Error: oops\nframe one\n\t  frame two  \n    frame three";
        let formatted = format_call_stack(stack, "Error: oops");
        let lines: Vec<&str> = formatted.split('\n').skip(1).collect();

        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.starts_with(CALL_STACK_INDENT));
            assert!(!line[CALL_STACK_INDENT.len()..].starts_with(' '));
        }
        assert_eq!(lines, ["    frame one", "    frame two", "    frame three"]);
    }

    #[test]
    fn test_call_stack_strips_summary_once() {
        let stack = "Error: oops\nError: oops\nat main";
        assert_eq!(
            format_call_stack(stack, "Error: oops"),
            "\n    Error: oops\n    at main"
        );
    }

    #[test]
    fn test_call_stack_without_summary_is_kept() {
        assert_eq!(
            format_call_stack("at render\nat main", "Error: oops"),
            "\n    at render\n    at main"
        );
        assert_eq!(format_call_stack("", "Error"), "");
        assert_eq!(format_call_stack("Error", "Error"), "");
    }

    #[test]
    fn test_production_text() {
        let captured = CapturedError::new(range_error())
            .with_component_name("Widget")
            .with_error_boundary("Boundary1")
            .with_will_retry(true);
        let text = format_report(&captured, ReportMode::Production).to_string();

        assert_eq!(
            text,
            "An error was thrown by a component.\n\
             RangeError: bad\n    at Widget.render (widget.rs:12:5)\n    at reconcile (tree.rs:80:9)"
        );
    }

    #[test]
    fn test_production_text_for_opaque_throw() {
        let captured = CapturedError::new("boom");
        let text = format_report(&captured, ReportMode::Production).to_string();
        assert_eq!(text, "An error was thrown by a component.\n");
    }

    #[test]
    fn test_mode_from_build() {
        assert_eq!(ReportMode::from_build().is_verbose(), cfg!(debug_assertions));
        assert_eq!(ReportMode::default(), ReportMode::from_build());
    }
}
