//! Deciding, formatting and emitting reports.

use alloc::string::ToString;

use crate::{
    captured::CapturedError,
    format::{ReportMode, format_report},
    injection::InjectionPoint,
    sink::{DefaultSink, ErrorSink},
};

/// Reports captured errors to a sink, unless the injected predicate
/// suppresses them.
///
/// [`Reporter::new`] starts out with the process-wide [`InjectionPoint`] and
/// [`ReportMode::from_build`]; both can be overridden.
#[derive(Debug)]
pub struct Reporter<'a, S> {
    sink: S,
    mode: ReportMode,
    injection_point: &'a InjectionPoint,
}

impl<S: ErrorSink> Reporter<'static, S> {
    /// Creates a reporter writing to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            mode: ReportMode::from_build(),
            injection_point: InjectionPoint::global(),
        }
    }
}

impl<'a, S: ErrorSink> Reporter<'a, S> {
    /// Sets the report mode.
    #[must_use]
    pub fn mode(mut self, mode: ReportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Consults `injection_point` instead of the process-wide slot.
    #[must_use]
    pub fn injection_point<'b>(self, injection_point: &'b InjectionPoint) -> Reporter<'b, S> {
        Reporter {
            sink: self.sink,
            mode: self.mode,
            injection_point,
        }
    }

    /// Reports `captured`.
    ///
    /// Writes exactly one report to the sink, or nothing if the predicate
    /// returns [`Verdict::Suppress`](crate::injection::Verdict::Suppress).
    pub fn report(&self, captured: &CapturedError) {
        let verdict = self.injection_point.predicate().verdict(captured);
        if verdict.is_suppressed() {
            tracing::debug!(
                component = captured.component_name(),
                "default error report suppressed by injected predicate"
            );
            return;
        }

        let report = format_report(captured, self.mode).to_string();
        self.sink.write_report(&report);
    }
}

/// Reports `captured` to the [`DefaultSink`], consulting the process-wide
/// injection point and using [`ReportMode::from_build`].
///
/// ```rust
/// use boundary_report::{CapturedError, thrown::ErrorRecord};
///
/// boundary_report::report(
///     &CapturedError::new(ErrorRecord::new("RangeError", "bad"))
///         .with_component_name("Widget")
///         .with_component_stack("at Widget"),
/// );
/// ```
pub fn report(captured: &CapturedError) {
    Reporter::new(DefaultSink::default()).report(captured);
}
