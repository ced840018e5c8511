//! Destinations for report text.

/// Receives the text of each report that is not suppressed.
///
/// Implemented for every `Fn(&str)`, which makes capturing reports in tests
/// straightforward:
///
/// ```rust
/// use std::cell::RefCell;
///
/// use boundary_report::{CapturedError, Reporter, format::ReportMode, injection::InjectionPoint};
///
/// let written = RefCell::new(Vec::new());
/// let point = InjectionPoint::new();
/// let reporter = Reporter::new(|report: &str| written.borrow_mut().push(report.to_owned()))
///     .mode(ReportMode::Production)
///     .injection_point(&point);
///
/// reporter.report(&CapturedError::new("boom"));
/// assert_eq!(written.borrow().len(), 1);
/// ```
pub trait ErrorSink {
    /// Writes one report.
    fn write_report(&self, report: &str);
}

impl<F> ErrorSink for F
where
    F: Fn(&str),
{
    fn write_report(&self, report: &str) {
        self(report)
    }
}

/// Writes reports to the standard error stream.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl ErrorSink for StderrSink {
    fn write_report(&self, report: &str) {
        use std::io::Write;

        // Failures of the sink itself are not reported anywhere.
        let _ = writeln!(std::io::stderr().lock(), "{report}");
    }
}

/// Emits reports as `tracing` events at the `ERROR` level.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn write_report(&self, report: &str) {
        tracing::error!(target: "boundary_report", "{report}");
    }
}

/// The sink used by [`report`](crate::report): [`StderrSink`] with the `std`
/// feature, [`TracingSink`] without it.
#[cfg(feature = "std")]
pub type DefaultSink = StderrSink;

/// The sink used by [`report`](crate::report): [`StderrSink`] with the `std`
/// feature, [`TracingSink`] without it.
#[cfg(not(feature = "std"))]
pub type DefaultSink = TracingSink;
