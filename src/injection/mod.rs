//! The single injectable hook deciding whether captured errors get the
//! default report.
//!
//! By default every captured error is reported. A host environment that
//! wants to present errors differently, for instance in its own dialog,
//! injects a [`ReportPredicate`] once at startup. Returning `false` from the
//! predicate suppresses the default report for that error; any other verdict
//! lets it through.
//!
//! ```rust
//! use boundary_report::{CapturedError, injection};
//!
//! injection::inject(|captured: &CapturedError| {
//!     // Errors caught by a boundary are shown in the host's own overlay.
//!     !captured.error_boundary_found()
//! })
//! .expect("report predicate injected twice");
//!
//! assert!(injection::InjectionPoint::global().is_injected());
//! ```
//!
//! The slot can be filled only once per process: a second injection fails
//! with [`AlreadyInjectedError`] and leaves the first predicate in place.
//! Non-callable values are rejected at compile time, since only
//! [`ReportPredicate`] implementors are accepted.

mod slot_lock;

use alloc::boxed::Box;
use core::fmt;

use self::slot_lock::SlotLock;
use crate::captured::CapturedError;

/// The outcome of consulting the reporting predicate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Write the default report.
    Report,
    /// Skip the default report; the host handles the error itself.
    Suppress,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Suppress`].
    pub const fn is_suppressed(self) -> bool {
        matches!(self, Self::Suppress)
    }
}

/// Only an explicit `false` suppresses.
impl From<bool> for Verdict {
    fn from(report: bool) -> Self {
        if report { Self::Report } else { Self::Suppress }
    }
}

impl From<()> for Verdict {
    fn from((): ()) -> Self {
        Self::Report
    }
}

/// `None` counts as "no opinion" and reports.
impl From<Option<bool>> for Verdict {
    fn from(report: Option<bool>) -> Self {
        match report {
            Some(false) => Self::Suppress,
            Some(true) | None => Self::Report,
        }
    }
}

/// Decides whether a captured error receives the default report.
///
/// Implemented for every `Fn(&CapturedError) -> R` where `R` converts into a
/// [`Verdict`], so a closure returning `bool`, `()` or `Option<bool>` can be
/// injected directly. When passing a closure, annotate the parameter type
/// (`|captured: &CapturedError| ...`).
pub trait ReportPredicate: 'static + Send + Sync {
    /// Returns the verdict for `captured`.
    fn verdict(&self, captured: &CapturedError) -> Verdict;
}

impl<F, R> ReportPredicate for F
where
    F: Fn(&CapturedError) -> R + 'static + Send + Sync,
    R: Into<Verdict>,
{
    fn verdict(&self, captured: &CapturedError) -> Verdict {
        self(captured).into()
    }
}

/// The predicate in effect until one is injected: report everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysReport;

impl ReportPredicate for AlwaysReport {
    fn verdict(&self, _captured: &CapturedError) -> Verdict {
        Verdict::Report
    }
}

/// Error returned when a predicate is injected into a slot that already
/// holds one.
///
/// Contains the rejected predicate, allowing you to recover it if needed.
/// Double injection is a setup bug in the host; treat this error as fatal.
pub struct AlreadyInjectedError(pub Box<dyn ReportPredicate>);

impl AlreadyInjectedError {
    /// Returns the predicate that was rejected.
    pub fn into_predicate(self) -> Box<dyn ReportPredicate> {
        self.0
    }
}

impl fmt::Debug for AlreadyInjectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlreadyInjectedError").finish()
    }
}

impl fmt::Display for AlreadyInjectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a report predicate has already been injected; it can only be injected once"
        )
    }
}

impl core::error::Error for AlreadyInjectedError {}

/// A single-assignment slot holding the reporting predicate.
///
/// The process-wide slot is available through [`InjectionPoint::global`] and
/// is what [`inject`] and [`report`](crate::report) use. Hosts and tests that
/// need an isolated slot can create their own with [`InjectionPoint::new`]
/// and hand it to a [`Reporter`](crate::Reporter).
///
/// # Examples
///
/// ```rust
/// use boundary_report::{
///     CapturedError,
///     injection::{InjectionPoint, Verdict},
/// };
///
/// let point = InjectionPoint::new();
/// let captured = CapturedError::new("boom");
/// assert_eq!(point.predicate().verdict(&captured), Verdict::Report);
///
/// point.inject(|_: &CapturedError| false).unwrap();
/// assert_eq!(point.predicate().verdict(&captured), Verdict::Suppress);
///
/// assert!(point.inject(|_: &CapturedError| true).is_err());
/// assert_eq!(point.predicate().verdict(&captured), Verdict::Suppress);
/// ```
pub struct InjectionPoint {
    slot: SlotLock<Box<dyn ReportPredicate>>,
}

static INJECTION_POINT: InjectionPoint = InjectionPoint::new();

impl InjectionPoint {
    /// Creates an empty slot; [`AlwaysReport`] is in effect until a
    /// predicate is injected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: SlotLock::new(),
        }
    }

    /// The process-wide slot.
    pub fn global() -> &'static Self {
        &INJECTION_POINT
    }

    /// Installs `predicate` for all subsequent reports.
    ///
    /// Fails with [`AlreadyInjectedError`] if a predicate was injected
    /// before. The active predicate is left unchanged in that case.
    pub fn inject<P>(&self, predicate: P) -> Result<(), AlreadyInjectedError>
    where
        P: ReportPredicate,
    {
        match self.slot.set(Box::new(predicate)) {
            Ok(()) => {
                tracing::debug!("report predicate injected");
                Ok(())
            }
            Err(rejected) => {
                tracing::warn!("rejected second report predicate injection");
                Err(AlreadyInjectedError(rejected))
            }
        }
    }

    /// Returns `true` once a predicate has been injected.
    pub fn is_injected(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The predicate currently in effect.
    pub fn predicate(&self) -> &dyn ReportPredicate {
        match self.slot.get() {
            Some(predicate) => &**predicate,
            None => &AlwaysReport,
        }
    }
}

impl Default for InjectionPoint {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InjectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionPoint")
            .field("injected", &self.is_injected())
            .finish()
    }
}

/// Installs `predicate` into the process-wide slot.
///
/// See [`InjectionPoint::inject`].
pub fn inject<P>(predicate: P) -> Result<(), AlreadyInjectedError>
where
    P: ReportPredicate,
{
    INJECTION_POINT.inject(predicate)
}
