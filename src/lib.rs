#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Reporting of errors captured while running a tree of components.
//!
//! ## Overview
//!
//! Some upstream mechanism walks a tree of user-supplied components, catches
//! the failures they throw and decides whether an error boundary will try to
//! recover. This crate takes over after that decision has been made: it
//! turns the captured failure into a human-readable report and writes it to
//! a sink. It does not catch errors, render anything, or decide on
//! retries.
//!
//! ## Quick Example
//!
//! ```
//! use boundary_report::{CapturedError, thrown::ErrorRecord};
//!
//! let captured = CapturedError::new(ErrorRecord::capture("RangeError", "index out of bounds"))
//!     .with_component_name("Widget")
//!     .with_component_stack("at Widget\n    at App")
//!     .with_error_boundary("AppBoundary")
//!     .with_will_retry(true);
//!
//! // Writes one report to standard error.
//! boundary_report::report(&captured);
//! ```
//!
//! ## Core Concepts
//!
//! - A [`CapturedError`] holds the thrown value together with the component
//!   that threw, its location in the tree, and what the nearest error
//!   boundary is going to do.
//! - The thrown value is a [`Thrown`](thrown::Thrown). It is not trusted: it
//!   is treated as an error only when it exposes a name, a message and a
//!   stack (see [`thrown::is_error_like`]). Anything else is
//!   [normalized](normalize::normalize) into an error named `"Error"` whose
//!   message is the value's string form.
//! - [`ReportMode`](format::ReportMode) selects between a verbose
//!   development report and a minimal production report. It is resolved
//!   once and passed explicitly to the [formatter](format::format_report).
//! - A single [`ReportPredicate`](injection::ReportPredicate) can be
//!   [injected](injection::inject) once per process to suppress the default
//!   report, for instance because the host shows its own error dialog.
//! - Reports are written to an [`ErrorSink`](sink::ErrorSink), once per
//!   captured error.
//!
//! ## Features
//!
//! - `std` (default): the process-wide injection slot uses
//!   `std::sync::OnceLock` and reports go to standard error. Without it the
//!   slot is a `spin::Once` and reports are emitted as `tracing` events.
//! - `backtrace`: [`ErrorRecord::capture`](thrown::ErrorRecord::capture)
//!   and [`Thrown::from_error`](thrown::Thrown::from_error) record the call
//!   stack.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod captured;
pub mod format;
pub mod injection;
pub mod normalize;
pub mod prelude;
pub mod sink;
pub mod thrown;

#[cfg(feature = "backtrace")]
mod backtrace;
mod reporter;

pub use self::{
    captured::CapturedError,
    injection::inject,
    reporter::{Reporter, report},
};
