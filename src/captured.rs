//! The record describing an error captured from a component tree.
//!
//! ## Error boundaries
//!
//! An error boundary is a component that catches the failures of the
//! components below it and decides what happens to that part of the tree.
//! It can try to recreate the subtree from scratch, or unmount it when a
//! previous attempt already failed. The report names the boundary and its
//! decision when [`CapturedError::error_boundary_name`] is set to a
//! non-empty name. Without one, the report suggests adding a boundary.

use alloc::string::String;

use crate::thrown::Thrown;

/// An error captured while executing component logic, together with where
/// it happened and what the surrounding system will do about it.
///
/// The record is assembled by whatever mechanism walks the component tree
/// and catches failures. It is built once and handed to
/// [`report`](crate::report) by reference.
///
/// # Examples
///
/// ```rust
/// use boundary_report::{CapturedError, thrown::ErrorRecord};
///
/// let captured = CapturedError::new(ErrorRecord::new("RangeError", "bad"))
///     .with_component_name("Widget")
///     .with_component_stack("at Widget\n    at App")
///     .with_error_boundary("AppBoundary")
///     .with_will_retry(true);
///
/// assert_eq!(captured.component_name(), Some("Widget"));
/// assert_eq!(captured.error_boundary_name(), Some("AppBoundary"));
/// assert!(captured.error_boundary_found());
/// assert!(captured.will_retry());
/// ```
#[derive(Debug)]
pub struct CapturedError {
    error: Thrown,
    component_name: Option<String>,
    component_stack: Option<String>,
    error_boundary_found: bool,
    error_boundary_name: Option<String>,
    will_retry: bool,
}

impl CapturedError {
    /// Creates a record for `error` with no component or boundary
    /// information.
    pub fn new(error: impl Into<Thrown>) -> Self {
        Self {
            error: error.into(),
            component_name: None,
            component_stack: None,
            error_boundary_found: false,
            error_boundary_name: None,
            will_retry: false,
        }
    }

    /// Sets the name of the component that threw.
    #[must_use]
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    /// Sets the description of where in the component tree the error
    /// occurred.
    #[must_use]
    pub fn with_component_stack(mut self, stack: impl Into<String>) -> Self {
        self.component_stack = Some(stack.into());
        self
    }

    /// Records that the error boundary `name` caught the error.
    #[must_use]
    pub fn with_error_boundary(mut self, name: impl Into<String>) -> Self {
        self.error_boundary_found = true;
        self.error_boundary_name = Some(name.into());
        self
    }

    /// Sets whether an error boundary was found, without naming it.
    #[must_use]
    pub fn with_error_boundary_found(mut self, found: bool) -> Self {
        self.error_boundary_found = found;
        self
    }

    /// Sets whether the surrounding system will try to rebuild the tree
    /// rather than unmount it.
    #[must_use]
    pub fn with_will_retry(mut self, will_retry: bool) -> Self {
        self.will_retry = will_retry;
        self
    }

    /// The raw thrown value.
    pub fn error(&self) -> &Thrown {
        &self.error
    }

    /// The name of the component that threw, if known.
    pub fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref()
    }

    /// Where in the component tree the error occurred, if known.
    pub fn component_stack(&self) -> Option<&str> {
        self.component_stack.as_deref()
    }

    /// Whether an error boundary was located for this error.
    pub fn error_boundary_found(&self) -> bool {
        self.error_boundary_found
    }

    /// The name of the error boundary, if known.
    pub fn error_boundary_name(&self) -> Option<&str> {
        self.error_boundary_name.as_deref()
    }

    /// Whether the surrounding system will try to rebuild the tree.
    pub fn will_retry(&self) -> bool {
        self.will_retry
    }
}
