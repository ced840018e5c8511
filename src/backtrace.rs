//! Call stack capture for [`ErrorRecord`](crate::thrown::ErrorRecord).
//!
//! Frames are appended one per line as `at {symbol} ({file}:{line})`, the
//! layout the development report re-indents. Frames from the capturing
//! machinery itself are dropped from the top of the stack.

use alloc::{format, string::String};
use core::fmt::Write;

/// Crates whose frames are skipped while they appear at the top of the stack.
const SKIPPED_INITIAL_CRATES: &[&str] = &["backtrace", "boundary_report", "core", "std", "alloc"];

/// Maximum number of frames recorded.
const MAX_FRAME_COUNT: usize = 32;

fn crate_of(symbol: &str) -> &str {
    let symbol = symbol.trim_start_matches('<');
    symbol.split("::").next().unwrap_or(symbol)
}

pub(crate) fn append_call_stack(stack: &mut String) {
    let mut initial_filtering = true;
    let mut frame_count = 0;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            let Some(name) = symbol.name() else {
                return;
            };
            if frame_count >= MAX_FRAME_COUNT {
                return;
            }

            let name = format!("{name:#}");
            if initial_filtering {
                if SKIPPED_INITIAL_CRATES.contains(&crate_of(&name)) {
                    return;
                }
                initial_filtering = false;
            }

            frame_count += 1;
            let _ = write!(stack, "\n    at {name}");
            if let Some(file) = symbol.filename() {
                let _ = write!(stack, " ({}", file.display());
                if let Some(lineno) = symbol.lineno() {
                    let _ = write!(stack, ":{lineno}");
                }
                stack.push(')');
            }
        });

        frame_count < MAX_FRAME_COUNT
    });
}
