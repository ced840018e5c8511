//! Reports built from values caught with `catch_unwind`.

use std::panic;

use boundary_report::{
    CapturedError,
    format::{ReportMode, format_report},
    normalize::normalize,
    thrown::{ErrorRecord, Thrown, is_error_like},
};

fn catch(f: impl FnOnce() + panic::UnwindSafe) -> Thrown {
    let payload = panic::catch_unwind(f).expect_err("closure must panic");
    Thrown::from_panic(payload)
}

#[test]
fn test_string_panics_are_opaque() {
    let thrown = catch(|| panic!("render failed"));
    assert!(!is_error_like(&thrown));

    let error = normalize(&thrown);
    assert_eq!(error.name, "Error");
    assert_eq!(error.message, "render failed");
    assert_eq!(error.stack, "");

    let index = 7;
    let thrown = catch(move || panic!("missing child {index}"));
    assert_eq!(normalize(&thrown).message, "missing child 7");
}

#[test]
fn test_record_panics_are_structured() {
    let thrown = catch(|| {
        panic::panic_any(ErrorRecord::with_stack(
            "TypeError",
            "props is undefined",
            "TypeError: props is undefined\nat Profile.render (profile.rs:4:1)",
        ))
    });
    assert!(is_error_like(&thrown));

    let captured = CapturedError::new(thrown)
        .with_component_name("Profile")
        .with_component_stack("at Profile\n    at App")
        .with_error_boundary("AppBoundary")
        .with_will_retry(false);
    let text = format_report(&captured, ReportMode::Development).to_string();

    assert!(text.starts_with("An error was thrown by Profile."));
    assert!(text.contains("handled by the error boundary AppBoundary."));
    assert!(text.ends_with("The error was thrown at:\n    at Profile.render (profile.rs:4:1)"));
}

#[test]
fn test_unknown_payloads_still_report() {
    let thrown = catch(|| panic::panic_any(vec![1, 2, 3]));

    let captured = CapturedError::new(thrown);
    let report = format_report(&captured, ReportMode::Production);
    assert_eq!(report.error().to_string(), "Error: Box<dyn Any>");
    assert_eq!(report.to_string(), "An error was thrown by a component.\n");
}

#[test]
fn test_rust_errors_are_structured() {
    #[derive(Debug, thiserror::Error)]
    #[error("quota of {limit} exceeded")]
    struct QuotaExceeded {
        limit: u32,
    }

    let thrown = Thrown::from_error(QuotaExceeded { limit: 3 });
    let error = normalize(&thrown);
    assert_eq!(error.name, "QuotaExceeded");
    assert_eq!(error.message, "quota of 3 exceeded");
    assert!(error.stack.starts_with("QuotaExceeded: quota of 3 exceeded"));
}
