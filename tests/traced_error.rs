use error_trace::{trace, Frame, TracedError};
use std::error::Error;
use std::io;

#[test]
fn wrap_is_idempotent() {
    let first = trace(io::Error::other("testing"));
    let frames = first.frames().to_vec();
    let info = first.info().to_string();

    let second: TracedError<io::Error> = trace(first);
    assert_eq!(second.frames(), frames.as_slice());
    assert_eq!(second.info(), info);
    assert_eq!(second.cause().unwrap().to_string(), "testing");
}

#[test]
fn wrapping_twice_does_not_double_the_stack() {
    let err: TracedError<io::Error> = trace(trace(io::Error::other("testing")));
    // A doubled capture would at least add this test function's frame twice.
    // Match the exact symbol: the harness also runs the test body through a
    // `{{closure}}` frame carrying the same name.
    let test_frames = err
        .frames()
        .iter()
        .filter(|f| f.func_name.ends_with("::wrapping_twice_does_not_double_the_stack"))
        .count();
    assert_eq!(test_frames, 1);
}

#[test]
fn nil_cause_is_safe_everywhere() {
    let err: TracedError<io::Error> = trace(None);
    assert_eq!(err.render(), "");
    assert_eq!(err.origin(), "");
    assert_eq!(err.to_string(), "");
    assert!(err.to_json().is_empty());
    assert!(err.cause().is_none());
    assert!(err.frames().is_empty());

    // Every mutator is a harmless no-op on the zero value.
    let err = err
        .with_info("ignored")
        .with_skip(5)
        .with_line(7)
        .with_func("phantom")
        .with_header_format(|c, i| format!("{c}{i}"))
        .with_frame_format(|f, l, p| format!("{f}{l}{p}"));
    assert_eq!(err.render(), "");
    assert_eq!(err.skip(), 0);
}

#[test]
fn info_last_write_wins() {
    let err = trace(io::Error::other("testing"))
        .with_info("first note")
        .with_info("second note");
    let report = err.render();
    assert!(report.contains("second note"));
    assert!(!report.contains("first note"));
}

#[test]
fn skip_is_clamped_to_frame_count() {
    let err = TracedError::from_frames("testing", [
        Frame::new("a.rs", 10, "foo"),
        Frame::new("b.rs", 20, "bar"),
    ])
    .with_skip(99);

    assert_eq!(err.skip(), 2);
    // Header-only output: no frame lines remain.
    assert_eq!(err.render(), "🔴  Error : testing \n ");
}

#[test]
fn innermost_frame_overrides() {
    let err = TracedError::from_frames("testing", [
        Frame::new("a.go", 10, "foo"),
        Frame::new("b.go", 20, "baz"),
    ])
    .with_line(42)
    .with_func("bar");

    assert_eq!(err.frames()[0], Frame::new("a.go", 42, "bar"));
    assert_eq!(err.frames()[1], Frame::new("b.go", 20, "baz"));
}

#[test]
fn rendering_is_deterministic() {
    let err = trace(io::Error::other("testing")).with_info("note");
    assert_eq!(err.render(), err.render());
    assert_eq!(err.origin(), err.origin());
}

#[test]
fn independent_instances_are_isolated() {
    let base = TracedError::from_frames("testing", [Frame::new("a.rs", 10, "foo")]);
    let copy = base.clone();

    let mutated = copy.with_info("only on the copy").with_skip(1).with_line(99);
    assert_eq!(base.info(), "");
    assert_eq!(base.skip(), 0);
    assert_eq!(base.frames()[0].line, 10);
    assert_eq!(mutated.frames()[0].line, 99);
}

#[test]
fn error_trait_exposes_the_cause() {
    let err = trace(io::Error::other("root cause"));
    let source = err.source().expect("cause should be the source");
    assert_eq!(source.to_string(), "root cause");

    assert!(TracedError::<io::Error>::empty().source().is_none());
}

#[test]
fn question_mark_conversion_captures_a_stack() {
    fn inner() -> error_trace::TracedResult<(), io::Error> {
        Err(io::Error::other("from qm"))?;
        Ok(())
    }

    let err = inner().unwrap_err();
    assert_eq!(err.cause().unwrap().to_string(), "from qm");
    assert!(err.frames().iter().any(|f| f.func_name.contains("inner")));
}
