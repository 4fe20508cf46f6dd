use error_trace::{default_frame_format, default_header_format, Frame, TracedError};

fn two_frame_error() -> TracedError<&'static str> {
    TracedError::from_frames("testing", [
        Frame::new("a.rs", 10, "foo"),
        Frame::new("b.rs", 20, "bar"),
    ])
}

#[test]
fn default_render_shape() {
    let err = two_frame_error();
    assert_eq!(
        err.render(),
        "🔴  Error : testing \n \n \t at foo line 10 a.rs \n \t at bar line 20 b.rs "
    );
}

#[test]
fn default_render_with_info() {
    let err = two_frame_error().with_info("info message");
    assert_eq!(
        err.render(),
        "🔴  Error : testing \nℹ️  Info  : info message \n \t at foo line 10 a.rs \n \t at bar line 20 b.rs "
    );
}

#[test]
fn display_matches_render() {
    let err = two_frame_error().with_info("note");
    assert_eq!(format!("{}", err), err.render());
}

#[test]
fn skip_trims_from_the_oldest_end() {
    let err = two_frame_error().with_skip(1);
    let report = err.render();
    assert!(report.contains("foo"));
    assert!(!report.contains("bar"));
}

#[test]
fn origin_equals_render_with_all_but_innermost_skipped() {
    let err = two_frame_error().with_info("note");
    let skipped = err.clone().with_skip(err.frames().len() - 1);
    assert_eq!(err.origin(), skipped.render());

    // And the origin shows exactly the innermost frame.
    assert!(err.origin().contains("foo"));
    assert!(!err.origin().contains("bar"));
}

#[test]
fn origin_of_frameless_error_is_header_only() {
    let err = TracedError::from_frames("testing", []);
    assert_eq!(err.origin(), default_header_format("testing", ""));
}

#[test]
fn custom_formatters_replace_the_defaults() {
    let err = two_frame_error()
        .with_info("ctx")
        .with_header_format(|cause, info| format!("E:{cause};I:{info}"))
        .with_frame_format(|func, line, file| format!("|{func}@{file}:{line}"));

    assert_eq!(err.render(), "E:testing;I:ctx|foo@a.rs:10|bar@b.rs:20");
}

#[test]
fn later_formatter_wins() {
    let err = two_frame_error()
        .with_header_format(|_, _| "first".to_string())
        .with_header_format(|_, _| "second".to_string())
        .with_skip(2);
    assert_eq!(err.render(), "second");
}

#[test]
fn default_templates_compose_the_render() {
    let err = two_frame_error().with_info("ctx");
    let expected = format!(
        "{}{}{}",
        default_header_format("testing", "ctx"),
        default_frame_format("foo", 10, "a.rs"),
        default_frame_format("bar", 20, "b.rs"),
    );
    assert_eq!(err.render(), expected);
}
