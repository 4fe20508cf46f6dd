#![cfg(feature = "tracing")]

use error_trace::tracing_ext::ResultLogExt;
use error_trace::{Frame, TracedError, TracedResult};

#[test]
fn logging_passes_the_result_through_unchanged() {
    let ok: TracedResult<i32, &str> = Ok(5);
    assert_eq!(ok.log_traced().unwrap(), 5);

    let err = TracedError::from_frames("testing", [Frame::new("a.rs", 10, "foo")])
        .with_info("note");
    let frames = err.frames().to_vec();

    let result: TracedResult<(), &str> = Err(err);
    let err = result.log_traced().log_origin().unwrap_err();
    assert_eq!(err.info(), "note");
    assert_eq!(err.frames(), frames.as_slice());
}
