//! The wrap entry points.
//!
//! [`trace`] is the single construction surface: hand it a raw error, an
//! `Option` of one, or an already-traced error, and it returns a
//! [`TracedError`]. [`trace_with`] is the same operation with an explicit
//! [`CaptureConfig`].

use crate::capture::{capture_frames, CaptureConfig};
use crate::types::{ErrorSource, TracedError};

/// Wraps an error, capturing the call stack at the point of wrapping.
///
/// Total over its whole input domain:
///
/// - a raw error gets a fresh stack, default formatters, zero skip, and
///   empty info;
/// - an already-traced error is returned unchanged, so wrapping is
///   idempotent and never doubles the stack;
/// - `None` yields the zero-value traced error, which renders to the empty
///   string and on which every operation is safe.
///
/// Capture is bounded at [`DEFAULT_CAPTURE_DEPTH`](crate::DEFAULT_CAPTURE_DEPTH)
/// frames; use [`trace_with`] to choose another bound.
///
/// # Examples
///
/// ```
/// use error_trace::trace;
/// use std::io;
///
/// let err = trace(io::Error::other("disk full")).with_info("while flushing wal");
/// assert!(err.render().contains("disk full"));
/// assert!(!err.frames().is_empty());
///
/// // Wrapping again changes nothing.
/// let frames = err.frames().to_vec();
/// let err: error_trace::TracedError<io::Error> = trace(err);
/// assert_eq!(err.frames(), frames.as_slice());
/// ```
pub fn trace<E, S>(source: S) -> TracedError<E>
where
    S: Into<ErrorSource<E>>,
{
    trace_with(source, CaptureConfig::default())
}

/// Wraps an error with an explicit capture configuration.
///
/// Semantics are identical to [`trace`]; only the stack-walk bound differs.
/// The config is ignored for inputs that do not trigger a capture (absent
/// causes and already-traced errors).
///
/// # Examples
///
/// ```
/// use error_trace::{trace_with, CaptureConfig};
///
/// let err = trace_with("boom", CaptureConfig::new(3));
/// assert!(err.frames().len() <= 3);
/// ```
pub fn trace_with<E, S>(source: S, config: CaptureConfig) -> TracedError<E>
where
    S: Into<ErrorSource<E>>,
{
    match source.into() {
        ErrorSource::Absent => TracedError::empty(),
        ErrorSource::Traced(traced) => traced,
        ErrorSource::Raw(cause) => TracedError::from_frames(cause, capture_frames(config)),
    }
}
