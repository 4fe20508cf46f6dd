use crate::types::TracedError;

/// Discriminated input to the wrap operation.
///
/// [`trace`](crate::trace) accepts anything convertible into an
/// `ErrorSource`, which makes "is this already traced?" a property of the
/// type rather than a runtime inspection:
///
/// - a plain error converts to [`ErrorSource::Raw`] and gets a fresh stack,
/// - an existing [`TracedError`] converts to [`ErrorSource::Traced`] and is
///   returned unchanged (idempotent wrap),
/// - an `Option` maps `None` to [`ErrorSource::Absent`], which produces the
///   zero-value traced error.
///
/// # Examples
///
/// ```
/// use error_trace::{trace, ErrorSource};
/// use std::io;
///
/// let source: ErrorSource<io::Error> = io::Error::other("boom").into();
/// assert!(matches!(source, ErrorSource::Raw(_)));
///
/// let absent: ErrorSource<io::Error> = None.into();
/// assert!(matches!(absent, ErrorSource::Absent));
///
/// let traced = trace(io::Error::other("boom"));
/// let source: ErrorSource<io::Error> = traced.into();
/// assert!(matches!(source, ErrorSource::Traced(_)));
/// ```
pub enum ErrorSource<E> {
    /// No underlying error; wrapping yields the zero-value traced error.
    Absent,
    /// A raw cause that has not been traced yet.
    Raw(E),
    /// An error that already carries a captured stack.
    Traced(TracedError<E>),
}

impl<E> From<E> for ErrorSource<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::Raw(error)
    }
}

impl<E> From<Option<E>> for ErrorSource<E> {
    #[inline]
    fn from(error: Option<E>) -> Self {
        match error {
            Some(error) => Self::Raw(error),
            None => Self::Absent,
        }
    }
}

impl<E> From<TracedError<E>> for ErrorSource<E> {
    #[inline]
    fn from(traced: TracedError<E>) -> Self {
        Self::Traced(traced)
    }
}
