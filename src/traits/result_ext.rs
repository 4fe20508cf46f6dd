//! Extension traits for ergonomic stack capture on `Result` types.
//!
//! [`ResultExt`] avoids verbose `.map_err(trace)` chains when wrapping raw
//! errors, and [`TracedResultExt`] decorates results whose error arm is
//! already traced.
//!
//! # Examples
//!
//! ```
//! use error_trace::traits::ResultExt;
//! use error_trace::TracedResult;
//!
//! fn load_config() -> TracedResult<String, std::io::Error> {
//!     std::fs::read_to_string("config.toml")
//!         .traced_info("loading configuration file")
//! }
//!
//! assert!(load_config().is_err());
//! ```

use crate::trace::trace;
use crate::types::{TracedError, TracedResult};

/// Extension trait that wraps the error arm of a `Result` with a captured
/// call stack.
///
/// These methods are meant for *raw* error arms. Calling them on a
/// `Result<T, TracedError<E>>` would wrap the traced error as a new cause
/// and capture a second stack; use [`TracedResultExt`] there instead.
///
/// # Performance
///
/// [`traced_with`](ResultExt::traced_with) defers building the info string
/// until an error actually occurs, so the success path pays nothing for it.
/// The stack capture itself only runs on the error path either way.
///
/// # Examples
///
/// ```
/// use error_trace::traits::ResultExt;
/// use error_trace::TracedResult;
///
/// fn process(user_id: u64) -> TracedResult<(), &'static str> {
///     let result: Result<(), &str> = Err("not found");
///     result.traced_with(|| format!("processing user {}", user_id))
/// }
///
/// let report = process(42).unwrap_err().render();
/// assert!(report.contains("processing user 42"));
/// ```
#[allow(clippy::result_large_err)]
pub trait ResultExt<T, E> {
    /// Wraps the error arm, capturing the call stack at this call site.
    fn traced(self) -> TracedResult<T, E>;

    /// Wraps the error arm and attaches an info annotation.
    fn traced_info<S: Into<String>>(self, info: S) -> TracedResult<T, E>;

    /// Wraps the error arm, attaching a lazily-built info annotation.
    ///
    /// The closure only runs when the `Result` is an `Err`.
    fn traced_with<F>(self, f: F) -> TracedResult<T, E>
    where
        F: FnOnce() -> String;
}

#[allow(clippy::result_large_err)]
impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn traced(self) -> TracedResult<T, E> {
        self.map_err(|e| trace(e))
    }

    #[inline]
    fn traced_info<S: Into<String>>(self, info: S) -> TracedResult<T, E> {
        self.map_err(|e| trace(e).with_info(info))
    }

    #[inline]
    fn traced_with<F>(self, f: F) -> TracedResult<T, E>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| trace(e).with_info(f()))
    }
}

/// Extension trait for decorating an already-traced error arm.
///
/// No capture happens here; the existing frames are kept and only the
/// decoration changes.
///
/// # Examples
///
/// ```
/// use error_trace::traits::{ResultExt, TracedResultExt};
/// use error_trace::TracedResult;
///
/// fn inner() -> TracedResult<(), &'static str> {
///     Err("inner error").traced()
/// }
///
/// fn outer() -> TracedResult<(), &'static str> {
///     inner().info("outer operation")
/// }
///
/// let err = outer().unwrap_err();
/// assert_eq!(err.info(), "outer operation");
/// ```
pub trait TracedResultExt<T, E> {
    /// Overwrites the info annotation on the error arm.
    fn info<S: Into<String>>(self, info: S) -> Self;

    /// Sets the tail-skip count on the error arm (clamped to the frame
    /// count).
    fn skip(self, n: usize) -> Self;
}

impl<T, E> TracedResultExt<T, E> for Result<T, TracedError<E>> {
    #[inline]
    fn info<S: Into<String>>(self, info: S) -> Self {
        self.map_err(|e| e.with_info(info))
    }

    #[inline]
    fn skip(self, n: usize) -> Self {
        self.map_err(|e| e.with_skip(n))
    }
}
