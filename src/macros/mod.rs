//! Convenience macro for wrapping errors at the point of failure.
//!
//! [`macro@crate::traced`] wraps an error and, with extra arguments,
//! attaches a formatted info annotation in one step.

/// Wraps an error with a captured call stack, optionally attaching info.
///
/// # Syntax
///
/// - `traced!(err)` — equivalent to [`trace(err)`](crate::trace)
/// - `traced!(err, "fmt", args..)` — additionally attaches
///   `format!("fmt", args..)` as the info annotation
///
/// The format arguments are only evaluated when the macro runs, which on
/// typical error paths is already inside an `Err` arm; there is no success
/// path to keep cheap here.
///
/// # Examples
///
/// ```
/// use error_trace::traced;
/// use std::io;
///
/// let user_id = 42;
/// let err = traced!(io::Error::other("not found"), "looking up user {}", user_id);
/// assert_eq!(err.info(), "looking up user 42");
/// assert!(!err.frames().is_empty());
/// ```
#[macro_export]
macro_rules! traced {
    ($err:expr $(,)?) => {
        $crate::trace($err)
    };
    ($err:expr, $($arg:tt)*) => {
        $crate::trace($err).with_info(format!($($arg)*))
    };
}
