use std::fmt::{self, Debug, Display};

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::types::formatter::{
    default_frame_formatter, default_header_formatter, FrameFormatter, HeaderFormatter,
};
use crate::types::{Frame, FrameVec};

/// An error decorated with the call stack captured at the point of wrapping.
///
/// A `TracedError` pairs a cause with an ordered frame list (innermost call
/// site first), an optional free-text info annotation, a tail-skip count for
/// partial rendering, and two pluggable formatter slots. Construct one with
/// [`trace`](crate::trace) (or [`from_frames`](TracedError::from_frames) for
/// synthetic stacks), then chain mutators:
///
/// ```
/// use error_trace::trace;
/// use std::io;
///
/// let err = trace(io::Error::other("connection reset"))
///     .with_info("while syncing replica state");
///
/// let report = err.render();
/// assert!(report.contains("connection reset"));
/// assert!(report.contains("while syncing replica state"));
/// ```
///
/// # Ownership
///
/// Mutators consume `self` and hand it back, so decoration reads as a chain
/// and two independently created traced errors can never observe each
/// other's changes. Use [`Clone`] when an explicit copy-on-mutate is wanted.
///
/// # The zero value
///
/// Wrapping an absent cause yields a zero value: it renders to the empty
/// string under every render mode, exports an empty mapping, and every
/// mutator is a harmless no-op. Pass `None` with the cause type bound by
/// context (a bare `None::<E>` leaves the conversion target ambiguous), or
/// use [`TracedError::empty`]:
///
/// ```
/// use error_trace::{trace, TracedError};
/// use std::io;
///
/// let absent: TracedError<io::Error> = trace(None);
/// assert_eq!(absent.render(), "");
/// assert!(absent.to_json().is_empty());
/// ```
#[derive(Clone)]
pub struct TracedError<E> {
    cause: Option<E>,
    info: String,
    frames: FrameVec,
    skip: usize,
    header_format: HeaderFormatter,
    frame_format: FrameFormatter,
}

impl<E> TracedError<E> {
    /// The zero-value traced error: no cause, no frames.
    pub fn empty() -> Self {
        Self {
            cause: None,
            info: String::new(),
            frames: FrameVec::new(),
            skip: 0,
            header_format: default_header_formatter(),
            frame_format: default_frame_formatter(),
        }
    }

    /// Builds a traced error from an explicit frame list.
    ///
    /// This is the injection seam for unit tests and for callers that
    /// attribute an error to a synthetic or externally-derived stack. The
    /// frames are taken in order, innermost first, exactly as a live capture
    /// would store them.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::{Frame, TracedError};
    ///
    /// let err = TracedError::from_frames("testing", [
    ///     Frame::new("a.rs", 10, "foo"),
    ///     Frame::new("b.rs", 20, "bar"),
    /// ]);
    /// assert_eq!(err.frames().len(), 2);
    /// ```
    pub fn from_frames<I>(cause: E, frames: I) -> Self
    where
        I: IntoIterator<Item = Frame>,
    {
        Self {
            cause: Some(cause),
            info: String::new(),
            frames: frames.into_iter().collect(),
            skip: 0,
            header_format: default_header_formatter(),
            frame_format: default_frame_formatter(),
        }
    }

    /// The wrapped cause, or `None` for the zero value.
    #[inline]
    pub fn cause(&self) -> Option<&E> {
        self.cause.as_ref()
    }

    /// The info annotation; empty when none was attached.
    #[inline]
    pub fn info(&self) -> &str {
        &self.info
    }

    /// The captured frames, innermost call site first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The effective tail-skip count.
    #[inline]
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Attaches a free-text info annotation; the last call wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::trace;
    ///
    /// let err = trace("boom").with_info("first").with_info("second");
    /// assert_eq!(err.info(), "second");
    /// ```
    #[inline]
    pub fn with_info<S: Into<String>>(mut self, info: S) -> Self {
        self.info = info.into();
        self
    }

    /// Sets how many frames to omit from the tail (oldest end) when
    /// rendering. Values beyond the frame count are silently clamped.
    #[inline]
    pub fn with_skip(mut self, n: usize) -> Self {
        self.skip = n.min(self.frames.len());
        self
    }

    /// Rewrites the innermost frame's line number.
    ///
    /// Useful when a dispatcher wants to attribute the error to the handler
    /// it invoked rather than to the literal wrap site. No-op when there are
    /// no frames.
    #[inline]
    pub fn with_line(mut self, line: u32) -> Self {
        if let Some(frame) = self.frames.first_mut() {
            frame.line = line;
        }
        self
    }

    /// Rewrites the innermost frame's function name. No-op when there are
    /// no frames.
    #[inline]
    pub fn with_func<S: Into<String>>(mut self, func_name: S) -> Self {
        if let Some(frame) = self.frames.first_mut() {
            frame.func_name = func_name.into();
        }
        self
    }

    /// Replaces the header formatter; later calls override earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::trace;
    ///
    /// let err = trace("boom")
    ///     .with_header_format(|cause, info| format!("E={cause} I={info}"));
    /// assert!(err.render().starts_with("E=boom"));
    /// ```
    pub fn with_header_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.header_format = std::sync::Arc::new(f);
        self
    }

    /// Replaces the per-frame formatter; later calls override earlier ones.
    pub fn with_frame_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, u32, &str) -> String + Send + Sync + 'static,
    {
        self.frame_format = std::sync::Arc::new(f);
        self
    }
}

impl<E: Display> TracedError<E> {
    /// Renders the full report: header, then one line per non-skipped frame.
    ///
    /// The skip count trims frames from the outermost (oldest) end; when it
    /// covers the whole stack only the header is emitted. Rendering is pure:
    /// two calls with no mutation in between yield identical output. The
    /// zero value renders to the empty string.
    pub fn render(&self) -> String {
        self.render_with_skip(self.skip)
    }

    /// Renders the header plus only the innermost frame, where the error
    /// started.
    ///
    /// Equivalent to a full render with the skip set to `frames.len() - 1`.
    pub fn origin(&self) -> String {
        self.render_with_skip(self.frames.len().saturating_sub(1))
    }

    fn render_with_skip(&self, skip: usize) -> String {
        let Some(cause) = self.cause.as_ref() else {
            return String::new();
        };
        let skip = skip.min(self.frames.len());
        let mut out = (self.header_format)(&cause.to_string(), &self.info);
        for frame in &self.frames[..self.frames.len() - skip] {
            out.push_str(&(self.frame_format)(&frame.func_name, frame.line, &frame.file));
        }
        out
    }

    /// Exports the error as a key-value mapping for structured logging.
    ///
    /// The mapping carries three entries: `error` (the cause's display
    /// form), `info`, and `stack_trace` (the full ordered frame list, with
    /// empty frame fields omitted). The zero value exports an empty mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::trace;
    ///
    /// let map = trace("boom").with_info("ctx").to_json();
    /// assert_eq!(map["error"], "boom");
    /// assert_eq!(map["info"], "ctx");
    /// assert!(map["stack_trace"].is_array());
    /// ```
    pub fn to_json(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let Some(cause) = self.cause.as_ref() else {
            return map;
        };
        map.insert("error".into(), Value::String(cause.to_string()));
        map.insert("info".into(), Value::String(self.info.clone()));
        map.insert(
            "stack_trace".into(),
            serde_json::to_value(self.frames.as_slice()).unwrap_or(Value::Null),
        );
        map
    }
}

impl<E> Default for TracedError<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: Display> Display for TracedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// Formatter slots carry no state worth printing and are not comparable, so
// Debug and PartialEq cover the data fields only.
impl<E: Debug> Debug for TracedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedError")
            .field("cause", &self.cause)
            .field("info", &self.info)
            .field("frames", &self.frames)
            .field("skip", &self.skip)
            .finish_non_exhaustive()
    }
}

impl<E: PartialEq> PartialEq for TracedError<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cause == other.cause
            && self.info == other.info
            && self.frames == other.frames
            && self.skip == other.skip
    }
}

impl<E: Display> Serialize for TracedError<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<E> std::error::Error for TracedError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Wrapping via `?` in functions returning [`TracedResult`](crate::TracedResult):
/// converting a raw error into a `TracedError` captures the stack at the
/// conversion site.
impl<E> From<E> for TracedError<E> {
    fn from(error: E) -> Self {
        crate::trace(error)
    }
}
