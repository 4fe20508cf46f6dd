use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One resolved entry of a captured call stack.
///
/// A frame pairs a source file path (home-trimmed, best effort), a line
/// number, and a function name. The function name may carry a
/// module-qualifying prefix such as `my_app::sync::flush`.
///
/// Frames are immutable once captured; the only sanctioned rewrites are
/// [`TracedError::with_line`](crate::TracedError::with_line) and
/// [`TracedError::with_func`](crate::TracedError::with_func), which touch
/// the innermost frame only.
///
/// Serialization omits fields that are semantically empty (empty file,
/// zero line, empty function name), so sparse frames stay compact in
/// structured logs.
///
/// # Examples
///
/// ```
/// use error_trace::Frame;
///
/// let frame = Frame::new("src/sync.rs", 42, "my_app::sync::flush");
/// assert_eq!(frame.line, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Source file path, process-relative or home-trimmed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file: String,
    /// Line number; zero when the symbol could not be resolved to a line.
    #[serde(default, skip_serializing_if = "line_is_unresolved")]
    pub line: u32,
    /// Function name, possibly module-qualified.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub func_name: String,
}

fn line_is_unresolved(line: &u32) -> bool {
    *line == 0
}

impl Frame {
    /// Creates a frame from its three components.
    #[inline]
    pub fn new<F, N>(file: F, line: u32, func_name: N) -> Self
    where
        F: Into<String>,
        N: Into<String>,
    {
        Self {
            file: file.into(),
            line,
            func_name: func_name.into(),
        }
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at {} line {} {}", self.func_name, self.line, self.file)
    }
}
