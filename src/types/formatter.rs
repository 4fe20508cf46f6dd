//! Pluggable render strategies for the header and the per-frame lines.
//!
//! A [`TracedError`](crate::TracedError) holds two formatter slots, one for
//! the header (cause text plus optional info) and one for each stack frame.
//! Both default to fixed templates; replace them with
//! [`with_header_format`](crate::TracedError::with_header_format) and
//! [`with_frame_format`](crate::TracedError::with_frame_format).

use std::sync::Arc;

/// Renders the report header from the cause text and the info annotation.
///
/// The info string is empty when no info was attached.
pub type HeaderFormatter = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Renders a single stack frame from its function name, line, and file path.
pub type FrameFormatter = Arc<dyn Fn(&str, u32, &str) -> String + Send + Sync>;

/// The default header template.
///
/// Emits a visual marker followed by the cause text, and an info marker plus
/// the info text only when info is non-empty:
///
/// ```text
/// 🔴  Error : <cause> ⏎
/// ℹ️  Info  : <info>
/// ```
///
/// # Examples
///
/// ```
/// use error_trace::default_header_format;
///
/// let header = default_header_format("disk full", "while flushing");
/// assert!(header.contains("🔴  Error : disk full"));
/// assert!(header.contains("ℹ️  Info  : while flushing"));
///
/// let bare = default_header_format("disk full", "");
/// assert!(!bare.contains("Info"));
/// ```
pub fn default_header_format(cause: &str, info: &str) -> String {
    if info.is_empty() {
        format!("🔴  Error : {} \n ", cause)
    } else {
        format!("🔴  Error : {} \nℹ️  Info  : {} ", cause, info)
    }
}

/// The default frame template: a tab-indented `at FUNC line LINE FILE` line.
///
/// # Examples
///
/// ```
/// use error_trace::default_frame_format;
///
/// let line = default_frame_format("my_app::run", 17, "src/main.rs");
/// assert_eq!(line, "\n \t at my_app::run line 17 src/main.rs ");
/// ```
pub fn default_frame_format(func_name: &str, line: u32, file: &str) -> String {
    format!("\n \t at {} line {} {} ", func_name, line, file)
}

pub(crate) fn default_header_formatter() -> HeaderFormatter {
    Arc::new(|cause, info| default_header_format(cause, info))
}

pub(crate) fn default_frame_formatter() -> FrameFormatter {
    Arc::new(|func_name, line, file| default_frame_format(func_name, line, file))
}
