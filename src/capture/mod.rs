//! Call-stack capture behind a small internal abstraction.
//!
//! The rest of the crate never walks the stack itself: it asks this module
//! for a [`FrameVec`] and otherwise works on plain data, which keeps every
//! other component testable with synthetic frame lists (see
//! [`TracedError::from_frames`](crate::TracedError::from_frames)).
//!
//! Capture resolves each program counter to a file path, line number, and
//! demangled function name via the `backtrace` crate, then applies two
//! cosmetic transforms:
//!
//! - the trailing `::h<hash>` segment rustc appends to symbols is stripped,
//! - a leading literal match of the current user's home directory is removed
//!   from file paths (best effort; an unresolvable home directory leaves
//!   paths unmodified).
//!
//! The crate's own wrapping frames (this module, the wrap entry points, the
//! `Result` adapters, and the `core` conversion shims between them) are
//! excluded from the head of the captured stack, so frame 0 is always the
//! call site that invoked the wrap.

use backtrace::Backtrace;

use crate::types::{Frame, FrameVec};

/// Default number of stack slots captured per wrap.
pub const DEFAULT_CAPTURE_DEPTH: usize = 10;

/// Capture-time knobs for [`trace_with`](crate::trace_with).
///
/// # Examples
///
/// ```
/// use error_trace::{trace_with, CaptureConfig};
///
/// let shallow = trace_with("boom", CaptureConfig::new(2));
/// assert!(shallow.frames().len() <= 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Maximum number of frames to keep, counted from the wrap call site.
    pub max_depth: usize,
}

impl CaptureConfig {
    /// A config bounded at `max_depth` frames.
    #[inline]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Walks the stack until it is exhausted instead of stopping at a bound.
    #[inline]
    pub fn unbounded() -> Self {
        Self { max_depth: usize::MAX }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_CAPTURE_DEPTH }
    }
}

/// Captures the current call stack, innermost caller first.
///
/// Never fails: unresolvable symbols are dropped and an unresolvable home
/// directory degrades to untrimmed paths.
#[inline(never)]
pub(crate) fn capture_frames(config: CaptureConfig) -> FrameVec {
    let trace = Backtrace::new();
    let home = dirs::home_dir().map(|path| path.to_string_lossy().into_owned());
    collect_frames(&trace, config.max_depth, home.as_deref())
}

fn collect_frames(trace: &Backtrace, max_depth: usize, home: Option<&str>) -> FrameVec {
    let mut frames = FrameVec::new();
    let mut in_preamble = true;
    for frame in trace.frames() {
        if frames.len() >= max_depth {
            break;
        }
        let Some(symbol) = frame.symbols().first() else {
            continue;
        };
        let name = symbol
            .name()
            .map(|name| strip_symbol_hash(&name.to_string()).to_string())
            .unwrap_or_default();
        if in_preamble {
            if name.is_empty() || is_wrapper_frame(&name) {
                continue;
            }
            in_preamble = false;
        }
        let file = symbol
            .filename()
            .map(|path| trim_home(&path.to_string_lossy(), home))
            .unwrap_or_default();
        let line = symbol.lineno().unwrap_or(0);
        frames.push(Frame::new(file, line, name));
    }
    frames
}

/// Frames belonging to the wrap machinery itself, skipped at the head of the
/// walk so captured stacks start at the caller of the wrap.
fn is_wrapper_frame(name: &str) -> bool {
    const WRAPPER_MARKERS: &[&str] = &[
        "error_trace::capture",
        "error_trace::trace::",
        "error_trace::traits::result_ext",
        "error_trace::types::traced_error",
        "core::convert::",
        "core::result::",
        "core::ops::function::",
    ];
    name.starts_with("backtrace::")
        || WRAPPER_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Strips the `::h0123456789abcdef` disambiguation suffix rustc appends to
/// demangled symbol names.
fn strip_symbol_hash(name: &str) -> &str {
    if let Some(pos) = name.rfind("::h") {
        let hash = &name[pos + 3..];
        if hash.len() == 16 && hash.bytes().all(|b| b.is_ascii_hexdigit()) {
            return &name[..pos];
        }
    }
    name
}

/// Best-effort literal strip of the home-directory prefix.
///
/// This is deliberately a plain string prefix match, not path
/// canonicalization; paths that do not start with the literal home string
/// pass through unmodified.
fn trim_home(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if !home.is_empty() => path.strip_prefix(home).unwrap_or(path).to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbol_hash_suffix() {
        assert_eq!(
            strip_symbol_hash("my_app::sync::flush::h0123456789abcdef"),
            "my_app::sync::flush"
        );
    }

    #[test]
    fn keeps_names_without_a_hash() {
        assert_eq!(strip_symbol_hash("my_app::sync::flush"), "my_app::sync::flush");
        // A non-hex or wrong-length tail is part of the real name.
        assert_eq!(strip_symbol_hash("ns::hello"), "ns::hello");
        assert_eq!(strip_symbol_hash("ns::h123"), "ns::h123");
    }

    #[test]
    fn trims_literal_home_prefix() {
        assert_eq!(trim_home("/home/dev/src/a.rs", Some("/home/dev")), "/src/a.rs");
    }

    #[test]
    fn leaves_paths_outside_home_unmodified() {
        assert_eq!(trim_home("/opt/src/a.rs", Some("/home/dev")), "/opt/src/a.rs");
        assert_eq!(trim_home("/opt/src/a.rs", None), "/opt/src/a.rs");
        assert_eq!(trim_home("/opt/src/a.rs", Some("")), "/opt/src/a.rs");
    }

    #[test]
    fn wrapper_frames_are_recognized() {
        assert!(is_wrapper_frame("error_trace::capture::capture_frames"));
        assert!(is_wrapper_frame("error_trace::trace::trace_with"));
        assert!(is_wrapper_frame(
            "<core::result::Result<T,E> as error_trace::traits::result_ext::ResultExt<T,E>>::traced"
        ));
        assert!(is_wrapper_frame("backtrace::backtrace::trace_unsynchronized"));
        assert!(!is_wrapper_frame("my_app::capture_the_flag"));
    }
}
