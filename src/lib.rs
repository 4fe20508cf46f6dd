//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trace::*` or pick focused pieces as needed.
//!
//! Wrapping an error captures the call stack once, at the wrap site; every
//! later decoration (info text, tail-skip, formatter overrides) is pure data
//! manipulation, and rendering never inspects the stack again.
//!
//! # Examples
//!
//! ## Wrap, Annotate, Render
//!
//! ```
//! use error_trace::trace;
//! use std::io;
//!
//! let err = trace(io::Error::other("connection reset"))
//!     .with_info("while syncing replica state");
//!
//! let report = err.render();
//! assert!(report.contains("🔴  Error : connection reset"));
//! assert!(report.contains("ℹ️  Info  : while syncing replica state"));
//! assert!(report.contains(" at "));
//! ```
//!
//! ## Result Chains
//!
//! ```
//! use error_trace::prelude::*;
//!
//! fn load_config() -> TracedResult<String, std::io::Error> {
//!     std::fs::read_to_string("config.toml")
//!         .traced_info("loading configuration")
//! }
//!
//! if let Err(err) = load_config() {
//!     assert_eq!(err.info(), "loading configuration");
//!     assert!(!err.frames().is_empty());
//! }
//! ```
//!
//! ## Structured Export
//!
//! ```
//! use error_trace::trace;
//!
//! let map = trace("timeout").with_info("dialing peer").to_json();
//! assert_eq!(map["error"], "timeout");
//! assert_eq!(map["info"], "dialing peer");
//! assert!(map["stack_trace"].is_array());
//! ```

/// Call-stack capture and path trimming
pub mod capture;
/// Ergonomic macro for wrapping at the point of failure
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The wrap entry points
pub mod trace;
/// Extension traits for `Result` chains
pub mod traits;
/// Frame, TracedError, and formatter structures
pub mod types;

/// Tracing integration - report emission through `tracing` (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export common items at the root, but encourage using the prelude for
// application code.
pub use capture::{CaptureConfig, DEFAULT_CAPTURE_DEPTH};
pub use trace::{trace, trace_with};
pub use traits::{ResultExt, TracedResultExt};
pub use types::{
    default_frame_format, default_header_format, ErrorSource, Frame, FrameFormatter, FrameVec,
    HeaderFormatter, TracedError, TracedResult,
};

#[cfg(feature = "tracing")]
pub use tracing_ext::ResultLogExt;
