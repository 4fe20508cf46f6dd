//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_trace::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`traced!`]
//! - **Functions**: [`trace`], [`trace_with`]
//! - **Types**: [`TracedError`], [`Frame`], [`CaptureConfig`], [`TracedResult`]
//! - **Traits**: [`ResultExt`], [`TracedResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_trace::prelude::*;
//!
//! fn load_state() -> TracedResult<String, std::io::Error> {
//!     std::fs::read_to_string("state.json")
//!         .traced_info("loading persisted state")
//! }
//!
//! if let Err(err) = load_state() {
//!     let report = err.render();
//!     assert!(report.contains("loading persisted state"));
//! }
//! ```

pub use crate::traced;

pub use crate::capture::CaptureConfig;
pub use crate::trace::{trace, trace_with};
pub use crate::types::{Frame, TracedError, TracedResult};

pub use crate::traits::{ResultExt, TracedResultExt};
