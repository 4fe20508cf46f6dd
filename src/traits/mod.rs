//! Extension traits for wiring traced errors into `Result` chains.
//!
//! - [`ResultExt`]: wrap the error arm of any `Result`, optionally attaching
//!   info eagerly or lazily.
//! - [`TracedResultExt`]: decorate an already-traced error arm without
//!   triggering a second capture.

pub mod result_ext;

pub use result_ext::{ResultExt, TracedResultExt};
