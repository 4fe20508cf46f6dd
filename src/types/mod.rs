//! Core data types: frames, the traced error, the wrap-input discriminator,
//! and the pluggable formatter slots.
//!
//! # Examples
//!
//! ```
//! use error_trace::{trace, Frame, TracedError};
//!
//! let live = trace("connection refused").with_info("dialing peer 7");
//! assert!(live.render().contains("connection refused"));
//!
//! // Synthetic stacks take the same path as live captures.
//! let synthetic = TracedError::from_frames("timeout", [
//!     Frame::new("src/net.rs", 88, "my_app::net::dial"),
//! ]);
//! assert!(synthetic.origin().contains("my_app::net::dial"));
//! ```

use smallvec::SmallVec;

pub mod error_source;
pub mod formatter;
pub mod frame;
pub mod traced_error;

pub use error_source::ErrorSource;
pub use formatter::{
    default_frame_format, default_header_format, FrameFormatter, HeaderFormatter,
};
pub use frame::Frame;
pub use traced_error::TracedError;

/// SmallVec-backed frame list.
///
/// Inline storage covers the zero-value case without a heap allocation;
/// live captures at the default depth spill to the heap.
pub type FrameVec = SmallVec<[Frame; 1]>;

/// Result alias whose error arm carries a captured call stack.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The cause type
pub type TracedResult<T, E> = Result<T, TracedError<E>>;
