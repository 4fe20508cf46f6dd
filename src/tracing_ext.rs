//! Tracing integration for error-trace.
//!
//! This module provides utilities for emitting traced-error reports through
//! the `tracing` ecosystem at a logging boundary.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trace = { version = "0.1", features = ["tracing"] }
//! ```

use std::fmt::Display;

use crate::types::{TracedError, TracedResult};

/// Extension trait for logging traced-error arms as they pass through.
///
/// Both methods return the result unchanged, so they slot into the middle
/// of a `Result` chain without disturbing it.
pub trait ResultLogExt<T, E> {
    /// Emits the full rendered report at `error` level when the result is
    /// an `Err`.
    fn log_traced(self) -> Self;

    /// Emits only the origin (header plus innermost frame) at `error`
    /// level when the result is an `Err`.
    fn log_origin(self) -> Self;
}

impl<T, E: Display> ResultLogExt<T, E> for TracedResult<T, E> {
    fn log_traced(self) -> Self {
        if let Err(err) = &self {
            emit(err, err.render());
        }
        self
    }

    fn log_origin(self) -> Self {
        if let Err(err) = &self {
            emit(err, err.origin());
        }
        self
    }
}

fn emit<E: Display>(err: &TracedError<E>, report: String) {
    tracing::error!(
        target: "error_trace",
        info = err.info(),
        frames = err.frames().len(),
        "{}",
        report
    );
}
