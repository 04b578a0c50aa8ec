//! Error type for the engine.
//!
//! The engine surfaces exactly two failure modes as values; every other
//! out-of-range input is absorbed as a silent no-op by design.

use thiserror::Error;

/// Errors returned by buffer construction and cursor positioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Construction was attempted with a zero capacity.
    #[error("initial capacity must be positive")]
    InvalidCapacity,

    /// A requested position (or line) falls outside the valid range.
    ///
    /// `len` is the size of the valid range at the moment of the call:
    /// buffer length for positions, line count for lines.
    #[error("position {pos} out of bounds (limit {len})")]
    OutOfBounds { pos: usize, len: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
