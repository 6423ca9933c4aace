//! Error types for triangle-to-wedge conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while bisecting or converting a triangle.
///
/// Both variants describe degenerate geometry. They exist so that callers
/// never receive a wedge containing `NaN` or infinite components; a batch
/// caller may skip the offending triangle, a strict caller may abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The triangle's longest edge has zero length, so the foot of the
    /// altitude is undefined. Only point-like triangles (all three
    /// vertices coincident) trigger this.
    #[error("degenerate triangle: longest edge has zero length")]
    DegenerateEdge,

    /// The triangle has zero area, so its face normal (and with it the
    /// wedge orientation) is undefined.
    #[error("degenerate triangle: face normal is undefined (zero area)")]
    DegenerateNormal,
}
