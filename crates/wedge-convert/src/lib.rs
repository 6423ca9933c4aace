//! Triangle-to-wedge conversion for PolyWedge.
//!
//! This crate turns arbitrary triangles into oriented wedge primitives in
//! three stages:
//!
//! - [`bisect`] - split one triangle into one or two right triangles by
//!   dropping a perpendicular from the vertex opposite the longest edge
//! - [`to_wedge`] - derive a [`Wedge`](wedge_types::Wedge)'s position,
//!   rotation, and scale from one right triangle
//! - [`process_batch`] - map both stages over a whole batch, in parallel,
//!   preserving input order
//!
//! # Example
//!
//! ```
//! use wedge_convert::process_batch;
//! use wedge_types::Triangle;
//!
//! let triangles = vec![Triangle::from_arrays(
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.5, 0.866, 0.0],
//! )];
//!
//! let result = process_batch(&triangles);
//! assert_eq!(result.wedges.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod batch;
mod bisect;
mod convert;
mod error;

pub use batch::{process_batch, BatchResult};
pub use bisect::{bisect, Bisection, BisectionIter};
pub use convert::to_wedge;
pub use error::{ConvertError, ConvertResult};
