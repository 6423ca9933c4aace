//! Core value types for wedge conversion.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Wedge`] - An oriented, positioned, scaled right-triangle proxy
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Precision
//!
//! All coordinates are `f32`. The `PWDG` wire format stores float32 and the
//! codec round-trip is bit-exact, so the whole pipeline stays in single
//! precision rather than narrowing at the serialization boundary.
//!
//! # Coordinate System
//!
//! Right-handed, world +Y is the canonical "up" axis that a wedge's flat
//! face is oriented against. Face winding is counter-clockwise when viewed
//! from the front (normal points toward the viewer).
//!
//! # Example
//!
//! ```
//! use wedge_types::{Point3, Triangle};
//!
//! let tri = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//!
//! assert!((tri.area() - 0.5).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod triangle;
mod wedge;

pub use bounds::Aabb;
pub use triangle::Triangle;
pub use wedge::Wedge;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
