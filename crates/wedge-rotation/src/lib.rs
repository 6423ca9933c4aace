//! Rotation utilities for wedge orientation.
//!
//! This crate derives a reproducible Euler-angle representation for "point
//! this axis at that direction" rotations:
//!
//! - [`from_to_rotation`] - minimal-angle quaternion mapping one unit vector
//!   onto another
//! - [`to_euler_angles`] - quaternion to XYZ Euler angles in radians
//! - [`normalize_euler_degrees`] - wrap, gimbal-collapse, and noise-snap
//!   Euler degrees into a canonical form
//! - [`normalized_euler_angles`] - the composition of the three
//!
//! The quaternion is an intermediate working representation only: it travels
//! between [`from_to_rotation`] and [`to_euler_angles`] and is never stored
//! in any output type. Its sign is canonicalized so `w >= 0`, which keeps
//! equivalent rotations from flipping sign when converted to Euler angles.
//!
//! # Example
//!
//! ```
//! use nalgebra::Vector3;
//! use wedge_rotation::normalized_euler_angles;
//!
//! // +Y already points at +Y: no rotation
//! let e = normalized_euler_angles(&Vector3::y(), &Vector3::y());
//! assert_eq!(e, Vector3::new(0.0, 0.0, 0.0));
//!
//! // Pointing +Y at +Z tips 90 degrees about X
//! let e = normalized_euler_angles(&Vector3::z(), &Vector3::y());
//! assert!((e.x - 90.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod euler;
mod quat;

pub use euler::{normalize_euler_degrees, normalized_euler_angles};
pub use quat::{from_to_rotation, to_euler_angles};
