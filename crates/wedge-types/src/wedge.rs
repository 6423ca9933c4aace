//! Wedge output primitive.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An oriented, positioned, scaled proxy for a right-triangle patch.
///
/// A wedge is the pipeline's output primitive: one wedge per right triangle
/// produced by bisection. Wedges are constructed once and immutable
/// afterward; the binary codec persists them as nine float32 values in
/// `pos, rot, scale` order.
///
/// # Fields
///
/// - `pos` - world-space centroid of the source triangle
/// - `rot` - Euler angles in degrees, XYZ order, canonicalized into the
///   wrap range (see `wedge-rotation`)
/// - `scale` - local bounding-box extents; `scale.x` is fixed at `0`
///
/// `scale.x == 0` makes the wedge a flat right-triangle shim rather than a
/// solid prism. Thickness is an unresolved extension point; do not assign
/// the axis without also revising the file format.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wedge {
    /// World-space position (centroid of the source triangle).
    pub pos: Point3<f32>,
    /// Rotation as Euler degrees, XYZ order, wrapped into `[-180, 180)`.
    pub rot: Vector3<f32>,
    /// Non-negative local extents; the x component is always `0`.
    pub scale: Vector3<f32>,
}

impl Wedge {
    /// Create a new wedge.
    #[inline]
    #[must_use]
    pub const fn new(pos: Point3<f32>, rot: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self { pos, rot, scale }
    }
}
