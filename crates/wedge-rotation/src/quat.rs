//! Vector-to-vector quaternion construction and Euler decomposition.

use std::f32::consts::PI;
use std::f64::consts::FRAC_PI_2;

use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};

/// Tolerance for the parallel / anti-parallel branches.
const EPS: f32 = 1e-6;

/// Compute the minimal-angle rotation mapping `from` onto `to`.
///
/// Both inputs are normalized internally. The result is sign-canonicalized
/// so `w >= 0`; without this, equivalent rotations can land on opposite
/// hemispheres of the quaternion sphere and produce discontinuous Euler
/// angles downstream.
///
/// Near-parallel inputs return the identity. Near-anti-parallel inputs
/// return a 180-degree rotation about an axis orthogonal to `from` (the
/// cross product with world X, falling back to world Y when `from` is
/// itself along X).
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use wedge_rotation::from_to_rotation;
///
/// let q = from_to_rotation(&Vector3::y(), &Vector3::z());
/// let rotated = q * Vector3::y();
/// assert!((rotated - Vector3::z()).norm() < 1e-6);
/// ```
#[must_use]
pub fn from_to_rotation(from: &Vector3<f32>, to: &Vector3<f32>) -> UnitQuaternion<f32> {
    let f = from.normalize();
    let t = to.normalize();
    let dot = f.dot(&t);

    if dot > 1.0 - EPS {
        return UnitQuaternion::identity();
    }

    if dot < -1.0 + EPS {
        let mut ortho = Vector3::x().cross(&f);
        if ortho.norm_squared() < EPS {
            ortho = Vector3::y().cross(&f);
        }
        let axis = Unit::new_normalize(ortho);
        return canonicalize(UnitQuaternion::from_axis_angle(&axis, PI));
    }

    let cross = f.cross(&t);
    let q = Quaternion::new(1.0 + dot, cross.x, cross.y, cross.z);

    let len_sq = q.norm_squared();
    if len_sq > 0.0 {
        canonicalize(UnitQuaternion::new_unchecked(q / len_sq.sqrt()))
    } else {
        UnitQuaternion::identity()
    }
}

/// Flip the quaternion onto the `w >= 0` hemisphere.
fn canonicalize(q: UnitQuaternion<f32>) -> UnitQuaternion<f32> {
    if q.quaternion().w < 0.0 {
        UnitQuaternion::new_unchecked(-q.into_inner())
    } else {
        q
    }
}

/// Decompose a quaternion into XYZ Euler angles in radians.
///
/// Returns `(roll, pitch, yaw)` as the x, y, z components. The pitch term
/// is clamped to `[-1, 1]` before `asin`, substituting exactly 90 degrees
/// at the clamp boundary instead of NaN when floating-point drift pushes
/// the sine out of range (gimbal lock).
///
/// Products are accumulated in `f64` to keep the decomposition stable for
/// single-precision input.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: angles are within [-pi, pi], well inside f32 range
pub fn to_euler_angles(q: &UnitQuaternion<f32>) -> Vector3<f32> {
    let inner = q.quaternion();
    let x = f64::from(inner.i);
    let y = f64::from(inner.j);
    let z = f64::from(inner.k);
    let w = f64::from(inner.w);

    // roll (x)
    let sinr_cosp = 2.0 * (w * x + y * z);
    let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
    let roll = sinr_cosp.atan2(cosr_cosp);

    // pitch (y), clamped to avoid NaN from asin
    let sinp = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0);
    let pitch = if sinp.abs() >= 1.0 {
        FRAC_PI_2.copysign(sinp)
    } else {
        sinp.asin()
    };

    // yaw (z)
    let siny_cosp = 2.0 * (w * z + x * y);
    let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
    let yaw = siny_cosp.atan2(cosy_cosp);

    Vector3::new(roll as f32, pitch as f32, yaw as f32)
}
