//! Euler-angle canonicalization.

use nalgebra::Vector3;

use crate::quat::{from_to_rotation, to_euler_angles};

/// Pitch distance from +-90 degrees below which roll and yaw collapse.
const GIMBAL_EPS: f32 = 1e-3;

/// Components closer to zero than this are snapped to exactly zero.
const NOISE_EPS: f32 = 1e-4;

/// Wrap Euler degrees into a canonical, reproducible form.
///
/// Each component is wrapped into `[-180, 180)`. If the pitch (y) lands
/// within `1e-3` degrees of +-90, roll and yaw are coupled degrees of
/// freedom; both are forced to `0` so equivalent rotations share one
/// representative. Components within `1e-4` degrees of zero are snapped to
/// exactly `0` to suppress floating-point noise.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use wedge_rotation::normalize_euler_degrees;
///
/// let wrapped = normalize_euler_degrees(&Vector3::new(370.0, -190.0, 540.0));
/// assert_eq!(wrapped, Vector3::new(10.0, 170.0, -180.0));
/// ```
#[must_use]
pub fn normalize_euler_degrees(deg: &Vector3<f32>) -> Vector3<f32> {
    fn wrap(a: f32) -> f32 {
        (a + 180.0).rem_euclid(360.0) - 180.0
    }

    fn snap(a: f32) -> f32 {
        if a.abs() < NOISE_EPS {
            0.0
        } else {
            a
        }
    }

    let mut x = wrap(deg.x);
    let y = wrap(deg.y);
    let mut z = wrap(deg.z);

    // Within the gimbal-lock zone roll and yaw describe the same rotation;
    // collapse them onto the pitch-only representative.
    if (y - 90.0).abs() < GIMBAL_EPS || (y + 90.0).abs() < GIMBAL_EPS {
        x = 0.0;
        z = 0.0;
    }

    Vector3::new(snap(x), snap(y), snap(z))
}

/// Compute the canonical Euler degrees that point `up` at `target`.
///
/// Composes [`from_to_rotation`]`(up, target)`, [`to_euler_angles`], a
/// radians-to-degrees conversion, and [`normalize_euler_degrees`].
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use wedge_rotation::normalized_euler_angles;
///
/// let e = normalized_euler_angles(&Vector3::z(), &Vector3::y());
/// assert!((e.x - 90.0).abs() < 1e-3);
/// assert_eq!(e.y, 0.0);
/// assert_eq!(e.z, 0.0);
/// ```
#[must_use]
pub fn normalized_euler_angles(target: &Vector3<f32>, up: &Vector3<f32>) -> Vector3<f32> {
    let q = from_to_rotation(up, target);
    let degrees = to_euler_angles(&q).map(f32::to_degrees);
    normalize_euler_degrees(&degrees)
}
