//! Right-triangle to wedge conversion.

use nalgebra::{Point3, Vector3};
use wedge_rotation::{from_to_rotation, normalize_euler_degrees, to_euler_angles};
use wedge_types::{Aabb, Triangle, Wedge};

use crate::error::{ConvertError, ConvertResult};

/// Convert a right triangle into a wedge.
///
/// The wedge sits at the triangle's centroid, oriented so that world +Y
/// (the canonical flat-face axis) maps onto the triangle's face normal,
/// with the rotation expressed as canonical Euler degrees. The scale
/// components are the extents of the triangle's local-frame bounding box,
/// with `scale.x` fixed at `0` (the wedge is a flat shim; see
/// [`Wedge`]).
///
/// Position and rotation depend only on the vertex set and winding, not on
/// which vertex carries the right angle; relabelings that preserve the
/// physical triangle produce identical wedges.
///
/// # Errors
///
/// [`ConvertError::DegenerateNormal`] if the triangle has zero area, which
/// leaves the orientation undefined. Bubbling this up instead of feeding a
/// zero vector into the rotation keeps `NaN` out of every wedge field.
///
/// # Example
///
/// ```
/// use wedge_convert::to_wedge;
/// use wedge_types::{Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let wedge = to_wedge(&tri).unwrap();
///
/// assert_eq!(wedge.scale.x, 0.0);
/// assert!((wedge.rot.x - 90.0).abs() < 1e-3);
/// ```
pub fn to_wedge(triangle: &Triangle) -> ConvertResult<Wedge> {
    let pos = triangle.centroid();
    let normal = triangle.normal().ok_or(ConvertError::DegenerateNormal)?;

    let q = from_to_rotation(&Vector3::y(), &normal);
    let rot = normalize_euler_degrees(&to_euler_angles(&q).map(f32::to_degrees));

    // Measure the triangle in the wedge's local frame: translate to the
    // centroid, then undo the orientation.
    let inverse = q.inverse();
    let mut bounds = Aabb::empty();
    for vertex in triangle.vertices() {
        let local = inverse * (vertex - pos);
        bounds.expand_to_include(&Point3::from(local));
    }

    let extents = bounds.size();
    let scale = Vector3::new(0.0, extents.y, extents.z);

    Ok(Wedge::new(pos, rot, scale))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn xy_right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn position_is_the_centroid() {
        let wedge = to_wedge(&xy_right_triangle()).unwrap();
        assert_abs_diff_eq!(wedge.pos.x, 1.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(wedge.pos.y, 1.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(wedge.pos.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn xy_plane_triangle_tips_ninety_degrees_about_x() {
        // The face normal is +Z; pointing +Y at it rolls 90 degrees.
        let wedge = to_wedge(&xy_right_triangle()).unwrap();
        assert_abs_diff_eq!(wedge.rot.x, 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(wedge.rot.y, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(wedge.rot.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn scale_x_is_zero_and_extents_non_negative() {
        let wedge = to_wedge(&xy_right_triangle()).unwrap();
        assert_eq!(wedge.scale.x, 0.0);
        assert!(wedge.scale.y >= 0.0);
        assert!(wedge.scale.z >= 0.0);
    }

    #[test]
    fn local_frame_flattens_the_face_axis() {
        // The local frame maps the face normal onto local +Y, so a planar
        // triangle has (numerically) no extent along it.
        let wedge = to_wedge(&xy_right_triangle()).unwrap();
        assert_abs_diff_eq!(wedge.scale.y, 0.0, epsilon = 1e-5);
        assert!(wedge.scale.z > 0.5);
    }

    #[test]
    fn ground_plane_triangle_needs_no_rotation() {
        // A triangle in the XZ plane with CCW-from-above winding has a +Y
        // normal already.
        let tri = Triangle::new(
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 1.0),
            Point3::new(1.0, 2.0, 0.0),
        );
        let wedge = to_wedge(&tri).unwrap();
        assert_eq!(wedge.rot, Vector3::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(wedge.pos.y, 2.0, epsilon = 1e-6);
        // With no rotation, local extents are the world extents.
        assert_abs_diff_eq!(wedge.scale.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(wedge.scale.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn right_angle_relabeling_preserves_pos_and_rot() {
        // Swapping the two leg vertices flips winding, so instead rotate
        // the labels cyclically, which preserves the physical triangle and
        // its winding.
        let tri = xy_right_triangle();
        let relabeled = Triangle::new(tri.v1, tri.v2, tri.v0);

        let a = to_wedge(&tri).unwrap();
        let b = to_wedge(&relabeled).unwrap();

        assert_abs_diff_eq!(a.pos.x, b.pos.x, epsilon = 1e-6);
        assert_abs_diff_eq!(a.pos.y, b.pos.y, epsilon = 1e-6);
        assert_abs_diff_eq!(a.pos.z, b.pos.z, epsilon = 1e-6);
        assert_abs_diff_eq!(a.rot.x, b.rot.x, epsilon = 1e-3);
        assert_abs_diff_eq!(a.rot.y, b.rot.y, epsilon = 1e-3);
        assert_abs_diff_eq!(a.rot.z, b.rot.z, epsilon = 1e-3);
    }

    #[test]
    fn degenerate_triangle_is_rejected() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(to_wedge(&tri), Err(ConvertError::DegenerateNormal));
    }

    #[test]
    fn no_nan_or_inf_in_any_field() {
        let tris = [
            xy_right_triangle(),
            Triangle::from_arrays([0.0, 0.0, 0.0], [0.0, 0.0, 2.0], [0.0, 3.0, 0.0]),
            Triangle::from_arrays([-1.0, 4.0, 2.0], [3.0, -2.0, 0.5], [0.0, 0.0, -3.0]),
        ];
        for tri in tris {
            let w = to_wedge(&tri).unwrap();
            for value in [
                w.pos.x, w.pos.y, w.pos.z, w.rot.x, w.rot.y, w.rot.z, w.scale.x, w.scale.y,
                w.scale.z,
            ] {
                assert!(value.is_finite());
            }
        }
    }
}
