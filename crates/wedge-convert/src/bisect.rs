//! Triangle bisection.
//!
//! Reduces an arbitrary triangle to one or two right triangles by dropping
//! a perpendicular from the vertex opposite the longest edge onto that
//! edge.

use wedge_types::Triangle;

use crate::error::{ConvertError, ConvertResult};

/// Outcome of bisecting one triangle.
///
/// Iterating yields the contained right triangles in construction order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bisection {
    /// The input already had its right angle opposite the longest edge and
    /// is returned unchanged.
    Right(Triangle),
    /// The input was split into two right triangles `(A, C, D)` and
    /// `(B, C, D)`, where `A`/`B` are the endpoints of the longest edge,
    /// `C` the opposite vertex, and `D` the foot of the altitude from `C`.
    /// Both halves are right-angled at `D` and share the edge `C-D`.
    Split(Triangle, Triangle),
}

impl Bisection {
    /// Number of triangles in this outcome (1 or 2).
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Right(_) => 1,
            Self::Split(_, _) => 2,
        }
    }

    /// Always false; bisection produces at least one triangle.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl IntoIterator for Bisection {
    type Item = Triangle;
    type IntoIter = BisectionIter;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Right(t) => BisectionIter {
                first: Some(t),
                second: None,
            },
            Self::Split(a, b) => BisectionIter {
                first: Some(a),
                second: Some(b),
            },
        }
    }
}

/// Iterator over the triangles of a [`Bisection`].
#[derive(Debug)]
pub struct BisectionIter {
    first: Option<Triangle>,
    second: Option<Triangle>,
}

impl Iterator for BisectionIter {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        self.first.take().or_else(|| self.second.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.first.is_some()) + usize::from(self.second.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for BisectionIter {}

/// Bisect a triangle into one or two right triangles.
///
/// The longest edge is selected by scanning v0->v1, v1->v2, v2->v0 and
/// replacing the running best on `len >= best_len`. The `>=` is a
/// reproducibility contract, not an accident: a later edge wins any tie
/// with an earlier one, so an exact three-way tie resolves to the v2->v0
/// edge. Changing it would silently move the bisection apex.
///
/// With `A`/`B` the chosen edge's endpoints and `C` the opposite vertex,
/// `u = A - C`, `v = B - C`, `w = B - A`:
///
/// - `u . v == 0` exactly means the right angle already sits at `C`; the
///   input is returned unchanged, making bisection idempotent for such
///   triangles.
/// - Otherwise the foot `D = A + t * w` with `t = -(u . w) / (w . w)` is
///   the orthogonal projection of `C` onto the line `AB`, and the result
///   is the two halves `(A, C, D)` and `(B, C, D)`.
///
/// # Errors
///
/// [`ConvertError::DegenerateEdge`] if the chosen longest edge has zero
/// length (`w . w == 0`), which leaves the projection undefined.
///
/// # Example
///
/// ```
/// use wedge_convert::{bisect, Bisection};
/// use wedge_types::{Point3, Triangle};
///
/// // Right angle at v0, opposite the hypotenuse: returned unchanged.
/// let right = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// assert!(matches!(bisect(&right).unwrap(), Bisection::Right(_)));
///
/// // An equilateral triangle splits in two.
/// let equilateral = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 0.75_f32.sqrt(), 0.0),
/// );
/// assert_eq!(bisect(&equilateral).unwrap().len(), 2);
/// ```
#[allow(clippy::many_single_char_names, clippy::similar_names)]
// Single-char names: standard mathematical notation for the projection
pub fn bisect(triangle: &Triangle) -> ConvertResult<Bisection> {
    let pts = triangle.vertices();

    // The three edges as (start, end, opposite) vertex indices, in the
    // fixed scan order AB -> BC -> CA.
    const EDGES: [(usize, usize, usize); 3] = [(0, 1, 2), (1, 2, 0), (2, 0, 1)];

    let mut best = EDGES[0];
    let mut best_len = (pts[best.1] - pts[best.0]).norm();

    for edge in &EDGES[1..] {
        let len = (pts[edge.1] - pts[edge.0]).norm();
        if len >= best_len {
            best = *edge;
            best_len = len;
        }
    }

    let a = pts[best.0];
    let b = pts[best.1];
    let c = pts[best.2];

    let u = a - c;
    let v = b - c;
    let w = b - a;

    // Exact comparison: the fixed point is bit-for-bit, not approximate.
    if u.dot(&v) == 0.0 {
        return Ok(Bisection::Right(*triangle));
    }

    let ww = w.dot(&w);
    if ww == 0.0 {
        return Err(ConvertError::DegenerateEdge);
    }

    let t = -u.dot(&w) / ww;
    let d = a + w * t;

    Ok(Bisection::Split(
        Triangle::new(a, c, d),
        Triangle::new(b, c, d),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use wedge_types::Point3;

    fn equilateral() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 0.75_f32.sqrt(), 0.0),
        )
    }

    #[test]
    fn right_triangle_is_a_fixed_point() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        match bisect(&tri).unwrap() {
            Bisection::Right(out) => assert_eq!(out, tri),
            Bisection::Split(_, _) => panic!("right triangle must not split"),
        }
    }

    #[test]
    fn axis_aligned_right_triangles_are_fixed_points() {
        // Exact-coordinate right triangles whose right angle sits opposite
        // the longest edge; the `u . v == 0` comparison is exact for all
        // of them.
        let cases = [
            Triangle::from_arrays([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([0.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]),
            Triangle::from_arrays([1.0, 1.0, 1.0], [1.0, 1.0, 2.0], [1.0, 5.0, 1.0]),
        ];
        for tri in cases {
            assert!(matches!(bisect(&tri).unwrap(), Bisection::Right(_)));
        }
    }

    #[test]
    fn split_halves_are_right_angled_at_the_foot() {
        let (t1, t2) = match bisect(&equilateral()).unwrap() {
            Bisection::Split(a, b) => (a, b),
            Bisection::Right(_) => panic!("expected a split"),
        };
        // Halves are (endpoint, apex, foot): the legs meeting at the foot
        // are perpendicular up to rounding.
        for half in [t1, t2] {
            let leg_a = half.v0 - half.v2;
            let leg_b = half.v1 - half.v2;
            assert_abs_diff_eq!(leg_a.dot(&leg_b), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn split_conserves_area() {
        let tri = equilateral();
        let (t1, t2) = match bisect(&tri).unwrap() {
            Bisection::Split(a, b) => (a, b),
            Bisection::Right(_) => panic!("expected a split"),
        };
        assert_abs_diff_eq!(t1.area() + t2.area(), tri.area(), epsilon = 1e-5);
    }

    #[test]
    fn split_halves_share_the_altitude_edge() {
        let (t1, t2) = match bisect(&equilateral()).unwrap() {
            Bisection::Split(a, b) => (a, b),
            Bisection::Right(_) => panic!("expected a split"),
        };
        // Both halves are (endpoint, C, D): C and D are shared verbatim.
        assert_eq!(t1.v1, t2.v1);
        assert_eq!(t1.v2, t2.v2);
        assert_ne!(t1.v0, t2.v0);
    }

    #[test]
    fn split_produces_four_unique_points() {
        let tri = equilateral();
        let result = bisect(&tri).unwrap();
        let pts: Vec<Point3<f32>> = result.into_iter().flat_map(|t| t.vertices()).collect();
        assert_eq!(pts.len(), 6);

        let mut unique: Vec<Point3<f32>> = Vec::new();
        for p in pts {
            if !unique.iter().any(|q| (q - p).norm() < 1e-5) {
                unique.push(p);
            }
        }
        assert_eq!(unique.len(), 4);

        // The original three vertices survive...
        for original in tri.vertices() {
            assert!(unique.iter().any(|q| (q - original).norm() < 1e-5));
        }
        // ...and the new point is the foot of the altitude from the apex.
        // The `>=` tie-break picks the v2->v0 edge of an equilateral
        // triangle, so the apex is v1 and the foot is that edge's midpoint.
        let foot = Point3::new(0.25, 0.75_f32.sqrt() / 2.0, 0.0);
        assert!(unique.iter().any(|q| (q - foot).norm() < 1e-4));
    }

    #[test]
    fn exact_three_way_tie_picks_the_last_scanned_edge() {
        // Every edge of this regular triangle has squared length exactly
        // 2.0 in f32, so all three lengths are bit-identical and the
        // `>=` scan must settle on the v2->v0 edge, making v1 the apex.
        let tri = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        );
        let (t1, t2) = match bisect(&tri).unwrap() {
            Bisection::Split(a, b) => (a, b),
            Bisection::Right(_) => panic!("expected a split"),
        };
        // Halves are (A, C, D) and (B, C, D) with A = v2, B = v0, C = v1.
        assert_eq!(t1.v0, tri.v2);
        assert_eq!(t2.v0, tri.v0);
        assert_eq!(t1.v1, tri.v1);
        assert_eq!(t2.v1, tri.v1);
        // D is the midpoint of the tied edge for a regular triangle.
        assert_abs_diff_eq!(t1.v2.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(t1.v2.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t1.v2.z, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn point_like_triangle_is_degenerate() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let tri = Triangle::new(p, p, p);
        assert_eq!(bisect(&tri), Err(ConvertError::DegenerateEdge));
    }

    #[test]
    fn iterator_yields_in_construction_order() {
        let result = bisect(&equilateral()).unwrap();
        assert_eq!(result.len(), 2);
        let collected: Vec<Triangle> = result.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
