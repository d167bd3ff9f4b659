use cross_track_core::{
    nalgebra::Point3, CrossingEstimate, SightLine, TriangulatorSightLines,
};

/// Computes the pair of mutually closest points on two sight lines, the
/// first on `a` and the second on `b`.
///
/// This is the standard double cross-product construction for skew lines.
/// With `d1` and `d2` the line directions and `n = d1 x d2`, the vectors
/// `n1 = d1 x n` and `n2 = d2 x n` are the normals of the planes that carry
/// one line and cut the other at its closest point.
///
/// The arithmetic is raw IEEE: a degenerate line or a parallel pair drives
/// the divisors `d1 . n2` and `d2 . n1` to zero and the components of the
/// result to NaN or infinity. Near such configurations the divisors approach
/// zero continuously and the output grows without bound. Nothing is detected
/// or guarded here; callers that need robustness check their lines first or
/// inspect the result for finiteness, as [`MidpointTriangulator`] does.
pub fn closest_points(a: &SightLine, b: &SightLine) -> (Point3<f64>, Point3<f64>) {
    let p1 = a.origin;
    let d1 = a.direction();
    let p2 = b.origin;
    let d2 = b.direction();

    let n = d1.cross(&d2);
    let n1 = d1.cross(&n);
    let n2 = d2.cross(&n);

    let c1 = p1 + d1 * ((p2 - p1).dot(&n2) / d1.dot(&n2));
    let c2 = p2 + d2 * ((p1 - p2).dot(&n1) / d2.dot(&n1));
    (c1, c2)
}

/// Estimates the crossing of the line through `la0` and `la1` with the line
/// through `lb0` and `lb1` as the midpoint of their closest points.
///
/// For two non-degenerate, non-parallel lines this is the unique point of
/// minimum total squared distance to both lines, and the exact intersection
/// when the lines truly cross. The result is a deterministic pure function
/// of the four inputs.
///
/// Like [`closest_points`], this performs no degeneracy detection: a
/// collapsed point pair or parallel lines yield non-finite components rather
/// than a finite but meaningless point.
pub fn estimate_crossing(
    la0: Point3<f64>,
    la1: Point3<f64>,
    lb0: Point3<f64>,
    lb1: Point3<f64>,
) -> Point3<f64> {
    let (c1, c2) = closest_points(&SightLine::new(la0, la1), &SightLine::new(lb0, lb1));
    Point3::from((c1.coords + c2.coords) * 0.5)
}

/// Triangulates the crossing of two sight lines as the midpoint of their
/// closest points, rejecting configurations that produce a non-finite
/// result.
///
/// This is the [`TriangulatorSightLines`] surface over
/// [`estimate_crossing`]: where the raw function lets a degenerate or
/// parallel configuration propagate as NaN or infinity, this triangulator
/// maps any such result to `None` so hosts never display a meaningless
/// point.
///
/// # Example
/// ```
/// use cross_track_core::{nalgebra::Point3, SightLine, TriangulatorSightLines};
/// use cross_track_geom::crossing::MidpointTriangulator;
///
/// // Two lines constructed to truly cross at (1, 0, 0).
/// let a = SightLine::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
/// let b = SightLine::new(Point3::new(1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 0.0));
/// let crossing = MidpointTriangulator.triangulate_sight_lines(a, b).unwrap();
/// assert!((crossing.point() - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct MidpointTriangulator;

impl TriangulatorSightLines for MidpointTriangulator {
    fn triangulate_sight_lines(&self, a: SightLine, b: SightLine) -> Option<CrossingEstimate> {
        let (c1, c2) = closest_points(&a, &b);
        Some(CrossingEstimate(Point3::from((c1.coords + c2.coords) * 0.5)))
            .filter(|estimate| {
                // Ensure the estimate contains no NaN or infinity.
                estimate.is_finite()
            })
    }
}
