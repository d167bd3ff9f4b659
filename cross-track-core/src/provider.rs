use crate::{CrossingEstimate, SightLine, TriangulatorSightLines};
use nalgebra::Point3;

/// Allows the retrieval of a live world-space position.
///
/// The host's animation or constraint system implements this over whatever
/// mechanism samples its transforms. Implementations must report the current
/// position on every call rather than a cached one, so that bindings built on
/// top always reflect the current tracking data.
pub trait PositionProvider {
    /// Retrieves the current world-space position.
    fn position(&self) -> Point3<f64>;
}

impl<'a, P: PositionProvider + ?Sized> PositionProvider for &'a P {
    fn position(&self) -> Point3<f64> {
        (**self).position()
    }
}

/// A plain point is its own provider. Use this for reference origins that do
/// not move.
impl PositionProvider for Point3<f64> {
    fn position(&self) -> Point3<f64> {
        *self
    }
}

/// Adapts a sampling closure into a [`PositionProvider`].
///
/// ```
/// use cross_track_core::{nalgebra::Point3, PositionProvider, Sampled};
///
/// let provider = Sampled(|| Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(provider.position(), Point3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sampled<F>(pub F);

impl<F: Fn() -> Point3<f64>> PositionProvider for Sampled<F> {
    fn position(&self) -> Point3<f64> {
        (self.0)()
    }
}

/// Binds the four live positions that define two sight lines to a
/// triangulator.
///
/// Each line pairs a reference origin (such as a camera) with the tracked
/// point its ray passes through. The host calls
/// [`evaluate`](CrossingBinding::evaluate) once per evaluation tick and
/// writes the result into the entity that displays the crossing. All four
/// providers are sampled fresh on every call and nothing is cached between
/// calls, so the result follows the tracking data wherever it moves.
///
/// Bindings are independent values. Several crossings may be evaluated in
/// the same tick from separate contexts without coordination, and dropping a
/// binding is all it takes to remove its recomputation; there is no
/// registration table to undo.
///
/// When the four providers have heterogeneous types, bind them through
/// `&dyn PositionProvider`.
#[derive(Debug, Clone, Copy)]
pub struct CrossingBinding<'a, P, T> {
    line_a: (P, P),
    line_b: (P, P),
    triangulator: T,
    name: &'a str,
}

impl<'a, P, T> CrossingBinding<'a, P, T>
where
    P: PositionProvider,
    T: TriangulatorSightLines,
{
    /// Creates a binding from the (origin, tracked point) provider pair of
    /// each line and the triangulator to run over them.
    pub fn new(line_a: (P, P), line_b: (P, P), triangulator: T) -> Self {
        Self {
            line_a,
            line_b,
            triangulator,
            name: "Crossing",
        }
    }

    /// Set the display name of the entity that shows the crossing.
    ///
    /// Default is `"Crossing"`.
    #[must_use]
    pub fn named(self, name: &'a str) -> Self {
        Self { name, ..self }
    }

    /// The display name of the entity that shows the crossing.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Samples all four providers and rebuilds both sight lines.
    pub fn sight_lines(&self) -> (SightLine, SightLine) {
        (
            SightLine::new(self.line_a.0.position(), self.line_a.1.position()),
            SightLine::new(self.line_b.0.position(), self.line_b.1.position()),
        )
    }

    /// Samples all four providers and triangulates the crossing.
    ///
    /// Returns `None` when the triangulator rejects the sampled
    /// configuration under its degeneracy policy.
    pub fn evaluate(&self) -> Option<CrossingEstimate> {
        let (a, b) = self.sight_lines();
        self.triangulator.triangulate_sight_lines(a, b)
    }
}
