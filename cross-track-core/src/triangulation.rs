use crate::{CrossingEstimate, SightLine};

/// This trait is for algorithms which estimate the location where two sight
/// lines most nearly cross.
///
/// The computation is a pure function of the two lines: stateless,
/// deterministic, and invoked afresh on every evaluation. Independent calls
/// touch no shared resource, so separate crossings may be triangulated
/// concurrently without coordination.
pub trait TriangulatorSightLines {
    /// Estimates the crossing of lines `a` and `b`.
    ///
    /// Returns `None` when the implementation rejects the configuration
    /// under its degeneracy policy, such as a collapsed or parallel pair of
    /// lines.
    fn triangulate_sight_lines(&self, a: SightLine, b: SightLine) -> Option<CrossingEstimate>;
}
