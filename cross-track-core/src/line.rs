use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A ray in world space given by an ordered pair of points: the reference
/// origin it is cast from (such as a camera's optical center) and the tracked
/// point it passes through.
///
/// A `SightLine` is a plain value, not a persisted entity. The direction is
/// rederived from the two points on every call and nothing is cached, so a
/// line rebuilt from live positions always reflects them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SightLine {
    /// The fixed point the ray is cast from.
    pub origin: Point3<f64>,
    /// The observed point the ray passes through.
    pub through: Point3<f64>,
}

impl SightLine {
    /// Creates a sight line from its reference origin and the tracked point
    /// it passes through.
    pub fn new(origin: Point3<f64>, through: Point3<f64>) -> Self {
        Self { origin, through }
    }

    /// The direction of the line, `through - origin`.
    ///
    /// This is the zero vector iff the line is degenerate.
    pub fn direction(&self) -> Vector3<f64> {
        self.through - self.origin
    }

    /// Returns true when the two defining points coincide, leaving the line
    /// with no direction.
    pub fn is_degenerate(&self) -> bool {
        self.direction() == Vector3::zeros()
    }

    /// Returns true when the directions of the two lines are parallel (their
    /// cross product is the zero vector), which makes the closest-point
    /// construction between them ill-defined.
    ///
    /// A degenerate line is parallel to everything by this definition.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.direction().cross(&other.direction()) == Vector3::zeros()
    }

    /// The same sight line translated by `offset`.
    pub fn translated(&self, offset: Vector3<f64>) -> Self {
        Self {
            origin: self.origin + offset,
            through: self.through + offset,
        }
    }
}
