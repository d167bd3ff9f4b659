use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::Point3;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The estimated crossing location of two sight lines in world space.
///
/// This is a pure derived value owned by the caller. It has no lifecycle of
/// its own; it is recomputed on demand from the four live points that define
/// the two lines and is never cached by the algorithms that produce it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CrossingEstimate(pub Point3<f64>);

impl CrossingEstimate {
    /// Retrieve the euclidean 3d point of the estimate.
    pub fn point(self) -> Point3<f64> {
        self.0
    }

    /// Returns true when the estimate contains no NaN or infinity.
    ///
    /// A non-finite estimate is the signature of a degenerate or parallel
    /// pair of input lines.
    pub fn is_finite(&self) -> bool {
        self.0.coords.iter().all(|n| n.is_finite())
    }
}
