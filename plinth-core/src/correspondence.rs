use crate::{NormalizedPoint, PlanePoint};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The unit-square corners the four anchor points are mapped to, in anchor order:
/// `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)`.
pub fn unit_square() -> [PlanePoint; 4] {
    [
        PlanePoint::new(0.0, 0.0),
        PlanePoint::new(1.0, 0.0),
        PlanePoint::new(0.0, 1.0),
        PlanePoint::new(1.0, 1.0),
    ]
}

/// Normalized image point `.0` must map to plane point `.1`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Correspondence(pub NormalizedPoint, pub PlanePoint);

/// Pairs four anchors with the corners of [`unit_square`].
pub fn unit_square_correspondences(anchors: [NormalizedPoint; 4]) -> [Correspondence; 4] {
    let corners = unit_square();
    [0, 1, 2, 3].map(|i| Correspondence(anchors[i], corners[i]))
}
