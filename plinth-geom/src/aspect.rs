use crate::interior::require_interior;
use plinth_core::{GeometryError, PlanePoint};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Independent estimates of the base aspect ratio from the marked right triangles.
///
/// The unit-square coordinates of the base do not know its aspect ratio. If every
/// u coordinate is stretched by `λ'`, the angle at `po` of each triple `pab, po, pcd`
/// becomes a right angle for exactly one `λ'`, and that `λ'` estimates
/// `long edge / short edge`. This is a cross-check only and never feeds back into
/// the reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleAspect {
    /// One estimate per triple, `None` if that triple admits no real stretch.
    pub estimates: [Option<f64>; 2],
}

impl TriangleAspect {
    /// Computes both estimates from the unit-square coordinates of the six interior points.
    pub fn from_plane_points(points: &[PlanePoint]) -> Result<Self, GeometryError> {
        require_interior(points.len())?;
        Ok(Self {
            estimates: [0, 3].map(|offset| right_angle_stretch(&points[offset..offset + 3])),
        })
    }

    /// The mean of the available estimates.
    pub fn mean(&self) -> Option<f64> {
        let available = self.estimates.iter().flatten();
        let count = available.clone().count();
        if count == 0 {
            return None;
        }
        Some(available.sum::<f64>() / count as f64)
    }
}

/// For `po` at the origin, `(λ'·qab.x, qab.y) · (λ'·qcd.x, qcd.y) = 0` gives
/// `λ' = √(-(qab.y·qcd.y) / (qab.x·qcd.x))`.
fn right_angle_stretch(triple: &[PlanePoint]) -> Option<f64> {
    let (pab, po, pcd) = (triple[0], triple[1], triple[2]);
    let qab = pab.0 - po.0;
    let qcd = pcd.0 - po.0;
    let radicand = -(qab.y * qcd.y) / (qab.x * qcd.x);
    if radicand > 0.0 && radicand.is_finite() {
        Some(radicand.sqrt())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A right triangle on a base twice as long as it is wide, squashed into the unit square.
    fn squashed_triangle(po: (f64, f64)) -> [PlanePoint; 3] {
        let (x, y) = po;
        [
            PlanePoint::new(x + 0.5 / 2.0, y + 0.5),
            PlanePoint::new(x, y),
            PlanePoint::new(x + 0.25 / 2.0, y - 0.25),
        ]
    }

    #[test]
    fn recovers_stretch() {
        let mut points = squashed_triangle((0.2, 0.4)).to_vec();
        points.extend(squashed_triangle((0.6, 0.5)));
        let aspect = TriangleAspect::from_plane_points(&points).unwrap();
        assert_relative_eq!(aspect.estimates[0].unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(aspect.estimates[1].unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(aspect.mean().unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn obtuse_triple_has_no_estimate() {
        let mut points = squashed_triangle((0.2, 0.4)).to_vec();
        points.extend([
            PlanePoint::new(0.5, 0.5),
            PlanePoint::new(0.4, 0.4),
            PlanePoint::new(0.6, 0.6),
        ]);
        let aspect = TriangleAspect::from_plane_points(&points).unwrap();
        assert!(aspect.estimates[1].is_none());
        assert_relative_eq!(aspect.mean().unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn one_triple_is_not_enough() {
        let points = squashed_triangle((0.2, 0.4));
        assert_eq!(
            TriangleAspect::from_plane_points(&points),
            Err(GeometryError::MissingInteriorPoints {
                expected: 6,
                found: 3
            })
        );
    }
}
