use core::f64::consts::SQRT_2;
use plinth_core::{
    nalgebra::{Point2, Vector3},
    transform::{rot90, scale_to},
    GeometryError, Homography, NormalizedPoint, PlanePoint,
};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The number of marked interior points: two triples `pab, po, pcd` whose corners
/// form right triangles on the base.
pub const INTERIOR_POINTS: usize = 6;

/// The footprint edges of the four blocks as index pairs into the osculated points.
///
/// The second block of each quadruple runs along the opposite edge, and the second
/// quadruple's pairs are reversed relative to the first. Both decide which way each
/// block faces.
pub const BLOCK_EDGES: [(usize, usize); 4] = [(0, 1), (2, 3), (5, 4), (7, 6)];

/// Maps normalized image points onto the unit square of the base.
pub fn map_to_plane(
    homography: &Homography,
    points: &[NormalizedPoint],
) -> Result<Vec<PlanePoint>, GeometryError> {
    points
        .iter()
        .enumerate()
        .map(|(index, &point)| {
            homography
                .apply(point)
                .filter(|uv| uv.x.is_finite() && uv.y.is_finite())
                .ok_or(GeometryError::PointAtInfinity { index })
        })
        .collect()
}

/// Maps normalized image points onto the base in physical units along the base edges.
pub fn locate(
    homography: &Homography,
    lengths: [f64; 2],
    points: &[NormalizedPoint],
) -> Result<Vec<Point2<f64>>, GeometryError> {
    Ok(map_to_plane(homography, points)?
        .into_iter()
        .map(|uv| uv.scaled(lengths))
        .collect())
}

pub(crate) fn require_interior(found: usize) -> Result<(), GeometryError> {
    if found < INTERIOR_POINTS {
        return Err(GeometryError::MissingInteriorPoints {
            expected: INTERIOR_POINTS,
            found,
        });
    }
    Ok(())
}

/// The dimensions shared by every block.
///
/// `b` and `c` are divided by `√2` because the measured spans are the footprints of
/// diagonal faces that rise at 45° above the base.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BlockDimensions {
    /// `|ip0 - ip1|`, the block length used for placement.
    pub a: f64,
    /// `|ip3 - ip4|`, an independent measurement of the same length from the second triple.
    pub a2: f64,
    pub b: f64,
    pub c: f64,
}

impl BlockDimensions {
    /// Derives the dimensions from the located interior points.
    pub fn from_interior(points: &[Point2<f64>]) -> Result<Self, GeometryError> {
        require_interior(points.len())?;
        let ip = points;
        Ok(Self {
            a: (ip[0] - ip[1]).norm(),
            a2: (ip[3] - ip[4]).norm(),
            b: (ip[1] - ip[2]).norm() / SQRT_2,
            c: (ip[4] - ip[5]).norm() / SQRT_2,
        })
    }

    /// How far the two measurements of `a` disagree, as a percentage of `a`.
    pub fn a_discrepancy_percent(&self) -> f64 {
        100.0 * (self.a2 - self.a).abs() / self.a
    }

    /// The scale applied to a unit cube to make one block.
    pub fn scale(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }
}

/// Rebuilds the two triples of interior points as two quadruples whose edges coincide
/// exactly, so adjacent blocks osculate instead of each carrying its own marking error.
///
/// On the base these look like:
///
/// ```text
///   0 3
///   1 2    4 7
///          5 6
/// ```
///
/// Points 0, 1 and 4 are taken as marked (4 is the fourth marked point). The edge
/// `s10 = p1 - p0` is then reused everywhere, with perpendicular offsets of `√2·b`
/// and `√2·c`.
pub fn osculate(
    points: &[Point2<f64>],
    dimensions: &BlockDimensions,
) -> Result<[Point2<f64>; 8], GeometryError> {
    require_interior(points.len())?;
    let s10 = points[1] - points[0];
    let across_b = scale_to(rot90(s10), SQRT_2 * dimensions.b)?;
    let across_c = scale_to(rot90(s10), SQRT_2 * dimensions.c)?;

    let mut out = [Point2::origin(); 8];
    out[0] = points[0];
    out[1] = points[1];
    out[2] = out[1] + across_b;
    out[3] = out[2] - s10;
    out[4] = points[3];
    out[5] = out[4] + s10;
    out[6] = out[5] + across_c;
    out[7] = out[6] - s10;
    Ok(out)
}
