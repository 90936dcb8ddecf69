use crate::{GeometryError, NormalizedPoint, PlanePoint, PreImage};
use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Matrix3, Point2};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A projective transform taking [`NormalizedPoint`]s onto the unit-square coordinates
/// of the base ([`PlanePoint`]).
///
/// This is only defined up to a nonzero scale. Solvers produce it with unit Frobenius
/// norm, but nothing here depends on that.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Homography(pub Matrix3<f64>);

impl Homography {
    /// Builds the homography from the 9 coefficients of its null-space vector, in
    /// row-major order.
    pub fn from_coefficients(coefficients: &[f64; 9]) -> Self {
        Self(Matrix3::from_row_slice(coefficients))
    }

    /// Maps a normalized image point onto the base plane, dividing out the projective scale.
    ///
    /// Returns `None` if the point maps exactly onto the line at infinity.
    pub fn apply(&self, point: NormalizedPoint) -> Option<PlanePoint> {
        Point2::from_homogeneous(self.0 * point.homogeneous()).map(PlanePoint)
    }

    /// Retrieves the inverse transform matrix.
    pub fn inverse(&self) -> Result<Matrix3<f64>, GeometryError> {
        self.0
            .try_inverse()
            .ok_or(GeometryError::SingularHomography)
    }

    /// The inverse map, taking a point on the base plane to its 3d pre-image.
    ///
    /// The pre-image is only determined up to the scale of its third component,
    /// so no projective division happens here. Use [`PreImage::project`] to get
    /// back onto the image.
    pub fn apply_inverse(&self, point: PlanePoint) -> Result<PreImage, GeometryError> {
        Ok(PreImage(self.inverse()? * point.homogeneous()))
    }

    /// Negates every coefficient. The result represents the same projective transform.
    #[must_use]
    pub fn negated(self) -> Self {
        Self(-self.0)
    }
}
