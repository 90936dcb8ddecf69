use plinth_core::{
    nalgebra::{Point3, Vector3},
    GeometryError, Homography, PlanePoint, PreImage,
};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The unit-square corners that are lifted into 3d, in the order the resolver stores them:
/// the origin corner, the end of the short (`v`) edge, the end of the long (`u`) edge and
/// the far corner.
pub fn lifted_corners() -> [PlanePoint; 4] {
    [
        PlanePoint::new(0.0, 0.0),
        PlanePoint::new(0.0, 1.0),
        PlanePoint::new(1.0, 0.0),
        PlanePoint::new(1.0, 1.0),
    ]
}

/// The depth scale that makes the base a rectangle, and the corners it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DepthResolution {
    /// The depth scale `λ`. This is also the focal length in units of half the image width.
    pub lambda: f64,
    /// The pre-images of [`lifted_corners`], oriented so the origin corner has positive depth.
    pub pre_images: [PreImage; 4],
    /// The pre-images lifted with `λ`, in the same order.
    pub base_points: [Point3<f64>; 4],
}

impl DepthResolution {
    /// Resolves `λ` from the pre-images of the base corners under the inverse of `homography`.
    pub fn from_homography(homography: &Homography) -> Result<Self, GeometryError> {
        let inverse = homography.inverse()?;
        let mut pre_images = lifted_corners().map(|corner| PreImage(inverse * corner.homogeneous()));

        // The null vector's sign is arbitrary. Flip so the base sits in front of the camera.
        if pre_images[0].z < 0.0 {
            for pre_image in &mut pre_images {
                pre_image.0 = -pre_image.0;
            }
        }

        let [origin, v_end, u_end, _] = pre_images;
        let lambda = depth_scale(u_end.0 - origin.0, v_end.0 - origin.0)?;
        let base_points = pre_images.map(|pre_image| pre_image.lift(lambda));

        Ok(Self {
            lambda,
            pre_images,
            base_points,
        })
    }

    /// The horizontal field of view `2·atan(1/λ)` in radians.
    pub fn field_of_view(&self) -> f64 {
        2.0 * (1.0 / self.lambda).atan()
    }

    pub fn field_of_view_degrees(&self) -> f64 {
        self.field_of_view().to_degrees()
    }

    /// The focal length for a sensor `aperture` wide, from `fov = 2·atan(aperture / 2f)`.
    pub fn focal_length(&self, aperture: f64) -> f64 {
        aperture * self.lambda / 2.0
    }
}

/// Solves `(ud.x, ud.y, λ·ud.z) · (vd.x, vd.y, λ·vd.z) = 0` for `λ`:
///
/// `λ = √((ud.x·vd.x + ud.y·vd.y) / -(ud.z·vd.z))`
///
/// The depth product `ud.z·vd.z` must be nonzero, and the planar dot product must have
/// the opposite sign to it. Otherwise `λ` is undetermined or imaginary.
pub fn depth_scale(ud: Vector3<f64>, vd: Vector3<f64>) -> Result<f64, GeometryError> {
    let product = ud.z * vd.z;
    if !(product != 0.0 && product.is_finite()) {
        return Err(GeometryError::DepthSign { product });
    }
    let radicand = (ud.x * vd.x + ud.y * vd.y) / -product;
    if !(radicand > 0.0 && radicand.is_finite()) {
        return Err(GeometryError::DepthRadicand { radicand });
    }
    Ok(radicand.sqrt())
}
