use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A point in centered, aspect-corrected image coordinates.
///
/// The image center is the origin, X is right and Y is up. Both axes are scaled by
/// half of the image width, so X spans `[-1, 1]` and Y spans a narrower range for
/// landscape images. See [`ImageFrame::normalize`](crate::ImageFrame::normalize).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NormalizedPoint(pub Point2<f64>);

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point2::new(x, y))
    }

    /// Conceptually appends a `1.0` to the point so it can be multiplied by a homography.
    pub fn homogeneous(self) -> Vector3<f64> {
        self.0.to_homogeneous()
    }
}

/// A point in the coordinate system of the base, where the four base corners
/// sit on the corners of the unit square.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PlanePoint(pub Point2<f64>);

impl PlanePoint {
    pub fn new(u: f64, v: f64) -> Self {
        Self(Point2::new(u, v))
    }

    pub fn homogeneous(self) -> Vector3<f64> {
        self.0.to_homogeneous()
    }

    /// Rescales unit-square coordinates into physical units along the base edges.
    pub fn scaled(self, lengths: [f64; 2]) -> Point2<f64> {
        Point2::new(self.x * lengths[0], self.y * lengths[1])
    }
}

/// The inverse-homography image of a [`PlanePoint`].
///
/// The first two components are already in the units of the normalized image, but the
/// third one is the true depth multiplied by a scale that a single homography cannot
/// determine. Resolving that scale is the job of the depth resolver downstream.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PreImage(pub Vector3<f64>);

impl PreImage {
    /// Projects the pre-image back onto the normalized image plane.
    ///
    /// Returns `None` when the homogeneous depth is exactly zero.
    pub fn project(self) -> Option<NormalizedPoint> {
        Point2::from_homogeneous(self.0).map(NormalizedPoint)
    }

    /// Lifts the pre-image into a metric 3d point given the resolved depth scale `lambda`.
    ///
    /// The depth is negated so that points in front of the camera have negative Z, which
    /// is the convention of the renderers the scene is handed to.
    pub fn lift(self, lambda: f64) -> Point3<f64> {
        Point3::new(self.x, self.y, -lambda * self.z)
    }
}
