use crate::{ImagePoint, KeyPoint, NormalizedPoint};
use nalgebra::Point2;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The dimensions of the reference photograph in pixels.
///
/// This is the whole "camera model" of the reconstruction: pixel coordinates are
/// centered on the image and divided by half the image width. The focal length is what
/// the reconstruction solves for, so it is not part of the frame.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ImageFrame {
    pub width: f64,
    pub height: f64,
}

impl ImageFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Takes a point from the image in pixel coordinates and maps it to
    /// `((px - W/2) / (W/2), -(py - H/2) / (W/2))`.
    ///
    /// ```
    /// use plinth_core::{ImageFrame, KeyPoint};
    /// let frame = ImageFrame::new(1920.0, 1280.0);
    /// let p = frame.normalize(KeyPoint::new(660.0, 1162.0));
    /// assert!((p.x + 0.3125).abs() < 1e-15);
    /// assert!((p.y + 0.54375).abs() < 1e-15);
    /// ```
    pub fn normalize<P>(&self, point: P) -> NormalizedPoint
    where
        P: ImagePoint,
    {
        let half_width = self.width / 2.0;
        let centered = point.image_point() - Point2::new(half_width, self.height / 2.0);
        NormalizedPoint::new(centered.x / half_width, -centered.y / half_width)
    }

    /// Converts a [`NormalizedPoint`] back into pixel coordinates.
    pub fn denormalize(&self, point: NormalizedPoint) -> KeyPoint {
        let half_width = self.width / 2.0;
        KeyPoint::new(
            point.x * half_width + half_width,
            -point.y * half_width + self.height / 2.0,
        )
    }
}

impl From<[f64; 2]> for ImageFrame {
    fn from([width, height]: [f64; 2]) -> Self {
        Self::new(width, height)
    }
}
