use plinth_core::{ImageFrame, KeyPoint};
use serde::{Deserialize, Serialize};

/// The hand-marked points of the reference photograph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Annotation {
    /// The size of the photograph in pixels, `[width, height]`.
    #[serde(default = "default_image")]
    pub image: [f64; 2],
    /// The four corners of the base, in the order they map to the unit square:
    /// `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)`.
    #[serde(default = "default_anchors")]
    pub anchors: [[f64; 2]; 4],
    /// Marked points on the base, as two triples `pab, po, pcd` forming right triangles.
    #[serde(default = "default_interior")]
    pub interior: Vec<[f64; 2]>,
}

fn default_image() -> [f64; 2] {
    [1920.0, 1280.0]
}

fn default_anchors() -> [[f64; 2]; 4] {
    [[660.0, 1162.0], [1992.0, 726.0], [123.0, 917.0], [1441.0, 630.0]]
}

fn default_interior() -> Vec<[f64; 2]> {
    vec![
        [531.0, 941.0],
        [737.0, 974.0],
        [987.0, 842.0],
        [1283.0, 808.0],
        [1481.0, 830.0],
        [1647.0, 697.0],
    ]
}

impl Default for Annotation {
    fn default() -> Self {
        Self {
            image: default_image(),
            anchors: default_anchors(),
            interior: default_interior(),
        }
    }
}

impl Annotation {
    pub fn frame(&self) -> ImageFrame {
        self.image.into()
    }

    pub fn anchor_keypoints(&self) -> [KeyPoint; 4] {
        self.anchors.map(KeyPoint::from)
    }

    pub fn interior_keypoints(&self) -> Vec<KeyPoint> {
        self.interior.iter().copied().map(KeyPoint::from).collect()
    }

    /// Multiplies every pixel coordinate and the image size by `factor`.
    ///
    /// The reconstruction only depends on pixel positions relative to the image, so this
    /// is useful for checking that a differently sized copy of the photograph agrees.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |[x, y]: [f64; 2]| [x * factor, y * factor];
        Self {
            image: scale(self.image),
            anchors: self.anchors.map(scale),
            interior: self.interior.iter().copied().map(scale).collect(),
        }
    }
}
