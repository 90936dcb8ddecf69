//! # Plinth
//!
//! Reconstructs the base of a sculpture from a single photograph: the camera's field of
//! view, the pose of the base rectangle, and the placement of the blocks standing on it.
//!
//! The input is an [`Annotation`]: the four hand-marked base corners and six marked
//! interior points, all in pixels. [`reconstruct`] runs every stage once and returns a
//! [`Reconstruction`], whose [`SceneGeometry`] is what downstream formatters consume.
//!
//! ```
//! use plinth::{reconstruct, Annotation, ReconstructionSettings};
//!
//! let reconstruction = reconstruct(
//!     &Annotation::default(),
//!     &ReconstructionSettings::default(),
//!     &mut (),
//! )
//! .unwrap();
//! assert_eq!(reconstruction.scene.blocks.len(), 4);
//! ```

mod annotation;
mod diagnostics;
mod document;
mod scene;
mod settings;

pub use annotation::*;
pub use diagnostics::*;
pub use document::*;
pub use scene::*;
pub use settings::*;

use four_point::HomographyFit;
use plinth_core::{
    nalgebra::Point2, unit_square_correspondences, GeometryError, Homography, NormalizedPoint,
};
use plinth_geom::{
    base_block_transform, block_transforms, locate, map_to_plane, osculate, BaseFrame,
    BlockDimensions, DepthResolution, TriangleAspect,
};
use serde::Serialize;

/// Every intermediate result of one reconstruction.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// The anchors in normalized image coordinates.
    pub anchors: [NormalizedPoint; 4],
    pub homography: Homography,
    /// The null-space eigenvalue of the accepted homography.
    pub eigenvalue: f64,
    /// The worst anchor reprojection error of the accepted homography.
    pub reprojection_error: f64,
    pub depth: DepthResolution,
    pub frame: BaseFrame,
    /// The interior points on the base, in physical units along the base edges.
    pub interior: Vec<Point2<f64>>,
    pub osculated: [Point2<f64>; 8],
    pub dimensions: BlockDimensions,
    pub triangle_aspect: TriangleAspect,
    pub scene: SceneGeometry,
}

/// Runs the whole reconstruction, reporting each stage to `diagnostics`.
pub fn reconstruct(
    annotation: &Annotation,
    settings: &ReconstructionSettings,
    diagnostics: &mut impl Diagnostics,
) -> Result<Reconstruction, GeometryError> {
    let frame = annotation.frame();
    let anchors = annotation.anchor_keypoints().map(|p| frame.normalize(p));
    let interior_image: Vec<NormalizedPoint> = annotation
        .interior_keypoints()
        .into_iter()
        .map(|p| frame.normalize(p))
        .collect();

    let HomographyFit {
        homography,
        eigenvalue,
        reprojection_error,
    } = {
        let fit = settings
            .solver()
            .fit(&unit_square_correspondences(anchors))?;
        diagnostics.homography(&fit);
        fit
    };

    let depth = DepthResolution::from_homography(&homography)?;
    diagnostics.depth(&depth);

    let base = BaseFrame::from_base_points(&depth.base_points)?;
    diagnostics.base_frame(&base);
    let scene_of_base4 = base.scene_of_base();
    let base_of_scene4 = base.base_of_scene()?;

    let plane_points = map_to_plane(&homography, &interior_image)?;
    let triangle_aspect = TriangleAspect::from_plane_points(&plane_points)?;
    diagnostics.triangle_aspect(&triangle_aspect, base.aspect_ratio());

    let interior = locate(&homography, base.lengths, &interior_image)?;
    diagnostics.interior_points(&interior);

    let dimensions = BlockDimensions::from_interior(&interior)?;
    diagnostics.block_dimensions(&dimensions);

    let osculated = osculate(&interior, &dimensions)?;
    diagnostics.osculated_points(&osculated);

    let blocks = block_transforms(&osculated, &dimensions)
        .iter()
        .enumerate()
        .map(|(index, &transform)| NamedTransform::new(format!("block{}", index), transform))
        .collect();

    let scene = SceneGeometry {
        base_lengths: base.lengths,
        scene_of_base4,
        base_of_scene4,
        focal_length: depth.focal_length(settings.aperture),
        aperture: settings.aperture,
        field_of_view_degrees: depth.field_of_view_degrees(),
        base_block: NamedTransform::new(
            "base",
            base_block_transform(base.lengths, settings.base_depth),
        ),
        blocks,
    };

    Ok(Reconstruction {
        anchors,
        homography,
        eigenvalue,
        reprojection_error,
        depth,
        frame: base,
        interior,
        osculated,
        dimensions,
        triangle_aspect,
        scene,
    })
}
