use four_point::HomographyFit;
use log::*;
use plinth_core::nalgebra::Point2;
use plinth_geom::{BaseFrame, BlockDimensions, DepthResolution, TriangleAspect};

/// Observes the intermediate results of a reconstruction.
///
/// Every method has an empty default, so an observer only implements what it cares
/// about. `()` observes nothing.
pub trait Diagnostics {
    fn homography(&mut self, _fit: &HomographyFit) {}

    fn depth(&mut self, _depth: &DepthResolution) {}

    fn base_frame(&mut self, _frame: &BaseFrame) {}

    fn interior_points(&mut self, _points: &[Point2<f64>]) {}

    fn block_dimensions(&mut self, _dimensions: &BlockDimensions) {}

    /// `base_aspect` is the aspect ratio of the recovered base frame, for comparison.
    fn triangle_aspect(&mut self, _aspect: &TriangleAspect, _base_aspect: f64) {}

    fn osculated_points(&mut self, _points: &[Point2<f64>; 8]) {}
}

impl Diagnostics for () {}

/// Forwards every observation to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn homography(&mut self, fit: &HomographyFit) {
        debug!("homography: {}", fit.homography.0);
        debug!(
            "null-space eigenvalue {:e}, worst anchor reprojection {:e}",
            fit.eigenvalue, fit.reprojection_error
        );
    }

    fn depth(&mut self, depth: &DepthResolution) {
        info!("field of view: {}°", depth.field_of_view_degrees());
        debug!("depth scale: {}", depth.lambda);
        debug!("outer rectangle points:");
        for point in &depth.base_points {
            debug!("  {:?}", point.coords.as_slice());
        }
    }

    fn base_frame(&mut self, frame: &BaseFrame) {
        info!("base lengths: {:?}", frame.lengths);
        info!("estimate of base aspect ratio: {}", frame.aspect_ratio());
        let scene_of_base = frame.scene_of_base();
        debug!("scene_of_base: {}", scene_of_base);
        match scene_of_base.try_inverse() {
            Some(inverse) => debug!("scene_of_base⁻¹: {}", inverse),
            None => warn!("scene_of_base is not invertible"),
        }
    }

    fn interior_points(&mut self, points: &[Point2<f64>]) {
        debug!("interior points in 2d space:");
        for point in points {
            debug!("  {:?}", point.coords.as_slice());
        }
    }

    fn block_dimensions(&mut self, dimensions: &BlockDimensions) {
        debug!(
            "a1, a2, b, c: {} {} {} {}",
            dimensions.a, dimensions.a2, dimensions.b, dimensions.c
        );
        info!(
            "the two measurements of a differ by {:.2}%",
            dimensions.a_discrepancy_percent()
        );
    }

    fn triangle_aspect(&mut self, aspect: &TriangleAspect, base_aspect: f64) {
        match aspect.mean() {
            Some(mean) => info!(
                "right-triangle aspect estimates {:?} (mean {}) against base aspect {}",
                aspect.estimates, mean, base_aspect
            ),
            None => warn!("no marked triple admits a right-triangle aspect estimate"),
        }
    }

    fn osculated_points(&mut self, points: &[Point2<f64>; 8]) {
        trace!("osculated interior points: {:?}", points);
    }
}
