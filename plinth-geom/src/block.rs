use crate::{BlockDimensions, BLOCK_EDGES};
use core::f64::consts::FRAC_PI_4;
use plinth_core::{
    nalgebra::{Matrix4, Point2, Vector3},
    transform::{rotation4, scaling4, translation4},
};

/// Places the base slab: a box `depth` deep spanning the base, with its top face at `z = 0`.
pub fn base_block_transform(lengths: [f64; 2], depth: f64) -> Matrix4<f64> {
    translation4(Vector3::new(0.0, 0.0, -depth))
        * scaling4(Vector3::new(lengths[0], lengths[1], depth))
}

/// Places one block from its footprint edge `pos1 -> pos2` on the base.
///
/// The unit cube is scaled by `(a, b, c)`, tipped 45° about the edge direction, turned
/// about the vertical to follow the edge and moved to `pos1`:
/// `translate · rotate_z · rotate_x(45°) · scale`.
pub fn block_transform(
    pos1: Point2<f64>,
    pos2: Point2<f64>,
    dimensions: &BlockDimensions,
) -> Matrix4<f64> {
    let displacement = pos2 - pos1;
    translation4(Vector3::new(pos1.x, pos1.y, 0.0))
        * rotation4(displacement.y.atan2(displacement.x), Vector3::z_axis())
        * rotation4(FRAC_PI_4, Vector3::x_axis())
        * scaling4(dimensions.scale())
}

/// Places all four blocks along the [`BLOCK_EDGES`] of the osculated points.
pub fn block_transforms(
    osculated: &[Point2<f64>; 8],
    dimensions: &BlockDimensions,
) -> [Matrix4<f64>; 4] {
    BLOCK_EDGES.map(|(from, to)| block_transform(osculated[from], osculated[to], dimensions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::SQRT_2;
    use plinth_core::nalgebra::Vector4;

    fn dims() -> BlockDimensions {
        BlockDimensions {
            a: 2.0,
            a2: 2.0,
            b: 1.0,
            c: 0.5,
        }
    }

    #[test]
    fn base_block_top_face_at_zero() {
        let m = base_block_transform([3.0, 2.0], 0.25);
        let top = m * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(top, Vector4::new(3.0, 2.0, 0.0, 1.0));
        let bottom = m * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(bottom, Vector4::new(0.0, 0.0, -0.25, 1.0));
    }

    #[test]
    fn block_runs_along_its_edge() {
        let pos1 = Point2::new(1.0, 1.0);
        let pos2 = Point2::new(1.0, 3.0);
        let m = block_transform(pos1, pos2, &dims());
        let origin = m * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(origin, Vector4::new(1.0, 1.0, 0.0, 1.0), epsilon = 1e-15);
        let along = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(along, Vector4::new(1.0, 3.0, 0.0, 1.0), epsilon = 1e-15);
    }

    #[test]
    fn block_rises_at_45_degrees() {
        let m = block_transform(Point2::origin(), Point2::new(1.0, 0.0), &dims());
        let side = m * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert_relative_eq!(
            side,
            Vector4::new(0.0, 1.0 / SQRT_2, 1.0 / SQRT_2, 1.0),
            epsilon = 1e-15
        );
        let up = m * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(
            up,
            Vector4::new(0.0, -0.5 / SQRT_2, 0.5 / SQRT_2, 1.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn reversed_edge_faces_the_other_way() {
        let a = block_transform(Point2::origin(), Point2::new(1.0, 0.0), &dims());
        let b = block_transform(Point2::new(1.0, 0.0), Point2::origin(), &dims());
        let side_a = a * Vector4::new(0.0, 1.0, 0.0, 1.0);
        let side_b = b * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert!(side_a.y > 0.0);
        assert!(side_b.y < 0.0);
    }
}
