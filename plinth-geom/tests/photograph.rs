use approx::assert_abs_diff_eq;
use core::f64::consts::SQRT_2;
use four_point::FourPoint;
use plinth_core::{
    nalgebra::{Matrix3, Point2, Vector4},
    unit_square_correspondences, Homography, ImageFrame, KeyPoint, NormalizedPoint,
};
use plinth_geom::{
    block_transforms, locate, osculate, BaseFrame, BlockDimensions, DepthResolution,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const ANCHORS: [[f64; 2]; 4] = [[660.0, 1162.0], [1992.0, 726.0], [123.0, 917.0], [1441.0, 630.0]];
const INTERIOR: [[f64; 2]; 6] = [
    [531.0, 941.0],
    [737.0, 974.0],
    [987.0, 842.0],
    [1283.0, 808.0],
    [1481.0, 830.0],
    [1647.0, 697.0],
];

fn frame() -> ImageFrame {
    ImageFrame::new(1920.0, 1280.0)
}

fn anchors() -> [NormalizedPoint; 4] {
    ANCHORS.map(|p| frame().normalize(KeyPoint::from(p)))
}

fn homography(anchors: [NormalizedPoint; 4]) -> Homography {
    FourPoint::new()
        .solve(&unit_square_correspondences(anchors))
        .unwrap()
}

fn assert_orthonormal(basis: &Matrix3<f64>) {
    assert_abs_diff_eq!(basis * basis.transpose(), Matrix3::identity(), epsilon = 1e-12);
}

#[test]
fn base_frame_is_orthonormal() {
    let depth = DepthResolution::from_homography(&homography(anchors())).unwrap();
    let frame = BaseFrame::from_base_points(&depth.base_points).unwrap();
    assert_orthonormal(&frame.basis);
    assert!(frame.lengths[0] > frame.lengths[1]);
    assert!(depth.field_of_view_degrees() > 0.0 && depth.field_of_view_degrees() < 180.0);
}

#[test]
fn lifted_corners_form_a_rectangle() {
    let depth = DepthResolution::from_homography(&homography(anchors())).unwrap();
    let [p0, p1, p2, p3] = depth.base_points;
    assert_abs_diff_eq!(p3, p1 + (p2 - p0), epsilon = 1e-12);
    assert_abs_diff_eq!((p1 - p0).dot(&(p2 - p0)), 0.0, epsilon = 1e-12);
}

#[test]
fn lifted_corners_sit_in_front_of_the_camera() {
    let depth = DepthResolution::from_homography(&homography(anchors())).unwrap();
    for point in &depth.base_points {
        assert!(point.z < 0.0);
    }
}

#[test]
fn lifted_corners_project_onto_anchors() {
    let anchors = anchors();
    let depth = DepthResolution::from_homography(&homography(anchors)).unwrap();
    // Lifted corners are (0,0), (0,1), (1,0), (1,1); anchors are (0,0), (1,0), (0,1), (1,1).
    for (point, i) in depth.base_points.iter().zip([0, 2, 1, 3]) {
        let image = Point2::new(point.x, point.y) * (depth.lambda / -point.z);
        assert_abs_diff_eq!(image, anchors[i].0, epsilon = 1e-12);
        let pixel = frame().denormalize(NormalizedPoint(image));
        assert_abs_diff_eq!(pixel.0, Point2::from(ANCHORS[i]), epsilon = 1e-8);
    }
}

#[test]
fn homography_sign_does_not_matter() {
    let h = homography(anchors());
    let a = DepthResolution::from_homography(&h).unwrap();
    let b = DepthResolution::from_homography(&h.negated()).unwrap();
    assert_abs_diff_eq!(a.lambda, b.lambda, epsilon = 1e-15);
    assert_abs_diff_eq!(a.base_points[3], b.base_points[3], epsilon = 1e-15);
}

#[test]
fn osculated_blocks_share_edges() {
    let h = homography(anchors());
    let depth = DepthResolution::from_homography(&h).unwrap();
    let base = BaseFrame::from_base_points(&depth.base_points).unwrap();
    let interior = INTERIOR.map(|p| frame().normalize(KeyPoint::from(p)));
    let ip = locate(&h, base.lengths, &interior).unwrap();
    let dims = BlockDimensions::from_interior(&ip).unwrap();
    let ipr = osculate(&ip, &dims).unwrap();

    let s10 = ipr[1] - ipr[0];
    assert_abs_diff_eq!(ipr[2] - ipr[3], s10, epsilon = 1e-12);
    assert_abs_diff_eq!(ipr[5] - ipr[4], s10, epsilon = 1e-12);
    assert_abs_diff_eq!(ipr[6] - ipr[7], s10, epsilon = 1e-12);

    let across = ipr[2] - ipr[1];
    assert_abs_diff_eq!(across.norm(), SQRT_2 * dims.b, epsilon = 1e-12);
    assert_abs_diff_eq!(across.dot(&s10), 0.0, epsilon = 1e-12);
    let across = ipr[6] - ipr[5];
    assert_abs_diff_eq!(across.norm(), SQRT_2 * dims.c, epsilon = 1e-12);

    // The far end of the first block lands exactly on the second marked point.
    let blocks = block_transforms(&ipr, &dims);
    let far = blocks[0] * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_abs_diff_eq!(far.xy(), ipr[1].coords, epsilon = 1e-12);
    assert_abs_diff_eq!(far.z, 0.0, epsilon = 1e-15);
}

#[quickcheck]
#[allow(clippy::too_many_arguments)]
fn orthogonality_recovery(
    ax: i8,
    ay: i8,
    bx: i8,
    by: i8,
    cx: i8,
    cy: i8,
    dx: i8,
    dy: i8,
) -> TestResult {
    let jitter = [ax, ay, bx, by, cx, cy, dx, dy];
    let mut anchors = anchors();
    for (i, anchor) in anchors.iter_mut().enumerate() {
        anchor.x += jitter[2 * i] as f64 / 2560.0;
        anchor.y += jitter[2 * i + 1] as f64 / 2560.0;
    }
    let h = match FourPoint::new()
        .null_space_tolerance(1e-12)
        .reprojection_tolerance(1e-10)
        .solve(&unit_square_correspondences(anchors))
    {
        Ok(h) => h,
        Err(_) => return TestResult::discard(),
    };
    let depth = match DepthResolution::from_homography(&h) {
        Ok(depth) => depth,
        Err(_) => return TestResult::discard(),
    };
    let frame = match BaseFrame::from_base_points(&depth.base_points) {
        Ok(frame) => frame,
        Err(_) => return TestResult::discard(),
    };
    let gram = frame.basis * frame.basis.transpose();
    TestResult::from_bool((gram - Matrix3::identity()).amax() < 1e-10)
}
