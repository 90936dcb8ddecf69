use thiserror::Error;

/// The ways the supplied reference points can be inconsistent with a planar,
/// rectangular, orthogonal base. Every variant is fatal to the reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("homography: eigendecomposition of the constraint matrix did not converge")]
    EigenDecomposition,
    #[error("homography: null-space eigenvalue {eigenvalue:e} exceeds tolerance {tolerance:e}")]
    NullSpace { eigenvalue: f64, tolerance: f64 },
    #[error("homography: anchor {index} reprojects with error {error:e} (tolerance {tolerance:e})")]
    Reprojection {
        index: usize,
        error: f64,
        tolerance: f64,
    },
    #[error("homography: matrix is singular and has no inverse")]
    SingularHomography,
    #[error("depth resolution: edge pre-image depths have product {product:e}, which leaves the depth scale undetermined")]
    DepthSign { product: f64 },
    #[error("depth resolution: depth scale radicand {radicand:e} is not positive, so no depth scale makes the base a rectangle")]
    DepthRadicand { radicand: f64 },
    #[error("base frame: a base edge has zero length")]
    DegenerateEdge,
    #[error("base frame: scene-of-base transform is singular")]
    SingularFrame,
    #[error("interior points: point {index} maps to infinity on the base plane")]
    PointAtInfinity { index: usize },
    #[error("interior points: expected at least {expected} marked points, found {found}")]
    MissingInteriorPoints { expected: usize, found: usize },
    #[error("interior points: a block footprint edge has zero length")]
    DegenerateFootprint,
}
