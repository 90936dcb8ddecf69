use log::*;
use plinth_core::{
    nalgebra::{self, OMatrix, OVector, SMatrix, U8, U9},
    Correspondence, GeometryError, Homography,
};

type Constraints = OMatrix<f64, U8, U9>;

/// Encodes the direct linear transform constraints of four correspondences.
///
/// Each correspondence `(s, t)` contributes the rows
///
/// ```text
/// [ -sx -sy -1    0   0   0   sx*tx sy*tx tx ]
/// [   0   0  0  -sx -sy  -1   sx*ty sy*ty ty ]
/// ```
///
/// and the flattened (row-major) homography is the null vector of the result.
pub fn encode_constraints(correspondences: &[Correspondence; 4]) -> Constraints {
    let mut out: Constraints = nalgebra::zero();
    for (i, &Correspondence(source, target)) in correspondences.iter().enumerate() {
        let (sx, sy) = (source.x, source.y);
        let (tx, ty) = (target.x, target.y);

        let x_row = 2 * i;
        out[(x_row, 0)] = -sx;
        out[(x_row, 1)] = -sy;
        out[(x_row, 2)] = -1.0;
        out[(x_row, 6)] = sx * tx;
        out[(x_row, 7)] = sy * tx;
        out[(x_row, 8)] = tx;

        let y_row = 2 * i + 1;
        out[(y_row, 3)] = -sx;
        out[(y_row, 4)] = -sy;
        out[(y_row, 5)] = -1.0;
        out[(y_row, 6)] = sx * ty;
        out[(y_row, 7)] = sy * ty;
        out[(y_row, 8)] = ty;
    }
    out
}

/// The result of a successful [`FourPoint::fit`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HomographyFit {
    pub homography: Homography,
    /// The Rayleigh quotient `‖M h‖²` of the unit null vector, i.e. its eigenvalue in `MᵗM`.
    pub eigenvalue: f64,
    /// The largest per-coordinate reprojection error over the four anchors.
    pub reprojection_error: f64,
}

/// Solves for the homography taking four points onto four others via the null space
/// of the DLT constraint matrix.
///
/// The null vector is the eigenvector of the smallest eigenvalue of `MᵗM`. Unless
/// [`FourPoint::polish`] is disabled, it is then refined by pinning its largest
/// coefficient and solving the remaining 8x8 system exactly.
///
/// The result is always checked: the eigenvalue must be within
/// [`FourPoint::null_space_tolerance`] of zero and every anchor must reproject within
/// [`FourPoint::reprojection_tolerance`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct FourPoint {
    /// Convergence epsilon of the symmetric eigendecomposition.
    pub epsilon: f64,
    /// Maximum eigendecomposition iterations. `0` means no limit.
    pub iterations: usize,
    pub null_space_tolerance: f64,
    pub reprojection_tolerance: f64,
    pub polish: bool,
}

impl FourPoint {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the [`FourPoint::epsilon`].
    #[must_use]
    pub fn epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    /// Sets the [`FourPoint::iterations`].
    #[must_use]
    pub fn iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }

    /// Sets the [`FourPoint::null_space_tolerance`].
    #[must_use]
    pub fn null_space_tolerance(self, null_space_tolerance: f64) -> Self {
        Self {
            null_space_tolerance,
            ..self
        }
    }

    /// Sets the [`FourPoint::reprojection_tolerance`].
    #[must_use]
    pub fn reprojection_tolerance(self, reprojection_tolerance: f64) -> Self {
        Self {
            reprojection_tolerance,
            ..self
        }
    }

    /// Sets the [`FourPoint::polish`].
    #[must_use]
    pub fn polish(self, polish: bool) -> Self {
        Self { polish, ..self }
    }

    /// Solves for the homography. See [`FourPoint::fit`].
    pub fn solve(&self, correspondences: &[Correspondence; 4]) -> Result<Homography, GeometryError> {
        self.fit(correspondences).map(|fit| fit.homography)
    }

    /// Solves for the homography and reports how well it satisfies its constraints.
    pub fn fit(&self, correspondences: &[Correspondence; 4]) -> Result<HomographyFit, GeometryError> {
        let constraints = encode_constraints(correspondences);
        trace!("homography constraint matrix: {}", constraints);

        let mtm: SMatrix<f64, 9, 9> = constraints.transpose() * constraints;
        let eigens = mtm
            .try_symmetric_eigen(self.epsilon, self.iterations)
            .ok_or(GeometryError::EigenDecomposition)?;
        let mut null_vector = eigens
            .eigenvalues
            .iter()
            .enumerate()
            .min_by_key(|&(_, &n)| float_ord::FloatOrd(n))
            .map(|(ix, _)| eigens.eigenvectors.column(ix).into_owned())
            .ok_or(GeometryError::EigenDecomposition)?;
        trace!("null-space eigenvector: {}", null_vector.transpose());

        if self.polish {
            if let Some(polished) = polish_null_vector(&constraints, &null_vector) {
                null_vector = polished;
            }
        }

        let eigenvalue = (constraints * null_vector).norm_squared();
        if !(eigenvalue.abs() < self.null_space_tolerance) {
            return Err(GeometryError::NullSpace {
                eigenvalue,
                tolerance: self.null_space_tolerance,
            });
        }

        let mut coefficients = [0.0; 9];
        coefficients.copy_from_slice(null_vector.as_slice());
        let homography = Homography::from_coefficients(&coefficients);

        let mut reprojection_error = 0.0f64;
        for (index, &Correspondence(source, target)) in correspondences.iter().enumerate() {
            let error = homography
                .apply(source)
                .map(|uv| (uv.x - target.x).abs().max((uv.y - target.y).abs()))
                .unwrap_or(f64::INFINITY);
            if !(error < self.reprojection_tolerance) {
                return Err(GeometryError::Reprojection {
                    index,
                    error,
                    tolerance: self.reprojection_tolerance,
                });
            }
            reprojection_error = reprojection_error.max(error);
        }

        Ok(HomographyFit {
            homography,
            eigenvalue,
            reprojection_error,
        })
    }
}

impl Default for FourPoint {
    fn default() -> Self {
        Self {
            epsilon: f64::EPSILON,
            iterations: 0,
            null_space_tolerance: 1e-15,
            reprojection_tolerance: 1e-13,
            polish: true,
        }
    }
}

/// Re-solves the null vector with its largest coefficient held fixed.
///
/// With that coefficient pinned, the 8x9 system becomes a square 8x8 system that LU
/// solves to working precision. The result keeps the sign of `guess` and has unit norm.
fn polish_null_vector(
    constraints: &Constraints,
    guess: &OVector<f64, U9>,
) -> Option<OVector<f64, U9>> {
    let (pinned, &pinned_value) = guess
        .iter()
        .enumerate()
        .max_by_key(|&(_, &n)| float_ord::FloatOrd(n.abs()))?;

    let mut square = SMatrix::<f64, 8, 8>::zeros();
    for (dst, src) in (0..9).filter(|&c| c != pinned).enumerate() {
        square.set_column(dst, &constraints.column(src));
    }
    let rhs = constraints.column(pinned) * -pinned_value;
    let free = square.lu().solve(&rhs)?;

    let mut polished = OVector::<f64, U9>::zeros();
    polished[pinned] = pinned_value;
    for (src, dst) in (0..9).filter(|&c| c != pinned).enumerate() {
        polished[dst] = free[src];
    }
    let norm = polished.norm();
    if !norm.is_finite() || norm == 0.0 {
        return None;
    }
    Some(polished / norm)
}
