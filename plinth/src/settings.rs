use four_point::FourPoint;
use serde::{Deserialize, Serialize};

/// The settings of a reconstruction run.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct ReconstructionSettings {
    /// The convergence epsilon of the 9x9 symmetric eigendecomposition
    #[serde(default = "default_eigen_epsilon")]
    pub eigen_epsilon: f64,
    /// The maximum eigendecomposition iterations, where 0 means unlimited
    #[serde(default = "default_eigen_iterations")]
    pub eigen_iterations: usize,
    /// How close to zero the null-space eigenvalue must be
    #[serde(default = "default_null_space_tolerance")]
    pub null_space_tolerance: f64,
    /// The maximum error with which each anchor must reproject onto its unit-square corner
    #[serde(default = "default_reprojection_tolerance")]
    pub reprojection_tolerance: f64,
    /// Whether to refine the null-space eigenvector by solving the pinned 8x8 system
    #[serde(default = "default_polish")]
    pub polish: bool,
    /// The horizontal sensor size in mm
    #[serde(default = "default_aperture")]
    pub aperture: f64,
    /// The thickness of the base slab, in the units of the reconstruction
    #[serde(default = "default_base_depth")]
    pub base_depth: f64,
}

impl Default for ReconstructionSettings {
    fn default() -> Self {
        Self {
            eigen_epsilon: default_eigen_epsilon(),
            eigen_iterations: default_eigen_iterations(),
            null_space_tolerance: default_null_space_tolerance(),
            reprojection_tolerance: default_reprojection_tolerance(),
            polish: default_polish(),
            aperture: default_aperture(),
            base_depth: default_base_depth(),
        }
    }
}

impl ReconstructionSettings {
    /// The homography solver these settings describe.
    pub fn solver(&self) -> FourPoint {
        FourPoint::new()
            .epsilon(self.eigen_epsilon)
            .iterations(self.eigen_iterations)
            .null_space_tolerance(self.null_space_tolerance)
            .reprojection_tolerance(self.reprojection_tolerance)
            .polish(self.polish)
    }
}

fn default_eigen_epsilon() -> f64 {
    f64::EPSILON
}

fn default_eigen_iterations() -> usize {
    0
}

fn default_null_space_tolerance() -> f64 {
    1e-15
}

fn default_reprojection_tolerance() -> f64 {
    1e-13
}

fn default_polish() -> bool {
    true
}

fn default_aperture() -> f64 {
    36.0
}

fn default_base_depth() -> f64 {
    0.25
}
