use plinth_core::{
    nalgebra::{Matrix3, Matrix4, Point3, Vector3},
    GeometryError,
};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The orthonormal frame of the photographed base.
///
/// Base-local coordinates are `(u, v, z)`: distance along the long edge, distance along
/// the short edge, and height above the base. The frame is built directly from measured
/// edges. If the measured edges are not perfectly orthogonal, that is a modeling error
/// and it is not corrected here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BaseFrame {
    /// The lengths of the long and short edges, in the units of the reconstruction.
    pub lengths: [f64; 2],
    /// Rows are the unit long edge, the unit short edge and their cross product.
    pub basis: Matrix3<f64>,
    /// The corner both edges start from.
    pub origin: Point3<f64>,
}

impl BaseFrame {
    /// Builds the frame from lifted base corners ordered as
    /// [`lifted_corners`](crate::lifted_corners): origin, short edge end, long edge end, far corner.
    pub fn from_base_points(points: &[Point3<f64>; 4]) -> Result<Self, GeometryError> {
        Self::from_edges(points[0], points[2] - points[0], points[1] - points[0])
    }

    pub fn from_edges(
        origin: Point3<f64>,
        u_edge: Vector3<f64>,
        v_edge: Vector3<f64>,
    ) -> Result<Self, GeometryError> {
        let lengths = [u_edge.norm(), v_edge.norm()];
        if lengths.iter().any(|&l| !(l > 0.0 && l.is_finite())) {
            return Err(GeometryError::DegenerateEdge);
        }
        let u_unit = u_edge / lengths[0];
        let v_unit = v_edge / lengths[1];
        let normal = u_unit.cross(&v_unit);
        let basis = Matrix3::from_rows(&[u_unit.transpose(), v_unit.transpose(), normal.transpose()]);
        Ok(Self {
            lengths,
            basis,
            origin,
        })
    }

    pub fn u_axis(&self) -> Vector3<f64> {
        self.basis.row(0).transpose()
    }

    pub fn v_axis(&self) -> Vector3<f64> {
        self.basis.row(1).transpose()
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.basis.row(2).transpose()
    }

    /// The ratio of the long edge to the short edge.
    pub fn aspect_ratio(&self) -> f64 {
        self.lengths[0] / self.lengths[1]
    }

    /// The transform from base-local to scene coordinates, in row-vector form:
    /// the basis rows followed by `(origin, 1)`.
    pub fn scene_of_base(&self) -> Matrix4<f64> {
        let mut m = self.basis.to_homogeneous();
        m[(3, 0)] = self.origin.x;
        m[(3, 1)] = self.origin.y;
        m[(3, 2)] = self.origin.z;
        m
    }

    /// The transform applied to the camera: the transpose of the inverse of
    /// [`BaseFrame::scene_of_base`].
    ///
    /// The convention matches what the renderer expects; it was not derived.
    pub fn base_of_scene(&self) -> Result<Matrix4<f64>, GeometryError> {
        self.scene_of_base()
            .try_inverse()
            .map(|inverse| inverse.transpose())
            .ok_or(GeometryError::SingularFrame)
    }
}
