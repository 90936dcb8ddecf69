//! Homogeneous 4x4 transform builders and a few 2d helpers.
//!
//! The 4x4 matrices produced here act on column vectors: translations live in the last
//! column and composing `a * b` applies `b` first.

use crate::GeometryError;
use nalgebra::{Matrix4, Rotation3, Unit, Vector2, Vector3};

/// A translation by `offset`.
pub fn translation4(offset: Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_translation(&offset)
}

/// A right-handed rotation of `angle` radians about `axis`.
pub fn rotation4(angle: f64, axis: Unit<Vector3<f64>>) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&axis, angle).to_homogeneous()
}

/// An axis-aligned scale.
pub fn scaling4(scale: Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_nonuniform_scaling(&scale)
}

/// Rotates a 2d vector a quarter turn counterclockwise: `(x, y) -> (-y, x)`.
pub fn rot90(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Rescales `v` to have norm `length`, keeping its direction.
pub fn scale_to(v: Vector2<f64>, length: f64) -> Result<Vector2<f64>, GeometryError> {
    let norm = v.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(GeometryError::DegenerateFootprint);
    }
    Ok(v * (length / norm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::FRAC_PI_2;
    use nalgebra::Vector4;

    #[test]
    fn quarter_turn_about_z() {
        let r = rotation4(FRAC_PI_2, Vector3::z_axis());
        let x = r * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(x, Vector4::new(0.0, 1.0, 0.0, 1.0), epsilon = 1e-15);
    }

    #[test]
    fn quarter_turn_about_x() {
        let r = rotation4(FRAC_PI_2, Vector3::x_axis());
        let y = r * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert_relative_eq!(y, Vector4::new(0.0, 0.0, 1.0, 1.0), epsilon = 1e-15);
    }

    #[test]
    fn translation_in_last_column() {
        let t = translation4(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(t[(0, 3)], 1.0);
        assert_eq!(t[(1, 3)], 2.0);
        assert_eq!(t[(2, 3)], 3.0);
        assert_eq!(t[(3, 3)], 1.0);
    }

    #[test]
    fn rot90_is_counterclockwise() {
        assert_eq!(rot90(Vector2::new(1.0, 0.0)), Vector2::new(0.0, 1.0));
        assert_eq!(rot90(Vector2::new(0.0, 1.0)), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn scale_to_keeps_direction() {
        let v = scale_to(Vector2::new(3.0, 4.0), 10.0).unwrap();
        assert_relative_eq!(v, Vector2::new(6.0, 8.0));
        assert_eq!(
            scale_to(Vector2::zeros(), 1.0),
            Err(GeometryError::DegenerateFootprint)
        );
    }
}
