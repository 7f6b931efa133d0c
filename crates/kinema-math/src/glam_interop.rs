//! Conversions to and from [`glam`] types.
//!
//! Enabled by the `glam` feature (on by default).
//!
//! - `Vector2`/`Vector3` map to `Vec2`/`Vec3` (`f32`) and `DVec2`/`DVec3`
//!   (`f64`)
//! - `Quaternion` maps to `Quat`/`DQuat`; glam stores `x, y, z, w`, the
//!   scalar part `t` becomes `w`
//! - `Matrix3` maps to `Mat3`/`DMat3`; glam is column-major, so the
//!   element order is transposed and the tolerance resets to its default
//!
//! # Example
//!
//! ```rust
//! use kinema_math::{Matrix3, Vector3};
//!
//! let m = Matrix3::from_rows([[1.0f32, 2.0, 3.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
//! let v = Vector3::new(1.0f32, 1.0, 1.0);
//!
//! let g = glam::Mat3::from(m);
//! assert_eq!(Vector3::from(g * glam::Vec3::from(v)), m * v);
//! ```

use crate::{Matrix3, Quaternion, Vector2, Vector3};

macro_rules! impl_glam_interop {
    ($t:ty, $v2:ty, $v3:ty, $q:ty, $m3:ty) => {
        impl From<$v2> for Vector2<$t> {
            #[inline]
            fn from(v: $v2) -> Self {
                Self::new(v.x, v.y)
            }
        }

        impl From<Vector2<$t>> for $v2 {
            #[inline]
            fn from(v: Vector2<$t>) -> Self {
                <$v2>::new(v.x(), v.y())
            }
        }

        impl From<$v3> for Vector3<$t> {
            #[inline]
            fn from(v: $v3) -> Self {
                Self::new(v.x, v.y, v.z)
            }
        }

        impl From<Vector3<$t>> for $v3 {
            #[inline]
            fn from(v: Vector3<$t>) -> Self {
                <$v3>::new(v.x(), v.y(), v.z())
            }
        }

        impl From<$q> for Quaternion<$t> {
            #[inline]
            fn from(q: $q) -> Self {
                let [x, y, z, w] = q.to_array();
                Self::new(w, x, y, z)
            }
        }

        impl From<Quaternion<$t>> for $q {
            #[inline]
            fn from(q: Quaternion<$t>) -> Self {
                <$q>::from_xyzw(q.x(), q.y(), q.z(), q.t())
            }
        }

        impl From<$m3> for Matrix3<$t> {
            #[inline]
            fn from(m: $m3) -> Self {
                Self::from_array(false, Some(&m.to_cols_array()))
            }
        }

        impl From<Matrix3<$t>> for $m3 {
            #[inline]
            fn from(m: Matrix3<$t>) -> Self {
                <$m3>::from_cols_array(&m.transpose().to_array())
            }
        }
    };
}

impl_glam_interop!(f32, glam::Vec2, glam::Vec3, glam::Quat, glam::Mat3);
impl_glam_interop!(f64, glam::DVec2, glam::DVec3, glam::DQuat, glam::DMat3);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_conversions() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(g), v);

        let w = Vector2::new(4.0f64, 5.0);
        assert_eq!(Vector2::from(glam::DVec2::from(w)), w);
    }

    #[test]
    fn test_quaternion_component_order() {
        let q = Quaternion::new(0.5f32, 0.1, 0.2, 0.3);
        let g = glam::Quat::from(q);
        assert_eq!(g.w, 0.5);
        assert_eq!(g.x, 0.1);
        assert_eq!(Quaternion::from(g), q);
    }

    #[test]
    fn test_hamilton_matches_glam() {
        let a = Quaternion::from_rotation(30.0f64, Vector3::new(0.0, 0.0, 1.0));
        let b = Quaternion::from_rotation(75.0f64, Vector3::new(0.6, 0.8, 0.0));
        let expected = glam::DQuat::from(a) * glam::DQuat::from(b);
        assert_relative_eq!(a ^ b, Quaternion::from(expected), epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_layout() {
        let m = Matrix3::from_rows([[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        let g = glam::DMat3::from(m);
        assert_eq!(g.row(0), glam::DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(g.col(0), glam::DVec3::new(1.0, 4.0, 7.0));
        assert_eq!(Matrix3::from(g), m);

        let v = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(Vector3::from(g.mul_vec3(v.into())), m * v);
    }

    #[test]
    fn test_rotation_matrix_matches_glam() {
        let q = Quaternion::from_rotation(40.0f64, Vector3::new(0.0, 1.0, 0.0));
        let expected = glam::DMat3::from_quat(q.into());
        assert_relative_eq!(q.to_matrix3(), Matrix3::from(expected), epsilon = 1e-12);
    }
}
