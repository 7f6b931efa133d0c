//! Algebraic properties of the kinema-math types.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use kinema_math::prelude::*;

fn sample_matrices() -> Vec<Matrix3<f64>> {
    vec![
        Matrix3::from_rows([[2.0, -1.0, 0.5], [0.3, 4.0, 1.0], [-2.0, 0.0, 3.0]]),
        Matrix3::from_rows([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]),
        Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]),
        Quaternion::from_rotation(33.0, norml(Vector3::new(1.0, 1.0, 1.0))).to_matrix3() * 3.0,
    ]
}

fn sample_vectors() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(3.0, 4.0, 0.0),
        Vector3::new(-0.2, 1.7, 9.1),
        Vector3::new(1e-3, -5.0, 2.5),
        Vector3::new(0.0, 0.0, -1.0),
    ]
}

#[test]
fn test_inverse_properties() {
    for m in sample_matrices() {
        let i = inv(&m);
        assert_relative_eq!(m * i, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(inv(&i), m, epsilon = 1e-12);
        assert_eq!(try_inv(&m).unwrap(), i);
    }
}

#[test]
fn test_orthonormalization_is_idempotent() {
    for m in sample_matrices() {
        let once = orthn_matrix(&m);
        let twice = orthn_matrix(&once);
        assert_relative_eq!(twice, once, epsilon = 1e-12);
        assert_relative_eq!(det(&once).abs(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_norml_is_exact_fixed_point() {
    for v in sample_vectors() {
        let n = norml(v);
        assert_eq!(norml(n), n);
    }
    let w = Vector2::new(0.1f64, -7.0);
    assert_eq!(norml(norml(w)), norml(w));
    let q = Quaternion::new(1.0f64, 2.0, -3.0, 0.5);
    assert_eq!(norml(norml(q)), norml(q));
}

#[test]
fn test_cross_is_orthogonal() {
    let vs = sample_vectors();
    for u in &vs {
        for v in &vs {
            let n = *u ^ *v;
            assert_abs_diff_eq!(n * *u, 0.0, epsilon = 1e-10);
            assert_abs_diff_eq!(n * *v, 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_hamilton_composes_rotations() {
    let q1 = Quaternion::from_rotation(40.0f64, norml(Vector3::new(1.0, 2.0, 3.0)));
    let q2 = Quaternion::from_rotation(-75.0f64, norml(Vector3::new(0.0, -1.0, 0.5)));
    for v in sample_vectors() {
        assert_relative_eq!(
            (q2 ^ q1).rotate(v),
            q2.rotate(q1.rotate(v)),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_angle_axis_round_trip() {
    let axis = norml(Vector3::new(-0.3f64, 0.1, 0.9));
    let mut angle = 0.5;
    while angle < 360.0 {
        let q = Quaternion::from_rotation(angle, axis);
        let (a, v) = q.to_angle_axis();
        assert_relative_eq!(a, angle, epsilon = 1e-8);
        assert_relative_eq!(v, axis, epsilon = 1e-8);
        angle += 7.25;
    }
}

#[test]
fn test_vector_norms() {
    let v = Vector3::new(3.0f64, 4.0, 0.0);
    assert_eq!(norm(v), 5.0);
    assert_eq!(inorm(v), 0.2);

    let vf = Vector3::new(3.0f32, 4.0, 0.0);
    assert_eq!(norm(vf), 5.0);
    assert_relative_eq!(inorm(vf), 0.2);
}

#[test]
fn test_diagonal_matrix() {
    let m = diag(Vector3::new(2.0f64, 3.0, 4.0));
    assert_eq!(det(&m), 24.0);
    assert_relative_eq!(
        inv(&m),
        diag(Vector3::new(0.5, 1.0 / 3.0, 0.25)),
        epsilon = 1e-15
    );
}

#[test]
fn test_half_turn_about_z() {
    let q = Quaternion::from_rotation(180.0f64, Vector3::new(0.0, 0.0, 1.0));
    assert_abs_diff_eq!(q.t(), 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(q.z(), 1.0, epsilon = 1e-15);
    assert_eq!(q.x(), 0.0);
    assert_eq!(q.y(), 0.0);
    assert!(!q.is_identity(1e-6));

    let zero_turn = Quaternion::from_rotation(0.0f64, Vector3::new(0.0, 1.0, 0.0));
    assert!(zero_turn.is_identity(1e-6));
}

#[test]
fn test_singular_matrix_passthrough() {
    let z = Matrix3::<f32>::zero();
    assert_eq!(det(&z), 0.0);
    assert_eq!(inv(&z), z);
    assert!(matches!(try_inv(&z), Err(Error::SingularMatrix { .. })));
}

#[test]
fn test_planar_angles() {
    let u = Vector2::new(1.0f64, 0.0);
    let v = Vector2::new(0.0f64, 1.0);
    assert_eq!(cos(u, v), 0.0);
    assert_eq!(arg(v), 0.0);
    assert_eq!(atan2(v), std::f64::consts::FRAC_PI_2);
}

#[test]
fn test_generic_code_path() {
    fn unit_normal<T: Scalar>(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Vector3<T> {
        normalv3(a, b, c)
    }

    let n32 = unit_normal(
        Vector3::new(0.0f32, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    let n64 = unit_normal(
        Vector3::new(0.0f64, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    assert_eq!(n32, Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(n64, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_solve_round_trip() {
    for m in sample_matrices() {
        for x in sample_vectors() {
            let b = m * x;
            assert_relative_eq!(solve(b, &m), x, epsilon = 1e-10, max_relative = 1e-10);
            assert_relative_eq!(try_solve(b, &m).unwrap(), x, epsilon = 1e-10, max_relative = 1e-10);
        }
    }
}
