mod tests {
    use approx::assert_relative_eq;

    use crate::error::GeometryError;
    use crate::math::{normalize, rotate_3d, Point3, Vector3};

    #[test]
    fn test_normalize_axis_aligned() {
        let result = normalize(Vector3::new(3.0, 0.0, 0.0));
        assert_relative_eq!(result, Vector3::new(1.0, 0.0, 0.0));

        let result = normalize(Vector3::new(0.0, 0.0, 5.0));
        assert_relative_eq!(result, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalize_uses_one_norm() {
        // The 1-norm of (1, 1, 0) is 2, so the result is shorter than the
        // Euclidean unit vector (1/√2, 1/√2, 0).
        let result = normalize(Vector3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(result, Vector3::new(0.5, 0.5, 0.0));

        let result = normalize(Vector3::new(-2.0, 0.0, 2.0));
        assert_relative_eq!(result, Vector3::new(-0.5, 0.0, 0.5));
    }

    #[test]
    fn test_rotate_3d_about_x_axis() {
        let result = rotate_3d(Point3::new(0.0, 2.0, 0.0), Vector3::new(5.0, 0.0, 0.0), 90.0)
            .unwrap();
        assert_relative_eq!(result, Point3::new(0.0, 0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_3d_about_z_axis() {
        let result = rotate_3d(Point3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 0.0, 1.0), 90.0)
            .unwrap();
        assert_relative_eq!(result, Point3::new(-1.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_3d_zero_angle_is_identity() {
        let point = Point3::new(1.477, 5.911, 0.0);
        let result = rotate_3d(point, Vector3::x_axis(), 0.0).unwrap();
        assert_eq!(result, point);
    }

    #[test]
    fn test_rotate_3d_zero_axis_fails() {
        let result = rotate_3d(Point3::new(1.0, 2.0, 3.0), Vector3::zero(), 45.0);
        assert_eq!(result, Err(GeometryError::InvalidAxis));
    }
}
