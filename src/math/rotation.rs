use crate::error::GeometryError;
use crate::math::{Point3, Vector3};

/// Normalizes `vector` using the 1-norm (sum of absolute component
/// magnitudes).
///
/// The result points in the same direction as the input but its scale
/// differs from the Euclidean unit vector unless the input is
/// axis-aligned. A zero vector yields NaN components.
pub fn normalize(vector: Vector3) -> Vector3 {
    let norm = vector.x.abs() + vector.y.abs() + vector.z.abs();
    Vector3::new(vector.x / norm, vector.y / norm, vector.z / norm)
}

/// Rotates `point` about `axis` by `angle` degrees.
///
/// Uses Rodrigues' formula with the axis passed through [`normalize`]:
///
/// `(1 - cos θ)(p · r)r + cos θ · p + sin θ · (r × p)`
///
/// where `p` is the point treated as a vector from the origin and `r`
/// the normalized axis. A zero-length axis fails with
/// [`GeometryError::InvalidAxis`].
pub fn rotate_3d(point: Point3, axis: Vector3, angle: f64) -> Result<Point3, GeometryError> {
    if axis.x.abs() + axis.y.abs() + axis.z.abs() == 0.0 {
        return Err(GeometryError::InvalidAxis);
    }

    let theta = angle.to_radians();
    let c = theta.cos();
    let s = theta.sin();
    let r = normalize(axis).to_na();
    let p = point.to_na();

    let rotated = r * (1.0 - c) * p.dot(&r) + p * c + r.cross(&p) * s;
    Ok(Point3::from_na(&rotated))
}
