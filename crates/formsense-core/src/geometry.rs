//! Planar vector geometry for joint-angle computations.

use nalgebra::Vector2;

use crate::error::{Error, Result};
use crate::types::PixelPoint;

/// Cosine ratios past ±1 but within this slack are floating-point noise
/// and get snapped back onto the unit interval; anything beyond it means
/// the upstream coordinates are garbage.
pub const COSINE_SLACK: f64 = 1.2;

/// Doubled-triangle-area threshold under which three joints count as
/// nearly degenerate (halved before comparison).
const COLLINEAR_AREA_LIMIT: f64 = 7500.0;

/// Minimum wrist-to-shoulder spread for the collinearity heuristic.
const MIN_WRIST_SHOULDER_DISTANCE: f64 = 400.0;

/// Minimum elbow-to-wrist spread for the collinearity heuristic.
const MIN_ELBOW_WRIST_DISTANCE: f64 = 175.0;

/// Displacement vector from `from` to `to`.
pub fn vector(from: PixelPoint, to: PixelPoint) -> Vector2<f64> {
    Vector2::new(to.x - from.x, to.y - from.y)
}

pub fn dot(v1: &Vector2<f64>, v2: &Vector2<f64>) -> f64 {
    v1.dot(v2)
}

pub fn norm(v: &Vector2<f64>) -> f64 {
    v.norm()
}

/// Signed limb angle from a raw cosine ratio.
///
/// The convention is chosen so a fully extended limb (vectors pointing
/// away from each other, cos ≈ −1) reads 0° and a fully folded limb
/// (cos ≈ 1) reads 180°: `(180 − acos(cos)) * sign`, with the negative
/// sign whenever cos ≤ 0. Downstream diff thresholds assume exactly this
/// transform.
pub fn angle_from_cosine(mut cos_angle: f64) -> Result<f64> {
    if !cos_angle.is_finite() {
        return Err(Error::CosineDomain { ratio: cos_angle });
    }
    if cos_angle > 1.0 {
        if cos_angle > COSINE_SLACK {
            return Err(Error::CosineDomain { ratio: cos_angle });
        }
        tracing::warn!(ratio = cos_angle, "cosine ratio above 1, snapping to 1");
        cos_angle = 1.0;
    } else if cos_angle < -1.0 {
        if cos_angle < -COSINE_SLACK {
            return Err(Error::CosineDomain { ratio: cos_angle });
        }
        tracing::warn!(ratio = cos_angle, "cosine ratio below -1, snapping to -1");
        cos_angle = -1.0;
    }
    let sign = if cos_angle > 0.0 { 1.0 } else { -1.0 };
    Ok((180.0 - cos_angle.acos().to_degrees()) * sign)
}

/// Signed angle between two vectors, in the limb convention of
/// [`angle_from_cosine`].
///
/// A zero vector on either side yields a NaN ratio and fails with
/// [`Error::CosineDomain`], which is what duplicate or degenerate joint
/// coordinates look like by the time they reach the geometry layer.
pub fn angle_between(v1: &Vector2<f64>, v2: &Vector2<f64>) -> Result<f64> {
    angle_from_cosine(dot(v1, v2) / (norm(v1) * norm(v2)))
}

/// Angle of a right triangle from its opposite and adjacent legs, in
/// degrees.
///
/// A zero adjacent leg (vertical limb) is taken to its limit of 90°
/// rather than dividing by zero; two zero legs are coincident points and
/// read 0°.
pub fn right_triangle_angle(opposite: f64, adjacent: f64) -> f64 {
    if adjacent == 0.0 {
        if opposite == 0.0 {
            return 0.0;
        }
        return 90.0;
    }
    (opposite / adjacent).atan().to_degrees()
}

/// Heuristic test for a nearly degenerate wrist/elbow/shoulder triangle
/// that is still spread far enough apart to be numerically meaningful.
///
/// True iff the triangle area is under the threshold AND both distance
/// guards pass. Not pure collinearity. Available as a stability filter;
/// the analyzer does not currently consult it.
pub fn collinear(p1: PixelPoint, p2: PixelPoint, p3: PixelPoint) -> bool {
    let doubled_area =
        p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y);
    (doubled_area / 2.0).abs() < COLLINEAR_AREA_LIMIT
        && p2.distance_to(&p3) > MIN_WRIST_SHOULDER_DISTANCE
        && p1.distance_to(&p2) > MIN_ELBOW_WRIST_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_vector_construction() {
        let v = vector(PixelPoint::new(1.0, 2.0), PixelPoint::new(4.0, 6.0));
        assert_eq!(v, Vector2::new(3.0, 4.0));
        assert!((norm(&v) - 5.0).abs() < TOL);
    }

    #[test]
    fn test_identical_vectors_read_folded() {
        let v = Vector2::new(3.0, 1.0);
        let angle = angle_between(&v, &v).unwrap();
        assert!((angle - 180.0).abs() < TOL);
    }

    #[test]
    fn test_opposite_vectors_read_extended() {
        let v = Vector2::new(3.0, 1.0);
        let angle = angle_between(&v, &(-v)).unwrap();
        assert!(angle.abs() < TOL);
    }

    #[test]
    fn test_perpendicular_vectors_take_negative_sign() {
        // cos = 0 is not > 0, so the multiplier is -1.
        let angle = angle_between(&Vector2::new(1.0, 0.0), &Vector2::new(0.0, 1.0)).unwrap();
        assert!((angle + 90.0).abs() < TOL);
    }

    #[test]
    fn test_cosine_noise_is_snapped() {
        assert!((angle_from_cosine(1.1).unwrap() - 180.0).abs() < TOL);
        assert!(angle_from_cosine(-1.1).unwrap().abs() < TOL);
    }

    #[test]
    fn test_cosine_beyond_slack_is_rejected() {
        assert!(matches!(
            angle_from_cosine(1.3),
            Err(Error::CosineDomain { .. })
        ));
        assert!(matches!(
            angle_from_cosine(-1.3),
            Err(Error::CosineDomain { .. })
        ));
    }

    #[test]
    fn test_zero_vector_is_rejected() {
        let err = angle_between(&Vector2::zeros(), &Vector2::new(1.0, 0.0));
        assert!(matches!(err, Err(Error::CosineDomain { .. })));
    }

    #[test]
    fn test_right_triangle_angle() {
        assert!((right_triangle_angle(1.0, 1.0) - 45.0).abs() < TOL);
        assert!((right_triangle_angle(20.0, 100.0) - 0.2_f64.atan().to_degrees()).abs() < TOL);
        assert!(right_triangle_angle(0.0, 5.0).abs() < TOL);
    }

    #[test]
    fn test_vertical_limb_reads_ninety() {
        assert!((right_triangle_angle(12.0, 0.0) - 90.0).abs() < TOL);
        assert!(right_triangle_angle(0.0, 0.0).abs() < TOL);
    }

    #[test]
    fn test_collinear_accepts_flat_spread_triangle() {
        // All three points on one horizontal line, far apart.
        let elbow = PixelPoint::new(0.0, 100.0);
        let wrist = PixelPoint::new(200.0, 100.0);
        let shoulder = PixelPoint::new(650.0, 100.0);
        assert!(collinear(elbow, wrist, shoulder));
    }

    #[test]
    fn test_collinear_rejects_close_wrist_shoulder() {
        // Zero area, but wrist-to-shoulder spread is under the guard.
        let elbow = PixelPoint::new(0.0, 100.0);
        let wrist = PixelPoint::new(200.0, 100.0);
        let shoulder = PixelPoint::new(500.0, 100.0);
        assert!(!collinear(elbow, wrist, shoulder));
    }

    #[test]
    fn test_collinear_rejects_close_elbow_wrist() {
        // Zero area, but elbow-to-wrist spread is under the guard.
        let elbow = PixelPoint::new(0.0, 100.0);
        let wrist = PixelPoint::new(150.0, 100.0);
        let shoulder = PixelPoint::new(600.0, 100.0);
        assert!(!collinear(elbow, wrist, shoulder));
    }

    #[test]
    fn test_collinear_rejects_large_area() {
        let elbow = PixelPoint::new(0.0, 0.0);
        let wrist = PixelPoint::new(400.0, 300.0);
        let shoulder = PixelPoint::new(0.0, 600.0);
        assert!(!collinear(elbow, wrist, shoulder));
    }
}
