//! Vector helpers for building orthonormal frames.

use crate::{Point3, Vector3};

/// Length of `v`, computed without overflow or underflow of the squares.
pub fn stable_length(v: Vector3) -> f64 {
    let largest = v.abs().max_element();
    if largest > 0.0 && largest.is_finite() {
        largest * (v / largest).length()
    } else {
        largest
    }
}

/// Normalize `v`, or return `None` if its length is below `min_length`.
///
/// Divides by the largest component first, so lengths whose square would
/// overflow or underflow are still handled.
pub fn try_normalize(v: Vector3, min_length: f64) -> Option<Vector3> {
    let largest = v.abs().max_element();
    if !(largest.is_finite() && largest > 0.0) {
        return None;
    }
    let scaled = v / largest;
    let len = scaled.length();
    if len * largest >= min_length {
        Some(scaled / len)
    } else {
        None
    }
}

/// Rescale `points` by a power of two so the largest coordinate lies in
/// `(0.5, 1]`.
///
/// Power-of-two factors are exact, so directions between points are kept
/// while differences of near-`f64::MAX` coordinates no longer overflow.
pub fn scale_to_unit(points: &[Point3]) -> Vec<Point3> {
    let largest = points
        .iter()
        .map(|p| p.abs().max_element())
        .fold(0.0, f64::max);
    if !(largest.is_finite() && largest > 0.0) {
        return points.to_vec();
    }
    // Split the exponent so neither factor overflows for subnormal input
    let exp = -(largest.log2().ceil() as i32);
    let (lo, hi) = (2f64.powi(exp / 2), 2f64.powi(exp - exp / 2));
    points.iter().map(|&p| p * lo * hi).collect()
}

/// Component of `v` orthogonal to the unit vector `axis`.
pub fn orthogonal_component(v: Vector3, axis: Vector3) -> Vector3 {
    v - axis * v.dot(axis)
}

/// The coordinate axis least aligned with `v`.
///
/// Ties resolve in X, Y, Z order, so the choice is deterministic.
pub fn least_aligned_axis(v: Vector3) -> Vector3 {
    let a = v.abs();
    if a.x <= a.y && a.x <= a.z {
        Vector3::X
    } else if a.y <= a.z {
        Vector3::Y
    } else {
        Vector3::Z
    }
}

/// A unit vector orthogonal to the unit vector `axis`.
///
/// Projects the least aligned coordinate axis onto the plane normal to
/// `axis`. That axis has at most `1/sqrt(3)` of its length along `axis`, so
/// the projection never collapses.
pub fn any_orthonormal(axis: Vector3) -> Vector3 {
    let seed = least_aligned_axis(axis);
    let v = orthogonal_component(seed, axis).normalize();
    // Second pass removes the residue left by cancellation
    orthogonal_component(v, axis).normalize()
}
