//! Validated point sequence input.

use frenet_core::{FrenetError, Result};
use frenet_math::Point3;
use serde::{Deserialize, Serialize};

/// An ordered sequence of at least two finite 3D sample points.
///
/// Validation happens once, here; every `Polyline` can be solved without
/// further checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point3>", into = "Vec<Point3>")]
pub struct Polyline {
    points: Vec<Point3>,
}

impl Polyline {
    /// Minimum number of samples needed to difference a curve.
    pub const MIN_POINTS: usize = 2;

    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < Self::MIN_POINTS {
            return Err(FrenetError::invalid_input(format!(
                "need at least {} points, got {}",
                Self::MIN_POINTS,
                points.len()
            )));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(FrenetError::invalid_input(format!(
                "point {} has a non-finite coordinate: {:?}",
                index, points[index]
            )));
        }
        Ok(Self { points })
    }

    /// Build from raw `[x, y, z]` rows.
    pub fn from_rows(rows: &[[f64; 3]]) -> Result<Self> {
        Self::new(rows.iter().map(|&r| Point3::from_array(r)).collect())
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl TryFrom<Vec<Point3>> for Polyline {
    type Error = FrenetError;

    fn try_from(points: Vec<Point3>) -> Result<Self> {
        Self::new(points)
    }
}

impl TryFrom<&[Point3]> for Polyline {
    type Error = FrenetError;

    fn try_from(points: &[Point3]) -> Result<Self> {
        Self::new(points.to_vec())
    }
}

impl From<Polyline> for Vec<Point3> {
    fn from(polyline: Polyline) -> Self {
        polyline.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frenet_math::dvec3;

    #[test]
    fn test_new_valid() {
        let line = Polyline::new(vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)]).unwrap();
        assert_eq!(line.len(), 2);
        assert!(!line.is_empty());
        assert_eq!(line.points()[1], dvec3(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_too_few_points() {
        for points in [vec![], vec![dvec3(1.0, 2.0, 3.0)]] {
            let err = Polyline::new(points).unwrap_err();
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_non_finite_reports_index() {
        let err = Polyline::new(vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 0.0, 0.0),
            dvec3(2.0, f64::INFINITY, 0.0),
        ])
        .unwrap_err();
        match err {
            FrenetError::InvalidInput(msg) => assert!(msg.contains("point 2"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = Polyline::from_rows(&[[f64::NAN, 0.0, 0.0], [1.0, 0.0, 0.0]]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_rows() {
        let line = Polyline::from_rows(&[[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(line.into_points(), vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Polyline = serde_json::from_str("[[0.0,0.0,0.0],[1.0,0.0,0.0]]").unwrap();
        assert_eq!(ok.len(), 2);

        let bad: std::result::Result<Polyline, _> = serde_json::from_str("[[0.0,0.0,0.0]]");
        assert!(bad.is_err());
    }
}
