//! Property-based tests for the frame solver.
//!
//! Random point sequences, including repeated samples and straight runs,
//! must always produce orthonormal right-handed frames.
//!
//! Run with: cargo test -p frenet-frame -- proptest

use frenet_core::Validate;
use frenet_frame::FrenetFrameSolver;
use frenet_math::{dvec3, try_normalize, Point3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point3> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(Point3::from_array)
}

/// Random polylines of 2..=40 samples.
fn arb_curve() -> impl Strategy<Value = Vec<Point3>> {
    prop::collection::vec(arb_point(), 2..=40)
}

/// Random polylines together with a power of ten spanning tiny to near-overflow
/// coordinates.
fn arb_scaled_curve() -> impl Strategy<Value = (Vec<Point3>, f64)> {
    (arb_curve(), -15i32..=300).prop_map(|(curve, k)| (curve, 10f64.powi(k)))
}

/// Polylines where each sample is either fresh, a repeat of the previous one,
/// or the continuation of the previous step (straight run).
fn arb_degenerate_curve() -> impl Strategy<Value = Vec<Point3>> {
    (arb_point(), prop::collection::vec((0u8..3, arb_point()), 1..=30)).prop_map(
        |(start, steps)| {
            let mut points = vec![start];
            for (kind, p) in steps {
                let last = points[points.len() - 1];
                let next = match kind {
                    0 => p,
                    1 => last,
                    _ => {
                        let prev = if points.len() > 1 {
                            points[points.len() - 2]
                        } else {
                            last - dvec3(1.0, 0.0, 0.0)
                        };
                        last + (last - prev)
                    }
                };
                points.push(next);
            }
            points
        },
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_random_curves_give_orthonormal_frames(curve in arb_curve()) {
        let frames = FrenetFrameSolver::default().solve(&curve).unwrap();
        prop_assert_eq!(frames.len(), curve.len());
        prop_assert!(frames.validate().is_ok(), "{:?}", frames.validate());
    }

    #[test]
    fn proptest_degenerate_curves_give_orthonormal_frames(curve in arb_degenerate_curve()) {
        let frames = FrenetFrameSolver::default().solve(&curve).unwrap();
        prop_assert_eq!(frames.len(), curve.len());
        prop_assert!(frames.validate().is_ok(), "{:?}", frames.validate());
    }

    #[test]
    fn proptest_scaled_curves_keep_frames((curve, scale) in arb_scaled_curve()) {
        let solver = FrenetFrameSolver::default();
        let scaled: Vec<Point3> = curve.iter().map(|&p| p * scale).collect();
        let reference = solver.solve(&curve).unwrap();
        let frames = solver.solve(&scaled).unwrap();
        prop_assert!(frames.validate().is_ok(), "{:?}", frames.validate());

        // The first tangent is the first chord
        let chord = try_normalize(scaled[1] - scaled[0], 0.0).unwrap();
        prop_assert!(frames.tangents()[0].dot(chord) > 1.0 - 1e-9);

        for (ta, tb) in reference.tangents().iter().zip(frames.tangents()) {
            prop_assert!(ta.dot(*tb) > 1.0 - 1e-9, "{:?} vs {:?} at scale {:e}", ta, tb, scale);
        }
    }

    #[test]
    fn proptest_solve_is_deterministic(curve in arb_curve()) {
        let solver = FrenetFrameSolver::default();
        prop_assert_eq!(solver.solve(&curve).unwrap(), solver.solve(&curve).unwrap());
    }

    #[test]
    fn proptest_translation_keeps_tangents(curve in arb_curve(), offset in arb_point()) {
        let solver = FrenetFrameSolver::default();
        let moved: Vec<Point3> = curve.iter().map(|&p| p + offset).collect();
        let a = solver.solve(&curve).unwrap();
        let b = solver.solve(&moved).unwrap();
        for (ta, tb) in a.tangents().iter().zip(b.tangents()) {
            // Differences lose a few bits after translation
            prop_assert!(ta.dot(*tb) > 1.0 - 1e-9, "{:?} vs {:?}", ta, tb);
        }
    }
}
