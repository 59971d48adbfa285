//! Discrete Frenet frame solver.
//!
//! Tangents come from central differences of the samples (one-sided at the
//! ends), principal normals from second differences with the tangential
//! component removed. Where the normal is undefined (straight runs) it is
//! carried over from the nearest sample that has one, so the frame does not
//! jump when curvature vanishes and reappears.
//!
//! Samples are first rescaled by a power of two, and degeneracy thresholds
//! are taken relative to the curve's bounding box, so the result does not
//! depend on the unit the coordinates are expressed in.

use frenet_core::{Result, Tolerance};
use frenet_math::{
    any_orthonormal, orthogonal_component, scale_to_unit, stable_length, try_normalize, Aabb3,
    Point3, Vector3,
};
use tracing::{debug, warn};

use crate::frame::{FrenetFrames, NormalSource};
use crate::polyline::Polyline;

/// Shortest projection of a neighbouring axis that is still trusted as a
/// propagated normal.
const MIN_PROPAGATED_LENGTH: f64 = 1e-3;

/// Computes Frenet frames along sampled curves.
///
/// Holds only its tolerances; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenetFrameSolver {
    tolerance: Tolerance,
}

impl FrenetFrameSolver {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Validate `points` and compute one frame per sample.
    ///
    /// # Errors
    /// `FrenetError::InvalidInput` if there are fewer than two points or any
    /// coordinate is NaN or infinite. Degenerate geometry never fails.
    pub fn solve(&self, points: &[Point3]) -> Result<FrenetFrames> {
        let polyline = Polyline::try_from(points)?;
        Ok(self.solve_polyline(&polyline))
    }

    /// Compute one frame per sample of an already validated polyline.
    pub fn solve_polyline(&self, polyline: &Polyline) -> FrenetFrames {
        let points = scale_to_unit(polyline.points());
        let n = points.len();
        let extent = Aabb3::from_points(&points).map_or(0.0, |b| b.diagonal());
        let tolerance = self.tolerance.scaled(extent);

        let raw_tangents = raw_tangents(&points);
        let (tangents, degenerate_tangents) = unit_tangents(&raw_tangents, tolerance);

        let principal: Vec<Option<Vector3>> = curvature_vectors(&points)
            .into_iter()
            .zip(tangents.iter().zip(&raw_tangents))
            .map(|(a, (&t, &raw))| principal_normal(a, t, stable_length(raw), tolerance))
            .collect();

        let (normals, sources) = resolve_normals(&tangents, &principal);

        let binormals: Vec<Vector3> = tangents
            .iter()
            .zip(&normals)
            .map(|(t, &nrm)| t.cross(nrm).normalize())
            .collect();

        let propagated = sources
            .iter()
            .filter(|&&s| s == NormalSource::Propagated)
            .count();
        let seeded = sources.iter().filter(|&&s| s == NormalSource::Seeded).count();
        debug!(
            "Solved {} frames: {} degenerate tangents, {} propagated normals, {} seeded",
            n, degenerate_tangents, propagated, seeded
        );

        FrenetFrames::from_parts(tangents, normals, binormals, sources)
    }
}

/// Solve with default tolerances and return the `(T, N, B)` sequences.
pub fn solve_frenet_frame(
    points: &[Point3],
) -> Result<(Vec<Vector3>, Vec<Vector3>, Vec<Vector3>)> {
    FrenetFrameSolver::default()
        .solve(points)
        .map(FrenetFrames::into_parts)
}

/// Normalize raw tangents, filling degenerate ones from the nearest
/// well-defined sample. Returns the tangents and the number filled.
fn unit_tangents(raw: &[Vector3], tolerance: Tolerance) -> (Vec<Vector3>, usize) {
    let unit: Vec<Option<Vector3>> = raw
        .iter()
        .map(|&v| try_normalize(v, tolerance.linear))
        .collect();
    let degenerate = unit.iter().filter(|t| t.is_none()).count();

    match fill_from_nearest(&unit) {
        Some(tangents) => (tangents, degenerate),
        None => {
            warn!(
                "All {} samples coincide, using +X as the tangent",
                raw.len()
            );
            (vec![Vector3::X; raw.len()], degenerate)
        }
    }
}

/// Principal normal from curvature vector `a`, or `None` on a straight
/// (or coincident) stretch. `chord` is the length of the raw tangent and
/// sets the local scale.
fn principal_normal(
    a: Vector3,
    tangent: Vector3,
    chord: f64,
    tolerance: Tolerance,
) -> Option<Vector3> {
    let residual = orthogonal_component(a, tangent);
    let magnitude = stable_length(residual);
    if !magnitude.is_finite() || tolerance.is_negligible(magnitude, chord + stable_length(a)) {
        return None;
    }
    let normal = try_normalize(residual, 0.0)?;
    Some(orthogonal_component(normal, tangent).normalize())
}

/// Central differences inside, one-sided at the ends.
fn raw_tangents(points: &[Point3]) -> Vec<Vector3> {
    let n = points.len();
    (0..n)
        .map(|i| points[(i + 1).min(n - 1)] - points[i.saturating_sub(1)])
        .collect()
}

/// Second differences; the end samples reuse their neighbour's stencil.
fn curvature_vectors(points: &[Point3]) -> Vec<Vector3> {
    let n = points.len();
    if n < 3 {
        return vec![Vector3::ZERO; n];
    }
    (0..n)
        .map(|i| {
            let c = i.clamp(1, n - 2);
            points[c + 1] - 2.0 * points[c] + points[c - 1]
        })
        .collect()
}

/// Replace each `None` with the value at the nearest `Some` index, the lower
/// index winning ties. Returns `None` when every entry is `None`.
fn fill_from_nearest(values: &[Option<Vector3>]) -> Option<Vec<Vector3>> {
    let n = values.len();
    let mut left = Vec::with_capacity(n);
    let mut last = None;
    for (i, v) in values.iter().enumerate() {
        if let Some(v) = v {
            last = Some((i, *v));
        }
        left.push(last);
    }

    let mut filled = vec![Vector3::ZERO; n];
    let mut right: Option<(usize, Vector3)> = None;
    for i in (0..n).rev() {
        if let Some(v) = values[i] {
            right = Some((i, v));
        }
        filled[i] = match (left[i], right) {
            (Some((l, lv)), Some((r, rv))) => {
                if i - l <= r - i {
                    lv
                } else {
                    rv
                }
            }
            (Some((_, v)), None) | (None, Some((_, v))) => v,
            (None, None) => return None,
        };
    }
    Some(filled)
}

/// Assign a normal to every sample.
///
/// Samples before the first well-defined normal take it by backward
/// propagation; later gaps take the previous normal. A curve with no
/// well-defined normal at all gets a seeded normal at its first sample.
fn resolve_normals(
    tangents: &[Vector3],
    principal: &[Option<Vector3>],
) -> (Vec<Vector3>, Vec<NormalSource>) {
    let n = tangents.len();
    let mut normals = vec![Vector3::ZERO; n];
    let mut sources = vec![NormalSource::Propagated; n];

    let first = principal
        .iter()
        .enumerate()
        .find_map(|(i, nrm)| nrm.map(|nrm| (i, nrm)));

    let start = match first {
        Some((first, normal)) => {
            normals[first] = normal;
            sources[first] = NormalSource::Curvature;
            for i in (0..first).rev() {
                normals[i] = propagate(normals[i + 1], tangents[i + 1], tangents[i]);
            }
            first
        }
        None => {
            normals[0] = any_orthonormal(tangents[0]);
            sources[0] = NormalSource::Seeded;
            0
        }
    };

    for i in start + 1..n {
        match principal[i] {
            Some(normal) => {
                normals[i] = normal;
                sources[i] = NormalSource::Curvature;
            }
            None => normals[i] = propagate(normals[i - 1], tangents[i - 1], tangents[i]),
        }
    }

    (normals, sources)
}

/// Carry a neighbour's normal onto `tangent`.
///
/// Falls back to the neighbour's binormal when its normal is nearly parallel
/// to `tangent`, then to a seeded normal.
fn propagate(normal: Vector3, neighbour_tangent: Vector3, tangent: Vector3) -> Vector3 {
    let binormal = neighbour_tangent.cross(normal);
    [normal, binormal]
        .into_iter()
        .find_map(|v| try_normalize(orthogonal_component(v, tangent), MIN_PROPAGATED_LENGTH))
        .map(|v| orthogonal_component(v, tangent).normalize())
        .unwrap_or_else(|| any_orthonormal(tangent))
}
