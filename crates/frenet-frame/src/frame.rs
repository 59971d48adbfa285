//! Frenet frame output types.

use approx::abs_diff_eq;
use frenet_core::{FrenetError, Result, Validate};
use frenet_math::{DMat3, Vector3};
use serde::{Deserialize, Serialize};

/// Tolerance used by [`Validate`] for the unit-length and orthogonality checks.
pub const FRAME_EPSILON: f64 = 1e-6;

/// How the normal of a frame was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalSource {
    /// Principal normal from the discrete curvature vector.
    Curvature,
    /// Carried over from the nearest frame with a well-defined normal and
    /// re-orthogonalized against this frame's tangent.
    Propagated,
    /// Built from the coordinate axis least aligned with the tangent, because
    /// no sample of the curve has a well-defined normal.
    Seeded,
}

/// Orthonormal right-handed frame at one sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl Frame {
    pub fn new(tangent: Vector3, normal: Vector3, binormal: Vector3) -> Self {
        Self {
            tangent,
            normal,
            binormal,
        }
    }

    /// Rotation matrix with columns `(T, N, B)`, mapping frame-local
    /// coordinates to world coordinates.
    pub fn basis(&self) -> DMat3 {
        DMat3::from_cols(self.tangent, self.normal, self.binormal)
    }

    /// Check unit length, pairwise orthogonality and `B = T x N`.
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        self.check(epsilon).is_ok()
    }

    fn check(&self, epsilon: f64) -> Result<()> {
        let (t, n, b) = (self.tangent, self.normal, self.binormal);
        for (name, v) in [("T", t), ("N", n), ("B", b)] {
            if !abs_diff_eq!(v.length(), 1.0, epsilon = epsilon) {
                return Err(FrenetError::Tolerance(format!(
                    "|{}| = {} is not unit length",
                    name,
                    v.length()
                )));
            }
        }
        for (name, d) in [("T.N", t.dot(n)), ("T.B", t.dot(b)), ("N.B", n.dot(b))] {
            if !abs_diff_eq!(d, 0.0, epsilon = epsilon) {
                return Err(FrenetError::Tolerance(format!("{} = {} is not zero", name, d)));
            }
        }
        let handedness = (t.cross(n) - b).length();
        if handedness > epsilon {
            return Err(FrenetError::Tolerance(format!(
                "frame is not right-handed: |T x N - B| = {}",
                handedness
            )));
        }
        Ok(())
    }
}

impl Validate for Frame {
    fn validate(&self) -> Result<()> {
        self.check(FRAME_EPSILON)
    }
}

/// Frenet frames along a sampled curve, co-indexed with its points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrenetFrames {
    tangents: Vec<Vector3>,
    normals: Vec<Vector3>,
    binormals: Vec<Vector3>,
    sources: Vec<NormalSource>,
}

impl FrenetFrames {
    pub(crate) fn from_parts(
        tangents: Vec<Vector3>,
        normals: Vec<Vector3>,
        binormals: Vec<Vector3>,
        sources: Vec<NormalSource>,
    ) -> Self {
        debug_assert!(
            tangents.len() == normals.len()
                && normals.len() == binormals.len()
                && binormals.len() == sources.len()
        );
        Self {
            tangents,
            normals,
            binormals,
            sources,
        }
    }

    pub fn len(&self) -> usize {
        self.tangents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tangents.is_empty()
    }

    pub fn tangents(&self) -> &[Vector3] {
        &self.tangents
    }

    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    pub fn binormals(&self) -> &[Vector3] {
        &self.binormals
    }

    pub fn sources(&self) -> &[NormalSource] {
        &self.sources
    }

    pub fn frame(&self, index: usize) -> Option<Frame> {
        Some(Frame::new(
            *self.tangents.get(index)?,
            *self.normals.get(index)?,
            *self.binormals.get(index)?,
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = Frame> + '_ {
        self.tangents
            .iter()
            .zip(&self.normals)
            .zip(&self.binormals)
            .map(|((&t, &n), &b)| Frame::new(t, n, b))
    }

    /// Split into the `(T, N, B)` sequences.
    pub fn into_parts(self) -> (Vec<Vector3>, Vec<Vector3>, Vec<Vector3>) {
        (self.tangents, self.normals, self.binormals)
    }
}

impl Validate for FrenetFrames {
    fn validate(&self) -> Result<()> {
        for (i, frame) in self.iter().enumerate() {
            frame
                .validate()
                .map_err(|e| FrenetError::Tolerance(format!("frame {}: {}", i, e)))?;
        }
        Ok(())
    }
}
