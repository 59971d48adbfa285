/// Tolerances used to detect degenerate geometry along a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Length, relative to the size of the curve, below which a difference
    /// vector counts as zero (coincident samples).
    pub linear: f64,
    /// Relative threshold below which a curvature residual is considered
    /// noise against the local sample scale (straight segment).
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-12;
    pub const DEFAULT_ANGULAR: f64 = 1e-9;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    /// Treats nearly-straight runs as straight; useful for noisy samples.
    pub fn loose() -> Self {
        Self {
            linear: 1e-9,
            angular: 1e-6,
        }
    }

    /// Tolerance in absolute units for a curve whose bounding box diagonal
    /// is `extent`.
    pub fn scaled(self, extent: f64) -> Self {
        Self {
            linear: self.linear * extent,
            angular: self.angular,
        }
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check if `magnitude` is negligible, either absolutely or relative to `scale`.
    pub fn is_negligible(self, magnitude: f64, scale: f64) -> bool {
        self.is_zero(magnitude) || magnitude <= self.angular * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
