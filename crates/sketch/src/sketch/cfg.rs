/// Numeric knobs of the derived operations.
///
/// `Default` matches the classic behavior: a 1% slack on the sampling
/// interval and a `[0, 23]` output grid for `transform`. `max_points` caps the
/// size of a resampled sketch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchCfg {
    /// Multiplier applied to the max centroid distance before dividing by the rate.
    pub interval_slack: f64,
    /// Lower end of the `transform` output range.
    pub grid_min: f64,
    /// Upper end of the `transform` output range.
    pub grid_max: f64,
    /// Largest point capacity `resample` may allocate.
    pub max_points: usize,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self {
            interval_slack: 1.01,
            grid_min: 0.0,
            grid_max: 23.0,
            max_points: 1 << 26,
        }
    }
}

impl SketchCfg {
    #[inline]
    pub fn grid_range(&self) -> f64 {
        self.grid_max - self.grid_min
    }
}
