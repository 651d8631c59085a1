//! Centroid/std normalization.
//!
//! An axis whose spread is within rounding noise of its mean
//! (`std <= n * EPSILON * |mean|`) counts as flat and is rejected.

use super::types::Sketch;
use crate::SketchError;

impl Sketch {
    /// Center on the centroid and scale each axis by its standard deviation.
    ///
    /// The result keeps the capacities and stroke layout of `self`. Fails with
    /// `EmptySketch` for no points and `DegenerateInput` when an axis has zero
    /// spread (the division would yield NaN/Inf).
    pub fn normalize(&self) -> Result<Sketch, SketchError> {
        if self.points.is_empty() {
            return Err(SketchError::EmptySketch);
        }
        let c = self.centroid();
        let s = self.std();
        let noise = f64::EPSILON * self.points.len() as f64;
        for (axis, v, mean) in [("x", s.x, c.x), ("y", s.y, c.y)] {
            if v <= noise * mean.abs() || v <= 0.0 || !v.is_finite() {
                return Err(SketchError::degenerate(format!(
                    "standard deviation along {axis} is {v}"
                )));
            }
        }
        tracing::debug!(cx = c.x, cy = c.y, sx = s.x, sy = s.y, "normalize");

        let mut out = Sketch::new(self.capacity, self.stroke_capacity);
        for stroke in self.strokes() {
            out.open_stroke()?;
            for p in stroke {
                out.push((p - c).component_div(&s));
            }
        }
        Ok(out)
    }
}
