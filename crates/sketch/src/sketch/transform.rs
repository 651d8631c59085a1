//! Linear remap of a bounding box onto a small integer grid.
//!
//! Per axis: `floor((v - min) * (grid_max - grid_min) / (max - min) + grid_min)`,
//! multiplying before dividing so `v == max` lands exactly on `grid_max`.

use super::{cfg::SketchCfg, stats::Bounds, types::Sketch};
use crate::SketchError;

impl Sketch {
    /// Map `[min_x, max_x] × [min_y, max_y]` onto the integer grid `[0, 23]²`.
    ///
    /// Each coordinate becomes `floor((v - min) * 23 / (max - min))`. Stroke
    /// layout and capacities are copied unchanged.
    pub fn transform(
        &self,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<Sketch, SketchError> {
        self.transform_with(
            &Bounds::new(min_x, min_y, max_x, max_y),
            &SketchCfg::default(),
        )
    }

    /// `transform` onto the sketch's own bounding box, so extremes hit the grid ends.
    pub fn transform_to_grid(&self) -> Result<Sketch, SketchError> {
        let bounds = self.bounding_box().ok_or(SketchError::EmptySketch)?;
        self.transform_with(&bounds, &SketchCfg::default())
    }

    /// Linear remap of `bounds` onto `[cfg.grid_min, cfg.grid_max]`, floored.
    ///
    /// A zero-width axis (or non-finite bound) is rejected instead of leaving
    /// that axis unmapped.
    pub fn transform_with(&self, bounds: &Bounds, cfg: &SketchCfg) -> Result<Sketch, SketchError> {
        let extent = bounds.extent();
        for (axis, lo, hi, w) in [
            ("x", bounds.min.x, bounds.max.x, extent.x),
            ("y", bounds.min.y, bounds.max.y, extent.y),
        ] {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(SketchError::invalid(format!(
                    "{axis} range [{lo}, {hi}] is not finite"
                )));
            }
            if w == 0.0 {
                return Err(SketchError::invalid(format!(
                    "{axis} range [{lo}, {hi}] has zero width"
                )));
            }
        }
        let scale = cfg.grid_range();
        let mut points = Vec::with_capacity(self.capacity);
        points.extend(self.points.iter().map(|p| {
            ((p - bounds.min) * scale)
                .component_div(&extent)
                .map(|u| (u + cfg.grid_min).floor())
        }));
        Ok(Sketch {
            capacity: self.capacity,
            stroke_capacity: self.stroke_capacity,
            points,
            stroke_starts: self.stroke_starts.clone(),
        })
    }
}
