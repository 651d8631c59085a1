//! Arc-length resampling of every stroke at a fixed spacing.
//!
//! Model
//! - Spacing: `interval = max_distance * slack / rate`, so `rate` is roughly
//!   the number of samples across the sketch's radius.
//! - Sizing pass: a stroke of points `p[0..n]` needs at most
//!   `1 + Σ ceil(|p[j] - p[j-1]| / interval)` samples; the sum over strokes is
//!   the output capacity.
//! - Generation pass: keep the first point, then step `interval` from the
//!   last emitted sample toward each original vertex while the remaining
//!   distance is strictly larger than `interval`. Vertices themselves are not
//!   emitted, so a stroke's end is covered only to within one interval.
//! - Each segment emits at most one sample more than its sized share, and a
//!   step that no longer moves (interval below the coordinates' precision)
//!   ends the segment, so the walk always terminates.

use nalgebra::Vector2;

use super::{cfg::SketchCfg, types::Sketch};
use crate::SketchError;

impl Sketch {
    /// Spacing used by `resample(rate)`.
    pub fn sampling_interval(&self, rate: f64) -> Result<f64, SketchError> {
        self.sampling_interval_with(rate, &SketchCfg::default())
    }

    pub fn sampling_interval_with(&self, rate: f64, cfg: &SketchCfg) -> Result<f64, SketchError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SketchError::invalid(format!(
                "rate must be finite and > 0, got {rate}"
            )));
        }
        let max_d = self.max_distance().ok_or(SketchError::EmptySketch)?;
        let interval = max_d * cfg.interval_slack / rate;
        if !interval.is_finite() || interval <= 0.0 {
            return Err(SketchError::degenerate(format!(
                "sampling interval {interval} is not positive (max distance {max_d})"
            )));
        }
        Ok(interval)
    }

    /// Resample every stroke at an even arc-length spacing.
    ///
    /// Stroke count and each stroke's first point are preserved.
    pub fn resample(&self, rate: f64) -> Result<Sketch, SketchError> {
        self.resample_with(rate, &SketchCfg::default())
    }

    pub fn resample_with(&self, rate: f64, cfg: &SketchCfg) -> Result<Sketch, SketchError> {
        let interval = self.sampling_interval_with(rate, cfg)?;
        let sized: f64 = self.strokes().map(|s| resampled_len(s, interval)).sum();
        if sized.is_nan() || sized > cfg.max_points as f64 {
            return Err(SketchError::invalid(format!(
                "rate {rate} needs {sized} samples, more than the limit of {}",
                cfg.max_points
            )));
        }
        let capacity = sized as usize;
        tracing::debug!(
            rate,
            interval,
            capacity,
            strokes = self.stroke_count(),
            "resample sized"
        );

        let mut out = Sketch::new(capacity, self.stroke_capacity);
        for stroke in self.strokes() {
            out.open_stroke()?;
            walk_stroke(stroke, interval, &mut out);
        }
        tracing::trace!(points = out.point_count(), "resample generated");
        Ok(out)
    }
}

/// Samples `walk_stroke` needs for the segment `a -> b`.
#[inline]
fn segment_len(a: Vector2<f64>, b: Vector2<f64>, interval: f64) -> f64 {
    ((b - a).norm() / interval).ceil()
}

/// Upper bound on the samples `walk_stroke` emits for `stroke`, kept in `f64`
/// so oversized requests are caught before any allocation.
fn resampled_len(stroke: &[Vector2<f64>], interval: f64) -> f64 {
    if stroke.is_empty() {
        return 0.0;
    }
    1.0 + stroke
        .windows(2)
        .map(|w| segment_len(w[0], w[1], interval))
        .sum::<f64>()
}

fn walk_stroke(stroke: &[Vector2<f64>], interval: f64, out: &mut Sketch) {
    let Some((&first, rest)) = stroke.split_first() else {
        return;
    };
    let mut prev = first;
    let mut source = first;
    out.push(prev);
    for &target in rest {
        // Sized share of this segment plus one for float drift.
        let mut budget = segment_len(source, target, interval) as usize + 1;
        source = target;
        let mut remaining = (target - prev).norm();
        while remaining > interval && budget > 0 {
            let d = target - prev;
            let angle = d.y.atan2(d.x);
            let next = prev + Vector2::new(angle.cos(), angle.sin()) * interval;
            if next == prev {
                tracing::trace!(interval, "step below coordinate precision");
                break;
            }
            prev = next;
            out.push(prev);
            budget -= 1;
            remaining = (target - prev).norm();
        }
    }
}
