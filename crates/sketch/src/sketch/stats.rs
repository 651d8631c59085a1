//! Summary statistics over all appended points.
//!
//! Denominators use the number of points actually appended, never the declared
//! capacity, so partially filled or grown sketches report true means.

use nalgebra::Vector2;

use super::types::Sketch;

/// Axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds {
    #[inline]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Vector2::new(min_x, min_y),
            max: Vector2::new(max_x, max_y),
        }
    }

    /// Per-axis extent `max - min`.
    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        self.max - self.min
    }
}

impl Sketch {
    /// Mean position of all points; `(0, 0)` for an empty sketch.
    pub fn centroid(&self) -> Vector2<f64> {
        if self.points.is_empty() {
            return Vector2::zeros();
        }
        let sum = self
            .points
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p);
        sum / self.points.len() as f64
    }

    /// Per-axis population standard deviation around the centroid; `(0, 0)` when empty.
    pub fn std(&self) -> Vector2<f64> {
        if self.points.is_empty() {
            return Vector2::zeros();
        }
        let c = self.centroid();
        let sq = self.points.iter().fold(Vector2::zeros(), |acc: Vector2<f64>, p| {
            let d = p - c;
            acc + d.component_mul(&d)
        });
        (sq / self.points.len() as f64).map(f64::sqrt)
    }

    /// Largest Euclidean distance from the centroid to any point; `None` when empty.
    pub fn max_distance(&self) -> Option<f64> {
        let c = self.centroid();
        self.points
            .iter()
            .map(|p| (p - c).norm())
            .fold(None, |best: Option<f64>, d| Some(best.map_or(d, |b| b.max(d))))
    }

    /// Tight box around all points; `None` when empty.
    pub fn bounding_box(&self) -> Option<Bounds> {
        let (first, rest) = self.points.split_first()?;
        let init = Bounds {
            min: *first,
            max: *first,
        };
        Some(rest.iter().fold(init, |b, p| Bounds {
            min: b.min.inf(p),
            max: b.max.sup(p),
        }))
    }
}
