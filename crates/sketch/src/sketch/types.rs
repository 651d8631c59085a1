//! The `Sketch` buffer: construction, growth policy, accessors and text dump.
//!
//! Storage is one contiguous `Vec<Vector2<f64>>` plus the start index of every
//! stroke. The declared `capacity` is tracked explicitly (not left to `Vec`) so
//! growth follows the stroke-keyed policy of `add_point`.

use std::fmt;
use std::ops::Range;

use nalgebra::Vector2;

use crate::SketchError;

/// Ordered strokes of 2D points.
///
/// Stroke `i` covers `points[stroke_starts[i]..stroke_starts[i + 1]]`; the last
/// stroke runs to `point_count()`. Callers open a stroke before appending its
/// first point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sketch {
    pub(super) capacity: usize,
    pub(super) stroke_capacity: usize,
    pub(super) points: Vec<Vector2<f64>>,
    pub(super) stroke_starts: Vec<usize>,
}

impl Sketch {
    /// Empty sketch sized for `point_capacity` points and at most `stroke_capacity` strokes.
    pub fn new(point_capacity: usize, stroke_capacity: usize) -> Self {
        Self {
            capacity: point_capacity,
            stroke_capacity,
            points: Vec::with_capacity(point_capacity),
            stroke_starts: Vec::with_capacity(stroke_capacity),
        }
    }

    /// Build a sketch sized exactly for the given strokes.
    pub fn from_strokes<S: AsRef<[Vector2<f64>]>>(strokes: &[S]) -> Self {
        let total = strokes.iter().map(|s| s.as_ref().len()).sum();
        let mut sketch = Self::new(total, strokes.len());
        for stroke in strokes {
            sketch.stroke_starts.push(sketch.points.len());
            sketch.points.extend_from_slice(stroke.as_ref());
        }
        sketch
    }

    /// Start a new stroke at the current end of the point buffer.
    ///
    /// Fails once `stroke_capacity` strokes are open; the sketch is left unchanged.
    pub fn open_stroke(&mut self) -> Result<(), SketchError> {
        if self.stroke_starts.len() >= self.stroke_capacity {
            return Err(SketchError::StrokeLimitExceeded {
                capacity: self.stroke_capacity,
            });
        }
        self.stroke_starts.push(self.points.len());
        Ok(())
    }

    /// Append a point to the current stroke, growing the capacity if needed.
    #[inline]
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.push(Vector2::new(x, y));
    }

    /// Append a point given as a vector.
    pub fn push(&mut self, p: Vector2<f64>) {
        if self.points.len() >= self.capacity {
            self.grow();
        }
        self.points.push(p);
    }

    /// Grow by `2 * stroke_capacity` slots (at least one); stored points stay in place.
    fn grow(&mut self) {
        let step = (2 * self.stroke_capacity).max(1);
        self.capacity += step;
        self.points.reserve_exact(self.capacity - self.points.len());
        tracing::trace!(capacity = self.capacity, step, "grew point buffer");
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn stroke_count(&self) -> usize {
        self.stroke_starts.len()
    }

    /// Declared point capacity (grows on overflow).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum number of strokes; fixed at creation.
    #[inline]
    pub fn stroke_capacity(&self) -> usize {
        self.stroke_capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All appended points in storage order.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Start index of every opened stroke.
    #[inline]
    pub fn stroke_starts(&self) -> &[usize] {
        &self.stroke_starts
    }

    fn stroke_range(&self, i: usize) -> Option<Range<usize>> {
        let start = *self.stroke_starts.get(i)?;
        let end = self
            .stroke_starts
            .get(i + 1)
            .copied()
            .unwrap_or(self.points.len());
        Some(start..end)
    }

    /// Points of stroke `i`, or `None` if fewer strokes are open.
    pub fn stroke(&self, i: usize) -> Option<&[Vector2<f64>]> {
        self.stroke_range(i).map(|r| &self.points[r])
    }

    /// Iterate strokes in creation order.
    pub fn strokes(&self) -> impl Iterator<Item = &[Vector2<f64>]> + '_ {
        (0..self.stroke_count()).filter_map(move |i| self.stroke(i))
    }
}

/// One line per stroke: `index=>(x,y)-(x,y)-...`.
impl fmt::Display for Sketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stroke) in self.strokes().enumerate() {
            write!(f, "{i}=>")?;
            for (j, p) in stroke.iter().enumerate() {
                if j > 0 {
                    write!(f, "-")?;
                }
                write!(f, "({},{})", p.x, p.y)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
