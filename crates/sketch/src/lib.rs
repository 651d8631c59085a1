//! Stroke sketches and the geometry transforms over them.
//!
//! A `Sketch` is an append-only buffer of 2D points split into strokes
//! (pen-down runs). Derived operations never mutate their receiver; each
//! returns a freshly owned `Sketch`:
//! - `resample`: evenly spaced points along every stroke (arc-length walk).
//! - `normalize`: center on the centroid, scale by per-axis std.
//! - `transform`: linear remap of a bounding box onto the integer grid `[0, 23]`.
//!
//! Code cross-refs: `Sketch`, `SketchCfg`, `SketchError`, `Bounds`

pub mod error;
pub mod sketch;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SketchError;
pub use nalgebra::Vector2 as Vec2;
pub use sketch::{Bounds, Sketch, SketchCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::SketchError;
    pub use crate::sketch::{Bounds, Sketch, SketchCfg};
    pub use nalgebra::Vector2 as Vec2;
}
