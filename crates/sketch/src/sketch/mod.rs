//! Stroke-delimited point buffers and their derived geometry.
//!
//! Purpose
//! - Hold a sketch as one contiguous point buffer plus stroke start indices,
//!   so every stroke is a cheap slice.
//! - Provide pure derived operations (`resample`, `normalize`, `transform`)
//!   that read `&self` and return a new, independently owned `Sketch`.
//!
//! Layout
//! - `types`: the `Sketch` buffer, its growth policy, accessors and dump.
//! - `stats`: centroid, std, max distance, bounding box.
//! - `resample`, `normalize`, `transform`: one derived operation each.
//!
//! Code cross-refs: `Sketch`, `SketchCfg`, `Bounds`, `crate::SketchError`

mod cfg;
mod normalize;
mod resample;
mod stats;
mod transform;
mod types;

pub use cfg::SketchCfg;
pub use stats::Bounds;
pub use types::Sketch;

#[cfg(test)]
mod tests;
