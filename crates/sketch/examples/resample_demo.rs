//! Walk a small two-stroke sketch through every derived operation.
//!
//! Prints the stroke dump of the source, its resampled, normalized, and
//! grid-mapped versions, plus the statistics that drive them.

use sketch::prelude::*;

fn main() -> Result<(), SketchError> {
    let mut s = Sketch::new(4, 2);
    s.open_stroke()?;
    for (x, y) in [(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (6.5, 4.5)] {
        s.add_point(x, y);
    }
    s.open_stroke()?;
    for (x, y) in [(0.0, 6.0), (2.0, 9.0), (5.0, 9.5)] {
        s.add_point(x, y);
    }

    let c = s.centroid();
    let sd = s.std();
    println!(
        "points={} strokes={} capacity={}",
        s.point_count(),
        s.stroke_count(),
        s.capacity()
    );
    println!("centroid=({:.3},{:.3}) std=({:.3},{:.3})", c.x, c.y, sd.x, sd.y);
    println!("sampling_interval(rate=4)={:.4}", s.sampling_interval(4.0)?);

    println!("-- source\n{s}");
    let resampled = s.resample(4.0)?;
    println!("-- resampled\n{resampled}");
    println!("-- normalized\n{}", s.normalize()?);
    println!("-- grid\n{}", resampled.transform_to_grid()?);
    Ok(())
}
