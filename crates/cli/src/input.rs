//! Loading strokes from disk.
//!
//! - JSON: `[[[x, y], ...], ...]`, one inner list per stroke.
//! - CSV: columns `stroke,x,y`; consecutive rows with the same `stroke` id
//!   form one stroke.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use sketch::{Sketch, Vec2};

type Strokes = Vec<Vec<Vec2<f64>>>;

/// Read a sketch, picking the format from the file extension (`.csv`, else JSON).
pub fn load(path: &Path) -> Result<Sketch> {
    let strokes = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => strokes_from_csv(path)?,
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            strokes_from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
    };
    Ok(Sketch::from_strokes(&strokes))
}

pub fn strokes_from_json(text: &str) -> Result<Strokes> {
    let raw: Vec<Vec<[f64; 2]>> = serde_json::from_str(text)?;
    Ok(raw
        .into_iter()
        .map(|s| s.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
        .collect())
}

fn strokes_from_csv(path: &Path) -> Result<Strokes> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("stroke").cast(DataType::Int64),
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading CSV {}", path.display()))?;
    tracing::debug!(rows = df.height(), "csv_rows");
    let ids = df.column("stroke")?.i64()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    group_rows(
        ids.into_iter()
            .zip(xs.into_iter().zip(ys.into_iter()))
            .map(|(id, (x, y))| (id, x, y)),
    )
}

/// Split rows into strokes at every change of stroke id.
fn group_rows<I>(rows: I) -> Result<Strokes>
where
    I: IntoIterator<Item = (Option<i64>, Option<f64>, Option<f64>)>,
{
    let mut strokes: Strokes = Vec::new();
    let mut current = None;
    for (row, cells) in rows.into_iter().enumerate() {
        let (Some(id), Some(x), Some(y)) = cells else {
            bail!("row {row}: missing stroke, x or y value");
        };
        if current != Some(id) {
            strokes.push(Vec::new());
            current = Some(id);
        }
        if let Some(stroke) = strokes.last_mut() {
            stroke.push(Vec2::new(x, y));
        }
    }
    Ok(strokes)
}
