use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sketch::Sketch;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

#[derive(Parser)]
#[command(name = "sketch")]
#[command(about = "Resample, normalize and grid-map stroke sketches")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the stroke dump of the input
    Dump {
        #[arg(long)]
        input: PathBuf,
    },
    /// Apply normalize -> resample -> grid (each optional) and print the dump
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        normalize: bool,
        /// Resampling rate (samples per max centroid distance)
        #[arg(long)]
        rate: Option<f64>,
        /// Map onto the [0, 23] grid using the sketch's own bounding box
        #[arg(long)]
        grid: bool,
    },
    /// Print counts and statistics as JSON
    Report {
        #[arg(long)]
        input: PathBuf,
    },
}

/// Which derived operations `run` applies, in fixed order.
#[derive(Clone, Copy, Debug, Default)]
struct Pipeline {
    normalize: bool,
    rate: Option<f64>,
    grid: bool,
}

#[derive(Serialize)]
struct Report {
    points: usize,
    strokes: usize,
    capacity: usize,
    centroid: [f64; 2],
    std: [f64; 2],
    max_distance: Option<f64>,
    /// `[min_x, min_y, max_x, max_y]`
    bounding_box: Option<[f64; 4]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Dump { input } => {
            let s = load(&input)?;
            print!("{s}");
            Ok(())
        }
        Action::Run {
            input,
            normalize,
            rate,
            grid,
        } => {
            let s = load(&input)?;
            let out = run(
                &s,
                Pipeline {
                    normalize,
                    rate,
                    grid,
                },
            )?;
            print!("{out}");
            Ok(())
        }
        Action::Report { input } => {
            let s = load(&input)?;
            println!("{}", serde_json::to_string_pretty(&report(&s))?);
            Ok(())
        }
    }
}

fn load(path: &std::path::Path) -> Result<Sketch> {
    let s = input::load(path)?;
    tracing::info!(
        input = %path.display(),
        strokes = s.stroke_count(),
        points = s.point_count(),
        "loaded"
    );
    Ok(s)
}

fn run(s: &Sketch, p: Pipeline) -> Result<Sketch> {
    tracing::info!(normalize = p.normalize, rate = ?p.rate, grid = p.grid, "run");
    let mut cur = s.clone();
    if p.normalize {
        cur = cur.normalize()?;
    }
    if let Some(rate) = p.rate {
        cur = cur.resample(rate)?;
        tracing::info!(points = cur.point_count(), "resampled");
    }
    if p.grid {
        cur = cur.transform_to_grid()?;
    }
    Ok(cur)
}

fn report(s: &Sketch) -> Report {
    let c = s.centroid();
    let sd = s.std();
    Report {
        points: s.point_count(),
        strokes: s.stroke_count(),
        capacity: s.capacity(),
        centroid: [c.x, c.y],
        std: [sd.x, sd.y],
        max_distance: s.max_distance(),
        bounding_box: s
            .bounding_box()
            .map(|b| [b.min.x, b.min.y, b.max.x, b.max.y]),
    }
}
