//! Headless visualization demo with configurable parameters
//!
//! Builds the coordinate grid and the spherical-harmonic field
//! collection, then renders one view to stdout: an ASCII heatmap of a
//! slice or of three orthogonal planes, or an isosurface figure summary.
//! `--json` dumps the render value object instead, in the shape an
//! external plotting surface consumes.

use clap::Parser;
use nalgebra::Vector3;
use sph_viz_core::{
    render_isosurface, render_planes, render_slice, FieldCollection, Grid, LogRange, LogScale,
    PlanesRequest, SliceRequest, VolumeRequest, DEFAULT_FLOOR_RATIO,
};
use tracing_subscriber::EnvFilter;

/// Spherical-harmonic field visualization demo
#[derive(Parser, Debug)]
#[command(name = "sph-viz-demo")]
#[command(about = "Spherical harmonic field slicing and isosurface demo", long_about = None)]
struct Args {
    /// Grid resolution per axis
    #[arg(short, long, default_value_t = 64)]
    n: usize,

    /// Maximum harmonic degree (every order 0..=degree is generated)
    #[arg(long, default_value_t = 3)]
    max_degree: u32,

    /// Dataset to render (e.g. l2m1)
    #[arg(short, long, default_value = "l2m0")]
    dataset: String,

    /// List generated dataset names and exit
    #[arg(long)]
    list: bool,

    /// Render the cross-section at this x index (default: middle slice)
    #[arg(long)]
    slice: Option<usize>,

    /// Render three orthogonal planes through this point
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    planes: Option<Vec<f64>>,

    /// Build the isosurface figure for the dataset
    #[arg(long)]
    volume: bool,

    /// Ratio between vmax and the logarithmic lower-bound floor
    #[arg(long, default_value_t = DEFAULT_FLOOR_RATIO)]
    floor_ratio: f64,

    /// Emit the render result as JSON instead of ASCII output
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::new(args.n);
    let pairs: Vec<(u32, u32)> = (0..=args.max_degree)
        .flat_map(|l| (0..=l).map(move |m| (l, m)))
        .collect();
    let fields = FieldCollection::generate(&grid, &pairs);

    if args.list {
        for name in fields.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let scale = LogScale {
        floor_ratio: args.floor_ratio,
    };

    if let Some(coords) = &args.planes {
        let plot = render_planes(
            &fields,
            &grid,
            &scale,
            &PlanesRequest {
                dataset: args.dataset.clone(),
                focus: Vector3::new(coords[0], coords[1], coords[2]),
            },
        )?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plot)?);
            return Ok(());
        }
        println!(
            "{}: planes through indices ({}, {}, {}), shared vmin={:.3e} vmax={:.3e}",
            plot.dataset,
            plot.indices[0],
            plot.indices[1],
            plot.indices[2],
            plot.range.vmin,
            plot.range.vmax
        );
        for (axis, plane) in ["x", "y", "z"].iter().zip(plot.planes.iter()) {
            println!("\nplane perpendicular to {axis}:");
            print_heatmap(plane, plot.n, plot.range);
        }
        return Ok(());
    }

    if args.volume {
        let fig = render_isosurface(
            &fields,
            &grid,
            &VolumeRequest {
                dataset: args.dataset.clone(),
            },
        )?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&fig)?);
            return Ok(());
        }
        println!(
            "{}: isosurface figure with {} samples, {} levels in [{:.3e}, {:.3e}], caps {}",
            fig.dataset,
            fig.value.len(),
            fig.surface_count,
            fig.isomin,
            fig.isomax,
            if fig.show_caps { "on" } else { "off" }
        );
        return Ok(());
    }

    let index = args.slice.unwrap_or(args.n / 2);
    let plot = render_slice(
        &fields,
        &grid,
        &scale,
        &SliceRequest {
            dataset: args.dataset.clone(),
            index,
        },
    )?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plot)?);
        return Ok(());
    }
    println!(
        "{}: slice at x index {}, vmin={:.3e} vmax={:.3e}",
        plot.dataset, plot.index, plot.range.vmin, plot.range.vmax
    );
    print_heatmap(&plot.values, plot.n, plot.range);
    Ok(())
}

/// Shade characters from bottom of scale to top
const RAMP: &[u8] = b" .:-=+*#%@";

/// Print an n×n plane as an ASCII heatmap on the logarithmic scale.
///
/// Values below vmin compress into the bottom shade, matching the color
/// policy of the raster surface this stands in for. Each cell prints as
/// two characters to roughly square the terminal aspect ratio.
fn print_heatmap(values: &[f64], n: usize, range: LogRange) {
    let log_min = range.vmin.ln();
    let span = range.vmax.ln() - log_min;
    for row in 0..n {
        let mut line = String::with_capacity(2 * n);
        for col in 0..n {
            let v = values[row * n + col].max(range.vmin);
            let t = ((v.ln() - log_min) / span).clamp(0.0, 1.0);
            let shade = RAMP[(t * (RAMP.len() - 1) as f64).round() as usize] as char;
            line.push(shade);
            line.push(shade);
        }
        println!("{line}");
    }
}
