//! Interactive field viewer
//!
//! A terminal-based stand-in for a widget layer: the grid and field
//! collection are built once, then every command re-invokes a pure
//! render function with fresh view parameters and prints the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! ```
//!
//! # Commands
//!
//! - `datasets` - List generated dataset names
//! - `slice <name> <index>` - ASCII heatmap of the plane at an x index
//! - `planes <name> <x> <y> <z>` - Three orthogonal planes through a point
//! - `volume <name>` - Isosurface figure summary for a dataset
//! - `floor <ratio>` - Set the log-scale floor ratio (vmax / vmin)
//! - `help` - Show available commands
//! - `quit` - Exit

use nalgebra::Vector3;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sph_viz_core::{
    default_pairs, render_isosurface, render_planes, render_slice, FieldCollection, Grid,
    LogRange, LogScale, PlanesRequest, SliceRequest, VolumeRequest,
};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default grid resolution per axis
const DEFAULT_N: usize = 64;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Spherical Harmonic Field Viewer");
    println!();

    let n = prompt_resolution();
    let grid = Grid::new(n);
    let fields = FieldCollection::generate(&grid, &default_pairs());
    let mut scale = LogScale::default();
    info!(n, datasets = fields.len(), "scene ready");

    println!(
        "Built {}³ grid with {} datasets: {}",
        n,
        fields.len(),
        fields.names().join(", ")
    );

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {e}");
            return;
        }
    };

    println!("\nType 'help' for available commands.\n");

    loop {
        let readline = rl.readline("viz> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let parts: Vec<&str> = line.split_whitespace().collect();

                if parts.is_empty() {
                    continue;
                }

                match parts[0].to_lowercase().as_str() {
                    "datasets" | "d" => {
                        for name in fields.names() {
                            println!("{name}");
                        }
                    }
                    "slice" | "s" => {
                        if let (Some(name), Some(index)) =
                            (parts.get(1), parts.get(2).and_then(|s| s.parse().ok()))
                        {
                            show_slice(&fields, &grid, &scale, name, index);
                        } else {
                            println!("Usage: slice <name> <index>");
                        }
                    }
                    "planes" | "p" => {
                        let coords: Vec<f64> = parts[1..]
                            .iter()
                            .skip(1)
                            .filter_map(|s| s.parse().ok())
                            .collect();
                        if let (Some(name), [x, y, z]) = (parts.get(1), coords.as_slice()) {
                            show_planes(&fields, &grid, &scale, name, Vector3::new(*x, *y, *z));
                        } else {
                            println!("Usage: planes <name> <x> <y> <z>");
                        }
                    }
                    "volume" | "v" => {
                        if let Some(name) = parts.get(1) {
                            show_volume(&fields, &grid, name);
                        } else {
                            println!("Usage: volume <name>");
                        }
                    }
                    "floor" | "f" => {
                        if let Some(ratio) = parts.get(1).and_then(|s| s.parse().ok()) {
                            scale = LogScale { floor_ratio: ratio };
                            println!("Floor ratio set to {ratio}");
                        } else {
                            println!("Usage: floor <ratio>");
                        }
                    }
                    "help" | "h" | "?" => show_help(),
                    "quit" | "q" | "exit" => break,
                    cmd => println!("Unknown command '{cmd}'. Type 'help' for commands."),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Readline error: {e}");
                break;
            }
        }
    }

    println!("Goodbye.");
}

fn prompt_resolution() -> usize {
    print!("Grid resolution per axis [{DEFAULT_N}]: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return DEFAULT_N;
    }
    match line.trim() {
        "" => DEFAULT_N,
        s => s.parse().unwrap_or_else(|_| {
            println!("Not a number, using {DEFAULT_N}");
            DEFAULT_N
        }),
    }
}

fn show_slice(fields: &FieldCollection, grid: &Grid, scale: &LogScale, name: &str, index: usize) {
    let req = SliceRequest {
        dataset: name.to_string(),
        index,
    };
    match render_slice(fields, grid, scale, &req) {
        Ok(plot) => {
            println!(
                "{} at x index {} (vmin={:.3e}, vmax={:.3e})",
                plot.dataset, plot.index, plot.range.vmin, plot.range.vmax
            );
            print_heatmap(&plot.values, plot.n, plot.range);
        }
        Err(e) => println!("{e}"),
    }
}

fn show_planes(
    fields: &FieldCollection,
    grid: &Grid,
    scale: &LogScale,
    name: &str,
    focus: Vector3<f64>,
) {
    let req = PlanesRequest {
        dataset: name.to_string(),
        focus,
    };
    match render_planes(fields, grid, scale, &req) {
        Ok(plot) => {
            println!(
                "{} through indices ({}, {}, {}), shared vmin={:.3e} vmax={:.3e}",
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
        }
        Err(e) => println!("{e}"),
    }
}

fn show_volume(fields: &FieldCollection, grid: &Grid, name: &str) {
    let req = VolumeRequest {
        dataset: name.to_string(),
    };
    match render_isosurface(fields, grid, &req) {
        Ok(fig) => println!(
            "{}: {} samples, {} levels in [{:.3e}, {:.3e}], caps {}",
            fig.dataset,
            fig.value.len(),
            fig.surface_count,
            fig.isomin,
            fig.isomax,
            if fig.show_caps { "on" } else { "off" }
        ),
        Err(e) => println!("{e}"),
    }
}

fn show_help() {
    println!("Commands:");
    println!("  datasets              - list generated dataset names");
    println!("  slice <name> <index>  - heatmap of the plane at an x index");
    println!("  planes <name> <x> <y> <z> - three orthogonal planes through a point");
    println!("  volume <name>         - isosurface figure summary");
    println!("  floor <ratio>         - set the log-scale floor ratio");
    println!("  quit                  - exit");
}

/// Shade characters from bottom of scale to top
const RAMP: &[u8] = b" .:-=+*#%@";

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
