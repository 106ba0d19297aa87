#![deny(unsafe_code)]
//! CLI binary for the lowpoly pattern generator.
//!
//! Subcommands:
//! - `render` -- generate a triangulated pattern, write PNG
//! - `list` -- print available palettes and sweep axes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use lowpoly_core::{Axis, Palette, Pattern, PatternSpec, Srgb};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lowpoly", about = "Low-poly triangulated pattern generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a pattern and write it as a PNG.
    ///
    /// Flags override the corresponding `--params` fields, which override
    /// the built-in defaults.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long)]
        width: Option<f64>,

        /// Canvas height in pixels.
        #[arg(short = 'H', long)]
        height: Option<f64>,

        /// Lattice spacing in pixels.
        #[arg(short, long)]
        cell_size: Option<f64>,

        /// Jitter as a fraction of the cell size (0 = regular grid).
        #[arg(short, long)]
        variance: Option<f64>,

        /// PRNG seed for deterministic output.
        #[arg(long)]
        seed: Option<u64>,

        /// Palette name (see `lowpoly list`).
        #[arg(short, long)]
        palette: Option<String>,

        /// Axis the palette sweeps along: x, y, or diagonal.
        #[arg(short, long)]
        axis: Option<String>,

        /// Background hex color, visible only on degenerate canvases.
        #[arg(short, long)]
        background: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "pattern.png")]
        output: PathBuf,

        /// Base spec as a JSON object (same field names as the spec).
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available palettes and axes.
    List,
}

/// Assembles the spec: `--params` JSON over defaults, then flag overrides.
#[allow(clippy::too_many_arguments)]
fn assemble_spec(
    params: &str,
    width: Option<f64>,
    height: Option<f64>,
    cell_size: Option<f64>,
    variance: Option<f64>,
    seed: Option<u64>,
    palette: Option<String>,
    axis: Option<String>,
    background: Option<String>,
) -> Result<PatternSpec, CliError> {
    let params: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let mut spec = PatternSpec::from_json(&params);

    if let Some(w) = width {
        spec.width = w;
    }
    if let Some(h) = height {
        spec.height = h;
    }
    if let Some(c) = cell_size {
        spec.cell_size = c;
    }
    if let Some(v) = variance {
        spec.variance = v;
    }
    if let Some(s) = seed {
        spec.seed = s;
    }
    if let Some(p) = palette {
        spec.palette = p;
    }
    if let Some(a) = axis {
        spec.axis = parse_axis(&a)?;
    }
    if let Some(b) = background {
        spec.background =
            Srgb::from_hex(&b).map_err(|e| CliError::Input(format!("invalid --background: {e}")))?;
    }
    Ok(spec)
}

fn parse_axis(name: &str) -> Result<Axis, CliError> {
    match name {
        "x" => Ok(Axis::X),
        "y" => Ok(Axis::Y),
        "diagonal" => Ok(Axis::Diagonal),
        other => Err(CliError::Input(format!(
            "invalid --axis '{other}' (expected x, y, or diagonal)"
        ))),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = Palette::list_names();
            let axes = ["x", "y", "diagonal"];
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "axes": axes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
                println!("Axes:");
                println!("  {}", axes.join(", "));
            }
        }
        Command::Render {
            width,
            height,
            cell_size,
            variance,
            seed,
            palette,
            axis,
            background,
            output,
            params,
        } => {
            let spec = assemble_spec(
                &params, width, height, cell_size, variance, seed, palette, axis, background,
            )?;

            let pattern = Pattern::from_spec(spec)?;
            let buffer = pattern.image();
            lowpoly_render::write_png(&buffer, &output)?;

            let spec = pattern.spec();
            if cli.json {
                let info = serde_json::json!({
                    "spec": spec,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} (cell {}, variance {}, seed {}, palette {}) -> {}",
                    spec.width,
                    spec.height,
                    spec.cell_size,
                    spec.variance,
                    spec.seed,
                    spec.palette,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
