use clap::{ArgAction, Parser, ValueHint};
use log::info;
use photo2pixel::config::convert::load_params;
use photo2pixel::image::io::{load_rgb_image, save_mask, save_rgb_f32, write_json_file};
use photo2pixel::{convert_with_report, PixelArtParams};
use std::path::PathBuf;
use std::time::Instant;

/// Convert a photo into pixel art with dark outlines.
#[derive(Parser, Debug)]
#[command(name = "photo2pixel", version, about)]
struct Cli {
    /// Input image path
    #[arg(long, default_value = "images/input.png", value_hint = ValueHint::FilePath)]
    input: PathBuf,
    /// Output image path
    #[arg(long, default_value = "images/result.png", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Larger kernel size means smoother color transitions [default: 4]
    #[arg(short = 'k', long = "kernel-size")]
    kernel_size: Option<usize>,
    /// Edge length of an individual output pixel [default: 8]
    #[arg(short = 'p', long = "pixel-size")]
    pixel_size: Option<usize>,
    /// Lower edge threshold means more black lines in edge regions [default: 128]
    #[arg(short = 'e', long = "edge-thresh")]
    edge_thresh: Option<f32>,
    /// Number of intensity buckets per block [default: 4]
    #[arg(long = "num-bins")]
    num_bins: Option<usize>,
    /// Outline dilation box size [default: 3]
    #[arg(long = "dilate")]
    dilate: Option<usize>,

    /// JSON file with pipeline parameters; explicit flags take precedence
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// Also write the outline mask as a PNG
    #[arg(long = "edge-mask", value_hint = ValueHint::FilePath)]
    edge_mask: Option<PathBuf>,
    /// Write a JSON report with counters and timings
    #[arg(long, value_hint = ValueHint::FilePath)]
    report: Option<PathBuf>,

    /// Log debug details
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

fn build_params(cli: &Cli) -> Result<PixelArtParams, String> {
    let mut params = match &cli.config {
        Some(path) => load_params(path)?,
        None => PixelArtParams::default(),
    };
    if let Some(v) = cli.kernel_size {
        params.kernel_size = v;
    }
    if let Some(v) = cli.pixel_size {
        params.block_size = v;
    }
    if let Some(v) = cli.edge_thresh {
        params.edge_threshold = v;
    }
    if let Some(v) = cli.num_bins {
        params.num_bins = v;
    }
    if let Some(v) = cli.dilate {
        params.edge_dilate_size = v;
    }
    params.validate().map_err(|e| e.to_string())?;
    Ok(params)
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let params = build_params(cli)?;

    info!("Loading image from: {}", cli.input.display());
    let image = load_rgb_image(&cli.input)?;

    info!(
        "Starting the conversion process ({}x{}, kernel={} pixel={} edge={})...",
        image.w, image.h, params.kernel_size, params.block_size, params.edge_threshold
    );
    let start = Instant::now();
    let (art, report) = convert_with_report(&image, &params).map_err(|e| e.to_string())?;
    info!(
        "Conversion completed in {:.2} seconds.",
        start.elapsed().as_secs_f64()
    );

    info!("Saving output image to: {}", cli.output.display());
    save_rgb_f32(&art, &cli.output)?;

    if let Some(path) = &cli.edge_mask {
        save_mask(&report.edge_mask, path)?;
        info!("Edge mask written to {}", path.display());
    }
    if let Some(path) = &cli.report {
        write_json_file(path, &report)?;
        info!("Report written to {}", path.display());
    }
    Ok(())
}
