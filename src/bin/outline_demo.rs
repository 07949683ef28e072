use photo2pixel::config::convert::load_config;
use photo2pixel::diagnostics::ConversionReport;
use photo2pixel::image::io::{load_rgb_image, save_mask, save_rgb_f32, write_json_file};
use photo2pixel::convert_with_report;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;
    let (art, report) = convert_with_report(&image, &config.params).map_err(|e| e.to_string())?;

    save_rgb_f32(&art, &config.output)?;
    println!("Saved pixel art to {}", config.output.display());

    if let Some(path) = &config.debug.pixelized_image {
        save_rgb_f32(&report.pixelized, path)?;
        println!("Saved pixelized image to {}", path.display());
    }
    if let Some(path) = &config.debug.edge_mask {
        save_mask(&report.edge_mask, path)?;
        println!(
            "Saved edge mask ({} of {} pixels) to {}",
            report.edge_pixels,
            report.width * report.height,
            path.display()
        );
    }
    if let Some(path) = &config.debug.report_json {
        write_json_file(path, &OutlineSummary::from_report(&report))?;
        println!("Saved summary to {}", path.display());
    }

    print_timings(&report);
    Ok(())
}

fn usage() -> String {
    "Usage: outline_demo <config.json>".to_string()
}

fn print_timings(report: &ConversionReport) {
    let stages: Vec<String> = report
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "Timings (ms): {} total={:.3}",
        stages.join(" "),
        report.timings.total_ms
    );
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutlineSummary<'a> {
    edge_coverage: f32,
    #[serde(flatten)]
    report: &'a ConversionReport,
}

impl<'a> OutlineSummary<'a> {
    fn from_report(report: &'a ConversionReport) -> Self {
        Self {
            edge_coverage: report.edge_coverage(),
            report,
        }
    }
}
