//! CLI tool for extracting and profiling images embedded in presentations.

use anyhow::{Context, Result};
use clap::Parser;
use deckscan_core::DeckReport;
use deckscan_pptx::DeckArchive;
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract embedded images from a .pptx archive and print a heuristic
/// report: per-image classification, per-slide content summary, and an
/// aggregate visual-style profile.
#[derive(Parser, Debug)]
#[command(name = "deckscan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input presentation file (.pptx)
    input: PathBuf,

    /// Output directory; images land in <output>/extracted_images/
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Emit the report as JSON instead of the sectioned console format
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let report = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    // Empty results get a distinct exit code so the tool composes in
    // pipelines: 0 = images extracted, 2 = ran fine but found nothing.
    if report.has_images() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}

/// Run the extraction pipeline: inventory, extract, analyze, aggregate.
fn run(args: &Args) -> Result<DeckReport> {
    if args.verbose {
        eprintln!("Processing: {}", args.input.display());
    }

    let mut archive = DeckArchive::open(&args.input)
        .with_context(|| format!("Failed to open archive {}", args.input.display()))?;

    let inventory = archive
        .inventory()
        .context("Failed to enumerate archive entries")?;

    let images = deckscan_pptx::extract_images(&mut archive, &inventory.media, &args.output)
        .with_context(|| {
            format!(
                "Failed to extract images into {}",
                args.output.display()
            )
        })?;

    if args.verbose {
        eprintln!(
            "  Extracted {} images from {} media entries",
            images.len(),
            inventory.media.len()
        );
    }

    let slides = deckscan_pptx::analyze_slides(&mut archive, &inventory.slides);

    if args.verbose {
        eprintln!("  Analyzed {} slides", slides.len());
    }

    Ok(DeckReport::build(&inventory, images, slides))
}
