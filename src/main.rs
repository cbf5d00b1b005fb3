//! Fish Jaw Sim - Entry point
//!
//! Batch contraction-sweep simulation over a specimen measurement file.
//!
//! CLI Usage:
//!   cargo run -- specimens.dat                 # Sweep every specimen
//!   cargo run -- specimens.dat -o results/     # Choose the output directory
//!   cargo run -- specimens.dat -p params.json  # Custom simulation parameters

use std::path::PathBuf;

use anyhow::{bail, Result};
use fish_jaw_sim::{config::SimParameters, export::SweepExporter, io, sim};

struct CliArgs {
    specimen_file: PathBuf,
    output_dir: PathBuf,
    params_file: Option<PathBuf>,
}

/// Parse CLI arguments
fn parse_args() -> Result<CliArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut specimen_file = None;
    let mut output_dir = PathBuf::from("exports");
    let mut params_file = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_dir = PathBuf::from(&args[i]);
                }
            }
            "-p" | "--params" => {
                i += 1;
                if i < args.len() {
                    params_file = Some(PathBuf::from(&args[i]));
                }
            }
            "--help" | "-h" => {
                println!("Fish Jaw Sim");
                println!();
                println!("Usage: fish-jaw-sim SPECIMEN_FILE [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --output DIR   Output directory (default: exports)");
                println!("  -p, --params FILE  Simulation parameters JSON");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            other => {
                if specimen_file.is_none() {
                    specimen_file = Some(PathBuf::from(other));
                } else {
                    bail!("unexpected argument: {}", other);
                }
            }
        }
        i += 1;
    }

    let Some(specimen_file) = specimen_file else {
        bail!("no specimen file given (try --help)");
    };

    Ok(CliArgs {
        specimen_file,
        output_dir,
        params_file,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;

    log::info!("Fish Jaw Sim starting...");

    let params = match &args.params_file {
        Some(path) => SimParameters::load_or_default(path),
        None => SimParameters::default(),
    };
    log::info!(
        "Parameters: {:.0} kPa, {:.0} lengths/s, {} bins",
        params.force_per_area_max_kpa,
        params.velocity_per_length_max,
        params.sweep_bins
    );

    let specimens = io::load_specimens(&args.specimen_file)?;
    if specimens.is_empty() {
        bail!(
            "no usable specimens in {}",
            args.specimen_file.display()
        );
    }

    let base_name = args
        .specimen_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string());
    let mut exporter = SweepExporter::new(&args.output_dir, base_name.as_deref())?;

    for specimen in &specimens {
        log::info!("Sweeping {}", specimen.name());
        let result = sim::run_sweep(specimen, &params);
        exporter.record(&result)?;
    }

    let paths = exporter.finish()?;
    println!("Wrote {} result files:", paths.len());
    for path in &paths {
        println!("  {}", path.display());
    }

    Ok(())
}
