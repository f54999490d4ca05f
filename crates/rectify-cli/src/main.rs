//! rectify command-line interface.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rectify_core::{format_value, CurveCache};
use rectify_devices::{DeviceRecord, DeviceStore};
use rectify_solver::{
    linspace, sweep_device, sweep_device_parallel, ParallelSweepConfig, SweepParams,
};
use rectify_validate::{compare_curves, ApproxKind, CurveFile};

#[derive(Parser)]
#[command(name = "rectify")]
#[command(about = "Diode I-V reference curves and approximation validation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a reference I-V curve for a device
    Sweep {
        /// Device parameter file (JSON record)
        #[arg(value_name = "PARAMS")]
        params: PathBuf,

        /// Sweep start voltage (SI suffixes accepted)
        #[arg(long, default_value = "-5.0", value_parser = parse_si, allow_hyphen_values = true)]
        min: f64,

        /// Sweep stop voltage
        #[arg(long, default_value = "1.2", value_parser = parse_si, allow_hyphen_values = true)]
        max: f64,

        /// Nominal number of grid points
        #[arg(long, default_value_t = 2000)]
        points: usize,

        /// Write the curve to a JSON file
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Solve grid points in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Validate an approximated curve against a reference curve
    Compare {
        /// Reference curve file (from `rectify sweep --out`)
        #[arg(value_name = "REFERENCE")]
        reference: PathBuf,

        /// Approximation curve file
        #[arg(value_name = "APPROX")]
        approx: PathBuf,

        /// Approximation kind: ia or hls
        #[arg(short, long)]
        kind: String,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the junction capacitance model
    Cap {
        /// Device parameter file (JSON record)
        #[arg(value_name = "PARAMS")]
        params: PathBuf,

        /// Bias voltage; omit for a table over the bias range
        #[arg(short, long, value_parser = parse_si, allow_hyphen_values = true)]
        bias: Option<f64>,
    },

    /// List device records in a directory
    List {
        /// Directory holding *_params.json records
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

/// clap value parser accepting SPICE-style SI suffixes (e.g. "-650m").
fn parse_si(s: &str) -> std::result::Result<f64, String> {
    rectify_core::parse_value(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Sweep {
            params,
            min,
            max,
            points,
            out,
            parallel,
        } => run_sweep(params, *min, *max, *points, out.as_deref(), *parallel, &cli),
        Command::Compare {
            reference,
            approx,
            kind,
            json,
        } => run_compare(reference, approx, kind, *json),
        Command::Cap { params, bias } => run_cap(params, *bias),
        Command::List { dir } => run_list(dir),
    }
}

fn load_record(path: &Path) -> Result<DeviceRecord> {
    DeviceRecord::load(path)
        .with_context(|| format!("Failed to load device record: {}", path.display()))
}

fn run_sweep(
    params_path: &Path,
    min: f64,
    max: f64,
    points: usize,
    out: Option<&Path>,
    parallel: bool,
    cli: &Cli,
) -> Result<()> {
    let record = load_record(params_path)?;
    let name = record.name.clone();

    if cli.verbose {
        println!("Device: {} ({})", name, record.kind);
        if !record.description.is_empty() {
            println!("Description: {}", record.description);
        }
        println!();
    }

    let mut store = DeviceStore::new();
    store.insert(record);
    let cache = CurveCache::new();

    let sweep_params = SweepParams::default()
        .with_range(min, max)
        .with_points(points);

    let curve = if parallel {
        let config = ParallelSweepConfig::default();
        sweep_device_parallel(&store, &cache, &name, &sweep_params, &config)
    } else {
        sweep_device(&store, &cache, &name, &sweep_params)
    }
    .map_err(|e| anyhow::anyhow!("Sweep error: {}", e))?;

    println!("I-V Sweep: {}", name);
    println!("==========================================");
    println!();
    println!("  Points:  {}", curve.len());
    println!("  V range: [{}, {}] V", min, max);
    println!(
        "  I range: [{}A, {}A]",
        format_value(curve.current_min().unwrap_or(0.0)),
        format_value(curve.current_max().unwrap_or(0.0)),
    );

    // The classic datasheet operating point
    if min <= 0.7 && 0.7 <= max {
        let i_07 = rectify_validate::interp_linear(0.7, curve.voltage(), curve.current());
        println!("  I(0.7 V) = {}A", format_value(i_07));
    }
    println!();

    if let Some(out) = out {
        let file = CurveFile::from_curve(&name, &curve);
        file.save(out)
            .with_context(|| format!("Failed to write curve: {}", out.display()))?;
        println!("Curve written to {}", out.display());
        println!();
    }

    println!("Sweep complete.");
    Ok(())
}

fn run_compare(reference_path: &Path, approx_path: &Path, kind: &str, json: bool) -> Result<()> {
    let kind: ApproxKind = kind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid kind: {}", e))?;

    let reference_file = CurveFile::load(reference_path)
        .with_context(|| format!("Failed to load reference: {}", reference_path.display()))?;
    let approx_file = CurveFile::load(approx_path)
        .with_context(|| format!("Failed to load approximation: {}", approx_path.display()))?;

    let device = reference_file.device.clone();
    let reference = reference_file
        .into_curve()
        .map_err(|e| anyhow::anyhow!("Bad reference curve: {}", e))?;
    let approx = approx_file
        .into_curve()
        .map_err(|e| anyhow::anyhow!("Bad approximation curve: {}", e))?;

    if !approx.is_ascending() {
        anyhow::bail!("approximation grid must be sorted ascending by voltage");
    }

    let report = compare_curves(&device, &reference, &approx, kind)
        .map_err(|e| anyhow::anyhow!("Comparison error: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_cap(params_path: &Path, bias: Option<f64>) -> Result<()> {
    let record = load_record(params_path)?;
    let params = record
        .diode_params()
        .map_err(|e| anyhow::anyhow!("Bad device record: {}", e))?;

    match bias {
        Some(v) => {
            println!(
                "C({} V) = {}F",
                v,
                format_value(params.junction_capacitance(v))
            );
        }
        None => {
            println!("Junction Capacitance: {}", record.name);
            println!("==========================================");
            println!();
            println!("{:>12}{:>14}", "V (V)", "C (F)");
            println!("{}", "-".repeat(26));
            for v in linspace(-5.0, params.vj, 21) {
                println!(
                    "{:>12.3}{:>14}",
                    v,
                    format_value(params.junction_capacitance(v))
                );
            }
            println!();
        }
    }
    Ok(())
}

fn run_list(dir: &Path) -> Result<()> {
    let mut store = DeviceStore::new();
    let loaded = store
        .load_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    println!("Device Records: {}", dir.display());
    println!("==========================================");
    println!();

    if loaded == 0 {
        println!("No *_params.json records found.");
        return Ok(());
    }

    println!("{:<16}{:<10}{}", "Name", "Kind", "Description");
    println!("{}", "-".repeat(42));
    for name in store.names() {
        if let Some(record) = store.get(name) {
            println!(
                "{:<16}{:<10}{}",
                record.name, record.kind, record.description
            );
        }
    }
    println!();
    println!("{} record(s).", loaded);
    Ok(())
}
