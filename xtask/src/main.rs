use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "fixed-deque workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deque benchmarks against std::VecDeque
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save and report on
        #[arg(long, default_value = "new")]
        baseline: String,
    },
}

const BENCH: &str = "deque_benchmark";
const REFERENCE: &str = "std::VecDeque";

/// The parts of Criterion's `benchmark.json` the report needs.
#[derive(Debug, Deserialize)]
struct BenchmarkId {
    group_id: String,
    function_id: Option<String>,
}

/// The parts of Criterion's `estimates.json` the report needs.
#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(&baseline)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH, "--"]);
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to launch cargo bench for {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed");
    }

    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(baseline: &str) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> function -> mean time in ns
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for dir in baseline_dirs(criterion_dir, baseline)? {
        let id: BenchmarkId = read_json(&dir.join("benchmark.json"))?;
        let estimates: Estimates = read_json(&dir.join("estimates.json"))?;
        let function = id.function_id.unwrap_or_default();
        results
            .entry(id.group_id)
            .or_default()
            .insert(function, estimates.mean.point_estimate);
    }

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Deque Benchmark Report (baseline `{baseline}`)")?;
    for (group, functions) in &results {
        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Function | Mean | vs {REFERENCE} |")?;
        writeln!(file, "|---|---|---|")?;
        for (function, &time_ns) in functions {
            let ratio = reference_time(functions, function)
                .map(|reference| format!("**{:.2}x**", reference / time_ns))
                .unwrap_or_else(|| "-".to_string());
            writeln!(file, "| {function} | {} | {ratio} |", format_ns(time_ns))?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Mean time of the `std::VecDeque` entry matching `function`'s label suffix,
/// falling back to the group's first reference entry.
fn reference_time(functions: &BTreeMap<String, f64>, function: &str) -> Option<f64> {
    if function.starts_with(REFERENCE) {
        return None;
    }
    let label = function.split_once(' ').map(|(_, rest)| rest);
    let matching = label.and_then(|label| functions.get(&format!("{REFERENCE} {label}")));
    matching
        .or_else(|| {
            functions
                .iter()
                .find(|(name, _)| name.starts_with(REFERENCE))
                .map(|(_, time)| time)
        })
        .copied()
}

fn format_ns(time_ns: f64) -> String {
    if time_ns > 1_000_000.0 {
        format!("{:.2} ms", time_ns / 1_000_000.0)
    } else if time_ns > 1_000.0 {
        format!("{:.2} µs", time_ns / 1_000.0)
    } else {
        format!("{time_ns:.0} ns")
    }
}

/// Every `.../<baseline>/` directory holding both Criterion JSON files.
fn baseline_dirs(root: &Path, baseline: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries =
            fs::read_dir(&dir).with_context(|| format!("failed to read {}", dir.display()))?;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let is_baseline = path.file_name().and_then(|s| s.to_str()) == Some(baseline);
            if is_baseline && path.join("estimates.json").exists() {
                found.push(path);
            } else if path.file_name().and_then(|s| s.to_str()) != Some("report") {
                pending.push(path);
            }
        }
    }
    Ok(found)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
