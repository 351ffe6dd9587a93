use anyhow::Context;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use workflow::config::{WorkflowConfig, DEFAULT_TRIM_RATIO};
use workflow::runner::{Runner, WorkflowResult};

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Trimmed-mean demo over random integer and float samples")]
struct Args {
    /// Load a workflow config from YAML (overrides the flags below)
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Fraction dropped from each end, in [0, 0.5)
    #[arg(long, default_value_t = DEFAULT_TRIM_RATIO)]
    trim_ratio: f64,
    #[arg(long, default_value_t = 100)]
    samples: usize,
    #[arg(long, default_value_t = 1000)]
    int_upper: i64,
    #[arg(long, default_value_t = 1000.0)]
    float_scale: f64,
    /// Seed for reproducible samples; OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Print both summaries as JSON instead of plain lines
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Append a one-line summary of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.trim_ratio,
            args.samples,
            args.int_upper,
            args.float_scale,
            args.seed,
        )?
    };

    let result = Runner::new(workflow_config).execute()?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&result).context("serializing trimmed-mean summary")?;
        println!("{}", rendered);
    } else {
        println!("Trimmed mean of integers: {:.6}", result.integers.mean);
        println!("Trimmed mean of floats: {:.6}", result.floats.mean);
    }

    if let Some(path) = args.report {
        append_report(&path, &result)?;
    }

    Ok(())
}

fn append_report(path: &Path, result: &WorkflowResult) -> anyhow::Result<()> {
    let line = format!(
        "ratio={} seed={:?} samples={} int_mean={:.6} float_mean={:.6}\n",
        result.trim_ratio,
        result.seed,
        result.integers.sample_count,
        result.integers.mean,
        result.floats.mean
    );
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
