//! Suite execution and CSV export.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Mode;
use crate::dispatch;
use crate::registry::{BenchmarkResult, SuiteRunner};
use crate::utils::bench::unit_name;
use crate::utils::timer::{measure_variants, TimingConfig};
use crate::workload::Workload;

/// Wall-clock result of one single-pass run
#[derive(Clone, Debug)]
pub struct PassResult {
    pub variant_name: &'static str,
    pub elapsed: Duration,
    pub checksum: f64,
}

/// Results of one suite, in variant registration order
pub struct SuiteResults<R> {
    pub suite: &'static str,
    pub results: Vec<R>,
}

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub suite: String,
    pub variant_name: String,
    pub mode: Mode,
    pub shape_count: usize,
    pub steps: usize,
    /// Average per pass, in `unit`
    pub avg: u64,
    pub unit: &'static str,
    pub result_sample: Option<f64>,
}

/// Time every variant of every suite once over the same workload.
pub fn run_single_pass(
    suites: &[&dyn SuiteRunner],
    workload: &Workload,
) -> Vec<SuiteResults<PassResult>> {
    suites
        .iter()
        .map(|suite| {
            info!(suite = suite.name(), seed = workload.seed, "single pass");
            let results = suite
                .variants()
                .iter()
                .map(|variant| {
                    let (elapsed, checksum) = dispatch::time_single_pass(variant, workload);
                    debug!(variant = variant.name, ?elapsed, checksum, "pass finished");
                    PassResult {
                        variant_name: variant.name,
                        elapsed,
                        checksum,
                    }
                })
                .collect();
            SuiteResults {
                suite: suite.name(),
                results,
            }
        })
        .collect()
}

/// Measure every suite with warmup, shuffled samples and CPU pinning.
pub fn run_statistical(
    suites: &[&dyn SuiteRunner],
    workload: &Workload,
    timing: &TimingConfig,
) -> Vec<SuiteResults<BenchmarkResult>> {
    suites
        .iter()
        .map(|suite| {
            info!(
                suite = suite.name(),
                seed = workload.seed,
                runs = timing.runs_per_variant,
                "statistical run"
            );
            let closures = suite.get_variant_closures(workload);
            SuiteResults {
                suite: suite.name(),
                results: measure_variants(closures, timing),
            }
        })
        .collect()
}

impl RawTimingData {
    pub fn from_pass(suite: &str, workload: &Workload, pass: &PassResult) -> Self {
        Self {
            suite: suite.to_string(),
            variant_name: pass.variant_name.to_string(),
            mode: Mode::SinglePass,
            shape_count: workload.shape_count,
            steps: workload.steps,
            avg: pass.elapsed.as_nanos() as u64,
            unit: "ns",
            result_sample: Some(pass.checksum),
        }
    }

    pub fn from_stats(suite: &str, workload: &Workload, result: &BenchmarkResult) -> Self {
        Self {
            suite: suite.to_string(),
            variant_name: result.name.clone(),
            mode: Mode::Statistical,
            shape_count: workload.shape_count,
            steps: workload.steps,
            avg: result.avg_nanos_f64 as u64,
            unit: unit_name(),
            result_sample: result.result_sample,
        }
    }
}

/// Export timing data to CSV file
pub fn export_csv(path: &Path, data: &[RawTimingData]) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(&mut file, data)?;
    file.flush()
}

fn write_csv<W: Write>(out: &mut W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(out, "suite,variant,mode,shapes,steps,avg,unit,checksum")?;

    for entry in data {
        let mode = match entry.mode {
            Mode::SinglePass => "single-pass",
            Mode::Statistical => "statistical",
        };
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            entry.suite,
            entry.variant_name,
            mode,
            entry.shape_count,
            entry.steps,
            entry.avg,
            entry.unit,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}
