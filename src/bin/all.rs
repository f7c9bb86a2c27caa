//! Command-line driver for the dispatch suites.
//!
//! Usage:
//!   dispatch-bench                  # One timed pass per variant, all suites
//!   dispatch-bench visitor          # Only the visitor suite
//!   dispatch-bench --stats --runs 50
//!   dispatch-bench --list           # List suites and variants
//!   dispatch-bench --verify         # Check all variants agree, then exit

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dispatch_bench::config::{Mode, RunConfig};
use dispatch_bench::dispatch;
use dispatch_bench::error::{BenchError, ConfigError};
use dispatch_bench::registry::{build_registry, SuiteRegistry, SuiteRunner};
use dispatch_bench::utils::runner::{self, RawTimingData};
use dispatch_bench::utils::timer::PinStrategy;
use dispatch_bench::workload::Workload;
use dispatch_bench::tui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PinArg {
    Global,
    PerExecution,
}

impl From<PinArg> for PinStrategy {
    fn from(arg: PinArg) -> Self {
        match arg {
            PinArg::Global => PinStrategy::Global,
            PinArg::PerExecution => PinStrategy::PerExecution,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dispatch-bench")]
#[command(about = "Compare dispatch strategies for translating heterogeneous shapes")]
#[command(version)]
struct Cli {
    /// Run only this suite (omit for all)
    suite: Option<String>,

    /// List suites and variants, then exit
    #[arg(short, long)]
    list: bool,

    /// Verify that all variants agree on built-in seeds, plus the workload
    /// given by --seed/--shapes/--steps if any, then exit
    #[arg(long)]
    verify: bool,

    /// Statistical mode: warmup, shuffled repeated samples, CPU pinning
    #[arg(long)]
    stats: bool,

    /// Shapes per collection
    #[arg(long, default_value_t = dispatch_bench::config::SHAPE_COUNT)]
    shapes: usize,

    /// Translation steps (default: 2500000, or 10000 with --stats)
    #[arg(long)]
    steps: Option<usize>,

    /// Seed for shapes and offsets (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Samples per variant in statistical mode
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Warmup passes per variant in statistical mode
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// CPU pinning strategy in statistical mode
    #[arg(long, value_enum, default_value_t = PinArg::PerExecution)]
    pin: PinArg,

    /// Export results to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Verbose logging on stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            mode: if self.stats {
                Mode::Statistical
            } else {
                Mode::SinglePass
            },
            shape_count: self.shapes,
            steps: self.steps,
            seed: self.seed,
            runs_per_variant: self.runs,
            warmup_iterations: self.warmup,
            pin_strategy: self.pin.into(),
            suite: self.suite.clone(),
            csv_path: self.csv.clone(),
        }
    }
}

/// Initialize tracing subscriber with environment filter, logging to stderr.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn select_suites<'r>(
    registry: &'r SuiteRegistry,
    filter: Option<&str>,
) -> Result<Vec<&'r dyn SuiteRunner>, ConfigError> {
    match filter {
        Some(name) => registry
            .find(name)
            .map(|suite| vec![suite])
            .ok_or_else(|| ConfigError::UnknownSuite {
                name: name.to_string(),
                available: registry.list_names().join(", "),
            }),
        None => Ok(registry.all().iter().map(|s| s.as_ref()).collect()),
    }
}

fn verify(suites: &[&dyn SuiteRunner], workload: Option<&Workload>) -> Result<(), BenchError> {
    for suite in suites {
        suite.verify()?;
        if let Some(workload) = workload {
            dispatch::verify_variants(suite.name(), &suite.variants(), workload)?;
            info!(suite = suite.name(), seed = workload.seed, "requested workload agrees");
        }
        info!(suite = suite.name(), "all variants agree");
        println!("  Suite '{}' passed verification", suite.name());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), BenchError> {
    let registry = build_registry();

    if cli.list {
        tui::print_available_suites(&registry);
        return Ok(());
    }

    let config = cli.run_config();
    config.validate()?;
    let suites = select_suites(&registry, config.suite.as_deref())?;

    let workload = config.workload();

    if cli.verify {
        let requested = cli.seed.is_some()
            || cli.steps.is_some()
            || cli.shapes != dispatch_bench::config::SHAPE_COUNT;
        return verify(&suites, requested.then_some(&workload));
    }

    info!(seed = workload.seed, shapes = workload.shape_count, steps = workload.steps, "workload");

    let mut raw = Vec::new();
    match config.mode {
        Mode::SinglePass => {
            for suite in runner::run_single_pass(&suites, &workload) {
                tui::print_pass_results(suite.suite, &suite.results, &workload);
                raw.extend(
                    suite
                        .results
                        .iter()
                        .map(|r| RawTimingData::from_pass(suite.suite, &workload, r)),
                );
            }
        }
        Mode::Statistical => {
            tui::print_header();
            let timing = config.timing(&workload);
            let grouped = runner::run_statistical(&suites, &workload, &timing);
            for (suite, results) in suites.iter().zip(&grouped) {
                tui::print_suite_info_box(*suite);
                tui::print_results_table(&results.results, &workload, timing.runs_per_variant);
                raw.extend(
                    results
                        .results
                        .iter()
                        .map(|r| RawTimingData::from_stats(results.suite, &workload, r)),
                );
            }
            println!("Note: Speedup is relative to the first variant of each suite.");
        }
    }

    if let Some(path) = &config.csv_path {
        runner::export_csv(path, &raw)?;
        println!("  Raw data exported to: {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
