//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{BenchmarkResult, SuiteRegistry, SuiteRunner};
use crate::utils::runner::PassResult;
use crate::workload::Workload;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print suite info box
pub fn print_suite_info_box(suite: &dyn SuiteRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = suite.available_variants().join(", ");
    let name_line = format!("Suite:     {}", suite.name());
    let cat_line = format!("Category:  {}", suite.category());
    let desc_line = suite.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [name_line.len(), cat_line.len(), desc_line.len(), var_line.len()]
        .iter()
        .copied()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let row = |text: &str| {
        println!(
            "│ {:<width$} │",
            truncate(text, content_width),
            width = content_width
        )
    };

    println!("┌{}┐", border);
    row(&name_line);
    row(&cat_line);
    row(desc_line);
    println!("├{}┤", border);
    row(&var_line);
    println!("└{}┘", border);
    println!();
}

/// One result line of the single-pass mode, e.g. ` enum runtime : 0.123456s`
pub fn format_pass_line(pass: &PassResult, label_width: usize) -> String {
    let label = format!("{} runtime", pass.variant_name);
    format!(
        " {:<width$}: {:.6}s",
        label,
        pass.elapsed.as_secs_f64(),
        width = label_width
    )
}

/// Print single-pass results, one line per variant
pub fn print_pass_results(suite: &str, results: &[PassResult], workload: &Workload) {
    println!(
        " {} suite ({} shapes, {} steps, seed {})",
        suite, workload.shape_count, workload.steps, workload.seed
    );
    let label_width = results
        .iter()
        .map(|r| r.variant_name.len() + " runtime".len())
        .max()
        .unwrap_or(0)
        + 1;
    for pass in results {
        println!("{}", format_pass_line(pass, label_width));
    }
    println!();
}

/// Print the statistics table for one suite
pub fn print_results_table(results: &[BenchmarkResult], workload: &Workload, runs: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // Compact columns: 14+14+14+9+9+10 = 70 chars + 6 spaces + 2 indent = 78
    let fixed_width = 78;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 70 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_nanos_f64)
        .unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!(
        "  {} shapes x {} steps ({} runs)",
        workload.shape_count, workload.steps, runs
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>14} {:>14} {:>14} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };

        let std_dev_ns = result.std_dev.as_nanos() as f64;
        let cv = if result.avg_nanos_f64 > 0.0 {
            std_dev_ns / result.avg_nanos_f64
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        println!(
            "  {:<v_width$} {:>14} {:>14} {:>14} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            crate::utils::bench::format_measurement(result.avg_time),
            crate::utils::bench::format_measurement(result.min_time),
            crate::utils::bench::format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dispatch Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available suites and their variants
pub fn print_available_suites(registry: &SuiteRegistry) {
    let mut categories: Vec<&str> = registry.all().iter().map(|s| s.category()).collect();
    categories.sort_unstable();
    categories.dedup();

    println!("Available suites:");
    for category in categories {
        println!();
        println!("  [{}]", category);
        for suite in registry.by_category(category) {
            println!("  {:<12} - {}", suite.name(), suite.description());
            for variant in suite.variants() {
                println!("      {:<16} {}", variant.name, variant.description);
            }
        }
    }
}
