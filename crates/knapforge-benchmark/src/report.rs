//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use knapforge_config::Algorithm;

use crate::result::BenchmarkResult;

fn millis(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// CSV exporter for benchmark results.
///
/// One row per measured run, with columns for algorithm, size step, input
/// size, run index, solve time and solution totals.
///
/// # Example
///
/// ```
/// use knapforge_benchmark::{BenchmarkResult, CsvExporter};
///
/// let result = BenchmarkResult::new("Test", 10.0);
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("algorithm,size,item_count,run_index,solve_time_ms"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark result to CSV string.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::{BenchmarkResult, BenchmarkRun, CsvExporter};
    /// use knapforge_config::Algorithm;
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test", 50.0);
    /// result.add_run(BenchmarkRun {
    ///     algorithm: Algorithm::Exhaustive,
    ///     size: 3,
    ///     item_count: 3,
    ///     run_index: 0,
    ///     solve_time: Duration::from_micros(1500),
    ///     total_value: 220.0,
    ///     total_cost: 50.0,
    ///     selected: 2,
    ///     candidates_evaluated: 8,
    /// });
    ///
    /// let csv = CsvExporter::to_string(&result);
    /// assert!(csv.contains("exhaustive,3,3,0,1.500000,220,50,2,8"));
    /// ```
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "algorithm,size,item_count,run_index,solve_time_ms,total_value,total_cost,selected,candidates_evaluated"
        )
        .unwrap();

        for run in &result.runs {
            writeln!(
                output,
                "{},{},{},{},{:.6},{},{},{},{}",
                run.algorithm,
                run.size,
                run.item_count,
                run.run_index,
                millis(run.solve_time),
                run.total_value,
                run.total_cost,
                run.selected,
                run.candidates_evaluated,
            )
            .unwrap();
        }

        output
    }

    /// Exports benchmark result to a CSV file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes benchmark result as CSV to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a summary table with average/min/max solve time per algorithm
/// and size step, followed by a side-by-side table of both algorithms.
///
/// # Example
///
/// ```
/// use knapforge_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::new("Armory", 2500.0);
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Armory"));
/// assert!(md.contains("*No runs completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();

        writeln!(output, "# Benchmark: {}", result.name).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "- **Budget**: {}", result.budget).unwrap();
        writeln!(output, "- **Runs**: {}", result.run_count()).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();

        let summaries = result.summaries();
        if summaries.is_empty() {
            writeln!(output, "*No runs completed.*").unwrap();
            return output;
        }

        writeln!(
            output,
            "| Algorithm | Size | Items | Runs | Avg Time (ms) | Min Time (ms) | Max Time (ms) | Value |"
        )
        .unwrap();
        writeln!(
            output,
            "|-----------|------|-------|------|---------------|---------------|---------------|-------|"
        )
        .unwrap();
        for summary in &summaries {
            writeln!(
                output,
                "| {} | {} | {} | {} | {:.3} | {:.3} | {:.3} | {} |",
                summary.algorithm,
                summary.size,
                summary.item_count,
                summary.runs,
                millis(summary.avg_solve_time),
                millis(summary.min_solve_time),
                millis(summary.max_solve_time),
                summary.total_value,
            )
            .unwrap();
        }
        writeln!(output).unwrap();

        output.push_str(&Self::comparison(result));
        output
    }

    /// Generates a table with both algorithms side by side per size step.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::{BenchmarkResult, MarkdownReport};
    ///
    /// let result = BenchmarkResult::new("Test", 1.0);
    /// let comparison = MarkdownReport::comparison(&result);
    /// assert!(comparison.contains("## Comparison"));
    /// ```
    pub fn comparison(result: &BenchmarkResult) -> String {
        let mut output = String::new();

        writeln!(output, "## Comparison").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Size | Exhaustive Items | Exhaustive Avg (ms) | Greedy Items | Greedy Avg (ms) |"
        )
        .unwrap();
        writeln!(
            output,
            "|------|------------------|---------------------|--------------|-----------------|"
        )
        .unwrap();

        for size in result.sizes() {
            let cell = |algorithm: Algorithm| -> (String, String) {
                match result.runs_for(algorithm, size).next() {
                    Some(run) => (
                        run.item_count.to_string(),
                        format!("{:.3}", millis(result.avg_solve_time(algorithm, size))),
                    ),
                    None => ("N/A".to_string(), "N/A".to_string()),
                }
            };
            let (exhaustive_items, exhaustive_avg) = cell(Algorithm::Exhaustive);
            let (greedy_items, greedy_avg) = cell(Algorithm::Greedy);

            writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                size, exhaustive_items, exhaustive_avg, greedy_items, greedy_avg
            )
            .unwrap();
        }

        output
    }

    /// Writes Markdown report to a file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::BenchmarkRun;
    use std::time::Duration;

    fn sample() -> BenchmarkResult {
        let mut result = BenchmarkResult::new("Sample", 50.0);
        for (algorithm, item_count, micros) in [
            (Algorithm::Exhaustive, 3, 40),
            (Algorithm::Greedy, 600, 900),
        ] {
            result.add_run(BenchmarkRun {
                algorithm,
                size: 3,
                item_count,
                run_index: 0,
                solve_time: Duration::from_micros(micros),
                total_value: 220.0,
                total_cost: 50.0,
                selected: 2,
                candidates_evaluated: 8,
            });
        }
        result
    }

    #[test]
    fn test_csv_rows() {
        let csv = CsvExporter::to_string(&sample());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "exhaustive,3,3,0,0.040000,220,50,2,8");
        assert!(lines[2].starts_with("greedy,3,600,0,0.900000,"));
    }

    #[test]
    fn test_markdown_sections() {
        let md = MarkdownReport::to_string(&sample());
        assert!(md.contains("- **Budget**: 50"));
        assert!(md.contains("| exhaustive | 3 | 3 | 1 | 0.040 | 0.040 | 0.040 | 220 |"));
        assert!(md.contains("| 3 | 3 | 0.040 | 600 | 0.900 |"));
    }

    #[test]
    fn test_comparison_marks_missing_algorithm() {
        let mut result = BenchmarkResult::new("Partial", 1.0);
        result.add_run(BenchmarkRun {
            algorithm: Algorithm::Greedy,
            size: 1,
            item_count: 200,
            run_index: 0,
            solve_time: Duration::from_millis(2),
            total_value: 1.0,
            total_cost: 1.0,
            selected: 1,
            candidates_evaluated: 200,
        });
        let table = MarkdownReport::comparison(&result);
        assert!(table.contains("| 1 | N/A | N/A | 200 | 2.000 |"));
    }

    #[test]
    fn test_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("runs.csv");
        let md_path = dir.path().join("report.md");

        CsvExporter::to_file(&sample(), &csv_path).unwrap();
        MarkdownReport::to_file(&sample(), &md_path).unwrap();

        assert!(fs::read_to_string(csv_path).unwrap().starts_with("algorithm,"));
        assert!(fs::read_to_string(md_path)
            .unwrap()
            .starts_with("# Benchmark: Sample"));
    }
}
