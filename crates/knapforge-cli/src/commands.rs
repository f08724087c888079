// Subcommand execution

use std::path::Path;

use knapforge::{
    load_configured_items, run_comparison, run_selection, KnapForgeError, Result,
    SelectionConfig,
};
use knapforge_benchmark::{Benchmark, BenchmarkConfig, CsvExporter, MarkdownReport};
use knapforge_console::{format_duration, print_comparison, print_solution};
use tracing::info;

use crate::cli::{resolve, Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    let base = cli.base_config()?;

    match &cli.command {
        Commands::Solve {
            selection,
            algorithm,
        } => solve(&resolve(base, selection, *algorithm)),
        Commands::Compare { selection } => compare(&resolve(base, selection, None)),
        Commands::Bench {
            selection,
            max_size,
            runs,
            csv,
            markdown,
        } => {
            let config = resolve(base, selection, None);
            let mut bench = BenchmarkConfig::from_selection_config(benchmark_name(&config), &config);
            if let Some(max_size) = max_size {
                bench = bench.with_max_size(*max_size);
            }
            if let Some(runs) = runs {
                bench = bench.with_run_count(*runs);
            }
            if let Some(path) = csv {
                bench = bench.with_csv_output(path.display().to_string());
            }
            if let Some(path) = markdown {
                bench = bench.with_markdown_output(path.display().to_string());
            }
            benchmark(&config, bench)
        }
    }
}

fn solve(config: &SelectionConfig) -> Result<()> {
    let items = load_configured_items(config)?;
    let result = run_selection(config, &items)?;

    print_solution(&format!("{} selection", config.algorithm), &result.solution);
    println!(
        "{} candidates evaluated in {}",
        result.stats.candidates_evaluated,
        format_duration(result.stats.duration)
    );
    Ok(())
}

fn compare(config: &SelectionConfig) -> Result<()> {
    let items = load_configured_items(config)?;
    let comparison = run_comparison(config, &items)?;
    print_comparison(&comparison);
    Ok(())
}

fn benchmark(config: &SelectionConfig, bench: BenchmarkConfig) -> Result<()> {
    config
        .validate()
        .map_err(|err| KnapForgeError::Config(err.to_string()))?;
    if bench.run_count() == 0 {
        return Err(KnapForgeError::Config(
            "benchmark needs at least one run".to_string(),
        ));
    }

    let items = load_configured_items(config)?;
    let benchmark = Benchmark::new(bench, items);
    let result = benchmark.run()?;

    print!("{}", MarkdownReport::to_string(&result));

    if let Some(path) = benchmark.config().csv_output_path() {
        CsvExporter::to_file(&result, path)?;
        info!(event = "report_written", kind = "csv", path);
    }
    if let Some(path) = benchmark.config().markdown_output_path() {
        MarkdownReport::to_file(&result, path)?;
        info!(event = "report_written", kind = "markdown", path);
    }
    Ok(())
}

fn benchmark_name(config: &SelectionConfig) -> String {
    config
        .data_path
        .as_deref()
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "knapforge".to_string())
}
