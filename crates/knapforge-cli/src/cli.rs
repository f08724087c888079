// Command line definition (clap derive)

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use knapforge::{Algorithm, FilterCriteria, KnapForgeError, Result, SelectionConfig};
use tracing::level_filters::LevelFilter;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "knapforge.toml";

#[derive(Parser, Debug)]
#[command(name = "knapforge", about = "Budgeted subset selection", version)]
pub struct Cli {
    /// Config file path (TOML, or YAML for .yaml/.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log search progress (-v for improvements, -vv for every greedy pick)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select items with one algorithm and print the selection
    Solve {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Algorithm: greedy or exhaustive
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
    },
    /// Run both algorithms on the same input and compare them
    Compare {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Time both algorithms over growing input sizes
    Bench {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Largest exhaustive input size
        #[arg(long)]
        max_size: Option<usize>,

        /// Measured runs per size and algorithm
        #[arg(long)]
        runs: Option<usize>,

        /// Write every run as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write a Markdown report
        #[arg(long)]
        markdown: Option<PathBuf>,
    },
}

/// Input options shared by every subcommand. Each one overrides the config
/// file.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Item database (`^`-delimited, header line first)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Maximum total cost
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Smallest item value kept
    #[arg(long)]
    pub min_value: Option<f64>,

    /// Largest item value kept
    #[arg(long)]
    pub max_value: Option<f64>,

    /// Keep only the first N eligible items
    #[arg(long)]
    pub max_items: Option<usize>,
}

impl SelectionArgs {
    /// Overrides `config` with every option given on the command line.
    pub fn apply(&self, mut config: SelectionConfig) -> SelectionConfig {
        if let Some(data) = &self.data {
            config = config.with_data_path(data);
        }
        if let Some(budget) = self.budget {
            config = config.with_budget(budget);
        }
        if self.min_value.is_some() || self.max_value.is_some() || self.max_items.is_some() {
            let mut filter = config.filter.unwrap_or_default();
            if let Some(min_value) = self.min_value {
                filter.min_value = min_value;
            }
            if let Some(max_value) = self.max_value {
                filter.max_value = max_value;
            }
            if let Some(max_items) = self.max_items {
                filter.max_items = max_items;
            }
            config = config.with_filter(filter);
        }
        config
    }
}

impl Cli {
    /// Level for optimizer events.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Reads `--config`, or [`DEFAULT_CONFIG_FILE`] when present.
    pub fn base_config(&self) -> Result<SelectionConfig> {
        match &self.config {
            Some(path) => read_config(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => read_config(DEFAULT_CONFIG_FILE),
            None => Ok(SelectionConfig::default()),
        }
    }
}

fn read_config(path: impl AsRef<Path>) -> Result<SelectionConfig> {
    let path = path.as_ref();
    SelectionConfig::from_file(path)
        .map_err(|err| KnapForgeError::Config(format!("{}: {}", path.display(), err)))
}

/// Resolves the final config for a subcommand.
pub fn resolve(
    base: SelectionConfig,
    selection: &SelectionArgs,
    algorithm: Option<Algorithm>,
) -> SelectionConfig {
    let config = selection.apply(base);
    match algorithm {
        Some(algorithm) => config.with_algorithm(algorithm),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_solve() {
        let cli = parse(&[
            "knapforge", "solve", "--data", "armor.txt", "--budget", "2500", "--algorithm",
            "exhaustive", "--max-items", "20",
        ]);
        match cli.command {
            Commands::Solve {
                selection,
                algorithm,
            } => {
                assert_eq!(selection.data, Some(PathBuf::from("armor.txt")));
                assert_eq!(selection.budget, Some(2500.0));
                assert_eq!(selection.max_items, Some(20));
                assert_eq!(algorithm, Some(Algorithm::Exhaustive));
            }
            other => panic!("expected solve, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = Cli::try_parse_from(["knapforge", "solve", "--algorithm", "random"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_parse_bench_outputs() {
        let cli = parse(&[
            "knapforge", "bench", "-d", "armor.txt", "--csv", "runs.csv", "--markdown",
            "report.md", "--runs", "3", "-vv",
        ]);
        assert_eq!(cli.log_level(), LevelFilter::TRACE);
        match cli.command {
            Commands::Bench {
                csv,
                markdown,
                runs,
                max_size,
                ..
            } => {
                assert_eq!(csv, Some(PathBuf::from("runs.csv")));
                assert_eq!(markdown, Some(PathBuf::from("report.md")));
                assert_eq!(runs, Some(3));
                assert_eq!(max_size, None);
            }
            other => panic!("expected bench, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let base = SelectionConfig::from_toml_str(
            r#"
            budget = 100.0
            algorithm = "greedy"
            data_path = "from-config.txt"

            [filter]
            min_value = 1.0
            max_value = 2500.0
            max_items = 40
            "#,
        )
        .unwrap();
        let selection = SelectionArgs {
            budget: Some(50.0),
            max_items: Some(20),
            ..Default::default()
        };

        let config = resolve(base, &selection, Some(Algorithm::Exhaustive));
        assert_eq!(config.budget, Some(50.0));
        assert_eq!(config.algorithm, Algorithm::Exhaustive);
        assert_eq!(config.data_path, Some(PathBuf::from("from-config.txt")));
        assert_eq!(config.filter, Some(FilterCriteria::new(1.0, 2500.0, 20)));
    }

    #[test]
    fn test_no_filter_flags_keep_config_filter_absent() {
        let config = resolve(SelectionConfig::new(), &SelectionArgs::default(), None);
        assert_eq!(config.filter, None);
        assert_eq!(config.algorithm, Algorithm::Greedy);
    }

    #[test]
    fn test_base_config_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "budget: 75.5\nalgorithm: exhaustive").unwrap();

        let cli = parse(&[
            "knapforge",
            "compare",
            "--config",
            file.path().to_str().unwrap(),
        ]);
        let config = cli.base_config().unwrap();
        assert_eq!(config.budget, Some(75.5));
        assert_eq!(config.algorithm, Algorithm::Exhaustive);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = parse(&["knapforge", "compare", "--config", "/nonexistent/knapforge.toml"]);
        assert!(matches!(cli.base_config(), Err(KnapForgeError::Config(_))));
    }
}
