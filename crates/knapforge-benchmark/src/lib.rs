//! Timing harness for KnapForge optimizers.
//!
//! Measures how solve time grows with input size: for each size `k` up to a
//! limit, the exhaustive optimizer runs on the first `k` eligible items and
//! the greedy optimizer on `k` times a multiplier, since it scales far
//! better.
//!
//! # Overview
//!
//! - Execute warmup runs before measurement
//! - Collect per-run timing, totals and candidate counts
//! - Aggregate average/min/max times per algorithm and size
//! - Export results to CSV and Markdown
//!
//! # Example
//!
//! ```
//! use knapforge_benchmark::{Benchmark, BenchmarkConfig, MarkdownReport};
//! use knapforge_core::{Item, ItemSequence};
//!
//! let items: ItemSequence = (1..=10)
//!     .map(|i| Item::new(format!("item {}", i), i as f64, 2.0 * i as f64))
//!     .collect();
//!
//! let config = BenchmarkConfig::new("Small")
//!     .with_budget(15.0)
//!     .with_max_size(4)
//!     .with_greedy_size_multiplier(2)
//!     .with_run_count(2);
//!
//! let result = Benchmark::new(config, items).run().unwrap();
//! assert_eq!(result.run_count(), 4 * 2 * 2);
//! assert!(MarkdownReport::to_string(&result).contains("## Summary"));
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, BenchmarkRun, SizeSummary};
pub use runner::Benchmark;
