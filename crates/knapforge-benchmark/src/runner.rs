//! Benchmark runner.

use std::time::Duration;

use knapforge_config::Algorithm;
use knapforge_core::{ItemSequence, Result};
use knapforge_solver::Selector;
use tracing::info;

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Size-sweep benchmark over one item database.
///
/// For size step `k`, the exhaustive optimizer gets the first `k` items
/// passing the configured value bounds and the greedy optimizer gets the
/// first `k * greedy_size_multiplier`.
pub struct Benchmark {
    config: BenchmarkConfig,
    items: ItemSequence,
}

impl Benchmark {
    /// Creates a new benchmark over `items`.
    pub fn new(config: BenchmarkConfig, items: ItemSequence) -> Self {
        Self { config, items }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the sweep and returns every measured run.
    ///
    /// Executes warmup runs first (not measured), then measurement runs,
    /// for each size step and algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`knapforge_core::KnapForgeError::TooManyItems`] if a size
    /// step hands the exhaustive optimizer 64 or more items.
    pub fn run(&self) -> Result<BenchmarkResult> {
        let mut result = BenchmarkResult::new(self.config.name(), self.config.budget());

        for size in self.config.sizes() {
            for algorithm in Algorithm::ALL {
                self.measure(algorithm, size, &mut result)?;
            }
        }

        Ok(result)
    }

    /// Number of items requested from the database for one size step.
    fn input_size(&self, algorithm: Algorithm, size: usize) -> usize {
        match algorithm {
            Algorithm::Exhaustive => size,
            Algorithm::Greedy => size.saturating_mul(self.config.greedy_size_multiplier()),
        }
    }

    fn measure(
        &self,
        algorithm: Algorithm,
        size: usize,
        result: &mut BenchmarkResult,
    ) -> Result<()> {
        let filter = self.config.filter_for(self.input_size(algorithm, size));
        let input = self.items.filter(&filter);
        let selector = Selector::new(algorithm);
        let budget = self.config.budget();

        selector.validate(&input)?;

        for _ in 0..self.config.warmup_count() {
            selector.try_solve(&input, budget)?;
        }

        let mut total_time = Duration::ZERO;
        for run_index in 0..self.config.run_count() {
            let solved = selector.try_solve(&input, budget)?;
            let run =
                BenchmarkRun::from_solve_result(algorithm, size, input.len(), run_index, &solved);
            total_time += run.solve_time;
            result.add_run(run);
        }

        let runs = self.config.run_count().max(1) as f64;
        info!(
            event = "benchmark_run",
            algorithm = algorithm.name(),
            size = input.len() as u64,
            runs = self.config.run_count() as u64,
            avg_ms = total_time.as_secs_f64() * 1000.0 / runs,
        );

        Ok(())
    }
}
