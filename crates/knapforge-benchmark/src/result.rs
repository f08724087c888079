//! Benchmark result types.

use std::time::Duration;

use knapforge_config::Algorithm;
use knapforge_solver::SolveResult;

/// Result of a single measured solve.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    /// Algorithm that solved.
    pub algorithm: Algorithm,
    /// Size step of the sweep (1-based).
    pub size: usize,
    /// Items actually passed to the optimizer.
    pub item_count: usize,
    /// Run index within its size step (0-based).
    pub run_index: usize,
    /// Total solve time.
    pub solve_time: Duration,
    /// Value of the returned solution.
    pub total_value: f64,
    /// Cost of the returned solution.
    pub total_cost: f64,
    /// Items in the returned solution.
    pub selected: usize,
    /// Candidates the optimizer examined.
    pub candidates_evaluated: u64,
}

impl BenchmarkRun {
    /// Creates a benchmark run from an optimizer result.
    pub fn from_solve_result(
        algorithm: Algorithm,
        size: usize,
        item_count: usize,
        run_index: usize,
        result: &SolveResult,
    ) -> Self {
        Self {
            algorithm,
            size,
            item_count,
            run_index,
            solve_time: result.stats.duration,
            total_value: result.solution.total_value(),
            total_cost: result.solution.total_cost(),
            selected: result.solution.len(),
            candidates_evaluated: result.stats.candidates_evaluated,
        }
    }

    /// Returns candidates per second.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::BenchmarkRun;
    /// use knapforge_config::Algorithm;
    /// use std::time::Duration;
    ///
    /// let run = BenchmarkRun {
    ///     algorithm: Algorithm::Exhaustive,
    ///     size: 10,
    ///     item_count: 10,
    ///     run_index: 0,
    ///     solve_time: Duration::from_secs(2),
    ///     total_value: 0.0,
    ///     total_cost: 0.0,
    ///     selected: 0,
    ///     candidates_evaluated: 1024,
    /// };
    ///
    /// assert!((run.candidates_per_second() - 512.0).abs() < 0.001);
    /// ```
    pub fn candidates_per_second(&self) -> f64 {
        if self.solve_time.is_zero() {
            0.0
        } else {
            self.candidates_evaluated as f64 / self.solve_time.as_secs_f64()
        }
    }
}

/// Aggregate of the runs for one algorithm at one size step.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSummary {
    pub algorithm: Algorithm,
    pub size: usize,
    pub item_count: usize,
    pub runs: usize,
    pub avg_solve_time: Duration,
    pub min_solve_time: Duration,
    pub max_solve_time: Duration,
    pub total_value: f64,
}

/// Aggregated results of a size sweep.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Budget every solve used.
    pub budget: f64,
    /// Individual runs, in measurement order.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new(name: impl Into<String>, budget: f64) -> Self {
        Self {
            name: name.into(),
            budget,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    /// Returns the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Runs of `algorithm` at size step `size`.
    pub fn runs_for(
        &self,
        algorithm: Algorithm,
        size: usize,
    ) -> impl Iterator<Item = &BenchmarkRun> {
        self.runs
            .iter()
            .filter(move |r| r.algorithm == algorithm && r.size == size)
    }

    /// Distinct size steps, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.runs.iter().map(|r| r.size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Returns the average solve time of `algorithm` at `size`.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::{BenchmarkResult, BenchmarkRun};
    /// use knapforge_config::Algorithm;
    /// use std::time::Duration;
    ///
    /// let run = |run_index, millis| BenchmarkRun {
    ///     algorithm: Algorithm::Greedy,
    ///     size: 1,
    ///     item_count: 200,
    ///     run_index,
    ///     solve_time: Duration::from_millis(millis),
    ///     total_value: 10.0,
    ///     total_cost: 5.0,
    ///     selected: 2,
    ///     candidates_evaluated: 200,
    /// };
    ///
    /// let mut result = BenchmarkResult::new("Test", 5.0);
    /// result.add_run(run(0, 100));
    /// result.add_run(run(1, 200));
    ///
    /// assert_eq!(
    ///     result.avg_solve_time(Algorithm::Greedy, 1),
    ///     Duration::from_millis(150)
    /// );
    /// assert_eq!(result.avg_solve_time(Algorithm::Exhaustive, 1), Duration::ZERO);
    /// ```
    pub fn avg_solve_time(&self, algorithm: Algorithm, size: usize) -> Duration {
        let (total, count) = self
            .runs_for(algorithm, size)
            .fold((Duration::ZERO, 0u32), |(total, count), r| {
                (total + r.solve_time, count + 1)
            });
        if count == 0 {
            Duration::ZERO
        } else {
            total / count
        }
    }

    /// Returns the minimum solve time of `algorithm` at `size`.
    pub fn min_solve_time(&self, algorithm: Algorithm, size: usize) -> Duration {
        self.runs_for(algorithm, size)
            .map(|r| r.solve_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the maximum solve time of `algorithm` at `size`.
    pub fn max_solve_time(&self, algorithm: Algorithm, size: usize) -> Duration {
        self.runs_for(algorithm, size)
            .map(|r| r.solve_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Per-algorithm, per-size aggregates, ordered by size then algorithm.
    pub fn summaries(&self) -> Vec<SizeSummary> {
        let mut summaries = Vec::new();
        for size in self.sizes() {
            for algorithm in Algorithm::ALL {
                let mut runs = self.runs_for(algorithm, size).peekable();
                let Some(first) = runs.peek() else {
                    continue;
                };
                let item_count = first.item_count;
                let total_value = first.total_value;
                summaries.push(SizeSummary {
                    algorithm,
                    size,
                    item_count,
                    runs: runs.count(),
                    avg_solve_time: self.avg_solve_time(algorithm, size),
                    min_solve_time: self.min_solve_time(algorithm, size),
                    max_solve_time: self.max_solve_time(algorithm, size),
                    total_value,
                });
            }
        }
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algorithm: Algorithm, size: usize, run_index: usize, millis: u64) -> BenchmarkRun {
        BenchmarkRun {
            algorithm,
            size,
            item_count: size,
            run_index,
            solve_time: Duration::from_millis(millis),
            total_value: size as f64,
            total_cost: 1.0,
            selected: 1,
            candidates_evaluated: 1 << size,
        }
    }

    #[test]
    fn test_summaries_order_and_aggregates() {
        let mut result = BenchmarkResult::new("Test", 10.0);
        result.add_run(run(Algorithm::Greedy, 2, 0, 1));
        result.add_run(run(Algorithm::Exhaustive, 2, 0, 30));
        result.add_run(run(Algorithm::Exhaustive, 2, 1, 10));
        result.add_run(run(Algorithm::Exhaustive, 1, 0, 5));

        assert_eq!(result.sizes(), vec![1, 2]);

        let summaries = result.summaries();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].size, 1);
        assert_eq!(summaries[1].algorithm, Algorithm::Exhaustive);
        assert_eq!(summaries[1].runs, 2);
        assert_eq!(summaries[1].avg_solve_time, Duration::from_millis(20));
        assert_eq!(summaries[1].min_solve_time, Duration::from_millis(10));
        assert_eq!(summaries[1].max_solve_time, Duration::from_millis(30));
        assert_eq!(summaries[2].algorithm, Algorithm::Greedy);
    }

    #[test]
    fn test_empty_result() {
        let result = BenchmarkResult::new("Empty", 1.0);
        assert_eq!(result.run_count(), 0);
        assert!(result.summaries().is_empty());
        assert_eq!(
            result.max_solve_time(Algorithm::Greedy, 1),
            Duration::ZERO
        );
    }

    #[test]
    fn test_zero_time_rate() {
        let mut r = run(Algorithm::Greedy, 1, 0, 0);
        r.candidates_evaluated = 10;
        assert_eq!(r.candidates_per_second(), 0.0);
    }
}
