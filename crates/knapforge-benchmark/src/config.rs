//! Benchmark configuration.

use knapforge_config::{BenchmarkSettings, SelectionConfig};
use knapforge_core::FilterCriteria;

/// Budget used when neither the builder nor the selection config sets one.
pub(crate) const DEFAULT_BUDGET: f64 = 2500.0;

/// Configuration for a benchmark run.
///
/// Controls the size sweep, warmup iterations, measurement runs, and
/// optional output paths.
///
/// # Example
///
/// ```
/// use knapforge_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("Armory")
///     .with_warmup_count(3)
///     .with_run_count(10);
///
/// assert_eq!(config.name(), "Armory");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    budget: f64,
    filter: FilterCriteria,
    max_size: usize,
    greedy_size_multiplier: usize,
    warmup_count: usize,
    run_count: usize,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - budget: 2500
    /// - max_size: 20
    /// - greedy_size_multiplier: 200
    /// - warmup_count: 0
    /// - run_count: 10
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.budget(), 2500.0);
    /// assert_eq!(config.max_size(), 20);
    /// assert_eq!(config.run_count(), 10);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        let settings = BenchmarkSettings::default();
        Self {
            name: name.into(),
            budget: DEFAULT_BUDGET,
            filter: FilterCriteria::default(),
            max_size: settings.max_size,
            greedy_size_multiplier: settings.greedy_size_multiplier,
            warmup_count: settings.warmup_count,
            run_count: settings.run_count,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Creates a benchmark configuration from a selection config.
    ///
    /// Takes the budget, value bounds of the filter and the `[benchmark]`
    /// settings; the filter's `max_items` is replaced per measured size.
    pub fn from_selection_config(name: impl Into<String>, config: &SelectionConfig) -> Self {
        let mut benchmark = Self::new(name).with_settings(&config.benchmark);
        if let Some(budget) = config.budget {
            benchmark.budget = budget;
        }
        if let Some(filter) = config.filter {
            benchmark.filter = filter;
        }
        benchmark
    }

    /// Applies sweep and repetition settings.
    pub fn with_settings(mut self, settings: &BenchmarkSettings) -> Self {
        self.max_size = settings.max_size;
        self.greedy_size_multiplier = settings.greedy_size_multiplier;
        self.warmup_count = settings.warmup_count;
        self.run_count = settings.run_count;
        self
    }

    /// Sets the budget passed to every solve.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the value bounds applied before sizing inputs.
    pub fn with_filter(mut self, filter: FilterCriteria) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the largest exhaustive input size.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_max_size(12);
    /// assert_eq!(config.max_size(), 12);
    /// assert_eq!(config.sizes().count(), 12);
    /// ```
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets how many times more items the greedy optimizer gets per size.
    pub fn with_greedy_size_multiplier(mut self, multiplier: usize) -> Self {
        self.greedy_size_multiplier = multiplier;
        self
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_run_count(3);
    /// assert_eq!(config.run_count(), 3);
    /// ```
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use knapforge_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the budget.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Returns the value bounds.
    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Returns the largest exhaustive input size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the greedy size multiplier.
    pub fn greedy_size_multiplier(&self) -> usize {
        self.greedy_size_multiplier
    }

    /// Returns the number of warmup iterations.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the number of measurement runs.
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }

    /// Measured sizes, `1..=max_size`.
    pub fn sizes(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.max_size
    }

    /// Filter for an input of at most `max_items` items.
    pub(crate) fn filter_for(&self, max_items: usize) -> FilterCriteria {
        FilterCriteria {
            max_items,
            ..self.filter
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapforge_config::Algorithm;

    #[test]
    fn test_from_selection_config() {
        let selection = SelectionConfig::from_toml_str(
            r#"
            budget = 40.0
            algorithm = "exhaustive"

            [filter]
            min_value = 1.0
            max_value = 90.0
            max_items = 5

            [benchmark]
            max_size = 6
            run_count = 2
            warmup_count = 1
            greedy_size_multiplier = 10
            "#,
        )
        .unwrap();
        assert_eq!(selection.algorithm, Algorithm::Exhaustive);

        let config = BenchmarkConfig::from_selection_config("From config", &selection);
        assert_eq!(config.budget(), 40.0);
        assert_eq!(config.filter().max_value, 90.0);
        assert_eq!(config.max_size(), 6);
        assert_eq!(config.run_count(), 2);
        assert_eq!(config.warmup_count(), 1);
        assert_eq!(config.greedy_size_multiplier(), 10);
    }

    #[test]
    fn test_from_empty_selection_config_keeps_defaults() {
        let config = BenchmarkConfig::from_selection_config("Defaults", &SelectionConfig::new());
        assert_eq!(config.budget(), DEFAULT_BUDGET);
        assert_eq!(config.filter(), &FilterCriteria::default());
        assert_eq!(config.greedy_size_multiplier(), 200);
    }

    #[test]
    fn test_filter_for_keeps_value_bounds() {
        let config =
            BenchmarkConfig::new("Test").with_filter(FilterCriteria::new(1.0, 2500.0, 99));
        let filter = config.filter_for(7);
        assert_eq!(filter, FilterCriteria::new(1.0, 2500.0, 7));
    }
}
