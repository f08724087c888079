//! Exhaustive subset search.
//!
//! Enumerates every subset of the input by ascending bitmask and keeps the
//! feasible subset with the greatest total value. The result is optimal,
//! at O(2^n · n) time, so inputs must be pre-filtered to a small `n`.

use knapforge_config::Algorithm;
use knapforge_core::{ItemSequence, Solution, Subset, MAX_SUBSET_ITEMS};
use tracing::{debug, info};

use crate::optimizer::{Optimizer, SolveResult};
use crate::stats::SolverStats;

/// Optimal selection by enumerating all `2^n` subsets.
///
/// Ties on total value keep the subset seen first, i.e. the one with the
/// lower mask, so results are reproducible.
///
/// # Panics
///
/// [`Optimizer::solve`] panics if the input has 64 or more items.
///
/// # Example
///
/// ```
/// use knapforge_core::{Item, ItemSequence};
/// use knapforge_solver::{ExhaustiveOptimizer, Optimizer};
///
/// let items: ItemSequence = vec![
///     Item::new("helmet", 10.0, 60.0),
///     Item::new("shield", 20.0, 100.0),
///     Item::new("boots", 30.0, 120.0),
/// ]
/// .into();
///
/// let solution = ExhaustiveOptimizer::new().optimize(&items, 50.0);
/// assert_eq!(solution.total_value(), 220.0);
/// assert_eq!(solution.total_cost(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveOptimizer;

impl ExhaustiveOptimizer {
    /// Creates an exhaustive optimizer.
    pub fn new() -> Self {
        Self
    }

    /// Returns the best feasible subset of `items` under `budget`.
    pub fn best_subset(
        &self,
        items: &ItemSequence,
        budget: f64,
        stats: &mut SolverStats,
    ) -> Subset {
        let n = items.len();
        assert!(
            n <= MAX_SUBSET_ITEMS,
            "exhaustive search requires fewer than 64 items, got {}",
            n
        );

        let mut best = Subset::empty(n);
        if budget.is_nan() || budget < 0.0 {
            return best;
        }

        let mut best_value = 0.0;
        for subset in Subset::all(n) {
            let (cost, value) = subset.totals(items);
            let feasible = cost <= budget;
            stats.record_candidate(feasible);

            if feasible && value > best_value {
                best = subset;
                best_value = value;
                stats.record_improvement();
                debug!(
                    event = "improvement",
                    algorithm = "exhaustive",
                    mask = subset.mask(),
                    total_cost = cost,
                    total_value = value,
                );
            }
        }
        best
    }
}

impl Optimizer for ExhaustiveOptimizer {
    fn solve(&self, items: &ItemSequence, budget: f64) -> SolveResult {
        info!(
            event = "solve_start",
            algorithm = "exhaustive",
            item_count = items.len() as u64,
            budget,
        );

        let mut stats = SolverStats::default();
        stats.start();
        let best = self.best_subset(items, budget, &mut stats);
        let solution = Solution::new(best.select(items));
        stats.finish();

        info!(
            event = "solve_end",
            algorithm = "exhaustive",
            total_value = solution.total_value(),
            total_cost = solution.total_cost(),
            selected = solution.len() as u64,
            candidates = stats.candidates_evaluated,
            duration_ms = stats.duration_ms(),
        );

        SolveResult { solution, stats }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Exhaustive
    }
}
