//! Greedy ratio selection.
//!
//! Repeatedly takes the remaining item with the best value-to-cost ratio and
//! keeps it if it still fits. A picked item leaves the pool whether or not it
//! was kept, so a rejected item is never reconsidered.

use std::sync::Arc;

use knapforge_config::Algorithm;
use knapforge_core::{Item, ItemSequence, Solution};
use tracing::{info, trace};

use crate::optimizer::{Optimizer, SolveResult};
use crate::stats::SolverStats;

/// Feasible, not necessarily optimal, selection in O(n²) time.
///
/// Ratio ties go to the item that comes first in the remaining pool.
/// The solution lists items in the order they were accepted.
///
/// # Example
///
/// ```
/// use knapforge_core::{Item, ItemSequence};
/// use knapforge_solver::{GreedyOptimizer, Optimizer};
///
/// let items: ItemSequence = vec![
///     Item::new("helmet", 10.0, 60.0),
///     Item::new("shield", 20.0, 100.0),
///     Item::new("boots", 30.0, 120.0),
/// ]
/// .into();
///
/// let solution = GreedyOptimizer::new().optimize(&items, 50.0);
/// assert_eq!(solution.total_value(), 160.0);
/// assert_eq!(solution.total_cost(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyOptimizer;

impl GreedyOptimizer {
    /// Creates a greedy optimizer.
    pub fn new() -> Self {
        Self
    }
}

/// Position of the first item with the maximum ratio.
fn best_ratio_position(pool: &[&Arc<Item>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (position, item) in pool.iter().enumerate() {
        let ratio = item.ratio();
        match best {
            Some((_, best_ratio)) if ratio <= best_ratio => {}
            _ => best = Some((position, ratio)),
        }
    }
    best.map(|(position, _)| position)
}

impl Optimizer for GreedyOptimizer {
    fn solve(&self, items: &ItemSequence, budget: f64) -> SolveResult {
        info!(
            event = "solve_start",
            algorithm = "greedy",
            item_count = items.len() as u64,
            budget,
        );

        let mut stats = SolverStats::default();
        stats.start();

        let mut pool: Vec<&Arc<Item>> = items.iter().collect();
        let mut selected = ItemSequence::with_capacity(items.len());
        let mut current_cost = 0.0;
        let mut step: u64 = 0;

        while let Some(position) = best_ratio_position(&pool) {
            let item = pool.remove(position);
            let accepted = current_cost + item.cost() <= budget;
            stats.record_candidate(accepted);

            if accepted {
                current_cost += item.cost();
                selected.push_shared(Arc::clone(item));
                stats.record_improvement();
            }

            trace!(
                event = "step",
                step,
                item = item.description(),
                ratio = item.ratio(),
                accepted,
            );
            step += 1;
        }

        let solution = Solution::new(selected);
        stats.finish();

        info!(
            event = "solve_end",
            algorithm = "greedy",
            total_value = solution.total_value(),
            total_cost = solution.total_cost(),
            selected = solution.len() as u64,
            candidates = stats.candidates_evaluated,
            duration_ms = stats.duration_ms(),
        );

        SolveResult { solution, stats }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }
}
