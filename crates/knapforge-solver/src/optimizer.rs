//! The contract shared by every optimizer.

use std::fmt::Debug;

use knapforge_config::Algorithm;
use knapforge_core::{ItemSequence, Solution};

use crate::stats::SolverStats;

/// Outcome of an optimizer run: the solution and how it was found.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The selected items.
    pub solution: Solution,
    /// Counters for the run.
    pub stats: SolverStats,
}

/// A budgeted subset optimizer.
///
/// Implementations borrow the items read-only and return an independently
/// owned solution whose total cost never exceeds `budget`. They hold no
/// mutable state, so one optimizer may serve concurrent calls.
pub trait Optimizer: Send + Sync + Debug {
    /// Selects items within `budget`, returning the solution with statistics.
    fn solve(&self, items: &ItemSequence, budget: f64) -> SolveResult;

    /// Selects items within `budget`.
    fn optimize(&self, items: &ItemSequence, budget: f64) -> Solution {
        self.solve(items, budget).solution
    }

    /// Returns which algorithm this optimizer implements.
    fn algorithm(&self) -> Algorithm;
}
