//! Selector facade over both optimizers.
//!
//! [`Selector`] answers `optimize(items, budget)` with whichever algorithm it
//! was built for, so callers can request either answer for the same input.
//! [`compare`] runs both and reports solutions side by side.

use knapforge_config::{Algorithm, SelectionConfig};
use knapforge_core::{ItemSequence, KnapForgeError, Result, Solution, MAX_SUBSET_ITEMS};

use crate::exhaustive::ExhaustiveOptimizer;
use crate::greedy::GreedyOptimizer;
use crate::optimizer::{Optimizer, SolveResult};

/// Dispatches to the optimizer for one [`Algorithm`].
///
/// # Example
///
/// ```
/// use knapforge_config::Algorithm;
/// use knapforge_core::{Item, ItemSequence};
/// use knapforge_solver::Selector;
///
/// let items: ItemSequence = vec![Item::new("ring", 2.0, 5.0)].into();
///
/// let selector = Selector::new(Algorithm::Exhaustive);
/// let solution = selector.try_optimize(&items, 3.0).unwrap();
/// assert_eq!(solution.total_value(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    algorithm: Algorithm,
}

impl Selector {
    /// Creates a selector for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Creates an exhaustive selector.
    pub fn exhaustive() -> Self {
        Self::new(Algorithm::Exhaustive)
    }

    /// Creates a greedy selector.
    pub fn greedy() -> Self {
        Self::new(Algorithm::Greedy)
    }

    /// Creates a selector for the configured algorithm.
    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.algorithm)
    }

    /// Checks the preconditions of the selected algorithm.
    ///
    /// Only exhaustive search has one: fewer than 64 items.
    pub fn validate(&self, items: &ItemSequence) -> Result<()> {
        if self.algorithm == Algorithm::Exhaustive && items.len() > MAX_SUBSET_ITEMS {
            return Err(KnapForgeError::TooManyItems {
                count: items.len(),
                max: MAX_SUBSET_ITEMS,
            });
        }
        Ok(())
    }

    /// Like [`Optimizer::solve`], but reports a violated precondition as an
    /// error instead of panicking.
    pub fn try_solve(&self, items: &ItemSequence, budget: f64) -> Result<SolveResult> {
        self.validate(items)?;
        Ok(self.solve(items, budget))
    }

    /// Like [`Optimizer::optimize`], but reports a violated precondition as an
    /// error instead of panicking.
    pub fn try_optimize(&self, items: &ItemSequence, budget: f64) -> Result<Solution> {
        self.try_solve(items, budget).map(|result| result.solution)
    }
}

impl From<Algorithm> for Selector {
    fn from(algorithm: Algorithm) -> Self {
        Self::new(algorithm)
    }
}

impl Optimizer for Selector {
    fn solve(&self, items: &ItemSequence, budget: f64) -> SolveResult {
        match self.algorithm {
            Algorithm::Exhaustive => ExhaustiveOptimizer::new().solve(items, budget),
            Algorithm::Greedy => GreedyOptimizer::new().solve(items, budget),
        }
    }

    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

/// Both optimizers' answers for the same input.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Budget both runs used.
    pub budget: f64,
    /// Exhaustive search result.
    pub exhaustive: SolveResult,
    /// Greedy heuristic result.
    pub greedy: SolveResult,
}

impl Comparison {
    /// Value the greedy heuristic leaves on the table (never negative).
    pub fn value_gap(&self) -> f64 {
        self.exhaustive.solution.total_value() - self.greedy.solution.total_value()
    }

    /// Greedy value as a fraction of the optimum; 1.0 when the optimum is 0.
    pub fn greedy_quality(&self) -> f64 {
        let optimum = self.exhaustive.solution.total_value();
        if optimum > 0.0 {
            self.greedy.solution.total_value() / optimum
        } else {
            1.0
        }
    }

    /// Returns the result for `algorithm`.
    pub fn result(&self, algorithm: Algorithm) -> &SolveResult {
        match algorithm {
            Algorithm::Exhaustive => &self.exhaustive,
            Algorithm::Greedy => &self.greedy,
        }
    }
}

/// Runs both optimizers on `items`.
///
/// # Errors
///
/// Returns [`KnapForgeError::TooManyItems`] if `items` is too long for
/// exhaustive search.
pub fn compare(items: &ItemSequence, budget: f64) -> Result<Comparison> {
    let exhaustive = Selector::exhaustive().try_solve(items, budget)?;
    let greedy = Selector::greedy().solve(items, budget);
    Ok(Comparison {
        budget,
        exhaustive,
        greedy,
    })
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
