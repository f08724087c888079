//! KnapForge Solver Engine
//!
//! This crate provides the budgeted subset optimizers:
//! - `ExhaustiveOptimizer`: optimal, enumerates every subset
//! - `GreedyOptimizer`: fast ratio heuristic, feasible but not optimal
//! - `Selector`: one facade over both, plus side-by-side comparison
//!
//! Logging levels:
//! - **INFO**: Solve start/end with totals and timing
//! - **DEBUG**: Incumbent improvements during exhaustive search
//! - **TRACE**: Individual greedy picks

pub mod exhaustive;
pub mod greedy;
pub mod optimizer;
pub mod selector;
pub mod stats;

pub use exhaustive::ExhaustiveOptimizer;
pub use greedy::GreedyOptimizer;
pub use knapforge_config::Algorithm;
pub use optimizer::{Optimizer, SolveResult};
pub use selector::{compare, Comparison, Selector};
pub use stats::SolverStats;
