//! KnapForge - budgeted subset selection in Rust
//!
//! Pick the items whose total value is largest while their total cost
//! stays within a budget, either exactly (exhaustive search over every
//! subset) or quickly (greedy by value-to-cost ratio).
//!
//! # Example
//!
//! ```rust
//! use knapforge::prelude::*;
//!
//! let items: ItemSequence = vec![
//!     Item::new("helmet", 10.0, 60.0),
//!     Item::new("shield", 20.0, 100.0),
//!     Item::new("boots", 30.0, 120.0),
//! ]
//! .into();
//!
//! let best = Selector::exhaustive().optimize(&items, 50.0);
//! assert_eq!(best.total_value(), 220.0);
//!
//! let fast = Selector::greedy().optimize(&items, 50.0);
//! assert_eq!(fast.total_value(), 160.0);
//! ```

// Core types
pub use knapforge_core::{
    load_items, parse_items, DelimitedItemSource, FilterCriteria, Item, ItemSequence,
    ItemSource, KnapForgeError, Result, Solution, Subset, MAX_SUBSET_ITEMS,
};

// Configuration
pub use knapforge_config::{Algorithm, BenchmarkSettings, ConfigError, SelectionConfig};

// Optimizers
pub use knapforge_solver::{
    compare, Comparison, ExhaustiveOptimizer, GreedyOptimizer, Optimizer, Selector,
    SolveResult, SolverStats,
};

mod selection;
pub use selection::{load_configured_items, prepare_items, run_comparison, run_selection};

pub mod prelude {
    pub use super::{Algorithm, FilterCriteria, Item, ItemSequence, SelectionConfig, Solution};
    pub use super::{Optimizer, Selector};
    pub use super::{KnapForgeError, Result};
}
