//! KnapForge Core - Core types for budgeted subset selection
//!
//! This crate provides the fundamental abstractions for KnapForge:
//! - Items and item sequences shared between derived views
//! - The subset encoder mapping bitmasks to selections
//! - Solutions with their aggregate cost and value
//! - Item filtering and delimited-file loading

pub mod error;
pub mod filter;
pub mod item;
pub mod loading;
pub mod solution;
pub mod subset;

pub use error::{KnapForgeError, Result};
pub use filter::FilterCriteria;
pub use item::{Item, ItemSequence};
pub use loading::{load_items, parse_items, DelimitedItemSource, ItemSource};
pub use solution::Solution;
pub use subset::{Subset, SubsetIter, MAX_SUBSET_ITEMS};
