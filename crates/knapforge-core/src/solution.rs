//! Selection results.

use std::fmt;

use crate::item::ItemSequence;

/// The items chosen by an optimizer with their aggregate cost and value.
///
/// Totals are always derived from the selected items, so
/// `total_cost == Σ cost` and `total_value == Σ value` hold by construction.
///
/// # Example
///
/// ```
/// use knapforge_core::{Item, ItemSequence, Solution};
///
/// let selected: ItemSequence = vec![
///     Item::new("helmet", 10.0, 60.0),
///     Item::new("shield", 20.0, 100.0),
/// ]
/// .into();
/// let solution = Solution::new(selected);
///
/// assert_eq!(solution.total_cost(), 30.0);
/// assert_eq!(solution.total_value(), 160.0);
/// assert!(solution.is_feasible(50.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    items: ItemSequence,
    total_cost: f64,
    total_value: f64,
}

impl Solution {
    /// Creates a solution from the selected items.
    pub fn new(items: ItemSequence) -> Self {
        let total_cost = items.total_cost();
        let total_value = items.total_value();
        Self {
            items,
            total_cost,
            total_value,
        }
    }

    /// The empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selected items in selection order.
    pub fn items(&self) -> &ItemSequence {
        &self.items
    }

    /// Consumes the solution, returning the selected items.
    pub fn into_items(self) -> ItemSequence {
        self.items
    }

    /// Sum of selected costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Sum of selected values.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the selection fits within `budget`.
    pub fn is_feasible(&self, budget: f64) -> bool {
        self.total_cost <= budget
    }

    /// Returns true if an item with this description was selected.
    pub fn contains(&self, description: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.description() == description)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items, total cost {}, total value {}",
            self.items.len(),
            self.total_cost,
            self.total_value
        )
    }
}
