//! Pre-selection filtering of item sequences.
//!
//! Filtering drops items that cannot contribute value and caps the sequence
//! length, which keeps exhaustive enumeration tractable.

use crate::item::ItemSequence;

/// Criteria for [`ItemSequence::filter`].
///
/// An item passes when its value is positive and lies in
/// `min_value..=max_value`. Only the first `max_items` passing items are kept.
///
/// # Example
///
/// ```
/// use knapforge_core::{FilterCriteria, Item, ItemSequence};
///
/// let items: ItemSequence = vec![
///     Item::new("a", 1.0, 0.0),
///     Item::new("b", 1.0, 5.0),
///     Item::new("c", 1.0, 50.0),
///     Item::new("d", 1.0, 7.0),
/// ]
/// .into();
///
/// let criteria = FilterCriteria::new(1.0, 10.0, 1);
/// let filtered = items.filter(&criteria);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].description(), "b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterCriteria {
    /// Smallest accepted value (inclusive).
    pub min_value: f64,
    /// Largest accepted value (inclusive).
    pub max_value: f64,
    /// Maximum number of items kept.
    pub max_items: usize,
}

impl FilterCriteria {
    /// Creates filter criteria.
    pub fn new(min_value: f64, max_value: f64, max_items: usize) -> Self {
        Self {
            min_value,
            max_value,
            max_items,
        }
    }

    /// Returns true if an item with `value` passes the value bounds.
    pub fn accepts(&self, value: f64) -> bool {
        value > 0.0 && value >= self.min_value && value <= self.max_value
    }
}

impl Default for FilterCriteria {
    /// Accepts every positive value, without a length cap.
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: f64::MAX,
            max_items: usize::MAX,
        }
    }
}

impl ItemSequence {
    /// Returns the items matching `criteria`, in source order.
    ///
    /// The result shares its items with `self`.
    pub fn filter(&self, criteria: &FilterCriteria) -> ItemSequence {
        self.iter()
            .filter(|item| criteria.accepts(item.value()))
            .take(criteria.max_items)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use std::sync::Arc;

    fn sample() -> ItemSequence {
        vec![
            Item::new("zero", 3.0, 0.0),
            Item::new("low", 3.0, 0.5),
            Item::new("one", 3.0, 1.0),
            Item::new("mid", 3.0, 100.0),
            Item::new("top", 3.0, 2500.0),
            Item::new("over", 3.0, 2500.5),
        ]
        .into()
    }

    fn names(items: &ItemSequence) -> Vec<&str> {
        items.iter().map(|item| item.description()).collect()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filtered = sample().filter(&FilterCriteria::new(1.0, 2500.0, 10));
        assert_eq!(names(&filtered), vec!["one", "mid", "top"]);
    }

    #[test]
    fn test_zero_value_always_dropped() {
        let filtered = sample().filter(&FilterCriteria::new(-10.0, 10.0, 10));
        assert_eq!(names(&filtered), vec!["low", "one"]);
    }

    #[test]
    fn test_max_items_keeps_first_matches() {
        let filtered = sample().filter(&FilterCriteria::new(0.0, f64::MAX, 2));
        assert_eq!(names(&filtered), vec!["low", "one"]);
        assert!(sample().filter(&FilterCriteria::new(0.0, 10.0, 0)).is_empty());
    }

    #[test]
    fn test_filtered_items_are_shared() {
        let items = sample();
        let filtered = items.filter(&FilterCriteria::default());
        assert_eq!(filtered.len(), 5);
        assert!(Arc::ptr_eq(&items.as_slice()[1], &filtered.as_slice()[0]));
    }
}
