//! Items and item sequences.
//!
//! An [`Item`] is an immutable value object. An [`ItemSequence`] holds its
//! items behind `Arc`, so a filtered or derived sequence shares the items of
//! its source instead of copying them.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::error::{KnapForgeError, Result};

/// A selectable item with a cost and a value.
///
/// Costs are strictly positive and values non-negative. [`Item::new`] only
/// checks this in debug builds; use [`Item::try_new`] for untrusted input.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
///
/// let helmet = Item::new("enchanted helmet", 10.0, 60.0);
/// assert_eq!(helmet.description(), "enchanted helmet");
/// assert_eq!(helmet.ratio(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    description: String,
    cost: f64,
    value: f64,
}

impl Item {
    /// Creates an item without validation beyond debug assertions.
    pub fn new(description: impl Into<String>, cost: f64, value: f64) -> Self {
        let description = description.into();
        debug_assert!(!description.is_empty(), "item description must be non-empty");
        debug_assert!(cost > 0.0, "item cost must be positive");
        Self {
            description,
            cost,
            value,
        }
    }

    /// Creates an item, rejecting an empty description, a non-positive or
    /// non-finite cost, and a negative or non-finite value.
    pub fn try_new(description: impl Into<String>, cost: f64, value: f64) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(KnapForgeError::InvalidItem(
                "description must be non-empty".to_string(),
            ));
        }
        if !cost.is_finite() || cost <= 0.0 {
            return Err(KnapForgeError::InvalidItem(format!(
                "cost of '{}' must be positive, got {}",
                description, cost
            )));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(KnapForgeError::InvalidItem(format!(
                "value of '{}' must be non-negative, got {}",
                description, value
            )));
        }
        Ok(Self {
            description,
            cost,
            value,
        })
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns value per unit of cost.
    pub fn ratio(&self) -> f64 {
        self.value / self.cost
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (cost {}, value {})",
            self.description, self.cost, self.value
        )
    }
}

/// An ordered sequence of shared, immutable items.
///
/// Order is the insertion order of the source. It only matters for
/// indexing and deterministic tie-breaking.
///
/// # Example
///
/// ```
/// use knapforge_core::{Item, ItemSequence};
///
/// let items: ItemSequence = vec![
///     Item::new("shield", 20.0, 100.0),
///     Item::new("boots", 30.0, 120.0),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].description(), "boots");
/// assert_eq!(items.total_cost(), 50.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSequence {
    items: Vec<Arc<Item>>,
}

impl ItemSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends an item.
    pub fn push(&mut self, item: Item) {
        self.items.push(Arc::new(item));
    }

    /// Appends an already shared item without copying it.
    pub fn push_shared(&mut self, item: Arc<Item>) {
        self.items.push(item);
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Arc<Item>> {
        self.items.get(index)
    }

    /// Iterates over the shared items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Item>> {
        self.items.iter()
    }

    /// Returns the shared items as a slice.
    pub fn as_slice(&self) -> &[Arc<Item>] {
        &self.items
    }

    /// Sum of all item costs.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.cost())
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.value())
    }
}

impl Index<usize> for ItemSequence {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl FromIterator<Item> for ItemSequence {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl FromIterator<Arc<Item>> for ItemSequence {
    fn from_iter<I: IntoIterator<Item = Arc<Item>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Item>> for ItemSequence {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ItemSequence {
    type Item = &'a Arc<Item>;
    type IntoIter = std::slice::Iter<'a, Arc<Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_valid_item() {
        let item = Item::try_new("sword", 5.0, 0.0).unwrap();
        assert_eq!(item.cost(), 5.0);
        assert_eq!(item.value(), 0.0);
    }

    #[test]
    fn test_try_new_rejects_empty_description() {
        assert!(matches!(
            Item::try_new("  ", 5.0, 1.0),
            Err(KnapForgeError::InvalidItem(_))
        ));
    }

    #[test]
    fn test_try_new_rejects_bad_cost() {
        assert!(Item::try_new("a", 0.0, 1.0).is_err());
        assert!(Item::try_new("a", -3.0, 1.0).is_err());
        assert!(Item::try_new("a", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_try_new_rejects_negative_value() {
        assert!(Item::try_new("a", 1.0, -0.5).is_err());
        assert!(Item::try_new("a", 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_clone_shares_items() {
        let items: ItemSequence = vec![Item::new("a", 1.0, 2.0)].into();
        let copy = items.clone();
        assert!(Arc::ptr_eq(&items.as_slice()[0], &copy.as_slice()[0]));
    }

    #[test]
    fn test_totals() {
        let items: ItemSequence = vec![Item::new("a", 1.5, 2.0), Item::new("b", 2.5, 3.0)].into();
        assert_eq!(items.total_cost(), 4.0);
        assert_eq!(items.total_value(), 5.0);
        assert_eq!(ItemSequence::new().total_cost(), 0.0);
    }

    #[test]
    fn test_display() {
        let item = Item::new("cap", 2.0, 3.5);
        assert_eq!(item.to_string(), "cap (cost 2, value 3.5)");
    }
}
