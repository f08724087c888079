//! Subset encoding over integer bitmasks.
//!
//! A [`Subset`] of the first `n` items is stored as a `u64` mask where bit
//! `j` set means item `j` is included (bit 0 is item 0). Enumerating masks
//! `0..2^n` in ascending order visits every subset exactly once.

use std::fmt;

use crate::item::{Item, ItemSequence};

/// Largest item count a `u64` mask can enumerate (`n < 64`).
pub const MAX_SUBSET_ITEMS: usize = 63;

/// A selection of items from a sequence of `item_count` items.
///
/// # Example
///
/// ```
/// use knapforge_core::Subset;
///
/// let subset = Subset::from_mask(4, 0b1010);
/// assert!(subset.contains(1));
/// assert!(!subset.contains(0));
/// assert_eq!(subset.indices().collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(Subset::from_indices(4, [3, 1]), subset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subset {
    mask: u64,
    item_count: usize,
}

impl Subset {
    /// Decodes `mask` as a subset of the first `item_count` items.
    ///
    /// # Panics
    ///
    /// Panics if `item_count > MAX_SUBSET_ITEMS` or `mask` has a bit set at
    /// or above `item_count`.
    pub fn from_mask(item_count: usize, mask: u64) -> Self {
        assert!(
            item_count <= MAX_SUBSET_ITEMS,
            "subset encoding supports at most {} items, got {}",
            MAX_SUBSET_ITEMS,
            item_count
        );
        assert!(
            mask < 1u64 << item_count,
            "mask {:#b} out of range for {} items",
            mask,
            item_count
        );
        Self { mask, item_count }
    }

    /// The empty subset of `item_count` items.
    pub fn empty(item_count: usize) -> Self {
        Self::from_mask(item_count, 0)
    }

    /// Encodes a set of indices. Duplicates collapse to one member.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= item_count`.
    pub fn from_indices(item_count: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut mask = 0u64;
        for index in indices {
            assert!(
                index < item_count,
                "index {} out of range for {} items",
                index,
                item_count
            );
            mask |= 1u64 << index;
        }
        Self::from_mask(item_count, mask)
    }

    /// Enumerates all `2^item_count` subsets in ascending mask order.
    pub fn all(item_count: usize) -> SubsetIter {
        SubsetIter::new(item_count)
    }

    /// Returns the encoding mask.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Number of items the subset is drawn from.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns true if no item is selected.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns true if item `index` is selected.
    pub fn contains(&self, index: usize) -> bool {
        index < self.item_count && self.mask & (1u64 << index) != 0
    }

    /// Iterates selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let mut remaining = self.mask;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let index = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;
            Some(index)
        })
    }

    /// Sums `(cost, value)` of the selected items.
    pub fn totals(&self, items: &ItemSequence) -> (f64, f64) {
        debug_assert_eq!(items.len(), self.item_count);
        self.indices().fold((0.0, 0.0), |(cost, value), index| {
            let item: &Item = &items[index];
            (cost + item.cost(), value + item.value())
        })
    }

    /// Collects the selected items, sharing them with `items`.
    pub fn select(&self, items: &ItemSequence) -> ItemSequence {
        debug_assert_eq!(items.len(), self.item_count);
        self.indices()
            .filter_map(|index| items.get(index).cloned())
            .collect()
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, index) in self.indices().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over every subset of `item_count` items, by ascending mask.
#[derive(Debug, Clone)]
pub struct SubsetIter {
    item_count: usize,
    next: u64,
    end: u64,
}

impl SubsetIter {
    fn new(item_count: usize) -> Self {
        assert!(
            item_count <= MAX_SUBSET_ITEMS,
            "subset enumeration supports at most {} items, got {}",
            MAX_SUBSET_ITEMS,
            item_count
        );
        Self {
            item_count,
            next: 0,
            end: 1u64 << item_count,
        }
    }
}

impl Iterator for SubsetIter {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        if self.next >= self.end {
            return None;
        }
        let subset = Subset {
            mask: self.next,
            item_count: self.item_count,
        };
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bit_zero_is_first_item() {
        let subset = Subset::from_mask(3, 0b001);
        assert!(subset.contains(0));
        assert!(!subset.contains(1));
        assert!(!subset.contains(2));
    }

    #[test]
    fn test_enumeration_is_bijection() {
        for n in 0..=8 {
            let subsets: Vec<Subset> = Subset::all(n).collect();
            assert_eq!(subsets.len(), 1 << n);

            let distinct: HashSet<Vec<usize>> =
                subsets.iter().map(|s| s.indices().collect()).collect();
            assert_eq!(distinct.len(), 1 << n);

            for (expected, subset) in subsets.iter().enumerate() {
                assert_eq!(subset.mask(), expected as u64);
                assert_eq!(Subset::from_indices(n, subset.indices()), *subset);
            }
        }
    }

    #[test]
    fn test_zero_items_has_only_empty_subset() {
        let subsets: Vec<Subset> = Subset::all(0).collect();
        assert_eq!(subsets, vec![Subset::empty(0)]);
    }

    #[test]
    fn test_largest_item_count_is_accepted() {
        let subset = Subset::from_mask(MAX_SUBSET_ITEMS, 1 << 62);
        assert_eq!(subset.indices().collect::<Vec<_>>(), vec![62]);
        let mut all = Subset::all(MAX_SUBSET_ITEMS);
        assert_eq!(all.next().map(|s| s.mask()), Some(0));
    }

    #[test]
    fn test_high_indices_use_full_mask_width() {
        let subset = Subset::from_indices(MAX_SUBSET_ITEMS, [0, 40, 62]);
        assert_eq!(subset.mask(), 1u64 | 1u64 << 40 | 1u64 << 62);
        assert!(subset.contains(40));
        assert!(subset.contains(62));
        assert!(!subset.contains(61));
    }

    #[test]
    #[should_panic(expected = "at most 63 items")]
    fn test_64_items_panics() {
        let _ = Subset::all(64);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_mask_out_of_range_panics() {
        let _ = Subset::from_mask(2, 0b100);
    }

    #[test]
    fn test_totals_and_select() {
        let items: ItemSequence = vec![
            Item::new("a", 10.0, 60.0),
            Item::new("b", 20.0, 100.0),
            Item::new("c", 30.0, 120.0),
        ]
        .into();
        let subset = Subset::from_indices(3, [0, 2]);
        assert_eq!(subset.totals(&items), (40.0, 180.0));

        let selected = subset.select(&items);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].description(), "a");
        assert_eq!(selected[1].description(), "c");
    }

    #[test]
    fn test_display() {
        assert_eq!(Subset::from_mask(4, 0b1101).to_string(), "{0, 2, 3}");
        assert_eq!(Subset::empty(4).to_string(), "{}");
    }
}
