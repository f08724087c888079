//! Shared test fixtures for KnapForge crates.
//!
//! - [`scenario_items`] - the three-item reference instance
//! - [`random_items`] - reproducible random instances
//! - [`SAMPLE_DATABASE`] - a small `^`-delimited item database
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! knapforge-test = { workspace = true }
//! ```

use knapforge_core::{Item, ItemSequence};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A small item database in the delimited loader format.
///
/// Contains one record with an unparsable cost and one with a zero cost,
/// both of which the loader skips.
pub const SAMPLE_DATABASE: &str = "\
description^cost_gold^defense_points
steel helmet^10^60
tower shield^20^100
iron boots^30^120
cracked gauntlets^abc^15
free hat^0^3
leather cloak^5^0
silver ring^2^8
";

/// Number of valid items in [`SAMPLE_DATABASE`].
pub const SAMPLE_DATABASE_ITEMS: usize = 5;

/// The reference instance: costs 10, 20, 30 with values 60, 100, 120.
///
/// With a budget of 50 the optimum is `{shield, boots}` (value 220) while
/// the ratio heuristic stops at `{helmet, shield}` (value 160).
///
/// # Example
///
/// ```
/// let items = knapforge_test::scenario_items();
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[0].ratio(), 6.0);
/// ```
pub fn scenario_items() -> ItemSequence {
    vec![
        Item::new("helmet", 10.0, 60.0),
        Item::new("shield", 20.0, 100.0),
        Item::new("boots", 30.0, 120.0),
    ]
    .into()
}

/// Generates `count` items with integral costs in `1..=20` and values in
/// `0..=50`, reproducible for a given `seed`.
///
/// Integral values keep every sum exact, so totals computed in different
/// orders compare equal.
pub fn random_items(seed: u64, count: usize) -> ItemSequence {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let cost = rng.random_range(1..=20u32) as f64;
            let value = rng.random_range(0..=50u32) as f64;
            Item::new(format!("item-{}-{}", seed, index), cost, value)
        })
        .collect()
}
