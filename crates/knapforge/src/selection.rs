//! Config-driven entry points that hide the loading and dispatch wiring.

use knapforge_config::{ConfigError, SelectionConfig};
use knapforge_core::{DelimitedItemSource, ItemSequence, ItemSource, KnapForgeError, Result};
use knapforge_solver::{Comparison, Selector, SolveResult};
use tracing::debug;

fn config_error(err: ConfigError) -> KnapForgeError {
    KnapForgeError::Config(err.to_string())
}

fn configured_budget(config: &SelectionConfig) -> Result<f64> {
    config.validate().map_err(config_error)?;
    config
        .budget
        .ok_or_else(|| KnapForgeError::Config("no budget configured".to_string()))
}

/// Loads the item database named by `config.data_path`.
pub fn load_configured_items(config: &SelectionConfig) -> Result<ItemSequence> {
    let path = config
        .data_path
        .as_deref()
        .ok_or_else(|| KnapForgeError::Config("no data_path configured".to_string()))?;
    DelimitedItemSource::new(path).load()
}

/// Applies the configured filter, if any.
///
/// The result shares its items with `items`.
pub fn prepare_items(config: &SelectionConfig, items: &ItemSequence) -> ItemSequence {
    match &config.filter {
        Some(filter) => {
            let filtered = items.filter(filter);
            debug!(
                event = "filter_applied",
                before = items.len() as u64,
                after = filtered.len() as u64,
            );
            filtered
        }
        None => items.clone(),
    }
}

/// Filters `items` and solves with the configured algorithm and budget.
///
/// # Errors
///
/// Returns [`KnapForgeError::Config`] for an invalid config or a missing
/// budget, and [`KnapForgeError::TooManyItems`] when exhaustive search gets
/// 64 or more items after filtering.
///
/// # Example
///
/// ```
/// use knapforge::{run_selection, Algorithm, Item, ItemSequence, SelectionConfig};
///
/// let items: ItemSequence = vec![
///     Item::new("helmet", 10.0, 60.0),
///     Item::new("shield", 20.0, 100.0),
///     Item::new("boots", 30.0, 120.0),
/// ]
/// .into();
/// let config = SelectionConfig::new()
///     .with_budget(50.0)
///     .with_algorithm(Algorithm::Exhaustive);
///
/// let result = run_selection(&config, &items).unwrap();
/// assert_eq!(result.solution.total_value(), 220.0);
/// ```
pub fn run_selection(config: &SelectionConfig, items: &ItemSequence) -> Result<SolveResult> {
    let budget = configured_budget(config)?;
    init_console();
    let items = prepare_items(config, items);
    Selector::from_config(config).try_solve(&items, budget)
}

/// Filters `items` and runs both algorithms with the configured budget.
///
/// The configured algorithm is ignored.
pub fn run_comparison(config: &SelectionConfig, items: &ItemSequence) -> Result<Comparison> {
    let budget = configured_budget(config)?;
    init_console();
    let items = prepare_items(config, items);
    knapforge_solver::compare(&items, budget)
}

#[cfg(feature = "console")]
fn init_console() {
    knapforge_console::init();
}

#[cfg(not(feature = "console"))]
fn init_console() {}
