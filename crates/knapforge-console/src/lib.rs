//! Colorful console output for selection runs.
//!
//! Provides a custom `tracing` layer that formats optimizer events with
//! colors, and plain-text renderers for solutions and comparisons.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end, benchmark measurements
//! - **WARN**: Skipped database records
//! - **INFO**: Written report files
//! - **DEBUG**: Exhaustive search improvements, load summaries, filtering
//! - **TRACE**: Individual greedy picks

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use knapforge_core::Solution;
use knapforge_solver::Comparison;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output with the default filter.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` replaces the [`default_directives`] filter.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Initializes console output, logging optimizer events at `level`.
///
/// Only the first call to [`init`] or `init_with_level` has effect.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SelectionConsoleLayer)
            .try_init();
    });
}

/// Filter directives used when `RUST_LOG` is unset.
///
/// Optimizer, loader and facade events follow `level`; loader warnings are
/// always shown.
pub fn default_directives(level: LevelFilter) -> String {
    let core = level.max(LevelFilter::WARN);
    format!(
        "knapforge_solver={level},knapforge_core={core},knapforge={level},knapforge_cli=info,knapforge_benchmark=info"
    )
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _  __                  _____
| |/ /_ __   __ _ _ __ |  ___|__  _ __ __ _  ___
| ' /| '_ \ / _` | '_ \| |_ / _ \| '__/ _` |/ _ \
| . \| | | | (_| | |_) |  _| (_) | | | (_| |  __/
|_|\_\_| |_|\__,_| .__/|_|  \___/|_|  \__, |\___|
                 |_|                  |___/
"#;

    let version_line = format!("            v{} - Budgeted Subset Selection\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats optimizer, loader and benchmark events with
/// colors.
pub struct SelectionConsoleLayer;

impl<S: Subscriber> Layer<S> for SelectionConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("knapforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    item: Option<String>,
    reason: Option<String>,
    path: Option<String>,
    kind: Option<String>,
    item_count: Option<u64>,
    budget: Option<f64>,
    total_value: Option<f64>,
    total_cost: Option<f64>,
    ratio: Option<f64>,
    avg_ms: Option<f64>,
    selected: Option<u64>,
    candidates: Option<u64>,
    duration_ms: Option<u64>,
    step: Option<u64>,
    line: Option<u64>,
    mask: Option<u64>,
    size: Option<u64>,
    runs: Option<u64>,
    before: Option<u64>,
    after: Option<u64>,
    accepted: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "budget" => self.budget = Some(value),
            "total_value" => self.total_value = Some(value),
            "total_cost" => self.total_cost = Some(value),
            "ratio" => self.ratio = Some(value),
            "avg_ms" => self.avg_ms = Some(value),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "selected" => self.selected = Some(value),
            "candidates" => self.candidates = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "step" => self.step = Some(value),
            "line" => self.line = Some(value),
            "mask" => self.mask = Some(value),
            "size" => self.size = Some(value),
            "runs" => self.runs = Some(value),
            "before" => self.before = Some(value),
            "after" => self.after = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "accepted" {
            self.accepted = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "algorithm" => self.algorithm = value,
            "item" => self.item = value,
            "reason" => self.reason = value,
            "path" => self.path = value,
            "kind" => self.kind = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "improvement" => format_improvement(v),
        "step" => format_step(v, level),
        "record_skipped" => format_record_skipped(v),
        "load_end" => format_load_end(v),
        "benchmark_run" => format_benchmark_run(v),
        "filter_applied" => format_filter_applied(v),
        "report_written" => format_report_written(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let items = v.item_count.unwrap_or(0);
    let budget = v.budget.unwrap_or(0.0);

    format!(
        "{} {} Solving ({}) │ {} items │ budget {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        algorithm.white().bold(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
        format_amount(budget).bright_yellow()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let value = v.total_value.unwrap_or(0.0);
    let cost = v.total_cost.unwrap_or(0.0);
    let selected = v.selected.unwrap_or(0);
    let candidates = v.candidates.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} Solving complete ({}) │ {} │ value {} │ cost {} │ {} selected │ {} candidates",
        format_elapsed(),
        "■".bright_cyan().bold(),
        algorithm.white().bold(),
        format_duration_ms(duration).yellow(),
        format_amount(value).bright_green().bold(),
        format_amount(cost).white(),
        selected.to_formatted_string(&Locale::en).white(),
        candidates
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
    )
}

fn format_improvement(v: &EventVisitor) -> String {
    let mask = v.mask.unwrap_or(0);
    let value = v.total_value.unwrap_or(0.0);
    let cost = v.total_cost.unwrap_or(0.0);

    format!(
        "{} {} New best │ mask {:#x} │ value {} │ cost {}",
        format_elapsed(),
        "↑".bright_blue(),
        mask,
        format_amount(value).bright_green(),
        format_amount(cost).white()
    )
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let item = v.item.as_deref().unwrap_or("?");
    let ratio = v.ratio.unwrap_or(0.0);
    let accepted = v.accepted.unwrap_or(false);

    let icon = if accepted {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Step {:>6} │ ratio {:>10.4} │ {}",
        format_elapsed(),
        icon,
        step.to_formatted_string(&Locale::en).bright_black(),
        ratio,
        item.bright_black()
    )
}

fn format_record_skipped(v: &EventVisitor) -> String {
    let line = v.line.unwrap_or(0);
    let reason = v.reason.as_deref().unwrap_or("invalid record");

    format!(
        "{} {} Skipped line {} │ {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        line.to_formatted_string(&Locale::en).yellow(),
        reason
    )
}

fn format_load_end(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let items = v.item_count.unwrap_or(0);

    format!(
        "{} {} Loaded {} items from {}",
        format_elapsed(),
        "◆".bright_blue(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
        path.white()
    )
}

fn format_benchmark_run(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let size = v.size.unwrap_or(0);
    let runs = v.runs.unwrap_or(0);
    let avg_ms = v.avg_ms.unwrap_or(0.0);

    format!(
        "{} {} {:<10} │ n = {:>6} │ {} runs │ avg {:.3}ms",
        format_elapsed(),
        "⏱".bright_cyan(),
        algorithm.white().bold(),
        size.to_formatted_string(&Locale::en).bright_yellow(),
        runs,
        avg_ms
    )
}

fn format_filter_applied(v: &EventVisitor) -> String {
    let before = v.before.unwrap_or(0);
    let after = v.after.unwrap_or(0);

    format!(
        "{} {} Filtered {} items down to {}",
        format_elapsed(),
        "◇".bright_blue(),
        before.to_formatted_string(&Locale::en).white(),
        after.to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_report_written(v: &EventVisitor) -> String {
    let kind = v.kind.as_deref().unwrap_or("report");
    let path = v.path.as_deref().unwrap_or("?");

    format!(
        "{} {} Wrote {} report to {}",
        format_elapsed(),
        "✎".bright_green(),
        kind.white().bold(),
        path.white()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

/// Formats a duration with a unit suited to its magnitude.
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else {
        format_duration_ms(duration.as_millis() as u64)
    }
}

/// Formats a cost or value: whole numbers with thousands separators,
/// anything else with two decimals.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        (amount as i64).to_formatted_string(&Locale::en)
    } else {
        format!("{:.2}", amount)
    }
}

/// Renders a solution as one line per item followed by the grand totals.
///
/// # Example
///
/// ```
/// use knapforge_core::{Item, ItemSequence, Solution};
///
/// let items: ItemSequence = vec![Item::new("helmet", 10.0, 60.0)].into();
/// let text = knapforge_console::format_solution(&Solution::new(items));
///
/// assert!(text.contains("helmet ==> Cost of 10 ; Value = 60"));
/// assert!(text.contains("> Grand total value: 60"));
/// ```
pub fn format_solution(solution: &Solution) -> String {
    let mut output = String::new();

    if solution.is_empty() {
        output.push_str("[empty selection]\n");
        return output;
    }

    for item in solution.items() {
        let _ = writeln!(
            output,
            "{} ==> Cost of {} ; Value = {}",
            item.description(),
            format_amount(item.cost()),
            format_amount(item.value())
        );
    }
    let _ = writeln!(
        output,
        "> Grand total cost: {}",
        format_amount(solution.total_cost())
    );
    let _ = writeln!(
        output,
        "> Grand total value: {}",
        format_amount(solution.total_value())
    );

    output
}

/// Prints a titled solution summary to stdout.
pub fn print_solution(title: &str, solution: &Solution) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", format!("*** {} ***", title).bright_cyan().bold());
    let _ = write!(stdout, "{}", format_solution(solution));
    let _ = stdout.flush();
}

/// Renders both results of a comparison and the value gap between them.
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Budget: {}", format_amount(comparison.budget));

    for (name, result) in [
        ("exhaustive", &comparison.exhaustive),
        ("greedy", &comparison.greedy),
    ] {
        let _ = writeln!(
            output,
            "{:<10} value {} │ cost {} │ {} items │ {} candidates │ {}",
            name,
            format_amount(result.solution.total_value()),
            format_amount(result.solution.total_cost()),
            result.solution.len(),
            result
                .stats
                .candidates_evaluated
                .to_formatted_string(&Locale::en),
            format_duration(result.stats.duration)
        );
    }

    let _ = writeln!(
        output,
        "Gap: {} ({:.1}% of optimum reached by greedy)",
        format_amount(comparison.value_gap()),
        comparison.greedy_quality() * 100.0
    );
    output
}

/// Prints both solutions of a comparison, then the comparison summary.
pub fn print_comparison(comparison: &Comparison) {
    print_solution("Exhaustive", &comparison.exhaustive.solution);
    print_solution("Greedy", &comparison.greedy.solution);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", "*** Comparison ***".bright_cyan().bold());
    let _ = write!(stdout, "{}", format_comparison(comparison));
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapforge_core::ItemSequence;
    use knapforge_test::scenario_items;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(60.0), "60");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(2.5), "2.50");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
        assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_format_solution() {
        let items = scenario_items();
        let text = format_solution(&Solution::new(items));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "helmet ==> Cost of 10 ; Value = 60");
        assert_eq!(lines[2], "boots ==> Cost of 30 ; Value = 120");
        assert_eq!(lines[3], "> Grand total cost: 60");
        assert_eq!(lines[4], "> Grand total value: 280");
    }

    #[test]
    fn test_format_empty_solution() {
        let text = format_solution(&Solution::new(ItemSequence::new()));
        assert_eq!(text, "[empty selection]\n");
    }

    #[test]
    fn test_format_comparison() {
        let comparison = knapforge_solver::compare(&scenario_items(), 50.0).unwrap();
        let text = format_comparison(&comparison);

        assert!(text.starts_with("Budget: 50\n"));
        assert!(text.contains("exhaustive value 220"));
        assert!(text.contains("greedy     value 160"));
        assert!(text.contains("Gap: 60 (72.7% of optimum reached by greedy)"));
    }

    #[test]
    fn test_format_solve_events() {
        let start = EventVisitor {
            event: Some("solve_start".to_string()),
            algorithm: Some("greedy".to_string()),
            item_count: Some(1500),
            budget: Some(2500.0),
            ..Default::default()
        };
        let output = format_event(&start, Level::INFO);
        assert!(output.contains("Solving"));
        assert!(output.contains("greedy"));
        assert!(output.contains("1,500"));
        assert!(output.contains("2,500"));

        let end = EventVisitor {
            event: Some("solve_end".to_string()),
            algorithm: Some("exhaustive".to_string()),
            total_value: Some(220.0),
            candidates: Some(8),
            ..Default::default()
        };
        let output = format_event(&end, Level::INFO);
        assert!(output.contains("Solving complete"));
        assert!(output.contains("220"));
    }

    #[test]
    fn test_step_only_at_trace() {
        let step = EventVisitor {
            event: Some("step".to_string()),
            item: Some("helmet".to_string()),
            ratio: Some(6.0),
            accepted: Some(true),
            ..Default::default()
        };
        assert!(format_event(&step, Level::DEBUG).is_empty());
        assert!(format_event(&step, Level::TRACE).contains("helmet"));
    }

    #[test]
    fn test_default_directives_follow_level() {
        assert_eq!(
            default_directives(LevelFilter::INFO),
            "knapforge_solver=info,knapforge_core=warn,knapforge=info,knapforge_cli=info,knapforge_benchmark=info"
        );
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "knapforge_solver=debug,knapforge_core=debug,knapforge=debug,knapforge_cli=info,knapforge_benchmark=info"
        );
        assert_eq!(
            default_directives(LevelFilter::TRACE),
            "knapforge_solver=trace,knapforge_core=trace,knapforge=trace,knapforge_cli=info,knapforge_benchmark=info"
        );
        assert_eq!(
            default_directives(LevelFilter::ERROR),
            "knapforge_solver=error,knapforge_core=warn,knapforge=error,knapforge_cli=info,knapforge_benchmark=info"
        );
    }

    #[test]
    fn test_default_directives_parse() {
        for level in [LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE] {
            assert!(EnvFilter::try_new(default_directives(level)).is_ok());
        }
    }

    #[test]
    fn test_format_load_and_filter_events() {
        let load = EventVisitor {
            event: Some("load_end".to_string()),
            path: Some("armory.txt".to_string()),
            item_count: Some(5),
            ..Default::default()
        };
        let output = format_event(&load, Level::DEBUG);
        assert!(output.contains("Loaded"));
        assert!(output.contains("armory.txt"));

        let filter = EventVisitor {
            event: Some("filter_applied".to_string()),
            before: Some(1200),
            after: Some(20),
            ..Default::default()
        };
        let output = format_event(&filter, Level::DEBUG);
        assert!(output.contains("Filtered"));
        assert!(output.contains("1,200"));
        assert!(output.contains("20"));
    }

    #[test]
    fn test_format_report_written() {
        let report = EventVisitor {
            event: Some("report_written".to_string()),
            kind: Some("csv".to_string()),
            path: Some("runs.csv".to_string()),
            ..Default::default()
        };
        let output = format_event(&report, Level::INFO);
        assert!(output.contains("csv"));
        assert!(output.contains("runs.csv"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!(target: "knapforge_solver", event = "solve_start", item_count = 3u64);
    }
}
