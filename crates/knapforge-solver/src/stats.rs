//! Optimizer statistics.
//!
//! Counters collected during one optimizer call.

use std::time::{Duration, Instant};

/// Statistics for a single optimizer run.
///
/// A *candidate* is one subset (exhaustive) or one picked item (greedy)
/// checked against the budget.
///
/// # Example
///
/// ```
/// use knapforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_candidate(true);
/// stats.record_candidate(false);
/// stats.record_improvement();
/// stats.finish();
///
/// assert_eq!(stats.candidates_evaluated, 2);
/// assert_eq!(stats.feasible_candidates, 1);
/// assert_eq!(stats.improvements, 1);
/// assert_eq!(stats.feasible_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Candidates checked against the budget.
    pub candidates_evaluated: u64,
    /// Candidates that fit the budget.
    pub feasible_candidates: u64,
    /// Times the incumbent selection changed.
    pub improvements: u64,
    /// Wall-clock duration of the run, set by [`SolverStats::finish`].
    pub duration: Duration,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Records the final duration.
    pub fn finish(&mut self) {
        self.duration = self.elapsed();
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a candidate and whether it fit the budget.
    pub fn record_candidate(&mut self, feasible: bool) {
        self.candidates_evaluated += 1;
        if feasible {
            self.feasible_candidates += 1;
        }
    }

    /// Records a change of the incumbent selection.
    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Returns candidates per second over the recorded duration.
    pub fn candidates_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.candidates_evaluated as f64 / secs
        } else {
            0.0
        }
    }

    /// Returns the feasible rate (feasible / evaluated).
    pub fn feasible_rate(&self) -> f64 {
        if self.candidates_evaluated == 0 {
            0.0
        } else {
            self.feasible_candidates as f64 / self.candidates_evaluated as f64
        }
    }

    /// Returns the duration in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}
