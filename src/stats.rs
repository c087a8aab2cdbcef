//! Per-trial statistics for -c mode
//!
//! Reduces each concluded trial's lap durations to count, total, mean, min
//! and max, and prints an aligned summary table to stderr so it composes
//! with table output on stdout.

use crate::recorder::Trial;

/// Statistics over one trial's lap durations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialStats {
    /// Trial label
    pub name: String,
    /// Number of recorded laps
    pub laps: u64,
    /// Total time across laps (nanoseconds)
    pub total_ns: u64,
    /// Mean lap duration (nanoseconds, zero when the trial has no laps)
    pub mean_ns: u64,
    /// Shortest lap (nanoseconds)
    pub min_ns: u64,
    /// Longest lap (nanoseconds)
    pub max_ns: u64,
}

impl TrialStats {
    /// Reduce a concluded trial to its lap statistics
    pub fn from_trial(trial: &Trial) -> Self {
        let laps = trial.lap_count() as u64;
        let total_ns = trial.total_ns();
        Self {
            name: trial.name().to_string(),
            laps,
            total_ns,
            mean_ns: if laps > 0 { total_ns / laps } else { 0 },
            min_ns: trial.laps().iter().copied().min().unwrap_or(0),
            max_ns: trial.laps().iter().copied().max().unwrap_or(0),
        }
    }
}

/// Statistics summary over all concluded trials
#[derive(Debug, Clone, Default)]
pub struct StatsReport {
    stats: Vec<TrialStats>,
}

impl StatsReport {
    /// Build a report from concluded trials, preserving conclusion order
    pub fn from_trials(trials: &[Trial]) -> Self {
        Self {
            stats: trials.iter().map(TrialStats::from_trial).collect(),
        }
    }

    /// Per-trial statistics in conclusion order
    pub fn trial_stats(&self) -> &[TrialStats] {
        &self.stats
    }

    /// Total recorded time across all trials (nanoseconds)
    pub fn total_time_ns(&self) -> u64 {
        self.stats.iter().map(|s| s.total_ns).sum()
    }

    /// Total recorded laps across all trials
    pub fn total_laps(&self) -> u64 {
        self.stats.iter().map(|s| s.laps).sum()
    }

    /// Print the statistics summary to stderr
    pub fn print_summary(&self) {
        if self.stats.is_empty() {
            eprintln!("No trials recorded.");
            return;
        }

        let total_time_ns = self.total_time_ns();

        eprintln!("% time     total(ns)      ns/lap      laps trial");
        eprintln!("------ ------------- ----------- --------- ----------------");

        for stat in &self.stats {
            let time_percent = if total_time_ns > 0 {
                (stat.total_ns as f64 / total_time_ns as f64) * 100.0
            } else {
                0.0
            };

            eprintln!(
                "{:6.2} {:>13} {:>11} {:>9} {}",
                time_percent, stat.total_ns, stat.mean_ns, stat.laps, stat.name
            );
        }

        eprintln!("------ ------------- ----------- --------- ----------------");
        let total_laps = self.total_laps();
        let avg_ns = if total_laps > 0 {
            total_time_ns / total_laps
        } else {
            0
        };
        eprintln!(
            "100.00 {:>13} {:>11} {:>9} total",
            total_time_ns, avg_ns, total_laps
        );
    }
}
