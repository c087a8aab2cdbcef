//! JSON output format for recorded trials
//!
//! Machine-readable alternative to the CSV table: one entry per concluded
//! trial plus a summary block, under a versioned format tag.

use crate::clock::Clock;
use crate::recorder::{Recorder, Trial};
use serde::{Deserialize, Serialize};

/// A single concluded trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTrial {
    /// Trial label (explicit or ordinal)
    pub name: String,
    /// Lap durations in nanoseconds, in measurement order
    pub laps_ns: Vec<u64>,
    /// Sum of all lap durations in nanoseconds
    pub total_ns: u64,
}

/// Summary statistics for the recording session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Number of concluded trials
    pub total_trials: u64,
    /// Number of recorded laps across all trials
    pub total_laps: u64,
    /// Total recorded time in nanoseconds
    pub total_time_ns: u64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Concluded trials in conclusion order
    pub trials: Vec<JsonTrial>,
    /// Summary statistics
    pub summary: JsonSummary,
}

impl JsonReport {
    /// Create an empty JSON report
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "vuelta-json-v1".to_string(),
            trials: Vec::new(),
            summary: JsonSummary {
                total_trials: 0,
                total_laps: 0,
                total_time_ns: 0,
            },
        }
    }

    /// Add a concluded trial to the report
    pub fn add_trial(&mut self, trial: &Trial) {
        self.summary.total_trials += 1;
        self.summary.total_laps += trial.lap_count() as u64;
        self.summary.total_time_ns += trial.total_ns();
        self.trials.push(JsonTrial {
            name: trial.name().to_string(),
            laps_ns: trial.laps().to_vec(),
            total_ns: trial.total_ns(),
        });
    }

    /// Build a report from all trials concluded so far
    pub fn from_recorder<C: Clock>(recorder: &Recorder<C>) -> Self {
        let mut report = Self::new();
        for trial in recorder.trials() {
            report.add_trial(trial);
        }
        report
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}
