//! Trial/lap recording core
//!
//! A [`Recorder`] manages a sequence of named trials. Each trial holds an
//! ordered sequence of lap durations measured with a monotonic clock. At most
//! one trial is open at a time and at most one lap is in flight at a time;
//! every protocol violation fails immediately with a [`StateError`] and
//! mutates no state.
//!
//! Intended usage: one trial per algorithm under comparison, one lap per use
//! case that algorithm is applied to. A `Recorder` is for exclusive use by a
//! single logical timer owner; overlapping timing streams each get their own
//! instance.

use crate::clock::{Clock, MonotonicClock};
use crate::csv_output::CsvTable;
use std::fmt;
use thiserror::Error;

/// Errors for recorder protocol violations
///
/// Every misuse of the trial/lap call ordering is fatal to the offending
/// call; there is no recovery path beyond fixing the call sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// `new_trial` was called while a trial is already open
    #[error("unconcluded trial in progress")]
    TrialInProgress,

    /// An operation that needs an open trial found none
    #[error("no trial is currently active")]
    NoOpenTrial,

    /// `start_lap` was called while a lap is already in flight
    #[error("lap already in flight")]
    LapInFlight,

    /// `stop_lap` was called with no lap in flight
    #[error("no lap started")]
    NoLapStarted,
}

/// One named timing session: an ordered sequence of lap durations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    name: String,
    laps: Vec<u64>,
}

impl Trial {
    fn new(name: String) -> Self {
        Self {
            name,
            laps: Vec::new(),
        }
    }

    /// Trial label (explicit, or the ordinal index when auto-named)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded lap durations in nanoseconds, in measurement order
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Number of recorded laps
    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }

    /// Sum of all lap durations in nanoseconds
    pub fn total_ns(&self) -> u64 {
        self.laps.iter().sum()
    }

    fn add_lap(&mut self, duration_ns: u64) {
        self.laps.push(duration_ns);
    }
}

/// The open-trial slot: explicit so "no trial" needs no sentinel
#[derive(Debug)]
enum TrialSlot {
    Closed,
    Open(Trial),
}

/// The in-flight lap: carries the start timestamp in nanoseconds
#[derive(Debug, Clone, Copy)]
enum LapState {
    Idle,
    InFlight(u64),
}

/// Records trials and laps against a monotonic clock and exports the
/// collected durations as a delimited table
///
/// # Example
/// ```
/// use vuelta::recorder::Recorder;
///
/// let mut recorder = Recorder::new();
/// recorder.new_trial(Some("sort"))?;
/// recorder.start_lap()?;
/// // ... workload under measurement ...
/// recorder.stop_lap()?;
/// recorder.conclude_trial()?;
/// assert!(recorder.to_csv().starts_with("Name,Time 0,"));
/// # Ok::<(), vuelta::recorder::StateError>(())
/// ```
#[derive(Debug)]
pub struct Recorder<C: Clock = MonotonicClock> {
    clock: C,
    concluded: Vec<Trial>,
    current: TrialSlot,
    lap: LapState,
    /// Ordinal for the next trial; shared by auto and explicit names so
    /// auto-names never repeat
    next_ordinal: usize,
    /// Maximum lap count seen so far, re-evaluated on every `stop_lap`
    max_laps: usize,
}

impl Recorder<MonotonicClock> {
    /// Create an empty recorder backed by the system monotonic clock
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Recorder<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Recorder<C> {
    /// Create an empty recorder backed by the given clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            concluded: Vec::new(),
            current: TrialSlot::Closed,
            lap: LapState::Idle,
            next_ordinal: 0,
            max_laps: 0,
        }
    }

    /// Start a new trial
    ///
    /// With `None` the trial is named after its ordinal index. The ordinal
    /// advances once per successful call whether or not a name was supplied.
    /// Fails with [`StateError::TrialInProgress`] if a trial is already open.
    pub fn new_trial(&mut self, name: Option<&str>) -> Result<(), StateError> {
        if matches!(self.current, TrialSlot::Open(_)) {
            return Err(StateError::TrialInProgress);
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => self.next_ordinal.to_string(),
        };
        self.next_ordinal += 1;

        tracing::debug!(trial = %name, "trial opened");
        self.current = TrialSlot::Open(Trial::new(name));
        Ok(())
    }

    /// Conclude the open trial, appending it to the exportable collection
    ///
    /// A lap still in flight is discarded; its start timestamp belongs to a
    /// trial that no longer accepts laps. Fails with
    /// [`StateError::NoOpenTrial`] if no trial is open.
    pub fn conclude_trial(&mut self) -> Result<(), StateError> {
        match std::mem::replace(&mut self.current, TrialSlot::Closed) {
            TrialSlot::Open(trial) => {
                tracing::debug!(trial = %trial.name(), laps = trial.lap_count(), "trial concluded");
                self.concluded.push(trial);
                self.lap = LapState::Idle;
                Ok(())
            }
            TrialSlot::Closed => Err(StateError::NoOpenTrial),
        }
    }

    /// Start timing a lap in the open trial
    ///
    /// Fails with [`StateError::NoOpenTrial`] without an open trial, and with
    /// [`StateError::LapInFlight`] if a lap is already being timed (the
    /// in-flight start timestamp is left untouched).
    pub fn start_lap(&mut self) -> Result<(), StateError> {
        if matches!(self.current, TrialSlot::Closed) {
            return Err(StateError::NoOpenTrial);
        }
        if matches!(self.lap, LapState::InFlight(_)) {
            return Err(StateError::LapInFlight);
        }

        self.lap = LapState::InFlight(self.clock.now_ns());
        Ok(())
    }

    /// Stop the in-flight lap and append its duration to the open trial
    ///
    /// Fails with [`StateError::NoLapStarted`] if no lap is in flight.
    pub fn stop_lap(&mut self) -> Result<(), StateError> {
        let start_ns = match self.lap {
            LapState::InFlight(start_ns) => start_ns,
            LapState::Idle => return Err(StateError::NoLapStarted),
        };
        let trial = match &mut self.current {
            TrialSlot::Open(trial) => trial,
            TrialSlot::Closed => return Err(StateError::NoOpenTrial),
        };

        let duration_ns = self.clock.now_ns().saturating_sub(start_ns);
        trial.add_lap(duration_ns);
        if trial.lap_count() > self.max_laps {
            self.max_laps = trial.lap_count();
        }
        self.lap = LapState::Idle;

        tracing::debug!(duration_ns, "lap recorded");
        Ok(())
    }

    /// Time a closure as one lap
    ///
    /// # Example
    /// ```
    /// use vuelta::recorder::Recorder;
    ///
    /// let mut recorder = Recorder::new();
    /// recorder.new_trial(None)?;
    /// let sum = recorder.lap(|| (0..1000u64).sum::<u64>())?;
    /// assert_eq!(sum, 499_500);
    /// # Ok::<(), vuelta::recorder::StateError>(())
    /// ```
    pub fn lap<F, R>(&mut self, f: F) -> Result<R, StateError>
    where
        F: FnOnce() -> R,
    {
        self.start_lap()?;
        let result = f();
        self.stop_lap()?;
        Ok(result)
    }

    /// Concluded trials in conclusion order
    pub fn trials(&self) -> &[Trial] {
        &self.concluded
    }

    /// The currently open trial, if any
    pub fn open_trial(&self) -> Option<&Trial> {
        match &self.current {
            TrialSlot::Open(trial) => Some(trial),
            TrialSlot::Closed => None,
        }
    }

    /// Maximum lap count observed so far (the exported column count)
    pub fn max_laps(&self) -> usize {
        self.max_laps
    }

    /// Render all concluded trials as a comma-terminated table
    ///
    /// Header row: `Name,Time 0,...,Time {max-1},` then a newline. One row
    /// per concluded trial, every field followed by a comma; rows with fewer
    /// laps than the widest trial simply end early.
    pub fn to_csv(&self) -> String {
        let mut table = CsvTable::new(self.max_laps);
        for trial in &self.concluded {
            table.push_trial(trial);
        }
        table.to_csv()
    }
}

impl<C: Clock> fmt::Display for Recorder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv())
    }
}
