//! Vuelta - trial/lap stopwatch for timing algorithms
//!
//! This library provides a [`recorder::Recorder`] that marks named trials,
//! records successive lap durations within each trial using a monotonic
//! clock, and exports all recorded durations as a delimited table (CSV-like
//! or JSON), with per-trial statistics summaries.

pub mod cli;
pub mod clock;
pub mod csv_output;
pub mod json_output;
pub mod recorder;
pub mod stats;
