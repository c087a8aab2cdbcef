//! CSV table output for recorded trials
//!
//! The table format is comma-terminated rather than comma-separated: every
//! field, including the last on a row, is followed by a comma. The header
//! carries one `Time N` column per lap in the widest trial; rows for trials
//! with fewer laps simply end early and are not padded.

use crate::recorder::Trial;

/// Comma-terminated table formatter for concluded trials
#[derive(Debug)]
pub struct CsvTable {
    columns: usize,
    rows: Vec<String>,
}

impl CsvTable {
    /// Create a table with the given number of `Time N` columns
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append one row for a concluded trial
    pub fn push_trial(&mut self, trial: &Trial) {
        self.rows.push(Self::format_trial(trial));
    }

    /// Generate the header row: `Name,Time 0,...,Time {columns-1},`
    fn header(&self) -> String {
        let mut header = String::from("Name,");
        for i in 0..self.columns {
            header.push_str(&format!("Time {},", i));
        }
        header
    }

    /// Format a trial as `{name},{lap0},{lap1},...,` with raw nanosecond values
    fn format_trial(trial: &Trial) -> String {
        let mut row = String::new();
        row.push_str(trial.name());
        row.push(',');
        for lap in trial.laps() {
            row.push_str(&lap.to_string());
            row.push(',');
        }
        row
    }

    /// Generate the full table, one newline-terminated line per row
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.header());
        output.push('\n');

        for row in &self.rows {
            output.push_str(row);
            output.push('\n');
        }

        output
    }
}
