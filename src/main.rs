use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vuelta::cli::{Cli, OutputFormat};
use vuelta::json_output::JsonReport;
use vuelta::recorder::Recorder;
use vuelta::stats::StatsReport;

/// Initialize tracing subscriber for debug output
fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Time vector-allocation loops of increasing size, one lap per size step
///
/// Lap `i` allocates `100 * i` vectors, so later laps dominate and the
/// exported table shows the growth curve.
fn run_allocation_workload(recorder: &mut Recorder, trials: usize, laps: usize) -> Result<()> {
    for _ in 0..trials {
        recorder.new_trial(None)?;
        for i in 0..laps {
            recorder.start_lap()?;
            for _ in 0..100 * i {
                let v: Vec<u32> = Vec::new();
                std::hint::black_box(v);
            }
            recorder.stop_lap()?;
        }
        recorder.conclude_trial()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut recorder = Recorder::new();
    run_allocation_workload(&mut recorder, cli.trials, cli.laps)?;

    match cli.format {
        OutputFormat::Table => print!("{}", recorder.to_csv()),
        OutputFormat::Json => println!("{}", JsonReport::from_recorder(&recorder).to_json()?),
    }

    if cli.statistics {
        StatsReport::from_trials(recorder.trials()).print_summary();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_records_one_trial_per_run() {
        let mut recorder = Recorder::new();
        run_allocation_workload(&mut recorder, 2, 3).unwrap();

        assert_eq!(recorder.trials().len(), 2);
        assert_eq!(recorder.trials()[0].lap_count(), 3);
        assert_eq!(recorder.trials()[1].lap_count(), 3);
    }

    #[test]
    fn test_workload_zero_laps() {
        let mut recorder = Recorder::new();
        run_allocation_workload(&mut recorder, 1, 0).unwrap();

        assert_eq!(recorder.trials().len(), 1);
        assert_eq!(recorder.trials()[0].lap_count(), 0);
        assert_eq!(recorder.to_csv(), "Name,\n0,\n");
    }

    #[test]
    fn test_workload_uses_ordinal_names() {
        let mut recorder = Recorder::new();
        run_allocation_workload(&mut recorder, 3, 1).unwrap();

        let names: Vec<&str> = recorder.trials().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["0", "1", "2"]);
    }
}
