/// Lap Recording Overhead Benchmarks
///
/// Measures the fixed cost a start/stop pair adds around the workload being
/// timed, and the cost of rendering the table once recording is done.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vuelta::recorder::Recorder;

/// Hot path: repeated start/stop pairs inside one trial
fn bench_lap_recording(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_recording");
    group.sample_size(100);

    group.bench_function("start_stop_pair_x100", |b| {
        b.iter(|| {
            let mut recorder = Recorder::new();
            recorder.new_trial(Some("bench")).unwrap();
            for _ in 0..100 {
                recorder.start_lap().unwrap();
                recorder.stop_lap().unwrap();
            }
            recorder.conclude_trial().unwrap();
            black_box(recorder);
        });
    });

    group.finish();
}

/// Closure wrapper compared against the bare pair
fn bench_lap_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_closure");
    group.sample_size(100);

    group.bench_function("lap_closure_x100", |b| {
        b.iter(|| {
            let mut recorder = Recorder::new();
            recorder.new_trial(Some("bench")).unwrap();
            for i in 0..100u64 {
                let value = recorder.lap(|| i * 2).unwrap();
                black_box(value);
            }
            recorder.conclude_trial().unwrap();
            black_box(recorder);
        });
    });

    group.finish();
}

/// Table rendering over a populated recorder
fn bench_csv_render(c: &mut Criterion) {
    let mut recorder = Recorder::new();
    for _ in 0..100 {
        recorder.new_trial(None).unwrap();
        for _ in 0..10 {
            recorder.start_lap().unwrap();
            recorder.stop_lap().unwrap();
        }
        recorder.conclude_trial().unwrap();
    }

    let mut group = c.benchmark_group("csv_render");
    group.sample_size(100);

    group.bench_function("render_100x10", |b| {
        b.iter(|| {
            black_box(recorder.to_csv());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lap_recording,
    bench_lap_closure,
    bench_csv_render
);
criterion_main!(benches);
