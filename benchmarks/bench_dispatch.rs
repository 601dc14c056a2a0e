use std::fs;
use std::hint::black_box;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use logtally::{count_lines, BracketParser, DispatchConfig, Dispatcher, RecordParser};

const LEVELS: [&str; 6] = ["Trace", "Debug", "Info", "Warn", "Error", "Fatal"];

fn sample_log(lines: usize, seed: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "[2024-05-01 12:00:{:02}] [{}] [svc{}] request handled in {}ms\n",
                i % 60,
                LEVELS[(i + seed) % LEVELS.len()],
                (i * 31 + seed) % 17,
                i % 250
            )
        })
        .collect()
}

fn log_dir(files: usize, lines: usize) -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().expect("temp dir");
    let paths = (0..files)
        .map(|i| {
            let path = dir.path().join(format!("app-{:04}.log", i));
            fs::write(&path, sample_log(lines, i)).expect("write log");
            path
        })
        .collect();
    (dir, paths)
}

fn bench_count_lines(c: &mut Criterion) {
    let input = sample_log(10_000, 0);
    let parser = BracketParser::new();
    c.bench_function("count_lines_10k", |b| {
        b.iter(|| {
            black_box(count_lines(Cursor::new(black_box(input.as_bytes())), &parser).unwrap());
        });
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let (_dir, paths) = log_dir(64, 2_000);
    let parser: Arc<dyn RecordParser> = Arc::new(BracketParser::new());

    for workers in [1, 4, num_cpus::get()] {
        let dispatcher = Dispatcher::new(DispatchConfig::with_workers(workers));
        c.bench_function(&format!("dispatch_64_files_{}_workers", workers), |b| {
            b.iter(|| {
                black_box(dispatcher.run(paths.clone(), Arc::clone(&parser)).unwrap());
            });
        });
    }
}

criterion_group!(benches, bench_count_lines, bench_dispatch);
criterion_main!(benches);
