use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::{fs::File, io::Write, path::PathBuf};
use tempfile::tempdir;
use wordscout::ScanStrategy;

fn create_test_files(
    dir: &tempfile::TempDir,
    file_count: usize,
    lines_per_file: usize,
) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::with_capacity(file_count);
    for i in 0..file_count {
        let file_path = dir.path().join(format!("words_{}.txt", i));
        let mut file = File::create(&file_path)?;
        for j in 0..lines_per_file {
            if (i + j) % 7 == 0 {
                writeln!(file, "Line {} where we choose what to come back to", j)?;
            } else {
                writeln!(file, "Line {} in file {} with nothing relevant", j, i)?;
            }
        }
        files.push(file_path);
    }
    Ok(files)
}

fn bench_file_scaling(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let keywords: Vec<String> = ["choose", "come", "cost"]
        .iter()
        .map(|k| k.to_string())
        .collect();

    let mut group = c.benchmark_group("File Scaling");
    for file_count in [1, 10, 50] {
        let files = create_test_files(&dir, file_count, 200).unwrap();
        for strategy in ScanStrategy::ALL {
            let scanner = strategy.scanner();
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), file_count),
                &files,
                |b, files| b.iter(|| black_box(scanner.scan(files, &keywords))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_file_scaling);
criterion_main!(benches);
