use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sensor_fleet::{create_sensor, Ingestor, ReadingSimulator, SensorKind, SensorRegistry};
use sensor_fleet_core::ReadingSequence;

fn benchmark_sequence_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_average");

    for size in [10usize, 1_000, 100_000].iter() {
        let ints: ReadingSequence<i32> = (0..*size as i32).collect();
        let floats: ReadingSequence<f32> = (0..*size).map(|v| v as f32 * 0.1).collect();

        group.bench_with_input(BenchmarkId::new("i32", size), &ints, |b, seq| {
            b.iter(|| black_box(seq.average()));
        });
        group.bench_with_input(BenchmarkId::new("f32", size), &floats, |b, seq| {
            b.iter(|| black_box(seq.average()));
        });
    }

    group.finish();
}

fn benchmark_find_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_id");

    for count in [10usize, 100, 1_000].iter() {
        let mut registry = SensorRegistry::new();
        for i in 0..*count {
            registry.add(create_sensor(SensorKind::ALL[i % 3], format!("S-{}", i), "Bench"));
        }
        let last = format!("S-{}", count - 1);

        group.bench_with_input(BenchmarkId::new("last", count), &last, |b, id| {
            b.iter(|| black_box(registry.find_by_id(id).is_some()));
        });
    }

    group.finish();
}

fn benchmark_ingest(c: &mut Criterion) {
    let lines = ReadingSimulator::with_seed(42).generate(1_000);
    let ingestor = Ingestor::default();

    c.bench_function("ingest_1000_lines", |b| {
        b.iter(|| {
            let mut registry = SensorRegistry::new();
            for line in &lines {
                let _ = black_box(ingestor.apply_line(&mut registry, line));
            }
            registry.len()
        });
    });
}

criterion_group!(
    benches,
    benchmark_sequence_average,
    benchmark_find_by_id,
    benchmark_ingest
);
criterion_main!(benches);
