use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hexsweeper_core::{BoardGenerator, GameConfig, RandomBoardGenerator};
use std::hint::black_box;

const TIERS: [(&str, u16, u16, f64); 4] = [
    ("small", 5, 6, 0.1),
    ("medium", 16, 16, 0.15),
    ("large", 30, 40, 0.2),
    ("huge", 200, 200, 0.2),
];

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (name, rows, cols, density) in TIERS {
        let config = GameConfig::new(rows, cols, density).expect("valid tier");
        let mut generator = RandomBoardGenerator::new(0x5eed);

        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| black_box(generator.generate(config).expect("generation succeeds")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
