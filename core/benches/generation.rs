use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::*;

const TIERS: [(&str, FieldConfig); 3] = [
    ("beginner", FieldConfig::new_unchecked(9, 9, 10)),
    ("expert", FieldConfig::new_unchecked(16, 30, 99)),
    ("dense", FieldConfig::new_unchecked(30, 30, 800)),
];

fn generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in TIERS {
        for placement in [Placement::Rejection, Placement::Shuffle] {
            group.bench_with_input(
                BenchmarkId::new(format!("{placement:?}"), name),
                &config,
                |b, &config| {
                    let mut seed = 0;
                    b.iter(|| {
                        seed += 1;
                        Field::generate(config, RandomMineGenerator::new(seed, placement))
                            .map(black_box)
                    })
                },
            );
        }
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((256, 256), &[(255, 255)]).unwrap();
    c.bench_function("open/flood_256", |b| {
        b.iter_batched(
            || Field::from_layout(layout.clone()),
            |mut field| field.open(black_box((0, 0))),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, generation, flood_fill);
criterion_main!(benches);
