use criterion::{Criterion, black_box, criterion_group, criterion_main};
use liuyao_base::{
    DayPillar, Hexagram, Palace, ReadingConfig, Trigram, auxiliary_stars, cast_reading,
    coins_from_counts, najia, resolve_palace,
};

fn palace_bench(c: &mut Criterion) {
    let pure = Hexagram::pure(Trigram::Kan);
    let returning = Hexagram::new(Trigram::Dui, Trigram::Zhen);

    let mut group = c.benchmark_group("palace");
    group.bench_function("resolve_pure", |b| b.iter(|| resolve_palace(black_box(pure))));
    group.bench_function("resolve_returning_soul", |b| {
        b.iter(|| resolve_palace(black_box(returning)))
    });
    group.bench_function("resolve_all_64", |b| {
        b.iter(|| Hexagram::all().map(|h| resolve_palace(black_box(h)).world_line).sum::<u8>())
    });
    group.finish();
}

fn najia_bench(c: &mut Criterion) {
    let tai = Hexagram::new(Trigram::Qian, Trigram::Kun);

    let mut group = c.benchmark_group("najia");
    group.bench_function("najia_tai", |b| {
        b.iter(|| najia(black_box(&tai), Palace::Kun.element()))
    });
    group.finish();
}

fn reading_bench(c: &mut Criterion) {
    let still = coins_from_counts(&[1, 1, 1, 2, 2, 2]).unwrap();
    let moving = coins_from_counts(&[0, 1, 2, 3, 1, 0]).unwrap();
    let day = DayPillar::from_cycle_index(0);
    let config = ReadingConfig::default();

    let mut group = c.benchmark_group("reading");
    group.bench_function("cast_still", |b| {
        b.iter(|| cast_reading(black_box(still), black_box(day), &config))
    });
    group.bench_function("cast_moving", |b| {
        b.iter(|| cast_reading(black_box(moving), black_box(day), &config))
    });
    group.bench_function("auxiliary_stars", |b| b.iter(|| auxiliary_stars(black_box(&day))));
    group.finish();
}

criterion_group!(benches, palace_bench, najia_bench, reading_bench);
criterion_main!(benches);
