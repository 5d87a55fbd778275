use criterion::{Criterion, criterion_group, criterion_main};
use floodit_core::{BoardGenerator, Color, GameConfig, Grid, RandomBoardGenerator, flood_region};
use std::hint::black_box;

fn bench_flood_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_region");

    let uniform = Grid::build(128, |_, _| Color::BLACK).expect("valid grid");
    group.bench_function("uniform_128", |b| {
        b.iter(|| flood_region(black_box(uniform.origin()), Color::BLACK).len())
    });

    // a serpentine corridor forces the deepest possible search
    let corridor = Grid::build(128, |x, y| {
        let open_row = y % 2 == 0;
        let gap = if y % 4 == 1 { x == 127 } else { x == 0 };
        if open_row || gap { Color::BLACK } else { Color::WHITE }
    })
    .expect("valid grid");
    group.bench_function("serpentine_128", |b| {
        b.iter(|| flood_region(black_box(corridor.origin()), Color::BLACK).len())
    });

    for colors in [3, 6, 9] {
        let config = GameConfig::new(64, colors, 60).expect("valid config");
        let board = RandomBoardGenerator::new(1).generate(&config).expect("valid board");
        let origin = board.grid().origin();
        group.bench_function(format!("random_64_{colors}"), |b| {
            b.iter(|| flood_region(black_box(origin), origin.color()).len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flood_region);
criterion_main!(benches);
