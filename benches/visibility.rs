//! Visibility pipeline benchmarks over the sample room catalog.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drishti::{Point, Room, RoomLayout, VisibilityConfig, VisibilityEngine};

fn bench_rooms(c: &mut Criterion) {
    let layout = RoomLayout::default();
    let engine = VisibilityEngine::default();
    let viewpoint = Point::new(330.0, 330.0);

    for room in Room::catalog(7) {
        let walls = room.build(&layout);
        c.bench_function(&format!("visibility/{}", room.name()), |b| {
            b.iter(|| {
                engine
                    .compute(black_box(viewpoint), black_box(walls.walls()))
                    .unwrap()
            })
        });
    }
}

fn bench_cull_toggle(c: &mut Criterion) {
    let layout = RoomLayout::default();
    let walls = Room::RandomMaze { seed: 7 }.build(&layout);
    let viewpoint = Point::new(330.0, 330.0);

    let culled = VisibilityEngine::default();
    let direct = VisibilityEngine::new(VisibilityConfig {
        coarse_cull: false,
        ..VisibilityConfig::default()
    });

    c.bench_function("visibility/random-maze/culled", |b| {
        b.iter(|| culled.compute(black_box(viewpoint), walls.walls()).unwrap())
    });
    c.bench_function("visibility/random-maze/direct", |b| {
        b.iter(|| direct.compute(black_box(viewpoint), walls.walls()).unwrap())
    });
}

criterion_group!(benches, bench_rooms, bench_cull_toggle);
criterion_main!(benches);
