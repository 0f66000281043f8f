use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scrollspace::geometry::{grid_helper, torus, uv_sphere};

fn bench_torus(c: &mut Criterion) {
    let mut group = c.benchmark_group("torus");
    for (radial, tubular) in [(16, 100), (32, 200), (64, 400)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{radial}x{tubular}")),
            &(radial, tubular),
            |b, &(radial, tubular)| {
                b.iter(|| torus(black_box(10.0), black_box(3.0), radial, tubular));
            },
        );
    }
    group.finish();
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_sphere");
    for segments in [12, 24, 48] {
        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &segments,
            |b, &segments| {
                b.iter(|| uv_sphere(black_box(1.0), segments, segments));
            },
        );
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    c.bench_function("grid_helper_200x50", |b| {
        b.iter(|| {
            grid_helper(
                black_box(200.0),
                black_box(50),
                [0.25, 0.25, 0.25],
                [0.5, 0.5, 0.5],
            )
        });
    });
}

criterion_group!(benches, bench_torus, bench_sphere, bench_grid);
criterion_main!(benches);
