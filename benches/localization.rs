//! Localization Benchmarks
//!
//! Benchmarks for the per-tick hot path:
//! - Single ray casts against the map
//! - Weighing a full particle set (three casts per particle)
//! - Systematic resampling
//! - Path refinement
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use disha_nav::{
    cast, MotionEstimate, ParticleFilter, ParticleFilterConfig, PathPlanner, Point2D, Pose2D,
    Wall, WorldMap,
};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Bordered room with an L-shaped obstacle, matching the demo scenario.
fn benchmark_map() -> WorldMap {
    WorldMap::new(vec![
        Wall::from_coords(10.0, 10.0, 990.0, 10.0),
        Wall::from_coords(10.0, 990.0, 990.0, 990.0),
        Wall::from_coords(10.0, 10.0, 10.0, 990.0),
        Wall::from_coords(990.0, 10.0, 990.0, 990.0),
        Wall::from_coords(400.0, 400.0, 600.0, 400.0),
        Wall::from_coords(400.0, 400.0, 400.0, 600.0),
    ])
    .unwrap()
}

fn benchmark_filter(map: &WorldMap, n: usize) -> ParticleFilter {
    let config = ParticleFilterConfig {
        num_particles: n,
        seed: 12345,
        ..Default::default()
    };
    ParticleFilter::new(config, map)
}

// ============================================================================
// Group 1: Ray Casting
// ============================================================================

fn bench_raycast(c: &mut Criterion) {
    let mut group = c.benchmark_group("raycast");
    let map = benchmark_map();
    let origin = Point2D::new(200.0, 300.0);

    group.bench_function("cast_hit", |b| {
        b.iter(|| cast(black_box(&map), black_box(origin), black_box(0.7)))
    });

    group.bench_function("cast_grazing", |b| {
        // Nearly parallel to the top border, longest traversal.
        b.iter(|| cast(black_box(&map), black_box(origin), black_box(0.01)))
    });

    group.finish();
}

// ============================================================================
// Group 2: Particle Filter
// ============================================================================

fn bench_particle_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_filter");
    let map = benchmark_map();
    let truth = Pose2D::new(150.0, 150.0, 0.5);

    for n in [1000usize, 5000] {
        let mut filter = benchmark_filter(&map, n);
        let reading = filter.sensor().sense(&map, &truth);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("predict", n), &n, |b, _| {
            let motion = MotionEstimate::new(2.0, 0.05);
            b.iter(|| filter.predict(black_box(&motion)))
        });

        let mut filter = benchmark_filter(&map, n);
        group.bench_with_input(BenchmarkId::new("weigh", n), &n, |b, _| {
            b.iter(|| filter.weigh(black_box(&map), black_box(&reading)))
        });

        let mut filter = benchmark_filter(&map, n);
        filter.weigh(&map, &reading);
        group.bench_with_input(BenchmarkId::new("resample", n), &n, |b, _| {
            b.iter(|| filter.resample(black_box(&map)))
        });
    }

    group.finish();
}

// ============================================================================
// Group 3: Path Refinement
// ============================================================================

fn bench_planner(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner");
    let map = benchmark_map();

    group.bench_function("refactor_blocked", |b| {
        let mut planner = PathPlanner::new(Point2D::new(500.0, 500.0));
        let start = Point2D::new(100.0, 100.0);
        b.iter(|| {
            planner.refactor(black_box(&map), black_box(start));
        })
    });

    group.bench_function("refactor_clear", |b| {
        let mut planner = PathPlanner::new(Point2D::new(300.0, 100.0));
        let start = Point2D::new(100.0, 100.0);
        b.iter(|| {
            planner.refactor(black_box(&map), black_box(start));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_raycast, bench_particle_filter, bench_planner);
criterion_main!(benches);
