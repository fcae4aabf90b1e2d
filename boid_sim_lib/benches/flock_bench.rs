use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boid_sim_lib::options::SimOptions;
use boid_sim_lib::run_headless;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_ticks");

    for no_boids in [64_usize, 256, 512] {
        let options = SimOptions {
            init_boids: no_boids,
            ..Default::default()
        };

        group.bench_function(format!("tick_100_boids_{}", no_boids), |b| {
            b.iter(|| run_headless(black_box(100), &options).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
