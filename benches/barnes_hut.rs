use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rs_nbody::barnes_hut::{direct_sum, BarnesHutTree};
use rs_nbody::initialization::DiskInitializer;
use rs_nbody::simulation::Simulation;
use rs_nbody::utils::SimulationConfig;

pub fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");
    group.sample_size(50);

    for count in [1_024, 8_192, 32_768] {
        let config = SimulationConfig::default().with_num_bodies(count);
        let bodies = DiskInitializer::generate(&config).expect("Failed to generate disk");
        group.bench_with_input(BenchmarkId::from_parameter(count), &bodies, |b, bodies| {
            b.iter(|| BarnesHutTree::build(config.root_octant, black_box(bodies), Some(0)))
        });
    }
    group.finish();
}

pub fn bench_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_on_one_body");
    let config = SimulationConfig::default().with_num_bodies(8_192);
    let bodies = DiskInitializer::generate(&config).expect("Failed to generate disk");
    let tree = BarnesHutTree::build(config.root_octant, &bodies, Some(0));

    group.bench_function("direct_sum", |b| b.iter(|| direct_sum(black_box(&bodies), 100, &config)));

    for theta in [0.25, 0.75, 1.5] {
        let config = config.with_opening_threshold(theta);
        group.bench_with_input(BenchmarkId::new("tree", theta), &theta, |b, _| {
            b.iter(|| {
                let mut target = bodies[100];
                tree.interact(100, black_box(&mut target), &config);
                target
            })
        });
    }
    group.finish();
}

pub fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");
    group.sample_size(10);
    let config = SimulationConfig::default().with_num_bodies(8_192);
    let bodies = DiskInitializer::generate(&config).expect("Failed to generate disk");
    let mut sim = Simulation::new(bodies, config).expect("Failed to create simulation");

    group.bench_function("8192_bodies", |b| b.iter(|| sim.step().expect("Step failed")));
    group.finish();
}

criterion_group!(benches, bench_tree_build, bench_force, bench_step);
criterion_main!(benches);
