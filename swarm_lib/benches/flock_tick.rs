use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swarm_lib::{options::SimOptions, simulation::Simulation};

// One O(n²) flock tick at the interactive agent counts the simulation
// is meant for.
fn criterion_benchmark(c: &mut Criterion) {
    for no_boids in [40_usize, 100, 250] {
        let options = SimOptions {
            init_boids: no_boids,
            seed: Some(42),
            ..Default::default()
        };
        let mut sim = Simulation::new(&options);

        c.bench_function(&format!("flock tick {no_boids}"), |b| {
            b.iter(|| black_box(sim.step()))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
