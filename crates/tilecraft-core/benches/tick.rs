//! Benchmarks for world generation and the per-tick update
//!
//! Run with: cargo bench --package tilecraft-core --bench tick

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tilecraft_core::{MoveIntent, SimConfig, Simulation, Terrain, WorldGenConfig};

fn benchmark_generation(c: &mut Criterion) {
    let config = WorldGenConfig::default();
    let mut group = c.benchmark_group("generation");
    group.throughput(Throughput::Elements((config.width * config.height) as u64));

    group.bench_function("default_world", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(Terrain::generate(config.clone(), seed))
        });
    });

    group.finish();
}

fn benchmark_tick(c: &mut Criterion) {
    let mut sim = match Simulation::try_new(SimConfig::default(), WorldGenConfig::default(), 42) {
        Ok(sim) => sim,
        Err(e) => panic!("default configuration rejected: {e}"),
    };
    sim.input_mut().set_movement_intent(MoveIntent::Right);

    c.bench_function("tick_default_world", |b| {
        let mut n = 0u64;
        b.iter(|| {
            n += 1;
            if n % 30 == 0 {
                sim.input_mut().trigger_jump();
            }
            if n % 45 == 0 {
                sim.input_mut().trigger_action();
            }
            black_box(sim.tick())
        });
    });
}

criterion_group!(benches, benchmark_generation, benchmark_tick);
criterion_main!(benches);
