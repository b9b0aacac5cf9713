use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph_core::{
    FunctionId, Graph, GraphConfig, GridSpec, ShapeParameters, TransitionState, evaluate_grid,
    noise3,
};

const RESOLUTION: u32 = 200;
const TIME: f32 = 1.25;

fn bench_noise3(c: &mut Criterion) {
    c.bench_function("noise3 64k samples", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..65_536u32 {
                let x = (i & 255) as f32 * 0.031;
                let y = (i >> 8) as f32 * 0.027;
                acc += noise3(black_box(x), black_box(y), black_box(0.75));
            }
            acc
        })
    });
}

fn bench_idle_functions(c: &mut Criterion) {
    let spec = GridSpec::new(RESOLUTION).unwrap();
    let params = ShapeParameters::default();
    let mut group = c.benchmark_group("idle sweep 200x200");
    for id in FunctionId::ALL {
        let state = TransitionState::new(id);
        group.bench_with_input(BenchmarkId::from_parameter(id), &state, |b, state| {
            b.iter(|| evaluate_grid(spec, state, &params, black_box(TIME)).unwrap())
        });
    }
    group.finish();
}

fn bench_transition_sweep(c: &mut Criterion) {
    let spec = GridSpec::new(RESOLUTION).unwrap();
    let params = ShapeParameters::default();
    let mut state = TransitionState::new(FunctionId::SimplexNoise);
    state.begin(FunctionId::BandedStarTorus, 1.0);
    state.advance(0.5);

    c.bench_function("SimplexNoise -> BandedStarTorus sweep 200x200", |b| {
        b.iter(|| evaluate_grid(spec, &state, &params, black_box(TIME)).unwrap())
    });
}

fn bench_graph_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph::update");
    for resolution in [100u32, 500, 1000] {
        let config = GraphConfig {
            resolution,
            function: FunctionId::Ripple,
            ..GraphConfig::default()
        };
        let mut graph = Graph::new(config).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |b, _| {
                let mut t = 0.0f32;
                b.iter(|| {
                    t += 1.0 / 60.0;
                    graph.update(1.0 / 60.0, t).unwrap().positions.len()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    surface_benchmarks,
    bench_noise3,
    bench_idle_functions,
    bench_transition_sweep,
    bench_graph_update
);
criterion_main!(surface_benchmarks);
