use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vinculum::{
    problems::{circuit_board::CircuitBoard, n_queens},
    solver::{
        config::{InferenceMode, SolverConfig, VariableOrder},
        engine::SolverEngine,
        model::Csp,
    },
};

fn n_queens_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Heuristics");
    let model = n_queens::build_model(10).expect("model is well-formed");

    for (label, variable_order) in [
        ("RegistrationOrder", VariableOrder::RegistrationOrder),
        ("MinimumRemainingValues", VariableOrder::MinimumRemainingValues),
    ] {
        group.bench_function(format!("N=10, {label}"), |b| {
            let config = SolverConfig::default().with_variable_order(variable_order);
            b.iter(|| {
                let mut engine = SolverEngine::new(config);
                let solution = engine.solve(black_box(&model));
                assert!(solution.is_some());
            })
        });
    }

    group.finish();
}

fn n_queens_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Inference");
    let model = n_queens::build_model(10).expect("model is well-formed");

    for (label, inference) in [
        ("None", InferenceMode::None),
        ("ForwardChecking", InferenceMode::ForwardChecking),
        ("MAC-3", InferenceMode::MaintainingArcConsistency),
    ] {
        group.bench_function(format!("N=10, {label}"), |b| {
            let config = SolverConfig::default().with_inference(inference);
            b.iter(|| {
                let mut engine = SolverEngine::new(config);
                let solution = engine.solve(black_box(&model));
                assert!(solution.is_some());
            })
        });
    }

    group.finish();
}

fn n_queens_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Performance");

    for n in [8, 10, 12].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let model = n_queens::build_model(n).expect("model is well-formed");
            b.iter(|| {
                let mut engine = SolverEngine::default();
                let solution = engine.solve(black_box(&model));
                assert!(solution.is_some());
            });
        });
    }
    group.finish();
}

fn circuit_board_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Circuit Board");
    let board = CircuitBoard::standard();
    let model = board.build_model().expect("standard board is well-formed");

    for (label, inference) in [
        ("ForwardChecking", InferenceMode::ForwardChecking),
        ("MAC-3", InferenceMode::MaintainingArcConsistency),
    ] {
        group.bench_function(format!("4x10, {label}"), |b| {
            let config = SolverConfig::default().with_inference(inference);
            b.iter(|| {
                let mut engine = SolverEngine::new(config);
                let solution = engine.solve(black_box(&model));
                assert!(solution.is_some());
            })
        });
    }

    group.finish();
}

/// A random binary CSP with not-too-tight relations, reproducible via the
/// seed.
fn random_model(seed: u64, vars: u32, domain_size: i64, density: f64) -> Csp {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut model = Csp::new();
    for var in 0..vars {
        model
            .add_variable(var, 0..domain_size)
            .expect("variables are distinct");
    }
    for a in 0..vars {
        for b in (a + 1)..vars {
            if rng.gen_bool(density) {
                let allowed: Vec<(i64, i64)> = (0..domain_size)
                    .flat_map(|x| (0..domain_size).map(move |y| (x, y)))
                    .filter(|_| rng.gen_bool(0.7))
                    .collect();
                model
                    .add_constraint(a, b, allowed)
                    .expect("endpoints are registered");
            }
        }
    }
    model
}

fn random_instances(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Binary CSPs");
    let model = random_model(42, 12, 6, 0.4);

    for (label, inference) in [
        ("None", InferenceMode::None),
        ("ForwardChecking", InferenceMode::ForwardChecking),
        ("MAC-3", InferenceMode::MaintainingArcConsistency),
    ] {
        group.bench_function(format!("12 vars, {label}"), |b| {
            let config = SolverConfig::default().with_inference(inference);
            b.iter(|| {
                let mut engine = SolverEngine::new(config);
                // Outcome depends on the seed; only the search effort is
                // being measured.
                black_box(engine.solve(black_box(&model)));
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    n_queens_heuristics,
    n_queens_inference,
    n_queens_scaling,
    circuit_board_packing,
    random_instances
);
criterion_main!(benches);
