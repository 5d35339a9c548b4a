use vinculum::solver::{
    config::SolverConfig,
    engine::SolverEngine,
    model::{Csp, ValuePair, VarId},
};

const REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
const COLOURS: [&str; 3] = ["red", "green", "blue"];

fn not_equal() -> Vec<ValuePair> {
    (0..COLOURS.len() as i64)
        .flat_map(|x| {
            (0..COLOURS.len() as i64)
                .filter(move |&y| y != x)
                .map(move |y| (x, y))
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt::init();
    println!("Solving the map colouring problem...");

    let mut model = Csp::new();
    for id in 0..REGIONS.len() as VarId {
        model
            .add_variable(id, 0..COLOURS.len() as i64)
            .expect("regions are distinct");
    }

    let adjacencies: [(VarId, VarId); 9] = [
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 5),
    ];
    for (a, b) in adjacencies {
        model
            .add_constraint(a, b, not_equal())
            .expect("endpoints are registered");
    }

    let mut engine = SolverEngine::new(SolverConfig::default());
    match engine.solve(&model) {
        Some(solution) => {
            println!("Solution found!");
            for (id, region) in REGIONS.iter().enumerate() {
                let colour = COLOURS[solution[&(id as VarId)] as usize];
                println!("{region}: {colour}");
            }
        }
        None => println!("No solution found."),
    }
}
