use vinculum::{
    problems::n_queens,
    solver::{config::SolverConfig, engine::SolverEngine},
};

fn main() {
    tracing_subscriber::fmt::init();
    let n = 8;
    println!("Solving {n}-queens...");

    let model = n_queens::build_model(n).expect("model is well-formed");
    let mut engine = SolverEngine::new(SolverConfig::default());

    match engine.solve(&model) {
        Some(solution) => {
            for row in 0..n as u32 {
                let queen_col = solution[&row];
                let line: String = (0..n as i64)
                    .map(|col| if col == queen_col { 'Q' } else { '.' })
                    .collect();
                println!("{line}");
            }
            println!(
                "Explored {} nodes, checked {} constraints.",
                engine.nodes_explored(),
                engine.constraint_checks()
            );
        }
        None => println!("No solution found."),
    }
}
