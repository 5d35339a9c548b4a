use clap::{Parser, ValueEnum};
use vinculum::{
    problems::circuit_board::CircuitBoard,
    solver::{
        config::{InferenceMode, SolverConfig, ValueOrder, VariableOrder},
        engine::SolverEngine,
        stats::{render_stats_table, SearchStats},
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InferenceArg {
    None,
    ForwardChecking,
    Mac3,
}

impl From<InferenceArg> for InferenceMode {
    fn from(arg: InferenceArg) -> Self {
        match arg {
            InferenceArg::None => InferenceMode::None,
            InferenceArg::ForwardChecking => InferenceMode::ForwardChecking,
            InferenceArg::Mac3 => InferenceMode::MaintainingArcConsistency,
        }
    }
}

/// Packs the canonical seven-component circuit board.
#[derive(Debug, Parser)]
struct Args {
    /// Inference strategy for the solve.
    #[arg(long, value_enum, default_value_t = InferenceArg::ForwardChecking)]
    inference: InferenceArg,

    /// Pick the first unassigned variable instead of MRV.
    #[arg(long)]
    registration_order: bool,

    /// Order values by least-constraining-value instead of domain order.
    #[arg(long)]
    lcv: bool,

    /// Solve once per inference strategy and print a comparison table.
    #[arg(long)]
    compare: bool,

    /// Emit the solve statistics as JSON.
    #[arg(long)]
    json: bool,
}

fn config_from(args: &Args) -> SolverConfig {
    SolverConfig {
        variable_order: if args.registration_order {
            VariableOrder::RegistrationOrder
        } else {
            VariableOrder::MinimumRemainingValues
        },
        value_order: if args.lcv {
            ValueOrder::LeastConstrainingValue
        } else {
            ValueOrder::DomainOrder
        },
        inference: args.inference.into(),
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let board = CircuitBoard::standard();
    let model = board.build_model().expect("standard board is well-formed");

    if args.compare {
        let mut rows: Vec<(&str, SearchStats)> = Vec::new();
        for (label, inference) in [
            ("none", InferenceMode::None),
            ("forward checking", InferenceMode::ForwardChecking),
            ("MAC-3", InferenceMode::MaintainingArcConsistency),
        ] {
            let mut engine =
                SolverEngine::new(config_from(&args).with_inference(inference));
            let solved = engine.solve(&model).is_some();
            assert!(solved, "the standard board should always be packable");
            rows.push((label, engine.stats().clone()));
        }
        let borrowed: Vec<(&str, &SearchStats)> =
            rows.iter().map(|(label, stats)| (*label, stats)).collect();
        println!("{}", render_stats_table(&borrowed));
        return;
    }

    let mut engine = SolverEngine::new(config_from(&args));
    match engine.solve(&model) {
        Some(solution) => {
            for row in board.render(&solution) {
                println!("{row}");
            }
        }
        None => println!("Solution not found"),
    }

    if args.json {
        let stats =
            serde_json::to_string_pretty(engine.stats()).expect("stats serialize cleanly");
        println!("{stats}");
    } else {
        println!("Nodes explored: {}", engine.nodes_explored());
        println!("Constraints checked: {}", engine.constraint_checks());
        println!("Search time: {:?}", engine.stats().duration);
    }
}
