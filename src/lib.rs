//! Vinculum is a solver for binary constraint satisfaction problems (CSPs).
//!
//! A problem is described extensionally: every variable has a finite integer
//! domain, and every constraint between a pair of variables is the explicit
//! set of value pairs the two variables may jointly take. The engine combines
//! AC-3 preprocessing with backtracking search and selectable look-ahead
//! inference (forward checking or full arc-consistency maintenance).
//!
//! # Core Concepts
//!
//! - **[`Csp`]**: The model store. Register variables with their domains and
//!   binary constraints with their allowed value pairs.
//! - **[`SolverConfig`]**: Chooses the variable-ordering, value-ordering and
//!   inference strategy for a solve, as independent options.
//! - **[`SolverEngine`]**: Runs the search and exposes per-solve statistics.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving for `A` in `{1, 2}` and `B` in `{1}` where the only allowed joint
//! assignment is `(2, 1)`. The solver must deduce `A = 2`.
//!
//! ```
//! use vinculum::solver::config::SolverConfig;
//! use vinculum::solver::engine::SolverEngine;
//! use vinculum::solver::model::Csp;
//!
//! let mut model = Csp::new();
//! model.add_variable(0, [1, 2]).unwrap();
//! model.add_variable(1, [1]).unwrap();
//! model.add_constraint(0, 1, [(2, 1)]).unwrap();
//!
//! let mut engine = SolverEngine::new(SolverConfig::default());
//! let solution = engine.solve(&model).expect("problem is satisfiable");
//!
//! assert_eq!(solution[&0], 2);
//! assert_eq!(solution[&1], 1);
//! assert!(engine.constraint_checks() > 0);
//! ```
//!
//! [`Csp`]: solver::model::Csp
//! [`SolverConfig`]: solver::config::SolverConfig
//! [`SolverEngine`]: solver::engine::SolverEngine

pub mod error;
pub mod problems;
pub mod solver;
