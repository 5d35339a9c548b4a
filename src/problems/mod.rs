//! Problem frontends: instance builders that translate a concrete problem
//! into a [`Csp`] model of variables, domains and allowed-pair constraints.
//!
//! These are collaborators of the engine, not part of it: the engine performs
//! no bounds checking beyond what a builder encodes in the supplied domains
//! and constraints.
//!
//! [`Csp`]: crate::solver::model::Csp

pub mod circuit_board;
pub mod n_queens;
