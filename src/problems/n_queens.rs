//! The n-queens puzzle as a binary CSP.
//!
//! One variable per board row holding the queen's column. Every row pair is
//! constrained extensionally: columns must differ and must not lie on a
//! shared diagonal.

use crate::{
    error::Result,
    solver::model::{Assignment, Csp, ValuePair, VarId},
};

/// Builds the model for an `n` x `n` board.
pub fn build_model(n: usize) -> Result<Csp> {
    let mut model = Csp::new();
    for row in 0..n {
        model.add_variable(row as VarId, 0..n as i64)?;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let row_distance = (j - i) as i64;
            let allowed: Vec<ValuePair> = (0..n as i64)
                .flat_map(|ci| {
                    (0..n as i64)
                        .filter(move |&cj| ci != cj && (ci - cj).abs() != row_distance)
                        .map(move |cj| (ci, cj))
                })
                .collect();
            model.add_constraint(i as VarId, j as VarId, allowed)?;
        }
    }

    Ok(model)
}

/// Whether `assignment` places `n` mutually non-attacking queens.
pub fn is_valid(n: usize, assignment: &Assignment) -> bool {
    if assignment.len() != n {
        return false;
    }
    for i in 0..n as VarId {
        for j in (i + 1)..n as VarId {
            let (Some(&ci), Some(&cj)) = (assignment.get(&i), assignment.get(&j)) else {
                return false;
            };
            if ci == cj || (ci - cj).abs() == i64::from(j - i) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::solver::{
        config::{SolverConfig, ValueOrder},
        engine::SolverEngine,
    };

    use super::*;

    #[test]
    fn solves_six_queens() {
        let model = build_model(6).unwrap();
        let mut engine = SolverEngine::default();
        let solution = engine.solve(&model).expect("6-queens is solvable");
        assert!(is_valid(6, &solution));
    }

    #[test]
    fn solves_eight_queens_with_lcv() {
        let model = build_model(8).unwrap();
        let mut engine = SolverEngine::new(
            SolverConfig::default().with_value_order(ValueOrder::LeastConstrainingValue),
        );
        let solution = engine.solve(&model).expect("8-queens is solvable");
        assert!(is_valid(8, &solution));
    }

    #[test]
    fn three_queens_is_unsolvable() {
        let model = build_model(3).unwrap();
        let mut engine = SolverEngine::default();
        assert!(engine.solve(&model).is_none());
    }
}
