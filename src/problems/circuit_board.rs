//! Rectangle packing on a circuit board.
//!
//! Each component is an axis-aligned rectangle of fixed height and width
//! that must be placed, without rotation, so that no two components overlap
//! and nothing hangs over the board edge. One variable per component; its
//! domain is the set of feasible top-left cells encoded as
//! `row * cols + col`, pre-filtered for overflow. Every component pair gets
//! an explicit non-overlap relation.

use crate::{
    error::Result,
    solver::model::{Assignment, Csp, ValuePair, VarId},
};

/// A rectangular component, `height` rows by `width` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub height: usize,
    pub width: usize,
}

impl Piece {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

/// A packing instance: a `rows` x `cols` board and the components to place.
#[derive(Debug, Clone)]
pub struct CircuitBoard {
    rows: usize,
    cols: usize,
    pieces: Vec<Piece>,
}

impl CircuitBoard {
    pub fn new(rows: usize, cols: usize, pieces: Vec<Piece>) -> Self {
        Self { rows, cols, pieces }
    }

    /// The canonical 4x10 instance with seven components. The component
    /// areas sum to exactly 40 cells, so any solution tiles the board.
    pub fn standard() -> Self {
        let pieces = [(2, 3), (2, 5), (3, 2), (1, 7), (2, 1), (1, 7), (1, 2)]
            .into_iter()
            .map(|(h, w)| Piece::new(h, w))
            .collect();
        Self::new(4, 10, pieces)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Builds the CSP model for this instance.
    ///
    /// Fails with an `EmptyDomain` model error if some component does not
    /// fit on the board at all.
    pub fn build_model(&self) -> Result<Csp> {
        let mut model = Csp::new();

        for (i, piece) in self.pieces.iter().enumerate() {
            model.add_variable(i as VarId, self.feasible_positions(piece))?;
        }

        for i in 0..self.pieces.len() {
            for j in (i + 1)..self.pieces.len() {
                let allowed: Vec<ValuePair> = self
                    .feasible_positions(&self.pieces[i])
                    .flat_map(|first| {
                        self.feasible_positions(&self.pieces[j])
                            .filter(move |&second| {
                                !self.overlaps(&self.pieces[i], first, &self.pieces[j], second)
                            })
                            .map(move |second| (first, second))
                    })
                    .collect();
                model.add_constraint(i as VarId, j as VarId, allowed)?;
            }
        }

        Ok(model)
    }

    /// Renders a solution as one string per board row, each component drawn
    /// with the letter `'a' + index` and free cells as `'.'`.
    ///
    /// Instances with more than 26 components render the excess with
    /// wrapped-around letters.
    pub fn render(&self, assignment: &Assignment) -> Vec<String> {
        let mut grid = vec![vec!['.'; self.cols]; self.rows];
        for (i, piece) in self.pieces.iter().enumerate() {
            let Some(&position) = assignment.get(&(i as VarId)) else {
                continue;
            };
            let (row, col) = self.cell(position);
            let letter = (b'a' + (i % 26) as u8) as char;
            for r in row..row + piece.height {
                for c in col..col + piece.width {
                    grid[r][c] = letter;
                }
            }
        }
        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    fn cell(&self, position: i64) -> (usize, usize) {
        let position = position as usize;
        (position / self.cols, position % self.cols)
    }

    fn feasible_positions<'a>(&'a self, piece: &'a Piece) -> impl Iterator<Item = i64> + 'a {
        (0..self.rows * self.cols).filter_map(move |j| {
            let (row, col) = (j / self.cols, j % self.cols);
            (row + piece.height <= self.rows && col + piece.width <= self.cols).then_some(j as i64)
        })
    }

    fn overlaps(&self, a: &Piece, pos_a: i64, b: &Piece, pos_b: i64) -> bool {
        let (top_a, left_a) = self.cell(pos_a);
        let (top_b, left_b) = self.cell(pos_b);
        let (right_a, bottom_a) = (left_a + a.width, top_a + a.height);
        let (right_b, bottom_b) = (left_b + b.width, top_b + b.height);

        let left = left_a.max(left_b);
        let right = right_a.min(right_b);
        let top = top_a.max(top_b);
        let bottom = bottom_a.min(bottom_b);
        right > left && bottom > top
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::Error,
        solver::{
            config::{InferenceMode, SolverConfig},
            engine::SolverEngine,
        },
    };

    use super::*;

    /// Every cell of every piece must be on the board and covered exactly
    /// once, and each piece's cells must form its declared rectangle.
    fn assert_valid_packing(board: &CircuitBoard, assignment: &Assignment) {
        let mut coverage = vec![vec![0u32; board.cols()]; board.rows()];
        for (i, piece) in board.pieces().iter().enumerate() {
            let position = assignment[&(i as VarId)];
            let (row, col) = board.cell(position);
            assert!(row + piece.height <= board.rows(), "piece {i} overflows");
            assert!(col + piece.width <= board.cols(), "piece {i} overflows");
            for r in row..row + piece.height {
                for c in col..col + piece.width {
                    coverage[r][c] += 1;
                }
            }
        }
        for row in &coverage {
            for &count in row {
                assert!(count <= 1, "cell covered more than once");
            }
        }
    }

    #[test]
    fn packs_the_standard_board() {
        let board = CircuitBoard::standard();
        let model = board.build_model().unwrap();

        let mut engine = SolverEngine::default();
        let solution = engine.solve(&model).expect("standard board is packable");
        assert_valid_packing(&board, &solution);

        // Areas sum to the full 40 cells, so the rendering has no gaps.
        let rendered = board.render(&solution);
        assert_eq!(rendered.len(), 4);
        assert!(rendered.iter().all(|row| !row.contains('.')));
    }

    #[test]
    fn packs_the_standard_board_with_mac3() {
        let board = CircuitBoard::standard();
        let model = board.build_model().unwrap();

        let mut engine = SolverEngine::new(
            SolverConfig::default().with_inference(InferenceMode::MaintainingArcConsistency),
        );
        let solution = engine.solve(&model).expect("standard board is packable");
        assert_valid_packing(&board, &solution);
    }

    #[test]
    fn packs_a_smaller_board_with_slack() {
        // 29 cells of pieces on a 30-cell board: one cell stays free.
        let pieces = vec![
            Piece::new(2, 3),
            Piece::new(2, 5),
            Piece::new(3, 2),
            Piece::new(1, 7),
        ];
        let board = CircuitBoard::new(3, 10, pieces);
        let model = board.build_model().unwrap();

        let mut engine = SolverEngine::default();
        let solution = engine.solve(&model).expect("board is packable");
        assert_valid_packing(&board, &solution);

        let rendered = board.render(&solution);
        let free: usize = rendered
            .iter()
            .map(|row| row.chars().filter(|&c| c == '.').count())
            .sum();
        assert_eq!(free, 1);
    }

    #[test]
    fn reports_unpackable_boards_as_unsolvable() {
        // Two 1x2 pieces on a 1x2 board: both fit alone, never together.
        let board = CircuitBoard::new(1, 2, vec![Piece::new(1, 2), Piece::new(1, 2)]);
        let model = board.build_model().unwrap();

        let mut engine = SolverEngine::default();
        assert_eq!(engine.solve(&model), None);
    }

    #[test]
    fn a_piece_that_never_fits_is_a_model_error() {
        let board = CircuitBoard::new(2, 2, vec![Piece::new(3, 1)]);
        assert_eq!(board.build_model().unwrap_err(), Error::EmptyDomain(0));
    }
}
