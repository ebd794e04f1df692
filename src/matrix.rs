//! Tabular dynamic-programming engine.
//!
//! [`DistanceMatrix::build`] fills the classic O(|source|·|target|) edit
//! distance table for one `(source, target, cost model)` triple. The built
//! matrix is immutable; callers query the minimum cost and reconstruct one
//! canonical alignment by backtracing the recorded operation tags.
//!
//! Rows are indexed by target position `i in 0..=|target|`, columns by source
//! position `j in 0..=|source|`, so `cell(i, j)` holds the minimum cumulative
//! cost of aligning `target[..i]` against `source[..j]`.

use crate::cost::CostModel;
use crate::path::{AlignmentPath, AlignmentStep, Coordinates, Operation};

/// One cell of the distance matrix: the incremental cost of the operation
/// that reached it, the cumulative minimum cost from the origin, and the
/// operation tag that produced it.
///
/// The origin cell `(0, 0)` is the only cell tagged [`Operation::Start`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub cost: f64,
    pub cumulative: f64,
    pub operation: Operation,
}

/// A fully built edit-distance matrix over borrowed sequences.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<'a, T> {
    source: &'a [T],
    target: &'a [T],
    /// Row-major over `(|target|+1) x (|source|+1)`.
    cells: Vec<Cell>,
}

impl<'a, T: Clone> DistanceMatrix<'a, T> {
    /// Compute the full matrix for `source` against `target`.
    ///
    /// Ties between candidate operations at a cell are broken by a fixed
    /// priority, substitute over delete over insert, so that [`backtrace`]
    /// reconstructs one reproducible canonical alignment.
    ///
    /// [`backtrace`]: DistanceMatrix::backtrace
    pub fn build<C: CostModel<T>>(source: &'a [T], target: &'a [T], costs: &C) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "build_distance_matrix",
            source_len = source.len(),
            target_len = target.len()
        )
        .entered();

        let cols = source.len() + 1;
        let rows = target.len() + 1;
        let mut cells = Vec::with_capacity(rows * cols);
        cells.push(Cell {
            cost: 0.0,
            cumulative: 0.0,
            operation: Operation::Start,
        });

        // Column margin, row 0: delete every source prefix element.
        for src_element in source {
            let cost = costs.delete_cost(src_element);
            let prev = cells.last().map_or(0.0, |c: &Cell| c.cumulative);
            cells.push(Cell {
                cost,
                cumulative: prev + cost,
                operation: Operation::Delete,
            });
        }

        for (i, targ_element) in target.iter().enumerate() {
            // Row margin, column 0: insert every target prefix element.
            let ins = costs.insert_cost(targ_element);
            let above = cells[i * cols].cumulative;
            cells.push(Cell {
                cost: ins,
                cumulative: above + ins,
                operation: Operation::Insert,
            });

            for (j, src_element) in source.iter().enumerate() {
                let ins_cost = costs.insert_cost(targ_element);
                let ins_total = cells[i * cols + (j + 1)].cumulative + ins_cost;
                let sub_cost = costs.substitute_cost(src_element, targ_element);
                let sub_total = cells[i * cols + j].cumulative + sub_cost;
                let del_cost = costs.delete_cost(src_element);
                let del_total = cells[(i + 1) * cols + j].cumulative + del_cost;

                let min = ins_total.min(sub_total).min(del_total);
                let cell = if min == sub_total {
                    Cell {
                        cost: sub_cost,
                        cumulative: sub_total,
                        operation: Operation::Substitute,
                    }
                } else if min == del_total {
                    Cell {
                        cost: del_cost,
                        cumulative: del_total,
                        operation: Operation::Delete,
                    }
                } else {
                    Cell {
                        cost: ins_cost,
                        cumulative: ins_total,
                        operation: Operation::Insert,
                    }
                };
                cells.push(cell);
            }
        }

        Self {
            source,
            target,
            cells,
        }
    }

    fn cols(&self) -> usize {
        self.source.len() + 1
    }

    /// The cell at the given consumed-prefix coordinates.
    ///
    /// # Panics
    /// Panics if either position exceeds its sequence length.
    pub fn cell(&self, at: Coordinates) -> &Cell {
        assert!(
            at.source <= self.source.len() && at.target <= self.target.len(),
            "coordinates ({}, {}) outside a {}x{} matrix",
            at.target,
            at.source,
            self.target.len() + 1,
            self.source.len() + 1
        );
        &self.cells[at.target * self.cols() + at.source]
    }

    /// The minimum edit distance: the cumulative cost at the terminal cell.
    pub fn min_cost(&self) -> f64 {
        self.cells[self.cells.len() - 1].cumulative
    }

    /// Reconstruct the canonical optimal alignment.
    ///
    /// Walks the recorded operation tags from the terminal cell back to the
    /// origin, collecting steps in reverse and reversing once at the end.
    /// Both sequences empty yields the empty path.
    pub fn backtrace(&self) -> AlignmentPath<T> {
        let mut src_pos = self.source.len();
        let mut targ_pos = self.target.len();
        let mut steps = Vec::with_capacity(src_pos + targ_pos);

        while src_pos > 0 || targ_pos > 0 {
            let cell = self.cell(Coordinates::new(src_pos, targ_pos));
            let (source, target) = match cell.operation {
                Operation::Substitute => {
                    src_pos -= 1;
                    targ_pos -= 1;
                    (
                        Some(self.source[src_pos].clone()),
                        Some(self.target[targ_pos].clone()),
                    )
                }
                Operation::Insert => {
                    targ_pos -= 1;
                    (None, Some(self.target[targ_pos].clone()))
                }
                Operation::Delete => {
                    src_pos -= 1;
                    (Some(self.source[src_pos].clone()), None)
                }
                // The origin is only reachable once both positions hit zero.
                Operation::Start => unreachable!("start tag inside matrix body"),
            };
            steps.push(AlignmentStep {
                source,
                target,
                operation: cell.operation,
                cost: cell.cost,
                cumulative: 0.0,
            });
        }

        steps.reverse();
        AlignmentPath::from_steps(steps)
    }
}
