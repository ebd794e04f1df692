//! Minimum-cost sequence alignment under pluggable cost models.
//!
//! This crate computes the minimum-cost sequence of edit operations
//! (insertion, deletion, substitution) transforming one ordered sequence of
//! comparable elements into another, with two interchangeable engines sharing
//! one cost-model contract:
//!
//! 1. A tabular dynamic-programming engine ([`DistanceMatrix`]) that computes
//!    the minimum cost and reconstructs one canonical alignment by
//!    backtracing a single preferred path.
//! 2. A memoized recursive engine ([`AlignmentEnumerator`]) that enumerates
//!    *all* alignments achieving the minimum cost, handling ties explicitly.
//!
//! Both engines agree on the minimum cost for any input; the enumerator
//! simply refuses to pick a favorite among ties unless asked to.
//!
//! ## Quick start
//! ```
//! use levalign::{align_all, align_one, edit_distance, vertical_alignment};
//!
//! let source: Vec<char> = "intention".chars().collect();
//! let target: Vec<char> = "execution".chars().collect();
//!
//! assert_eq!(edit_distance(&source, &target), 8.0);
//!
//! // One canonical alignment, rendered as a plaintext table.
//! let path = align_one(&source, &target);
//! assert_eq!(path.total_cost(), 8.0);
//! println!("{}", vertical_alignment(&path));
//!
//! // Every alignment achieving cost 8.
//! let all = align_all(&source, &target);
//! assert_eq!(all.len(), 134);
//! ```
//!
//! Elements can be anything comparable: `char`s, multi-character grapheme
//! units (`["ll", "a", "ch"]`), numbers, or richer tokens. Costs come from a
//! [`CostModel`]; [`UnitCost`] is the classic Levenshtein model, and
//! [`CostFns`] wraps closures for parameterized scoring.

pub mod cost;
pub mod enumerate;
pub mod format;
pub mod matrix;
pub mod path;

pub use crate::cost::{CostFns, CostModel, UnitCost};
pub use crate::enumerate::AlignmentEnumerator;
pub use crate::format::{print_width, vertical_alignment};
pub use crate::matrix::{Cell, DistanceMatrix};
pub use crate::path::{AlignmentPath, AlignmentStep, Coordinates, Operation};

/// Minimum edit distance between `source` and `target` under [`UnitCost`].
pub fn edit_distance<T: Clone + PartialEq>(source: &[T], target: &[T]) -> f64 {
    edit_distance_with(source, target, &UnitCost)
}

/// Minimum edit distance under an explicit cost model.
pub fn edit_distance_with<T: Clone, C: CostModel<T>>(
    source: &[T],
    target: &[T],
    costs: &C,
) -> f64 {
    DistanceMatrix::build(source, target, costs).min_cost()
}

/// The canonical optimal alignment under [`UnitCost`], from the tabular
/// engine's backtrace.
pub fn align_one<T: Clone + PartialEq>(source: &[T], target: &[T]) -> AlignmentPath<T> {
    align_one_with(source, target, &UnitCost)
}

/// The canonical optimal alignment under an explicit cost model.
///
/// Ties are broken substitute over delete over insert, so the result is
/// reproducible for a given input triple.
pub fn align_one_with<T: Clone, C: CostModel<T>>(
    source: &[T],
    target: &[T],
    costs: &C,
) -> AlignmentPath<T> {
    DistanceMatrix::build(source, target, costs).backtrace()
}

/// Every minimal-cost alignment under [`UnitCost`].
///
/// Two empty sequences yield an empty set (there are no steps to report);
/// otherwise at least one path is returned, and all returned paths have
/// total cost equal to [`edit_distance`] on the same inputs.
pub fn align_all<T: Clone + PartialEq>(source: &[T], target: &[T]) -> Vec<AlignmentPath<T>> {
    align_all_with(source, target, &UnitCost, false)
}

/// Every minimal-cost alignment under an explicit cost model, or exactly one
/// when `just_one` is set (the first found, in substitute, delete, insert
/// branch order).
pub fn align_all_with<T: Clone, C: CostModel<T>>(
    source: &[T],
    target: &[T],
    costs: &C,
    just_one: bool,
) -> Vec<AlignmentPath<T>> {
    AlignmentEnumerator::new(source, target, costs, just_one).relate()
}
