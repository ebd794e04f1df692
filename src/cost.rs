//! Cost models for edit operations.
//!
//! Both alignment engines are parameterized by a [`CostModel`]: three pure
//! functions giving the cost of inserting a target element, deleting a source
//! element, or substituting one for the other. [`UnitCost`] is the classic
//! Levenshtein model; [`CostFns`] wraps arbitrary closures for parameterized
//! scoring (e.g. cheaper insertion of punctuation, partial credit for
//! phoneme-to-phonogram matches).
//!
//! Contract: each function must be total over the elements that can occur in
//! the given sequences, and deterministic (the same arguments always produce
//! the same cost). Negative or NaN costs violate the caller contract; the
//! engines do not validate them.

/// Cost of insert, delete, and substitute operations over elements of type `T`.
pub trait CostModel<T: ?Sized> {
    /// Cost of an element being in the target but not the source.
    fn insert_cost(&self, target: &T) -> f64;

    /// Cost of an element being in the source but not the target.
    fn delete_cost(&self, source: &T) -> f64;

    /// Cost of aligning a source element with a target element.
    ///
    /// Conventionally 0 when the elements are equal, but models scoring
    /// cross-domain pairs (pronunciations against spellings, say) may return
    /// nonzero costs for "equal enough" pairs instead.
    fn substitute_cost(&self, source: &T, target: &T) -> f64;
}

/// Levenshtein's original operation costs: insertions and deletions cost 1,
/// substitutions cost 0 for identical elements and 2 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl<T: PartialEq> CostModel<T> for UnitCost {
    fn insert_cost(&self, _target: &T) -> f64 {
        1.0
    }

    fn delete_cost(&self, _source: &T) -> f64 {
        1.0
    }

    fn substitute_cost(&self, source: &T, target: &T) -> f64 {
        if source == target {
            0.0
        } else {
            2.0
        }
    }
}

/// A cost model assembled from three closures.
///
/// ```
/// use levalign::{edit_distance_with, CostFns};
///
/// // Inserting a letter costs 1, anything else (hyphens, spaces) 0.2.
/// let costs = CostFns {
///     insert: |c: &char| if c.is_alphabetic() { 1.0 } else { 0.2 },
///     delete: |_: &char| 1.0,
///     substitute: |a: &char, b: &char| if a == b { 0.0 } else { 2.0 },
/// };
/// let source: Vec<char> = "cowgirl".chars().collect();
/// let target: Vec<char> = "cow-girls".chars().collect();
/// assert_eq!(edit_distance_with(&source, &target, &costs), 1.2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostFns<I, D, S> {
    pub insert: I,
    pub delete: D,
    pub substitute: S,
}

impl<T, I, D, S> CostModel<T> for CostFns<I, D, S>
where
    I: Fn(&T) -> f64,
    D: Fn(&T) -> f64,
    S: Fn(&T, &T) -> f64,
{
    fn insert_cost(&self, target: &T) -> f64 {
        (self.insert)(target)
    }

    fn delete_cost(&self, source: &T) -> f64 {
        (self.delete)(source)
    }

    fn substitute_cost(&self, source: &T, target: &T) -> f64 {
        (self.substitute)(source, target)
    }
}
