//! Memoized recursive engine enumerating every minimal-cost alignment.
//!
//! Where the tabular engine commits to one canonical backtrace, the
//! enumerator explores all three operations at each coordinate pair and keeps
//! every complete alignment whose total cost ties the minimum. Overlapping
//! suffixes are solved once: the memo maps each [`Coordinates`] to the
//! filtered set of minimal suffix alignments starting there, collapsing the
//! exponential branch fan-out to the same O(|source|·|target|) distinct
//! subproblems as the matrix.
//!
//! The memo is owned by one enumerator instance and therefore scoped to one
//! `(source, target, cost model)` triple; entries are written once and never
//! recomputed.

use crate::cost::CostModel;
use crate::path::{AlignmentPath, AlignmentStep, Coordinates, Operation};

/// One step of a suffix alignment, carrying the total cost of the suffix
/// that starts with it. The suffix total is what minimality filtering
/// compares; it is rewritten to a prefix-cumulative cost when a parse is
/// materialized as a public [`AlignmentPath`].
#[derive(Debug, Clone)]
struct RawStep<T> {
    source: Option<T>,
    target: Option<T>,
    operation: Operation,
    cost: f64,
    suffix_cost: f64,
}

/// A complete suffix alignment from some coordinates to the end of both
/// sequences.
type Parse<T> = Vec<RawStep<T>>;

fn parse_cost<T>(parse: &Parse<T>) -> f64 {
    parse.first().map_or(0.0, |step| step.suffix_cost)
}

/// Enumerator for all minimal-cost alignments of one sequence pair.
///
/// ```
/// use levalign::{AlignmentEnumerator, UnitCost};
///
/// let source: Vec<char> = "dag".chars().collect();
/// let target: Vec<char> = "doge".chars().collect();
/// let mut enumerator = AlignmentEnumerator::new(&source, &target, &UnitCost, false);
/// let paths = enumerator.relate();
/// assert!(paths.iter().all(|p| p.total_cost() == 3.0));
/// ```
pub struct AlignmentEnumerator<'a, T, C> {
    source: &'a [T],
    target: &'a [T],
    costs: &'a C,
    just_one: bool,
    memo: Vec<Option<Vec<Parse<T>>>>,
}

impl<'a, T, C> AlignmentEnumerator<'a, T, C>
where
    T: Clone,
    C: CostModel<T>,
{
    /// Create an enumerator with a fresh memo sized
    /// `(|target|+1) x (|source|+1)`.
    ///
    /// With `just_one` set, each memo entry keeps exactly one minimal suffix
    /// alignment (the first found, in substitute, delete, insert branch
    /// order), so [`relate`](Self::relate) returns a single path.
    pub fn new(source: &'a [T], target: &'a [T], costs: &'a C, just_one: bool) -> Self {
        let memo = vec![None; (source.len() + 1) * (target.len() + 1)];
        Self {
            source,
            target,
            costs,
            just_one,
            memo,
        }
    }

    /// All minimal-cost alignments of the full sequence pair.
    ///
    /// Two empty sequences yield an empty set: there are no steps to report,
    /// not one empty alignment.
    pub fn relate(&mut self) -> Vec<AlignmentPath<T>> {
        self.relate_from(Coordinates::ORIGIN)
    }

    /// All minimal-cost alignments of the suffixes starting at `at`.
    ///
    /// # Panics
    /// Panics if either position of `at` exceeds its sequence length.
    pub fn relate_from(&mut self, at: Coordinates) -> Vec<AlignmentPath<T>> {
        assert!(
            at.source <= self.source.len() && at.target <= self.target.len(),
            "coordinates ({}, {}) outside sequences of length {} and {}",
            at.source,
            at.target,
            self.source.len(),
            self.target.len()
        );
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "relate",
            source_len = self.source.len(),
            target_len = self.target.len(),
            just_one = self.just_one
        )
        .entered();

        self.solve(at)
            .into_iter()
            .map(|parse| {
                AlignmentPath::from_steps(
                    parse
                        .into_iter()
                        .map(|step| AlignmentStep {
                            source: step.source,
                            target: step.target,
                            operation: step.operation,
                            cost: step.cost,
                            cumulative: 0.0,
                        })
                        .collect(),
                )
            })
            .collect()
    }

    fn memo_index(&self, at: Coordinates) -> usize {
        at.target * (self.source.len() + 1) + at.source
    }

    /// Minimal suffix alignments starting at `at`, consulting and populating
    /// the memo. An entry is computed at most once.
    fn solve(&mut self, at: Coordinates) -> Vec<Parse<T>> {
        let idx = self.memo_index(at);
        if let Some(parses) = &self.memo[idx] {
            return parses.clone();
        }
        let parses = self.parse(at);
        self.memo[idx] = Some(parses.clone());
        parses
    }

    /// Try every feasible operation at `at` and keep the candidates tying
    /// the minimum total suffix cost.
    fn parse(&mut self, at: Coordinates) -> Vec<Parse<T>> {
        let remaining_source = self.source.len() - at.source;
        let remaining_target = self.target.len() - at.target;
        if remaining_source == 0 && remaining_target == 0 {
            return Vec::new();
        }

        let mut parses = Vec::new();
        if remaining_source > 0 && remaining_target > 0 {
            parses.extend(self.try_op(at, Operation::Substitute));
        }
        if remaining_source > 0 {
            parses.extend(self.try_op(at, Operation::Delete));
        }
        if remaining_target > 0 {
            parses.extend(self.try_op(at, Operation::Insert));
        }

        let minimum = parses
            .iter()
            .map(parse_cost)
            .fold(f64::INFINITY, f64::min);
        parses.retain(|parse| parse_cost(parse) == minimum);
        if self.just_one {
            parses.truncate(1);
        }
        parses
    }

    /// Apply one operation at `at`, then extend with every minimal alignment
    /// of the rest of both sequences.
    fn try_op(&mut self, at: Coordinates, operation: Operation) -> Vec<Parse<T>> {
        let consume_source = matches!(operation, Operation::Delete | Operation::Substitute);
        let consume_target = matches!(operation, Operation::Insert | Operation::Substitute);

        let cost = match operation {
            Operation::Substitute => self
                .costs
                .substitute_cost(&self.source[at.source], &self.target[at.target]),
            Operation::Delete => self.costs.delete_cost(&self.source[at.source]),
            Operation::Insert => self.costs.insert_cost(&self.target[at.target]),
            Operation::Start => unreachable!("start is never a branch"),
        };
        let head = RawStep {
            source: consume_source.then(|| self.source[at.source].clone()),
            target: consume_target.then(|| self.target[at.target].clone()),
            operation,
            cost,
            suffix_cost: cost,
        };

        let tail_start = Coordinates::new(
            at.source + usize::from(consume_source),
            at.target + usize::from(consume_target),
        );
        let tails = self.solve(tail_start);
        if tails.is_empty() {
            // The tail is the end of both sequences; this operation alone
            // completes the suffix.
            return vec![vec![head]];
        }

        tails
            .into_iter()
            .map(|tail| {
                let mut parse = Vec::with_capacity(tail.len() + 1);
                parse.push(RawStep {
                    suffix_cost: cost + parse_cost(&tail),
                    ..head.clone()
                });
                parse.extend(tail);
                parse
            })
            .collect()
    }
}
