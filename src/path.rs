//! Shared output representation for alignments.
//!
//! Both engines produce [`AlignmentPath`] values: an ordered list of
//! [`AlignmentStep`]s walking the source and target from their starts to
//! their ends. A step carries the consumed elements (one side absent for
//! insertions and deletions), the incremental cost of its operation, and the
//! cumulative cost from the start of the path.

/// String-edit operation tags, shared by both engines.
///
/// `Start` appears only in the origin cell of a distance matrix, never in an
/// alignment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Start,
    Insert,
    Delete,
    Substitute,
}

/// How much of each sequence has been consumed: positions in
/// `[0, len(sequence)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub source: usize,
    pub target: usize,
}

impl Coordinates {
    /// Start of both sequences.
    pub const ORIGIN: Coordinates = Coordinates {
        source: 0,
        target: 0,
    };

    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// One unit of an alignment.
///
/// Exactly one of `source` and `target` is `None` for insert and delete
/// steps; both are present for substitutions.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentStep<T> {
    pub source: Option<T>,
    pub target: Option<T>,
    pub operation: Operation,
    /// Cost of this step's operation alone.
    pub cost: f64,
    /// Total cost of the path up to and including this step.
    pub cumulative: f64,
}

/// An ordered sequence of steps from the start of both sequences to their
/// ends. The final step's cumulative cost is the total edit cost of the
/// alignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignmentPath<T> {
    steps: Vec<AlignmentStep<T>>,
}

impl<T> AlignmentPath<T> {
    /// Build a path from steps carrying incremental costs, filling in the
    /// running cumulative cost.
    pub(crate) fn from_steps(mut steps: Vec<AlignmentStep<T>>) -> Self {
        let mut running = 0.0;
        for step in &mut steps {
            running += step.cost;
            step.cumulative = running;
        }
        Self { steps }
    }

    /// The steps of the alignment, in order.
    pub fn steps(&self) -> &[AlignmentStep<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total edit cost of this alignment; 0 for the empty path.
    pub fn total_cost(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.cumulative)
    }

    /// The source elements consumed by this path, in order.
    ///
    /// Concatenating them reproduces the original source sequence.
    pub fn source_elements(&self) -> Vec<&T> {
        self.steps.iter().filter_map(|s| s.source.as_ref()).collect()
    }

    /// The target elements produced by this path, in order.
    pub fn target_elements(&self) -> Vec<&T> {
        self.steps.iter().filter_map(|s| s.target.as_ref()).collect()
    }
}

impl<T> IntoIterator for AlignmentPath<T> {
    type Item = AlignmentStep<T>;
    type IntoIter = std::vec::IntoIter<AlignmentStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a AlignmentPath<T> {
    type Item = &'a AlignmentStep<T>;
    type IntoIter = std::slice::Iter<'a, AlignmentStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
