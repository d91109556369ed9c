//! Random tree generator

use std::fmt::Debug;
use std::ops::RangeInclusive;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use tracing::{debug, instrument};

use super::{Tree, TreeError};

/// Label range used when none is given
pub const DEFAULT_LABELS: RangeInclusive<i64> = 0..=20;

/// Branch-count range used when none is given
pub const DEFAULT_BRANCH_COUNTS: RangeInclusive<usize> = 2..=6;

/// Deepest tree `generate` will build or the parser will accept.
///
/// Building, printing and dropping a tree all recurse once per level, so this
/// keeps a narrow but deep tree from exhausting the thread stack.
pub const MAX_DEPTH: usize = 256;

/// Builds random trees of bounded depth.
///
/// Every label is drawn uniformly from `labels` and every internal node gets a
/// branch count drawn uniformly from `branch_counts`. Both ranges are
/// inclusive. The random source is supplied by the caller, so a seeded
/// generator gives reproducible trees.
pub struct RandomTreeGenerator<R, T = i64> {
    rng: R,
    labels: RangeInclusive<T>,
    branch_counts: RangeInclusive<usize>,
}

impl<R: Rng> RandomTreeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            labels: DEFAULT_LABELS,
            branch_counts: DEFAULT_BRANCH_COUNTS,
        }
    }
}

impl<R, T> RandomTreeGenerator<R, T>
where
    R: Rng,
    T: SampleUniform + PartialOrd + Clone + Debug,
{
    /// Draw labels from `labels` instead.
    ///
    /// # Panics
    ///
    /// [`generate`](Self::generate) panics if `labels` is non-empty but cannot
    /// be sampled, such as a float range whose width overflows
    /// (`f64::MIN..=f64::MAX`).
    pub fn with_labels<U>(self, labels: RangeInclusive<U>) -> RandomTreeGenerator<R, U> {
        RandomTreeGenerator {
            rng: self.rng,
            labels,
            branch_counts: self.branch_counts,
        }
    }

    pub fn with_branch_counts(mut self, branch_counts: RangeInclusive<usize>) -> Self {
        self.branch_counts = branch_counts;
        self
    }

    /// Generate a tree whose depth does not exceed `max_depth`.
    ///
    /// A `max_depth` of 1 always yields a leaf. Fails with
    /// [`TreeError::InvalidArgument`] before drawing anything if `max_depth`
    /// is zero or above [`MAX_DEPTH`], or either range is empty.
    ///
    /// # Panics
    ///
    /// If the label range is non-empty but cannot be sampled uniformly, see
    /// [`with_labels`](Self::with_labels).
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&mut self, max_depth: usize) -> Result<Tree<T>, TreeError> {
        if max_depth < 1 {
            return Err(TreeError::InvalidArgument(format!(
                "max depth must be at least 1, got {}",
                max_depth
            )));
        }
        if max_depth > MAX_DEPTH {
            return Err(TreeError::InvalidArgument(format!(
                "max depth must be at most {}, got {}",
                MAX_DEPTH, max_depth
            )));
        }
        if self.labels.is_empty() {
            return Err(TreeError::InvalidArgument(format!(
                "label range {:?} is empty",
                self.labels
            )));
        }
        if self.branch_counts.is_empty() {
            return Err(TreeError::InvalidArgument(format!(
                "branch count range {:?} is empty",
                self.branch_counts
            )));
        }

        let tree = self.grow(max_depth);
        debug!(
            nodes = tree.size(),
            depth = tree.depth(),
            "Generated random tree"
        );

        Ok(tree)
    }

    fn grow(&mut self, max_depth: usize) -> Tree<T> {
        let label = self.rng.gen_range(self.labels.clone());
        if max_depth == 1 {
            return Tree::leaf(label);
        }

        let count = self.rng.gen_range(self.branch_counts.clone());
        let branches: Vec<Tree<T>> = (0..count).map(|_| self.grow(max_depth - 1)).collect();

        Tree::new(label, branches)
    }
}
