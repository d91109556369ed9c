//! Common test utilities

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use randtree::{RandomTreeGenerator, Tree};

/// Generator with a fixed seed
pub fn seeded_generator(seed: u64) -> RandomTreeGenerator<StdRng> {
    RandomTreeGenerator::new(StdRng::seed_from_u64(seed))
}

/// The reference tree `Tree(3, [Tree(2, [Tree(5)]), Tree(4)])`
pub fn sample_tree() -> Tree<i64> {
    Tree::new(
        3,
        vec![Tree::new(2, vec![Tree::leaf(5)]), Tree::leaf(4)],
    )
}

/// Branch counts of every internal node, in pre-order
pub fn internal_branch_counts<T>(tree: &Tree<T>) -> Vec<usize> {
    let mut counts = Vec::new();
    collect_counts(tree, &mut counts);
    counts
}

fn collect_counts<T>(tree: &Tree<T>, counts: &mut Vec<usize>) {
    if !tree.is_leaf() {
        counts.push(tree.branches.len());
    }
    for branch in &tree.branches {
        collect_counts(branch, counts);
    }
}

/// Depth of every leaf, counting the root as 1
pub fn leaf_depths<T>(tree: &Tree<T>) -> Vec<usize> {
    fn walk<T>(tree: &Tree<T>, depth: usize, out: &mut Vec<usize>) {
        if tree.is_leaf() {
            out.push(depth);
        }
        for branch in &tree.branches {
            walk(branch, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(tree, 1, &mut out);
    out
}
