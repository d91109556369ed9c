//! Labeled N-ary tree

use std::fmt;

/// A node in a rooted, ordered tree.
///
/// Each node exclusively owns its branches, so a subtree can never appear
/// under two parents and cycles cannot be built.
///
/// Printing, measuring and dropping recurse once per level; trees from
/// [`RandomTreeGenerator`](super::RandomTreeGenerator) and the parser stay
/// within [`MAX_DEPTH`](super::MAX_DEPTH) levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub label: T,
    pub branches: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// Build a node from a label and its branches, in order.
    ///
    /// The branches are collected into a vector owned by the new node.
    pub fn new<I>(label: T, branches: I) -> Self
    where
        I: IntoIterator<Item = Tree<T>>,
    {
        Self {
            label,
            branches: branches.into_iter().collect(),
        }
    }

    /// Build a node without branches
    pub fn leaf(label: T) -> Self {
        Self {
            label,
            branches: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Number of levels, counting this node. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.branches.iter().map(Tree::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in the tree
    pub fn size(&self) -> usize {
        1 + self.branches.iter().map(Tree::size).sum::<usize>()
    }

    /// Iterate over every label in pre-order.
    pub fn labels(&self) -> Labels<'_, T> {
        Labels { stack: vec![self] }
    }

    /// Replace every label with `f(label)`, visiting nodes in pre-order.
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        self.map_in_place(&mut f);
    }

    fn map_in_place<F>(&mut self, f: &mut F)
    where
        F: FnMut(&T) -> T,
    {
        self.label = f(&self.label);
        for branch in &mut self.branches {
            branch.map_in_place(f);
        }
    }

    /// Fallible [`Tree::map`].
    ///
    /// Not transactional: on the first error the nodes already visited keep
    /// their new labels and the remaining nodes keep their old ones.
    pub fn try_map<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<T, E>,
    {
        self.try_map_in_place(&mut f)
    }

    fn try_map_in_place<F, E>(&mut self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<T, E>,
    {
        self.label = f(&self.label)?;
        for branch in &mut self.branches {
            branch.try_map_in_place(f)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> Tree<T> {
    /// Whether `value` equals the label of this node or of any descendant.
    ///
    /// Searches in pre-order and stops at the first match.
    pub fn contains(&self, value: &T) -> bool {
        self.label == *value || self.branches.iter().any(|b| b.contains(value))
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree({}", self.label)?;

        if !self.branches.is_empty() {
            f.write_str(", [")?;
            for (i, branch) in self.branches.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", branch)?;
            }
            f.write_str("]")?;
        }

        f.write_str(")")
    }
}

/// Pre-order iterator over the labels of a tree
pub struct Labels<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for Labels<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost branch is popped first
        self.stack.extend(node.branches.iter().rev());
        Some(&node.label)
    }
}
