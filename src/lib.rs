//! Random N-ary trees: a labeled tree type, a seedable random generator,
//! and renderers for the `Tree(label, [...])` text form.

pub mod cli;
pub mod config;
pub mod output;
pub mod tree;

pub use tree::{RandomTreeGenerator, Tree, TreeError};
