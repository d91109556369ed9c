//! Tree construction module

mod generator;
mod node;
mod parse;

pub use generator::{RandomTreeGenerator, DEFAULT_BRANCH_COUNTS, DEFAULT_LABELS, MAX_DEPTH};
pub use node::{Labels, Tree};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Branch at offset {position} is not a tree")]
    InvalidBranches { position: usize },

    #[error("Invalid label '{text}' at offset {position}")]
    InvalidLabel { position: usize, text: String },

    #[error("Syntax error at offset {position}: {message}")]
    Syntax { position: usize, message: String },
}
