//! Recursive descent parser for the textual tree form
//! `Tree(label, [branch, ...])`.
//!
//! Each rule takes the input and a byte offset and returns the parsed value
//! together with the offset just past it. Labels run up to the next `,` or
//! `)`, so label types whose text contains either character do not round-trip.
//! Nesting deeper than [`MAX_DEPTH`] is rejected.

use std::str::FromStr;

use super::{Tree, TreeError, MAX_DEPTH};

const TREE_OPEN: &str = "Tree(";

impl<T: FromStr> FromStr for Tree<T> {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tree, pos) = try_tree_rule(s, 0, 1)?;
        let pos = skip_whitespace(s, pos);

        if pos != s.len() {
            return Err(TreeError::Syntax {
                position: pos,
                message: "unexpected trailing input".to_string(),
            });
        }

        Ok(tree)
    }
}

fn skip_whitespace(input: &str, pos: usize) -> usize {
    let rest = &input[pos..];
    pos + rest.len() - rest.trim_start().len()
}

/// Expects `text` at `pos`, after optional whitespace.
fn try_text(input: &str, pos: usize, text: &str) -> Result<usize, TreeError> {
    let pos = skip_whitespace(input, pos);

    if input[pos..].starts_with(text) {
        Ok(pos + text.len())
    } else {
        Err(TreeError::Syntax {
            position: pos,
            message: format!("expected '{}'", text),
        })
    }
}

/// `Tree(LABEL)` or `Tree(LABEL, [TREE, ...])`, where `depth` counts the
/// tree being parsed as a level
fn try_tree_rule<T: FromStr>(
    input: &str,
    pos: usize,
    depth: usize,
) -> Result<(Tree<T>, usize), TreeError> {
    let pos = skip_whitespace(input, pos);
    if depth > MAX_DEPTH {
        return Err(TreeError::Syntax {
            position: pos,
            message: "nesting too deep".to_string(),
        });
    }

    let pos = try_text(input, pos, TREE_OPEN)?;
    let (label, pos) = try_label_rule(input, pos)?;
    let pos = skip_whitespace(input, pos);

    if input[pos..].starts_with(',') {
        let pos = try_text(input, pos + 1, "[")?;
        let (branches, pos) = try_branches_rule(input, pos, depth + 1)?;
        let pos = try_text(input, pos, ")")?;
        return Ok((Tree::new(label, branches), pos));
    }

    let pos = try_text(input, pos, ")")?;
    Ok((Tree::leaf(label), pos))
}

fn try_label_rule<T: FromStr>(input: &str, pos: usize) -> Result<(T, usize), TreeError> {
    let pos = skip_whitespace(input, pos);
    let end = input[pos..]
        .find(|c: char| c == ',' || c == ')')
        .map_or(input.len(), |i| pos + i);
    let text = input[pos..end].trim_end();

    if text.is_empty() {
        return Err(TreeError::Syntax {
            position: pos,
            message: "expected a label".to_string(),
        });
    }

    let label = text.parse::<T>().map_err(|_| TreeError::InvalidLabel {
        position: pos,
        text: text.to_string(),
    })?;

    Ok((label, end))
}

/// Comma-separated trees up to and including the closing `]`
fn try_branches_rule<T: FromStr>(
    input: &str,
    pos: usize,
    depth: usize,
) -> Result<(Vec<Tree<T>>, usize), TreeError> {
    let mut branches = Vec::new();
    let mut pos = skip_whitespace(input, pos);

    if input[pos..].starts_with(']') {
        return Err(TreeError::Syntax {
            position: pos,
            message: "empty branch list".to_string(),
        });
    }

    loop {
        pos = skip_whitespace(input, pos);
        if !input[pos..].starts_with(TREE_OPEN) {
            return Err(TreeError::InvalidBranches { position: pos });
        }

        let (branch, next) = try_tree_rule(input, pos, depth)?;
        branches.push(branch);

        pos = skip_whitespace(input, next);
        if input[pos..].starts_with(',') {
            pos += 1;
            continue;
        }

        let pos = try_text(input, pos, "]")?;
        return Ok((branches, pos));
    }
}
