//! Tree output rendering

use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::tree::Tree;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// How a tree is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Nested `Tree(label, [...])` form
    #[default]
    Repr,
    /// Indented outline drawn with box characters
    Outline,
}

/// Render a tree and write it to file
pub fn render_tree<T: Display>(
    tree: &Tree<T>,
    format: Format,
    output_path: &Path,
) -> Result<(), OutputError> {
    let content = render_to_string(tree, format);

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Render a tree to a string
pub fn render_to_string<T: Display>(tree: &Tree<T>, format: Format) -> String {
    match format {
        Format::Repr => format!("{}\n", tree),
        Format::Outline => {
            let mut output = String::new();
            output.push_str(&tree.label.to_string());
            output.push('\n');
            render_branches(tree, &mut output, "");
            output
        }
    }
}

fn render_branches<T: Display>(node: &Tree<T>, output: &mut String, prefix: &str) {
    for (i, child) in node.branches.iter().enumerate() {
        let is_last = i == node.branches.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(&child.label.to_string());
        output.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        render_branches(child, output, &child_prefix);
    }
}
