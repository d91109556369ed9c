use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::output::{render_to_string, render_tree, Format};
use crate::tree::{RandomTreeGenerator, Tree, TreeError};

/// randtree - random N-ary tree generator
#[derive(Parser)]
#[command(name = "randtree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random tree of at most DEPTH levels
    Generate(GenerateArgs),

    /// Parse a tree written as Tree(label, [...]) and describe it
    Inspect {
        /// Tree text, e.g. "Tree(3, [Tree(2), Tree(4)])"
        #[arg(value_name = "TREE")]
        tree: String,

        /// Report whether this label occurs anywhere in the tree
        #[arg(long, allow_negative_numbers = true)]
        contains: Option<i64>,

        #[arg(short, long, value_enum, default_value_t = Format::Repr)]
        format: Format,
    },
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Maximum depth; 1 yields a single leaf
    #[arg(value_name = "DEPTH")]
    depth: usize,

    /// Smallest label (inclusive, default from randtree.toml or 0)
    #[arg(long, allow_negative_numbers = true)]
    min_label: Option<i64>,

    /// Largest label (inclusive, default from randtree.toml or 20)
    #[arg(long, allow_negative_numbers = true)]
    max_label: Option<i64>,

    /// Fewest branches per internal node (inclusive, default 2)
    #[arg(long)]
    min_branches: Option<usize>,

    /// Most branches per internal node (inclusive, default 6)
    #[arg(long)]
    max_branches: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Write the tree to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Ignore randtree.toml
    #[arg(long)]
    no_config: bool,
}

impl GenerateArgs {
    /// Overlay command-line values on the configured ones
    fn apply(&self, settings: Settings) -> Settings {
        let labels = self.min_label.unwrap_or(*settings.labels.start())
            ..=self.max_label.unwrap_or(*settings.labels.end());
        let branch_counts = self.min_branches.unwrap_or(*settings.branch_counts.start())
            ..=self.max_branches.unwrap_or(*settings.branch_counts.end());

        Settings {
            labels,
            branch_counts,
            seed: self.seed.or(settings.seed),
            format: self.format.unwrap_or(settings.format),
            path: settings.path,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            Commands::Generate(args) => generate_tree(&args),
            Commands::Inspect {
                tree,
                contains,
                format,
            } => {
                print!("{}", inspect_tree(&tree, contains, format)?);
                Ok(())
            }
        }
    }
}

fn generate_tree(args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = if args.no_config {
        Settings::default()
    } else {
        Settings::discover()?
    };
    if let Some(path) = &settings.path {
        info!("Using config at {:?}", path);
    }

    let settings = args.apply(settings);
    let tree = generate_with(&settings, args.depth)?;

    match &args.output {
        Some(path) => {
            render_tree(&tree, settings.format, path)?;
            println!("Generated tree at: {:?}", path);
        }
        None => print!("{}", render_to_string(&tree, settings.format)),
    }

    Ok(())
}

/// Generate with a fresh random source, seeded when the settings fix a seed
fn generate_with(settings: &Settings, depth: usize) -> Result<Tree<i64>, TreeError> {
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    RandomTreeGenerator::new(rng)
        .with_labels(settings.labels.clone())
        .with_branch_counts(settings.branch_counts.clone())
        .generate(depth)
}

fn inspect_tree(text: &str, contains: Option<i64>, format: Format) -> Result<String, TreeError> {
    let tree: Tree<i64> = text.parse()?;

    let mut output = render_to_string(&tree, format);
    output.push_str(&format!("depth: {}\n", tree.depth()));
    output.push_str(&format!("nodes: {}\n", tree.size()));
    output.push_str(&format!("leaf: {}\n", tree.is_leaf()));

    if let Some(value) = contains {
        output.push_str(&format!("contains {}: {}\n", value, tree.contains(&value)));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_non_numeric_depth_rejected() {
        assert!(Cli::try_parse_from(["randtree", "generate", "three"]).is_err());
        assert!(Cli::try_parse_from(["randtree", "generate", "-3"]).is_err());
    }

    #[test]
    fn test_negative_label_bounds_parse() {
        let cli = Cli::try_parse_from([
            "randtree",
            "generate",
            "3",
            "--min-label",
            "-5",
            "--max-label",
            "-1",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.min_label, Some(-5));
                assert_eq!(args.max_label, Some(-1));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_apply_overrides_only_given_values() {
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };
        let args = GenerateArgs {
            depth: 3,
            max_label: Some(99),
            min_branches: Some(1),
            format: Some(Format::Outline),
            ..GenerateArgs::default()
        };

        let merged = args.apply(settings);

        assert_eq!(merged.labels, 0..=99);
        assert_eq!(merged.branch_counts, 1..=6);
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.format, Format::Outline);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let settings = Settings {
            seed: Some(2024),
            ..Settings::default()
        };
        let a = generate_with(&settings, 4).unwrap();
        let b = generate_with(&settings, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_depth_reaches_generator() {
        let err = generate_with(&Settings::default(), 0).unwrap_err();
        assert!(matches!(err, TreeError::InvalidArgument(_)));
    }

    #[test]
    fn test_depth_past_cap_is_an_error() {
        let settings = Settings {
            branch_counts: 1..=1,
            seed: Some(1),
            ..Settings::default()
        };
        let err = generate_with(&settings, 100_000).unwrap_err();
        assert!(matches!(err, TreeError::InvalidArgument(_)));
    }

    #[test]
    fn test_inspect() {
        let output = inspect_tree("Tree(3, [Tree(2, [Tree(5)]), Tree(4)])", Some(5), Format::Repr)
            .unwrap();
        let expected = "\
Tree(3, [Tree(2, [Tree(5)]), Tree(4)])
depth: 3
nodes: 4
leaf: false
contains 5: true
";
        assert_eq!(output, expected);

        let output = inspect_tree("Tree(3, [Tree(4)])", Some(6), Format::Outline).unwrap();
        assert!(output.starts_with("3\n└── 4\n"));
        assert!(output.ends_with("contains 6: false\n"));
    }

    #[test]
    fn test_inspect_rejects_non_tree_branch() {
        let err = inspect_tree("Tree(1, [2])", None, Format::Repr).unwrap_err();
        assert!(matches!(err, TreeError::InvalidBranches { .. }));
    }
}
