use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use landis::AvlTree;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "landis", about = "Self-balancing ordered-key engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in demonstration sequence, printing the tree after
    /// every mutation.
    Demo,
    /// Execute a newline-delimited op script against a fresh tree.
    Run {
        /// Script file (`insert <key>`, `delete <key>`, `sum`, `print`;
        /// blank lines and `#` comments are skipped).
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Run { script } => run_script(script),
    }
}

fn run_demo() -> Result<()> {
    let mut tree = AvlTree::new();

    for key in [10, 20, 30, 25, 28, 27, -1] {
        tree.insert(key);
        println!("Inserted: {key}");
        print_tree(&tree);
    }
    println!("Sum: {}", tree.sum());

    for key in [10, 27] {
        tree.remove(&key);
        println!("Deleted: {key}");
        print_tree(&tree);
    }
    println!("Sum: {}", tree.sum());

    Ok(())
}

fn run_script(script_path: PathBuf) -> Result<()> {
    let reader = BufReader::new(File::open(&script_path).with_context(|| {
        format!("failed to open script file {}", script_path.display())
    })?);

    let mut tree: AvlTree<i64> = AvlTree::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let Some(op) = fields.next() else { continue };

        match op {
            "insert" => {
                let key = parse_key(fields.next(), line_no)?;
                if tree.insert(key) {
                    println!("inserted {key}");
                } else {
                    println!("duplicate {key}");
                }
            }
            "delete" => {
                let key = parse_key(fields.next(), line_no)?;
                if tree.remove(&key) {
                    println!("deleted {key}");
                } else {
                    println!("missing {key}");
                }
            }
            "sum" => println!("sum: {}", tree.sum()),
            "print" => print_tree(&tree),
            other => {
                anyhow::bail!("unknown operation '{}' on line {}", other, line_no + 1)
            }
        }
    }

    tree.check_integrity()
        .context("tree integrity check failed after script")?;

    Ok(())
}

fn parse_key(field: Option<&str>, line_no: usize) -> Result<i64> {
    let field = field
        .ok_or_else(|| anyhow::anyhow!("missing key on line {}", line_no + 1))?;
    field.parse().with_context(|| {
        format!("invalid key '{}' on line {}", field, line_no + 1)
    })
}

fn print_tree(tree: &AvlTree<i64>) {
    print!("{tree}");
}
