//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack a directory into a gzip-compressed tar archive
    Pack(PackArgs),
    /// List the entries a pack run would include
    List(ListArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Output archive file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Source directory to pack
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Gitignore-style file with exclusion patterns
    #[arg(long, value_name = "PATH")]
    pub ignore_file: Option<PathBuf>,

    /// Exclude pattern (gitignore syntax, can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Key archive entries by absolute path instead of base-relative
    #[arg(long)]
    pub absolute_keys: bool,

    /// Overwrite the output file if it exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Source directory to walk
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Gitignore-style file with exclusion patterns
    #[arg(long, value_name = "PATH")]
    pub ignore_file: Option<PathBuf>,

    /// Exclude pattern (gitignore syntax, can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Key entries by absolute path instead of base-relative
    #[arg(long)]
    pub absolute_keys: bool,

    /// Show entry sizes
    #[arg(short, long)]
    pub long: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: clap_complete::Shell,
}
