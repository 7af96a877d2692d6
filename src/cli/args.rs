use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "distzip",
    about = "Select manifest-listed project files, apply exclusion rules, and seal them into one distributable zip archive.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a distribution archive from manifest entries.
    Build(BuildArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Files or directories to include, relative to the project root.
    /// Replaces the plan's include list when given.
    pub entries: Vec<String>,

    /// Project root the manifest is resolved against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output artifact path (default: <root-basename>.zip).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// JSON pack plan with include/exclude lists.
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Exclusion substring, matched anywhere in the path (repeatable).
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Excluded file extension, leading dot optional (repeatable).
    #[arg(long = "exclude-ext")]
    pub exclude_ext: Vec<String>,

    /// Do not apply the conventional junk exclusions (.DS_Store, .git, ...).
    #[arg(long)]
    pub no_default_excludes: bool,
}
