use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the ll1 tool
pub struct Options {
    /// JSON parse table to use instead of the built-in arithmetic table
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Start symbol, defaulting to the table's first non-terminal
    #[arg(short, long)]
    pub start: Option<char>,

    /// Character denoting ϵ in tables and input
    #[arg(long, default_value_t = '#')]
    pub epsilon: char,

    /// Character denoting the end-of-input marker in tables and input
    #[arg(long = "end", default_value_t = '$')]
    pub end_of_input: char,

    /// Maximum number of steps for a single parse
    #[arg(long)]
    pub step_limit: Option<usize>,

    /// Log every derivation step
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
/// Commands for the ll1 tool
pub enum Commands {
    /// Prints the parse table
    Table,
    /// Parses each input string and reports whether it was accepted
    Parse { inputs: Vec<String> },
}
