//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Heuristic programming-language classifier
#[derive(Parser, Debug)]
#[command(name = "lexident")]
#[command(about = "Detect the programming language of a code snippet, or verify a claimed one")]
#[command(version)]
pub struct Cli {
    /// Path to the file to classify, or "-" to read from stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Claimed language to verify the snippet against (e.g. "py", "c++")
    #[arg(short, long, value_name = "LABEL")]
    pub claim: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable display names
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}
