use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bodycheck", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Response body file (default: stdin)
    #[arg(value_name = "DOC")]
    pub input: Option<PathBuf>,

    /// YAML checks file to evaluate against the document
    #[arg(long, value_name = "FILE")]
    pub checks: Option<PathBuf>,

    /// Characters of context shown around a casing mismatch
    #[arg(long, default_value_t = 10)]
    pub context_chars: usize,

    /// Neighbouring fragments listed when a fragment is not found
    #[arg(long, default_value_t = 2)]
    pub context_fragments: usize,

    /// Print the checks-file JSON Schema and exit
    #[arg(long)]
    pub schema: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical (normalized) document, for anchor authoring
    Normalize {
        /// Response body file (default: stdin)
        #[arg(value_name = "DOC")]
        doc: Option<PathBuf>,

        /// Keep line breaks as newlines instead of flattening to spaces
        #[arg(long)]
        newlines: bool,
    },
}
