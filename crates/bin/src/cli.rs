//! CLI argument definitions for the treepath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Query JSON documents with dotted, wildcard-capable paths
#[derive(Parser, Debug)]
#[command(name = "treepath")]
#[command(about = "treepath: resolve dotted paths against JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a path and print the value and the matched paths
    Get(GetArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Path to resolve, e.g. `servers.*.host`
    pub path: String,

    /// JSON document to read; stdin when omitted
    #[arg(short, long, env = "TREEPATH_FILE")]
    pub file: Option<PathBuf>,

    /// JSON value returned when nothing matches
    #[arg(short, long, default_value = "null")]
    pub default: String,

    /// Segment delimiter
    #[arg(long, default_value = treepath::resolve::DEFAULT_DELIMITER, env = "TREEPATH_DELIMITER")]
    pub delimiter: String,

    /// Wildcard token matching any single key
    #[arg(long, default_value = treepath::resolve::DEFAULT_WILDCARD, env = "TREEPATH_WILDCARD")]
    pub wildcard: String,
}
