//! Command-line interface for bufdiff

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bufdiff")]
#[command(about = "A tolerance-aware diff tool for exported variable buffer files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two buffer documents
    Diff {
        /// Baseline document path
        baseline: PathBuf,

        /// Candidate document path
        candidate: PathBuf,

        /// Absolute tolerance for numeric comparison; missing or unparsable
        /// values fall back to 0.001
        #[arg(long)]
        tolerance: Option<String>,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Custom output file for diff results
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the variables declared in a buffer document
    Show {
        /// Document path
        document: PathBuf,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,
    },
}

/// Parse output format string
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}

/// Resolve the raw tolerance argument, substituting the default when the
/// value is missing or does not parse as a number.
pub fn resolve_tolerance(raw: Option<&str>) -> f64 {
    match raw {
        Some(s) => match s.trim().parse::<f64>() {
            Ok(tolerance) => tolerance,
            Err(_) => {
                log::debug!("Unparsable tolerance '{}', using default", s);
                crate::DEFAULT_TOLERANCE
            }
        },
        None => crate::DEFAULT_TOLERANCE,
    }
}
