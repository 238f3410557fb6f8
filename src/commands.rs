//! Command implementations for bufdiff CLI

use crate::cli::{resolve_tolerance, Commands, OutputFormat};
use crate::diff::diff_maps;
use crate::document::load_document;
use crate::error::{BufdiffError, Result};
use crate::output::{JsonFormatter, PrettyPrinter};
use std::path::Path;

/// Execute a command
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Diff {
            baseline,
            candidate,
            tolerance,
            format,
            output,
        } => diff_command(
            &baseline,
            &candidate,
            tolerance.as_deref(),
            &format,
            output.as_deref(),
        ),
        Commands::Show { document, format } => show_command(&document, &format),
    }
}

/// Compare two buffer documents and render the differences
fn diff_command(
    baseline: &Path,
    candidate: &Path,
    tolerance: Option<&str>,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let format = OutputFormat::parse(format).map_err(BufdiffError::invalid_input)?;
    let tolerance = resolve_tolerance(tolerance);

    let baseline_map = load_document(baseline)?;
    let candidate_map = load_document(candidate)?;
    log::debug!(
        "Loaded {} baseline and {} candidate variables",
        baseline_map.len(),
        candidate_map.len()
    );

    let result = diff_maps(&baseline_map, &candidate_map, tolerance);

    let baseline_name = baseline.display().to_string();
    let candidate_name = candidate.display().to_string();

    match format {
        OutputFormat::Pretty => {
            PrettyPrinter::print_diff_result(&baseline_name, &candidate_name, &result);
        }
        OutputFormat::Json => {
            let json =
                JsonFormatter::format_diff_result(&baseline_name, &candidate_name, tolerance, &result)?;
            println!("{}", json);
        }
    }

    if let Some(path) = output {
        let json =
            JsonFormatter::format_diff_result(&baseline_name, &candidate_name, tolerance, &result)?;
        std::fs::write(path, json)?;
        log::info!("Diff results written to: {}", path.display());
    }

    Ok(())
}

/// List the variables a single buffer document declares
fn show_command(document: &Path, format: &str) -> Result<()> {
    let format = OutputFormat::parse(format).map_err(BufdiffError::invalid_input)?;

    let variables = load_document(document)?;
    let name = document.display().to_string();

    match format {
        OutputFormat::Pretty => PrettyPrinter::print_variables(&name, &variables),
        OutputFormat::Json => println!("{}", JsonFormatter::format_variables(&name, &variables)?),
    }

    Ok(())
}
