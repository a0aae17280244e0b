//! Validate command implementation
//!
//! Checks a request file without generating anything.

use anyhow::{Context, Result};
use colored::Colorize;
use latentseed_spec::{canonical_request_hash, validate_request, ValidationResult};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, to_pretty, validation_error_to_json, validation_warning_to_json,
    ValidateOutput,
};
use crate::input::{load_request, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `request_path` - Path to the request JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(request_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path)
    } else {
        run_human(request_path)
    }
}

fn run_human(request_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), request_path);

    let LoadResult {
        request,
        source_hash,
    } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;

    let request_hash = canonical_request_hash(&request)?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);
    println!("{} {}", "Request:".dimmed(), &request_hash[..16]);
    println!(
        "{} {} noise, latent {}",
        "Shape:".dimmed(),
        request.noise_family,
        request.latent_shape()
    );

    let result = validate_request(&request);
    print_validation_results(&result);

    if result.is_ok() {
        println!("\n{} Request is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(request_path: &str) -> Result<ExitCode> {
    let LoadResult { request, .. } = match load_request(Path::new(request_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = input_error_to_json(&e, Some(request_path));
            let output = ValidateOutput::new(vec![error], vec![], None, None);
            println!("{}", to_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_request(&request);
    let output = ValidateOutput::new(
        result.errors.iter().map(validation_error_to_json).collect(),
        result.warnings.iter().map(validation_warning_to_json).collect(),
        Some(canonical_request_hash(&request)?),
        Some(request.latent_shape().dims()),
    );
    println!("{}", to_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Print validation results to the console
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}
