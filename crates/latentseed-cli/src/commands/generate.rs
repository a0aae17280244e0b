//! Generate command implementation
//!
//! Builds a request, synthesizes the noise batch, optionally writes it to
//! disk, and reports shape, statistics and the canonical request hash.

use anyhow::{Context, Result};
use colored::Colorize;
use latentseed_backend_noise::{synthesize, NoiseField, SynthesisContext};
use latentseed_spec::{
    canonical_request_hash, validate_request, GenerationError, NoiseReport, NoiseRequest,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    error_codes, input_error_to_json, to_pretty, validation_error_to_json,
    validation_warning_to_json, GenerateOutput, JsonError, JsonWarning,
};
use super::validate::print_validation_results;
use crate::input::{load_request, InputError, RequestFlags};
use crate::output::{write_field, OutputFormat};

/// Where the request comes from.
#[derive(Debug, Clone)]
pub enum RequestSource {
    /// A request JSON file, used as-is.
    File(String),
    /// Individual flags, clamped like the host node clamps them.
    Flags(RequestFlags),
}

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source: RequestSource,
    /// Output path for the field, if it should be written.
    pub output: Option<String>,
    pub format: OutputFormat,
    pub json: bool,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success, 1 if the request was rejected
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    if options.json {
        run_json(options)
    } else {
        run_human(options)
    }
}

fn build_request(source: &RequestSource) -> Result<NoiseRequest, InputError> {
    match source {
        RequestSource::File(path) => load_request(Path::new(path)).map(|loaded| loaded.request),
        RequestSource::Flags(flags) => flags.to_request(),
    }
}

/// Synthesized field plus its report.
struct Generated {
    field: NoiseField,
    report: NoiseReport,
}

fn generate(request: NoiseRequest) -> Result<Generated, GenerationError> {
    let request_hash = canonical_request_hash(&request)
        .map_err(|e| GenerationError::new(error_codes::JSON_PARSE, e.to_string(), "cli"))?;

    let start = Instant::now();
    let mut ctx = SynthesisContext::new();
    let field = synthesize(&request, &mut ctx).map_err(GenerationError::from_backend)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let report = NoiseReport::new(
        request_hash,
        request,
        field.shape(),
        field.stats(),
        duration_ms,
    );
    Ok(Generated { field, report })
}

fn save(generated: Generated, options: &GenerateOptions) -> Result<NoiseReport> {
    let Generated { field, report } = generated;
    match options.output.as_deref() {
        Some(path) => {
            write_field(&field, Path::new(path), options.format)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            Ok(report.with_output(path, options.format.as_str()))
        }
        None => Ok(report),
    }
}

fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    let request = build_request(&options.source).context("Failed to build request")?;

    println!(
        "{} {} noise, {}x{} px, seed {}",
        "Generating:".cyan().bold(),
        request.noise_family,
        request.width,
        request.height,
        request.seed
    );

    let validation = validate_request(&request);
    print_validation_results(&validation);

    let generated = match generate(request) {
        Ok(generated) => generated,
        Err(e) => {
            println!("\n{} [{}] {}", "FAILED".red().bold(), e.code, e.message);
            return Ok(ExitCode::from(1));
        }
    };
    let report = save(generated, options)?;

    println!("{} {}", "Shape:".dimmed(), report.shape);
    println!(
        "{} mean {:.4}, std {:.4}, min {:.4}, max {:.4}",
        "Stats:".dimmed(),
        report.stats.mean,
        report.stats.std,
        report.stats.min,
        report.stats.max
    );
    println!("{} {}", "Request:".dimmed(), &report.request_hash[..16]);
    if let (Some(path), Some(format)) = (&report.output_path, &report.output_format) {
        println!("{} {} ({})", "Output:".dimmed(), path, format);
    }

    println!(
        "\n{} Generated {} values ({}ms)",
        "SUCCESS".green().bold(),
        report.shape.len(),
        report.duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let file = match &options.source {
        RequestSource::File(path) => Some(path.as_str()),
        RequestSource::Flags(_) => None,
    };

    let request = match build_request(&options.source) {
        Ok(request) => request,
        Err(e) => {
            let output = GenerateOutput::failure(vec![input_error_to_json(&e, file)], vec![]);
            println!("{}", to_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_request(&request);
    let warnings: Vec<JsonWarning> = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let generated = match generate(request) {
        Ok(generated) => generated,
        Err(e) => {
            let mut errors: Vec<JsonError> = validation
                .errors
                .iter()
                .map(validation_error_to_json)
                .collect();
            errors.push(JsonError::new(e.code, e.message));
            let output = GenerateOutput::failure(errors, warnings);
            println!("{}", to_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
    };

    let output = match save(generated, options) {
        Ok(report) => GenerateOutput::success(report, warnings),
        Err(e) => GenerateOutput::failure(
            vec![JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e))],
            warnings,
        ),
    };
    println!("{}", to_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
