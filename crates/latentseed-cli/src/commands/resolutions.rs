//! Resolution table commands (`resolutions`, `resolve`).

use anyhow::Result;
use colored::Colorize;
use latentseed_spec::{ResolutionTable, CUSTOM_RESOLUTION};
use std::process::ExitCode;

use super::json_output::{error_codes, to_pretty, JsonError, ResolutionsOutput, ResolveOutput};

/// Run the resolutions command
///
/// # Arguments
/// * `model` - Restrict output to one model
/// * `json_output` - Print the raw table as JSON
pub fn run_list(model: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let builtin = ResolutionTable::builtin();
    let table = match model {
        Some(name) => match builtin.model(name) {
            Some(entry) => ResolutionTable {
                models: vec![entry.clone()],
            },
            None => return unknown_model(&builtin, name, json_output),
        },
        None => builtin.clone(),
    };

    if json_output {
        let output = ResolutionsOutput {
            success: true,
            errors: Vec::new(),
            table: Some(table),
        };
        println!("{}", to_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    for entry in &table.models {
        println!("{}", entry.model.cyan().bold());
        for preset in &entry.resolutions {
            if preset.is_custom() {
                println!("  {}", preset.name.dimmed());
            } else {
                println!("  {:<28} {}x{}", preset.name, preset.width, preset.height);
            }
        }
    }

    let default = table.default_selection();
    if !default.model.is_empty() {
        println!(
            "\n{} {} / {} ({}x{})",
            "Default:".dimmed(),
            default.model,
            default.resolution,
            default.width,
            default.height
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn unknown_model(table: &ResolutionTable, name: &str, json_output: bool) -> Result<ExitCode> {
    let message = format!(
        "unknown model '{}' (expected one of: {})",
        name,
        table.models().join(", ")
    );
    if json_output {
        let output = ResolutionsOutput {
            success: false,
            errors: vec![JsonError::new(error_codes::UNKNOWN_MODEL, message)],
            table: None,
        };
        println!("{}", to_pretty(&output)?);
    } else {
        println!("{} {}", "FAILED".red().bold(), message);
    }
    Ok(ExitCode::from(1))
}

/// Resolve a model/preset pair to a pixel size.
pub fn resolve(model: &str, resolution: &str, width: u32, height: u32) -> ResolveOutput {
    let table = ResolutionTable::builtin();
    let (w, h) = table.resolve(model, resolution, width, height);
    let from_preset = resolution != CUSTOM_RESOLUTION
        && table
            .model(model)
            .and_then(|m| m.preset(resolution))
            .is_some();

    ResolveOutput {
        model: model.to_string(),
        resolution: resolution.to_string(),
        width: w,
        height: h,
        from_preset,
    }
}

/// Run the resolve command
pub fn run_resolve(
    model: &str,
    resolution: &str,
    width: u32,
    height: u32,
    json_output: bool,
) -> Result<ExitCode> {
    let output = resolve(model, resolution, width, height);

    if json_output {
        println!("{}", to_pretty(&output)?);
    } else {
        let source = if output.from_preset {
            "preset".green()
        } else {
            "manual".yellow()
        };
        println!("{}x{} ({})", output.width, output.height, source);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_uses_preset() {
        let table = ResolutionTable::builtin();
        let default = table.default_selection();
        let output = resolve(&default.model, &default.resolution, 1, 1);
        assert!(output.from_preset);
        assert_eq!((output.width, output.height), (default.width, default.height));
    }

    #[test]
    fn test_resolve_custom_uses_manual_size() {
        let table = ResolutionTable::builtin();
        let model = table.models()[0].to_string();
        let output = resolve(&model, CUSTOM_RESOLUTION, 640, 480);
        assert!(!output.from_preset);
        assert_eq!((output.width, output.height), (640, 480));
    }

    #[test]
    fn test_resolve_unknown_preset_uses_manual_size() {
        let output = resolve("No Such Model", "Square (1:1)", 320, 200);
        assert!(!output.from_preset);
        assert_eq!((output.width, output.height), (320, 200));
    }

    #[test]
    fn test_list_unknown_model_exits_one() {
        assert_eq!(run_list(Some("No Such Model"), false).unwrap(), ExitCode::from(1));
        assert_eq!(run_list(Some("No Such Model"), true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_list_all() {
        assert_eq!(run_list(None, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run_list(None, true).unwrap(), ExitCode::SUCCESS);
    }
}
