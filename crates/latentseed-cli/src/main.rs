//! latentseed CLI - Command-line interface for latent noise generation
//!
//! This binary generates seeded latent noise batches, validates request
//! files, and looks up model resolution presets.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use latentseed_cli::commands;
use latentseed_cli::commands::generate::{GenerateOptions, RequestSource};
use latentseed_cli::input::RequestFlags;
use latentseed_cli::output::OutputFormat;

/// latentseed - Structured latent noise for image generation models
#[derive(Parser)]
#[command(name = "latentseed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a noise batch
    Generate {
        /// Path to a request JSON file (overrides the individual flags)
        #[arg(short, long)]
        request: Option<String>,

        /// Pixel width
        #[arg(long, default_value_t = 512)]
        width: u32,

        /// Pixel height
        #[arg(long, default_value_t = 512)]
        height: u32,

        /// Number of noise samples
        #[arg(short, long, default_value_t = 1)]
        batch_size: u32,

        /// Model label; any label containing "16ch" selects 16 channels
        #[arg(short, long)]
        model_type: Option<String>,

        /// Latent channel count (4 or 16); overrides --model-type
        #[arg(short, long)]
        channels: Option<u32>,

        /// Noise family label (white, pink, brown, perlin, plasma)
        #[arg(short, long, default_value = "white")]
        noise: String,

        /// Output scale after normalization
        #[arg(short, long, default_value_t = 1.0)]
        intensity: f64,

        /// Random seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Write the field to this path
        #[arg(short, long)]
        output: Option<String>,

        /// Encoding for --output
        #[arg(long, default_value = "f32le", value_parser = OutputFormat::NAMES)]
        format: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a request file without generating
    Validate {
        /// Path to the request JSON file
        #[arg(short, long)]
        request: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List model resolution presets
    Resolutions {
        /// Only list this model
        #[arg(short, long)]
        model: Option<String>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a model/preset pair to a pixel size
    Resolve {
        /// Model name (e.g. "SDXL")
        #[arg(short, long)]
        model: String,

        /// Preset name; "Custom (manual)" uses --width/--height
        #[arg(short, long)]
        resolution: String,

        /// Manual pixel width
        #[arg(long, default_value_t = 512)]
        width: u32,

        /// Manual pixel height
        #[arg(long, default_value_t = 512)]
        height: u32,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            request,
            width,
            height,
            batch_size,
            model_type,
            channels,
            noise,
            intensity,
            seed,
            output,
            format,
            json,
        } => {
            let source = match request {
                Some(path) => RequestSource::File(path),
                None => RequestSource::Flags(RequestFlags {
                    width,
                    height,
                    batch_size,
                    model_type,
                    channels,
                    noise,
                    intensity,
                    seed,
                }),
            };
            format
                .parse::<OutputFormat>()
                .map_err(anyhow::Error::msg)
                .and_then(|format| {
                    commands::generate::run(&GenerateOptions {
                        source,
                        output,
                        format,
                        json,
                    })
                })
        }
        Commands::Validate { request, json } => commands::validate::run(&request, json),
        Commands::Resolutions { model, json } => {
            commands::resolutions::run_list(model.as_deref(), json)
        }
        Commands::Resolve {
            model,
            resolution,
            width,
            height,
            json,
        } => commands::resolutions::run_resolve(&model, &resolution, width, height, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
