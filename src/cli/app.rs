//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser};

use super::commands;
use typed_styles::core::models::{ExportType, LogLevel, NameFormat, QuoteType};
use typed_styles::output::OutputMode;

/// typed-styles - Verify generated CSS module type definitions
#[derive(Parser, Debug)]
#[command(
    name = "typed-styles",
    version,
    about = "Verify that CSS module type definitions are present and up to date",
    long_about = "Check generated TypeScript declarations for CSS modules.\n\n\
                  Every stylesheet matching the pattern is scanned for class names and its\n\
                  declaration is regenerated in memory. The run fails if any declaration\n\
                  file is missing or differs from what would be generated."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub check: CheckArgs,
}

/// Pattern and generation options for a check run
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Glob pattern (or directory) selecting the stylesheets to check
    pub pattern: String,

    /// Config file (defaults to typed-styles.toml in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Class name format: camel, kebab, param, snake, dashes, none
    #[arg(short, long)]
    pub name_format: Option<NameFormat>,

    /// Export type: named, default
    #[arg(short, long)]
    pub export_type: Option<ExportType>,

    /// Name of the class-name union type for default exports
    #[arg(long)]
    pub export_type_name: Option<String>,

    /// Name of the styles object type for default exports
    #[arg(long)]
    pub export_type_interface: Option<String>,

    /// Quote type for default export keys: single, double
    #[arg(short, long)]
    pub quote_type: Option<QuoteType>,

    /// Banner prepended to every declaration
    #[arg(long)]
    pub banner: Option<String>,

    /// Folder where declarations live, mirroring source paths
    #[arg(short, long)]
    pub output_folder: Option<PathBuf>,

    /// Expect `a.d.scss.ts` instead of `a.scss.d.ts`
    #[arg(long)]
    pub allow_arbitrary_extensions: bool,

    /// Glob patterns to exclude (repeatable)
    #[arg(short, long)]
    pub ignore: Vec<String>,

    /// Alert verbosity: silent, minimal, verbose
    #[arg(short = 'L', long)]
    pub log_level: Option<LogLevel>,

    /// Maximum number of files checked at once
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::check(&cli.check, output_mode)
}
