//! Check declarations for every stylesheet matching a pattern

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use crate::cli::app::CheckArgs;
use typed_styles::adapters::{ConsoleAlerts, SelectorScanner, TypeScriptGenerator, TypeScriptLocator};
use typed_styles::config::Config;
use typed_styles::core::models::LogLevel;
use typed_styles::core::services::{ConsistencyChecker, Validator};
use typed_styles::output::{CheckResult, OutputMode};

/// Run the consistency check and map the verdict to an exit code
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let config = build_config(args, &cwd)?;

    // JSON mode keeps stdout for the final report
    let level = if mode == OutputMode::Json {
        LogLevel::Silent
    } else {
        config.log_level
    };

    let checker = ConsistencyChecker::new(
        Arc::new(SelectorScanner),
        Arc::new(TypeScriptGenerator),
        Arc::new(TypeScriptLocator::new(&cwd)),
        Arc::new(ConsoleAlerts::new(level)),
    );
    let validator = Validator::new(checker);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let report = runtime
        .block_on(validator.run(&args.pattern, Arc::new(config)))
        .with_context(|| format!("failed to resolve pattern {:?}", args.pattern))?;

    CheckResult::from_report(&report).render(mode);

    let verdict = report.verdict();
    log::debug!("Exiting with {verdict:?}");
    Ok(ExitCode::from(verdict.exit_code()))
}

/// Load the config file and apply command-line overrides
pub fn build_config(args: &CheckArgs, cwd: &Path) -> anyhow::Result<Config> {
    let mut config = Config::discover(args.config.as_deref(), cwd)?;

    if let Some(name_format) = args.name_format {
        config.name_format = name_format;
    }
    if let Some(export_type) = args.export_type {
        config.export_type = export_type;
    }
    if let Some(name) = &args.export_type_name {
        config.export_type_name.clone_from(name);
    }
    if let Some(interface) = &args.export_type_interface {
        config.export_type_interface.clone_from(interface);
    }
    if let Some(quote_type) = args.quote_type {
        config.quote_type = quote_type;
    }
    if args.banner.is_some() {
        config.banner.clone_from(&args.banner);
    }
    if args.output_folder.is_some() {
        config.output_folder.clone_from(&args.output_folder);
    }
    if args.allow_arbitrary_extensions {
        config.allow_arbitrary_extensions = true;
    }
    config.ignore.extend(args.ignore.iter().cloned());
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    if args.concurrency.is_some() {
        config.concurrency = args.concurrency;
    }

    config.validate()?;
    Ok(config)
}
