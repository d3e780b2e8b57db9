//! mediasweep - Clean up media files no record references
//!
//! This is the CLI application that drives detection, quarantine and
//! retention through the ops crate.

mod cli;
mod display;
mod error;

use crate::cli::{CleanupArgs, Cli, Commands, GlobalArgs};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Confirm};
use mediasweep_config::Config;
use mediasweep_errors::{ConfigError, Error, OpsError};
use mediasweep_ops::{CleanupRequest, OperationResult, OpsCtx};
use mediasweep_types::{ColorChoice, Disposal, OutputFormat};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli) {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting mediasweep v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(cli.global.config.as_deref())?;

    // 2. Merge environment variables
    config.merge_env()?;

    // 3. Apply CLI flags (highest precedence)
    apply_cli_config(&mut config, &cli.global);

    let json_output = config.general.default_output == OutputFormat::Json;
    let color = match config.general.default_output {
        OutputFormat::Plain => ColorChoice::Never,
        _ => config.general.color,
    };
    let quiet = matches!(&cli.command, Commands::Cleanup(args) if args.quiet);
    let renderer = OutputRenderer::new(json_output, color).quiet(quiet);

    if let Some(result) = execute_command(cli.command, config, &renderer)? {
        renderer.render_result(&result)?;
    }

    info!("Command completed successfully");
    Ok(())
}

/// Execute the specified command
///
/// Returns `None` when the command already wrote its output.
///
/// The sweep needs no registry, so only the other commands build the full
/// operations context.
fn execute_command(
    command: Commands,
    config: Config,
    renderer: &OutputRenderer,
) -> Result<Option<OperationResult>, CliError> {
    match command {
        Commands::Cleanup(args) => {
            let ctx = OpsCtx::from_config(config)?;
            run_cleanup(&args, &ctx, renderer)
        }

        Commands::Sweep { dry_run } => {
            let now = chrono::Local::now().naive_local();
            let report = mediasweep_ops::sweep(&config, now, dry_run)?;
            Ok(Some(OperationResult::Sweep(report)))
        }

        Commands::Models => {
            let ctx = OpsCtx::from_config(config)?;
            let models = mediasweep_ops::list_models(&ctx)?;
            Ok(Some(OperationResult::Models(models)))
        }
    }
}

fn run_cleanup(
    args: &CleanupArgs,
    ctx: &OpsCtx,
    renderer: &OutputRenderer,
) -> Result<Option<OperationResult>, CliError> {
    if args.show_possible_models {
        let models = mediasweep_ops::list_models(ctx)?;
        if renderer.is_json() {
            return Ok(Some(OperationResult::Models(models)));
        }
        renderer.render_model_names("Possible models are:", &models);
        return Ok(None);
    }

    let disposal = args.disposal();
    let request = CleanupRequest::new()
        .exclude(args.exclude.iter().cloned())
        .include_models(args.include_models.iter().cloned())
        .dry_run(args.dry_run)
        .disposal(disposal)
        .remove_empty_dirs(args.remove_empty_dirs);

    let result = mediasweep_ops::cleanup(ctx, &request, |unused| {
        if args.no_input {
            return Ok(true);
        }
        renderer.render_pending(unused, disposal);
        confirm(unused.len(), disposal)
    });

    match result {
        Ok(report) => Ok(Some(OperationResult::Cleanup(report))),
        Err(Error::Config(ConfigError::UnknownModels {
            requested,
            available,
        })) => {
            renderer.render_unknown_models(&requested, &available);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Ask the operator before anything is moved or deleted
fn confirm(count: usize, disposal: Disposal) -> Result<bool, Error> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(OutputRenderer::confirmation_prompt(count, disposal))
        .default(false)
        .interact()
        .map_err(|e| {
            OpsError::ConfirmationFailed {
                message: e.to_string(),
            }
            .into()
        })
}

/// Initialize tracing/logging
///
/// Logs always go to stderr so stdout carries only command output.
fn init_tracing(json_mode: bool, debug_enabled: bool) {
    let default_filter = if debug_enabled {
        "info,mediasweep=debug,mediasweep_ops=debug,mediasweep_scan=debug,mediasweep_quarantine=debug"
    } else {
        "warn,mediasweep=warn,mediasweep_ops=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, global: &GlobalArgs) {
    if let Some(color) = global.color {
        config.general.color = color;
    }

    if global.json {
        config.general.default_output = OutputFormat::Json;
    }

    if let Some(root) = &global.media_root {
        config.media.root = Some(root.clone());
    }

    if let Some(registry) = &global.registry {
        config.media.registry = Some(registry.clone());
    }
}
