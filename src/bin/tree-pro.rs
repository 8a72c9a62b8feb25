//! tree-pro CLI Binary
//!
//! Prints a directory tree with long file listings truncated and
//! structurally identical directories collapsed.

use clap::Parser;
use std::io::{self, Write};
use std::process;
use tracing::{error, info};
use tree_pro::cli::{map_error, Cli, RunContext};
use tree_pro::config::ConfigLoader;
use tree_pro::error::ApiError;
use tree_pro::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Configuration is loaded once and shared by logging and the run
    let loaded = ConfigLoader::load(cli.config.as_deref());
    let file_logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    let logging_config = apply_cli_overrides(file_logging, &cli);

    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("tree-pro starting");

    let context = match loaded {
        Ok(config) => RunContext::with_config(config),
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let result = context
        .execute(&cli)
        .and_then(|output| write_output(&mut io::stdout().lock(), &output));

    match result {
        Ok(()) => info!("Command completed successfully"),
        // Closed pipe, e.g. `tree-pro | head`
        Err(ApiError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => process::exit(1),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Apply logging flags on top of the configured values.
/// Precedence: `--quiet` over the other flags over config file over defaults.
fn apply_cli_overrides(mut config: LoggingConfig, cli: &Cli) -> LoggingConfig {
    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.enabled = true;
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.output = "file".to_string();
        config.file = Some(file.clone());
    }
    if cli.quiet {
        config.enabled = false;
        config.force_off = true;
    }

    config
}

fn write_output<W: Write>(out: &mut W, output: &str) -> Result<(), ApiError> {
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}
