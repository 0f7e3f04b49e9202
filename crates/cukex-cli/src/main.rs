//! Translate Cucumber Expressions given on the command line into anchored
//! regular expressions, one per line.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error};

use cukex_cli::config::{CliConfig, LogLevel};
use cukex_cli::error::CliError;
use cukex_cli::logging::init_logging;
use cukex_cli::output::write_regexes;

/// Translate Cucumber Expressions into regular expressions.
#[derive(Parser, Debug)]
#[command(name = "cukex", version, about)]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// JSON file of custom parameter types, overriding `CUKEX_PARAMETER_TYPES`.
    #[arg(long, value_name = "PATH")]
    parameter_types: Option<PathBuf>,

    /// Expressions to translate, in order.
    #[arg(required = true, value_name = "EXPRESSION")]
    expressions: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    let registry = config.registry.load_registry();
    debug!(
        path = %config.registry.parameter_types_path.display(),
        types = registry.len(),
        "parameter types loaded"
    );

    let mut stdout = io::stdout().lock();
    if let Err(e) = write_regexes(&mut stdout, &registry, &args.expressions) {
        error!(error = %format!("{e:#}"), "translation failed");
        std::process::exit(1);
    }
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(args.log_level, args.parameter_types.clone()))
}
