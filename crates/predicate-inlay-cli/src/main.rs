//! Harness binary printing and evaluating predicate expressions.

use clap::Parser;

use predicate_inlay_cli::config::{CliConfig, LogLevel};
use predicate_inlay_cli::error::CliError;
use predicate_inlay_cli::harness::{Assignment, Assignments, DEMO_EXPRESSIONS, run};
use predicate_inlay_cli::logging::init_logging;

/// Compile, print and evaluate boolean predicate expressions.
#[derive(Parser, Debug)]
#[command(name = "predicate-inlay", version, about)]
struct Args {
    /// Expressions to evaluate. A built-in demonstration set is used when
    /// none are given.
    expressions: Vec<String>,

    /// Assign a truth value to a predicate name (repeatable).
    #[arg(long = "set", value_name = "NAME=BOOL")]
    assignments: Vec<Assignment>,

    /// Print the token stream of each expression.
    #[arg(long)]
    tokens: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(args.log_level))
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    let assignments: Assignments = args.assignments.into_iter().collect();
    let expressions = if args.expressions.is_empty() {
        DEMO_EXPRESSIONS.map(String::from).to_vec()
    } else {
        args.expressions
    };
    tracing::debug!(
        expressions = expressions.len(),
        assignments = assignments.len(),
        "starting report"
    );

    let stdout = std::io::stdout();
    match run(&mut stdout.lock(), &expressions, &assignments, args.tokens) {
        Ok(0) => {}
        Ok(failures) => {
            tracing::warn!(failures, "some expressions were rejected");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to write report");
            std::process::exit(1);
        }
    }
}
