//! indynize
//!
//! Rebuilds a Groovy installation's `lib` directory so invoke-dynamic
//! enabled jars are preferred, keeping the originals in `lib.orig`.

mod cli;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use context::HomeLookup;
use error::{CliError, Result};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{}: {} {}", context::program_name(), "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli);

    let root = HomeLookup::from_env().resolve(cli.groovy_home.clone())?;
    tracing::debug!("Groovy directory: {}", root);

    if cli.restore {
        indy_core::restore(root.clone(), cli.exec_mode()).map_err(CliError::Restore)?;
        tracing::info!(
            "{}Restored {}/lib",
            if cli.dry_run { "[dry-run] " } else { "" },
            root
        );
        return Ok(());
    }

    let report = indy_core::reconcile(root.clone(), cli.reconcile_options())
        .map_err(CliError::Reconcile)?;
    if !report.skipped.is_empty() {
        tracing::warn!("{} original jars could not be linked", report.skipped.len());
    }
    tracing::info!(
        "{}{} indy jars and {} originals linked into {}/lib",
        if cli.dry_run { "[dry-run] " } else { "" },
        report.indy_linked.len(),
        report.originals_linked.len(),
        root
    );
    Ok(())
}

/// Actions go to stderr: `-v` shows debug detail, `-N` at least the plan.
/// `RUST_LOG` overrides both.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.dry_run {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
