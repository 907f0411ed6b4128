//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use indy_core::{FillPolicy, ReconcileOptions};
use indy_fs::ExecMode;

/// Prefer invoke-dynamic jars in a Groovy installation
///
/// Moves <GROOVY_HOME>/lib to lib.orig once, then rebuilds lib from hard
/// links so every <stem>-indy.jar in <GROOVY_HOME>/indy replaces <stem>.jar.
#[derive(Parser, Debug)]
#[command(name = "indynize")]
#[command(author, version, about)]
pub struct Cli {
    /// Groovy installation root [default: $GROOVY_HOME, then ~/.gvm/groovy/current]
    #[arg(value_name = "GROOVY_HOME")]
    pub groovy_home: Option<PathBuf>,

    /// Be verbose
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't modify anything
    #[arg(short = 'N', long)]
    pub dry_run: bool,

    /// Put lib.orig back in place of lib
    #[arg(long)]
    pub restore: bool,

    /// Keep going when an original jar cannot be linked
    #[arg(long, conflicts_with = "restore")]
    pub best_effort: bool,
}

impl Cli {
    pub fn exec_mode(&self) -> ExecMode {
        ExecMode {
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }

    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions {
            mode: self.exec_mode(),
            fill_policy: if self.best_effort {
                FillPolicy::BestEffort
            } else {
                FillPolicy::Strict
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["indynize"]);
        assert!(cli.groovy_home.is_none());
        assert_eq!(cli.exec_mode(), ExecMode::default());
        assert_eq!(cli.reconcile_options().fill_policy, FillPolicy::Strict);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from(["indynize", "-v", "-N", "/opt/groovy"]);
        assert_eq!(
            cli.exec_mode(),
            ExecMode {
                dry_run: true,
                verbose: true
            }
        );
        assert_eq!(cli.groovy_home, Some(PathBuf::from("/opt/groovy")));
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::parse_from(["indynize", "--dry-run", "--best-effort"]);
        assert!(cli.dry_run);
        assert!(!cli.verbose);
        assert_eq!(cli.reconcile_options().fill_policy, FillPolicy::BestEffort);
    }

    #[test]
    fn restore_conflicts_with_best_effort() {
        let result = Cli::try_parse_from(["indynize", "--restore", "--best-effort"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_extra_positional() {
        let result = Cli::try_parse_from(["indynize", "a", "b"]);
        assert!(result.is_err());
    }
}
