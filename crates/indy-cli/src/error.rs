//! Error types for indy-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No argument, `GROOVY_HOME`, `GVM_DIR` or home directory to go on
    #[error("failed to obtain Groovy directory (pass it as an argument or set GROOVY_HOME)")]
    NoGroovyHome,

    #[error("failed to indynize ({0})")]
    Reconcile(#[source] indy_core::Error),

    #[error("failed to restore ({0})")]
    Restore(#[source] indy_core::Error),
}
