use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pagediff operations
#[derive(Error, Debug)]
pub enum PageDiffError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Problems with the texts or directories handed to a command
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot read both sides from stdin")]
    StdinTwice,

    #[error("Notebook directory not found: {path:?}")]
    NotebookNotFound { path: PathBuf },

    #[error("Not a directory: {path:?}")]
    NotADirectory { path: PathBuf },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Unknown config key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
}

/// Result type alias for pagediff operations
pub type PageDiffResult<T> = Result<T, PageDiffError>;

/// Helper trait for adding context to IO errors
pub trait ErrorContext<T> {
    fn context<C>(self, context: C) -> PageDiffResult<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    fn with_context<C, F>(self, f: F) -> PageDiffResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> ErrorContext<T> for Result<T, io::Error> {
    fn context<C>(self, context: C) -> PageDiffResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PageDiffError::Io(io::Error::new(e.kind(), format!("{}: {}", context, e))))
    }

    fn with_context<C, F>(self, f: F) -> PageDiffResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| PageDiffError::Io(io::Error::new(e.kind(), format!("{}: {}", f(), e))))
    }
}

/// Error display helper for the CLI.
///
/// Walks the `anyhow` chain and adds a hint when one of the causes is a
/// known pagediff error.
pub fn display_error(err: &anyhow::Error) {
    use colored::Colorize;

    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} Caused by: {}", "├".bright_black(), cause);
    }

    let hint = err.chain().find_map(|cause| {
        if let Some(config) = cause.downcast_ref::<ConfigError>() {
            return Some(config_hint(config));
        }
        if let Some(input) = cause.downcast_ref::<InputError>() {
            return Some(input_hint(input));
        }
        None
    });

    match hint {
        Some(hint) => eprintln!("  {} {}", "└".bright_cyan(), hint),
        None => eprintln!(
            "  {} Run with {} for more details",
            "└".bright_black(),
            "RUST_LOG=debug".bright_cyan()
        ),
    }
}

fn config_hint(error: &ConfigError) -> String {
    match error {
        ConfigError::NotFound { .. } => "Run: pagediff init".to_string(),
        ConfigError::UnknownKey { .. } => "List valid keys with: pagediff config list".to_string(),
        ConfigError::InvalidValue { field, .. } => match field.as_str() {
            "diff.granularity" => "Expected one of: sentence, word".to_string(),
            "diff.alignment" => "Expected one of: sequence, legacy".to_string(),
            "render.format" => "Expected one of: ansi, markup, html, json".to_string(),
            _ => format!("Check the value given for {}", field),
        },
        ConfigError::VersionMismatch { .. } => {
            "Re-create the config with: pagediff init".to_string()
        }
    }
}

fn input_hint(error: &InputError) -> String {
    match error {
        InputError::StdinTwice => "Pass a file path for at least one side".to_string(),
        InputError::NotebookNotFound { .. } | InputError::NotADirectory { .. } => {
            "Point both arguments at exported notebook directories".to_string()
        }
    }
}
