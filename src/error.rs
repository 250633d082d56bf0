//! Error handling for instantiate.
//! Defines the error taxonomy and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while instantiating a project.
///
/// `TemplateNotFoundError` and `DestinationExistsError` are raised before the
/// destination is touched. Everything else may happen after the destination
/// was created, in which case it has already been rolled back by the time the
/// error reaches the caller.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Template \"{template_dir}\" does not exist.")]
    TemplateNotFoundError { template_dir: String },

    #[error("Destination \"{destination}\" already exists.")]
    DestinationExistsError { destination: String },

    /// A template referenced an undefined variable or was malformed.
    #[error("Problem replacing in {path}: {source}")]
    TemplateError {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to load context file \"{path}\": {source}")]
    ContextLoadError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Context key \"{key}\" is reserved and cannot be supplied by a context file.")]
    ReservedContextKey { key: String },

    #[error("Numbering width must be at least 1, got {width}.")]
    InvalidNumberingWidth { width: usize },

    #[error("Invalid skip pattern: {0}")]
    PatternError(#[from] globset::Error),

    #[error("Failed to walk template: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("IO error on \"{path}\": {source}")]
    FileError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Wraps an I/O error together with the path it happened on.
    pub fn file<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        Error::FileError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
