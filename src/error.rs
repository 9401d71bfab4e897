//! Error handling for the tc-skeleton application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for tc-skeleton operations.
///
/// All variants are fatal: nothing is retried or rolled back, a failure
/// mid-generation may leave a partial plugin tree on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The destination plugin directory already exists; we never overwrite
    #[error("destination '{dest}' already exists, refusing to overwrite")]
    DestinationExists { dest: String },

    /// A skeleton source tree is absent or not a directory
    #[error("skeleton directory '{path}' does not exist")]
    MissingSkeleton { path: String },

    /// Represents validation failures in user input
    #[error("invalid feature name: {0}")]
    InvalidName(String),

    /// A path could not be interpreted (non-UTF-8 component, bad prefix)
    #[error("path error: {0}")]
    Path(String),
}

/// Convenience type alias for Results with tc-skeleton's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
