use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dwg_cleaner operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Wrong number of command-line arguments.
    #[error("expected exactly two arguments: <input_path> <output_path>")]
    Usage,

    /// Input and output resolve to the same file.
    #[error("'{}' and '{}' are the same file", .input.display(), .output.display())]
    SameFile { input: PathBuf, output: PathBuf },
}
