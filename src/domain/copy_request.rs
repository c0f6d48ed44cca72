use std::ffi::OsString;
use std::path::PathBuf;

use super::AppError;

/// Input and output locations for a single copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl CopyRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output: output.into() }
    }

    /// Build a request from the arguments following the program name.
    ///
    /// Anything other than exactly two arguments is a usage error.
    pub fn from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        match (args.next(), args.next(), args.next()) {
            (Some(input), Some(output), None) => Ok(Self::new(input, output)),
            _ => Err(AppError::Usage),
        }
    }
}
