//! API Facade for the application.
//!
//! Wires the local filesystem and stdout into an `AppContext` and runs the
//! copy command.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::adapters::{ConsoleStatusLog, LocalFileStore};
use crate::app::{AppContext, commands::copy};
use crate::domain::{CopyOutcome, CopyRequest};

fn create_context() -> AppContext<LocalFileStore, ConsoleStatusLog> {
    AppContext::new(LocalFileStore::new(), ConsoleStatusLog::stdout())
}

/// Run with a full argument vector, program name first.
pub fn run<I, T>(argv: I) -> CopyOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    copy_args(argv.into_iter().skip(1))
}

/// Run with the arguments that follow the program name.
pub fn copy_args<I, T>(args: I) -> CopyOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    copy::run(&mut create_context(), args)
}

/// Copy `input` to `output`, reporting on stdout.
pub fn copy_file(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> CopyOutcome {
    copy::execute(&mut create_context(), &CopyRequest::new(input, output))
}

/// Print the usage line.
pub fn usage() -> CopyOutcome {
    copy::report_usage(&mut create_context())
}
