//! CLI Adapter.

use std::ffi::OsString;
use std::iter;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dwg_cleaner")]
#[command(
    about = "Copy a DWG drawing to an output path without modifying it",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// <input_path> <output_path>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    paths: Vec<OsString>,
}

impl Cli {
    /// Parse a full argument vector, program name first.
    ///
    /// An escape is inserted after the program name so every user argument,
    /// including a literal `--`, is kept as a positional value and counted.
    fn parse_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("dwg_cleaner"));
        let escaped = iter::once(program).chain(iter::once(OsString::from("--"))).chain(argv);
        Self::try_parse_from(escaped)
    }
}

/// Entry point for the CLI.
///
/// Every outcome, including usage and copy failures, is reported on stdout
/// and the process exits with status 0.
pub fn run() {
    match Cli::parse_argv(std::env::args_os()) {
        Ok(cli) => crate::app::api::copy_args(cli.paths),
        Err(_) => crate::app::api::usage(),
    };
}
