//! dwg_cleaner: copy a DWG drawing from an input path to an output path,
//! reporting each step on stdout.
//!
//! The drawing is treated as an opaque byte stream; nothing is parsed or
//! rewritten.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{copy_args, copy_file, run};
pub use domain::{AppError, CopyOutcome, CopyRequest, LOG_TAG, StatusMessage};
