//! Copy command: echo both paths, check the input, copy, report.

use std::ffi::OsString;

use crate::app::AppContext;
use crate::domain::{CopyOutcome, CopyRequest, StatusMessage};
use crate::ports::{FileStore, StatusLog};

/// Validate the arguments following the program name and run the copy.
///
/// A wrong argument count emits only the usage line and touches nothing.
pub fn run<F, L, I, T>(ctx: &mut AppContext<F, L>, args: I) -> CopyOutcome
where
    F: FileStore,
    L: StatusLog,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match CopyRequest::from_args(args) {
        Ok(request) => execute(ctx, &request),
        Err(_) => report_usage(ctx),
    }
}

/// Emit the usage line.
pub fn report_usage<F: FileStore, L: StatusLog>(ctx: &mut AppContext<F, L>) -> CopyOutcome {
    ctx.log_mut().emit(&StatusMessage::Usage);
    CopyOutcome::Usage
}

/// Copy `request.input` to `request.output`, reporting every step.
///
/// Failures never propagate: each one is reported as a status line and
/// returned as the outcome.
pub fn execute<F: FileStore, L: StatusLog>(
    ctx: &mut AppContext<F, L>,
    request: &CopyRequest,
) -> CopyOutcome {
    ctx.log_mut().emit(&StatusMessage::InputPath(request.input.display().to_string()));
    ctx.log_mut().emit(&StatusMessage::OutputPath(request.output.display().to_string()));

    if !ctx.files().exists(&request.input) {
        ctx.log_mut().emit(&StatusMessage::InputMissing);
        return CopyOutcome::InputMissing;
    }

    match ctx.files().copy(&request.input, &request.output) {
        Ok(bytes) => {
            ctx.log_mut().emit(&StatusMessage::Copied);
            CopyOutcome::Copied { bytes }
        }
        Err(err) => {
            let reason = err.to_string();
            ctx.log_mut().emit(&StatusMessage::CopyFailed(reason.clone()));
            CopyOutcome::Failed(reason)
        }
    }
}
