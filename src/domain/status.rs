//! Status lines reported while copying.

use std::fmt::{self, Display};

/// Tag prefixed to every status line.
pub const LOG_TAG: &str = "dwg_cleaner";

/// Usage text shown when the argument count is wrong.
pub const USAGE: &str = "Usage: dwg_cleaner.py <input_path> <output_path>";

/// A single line of progress output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Usage,
    InputPath(String),
    OutputPath(String),
    InputMissing,
    Copied,
    CopyFailed(String),
}

impl StatusMessage {
    /// Render the message with its component tag, as written to stdout.
    pub fn tagged(&self) -> String {
        format!("[{}] {}", LOG_TAG, self)
    }
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Usage => f.write_str(USAGE),
            StatusMessage::InputPath(path) => write!(f, "🔍 Input path: {path}"),
            StatusMessage::OutputPath(path) => write!(f, "📤 Output path: {path}"),
            StatusMessage::InputMissing => f.write_str("❌ Input file does not exist."),
            StatusMessage::Copied => f.write_str(
                "✅ Input DWG file copied successfully as output with no modifications to input file",
            ),
            StatusMessage::CopyFailed(reason) => write!(f, "⚠️ Failed to copy file: {reason}"),
        }
    }
}

/// Result of one copy invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Wrong argument count; nothing was touched.
    Usage,
    /// Input path did not exist; nothing was written.
    InputMissing,
    /// Output now holds the input's bytes.
    Copied { bytes: u64 },
    /// Copy was attempted and failed with the given description.
    Failed(String),
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }
}
