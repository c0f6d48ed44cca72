use crate::domain::StatusMessage;

/// Port for reporting progress lines.
pub trait StatusLog {
    /// Emit one status line immediately.
    fn emit(&mut self, message: &StatusMessage);
}
