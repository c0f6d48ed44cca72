use crate::ports::{FileStore, StatusLog};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: FileStore, L: StatusLog> {
    files: F,
    log: L,
}

impl<F: FileStore, L: StatusLog> AppContext<F, L> {
    /// Create a new application context.
    pub fn new(files: F, log: L) -> Self {
        Self { files, log }
    }

    /// Get a reference to the file store.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Get a mutable reference to the status log.
    pub fn log_mut(&mut self) -> &mut L {
        &mut self.log
    }

    /// Consume the context, returning its parts.
    pub fn into_parts(self) -> (F, L) {
        (self.files, self.log)
    }
}
