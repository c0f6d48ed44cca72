mod file_store;
mod status_log;

pub use file_store::FileStore;
pub use status_log::StatusLog;
