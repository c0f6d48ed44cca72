pub mod console_status_log;
pub mod local_file_store;

pub use console_status_log::ConsoleStatusLog;
pub use local_file_store::LocalFileStore;
