
#[allow(unused_imports)]
pub use memory_file_store::MemoryFileStore;
#[allow(unused_imports)]
pub use recording_status_log::RecordingStatusLog;
