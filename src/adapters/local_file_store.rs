//! `FileStore` implementation backed by the local filesystem.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::domain::AppError;
use crate::ports::FileStore;

/// Local filesystem store. Copies file contents only; permissions and
/// timestamps of the source are not carried over.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64, AppError> {
        if is_same_file(from, to) {
            return Err(AppError::SameFile { input: from.to_path_buf(), output: to.to_path_buf() });
        }

        let mut reader = File::open(from)?;
        if reader.metadata()?.is_dir() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: '{}'", from.display()),
            )));
        }

        let mut writer = File::create(to)?;
        let bytes = io::copy(&mut reader, &mut writer)?;
        writer.flush()?;
        Ok(bytes)
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        match (fs::metadata(a), fs::metadata(b)) {
            (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
            _ => false,
        }
    }
    #[cfg(not(unix))]
    {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
