//! File appender implementation
//!
//! No handle is kept between calls. Every append opens the file, writes one
//! line and releases the handle, so external tools may move or truncate the
//! file at any time.

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits for a newly created log file: owner and group read/write
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o660;

#[derive(Debug, Clone)]
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    /// Bind to `path`. The filesystem is not touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` verbatim in one open/write/close cycle.
    pub fn append(&self, line: &str) -> Result<()> {
        let mut file = self
            .open()
            .map_err(|e| LoggerError::file_open(self.display_path(), e))?;

        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::file_write(self.display_path(), e))?;

        self.close(file)
    }

    /// Release the handle and report a failing `close(2)`.
    ///
    /// Dropping a `File` discards the close result, so the descriptor is
    /// closed explicitly.
    #[cfg(unix)]
    fn close(&self, file: File) -> Result<()> {
        use std::os::unix::io::IntoRawFd;

        nix::unistd::close(file.into_raw_fd())
            .map_err(|errno| LoggerError::file_close(self.display_path(), io::Error::from(errno)))
    }

    #[cfg(not(unix))]
    fn close(&self, file: File) -> Result<()> {
        drop(file);
        Ok(())
    }

    fn open(&self) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        options.open(&self.path)
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
