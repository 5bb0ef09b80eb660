use crate::ports::outbound::ByteReader;
use crate::shared::error::ConvertError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the ByteReader port, reading the complete
/// contents of a file into memory in a single blocking call. The file
/// handle is acquired and released within the read; no handle survives
/// an error path.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteReader for FileSystemReader {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        // An empty path never reaches the filesystem.
        if path.as_os_str().is_empty() {
            return Err(ConvertError::EmptyPath.into());
        }

        fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConvertError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into(),
            _ => ConvertError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into(),
        })
    }
}
