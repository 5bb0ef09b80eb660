use crate::shared::Result;
use std::path::Path;

/// ByteReader port for reading raw file contents
///
/// This port abstracts the file system operations needed to read
/// the full contents of a file into memory.
pub trait ByteReader {
    /// Reads the complete contents of the file at the given path
    ///
    /// # Arguments
    /// * `path` - Path to the file to read; may be any string, including empty
    ///
    /// # Returns
    /// The raw bytes of the file. A zero-length file yields an empty
    /// vector, which is a successful result.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path is empty
    /// - No file exists at the path
    /// - The file cannot be read due to permissions or I/O errors
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}
