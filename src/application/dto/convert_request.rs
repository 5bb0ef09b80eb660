use std::path::PathBuf;

/// ConvertRequest - Internal request DTO for the conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path to the file whose bytes should be encoded
    pub source_path: PathBuf,
}

impl ConvertRequest {
    pub fn new(source_path: PathBuf) -> Self {
        Self { source_path }
    }
}
