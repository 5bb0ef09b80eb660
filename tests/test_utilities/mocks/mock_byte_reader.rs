use png2base64::prelude::*;
use std::path::Path;

/// Mock ByteReader for testing
pub struct MockByteReader {
    pub bytes: Vec<u8>,
    pub should_fail: bool,
}

impl MockByteReader {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            bytes: Vec::new(),
            should_fail: true,
        }
    }
}

impl ByteReader for MockByteReader {
    fn read_bytes(&self, _path: &Path) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock byte read failure");
        }
        Ok(self.bytes.clone())
    }
}
