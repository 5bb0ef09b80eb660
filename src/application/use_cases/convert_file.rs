use crate::application::dto::ConvertRequest;
use crate::encoding::Base64Encoder;
use crate::ports::outbound::{ByteReader, DiagnosticsReporter};

/// ConvertFileUseCase - Core use case for file-to-Base64 conversion
///
/// This use case reads the full contents of a file through the ByteReader
/// port and encodes them as Base64 text. Any failure during the read is
/// reported to the DiagnosticsReporter and collapses into `None`; callers
/// never see the underlying fault. Each call is independent: there is no
/// caching, no retrying, and no state shared between invocations.
///
/// # Type Parameters
/// * `BR` - ByteReader implementation
/// * `DR` - DiagnosticsReporter implementation
pub struct ConvertFileUseCase<BR, DR> {
    byte_reader: BR,
    diagnostics: DR,
}

impl<BR, DR> ConvertFileUseCase<BR, DR>
where
    BR: ByteReader,
    DR: DiagnosticsReporter,
{
    /// Creates a new ConvertFileUseCase with injected dependencies
    pub fn new(byte_reader: BR, diagnostics: DR) -> Self {
        Self {
            byte_reader,
            diagnostics,
        }
    }

    /// Executes the conversion
    ///
    /// # Arguments
    /// * `request` - Conversion request containing the source path
    ///
    /// # Returns
    /// `Some(text)` with the Base64 encoding of the file contents, or
    /// `None` if the file could not be read. A zero-byte file yields
    /// `Some` of the empty string, not `None`.
    pub fn execute(&self, request: ConvertRequest) -> Option<String> {
        // Step 1: Read the file contents
        let bytes = match self.byte_reader.read_bytes(&request.source_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.diagnostics.report_error(&Self::describe_failure(&e));
                return None;
            }
        };

        // Step 2: Encode; total for any byte sequence
        Some(Base64Encoder::encode(&bytes))
    }

    /// Renders the error and its cause chain as a single diagnostic message
    fn describe_failure(error: &anyhow::Error) -> String {
        let mut message = format!("An error occurred: {}", error);
        for cause in error.chain().skip(1) {
            message.push_str(&format!("\nCaused by: {}", cause));
        }
        message
    }
}
