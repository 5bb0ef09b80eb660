/// Mock implementations of outbound ports for testing
mod mock_byte_reader;
mod mock_diagnostics_reporter;

pub use mock_byte_reader::MockByteReader;
pub use mock_diagnostics_reporter::MockDiagnosticsReporter;
