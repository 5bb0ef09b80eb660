/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod byte_reader;
pub mod diagnostics_reporter;
pub mod output_presenter;

pub use byte_reader::ByteReader;
pub use diagnostics_reporter::DiagnosticsReporter;
pub use output_presenter::OutputPresenter;
