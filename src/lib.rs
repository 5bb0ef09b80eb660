//! png2base64 - Convert a file on disk to its Base64 string representation
//!
//! This library reads the raw bytes of a file and encodes them with the
//! standard padded Base64 alphabet, following hexagonal architecture: the
//! core never touches the filesystem or the console directly.
//!
//! # Architecture
//!
//! - **Encoding** (`encoding`): Pure Base64 encoding logic
//! - **Application Layer** (`application`): The conversion use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use png2base64::prelude::*;
//! use std::path::PathBuf;
//!
//! let byte_reader = FileSystemReader::new();
//! let diagnostics = StderrDiagnostics::new();
//! let use_case = ConvertFileUseCase::new(byte_reader, diagnostics);
//!
//! let request = ConvertRequest::new(PathBuf::from("Image.png"));
//! match use_case.execute(request) {
//!     Some(encoded) => println!("{}", encoded),
//!     None => eprintln!("Conversion failed"),
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod encoding;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrDiagnostics;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::ConvertRequest;
    pub use crate::application::use_cases::ConvertFileUseCase;
    pub use crate::encoding::Base64Encoder;
    pub use crate::ports::outbound::{ByteReader, DiagnosticsReporter, OutputPresenter};
    pub use crate::shared::Result;
}
