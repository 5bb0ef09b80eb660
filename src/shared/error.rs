use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different kinds of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the file was read and encoded
    Success = 0,
    /// The conversion yielded no value (empty path, missing file, I/O fault)
    ConversionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (output could not be presented)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConversionFailed => write!(f, "Conversion Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for file-to-Base64 conversion.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
/// The read-side variants never cross the use-case boundary as errors;
/// they collapse into an absent result after being reported to the
/// diagnostics sink.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Source path is empty\n\n💡 Hint: Please specify the path to the file to encode")]
    EmptyPath,

    #[error("File not found: {path}\n\n💡 Hint: Please verify the path and try again")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
