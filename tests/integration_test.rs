/// Integration tests for the application layer
mod test_utilities;

use png2base64::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use test_utilities::mocks::*;

#[test]
fn test_convert_happy_path() {
    let byte_reader = MockByteReader::new(vec![0x00, 0x01, 0x02]);
    let diagnostics = MockDiagnosticsReporter::new();

    let use_case = ConvertFileUseCase::new(byte_reader, diagnostics.clone());
    let result = use_case.execute(ConvertRequest::new(PathBuf::from("Image.png")));

    assert_eq!(result.as_deref(), Some("AAEC"));
    assert!(diagnostics.reported_messages().is_empty());
}

#[test]
fn test_convert_single_zero_byte() {
    let byte_reader = MockByteReader::new(vec![0x00]);
    let diagnostics = MockDiagnosticsReporter::new();

    let use_case = ConvertFileUseCase::new(byte_reader, diagnostics);
    let result = use_case.execute(ConvertRequest::new(PathBuf::from("Image.png")));

    assert_eq!(result.as_deref(), Some("AA=="));
}

#[test]
fn test_convert_empty_bytes_is_success() {
    let byte_reader = MockByteReader::new(vec![]);
    let diagnostics = MockDiagnosticsReporter::new();

    let use_case = ConvertFileUseCase::new(byte_reader, diagnostics);
    let result = use_case.execute(ConvertRequest::new(PathBuf::from("empty.png")));

    // No bytes is a success, distinct from no file.
    assert_eq!(result.as_deref(), Some(""));
}

#[test]
fn test_convert_read_failure_yields_none_and_reports() {
    let byte_reader = MockByteReader::with_failure();
    let diagnostics = MockDiagnosticsReporter::new();

    let use_case = ConvertFileUseCase::new(byte_reader, diagnostics.clone());
    let result = use_case.execute(ConvertRequest::new(PathBuf::from("Image.png")));

    assert!(result.is_none());
    assert_eq!(diagnostics.reported_messages().len(), 1);
}

// Tests below drive the use case through the real filesystem adapter.

fn filesystem_use_case() -> ConvertFileUseCase<FileSystemReader, MockDiagnosticsReporter> {
    ConvertFileUseCase::new(FileSystemReader::new(), MockDiagnosticsReporter::new())
}

#[test]
fn test_convert_file_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("Image.png");
    fs::write(&file_path, [0x00, 0x01, 0x02]).unwrap();

    let use_case = filesystem_use_case();
    let result = use_case.execute(ConvertRequest::new(file_path));

    assert_eq!(result.as_deref(), Some("AAEC"));
}

#[test]
fn test_convert_zero_byte_file_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("empty.png");
    fs::write(&file_path, []).unwrap();

    let use_case = filesystem_use_case();
    let result = use_case.execute(ConvertRequest::new(file_path));

    assert_eq!(result.as_deref(), Some(""));
}

#[test]
fn test_convert_empty_path_yields_none() {
    let use_case = filesystem_use_case();
    let result = use_case.execute(ConvertRequest::new(PathBuf::from("")));

    assert!(result.is_none());
}

#[test]
fn test_convert_missing_file_yields_none() {
    let use_case = filesystem_use_case();
    let result = use_case.execute(ConvertRequest::new(PathBuf::from(
        "/nonexistent/path/Image.png",
    )));

    assert!(result.is_none());
}

#[test]
fn test_convert_is_deterministic_for_fixed_contents() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("Image.png");
    fs::write(&file_path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();

    let use_case = filesystem_use_case();
    let first = use_case.execute(ConvertRequest::new(file_path.clone()));
    let second = use_case.execute(ConvertRequest::new(file_path));

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_convert_rereads_changed_contents() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("Image.png");
    fs::write(&file_path, [0x00]).unwrap();

    let use_case = filesystem_use_case();
    let first = use_case.execute(ConvertRequest::new(file_path.clone()));
    assert_eq!(first.as_deref(), Some("AA=="));

    // No memoization: a rewrite is visible on the next call.
    fs::write(&file_path, [0x00, 0x01, 0x02]).unwrap();
    let second = use_case.execute(ConvertRequest::new(file_path));
    assert_eq!(second.as_deref(), Some("AAEC"));
}
