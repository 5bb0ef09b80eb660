mod adapters;
mod application;
mod cli;
mod encoding;
mod ports;
mod shared;

use adapters::outbound::console::StderrDiagnostics;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use application::dto::ConvertRequest;
use application::use_cases::ConvertFileUseCase;
use cli::Args;
use ports::outbound::OutputPresenter;
use shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

fn main() {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();
    process::exit(run(args).as_i32());
}

fn run(args: Args) -> ExitCode {
    // Create adapters (Dependency Injection)
    let byte_reader = FileSystemReader::new();
    let diagnostics = StderrDiagnostics::new();

    // Create use case with injected dependencies
    let use_case = ConvertFileUseCase::new(byte_reader, diagnostics);

    // Execute use case
    let request = ConvertRequest::new(PathBuf::from(&args.path));
    let encoded = match use_case.execute(request) {
        Some(encoded) => encoded,
        None => {
            // The specific cause was already reported to the diagnostics
            // sink; the user-facing indication stays generic.
            eprintln!("❌ Conversion failed");
            return ExitCode::ConversionFailed;
        }
    };

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    if let Err(e) = presenter.present(&encoded) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        return ExitCode::ApplicationError;
    }

    ExitCode::Success
}
