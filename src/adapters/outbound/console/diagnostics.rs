use crate::ports::outbound::DiagnosticsReporter;

/// StderrDiagnostics adapter for reporting failure causes to stderr
///
/// This adapter implements the DiagnosticsReporter port, writing
/// diagnostics to stderr so they don't interfere with the encoded
/// payload on stdout.
pub struct StderrDiagnostics;

impl StderrDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsReporter for StderrDiagnostics {
    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}
