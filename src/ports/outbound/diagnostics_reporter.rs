/// DiagnosticsReporter port for surfacing failure causes
///
/// This port abstracts the observability sink (e.g. stderr) that receives
/// a human-readable description of why a conversion failed. Callers of the
/// use case only see an absent result; the cause reaches operators through
/// this port.
pub trait DiagnosticsReporter {
    /// Reports an error message
    ///
    /// # Arguments
    /// * `message` - The error message to report
    fn report_error(&self, message: &str);
}
