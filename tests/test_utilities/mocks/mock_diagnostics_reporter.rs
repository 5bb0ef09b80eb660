use png2base64::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DiagnosticsReporter that captures reported messages
///
/// Clones share the same message buffer, so a clone can be handed to the
/// use case while the test keeps the original for inspection.
#[derive(Clone, Default)]
pub struct MockDiagnosticsReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockDiagnosticsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl DiagnosticsReporter for MockDiagnosticsReporter {
    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
