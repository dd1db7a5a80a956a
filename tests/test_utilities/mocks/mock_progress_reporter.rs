use dep_manifest::ports::outbound::ProgressReporter;
use std::sync::Mutex;

/// Mock ProgressReporter that records messages for assertions
pub struct MockProgressReporter {
    messages: Mutex<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    fn record(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(message);
    }

    fn report_error(&self, message: &str) {
        self.record(message);
    }

    fn report_completion(&self, message: &str) {
        self.record(message);
    }
}

// Reference impl so tests can inspect recorded messages after the use
// case consumed the reporter.
impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(message);
    }

    fn report_error(&self, message: &str) {
        self.record(message);
    }

    fn report_completion(&self, message: &str) {
        self.record(message);
    }
}
