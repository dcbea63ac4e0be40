use dependabot_report::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
    pub warnings: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn get_warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn begin_wait(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn end_wait(&self) {}

    fn report_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn report_summary(&self, summary: &SeveritySummary) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("summary: {} open", summary.total()));
    }
}
