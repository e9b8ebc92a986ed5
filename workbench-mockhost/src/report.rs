//! Error-reporter double.

use std::sync::Mutex;
use workbench_host::{ErrorReporter, HostError};

/// Captures every reported error as its display string.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Mutex<Vec<String>>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().unwrap().is_empty()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&self, error: &HostError) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}
