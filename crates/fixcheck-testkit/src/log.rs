//! A recording severity logger for tests.

use std::sync::Mutex;

use fixcheck_domain::SeverityLog;

/// Records every message at or above its minimum severity, in call order.
#[derive(Debug, Default)]
pub struct RecordingLog {
    min_severity: u32,
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    /// A logger that keeps messages at or above `min_severity`.
    pub fn with_min_severity(min_severity: u32) -> Self {
        Self {
            min_severity,
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("recording log poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

impl SeverityLog for RecordingLog {
    fn log(&self, severity: u32, message: &str) {
        if severity >= self.min_severity {
            self.lines
                .lock()
                .expect("recording log poisoned")
                .push(message.to_string());
        }
    }
}
