//! JSON reporter for machine-readable output

use crate::view::PageState;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a page state as JSON
    pub fn report(&self, state: &PageState) -> String {
        if self.pretty {
            serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
