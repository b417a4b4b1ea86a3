//! JSON writer for layout runs
//!
//! Emits the edge list once plus every retained snapshot, so an external
//! renderer can animate the run frame by frame:
//!
//! ```json
//! {
//!   "vertex_count": 2,
//!   "edges": [{ "from": 0, "to": 1 }],
//!   "snapshots": [[{ "x": 0.0, "y": 0.0 }, { "x": 10.0, "y": 0.0 }]]
//! }
//! ```

use crate::io::{IoError, IoResult, LayoutDocument, Writer};

/// Writer for JSON layout documents
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Create a new JSON writer with pretty-printed output
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON writer that emits a single line
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for JsonWriter {
    fn render(&self, document: &LayoutDocument) -> IoResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };
        rendered.map_err(|e| IoError::Write(e.to_string()))
    }

    fn format_id(&self) -> &str {
        "json"
    }
}
