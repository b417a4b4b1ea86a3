//! JSON Reader
//!
//! Reads a graph from a JSON adjacency list: one array of target indices per vertex.
//!
//! ```json
//! [[], [0, 2], [3], []]
//! ```

use crate::graph::Graph;
use crate::io::{IoError, IoResult, Reader};

/// Reader for JSON adjacency lists
pub struct JsonReader;

impl JsonReader {
    /// Create a new JSON reader
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader for JsonReader {
    fn parse(&self, content: &str) -> IoResult<Graph> {
        let adjacency: Vec<Vec<usize>> =
            serde_json::from_str(content).map_err(|e| IoError::Parse(e.to_string()))?;
        Ok(Graph::new(adjacency)?)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
