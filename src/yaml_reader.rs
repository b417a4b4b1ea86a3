//! YAML Reader
//!
//! Reads a graph from a YAML adjacency list, either in flow style
//! (`[[], [0, 2]]`) or as a block sequence of rows.

use crate::graph::Graph;
use crate::io::{IoError, IoResult, Reader};

/// Reader for YAML adjacency lists
pub struct YamlReader;

impl YamlReader {
    /// Create a new YAML reader
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader for YamlReader {
    fn parse(&self, content: &str) -> IoResult<Graph> {
        let adjacency: Vec<Vec<usize>> =
            serde_yaml::from_str(content).map_err(|e| IoError::Parse(e.to_string()))?;
        Ok(Graph::new(adjacency)?)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use std::path::PathBuf;

    #[test]
    fn yaml_reader_supports_yaml_extensions() {
        let reader = YamlReader::new();
        assert!(reader.supports_extension("yaml"));
        assert!(reader.supports_extension("yml"));
        assert!(reader.supports_extension("YAML"));
        assert!(reader.supports_extension("YML"));
        assert!(!reader.supports_extension("json"));
    }

    #[test]
    fn yaml_reader_parses_block_sequence() {
        let content = "- [1, 2]\n- []\n- [0]\n";
        let graph = YamlReader::new().parse(content).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbors(0).unwrap(), &[1, 2, 2]);
    }

    #[test]
    fn yaml_reader_reads_fixture() {
        let graph = YamlReader::new()
            .read(&PathBuf::from("tests/fixtures/tree.yaml"))
            .expect("Should parse fixture");
        assert_eq!(graph.vertex_count(), 11);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn yaml_reader_rejects_non_list() {
        assert!(matches!(
            YamlReader::new().parse("name: not a graph"),
            Err(IoError::Parse(_))
        ));
    }

    #[test]
    fn yaml_reader_rejects_out_of_range_target() {
        assert!(matches!(
            YamlReader::new().parse("- [1]\n"),
            Err(IoError::Layout(LayoutError::MalformedGraph { .. }))
        ));
    }
}
