//! Reader/Writer traits and format dispatch
//!
//! Readers turn an adjacency-list file into a [`Graph`]; writers turn the
//! snapshots of a layout run into an output file. The [`FormatRegistry`] picks
//! one by file extension or format id.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::LayoutError;
use crate::graph::{Edge, Graph};
use crate::json_reader::JsonReader;
use crate::json_writer::JsonWriter;
use crate::layout::Snapshot;
use crate::svg_writer::SvgWriter;
use crate::yaml_reader::YamlReader;

/// Errors that can occur during reading or writing
#[derive(Error, Debug)]
pub enum IoError {
    /// The file format is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The file extension could not be determined
    #[error("could not determine file format from path: {0}")]
    UnknownExtension(String),

    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parsing error occurred
    #[error("parse error: {0}")]
    Parse(String),

    /// A rendering/writing error occurred
    #[error("write error: {0}")]
    Write(String),

    /// The data was read but is not a usable graph or configuration
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result type for reader/writer operations
pub type IoResult<T> = Result<T, IoError>;

/// Everything a writer needs from a finished (or partial) layout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    /// In run order; the last entry is the most relaxed layout
    pub snapshots: Vec<Snapshot>,
}

impl LayoutDocument {
    pub fn new(graph: &Graph, snapshots: Vec<Snapshot>) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges(),
            snapshots,
        }
    }

    pub fn final_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

/// A reader parses an adjacency list into a [`Graph`]
pub trait Reader {
    /// Parse file contents
    fn parse(&self, content: &str) -> IoResult<Graph>;

    /// File extensions this reader can handle (e.g., ["yaml", "yml"])
    fn supported_extensions(&self) -> &[&str];

    /// Read and parse the input file
    fn read(&self, input: &Path) -> IoResult<Graph> {
        let content = fs::read_to_string(input)?;
        self.parse(&content)
    }

    /// Check if this reader can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// A writer outputs a layout document in a specific format
pub trait Writer {
    /// Render the document to a string
    fn render(&self, document: &LayoutDocument) -> IoResult<String>;

    /// Identifier for this output format (e.g., "json", "svg")
    fn format_id(&self) -> &str;

    /// Render the document and write it to `output`, creating parent directories
    fn write(&self, document: &LayoutDocument, output: &Path) -> IoResult<()> {
        let rendered = self.render(document)?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, rendered)?;
        Ok(())
    }
}

/// Registry of available readers and writers
pub struct FormatRegistry {
    readers: Vec<Box<dyn Reader>>,
    writers: Vec<Box<dyn Writer>>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
            writers: Vec::new(),
        }
    }

    /// Create a registry with all default readers and writers registered
    ///
    /// Currently registers:
    /// - Readers: `JsonReader` (json), `YamlReader` (yaml, yml)
    /// - Writers: `JsonWriter` (json), `SvgWriter` (svg)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_reader(Box::new(JsonReader::new()));
        registry.register_reader(Box::new(YamlReader::new()));
        registry.register_writer(Box::new(JsonWriter::new()));
        registry.register_writer(Box::new(SvgWriter::new()));
        registry
    }

    /// Register a reader
    pub fn register_reader(&mut self, reader: Box<dyn Reader>) {
        self.readers.push(reader);
    }

    /// Register a writer
    pub fn register_writer(&mut self, writer: Box<dyn Writer>) {
        self.writers.push(writer);
    }

    /// Find a reader for the given file extension
    pub fn reader_for_extension(&self, ext: &str) -> Option<&dyn Reader> {
        self.readers
            .iter()
            .find(|r| r.supports_extension(ext))
            .map(|r| r.as_ref())
    }

    /// Find a writer by format ID
    pub fn writer_for_format(&self, format_id: &str) -> Option<&dyn Writer> {
        self.writers
            .iter()
            .find(|w| w.format_id().eq_ignore_ascii_case(format_id))
            .map(|w| w.as_ref())
    }

    /// Get file extension from a path
    pub fn extension_from_path(path: &Path) -> Option<&str> {
        path.extension().and_then(|e| e.to_str())
    }

    /// Find a reader for the given path based on its extension
    pub fn reader_for_path(&self, path: &Path) -> IoResult<&dyn Reader> {
        let ext = Self::extension_from_path(path)
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?;

        self.reader_for_extension(ext)
            .ok_or_else(|| IoError::UnsupportedFormat(ext.to_string()))
    }

    /// Find a writer for `format`, or for the extension of `path` when no format is given
    pub fn writer_for(&self, format: Option<&str>, path: &Path) -> IoResult<&dyn Writer> {
        let format_id = match format {
            Some(format) => format,
            None => Self::extension_from_path(path)
                .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?,
        };

        self.writer_for_format(format_id)
            .ok_or_else(|| IoError::UnsupportedFormat(format_id.to_string()))
    }
}
