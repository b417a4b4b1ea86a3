//! spring-embedder - Force-directed layout for directed graphs.
//!
//! Vertices repel each other like charged particles while edges pull their
//! endpoints together like logarithmic springs. A [`Layout`] run yields one
//! [`Snapshot`] of positions per relaxation step, suitable for animation.
//!
//! ```
//! use spring_embedder::{Graph, LayoutConfig, layout};
//!
//! let graph = Graph::new(vec![vec![1, 2], vec![2], vec![]])?;
//! let config = LayoutConfig::default().with_iterations(20).with_seed(7);
//!
//! let snapshots: Vec<_> = layout(&graph, &config)?.collect();
//! assert_eq!(snapshots.len(), 21);
//! for snapshot in &snapshots {
//!     assert_eq!(snapshot.len(), 3);
//!     assert!(snapshot.iter().all(|p| p.is_finite()));
//! }
//! # Ok::<(), spring_embedder::LayoutError>(())
//! ```

pub mod config;
pub mod error;
pub mod force;
pub mod graph;
pub mod io;
pub mod json_reader;
pub mod json_writer;
pub mod layout;
pub mod render;
pub mod svg_writer;
pub mod vector;
pub mod yaml_reader;

pub use config::LayoutConfig;
pub use error::{LayoutError, LayoutResult};
pub use graph::{Edge, Graph};
pub use layout::{Layout, Snapshot, layout, step};
pub use vector::Vector;
