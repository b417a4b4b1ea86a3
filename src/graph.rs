//! Directed graph model built from an adjacency list
//!
//! Vertex `i` is row `i` of the adjacency list; each row holds the targets of
//! the vertex's outbound edges. A graph is validated once at construction and is
//! read-only afterwards, so neighbor lists are computed up front.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// A directed edge between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Edge starts and ends at the same vertex
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self::new(from, to)
    }
}

/// A validated directed graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    /// Outbound targets followed by inbound sources, per vertex
    neighbors: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph, rejecting any target outside `[0, N)`
    pub fn new(adjacency: Vec<Vec<usize>>) -> LayoutResult<Self> {
        let vertex_count = adjacency.len();
        for (vertex, targets) in adjacency.iter().enumerate() {
            if let Some(&target) = targets.iter().find(|&&t| t >= vertex_count) {
                return Err(LayoutError::MalformedGraph {
                    vertex,
                    target,
                    vertex_count,
                });
            }
        }

        let mut neighbors: Vec<Vec<usize>> = adjacency.clone();
        for (source, targets) in adjacency.iter().enumerate() {
            for &target in targets {
                neighbors[target].push(source);
            }
        }
        // Inbound entries were pushed in source order, after the outbound prefix.

        Ok(Self {
            adjacency,
            neighbors,
        })
    }

    /// Graph with `n` vertices and no edges
    pub fn empty(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            neighbors: vec![Vec::new(); n],
        }
    }

    /// The adjacency rows this graph was built from
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertex indices `0..N`
    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// All edges, row by row, then in each row's target order
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| Edge::new(from, to)))
            .collect()
    }

    /// Outbound targets of `vertex` followed by its inbound sources
    ///
    /// Every edge occurrence contributes one entry, so parallel edges appear
    /// once per edge in either direction. `None` if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> Option<&[usize]> {
        self.neighbors.get(vertex).map(Vec::as_slice)
    }
}

impl TryFrom<Vec<Vec<usize>>> for Graph {
    type Error = LayoutError;

    fn try_from(adjacency: Vec<Vec<usize>>) -> LayoutResult<Self> {
        Self::new(adjacency)
    }
}

impl From<Graph> for Vec<Vec<usize>> {
    fn from(graph: Graph) -> Self {
        graph.adjacency
    }
}
