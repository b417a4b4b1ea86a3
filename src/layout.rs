//! Force-directed layout engine
//!
//! A run is a lazy, finite sequence of [`Snapshot`]s:
//!
//! 1. **Init**: every coordinate is drawn uniformly from `[-d, d]`.
//! 2. **Relax**: `iterations` steps; each step moves every vertex by
//!    `DAMPING * (attraction + repulsion)`, all computed from the previous snapshot.
//! 3. **Done**: the iterator is exhausted and stays exhausted.
//!
//! A run yields `iterations + 1` snapshots. It cannot be rewound; start a new
//! [`Layout`] for a new run.

use std::iter::FusedIterator;
use std::ops::Index;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{DAMPING, LayoutConfig};
use crate::error::{LayoutError, LayoutResult};
use crate::force::{repulsion_force, spring_force};
use crate::graph::Graph;
use crate::vector::Vector;

/// Positions of every vertex at one point of a run, indexed by vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    positions: Vec<Vector>,
}

impl Snapshot {
    pub fn new(positions: Vec<Vector>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, vertex: usize) -> Option<Vector> {
        self.positions.get(vertex).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vector> + '_ {
        self.positions.iter().copied()
    }

    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }

    /// Smallest `(min, max)` corners enclosing every position
    pub fn bounds(&self) -> Option<(Vector, Vector)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (
                Vector::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vector::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl Index<usize> for Snapshot {
    type Output = Vector;

    fn index(&self, vertex: usize) -> &Vector {
        &self.positions[vertex]
    }
}

impl From<Vec<Vector>> for Snapshot {
    fn from(positions: Vec<Vector>) -> Self {
        Self::new(positions)
    }
}

/// Random starting positions, each coordinate uniform in `[-d, d]`
pub fn initial_snapshot<R: Rng>(
    vertex_count: usize,
    optimum_distance: f64,
    rng: &mut R,
) -> Snapshot {
    let d = optimum_distance;
    (0..vertex_count)
        .map(|_| {
            Vector::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0)).scale(d)
        })
        .collect::<Vec<_>>()
        .into()
}

/// Net undamped force on `vertex`: spring pull from each neighbor plus
/// repulsion from every other vertex
fn net_force(graph: &Graph, positions: &Snapshot, vertex: usize, optimum_distance: f64) -> Vector {
    let here = positions[vertex];

    let attraction: Vector = graph
        .neighbors(vertex)
        .unwrap_or_default()
        .iter()
        .map(|&n| spring_force(here, positions[n], optimum_distance))
        .sum();

    let repulsion: Vector = graph
        .vertices()
        .filter(|&w| w != vertex)
        .map(|w| repulsion_force(here, positions[w], optimum_distance))
        .sum();

    attraction + repulsion
}

/// A move that would leave the representable range is dropped.
fn relax(graph: &Graph, positions: &Snapshot, optimum_distance: f64) -> Snapshot {
    graph
        .vertices()
        .map(|v| {
            let here = positions[v];
            let moved = here + net_force(graph, positions, v, optimum_distance).scale(DAMPING);
            if moved.is_finite() { moved } else { here }
        })
        .collect::<Vec<_>>()
        .into()
}

/// One relaxation step
///
/// Every new position is computed from `positions`; the input snapshot is left
/// untouched.
pub fn step(graph: &Graph, positions: &Snapshot, optimum_distance: f64) -> LayoutResult<Snapshot> {
    if positions.len() != graph.vertex_count() {
        return Err(LayoutError::SnapshotMismatch {
            expected: graph.vertex_count(),
            actual: positions.len(),
        });
    }
    Ok(relax(graph, positions, optimum_distance))
}

enum Stage<R> {
    Init(R),
    Relax { current: Snapshot, remaining: usize },
    Done,
}

/// A layout run over a borrowed graph
pub struct Layout<'g, R = StdRng> {
    graph: &'g Graph,
    optimum_distance: f64,
    iterations: usize,
    stage: Stage<R>,
}

impl<'g> Layout<'g, StdRng> {
    /// Start a run seeded from `config.seed`, or from the OS when unset
    pub fn new(graph: &'g Graph, config: &LayoutConfig) -> LayoutResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(graph, config, rng)
    }
}

impl<'g, R: Rng> Layout<'g, R> {
    /// Start a run drawing its initial placement from `rng`
    pub fn with_rng(graph: &'g Graph, config: &LayoutConfig, rng: R) -> LayoutResult<Self> {
        config.validate()?;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            iterations = config.iterations,
            optimum_distance = config.optimum_distance,
            seed = ?config.seed,
            "starting layout run"
        );
        Ok(Self {
            graph,
            optimum_distance: config.optimum_distance,
            iterations: config.iterations,
            stage: Stage::Init(rng),
        })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Run to the end and keep only the final snapshot
    pub fn final_snapshot(self) -> Snapshot {
        self.last().unwrap_or_else(|| Snapshot::new(Vec::new()))
    }
}

impl<R: Rng> Iterator for Layout<'_, R> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        match std::mem::replace(&mut self.stage, Stage::Done) {
            Stage::Init(mut rng) => {
                let start =
                    initial_snapshot(self.graph.vertex_count(), self.optimum_distance, &mut rng);
                if self.iterations > 0 {
                    self.stage = Stage::Relax {
                        current: start.clone(),
                        remaining: self.iterations,
                    };
                }
                Some(start)
            }
            Stage::Relax { current, remaining } => {
                let next = relax(self.graph, &current, self.optimum_distance);
                trace!(step = self.iterations - remaining + 1, "relaxed");
                if remaining > 1 {
                    self.stage = Stage::Relax {
                        current: next.clone(),
                        remaining: remaining - 1,
                    };
                } else {
                    debug!(steps = self.iterations, "layout run finished");
                }
                Some(next)
            }
            Stage::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match &self.stage {
            Stage::Init(_) => self.iterations.saturating_add(1),
            Stage::Relax { remaining, .. } => *remaining,
            Stage::Done => 0,
        };
        (left, Some(left))
    }
}

impl<R: Rng> ExactSizeIterator for Layout<'_, R> {}

impl<R: Rng> FusedIterator for Layout<'_, R> {}

/// Start a layout run over `graph`
pub fn layout<'g>(graph: &'g Graph, config: &LayoutConfig) -> LayoutResult<Layout<'g>> {
    Layout::new(graph, config)
}
