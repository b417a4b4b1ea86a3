//! Drawing-surface interface for rendering snapshots
//!
//! The layout engine never draws anything. A render loop pulls snapshots from a
//! [`Layout`](crate::layout::Layout) and hands each one to [`draw`] together with
//! the edge list, which is derived once per graph.

use std::f64::consts::PI;

use crate::graph::Edge;
use crate::layout::Snapshot;
use crate::vector::Vector;

/// Something snapshots can be drawn onto
pub trait Surface {
    /// Discard whatever was drawn for the previous snapshot
    fn clear(&mut self);

    /// Draw a directed edge between two vertex positions
    fn draw_edge(&mut self, from: Vector, to: Vector);

    /// Draw vertex `index` at `at`
    fn draw_vertex(&mut self, index: usize, at: Vector);
}

/// Draw one snapshot: edges first so vertices sit on top of them
///
/// Edges whose endpoints are missing from the snapshot are skipped.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, edges: &[Edge], snapshot: &Snapshot) {
    surface.clear();
    for edge in edges {
        if let (Some(from), Some(to)) = (snapshot.get(edge.from), snapshot.get(edge.to)) {
            surface.draw_edge(from, to);
        }
    }
    for (index, at) in snapshot.iter().enumerate() {
        surface.draw_vertex(index, at);
    }
}

/// Half-angle between an arrowhead's wings and its shaft
pub const ARROW_ANGLE: f64 = PI / 6.0;

/// Arrowhead for an edge from `from` to `to`: `[left wing, tip, right wing]`
///
/// The tip sits `inset` short of `to` so it touches the rim of a vertex of that
/// radius; wings are `size` long. `None` when the endpoints coincide or are
/// closer than `inset`.
pub fn arrowhead(from: Vector, to: Vector, inset: f64, size: f64) -> Option<[Vector; 3]> {
    let shaft = to - from;
    if shaft.length() <= inset {
        return None;
    }
    let back = (-shaft).norm().ok()?;
    let tip = to + back.scale(inset);
    let wing = back.scale(size);
    Some([tip + wing.rotate(ARROW_ANGLE), tip, tip + wing.rotate(-ARROW_ANGLE)])
}
