//! SVG writer for the final layout
//!
//! Draws the last snapshot of a run through [`SvgSurface`], a [`Surface`] that
//! collects SVG elements: each edge is a line with an arrowhead at its target,
//! each vertex a circle.

use std::fmt::Write as _;

use crate::io::{IoError, IoResult, LayoutDocument, Writer};
use crate::render::{self, Surface, arrowhead};
use crate::vector::Vector;

/// Radius of a drawn vertex
pub const VERTEX_RADIUS: f64 = 6.0;

/// Length of an arrowhead wing
pub const ARROW_SIZE: f64 = 8.0;

/// Space between the outermost vertex centers and the edge of the view box
pub const MARGIN: f64 = 20.0;

const STYLE: &str = "<style>.edge{stroke:#64647a;stroke-width:1.5}.arrow{fill:#64647a}.vertex{fill:#4a90d9;stroke:#ffffff;stroke-width:1}</style>";

/// A [`Surface`] that accumulates SVG markup
#[derive(Debug, Default)]
pub struct SvgSurface {
    body: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the drawn elements in an `<svg>` document framing `bounds`
    pub fn finish(self, (lo, hi): (Vector, Vector)) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}">"#,
            lo.x - MARGIN,
            lo.y - MARGIN,
            hi.x - lo.x + 2.0 * MARGIN,
            hi.y - lo.y + 2.0 * MARGIN,
        );
        out.push_str(STYLE);
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw_edge(&mut self, from: Vector, to: Vector) {
        let _ = writeln!(
            self.body,
            r#"<line class="edge" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
            from.x, from.y, to.x, to.y
        );
        if let Some([left, tip, right]) = arrowhead(from, to, VERTEX_RADIUS, ARROW_SIZE) {
            let _ = writeln!(
                self.body,
                r#"<polygon class="arrow" points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}"/>"#,
                left.x, left.y, tip.x, tip.y, right.x, right.y
            );
        }
    }

    fn draw_vertex(&mut self, index: usize, at: Vector) {
        let _ = writeln!(
            self.body,
            r#"<circle class="vertex" data-vertex="{index}" cx="{:.2}" cy="{:.2}" r="{VERTEX_RADIUS}"/>"#,
            at.x, at.y
        );
    }
}

/// Writer for SVG images of the final snapshot
pub struct SvgWriter;

impl SvgWriter {
    /// Create a new SVG writer
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for SvgWriter {
    fn render(&self, document: &LayoutDocument) -> IoResult<String> {
        let snapshot = document
            .final_snapshot()
            .ok_or_else(|| IoError::Write("layout has no snapshots to draw".to_string()))?;

        let mut surface = SvgSurface::new();
        render::draw(&mut surface, &document.edges, snapshot);
        let bounds = snapshot.bounds().unwrap_or((Vector::ZERO, Vector::ZERO));
        Ok(surface.finish(bounds))
    }

    fn format_id(&self) -> &str {
        "svg"
    }
}
