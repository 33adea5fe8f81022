//! Edge Table construction
//!
//! Every polygon edge is turned into an [`Edge`] record and binned by
//! the row at which it starts being active. The scanline sweep then
//! consumes the table bucket by bucket, bottom row first.

use crate::vertex::{classify, Vertex, VertexKind};

/// One polygon edge as tracked by the scanline sweep
#[derive(Debug,Clone)]
pub struct Edge {
    /// Row just past the upper endpoint; the edge is active while the
    /// current scanline is below this
    pub y_max: i64,
    /// Crossing x at the current scanline, advanced by `inv_slope`
    /// every row
    pub x: f64,
    /// dx/dy from the lower to the upper endpoint, 0 for a horizontal
    /// edge
    pub inv_slope: f64,
    /// Row at which the edge becomes active; only used to pick the
    /// table bucket
    pub y_min: i64,
}

fn inverse_slope(lower: Vertex, upper: Vertex) -> f64 {
    let dx = (upper.x - lower.x) as f64;
    let dy = (upper.y - lower.y) as f64;
    if dy == 0.0 {
        return 0.0;
    }
    dx / dy
}

/// Per-row buckets of edges over `[0, height)`, keyed by adjusted `y_min`
///
/// Built once per fill or triangulate call, drained once by the sweep,
/// then discarded.
#[derive(Debug,Default)]
pub struct EdgeTable {
    pub rows: Vec<Vec<Edge>>,
}

impl EdgeTable {
    /// Build the table for a closed polygon
    ///
    /// Horizontal edges are recorded as degenerate zero-slope entries
    /// on their own row; they expire after one row and never widen a
    /// span. Edges whose starting row falls outside `[0, max_height)`
    /// are dropped, which silently clips geometry above or below the
    /// table.
    pub fn build(polygon: &[Vertex], max_height: i64) -> Self {
        let height = if max_height > 0 { max_height as usize } else { 0 };
        let mut table = EdgeTable { rows: vec![vec![]; height] };

        if polygon.len() < 2 {
            return table;
        }
        let kinds = classify(polygon);

        let n = polygon.len();
        for i in 0..n {
            let cur = polygon[i];
            let next = polygon[(i + 1) % n];

            if cur.y == next.y {
                if cur.y >= 0 && cur.y < max_height {
                    table.rows[cur.y as usize].push(Edge {
                        y_max: next.y,
                        x: cur.x as f64,
                        inv_slope: 0.0,
                        y_min: cur.y,
                    });
                }
                continue;
            }

            let (lower_idx, lower, upper) = if cur.y < next.y {
                (i, cur, next)
            } else {
                ((i + 1) % n, next, cur)
            };

            let inv_slope = inverse_slope(lower, upper);
            let mut x = lower.x as f64;
            let mut y_min = lower.y;
            let y_max = upper.y;

            // A local minimum starts one row late so its two rising
            // edges do not both cross the vertex row. Only applied when
            // the unadjusted row is already inside the table.
            if y_min >= 0 && y_min < max_height && kinds[lower_idx] == VertexKind::Valley {
                y_min += 1;
                x += inv_slope;
            }

            if y_min >= 0 && y_min < max_height {
                table.rows[y_min as usize].push(Edge { y_max, x, inv_slope, y_min });
            }
        }
        table
    }

    /// Lowest row holding at least one edge
    pub fn first_row(&self) -> Option<i64> {
        self.rows.iter().position(|b| !b.is_empty()).map(|i| i as i64)
    }

    pub fn height(&self) -> i64 {
        self.rows.len() as i64
    }
}
