//! Scanline sweep and span emission
//!
//! The sweep owns the only mutable state of the algorithm: the Active
//! Edge Table, rebuilt from scratch on every call and never shared.

use crate::edge::{Edge, EdgeTable};
use crate::vertex::Vertex;

/// Horizontal run of pixels on one row, inclusive on both ends
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub y: i64,
    pub x1: i64,
    pub x2: i64,
}

impl Span {
    /// Number of pixels covered, `x2 - x1 + 1`
    pub fn width(&self) -> i64 {
        self.x2 - self.x1 + 1
    }
}

/// Row-by-row traversal of an [`EdgeTable`]
///
/// Each step merges the current row's bucket into the active set,
/// sorts it by crossing x, and hands the row to the caller; the two
/// emission variants (spans, triangles) differ only in what they do
/// with the sorted set.
#[derive(Debug)]
pub struct ScanlineSweep {
    table: EdgeTable,
    active: Vec<Edge>,
    y: i64,
    started: bool,
}

impl ScanlineSweep {
    /// Start a sweep at the lowest non-empty table row
    ///
    /// `None` when the table holds no edges at all.
    pub fn begin(table: EdgeTable) -> Option<Self> {
        let y = table.first_row()?;
        Some(ScanlineSweep { table, active: vec![], y, started: false })
    }

    /// Step to the next row, returning it with the active edges sorted
    /// by current x
    ///
    /// The sort is stable, so edges with equal x keep their insertion
    /// order. Rows with an empty or single-entry active set are still
    /// yielded; edges expire once the row reaches their `y_max`. The
    /// sweep ends when the active set is empty and the row has passed
    /// the table height.
    pub fn next_row(&mut self) -> Option<(i64, &[Edge])> {
        if self.started {
            self.y += 1;
            for e in self.active.iter_mut() {
                e.x += e.inv_slope;
            }
            let y = self.y;
            self.active.retain(|e| e.y_max > y);
            if self.active.is_empty() && self.y >= self.table.height() {
                return None;
            }
        }
        self.started = true;

        if self.y >= 0 && self.y < self.table.height() {
            let bucket = &mut self.table.rows[self.y as usize];
            self.active.append(bucket);
        }
        self.active.sort_by(|a, b| a.x.total_cmp(&b.x));
        Some((self.y, &self.active))
    }
}

/// Fill a closed polygon, producing one span per pair of edge crossings
///
/// Fewer than 3 vertices is a no-op. Span endpoints are the crossings
/// rounded with `trunc(x + 0.5)`, clamped into `[0, max_width)`; rows
/// outside `[0, max_height)` emit nothing. With an odd number of active
/// edges the trailing crossing degenerates to a single point, which is
/// what the pairing yields for non-simple polygons; no repair is
/// attempted.
pub fn fill(polygon: &[Vertex], max_height: i64, max_width: i64) -> Vec<Span> {
    let mut spans = vec![];
    if polygon.len() < 3 {
        return spans;
    }
    let table = EdgeTable::build(polygon, max_height);
    let mut sweep = match ScanlineSweep::begin(table) {
        Some(sweep) => sweep,
        None => return spans,
    };
    while let Some((y, active)) = sweep.next_row() {
        if active.len() < 2 {
            continue;
        }
        for pair in active.chunks(2) {
            match pair {
                [a, b] => {
                    let mut x1 = (a.x + 0.5) as i64;
                    let mut x2 = (b.x + 0.5) as i64;
                    if x1 > x2 {
                        std::mem::swap(&mut x1, &mut x2);
                    }
                    if x1 < 0 {
                        x1 = 0;
                    }
                    if x2 >= max_width {
                        x2 = max_width - 1;
                    }
                    if x1 <= x2 && y >= 0 && y < max_height {
                        spans.push(Span { y, x1, x2 });
                    }
                }
                [last] => {
                    // odd parity: lone trailing crossing
                    let x = (last.x + 0.5) as i64;
                    if x >= 0 && x < max_width && y >= 0 && y < max_height {
                        spans.push(Span { y, x1: x, x2: x });
                    }
                }
                _ => {}
            }
        }
    }
    spans
}
