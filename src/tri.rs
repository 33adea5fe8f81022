//! Scanline triangulation
//!
//! Reuses the span sweep but splits each row's trapezoid into two
//! triangles instead of emitting pixels. The result is a row-by-row
//! cover of the polygon that stays valid for concave and irregularly
//! wound outlines, at the cost of `O(height x spans)` triangles; no
//! merging across rows is attempted. Callers extruding into 3D lift
//! these into world space themselves.

use crate::edge::EdgeTable;
use crate::scan::ScanlineSweep;
use crate::vertex::Vertex;

/// Triangle in row/column space
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

/// Triangulate a closed polygon
///
/// For each pair of edge crossings at row `y` the next row's crossings
/// are predicted with the inverse slopes, and the height-1 trapezoid
/// between them is emitted as two triangles with coordinates truncated
/// toward zero. A trailing unpaired crossing emits nothing. Unlike
/// [`fill`](crate::scan::fill) there is no width clamp and no row
/// guard: edges whose `y_max` lies beyond the table height keep
/// emitting until they expire.
pub fn triangulate(polygon: &[Vertex], max_height: i64) -> Vec<Triangle> {
    let mut triangles = vec![];
    if polygon.len() < 3 {
        return triangles;
    }
    let table = EdgeTable::build(polygon, max_height);
    let mut sweep = match ScanlineSweep::begin(table) {
        Some(sweep) => sweep,
        None => return triangles,
    };
    while let Some((y, active)) = sweep.next_row() {
        if active.len() < 2 {
            continue;
        }
        for pair in active.chunks_exact(2) {
            let (ea, eb) = (&pair[0], &pair[1]);
            let x1 = ea.x;
            let x2 = eb.x;
            let x1_next = x1 + ea.inv_slope;
            let x2_next = x2 + eb.inv_slope;

            let p1 = Vertex::new(x1 as i64, y);
            let p2 = Vertex::new(x2 as i64, y);
            let p3 = Vertex::new(x1_next as i64, y + 1);
            let p4 = Vertex::new(x2_next as i64, y + 1);

            triangles.push(Triangle { a: p1, b: p2, c: p3 });
            triangles.push(Triangle { a: p2, b: p4, c: p3 });
        }
    }
    triangles
}
