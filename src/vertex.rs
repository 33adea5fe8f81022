//! Polygon vertices and their scanline topology

/// Vertex of a polygon in integer device-pixel coordinates
///
/// A polygon is an ordered slice of vertices, implicitly closed
/// (an edge runs from the last vertex back to the first)
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub fn new(x: i64, y: i64) -> Self {
        Vertex { x, y }
    }
}

/// Topology of a vertex relative to its two polygon neighbors in row order
///
/// "Above" means a smaller row index, and a neighbor sitting on the
/// same row counts as not above. Valleys get their starting row bumped
/// by one during edge construction so the local minimum is not crossed
/// twice by the span pairing.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum VertexKind {
    /// Both neighbors strictly above
    Peak,
    /// Neither neighbor strictly above
    Valley,
    /// One neighbor above, one below
    Pass,
}

/// Classify every vertex of a closed polygon
///
/// Runs once before edge construction; the edge builder looks up the
/// kind of each edge's lower endpoint instead of re-deriving neighbor
/// relationships per edge.
pub fn classify(polygon: &[Vertex]) -> Vec<VertexKind> {
    let n = polygon.len();
    polygon.iter().enumerate().map(|(i,v)| {
        let prev = polygon[(i + n - 1) % n];
        let next = polygon[(i + 1) % n];
        let prev_above = prev.y < v.y;
        let next_above = next.y < v.y;
        match (prev_above, next_above) {
            (true,  true)  => VertexKind::Peak,
            (false, false) => VertexKind::Valley,
            _              => VertexKind::Pass,
        }
    }).collect()
}
