//! Scanline polygon filling and triangulation with edge tables
//!
//! How does this work
//!    table = EdgeTable::build(polygon, max_height)
//!      classify()          -- Peak / Valley / Pass per vertex
//!      per-row buckets of edges keyed by adjusted y_min
//!    sweep = ScanlineSweep::begin(table)
//!    sweep.next_row()      -- merge bucket, sort active edges by x
//!  Emission
//!    fill()                -- pair crossings into Spans
//!    triangulate()         -- split each row trapezoid into Triangles
//!  Output side (caller territory)
//!    render_spans / render_polygon into a RenderingBuffer
//!    ppm::write_file / read_file / img_diff

pub mod vertex;
pub mod edge;
pub mod scan;
pub mod tri;
pub mod color;
pub mod buffer;
pub mod render;
pub mod ppm;

pub use crate::vertex::*;
pub use crate::edge::*;
pub use crate::scan::*;
pub use crate::tri::*;
pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::render::*;
pub use crate::ppm::*;
