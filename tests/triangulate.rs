use scanfill::{triangulate, Triangle, Vertex};

fn poly(pts: &[(i64, i64)]) -> Vec<Vertex> {
    pts.iter().map(|&(x, y)| Vertex::new(x, y)).collect()
}

fn tri(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> Triangle {
    Triangle {
        a: Vertex::new(a.0, a.1),
        b: Vertex::new(b.0, b.1),
        c: Vertex::new(c.0, c.1),
    }
}

#[test]
fn square_trapezoids() {
    let p = poly(&[(10, 10), (50, 10), (50, 50), (10, 50)]);
    let tris = triangulate(&p, 60);

    // one pair of triangles per filled row (11..=49)
    assert_eq!(tris.len(), 39 * 2);
    assert_eq!(tris[0], tri((10, 11), (50, 11), (10, 12)));
    assert_eq!(tris[1], tri((50, 11), (50, 12), (10, 12)));

    // every triangle spans exactly one row downward
    for t in &tris {
        assert_eq!(t.a.y + 1, t.c.y);
        assert!(t.b.y == t.a.y || t.b.y == t.c.y);
    }
}

#[test]
fn flat_top_triangle_trapezoids() {
    let p = poly(&[(0, 0), (10, 0), (5, 10)]);
    let tris = triangulate(&p, 11);
    assert_eq!(tris.len(), 9 * 2);
    // row 1 crossings are 0.5 and 9.5, predicted next-row crossings
    // 1.0 and 9.0; coordinates truncate toward zero
    assert_eq!(tris[0], tri((0, 1), (9, 1), (1, 2)));
    assert_eq!(tris[1], tri((9, 1), (9, 2), (1, 2)));
}

#[test]
fn concave_arrow_cover() {
    let p = poly(&[(0, 10), (5, 0), (10, 10), (5, 6)]);
    let tris = triangulate(&p, 11);

    // rows 1..=6 carry one pair, rows 7..=9 carry two
    assert_eq!(tris.len(), (6 + 3 * 2) * 2);
    let row7: Vec<_> = tris.iter().filter(|t| t.a.y == 7).collect();
    assert_eq!(row7.len(), 4);
    assert!(tris.iter().all(|t| t.a.y >= 1 && t.a.y <= 9));
}

#[test]
fn emission_continues_past_the_table_height() {
    // the verticals are binned inside the table but reach y_max = 50;
    // unlike fill there is no row guard, so triangles keep coming
    let p = poly(&[(10, 10), (50, 10), (50, 50), (10, 50)]);
    let tris = triangulate(&p, 20);
    assert_eq!(tris.len(), 39 * 2);
    assert_eq!(tris.last().unwrap().a.y, 49);
}

#[test]
fn degenerate_input_is_a_no_op() {
    assert!(triangulate(&[], 10).is_empty());
    assert!(triangulate(&poly(&[(1, 1)]), 10).is_empty());
    assert!(triangulate(&poly(&[(1, 1), (5, 5)]), 10).is_empty());
    assert!(triangulate(&poly(&[(0, 0), (10, 0), (5, 10)]), 0).is_empty());
}

#[test]
fn triangulation_is_deterministic() {
    let p = poly(&[(0, 10), (5, 0), (10, 10), (5, 6)]);
    assert_eq!(triangulate(&p, 11), triangulate(&p, 11));
}
