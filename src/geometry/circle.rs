use crate::foundation::core::{Circle, Point};

/// Determinant magnitude below which three points are treated as collinear.
const COLLINEAR_EPSILON: f64 = 1e-9;

/// Fit the circumscribed circle through three non-collinear points.
///
/// Solves the two perpendicular-bisector equations in closed form. Collinear
/// input is a programming-contract violation: callers guarantee
/// non-collinearity by construction (see the background layout's
/// anti-degeneracy correction), and this function asserts rather than
/// returning NaN geometry.
pub fn fit_circle_through_points(p1: Point, p2: Point, p3: Point) -> Circle {
    let d = 2.0
        * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));
    assert!(
        d.abs() > COLLINEAR_EPSILON,
        "fit_circle_through_points requires non-collinear points, got {p1:?} {p2:?} {p3:?}"
    );

    let s1 = p1.x * p1.x + p1.y * p1.y;
    let s2 = p2.x * p2.x + p2.y * p2.y;
    let s3 = p3.x * p3.x + p3.y * p3.y;

    let cx = (s1 * (p2.y - p3.y) + s2 * (p3.y - p1.y) + s3 * (p1.y - p2.y)) / d;
    let cy = (s1 * (p3.x - p2.x) + s2 * (p1.x - p3.x) + s3 * (p2.x - p1.x)) / d;

    let center = Point::new(cx, cy);
    Circle::new(center, center.distance(p1))
}

/// Whether `p` lies strictly inside `circle` (boundary excluded).
pub fn point_in_circle(p: Point, circle: Circle) -> bool {
    let dx = p.x - circle.center.x;
    let dy = p.y - circle.center.y;
    dx * dx + dy * dy < circle.radius * circle.radius
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/circle.rs"]
mod tests;
