use super::Point2;

/// Computes the signed area of a closed ring (shoelace formula).
///
/// The ring repeats its first point at the end. Positive for
/// counter-clockwise, negative for clockwise.
#[must_use]
pub fn ring_signed_area(points: &[Point2]) -> f64 {
    let sum: f64 = points
        .windows(2)
        .map(|e| e[0].x * e[1].y - e[1].x * e[0].y)
        .sum();
    sum * 0.5
}

/// Estimates the area centroid of a closed ring.
///
/// Falls back to the first point when the shoelace area is exactly zero
/// (collinear rings, or spikes whose lobes cancel). Returns `None` only for
/// an empty slice.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ring_centroid(points: &[Point2]) -> Option<Point2> {
    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;

    for edge in points.windows(2) {
        let (a, b) = (&edge[0], &edge[1]);
        let f = a.x * b.y - b.x * a.y;
        x += (a.x + b.x) * f;
        y += (a.y + b.y) * f;
        area += f * 3.0;
    }

    if area == 0.0 {
        return points.first().copied();
    }
    Some(Point2::new(x / area, y / area))
}
