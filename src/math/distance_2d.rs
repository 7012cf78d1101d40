use super::Point2;

/// Returns the squared distance from `p` to the closed segment `a`→`b`.
///
/// A zero-length segment is treated as the single point `a`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_distance_squared(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let mut x = a.x;
    let mut y = a.y;
    let mut dx = b.x - x;
    let mut dy = b.y - y;

    if dx != 0.0 || dy != 0.0 {
        // Project onto the infinite line, then snap to whichever part of the
        // segment is closest.
        let t = ((p.x - x) * dx + (p.y - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = b.x;
            y = b.y;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    dx = p.x - x;
    dy = p.y - y;

    dx * dx + dy * dy
}

/// Returns the signed distance from `p` to the boundary formed by `rings`.
///
/// The magnitude is the distance to the nearest edge of any ring. The sign is
/// positive when `p` lies inside under the even-odd rule, so hole rings passed
/// after the exterior carve their interiors out. Each ring must be closed
/// (first point repeated last); rings with fewer than two points contribute
/// nothing.
#[must_use]
pub fn point_to_rings_distance<'a, I>(p: &Point2, rings: I) -> f64
where
    I: IntoIterator<Item = &'a [Point2]>,
{
    let mut inside = false;
    let mut min_dist_sq = f64::INFINITY;

    for ring in rings {
        for edge in ring.windows(2) {
            let (a, b) = (&edge[0], &edge[1]);
            let straddles = (a.y > p.y) != (b.y > p.y);
            if straddles && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            min_dist_sq = min_dist_sq.min(segment_distance_squared(p, a, b));
        }
    }

    let factor = if inside { 1.0 } else { -1.0 };
    factor * min_dist_sq.sqrt()
}
