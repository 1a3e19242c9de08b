use seeker_core::Point;

// Coordinate gaps can exceed i32 near the edges of the plane; distances
// saturate at i32::MAX instead of overflowing.
fn clamp(d: u32) -> i32 {
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Taxicab distance. This is the grid heuristic, and also the cost of a
/// single grid move.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    clamp(a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y)))
}

/// Number of king moves between `a` and `b`: the fewest steps of a
/// diagonal-enabled grid search, whatever they cost.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    clamp(a.x.abs_diff(b.x).max(a.y.abs_diff(b.y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -2);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(manhattan(b, b), 0);
        assert_eq!(chebyshev(b, a), chebyshev(a, b));
    }

    #[test]
    fn far_points_saturate() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(a, b), i32::MAX);
        assert_eq!(chebyshev(a, b), i32::MAX);
        assert_eq!(manhattan(Point::new(i32::MAX, 0), Point::new(i32::MAX - 2, 0)), 2);
    }
}
