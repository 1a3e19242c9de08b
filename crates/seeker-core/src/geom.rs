//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A grid search works on an unbounded integer plane. [`Range`] describes the
//! rectangle a caller actually cares about and can produce the ring of cells
//! just outside it, which is how grid searches are kept finite.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// `self + other`, or `None` if either coordinate overflows.
    #[inline]
    pub const fn checked_add(self, other: Point) -> Option<Point> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Whether both coordinates differ from `other` by at most one, and the
    /// points are distinct.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    // Row-major: y first, then x.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalised so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// A `width` × `height` range anchored at the origin.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Iterate over every point of the range in row-major order.
    pub fn points(self) -> impl Iterator<Item = Point> {
        let Range { min, max } = self;
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| Point::new(x, y)))
    }

    /// The one-cell-wide ring of points lying just outside the range.
    ///
    /// Forbidding these points confines a search on the unbounded plane to the
    /// range. An empty range has no border.
    pub fn border(self) -> Vec<Point> {
        if self.is_empty() {
            return Vec::new();
        }
        let (x0, y0) = (self.min.x - 1, self.min.y - 1);
        let (x1, y1) = (self.max.x, self.max.y);
        let mut ring = Vec::with_capacity(2 * (self.width() + self.height()) as usize + 4);
        for x in x0..=x1 {
            ring.push(Point::new(x, y0));
            ring.push(Point::new(x, y1));
        }
        for y in self.min.y..self.max.y {
            ring.push(Point::new(x0, y));
            ring.push(Point::new(x1, y));
        }
        ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
        assert_eq!(Point::from((5, -2)), Point::new(5, -2));
        assert_eq!(a.checked_add(b), Some(Point::new(4, 6)));
        assert_eq!(Point::new(i32::MAX, 0).checked_add(Point::new(1, 0)), None);
        assert_eq!(Point::new(0, i32::MIN).checked_add(Point::new(0, -1)), None);
    }

    #[test]
    fn point_adjacency() {
        let p = Point::new(2, 2);
        assert!(p.is_adjacent(Point::new(3, 3)));
        assert!(p.is_adjacent(Point::new(2, 1)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(4, 2)));
    }

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 1), Point::new(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(5, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn range_basics() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r, Range::sized(3, 2));
        assert_eq!(r.len(), 6);
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 1)));
        assert!(Range::new(1, 1, 1, 4).is_empty());
        assert_eq!(Range::new(1, 1, 1, 4).len(), 0);
    }

    #[test]
    fn range_points_cover_every_cell_once() {
        let r = Range::new(-1, 0, 2, 2);
        let pts: Vec<Point> = r.points().collect();
        assert_eq!(pts.len(), r.len());
        assert_eq!(pts[0], Point::new(-1, 0));
        assert_eq!(*pts.last().unwrap(), Point::new(1, 1));
        assert!(pts.iter().all(|&p| r.contains(p)));
    }

    #[test]
    fn border_surrounds_range() {
        let r = Range::sized(3, 2);
        let ring: HashSet<Point> = r.border().into_iter().collect();
        // (w + 2) * (h + 2) - w * h
        assert_eq!(ring.len(), 5 * 4 - 6);
        assert!(ring.iter().all(|&p| !r.contains(p)));
        assert!(ring.contains(&Point::new(-1, -1)));
        assert!(ring.contains(&Point::new(3, 2)));
        assert!(ring.contains(&Point::new(-1, 1)));
        // Every cell inside touches only range or ring cells.
        for p in r.points() {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let n = p.shift(dx, dy);
                    assert!(r.contains(n) || ring.contains(&n));
                }
            }
        }
    }

    #[test]
    fn empty_range_has_no_border() {
        assert!(Range::default().border().is_empty());
    }
}
