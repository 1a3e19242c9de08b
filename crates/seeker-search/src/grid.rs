use std::collections::HashSet;

use seeker_core::{Point, Range};

use crate::distance::manhattan;
use crate::traits::State;

/// Unit moves along the axes, in expansion order.
pub const CARDINAL_MOVES: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// Unit diagonal moves, tried after the cardinal ones when enabled.
pub const DIAGONAL_MOVES: [Point; 4] = [
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Movement settings for a grid search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    /// Allow the four diagonal moves.
    pub diagonal: bool,
    /// When set, the ring of cells around this range is forbidden.
    pub bounds: Option<Range>,
}

/// Movement on the integer plane.
///
/// Every move costs the Manhattan distance it covers, so a diagonal step
/// costs 2 and is only taken when it saves a detour. The Manhattan heuristic
/// stays admissible under those costs.
#[derive(Clone, Debug)]
pub struct GridState {
    start: Point,
    goal: Point,
    diagonal: bool,
}

impl GridState {
    pub fn new(start: Point, goal: Point, diagonal: bool) -> Self {
        Self {
            start,
            goal,
            diagonal,
        }
    }

    /// Whether diagonal moves are enabled.
    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    fn moves(&self) -> impl Iterator<Item = Point> {
        let diagonal: &[Point] = if self.diagonal { &DIAGONAL_MOVES } else { &[] };
        CARDINAL_MOVES.into_iter().chain(diagonal.iter().copied())
    }
}

impl State for GridState {
    type Value = Point;

    fn start(&self) -> &Point {
        &self.start
    }

    fn goal(&self) -> &Point {
        &self.goal
    }

    fn heuristic(&self, value: &Point) -> i32 {
        manhattan(*value, self.goal)
    }

    fn cost(&self, from: &Point, to: &Point) -> i32 {
        manhattan(*from, *to)
    }

    fn expand(&self, value: &Point, blocked: &HashSet<Point>, buf: &mut Vec<Point>) {
        // Moves off the edge of the i32 plane do not exist.
        for n in self.moves().filter_map(|d| value.checked_add(d)) {
            if !blocked.contains(&n) {
                buf.push(n);
            }
        }
    }
}
