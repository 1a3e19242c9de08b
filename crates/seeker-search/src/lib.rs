//! Heuristic A* search over pluggable state spaces.
//!
//! A search space implements [`State`]: it names the start and goal values,
//! scores values with an admissible heuristic, prices single moves and
//! enumerates successors. [`AStarSolver`] drives any such space to a
//! shortest path. Two spaces ship with the crate:
//!
//! - [`StringState`]: reorganise a string into an anagram of itself, one swap
//!   at a time ([`StringSolver`]).
//! - [`GridState`]: walk the integer plane with 4- or 8-way moves
//!   ([`GridSolver`]).
//!
//! Values can be forbidden, re-allowed or pre-marked as visited through
//! [`Constraints`]. Long searches can report every closed-set insertion and
//! honour cancellation through a [`SearchObserver`].
//!
//! ```
//! use seeker_core::Point;
//! use seeker_search::{Constraints, GridSolver};
//!
//! let mut solver = GridSolver::new(Point::new(0, 0), Point::new(2, 0), Constraints::new(), false);
//! let path = solver.solve().unwrap();
//! assert_eq!(path, &[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
//! ```

mod constraints;
mod distance;
mod engine;
mod error;
mod grid;
mod solution;
mod string;
mod traits;

pub use constraints::Constraints;
pub use distance::{chebyshev, manhattan};
pub use engine::{AStarSolver, GridSolver, Status, StringSolver};
pub use error::{ConfigError, SearchError};
pub use grid::{CARDINAL_MOVES, DIAGONAL_MOVES, GridOptions, GridState};
pub use solution::Solution;
pub use string::StringState;
pub use traits::{SearchObserver, State};
