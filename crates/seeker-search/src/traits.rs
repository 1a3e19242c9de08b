use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A search space: endpoints, move costs, heuristic and successor generation.
pub trait State {
    /// A position in the space (an arrangement, a coordinate, ...).
    type Value: Clone + Eq + Hash + Debug;

    /// Value the search starts from.
    fn start(&self) -> &Self::Value;

    /// Value the search is looking for.
    fn goal(&self) -> &Self::Value;

    /// Estimate of the remaining cost from `value` to the goal.
    /// Zero exactly when `value` is the goal.
    fn heuristic(&self, value: &Self::Value) -> i32;

    /// True cost of moving from `from` to its successor `to`. Must be > 0.
    fn cost(&self, from: &Self::Value, to: &Self::Value) -> i32;

    /// Append the successors of `value` that are not in `blocked` into `buf`.
    /// The caller clears `buf` before calling.
    fn expand(&self, value: &Self::Value, blocked: &HashSet<Self::Value>, buf: &mut Vec<Self::Value>);
}

/// Hook into a running search.
///
/// Both methods have no-op defaults; `()` is the observer used by
/// [`AStarSolver::solve`](crate::AStarSolver::solve).
pub trait SearchObserver<V> {
    /// Called after each insertion into the closed set with the whole set.
    fn closed(&mut self, _visited: &HashSet<V>) {}

    /// Polled once per iteration; returning `true` stops the search.
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<V> SearchObserver<V> for () {}
