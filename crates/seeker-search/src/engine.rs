use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use log::{debug, trace};
use seeker_core::Point;

use crate::constraints::Constraints;
use crate::error::{ConfigError, SearchError};
use crate::grid::{GridOptions, GridState};
use crate::solution::Solution;
use crate::string::StringState;
use crate::traits::{SearchObserver, State};

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Search tree and frontier
// ---------------------------------------------------------------------------

/// A node of the search tree. Nodes only point back to their parent; the
/// path to a node is rebuilt by walking parents to the root.
struct Node<V> {
    value: V,
    parent: usize,
    g: i32,
}

/// Frontier entry ordered by `(score, seq)`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    score: i32,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest score first,
        // and the earliest insertion among equal scores.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

enum Stop {
    Found(usize),
    Exhausted,
    Cancelled,
}

// ---------------------------------------------------------------------------
// AStarSolver
// ---------------------------------------------------------------------------

/// Lifecycle of an [`AStarSolver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Built or reset; nothing searched yet.
    Unsolved,
    /// Inside `solve`. Only observable if a search was interrupted by a panic.
    Solving,
    /// A path was found.
    Solved,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The observer cancelled the search.
    Cancelled,
}

impl Status {
    /// Whether `solve` has already reached a final outcome.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Cancelled)
    }
}

/// A* search over a [`State`] space.
///
/// Frontier ties are broken by insertion order, so repeated searches over the
/// same inputs explore the same nodes and return the same path.
pub struct AStarSolver<S: State> {
    state: S,
    constraints: Constraints<S::Value>,
    blocked: HashSet<S::Value>,
    visited: HashSet<S::Value>,
    nodes: Vec<Node<S::Value>>,
    frontier: BinaryHeap<Entry>,
    path: Vec<S::Value>,
    nodes_considered: u64,
    time_taken: u64,
    status: Status,
}

/// A* over string reorganisations.
pub type StringSolver = AStarSolver<StringState>;

/// A* over grid movement.
pub type GridSolver = AStarSolver<GridState>;

impl<S: State> AStarSolver<S> {
    /// Create a solver for `state` under `constraints`.
    pub fn with_state(state: S, constraints: Constraints<S::Value>) -> Self {
        let blocked = constraints.blocked();
        Self {
            state,
            constraints,
            visited: blocked.clone(),
            blocked,
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            path: Vec::new(),
            nodes_considered: 0,
            time_taken: 0,
            status: Status::Unsolved,
        }
    }

    /// The search space.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The constraints the solver was built with.
    #[inline]
    pub fn constraints(&self) -> &Constraints<S::Value> {
        &self.constraints
    }

    /// The path found by the last search, empty if none.
    #[inline]
    pub fn path(&self) -> &[S::Value] {
        &self.path
    }

    /// Children admitted during the last search, the goal included.
    #[inline]
    pub fn nodes_considered(&self) -> u64 {
        self.nodes_considered
    }

    /// Duration of the last search loop in milliseconds.
    #[inline]
    pub fn time_taken(&self) -> u64 {
        self.time_taken
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Closed set: blocked values plus every value expanded so far.
    #[inline]
    pub fn visited(&self) -> &HashSet<S::Value> {
        &self.visited
    }

    /// The result of a successful search.
    pub fn solution(&self) -> Option<Solution<S::Value>> {
        (self.status == Status::Solved).then(|| Solution {
            path: self.path.clone(),
            time_taken: self.time_taken,
            nodes_considered: self.nodes_considered,
        })
    }

    /// Discard the search tree and results so the next `solve` starts over.
    pub fn reset(&mut self) {
        self.discard_tree();
        self.status = Status::Unsolved;
    }

    /// Search for a shortest path from start to goal.
    ///
    /// Returns the path, start and goal included. Once a search has finished,
    /// later calls return the same outcome without searching again.
    pub fn solve(&mut self) -> Result<&[S::Value], SearchError> {
        self.solve_with(&mut ())
    }

    /// Like [`solve`](Self::solve), reporting closed-set growth to `observer`
    /// and stopping when it asks to.
    pub fn solve_with<O>(&mut self, observer: &mut O) -> Result<&[S::Value], SearchError>
    where
        O: SearchObserver<S::Value> + ?Sized,
    {
        match self.status {
            Status::Solved => return Ok(&self.path),
            Status::Exhausted => {
                return Err(SearchError::Exhausted {
                    nodes_considered: self.nodes_considered,
                });
            }
            Status::Cancelled => {
                return Err(SearchError::Cancelled {
                    nodes_considered: self.nodes_considered,
                });
            }
            Status::Unsolved | Status::Solving => {}
        }

        self.discard_tree();
        self.status = Status::Solving;
        debug!(
            "searching {:?} -> {:?} ({} blocked)",
            self.state.start(),
            self.state.goal(),
            self.blocked.len()
        );

        let started = Instant::now();
        let stop = self.run(observer, started);
        self.time_taken = elapsed_ms(started);

        match stop {
            Stop::Found(idx) => {
                self.path = self.path_to(idx);
                self.status = Status::Solved;
                debug!(
                    "solved in {} steps: {} nodes considered, {}ms",
                    self.path.len().saturating_sub(1),
                    self.nodes_considered,
                    self.time_taken
                );
                Ok(&self.path)
            }
            Stop::Exhausted => {
                self.status = Status::Exhausted;
                debug!("no path after {} nodes", self.nodes_considered);
                Err(SearchError::Exhausted {
                    nodes_considered: self.nodes_considered,
                })
            }
            Stop::Cancelled => {
                self.status = Status::Cancelled;
                debug!("cancelled after {} nodes", self.nodes_considered);
                Err(SearchError::Cancelled {
                    nodes_considered: self.nodes_considered,
                })
            }
        }
    }

    /// The search loop proper. Statistics are kept current on every
    /// iteration, so they survive a panic inside the [`State`].
    fn run<O>(&mut self, observer: &mut O, started: Instant) -> Stop
    where
        O: SearchObserver<S::Value> + ?Sized,
    {
        let goal = self.state.goal().clone();
        self.nodes.push(Node {
            value: self.state.start().clone(),
            parent: NO_PARENT,
            g: 0,
        });
        self.frontier.push(Entry {
            score: 0,
            seq: 0,
            idx: 0,
        });

        let mut buf = Vec::new();

        loop {
            self.time_taken = elapsed_ms(started);
            if observer.is_cancelled() {
                return Stop::Cancelled;
            }
            let Some(Entry { idx, .. }) = self.frontier.pop() else {
                return Stop::Exhausted;
            };

            let value = self.nodes[idx].value.clone();
            if value == goal {
                return Stop::Found(idx);
            }
            // Stale duplicate of a value expanded earlier.
            if self.visited.contains(&value) {
                continue;
            }

            buf.clear();
            self.state.expand(&value, &self.visited, &mut buf);
            trace!("expand {value:?}: {} successors", buf.len());

            let g = self.nodes[idx].g;
            for child in buf.drain(..) {
                self.nodes_considered += 1;
                let child_g = g + self.state.cost(&value, &child);
                let is_goal = child == goal;
                let score = if is_goal {
                    0
                } else {
                    child_g + self.state.heuristic(&child)
                };
                let child_idx = self.nodes.len();
                self.nodes.push(Node {
                    value: child,
                    parent: idx,
                    g: child_g,
                });
                if is_goal {
                    return Stop::Found(child_idx);
                }
                self.frontier.push(Entry {
                    score,
                    seq: self.nodes_considered,
                    idx: child_idx,
                });
            }

            self.visited.insert(value);
            observer.closed(&self.visited);
        }
    }

    /// Values from the root to node `idx`.
    fn path_to(&self, idx: usize) -> Vec<S::Value> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            let node = &self.nodes[ci];
            path.push(node.value.clone());
            ci = node.parent;
        }
        path.reverse();
        path
    }

    fn discard_tree(&mut self) {
        self.nodes.clear();
        self.frontier.clear();
        self.path.clear();
        self.visited.clone_from(&self.blocked);
        self.nodes_considered = 0;
        self.time_taken = 0;
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

impl AStarSolver<StringState> {
    /// Solver turning `start` into its anagram `goal`.
    pub fn new(
        start: impl Into<String>,
        goal: impl Into<String>,
        constraints: Constraints<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_state(StringState::new(start, goal)?, constraints))
    }
}

impl AStarSolver<GridState> {
    /// Solver walking from `start` to `goal`, diagonally if `diagonal` is set.
    pub fn new(start: Point, goal: Point, constraints: Constraints<Point>, diagonal: bool) -> Self {
        Self::with_state(GridState::new(start, goal, diagonal), constraints)
    }

    /// Solver configured from [`GridOptions`]; bounds become a forbidden
    /// border.
    pub fn with_options(
        start: Point,
        goal: Point,
        constraints: Constraints<Point>,
        options: GridOptions,
    ) -> Self {
        let constraints = match options.bounds {
            Some(range) => constraints.with_border(range),
            None => constraints,
        };
        Self::new(start, goal, constraints, options.diagonal)
    }
}
