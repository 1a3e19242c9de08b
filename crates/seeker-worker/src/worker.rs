use std::any::Any;
use std::collections::HashSet;
use std::hash::Hash;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use seeker_core::{Context, Point};
use seeker_search::{
    AStarSolver, ConfigError, Constraints, GridState, SearchObserver, State, StringState,
};

use crate::store::{Outcome, ProgressStore};

/// A solver waiting to be moved onto its own thread.
pub struct SolverWorker<S: State> {
    solver: AStarSolver<S>,
    store: Arc<ProgressStore<S::Value>>,
}

impl<S> SolverWorker<S>
where
    S: State + Send + 'static,
    S::Value: Send + Sync + 'static,
{
    /// Pair `solver` with the store it will publish into.
    pub fn new(solver: AStarSolver<S>, store: Arc<ProgressStore<S::Value>>) -> Self {
        Self { solver, store }
    }

    /// Reset the store and run the search on a new thread.
    ///
    /// The thread never unwinds into the caller: search errors and panics
    /// alike end up in the store as [`Outcome::Failed`]. Joining the handle
    /// gives the solver back.
    pub fn start(self) -> io::Result<WorkerHandle<S>> {
        let Self { mut solver, store } = self;
        let ctx = Context::new();
        let run = store.reset();
        let mut publisher = Publisher {
            store: Arc::clone(&store),
            run,
            ctx: ctx.clone(),
        };
        let thread = thread::Builder::new()
            .name("seeker-worker".into())
            .spawn(move || {
                debug!("worker run {run} started");
                let outcome = search(&mut solver, &mut publisher);
                if !store.finish(
                    run,
                    outcome,
                    solver.nodes_considered(),
                    solver.time_taken(),
                ) {
                    debug!("worker run {run} superseded, outcome dropped");
                }
                solver
            })?;
        Ok(WorkerHandle { ctx, thread })
    }
}

impl SolverWorker<GridState> {
    /// Worker for a grid walk from `start` to `goal`.
    pub fn grid(
        start: Point,
        goal: Point,
        store: Arc<ProgressStore<Point>>,
        constraints: Constraints<Point>,
        diagonal: bool,
    ) -> Self {
        Self::new(AStarSolver::<GridState>::new(start, goal, constraints, diagonal), store)
    }
}

impl SolverWorker<StringState> {
    /// Worker rearranging `start` into `goal`. Invalid inputs are rejected
    /// here, before any thread is spawned.
    pub fn string(
        start: impl Into<String>,
        goal: impl Into<String>,
        store: Arc<ProgressStore<String>>,
        constraints: Constraints<String>,
    ) -> Result<Self, ConfigError> {
        let solver = AStarSolver::<StringState>::new(start, goal, constraints)?;
        Ok(Self::new(solver, store))
    }
}

/// Owner's side of a running worker.
pub struct WorkerHandle<S: State> {
    ctx: Context,
    thread: JoinHandle<AStarSolver<S>>,
}

impl<S: State> WorkerHandle<S> {
    /// Ask the search to stop at its next iteration. The store then reports
    /// a failed outcome.
    pub fn cancel(&self) {
        self.ctx.cancel();
    }

    /// Whether the thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the thread and take the solver back.
    pub fn join(self) -> thread::Result<AStarSolver<S>> {
        self.thread.join()
    }
}

/// Republishes the closed set after every expansion.
struct Publisher<V> {
    store: Arc<ProgressStore<V>>,
    run: u64,
    ctx: Context,
}

impl<V: Clone + Eq + Hash> SearchObserver<V> for Publisher<V> {
    fn closed(&mut self, visited: &HashSet<V>) {
        // The store moved on to another run: nobody is watching this one.
        if !self.store.publish_visited(self.run, visited) {
            self.ctx.cancel();
        }
    }

    fn is_cancelled(&self) -> bool {
        self.ctx.is_cancelled()
    }
}

fn search<S: State>(
    solver: &mut AStarSolver<S>,
    publisher: &mut Publisher<S::Value>,
) -> Outcome<S::Value> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        solver.solve_with(publisher).map(|path| path.to_vec())
    }));
    match result {
        Ok(Ok(path)) => {
            debug!("worker found a path of {} values", path.len());
            Outcome::Found(path)
        }
        Ok(Err(err)) => {
            warn!("search failed: {err}");
            Outcome::Failed {
                reason: err.to_string(),
            }
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            warn!("search panicked: {reason}");
            Outcome::Failed { reason }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
