//! Run A* searches off the caller's thread and watch them progress.
//!
//! A [`SolverWorker`] moves a solver onto its own thread. While it runs, the
//! worker republishes the closed set into a shared [`ProgressStore`] after
//! every expansion, then the outcome and statistics once it stops. The
//! caller, typically a render loop, polls [`ProgressStore::snapshot`] each
//! frame. Failures never cross the thread boundary: they show up as
//! [`Outcome::Failed`].
//!
//! ```
//! use std::sync::Arc;
//! use seeker_core::Point;
//! use seeker_search::Constraints;
//! use seeker_worker::{Outcome, ProgressStore, SolverWorker};
//!
//! let store = Arc::new(ProgressStore::new());
//! let worker = SolverWorker::grid(
//!     Point::new(0, 0),
//!     Point::new(3, 0),
//!     Arc::clone(&store),
//!     Constraints::new(),
//!     false,
//! );
//! worker.start().unwrap().join().unwrap();
//! let progress = store.snapshot();
//! assert!(matches!(&progress.outcome, Outcome::Found(path) if path.len() == 4));
//! ```

mod store;
mod worker;

pub use store::{Outcome, Progress, ProgressStore};
pub use worker::{SolverWorker, WorkerHandle};
