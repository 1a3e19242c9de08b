//! Single-writer, single-reader progress snapshots.
//!
//! [`ProgressStore`] holds one `Arc<Progress>`. The worker builds a complete
//! new snapshot and swaps it in; the observer clones the `Arc` out. Readers
//! therefore always see a consistent set of fields, never a collection in the
//! middle of being updated.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// How a background search ended, if it has.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<V> {
    /// Still running, or not started.
    Pending,
    /// The path from start to goal.
    Found(Vec<V>),
    /// The search failed: no path, cancelled, or the worker panicked.
    /// Never a valid path, so observers can tell it apart from `Found`.
    Failed { reason: String },
}

impl<V> Outcome<V> {
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One immutable snapshot of a search's progress.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct Progress<V> {
    /// Bumped by every [`ProgressStore::reset`]; snapshots from different
    /// runs belong to different searches.
    pub run: u64,
    /// The closed set as of the latest expansion.
    pub visited: Arc<HashSet<V>>,
    pub outcome: Outcome<V>,
    /// Final statistics, zero while the search is running.
    pub nodes_considered: u64,
    /// Milliseconds.
    pub time_taken: u64,
}

impl<V: Eq + Hash> Progress<V> {
    fn empty(run: u64) -> Self {
        Self {
            run,
            visited: Arc::new(HashSet::new()),
            outcome: Outcome::Pending,
            nodes_considered: 0,
            time_taken: 0,
        }
    }

    /// Whether the search has stopped, successfully or not.
    #[inline]
    pub fn is_finished(&self) -> bool {
        !self.outcome.is_pending()
    }

    /// The found path, if any.
    pub fn path(&self) -> Option<&[V]> {
        match &self.outcome {
            Outcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Values visited in `self` but not in `previous`, in no particular
    /// order. Everything is new when `previous` belongs to another run.
    pub fn newly_visited<'a>(&'a self, previous: &'a Progress<V>) -> impl Iterator<Item = &'a V> {
        let seen = (previous.run == self.run).then_some(&*previous.visited);
        self.visited
            .iter()
            .filter(move |v| seen.is_none_or(|seen| !seen.contains(*v)))
    }
}

/// Shared slot holding the latest [`Progress`] of a background search.
///
/// Share it as `Arc<ProgressStore<V>>`. The worker is the only writer; the
/// observer reads with [`snapshot`](Self::snapshot) and starts over with
/// [`reset`](Self::reset).
pub struct ProgressStore<V> {
    current: Mutex<Arc<Progress<V>>>,
}

// Compile-time assertion: stores must be shareable across threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<ProgressStore<seeker_core::Point>>();
    assert::<ProgressStore<String>>();
};

impl<V: Clone + Eq + Hash> ProgressStore<V> {
    /// An empty store at run 0.
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Arc::new(Progress::empty(0))),
        }
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Arc<Progress<V>> {
        Arc::clone(&self.lock())
    }

    /// Replace the contents with an empty snapshot of a new run and return
    /// the run number. Writes tagged with an older run are ignored from now
    /// on.
    pub fn reset(&self) -> u64 {
        let mut current = self.lock();
        let run = current.run + 1;
        *current = Arc::new(Progress::empty(run));
        run
    }

    /// Publish a copy of the closed set. Returns `false` if `run` is stale.
    pub(crate) fn publish_visited(&self, run: u64, visited: &HashSet<V>) -> bool {
        let visited = Arc::new(visited.clone());
        let mut current = self.lock();
        if current.run != run {
            return false;
        }
        *current = Arc::new(Progress {
            run,
            visited,
            outcome: Outcome::Pending,
            nodes_considered: 0,
            time_taken: 0,
        });
        true
    }

    /// Publish the outcome and final statistics, keeping the last visited
    /// set. Returns `false` if `run` is stale.
    pub(crate) fn finish(
        &self,
        run: u64,
        outcome: Outcome<V>,
        nodes_considered: u64,
        time_taken: u64,
    ) -> bool {
        let mut current = self.lock();
        if current.run != run {
            return false;
        }
        *current = Arc::new(Progress {
            run,
            visited: Arc::clone(&current.visited),
            outcome,
            nodes_considered,
            time_taken,
        });
        true
    }

    fn lock(&self) -> MutexGuard<'_, Arc<Progress<V>>> {
        // Snapshots are swapped whole, so a poisoned lock still holds a complete one.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone + Eq + Hash> Default for ProgressStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(run: u64, visited: &[i32]) -> Progress<i32> {
        Progress {
            run,
            visited: Arc::new(visited.iter().copied().collect()),
            outcome: Outcome::Pending,
            nodes_considered: 0,
            time_taken: 0,
        }
    }

    #[test]
    fn new_store_is_empty_and_pending() {
        let store: ProgressStore<i32> = ProgressStore::new();
        let snap = store.snapshot();
        assert_eq!(snap.run, 0);
        assert!(snap.visited.is_empty());
        assert!(!snap.is_finished());
        assert_eq!(snap.path(), None);
    }

    #[test]
    fn publish_replaces_snapshot_wholesale() {
        let store = ProgressStore::new();
        let run = store.reset();
        let before = store.snapshot();

        let visited: HashSet<i32> = [1, 2].into();
        assert!(store.publish_visited(run, &visited));
        let after = store.snapshot();

        // The old snapshot is untouched.
        assert!(before.visited.is_empty());
        assert_eq!(*after.visited, visited);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn finish_keeps_visited_and_records_stats() {
        let store = ProgressStore::new();
        let run = store.reset();
        store.publish_visited(run, &[7].into());
        assert!(store.finish(run, Outcome::Found(vec![6, 7]), 4, 2));

        let snap = store.snapshot();
        assert!(snap.is_finished());
        assert_eq!(snap.path(), Some(&[6, 7][..]));
        assert!(snap.visited.contains(&7));
        assert_eq!(snap.nodes_considered, 4);
        assert_eq!(snap.time_taken, 2);
    }

    #[test]
    fn stale_runs_are_ignored() {
        let store = ProgressStore::new();
        let old = store.reset();
        let new = store.reset();
        assert_eq!(new, old + 1);

        assert!(!store.publish_visited(old, &[1].into()));
        assert!(!store.finish(
            old,
            Outcome::Failed {
                reason: "late".into()
            },
            1,
            1
        ));
        let snap = store.snapshot();
        assert_eq!(snap.run, new);
        assert!(snap.visited.is_empty());
        assert!(snap.outcome.is_pending());
    }

    #[test]
    fn failure_sentinel_is_not_a_path() {
        let failed: Outcome<i32> = Outcome::Failed {
            reason: "no path".into(),
        };
        assert!(failed.is_failed());
        assert!(!failed.is_pending());
        let p = Progress {
            outcome: failed,
            ..progress(1, &[])
        };
        assert!(p.is_finished());
        assert_eq!(p.path(), None);
    }

    #[test]
    fn newly_visited_diffs_within_a_run() {
        let prev = progress(3, &[1, 2]);
        let next = progress(3, &[1, 2, 5, 6]);
        let mut new: Vec<i32> = next.newly_visited(&prev).copied().collect();
        new.sort_unstable();
        assert_eq!(new, vec![5, 6]);
        assert_eq!(prev.newly_visited(&prev).count(), 0);
    }

    #[test]
    fn newly_visited_across_runs_is_everything() {
        let prev = progress(1, &[1, 2]);
        let next = progress(2, &[1]);
        assert_eq!(next.newly_visited(&prev).collect::<Vec<_>>(), vec![&1]);
    }
}
