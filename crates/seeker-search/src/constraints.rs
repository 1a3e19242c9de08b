use std::collections::HashSet;
use std::hash::Hash;

use seeker_core::{Point, Range};

/// Values a search may or may not visit.
///
/// - `forbidden` values are never materialised as states.
/// - `allowed` values override `forbidden` ones; an empty set restricts
///   nothing.
/// - `visited` values are treated as already closed when the search starts.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct Constraints<V> {
    pub allowed: HashSet<V>,
    pub forbidden: HashSet<V>,
    pub visited: HashSet<V>,
}

impl<V: Clone + Eq + Hash> Constraints<V> {
    /// No restrictions.
    pub fn new() -> Self {
        Self {
            allowed: HashSet::new(),
            forbidden: HashSet::new(),
            visited: HashSet::new(),
        }
    }

    /// Add values to the allow-list.
    pub fn allow(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.allowed.extend(values);
        self
    }

    /// Add values to the forbid-list.
    pub fn forbid(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.forbidden.extend(values);
        self
    }

    /// Pre-seed the visited set.
    pub fn visit(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.visited.extend(values);
        self
    }

    /// The set of values never admitted during expansion:
    /// `(forbidden − allowed) ∪ visited`.
    pub fn blocked(&self) -> HashSet<V> {
        self.forbidden
            .difference(&self.allowed)
            .chain(self.visited.iter())
            .cloned()
            .collect()
    }
}

impl Constraints<Point> {
    /// Forbid the ring of cells just outside `range`, confining a grid search
    /// to it.
    pub fn with_border(self, range: Range) -> Self {
        self.forbid(range.border())
    }
}

impl<V: Clone + Eq + Hash> Default for Constraints<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_overrides_forbidden() {
        let c = Constraints::new().forbid([1, 2, 3]).allow([2]);
        let blocked = c.blocked();
        assert!(blocked.contains(&1));
        assert!(!blocked.contains(&2));
        assert!(blocked.contains(&3));
    }

    #[test]
    fn visited_is_blocked_even_when_allowed() {
        let c = Constraints::new().visit([4]).allow([4]);
        assert!(c.blocked().contains(&4));
    }

    #[test]
    fn empty_constraints_block_nothing() {
        let c: Constraints<String> = Constraints::default();
        assert!(c.blocked().is_empty());
        let c = Constraints::new().allow(["x".to_string()]);
        assert!(c.blocked().is_empty());
    }

    #[test]
    fn border_is_forbidden() {
        let rng = Range::sized(2, 2);
        let c = Constraints::new().with_border(rng);
        let blocked = c.blocked();
        assert_eq!(blocked.len(), 12);
        assert!(blocked.contains(&Point::new(-1, -1)));
        assert!(blocked.contains(&Point::new(2, 0)));
        assert!(!blocked.contains(&Point::new(1, 1)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn constraints_round_trip() {
        let c = Constraints::new()
            .forbid([Point::new(1, 1)])
            .allow([Point::new(2, 2)]);
        let json = serde_json::to_string(&c).unwrap();
        let back: Constraints<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.forbidden, c.forbidden);
        assert_eq!(back.allowed, c.allowed);
        assert!(back.visited.is_empty());
    }
}
