use std::fmt;

/// A finished search: the path and what it took to find it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<V> {
    /// Values from start to goal, both included.
    pub path: Vec<V>,
    /// Wall-clock duration of the search loop in milliseconds.
    pub time_taken: u64,
    /// Children admitted to the frontier.
    pub nodes_considered: u64,
}

impl<V> Solution<V> {
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// One numbered line per step, then the statistics.
impl<V: fmt::Display> fmt::Display for Solution<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (num, step) in self.path.iter().enumerate() {
            writeln!(f, "{num}: {step}")?;
        }
        writeln!(f, "Time Taken: {}ms", self.time_taken)?;
        write!(f, "Nodes Considered: {}", self.nodes_considered)
    }
}
