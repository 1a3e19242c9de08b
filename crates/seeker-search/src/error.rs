use std::fmt;

/// A solver was built from inputs that can never describe a valid search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// String reorganisation requires `start` and `goal` to hold the same
    /// characters with the same multiplicities.
    NotAnagram { start: String, goal: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnagram { start, goal } => {
                write!(f, "invalid inputs: {start:?} is not an anagram of {goal:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why [`AStarSolver::solve`](crate::AStarSolver::solve) produced no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The solver configuration was rejected.
    ///
    /// `solve` never returns this: a solver that exists is valid. The
    /// variant lets code that builds and solves in one function use `?` on
    /// both steps.
    Config(ConfigError),
    /// The frontier emptied without reaching the goal.
    Exhausted { nodes_considered: u64 },
    /// The observer requested cancellation before the search finished.
    Cancelled { nodes_considered: u64 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => e.fmt(f),
            Self::Exhausted { nodes_considered } => {
                write!(f, "no path (search exhausted after {nodes_considered} nodes)")
            }
            Self::Cancelled { nodes_considered } => {
                write!(f, "search cancelled after {nodes_considered} nodes")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constraints, StringSolver};
    use std::error::Error;

    fn rearrange(start: &str, goal: &str) -> Result<Vec<String>, SearchError> {
        let mut solver = StringSolver::new(start, goal, Constraints::new())?;
        Ok(solver.solve()?.to_vec())
    }

    #[test]
    fn build_and_solve_share_one_error_type() {
        assert_eq!(rearrange("ab", "ba").unwrap(), vec!["ab", "ba"]);
        let err = rearrange("ab", "bc").unwrap_err();
        assert!(matches!(err, SearchError::Config(ConfigError::NotAnagram { .. })));
    }

    #[test]
    fn messages() {
        let e = ConfigError::NotAnagram {
            start: "ab".into(),
            goal: "abc".into(),
        };
        assert_eq!(e.to_string(), "invalid inputs: \"ab\" is not an anagram of \"abc\"");
        let s = SearchError::from(e.clone());
        assert_eq!(s.to_string(), e.to_string());
        assert!(s.source().is_some());

        let x = SearchError::Exhausted { nodes_considered: 7 };
        assert_eq!(x.to_string(), "no path (search exhausted after 7 nodes)");
        assert!(x.source().is_none());
    }
}
