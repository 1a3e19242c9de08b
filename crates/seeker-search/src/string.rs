use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::ConfigError;
use crate::traits::State;

/// String reorganisation: turn `start` into `goal` by swapping two characters
/// per move.
#[derive(Clone, Debug)]
pub struct StringState {
    start: String,
    goal: String,
    goal_chars: Vec<char>,
}

impl StringState {
    /// Create the space, checking that `start` and `goal` are anagrams.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Result<Self, ConfigError> {
        let start = start.into();
        let goal = goal.into();
        if !is_anagram(&start, &goal) {
            return Err(ConfigError::NotAnagram { start, goal });
        }
        let goal_chars = goal.chars().collect();
        Ok(Self {
            start,
            goal,
            goal_chars,
        })
    }

    /// A uniformly shuffled arrangement of `goal`, usable as a start value.
    pub fn scramble<R: Rng + ?Sized>(goal: &str, rng: &mut R) -> String {
        let mut chars: Vec<char> = goal.chars().collect();
        chars.shuffle(rng);
        chars.into_iter().collect()
    }
}

/// Whether `a` and `b` hold the same characters with the same multiplicities.
fn is_anagram(a: &str, b: &str) -> bool {
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Pair the n-th occurrence of `letter` in `value` with its n-th occurrence in
/// `goal` and sum the index offsets.
fn matched_offset(value: &[char], goal: &[char], letter: char) -> i32 {
    let in_value = value.iter().enumerate().filter(|&(_, &c)| c == letter);
    let in_goal = goal.iter().enumerate().filter(|&(_, &c)| c == letter);
    in_value
        .zip(in_goal)
        .map(|((v, _), (g, _))| (v as i32 - g as i32).abs())
        .sum()
}

impl State for StringState {
    type Value = String;

    fn start(&self) -> &String {
        &self.start
    }

    fn goal(&self) -> &String {
        &self.goal
    }

    /// Sum over goal positions of how far the letter there is from home.
    ///
    /// Letters occurring once use their single index. Repeated letters are
    /// paired occurrence by occurrence, and the whole pairing cost is
    /// charged once per goal position holding that letter.
    fn heuristic(&self, value: &String) -> i32 {
        if *value == self.goal {
            return 0;
        }
        let current: Vec<char> = value.chars().collect();
        let mut repeated: HashMap<char, i32> = HashMap::new();
        let mut dist = 0;
        for (i, &letter) in self.goal_chars.iter().enumerate() {
            let mut positions = current.iter().enumerate().filter(|&(_, &c)| c == letter);
            match (positions.next(), positions.next()) {
                (Some((pos, _)), None) => dist += (i as i32 - pos as i32).abs(),
                _ => {
                    dist += *repeated
                        .entry(letter)
                        .or_insert_with(|| matched_offset(&current, &self.goal_chars, letter));
                }
            }
        }
        dist
    }

    fn cost(&self, _from: &String, _to: &String) -> i32 {
        1
    }

    fn expand(&self, value: &String, blocked: &HashSet<String>, buf: &mut Vec<String>) {
        let mut chars: Vec<char> = value.chars().collect();
        let mut produced: HashSet<String> = HashSet::new();
        let n = chars.len();
        for i in 0..n {
            for x in 0..n {
                // Swapping equal characters reproduces `value`.
                if chars[i] == chars[x] {
                    continue;
                }
                chars.swap(i, x);
                let candidate: String = chars.iter().collect();
                chars.swap(i, x);
                if blocked.contains(&candidate) || produced.contains(&candidate) {
                    continue;
                }
                produced.insert(candidate.clone());
                buf.push(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rejects_non_anagrams() {
        let err = StringState::new("abc", "abd").unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotAnagram {
                start: "abc".into(),
                goal: "abd".into()
            }
        );
        assert!(StringState::new("aab", "abb").is_err());
        assert!(StringState::new("ab", "abb").is_err());
        assert!(StringState::new("", "").is_ok());
    }

    #[test]
    fn heuristic_unique_letters() {
        let s = StringState::new("cab", "abc").unwrap();
        // a: 1 -> 0, b: 2 -> 1, c: 0 -> 2
        assert_eq!(s.heuristic(&"cab".to_string()), 4);
        assert_eq!(s.heuristic(&"abc".to_string()), 0);
    }

    #[test]
    fn heuristic_repeated_letters() {
        let s = StringState::new("aab", "baa").unwrap();
        // b: |0 - 2| = 2; a pairs (0,1) and (1,2) for 2, charged at goal
        // positions 1 and 2.
        assert_eq!(s.heuristic(&"aab".to_string()), 6);
        assert_eq!(s.heuristic(&"aba".to_string()), 1 + 1 + 1);
    }

    #[test]
    fn heuristic_is_zero_only_at_goal() {
        let s = StringState::new("aabb", "abab").unwrap();
        for v in ["aabb", "bbaa", "baba", "abba", "baab"] {
            assert!(s.heuristic(&v.to_string()) > 0, "{v}");
        }
        assert_eq!(s.heuristic(&"abab".to_string()), 0);
    }

    #[test]
    fn expand_yields_unique_swaps() {
        let s = StringState::new("abc", "cba").unwrap();
        let mut buf = Vec::new();
        s.expand(&"abc".to_string(), &HashSet::new(), &mut buf);
        assert_eq!(buf, vec!["bac", "cba", "acb"]);
    }

    #[test]
    fn expand_skips_repeats_and_blocked() {
        let s = StringState::new("aab", "baa").unwrap();
        let mut buf = Vec::new();
        let blocked: HashSet<String> = ["baa".to_string()].into();
        s.expand(&"aab".to_string(), &blocked, &mut buf);
        assert_eq!(buf, vec!["aba"]);
    }

    #[test]
    fn scramble_is_an_anagram() {
        let mut rng = SmallRng::seed_from_u64(7);
        let goal = "Did you ever hear the tragedy?";
        let start = StringState::scramble(goal, &mut rng);
        assert!(is_anagram(&start, goal));
        assert!(StringState::new(start, goal).is_ok());
    }
}
