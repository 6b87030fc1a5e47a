//! Transition tables for the single-tape and two-tape engines.
//!
//! Each engine gets its own table type with a fixed key shape, so lookups are exact
//! matches on `(state, symbol)` or `(state, symbol, symbol)` and never inspect arity at
//! runtime. Registering a key twice keeps the later action.

use crate::types::Direction;
use serde::Serialize;
use std::collections::HashMap;

/// The action taken by a single-tape machine when a rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// The next state the machine transitions to.
    pub next_state: String,
    /// The symbol written under the head.
    pub write: char,
    /// Where the head moves after writing.
    pub direction: Direction,
}

/// The action taken by a two-tape machine when a rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwoTapeTransition {
    pub next_state: String,
    /// Symbols written under each head, in tape order.
    pub write: [char; 2],
    /// Head moves, in tape order.
    pub directions: [Direction; 2],
}

/// Rules keyed on `(state, symbol read)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rules: HashMap<(String, char), Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the rule for `(state, read)`.
    pub fn insert(&mut self, state: &str, read: char, transition: Transition) {
        self.rules.insert((state.to_string(), read), transition);
    }

    pub fn get(&self, state: &str, read: char) -> Option<&Transition> {
        self.rules.get(&(state.to_string(), read))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over all rules in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&(String, char), &Transition)> {
        self.rules.iter()
    }
}

/// Rules keyed on `(state, symbol read on tape 1, symbol read on tape 2)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoTapeTable {
    rules: HashMap<(String, char, char), TwoTapeTransition>,
}

impl TwoTapeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the rule for `(state, reads[0], reads[1])`.
    pub fn insert(&mut self, state: &str, reads: [char; 2], transition: TwoTapeTransition) {
        self.rules
            .insert((state.to_string(), reads[0], reads[1]), transition);
    }

    pub fn get(&self, state: &str, reads: [char; 2]) -> Option<&TwoTapeTransition> {
        self.rules.get(&(state.to_string(), reads[0], reads[1]))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(String, char, char), &TwoTapeTransition)> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(next: &str, write: char, direction: Direction) -> Transition {
        Transition {
            next_state: next.to_string(),
            write,
            direction,
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut table = TransitionTable::new();
        table.insert("q0", '0', transition("q1", '1', Direction::Right));

        assert!(table.get("q0", '0').is_some());
        assert!(table.get("q0", '1').is_none());
        assert!(table.get("q1", '0').is_none());
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let mut table = TransitionTable::new();
        table.insert("q0", '0', transition("q1", '1', Direction::Right));
        table.insert("q0", '0', transition("q2", 'x', Direction::Left));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("q0", '0'),
            Some(&transition("q2", 'x', Direction::Left))
        );
    }

    #[test]
    fn test_two_tape_joint_key() {
        let mut table = TwoTapeTable::new();
        table.insert(
            "copy",
            ['a', '_'],
            TwoTapeTransition {
                next_state: "copy".to_string(),
                write: ['a', 'a'],
                directions: [Direction::Right, Direction::Right],
            },
        );

        assert!(table.get("copy", ['a', '_']).is_some());
        assert!(table.get("copy", ['_', 'a']).is_none());
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
