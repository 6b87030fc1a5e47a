//! This module defines the core data structures and types shared by both engines, including
//! head directions, step and run results, configuration snapshots, and error types.

use crate::tape::render_cells;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The default blank symbol used on the Turing Machine tape.
pub const DEFAULT_BLANK_SYMBOL: char = '_';
/// The state a machine starts in unless configured otherwise.
pub const DEFAULT_INITIAL_STATE: &str = "q0";
/// The single halting state used when no halting set is supplied.
pub const DEFAULT_HALT_STATE: &str = "qhalt";
/// The step budget used by callers that do not pick their own.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Represents the possible directions a Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

impl Direction {
    /// Returns the single-letter token for this direction.
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Stay => 'S',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Direction {
    type Error = TuringMachineError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token.to_ascii_uppercase() {
            'L' | '<' => Ok(Direction::Left),
            'R' | '>' => Ok(Direction::Right),
            'S' | '-' => Ok(Direction::Stay),
            _ => Err(TuringMachineError::InvalidDirection(token.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = TuringMachineError;

    /// Parses `L`/`R`/`S` or the long names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::try_from(c),
            _ => match token.to_ascii_lowercase().as_str() {
                "left" => Ok(Direction::Left),
                "right" => Ok(Direction::Right),
                "stay" => Ok(Direction::Stay),
                _ => Err(TuringMachineError::InvalidDirection(s.to_string())),
            },
        }
    }
}

/// Diagnostic for a lookup key that has no registered transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("No transition defined for state '{state}' and symbols {symbols:?}")]
pub struct MissingTransition {
    /// The state the machine was in.
    pub state: String,
    /// The symbols under each head, in tape order.
    pub symbols: Vec<char>,
}

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Step {
    /// A transition was applied and the step counter advanced.
    Executed,
    /// The machine was already in a halting state. Nothing changed.
    Halted,
    /// No rule matches the current state and symbols.
    Stuck(MissingTransition),
}

impl Step {
    /// Returns `true` if this step ended the computation, either by halting or getting stuck.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Step::Executed)
    }
}

/// Represents how a run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The machine reached a halting state or had no applicable rule.
    /// Inspect the final state to tell the two apart.
    HaltedNormally,
    /// The step counter reached the budget while rules kept applying.
    BudgetExhausted,
}

/// A point-in-time copy of a machine configuration, handed to run observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: String,
    /// Raw tape contents including blanks, one entry per tape.
    pub tapes: Vec<String>,
    /// Head index into each tape.
    pub heads: Vec<usize>,
    pub step_count: usize,
}

impl fmt::Display for Snapshot {
    /// Uses the same layout as the machines: one line for a single tape,
    /// a state line plus one line per tape otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let ([tape], [head]) = (self.tapes.as_slice(), self.heads.as_slice()) {
            write!(f, "State: {} | Tape: ", self.state)?;
            return render_cells(f, tape.chars(), *head);
        }

        write!(f, "State: {}", self.state)?;
        for (i, (tape, head)) in self.tapes.iter().zip(&self.heads).enumerate() {
            write!(f, "\n  Tape {}: ", i + 1)?;
            render_cells(f, tape.chars(), *head)?;
        }

        Ok(())
    }
}

/// Represents the configuration errors the library can report.
///
/// Stepping and running never fail; these only come from converting caller
/// input into the typed values the engines accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// A direction token other than left, right, or stay.
    #[error("Invalid direction: {0:?} (expected L, R or S)")]
    InvalidDirection(String),
    /// Input that a bundled program cannot accept.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left = Direction::Left;
        let right = Direction::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Direction = serde_json::from_str(&left_json).unwrap();
        let right_deserialized: Direction = serde_json::from_str(&right_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(right, right_deserialized);
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!("L".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("r".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("S".parse::<Direction>().unwrap(), Direction::Stay);
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(" stay ".parse::<Direction>().unwrap(), Direction::Stay);
        assert_eq!(Direction::try_from('>').unwrap(), Direction::Right);
    }

    #[test]
    fn test_invalid_direction() {
        let error = "X".parse::<Direction>().unwrap_err();
        assert_eq!(error, TuringMachineError::InvalidDirection("X".to_string()));

        let error = "up".parse::<Direction>().unwrap_err();
        assert!(error.to_string().contains("up"));
    }

    #[test]
    fn test_direction_display_roundtrip() {
        for direction in [Direction::Left, Direction::Right, Direction::Stay] {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn test_missing_transition_display() {
        let missing = MissingTransition {
            state: "q0".to_string(),
            symbols: vec!['1'],
        };

        let msg = missing.to_string();
        assert!(msg.contains("No transition"));
        assert!(msg.contains("q0"));
        assert!(msg.contains("'1'"));
    }

    #[test]
    fn test_snapshot_display() {
        let single = Snapshot {
            state: "q1".to_string(),
            tapes: vec!["10_".to_string()],
            heads: vec![2],
            step_count: 3,
        };
        assert_eq!(single.to_string(), "State: q1 | Tape:  1  0 [_]");

        let double = Snapshot {
            state: "copy".to_string(),
            tapes: vec!["ab".to_string(), "a".to_string()],
            heads: vec![1, 0],
            step_count: 1,
        };
        assert_eq!(
            double.to_string(),
            "State: copy\n  Tape 1:  a [b]\n  Tape 2: [a]"
        );
    }

    #[test]
    fn test_step_is_terminal() {
        assert!(!Step::Executed.is_terminal());
        assert!(Step::Halted.is_terminal());
        assert!(Step::Stuck(MissingTransition {
            state: "q".to_string(),
            symbols: vec![]
        })
        .is_terminal());
    }
}
