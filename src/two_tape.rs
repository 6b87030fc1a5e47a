//! This module defines the `TwoTapeMachine` struct: a Turing Machine with two independent
//! tapes and heads sharing one control state. Rules match on the pair of symbols under
//! the heads and write and move each head separately.

use crate::table::{TwoTapeTable, TwoTapeTransition};
use crate::tape::Tape;
use crate::types::{
    Direction, MissingTransition, Outcome, Snapshot, Step, DEFAULT_HALT_STATE,
    DEFAULT_INITIAL_STATE,
};
use log::{debug, trace, warn};
use std::collections::HashSet;
use std::fmt;

/// Represents a two-tape Turing Machine.
///
/// Each tape grows on its own; their materialized lengths are never forced to match.
#[derive(Debug, Clone)]
pub struct TwoTapeMachine {
    state: String,
    tapes: [Tape; 2],
    halt_states: HashSet<String>,
    transitions: TwoTapeTable,
    step_count: usize,
}

impl TwoTapeMachine {
    /// Creates a new `TwoTapeMachine` in state `q0` with `{qhalt}` as its halting set.
    ///
    /// # Arguments
    ///
    /// * `first` - Initial content of tape 1, usually the input.
    /// * `second` - Initial content of tape 2, usually empty scratch space.
    /// * `blank` - The symbol newly materialized cells hold on both tapes.
    pub fn new(first: &str, second: &str, blank: char) -> Self {
        Self {
            state: DEFAULT_INITIAL_STATE.to_string(),
            tapes: [Tape::new(first, blank), Tape::new(second, blank)],
            halt_states: HashSet::from([DEFAULT_HALT_STATE.to_string()]),
            transitions: TwoTapeTable::new(),
            step_count: 0,
        }
    }

    /// Sets the state the machine starts in.
    pub fn with_initial_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Replaces the halting set. An empty set keeps the default `{qhalt}`.
    pub fn with_halt_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let states: HashSet<String> = states.into_iter().map(Into::into).collect();
        if !states.is_empty() {
            self.halt_states = states;
        }
        self
    }

    /// Registers the rule
    /// `(state, read1, read2) -> (next_state, write1, dir1, write2, dir2)`,
    /// replacing any earlier rule for the same key.
    #[allow(clippy::too_many_arguments)]
    pub fn add_transition(
        &mut self,
        state: &str,
        read1: char,
        read2: char,
        next_state: &str,
        write1: char,
        dir1: Direction,
        write2: char,
        dir2: Direction,
    ) {
        self.transitions.insert(
            state,
            [read1, read2],
            TwoTapeTransition {
                next_state: next_state.to_string(),
                write: [write1, write2],
                directions: [dir1, dir2],
            },
        );
    }

    /// Executes a single step of the machine's computation.
    ///
    /// Both heads are read before anything is written. When the joint key has no rule,
    /// neither tape is touched and the result carries both symbols.
    pub fn step(&mut self) -> Step {
        if self.is_halted() {
            return Step::Halted;
        }

        let reads = self.symbols();
        let transition = match self.transitions.get(&self.state, reads) {
            Some(t) => t.clone(),
            None => {
                let missing = MissingTransition {
                    state: self.state.clone(),
                    symbols: reads.to_vec(),
                };
                debug!("{missing}");
                return Step::Stuck(missing);
            }
        };

        trace!(
            "{} {:?} -> {} {:?} {:?}",
            self.state,
            reads,
            transition.next_state,
            transition.write,
            transition.directions
        );

        for (tape, (&write, &direction)) in self
            .tapes
            .iter_mut()
            .zip(transition.write.iter().zip(transition.directions.iter()))
        {
            tape.write(write);
            tape.shift(direction);
        }

        self.state = transition.next_state;
        self.step_count += 1;

        Step::Executed
    }

    /// Runs the machine until it halts, gets stuck, or the step counter reaches `max_steps`.
    ///
    /// Getting stuck ends the run the same way halting does; the final state tells
    /// them apart.
    pub fn run(&mut self, max_steps: usize) -> Outcome {
        self.drive(max_steps, None)
    }

    /// Same as [`run`](Self::run), calling `observer` after every step.
    pub fn run_with<F>(&mut self, max_steps: usize, mut observer: F) -> Outcome
    where
        F: FnMut(&Step, &Snapshot),
    {
        self.drive(max_steps, Some(&mut observer))
    }

    fn drive(
        &mut self,
        max_steps: usize,
        mut observer: Option<&mut dyn FnMut(&Step, &Snapshot)>,
    ) -> Outcome {
        while self.step_count < max_steps {
            let step = self.step();
            if let Some(observer) = observer.as_mut() {
                observer(&step, &self.snapshot());
            }

            if step.is_terminal() {
                return Outcome::HaltedNormally;
            }
        }

        warn!(
            "Maximum steps reached ({max_steps}) in state '{}'",
            self.state
        );
        Outcome::BudgetExhausted
    }

    /// Returns the current state of the machine.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Checks whether the current state belongs to the halting set.
    pub fn is_halted(&self) -> bool {
        self.halt_states.contains(&self.state)
    }

    pub fn halt_states(&self) -> &HashSet<String> {
        &self.halt_states
    }

    /// Returns the total number of executed steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns both tapes, tape 1 first.
    pub fn tapes(&self) -> &[Tape; 2] {
        &self.tapes
    }

    /// Returns both head positions, tape 1 first.
    pub fn heads(&self) -> [usize; 2] {
        [self.tapes[0].head(), self.tapes[1].head()]
    }

    /// Returns the symbols currently under each head.
    pub fn symbols(&self) -> [char; 2] {
        [self.tapes[0].read(), self.tapes[1].read()]
    }

    pub fn transitions(&self) -> &TwoTapeTable {
        &self.transitions
    }

    /// Returns the trimmed content of each tape.
    pub fn tape_contents(&self) -> [String; 2] {
        [self.tapes[0].trimmed(), self.tapes[1].trimmed()]
    }

    /// Returns a copy of the current configuration.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            tapes: self.tapes.iter().map(Tape::raw).collect(),
            heads: self.heads().to_vec(),
            step_count: self.step_count,
        }
    }
}

impl fmt::Display for TwoTapeMachine {
    /// Renders the state followed by one line per tape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State: {}", self.state)?;
        writeln!(f, "  Tape 1: {}", self.tapes[0])?;
        write!(f, "  Tape 2: {}", self.tapes[1])
    }
}
