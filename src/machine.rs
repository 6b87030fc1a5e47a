//! This module defines the `TuringMachine` struct, which simulates a single-tape Turing
//! Machine. It owns the machine configuration (state, tape, head, step counter) and the
//! transition table, and drives execution one step at a time or in a bounded run loop.

use crate::table::{Transition, TransitionTable};
use crate::tape::Tape;
use crate::types::{
    Direction, MissingTransition, Outcome, Snapshot, Step, DEFAULT_HALT_STATE,
    DEFAULT_INITIAL_STATE,
};
use log::{debug, trace, warn};
use std::collections::HashSet;
use std::fmt;

/// Represents a single-tape Turing Machine.
///
/// The machine exclusively owns its configuration. Rules may be registered before or
/// between calls to [`step`](Self::step) and [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct TuringMachine {
    state: String,
    tape: Tape,
    halt_states: HashSet<String>,
    transitions: TransitionTable,
    step_count: usize,
}

impl TuringMachine {
    /// Creates a new `TuringMachine` in state `q0` with `{qhalt}` as its halting set.
    ///
    /// # Arguments
    ///
    /// * `content` - The initial tape content. An empty string yields one blank cell.
    /// * `blank` - The symbol newly materialized cells hold.
    pub fn new(content: &str, blank: char) -> Self {
        Self {
            state: DEFAULT_INITIAL_STATE.to_string(),
            tape: Tape::new(content, blank),
            halt_states: HashSet::from([DEFAULT_HALT_STATE.to_string()]),
            transitions: TransitionTable::new(),
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

    /// Registers the rule `(state, read) -> (next_state, write, direction)`,
    /// replacing any earlier rule for the same key.
    pub fn add_transition(
        &mut self,
        state: &str,
        read: char,
        next_state: &str,
        write: char,
        direction: Direction,
    ) {
        self.transitions.insert(
            state,
            read,
            Transition {
                next_state: next_state.to_string(),
                write,
                direction,
            },
        );
    }

    /// Registers every rule yielded by `rules`, in order.
    pub fn add_transitions<'a, I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (&'a str, char, &'a str, char, Direction)>,
    {
        for (state, read, next_state, write, direction) in rules {
            self.add_transition(state, read, next_state, write, direction);
        }
    }

    /// Executes a single step of the machine's computation.
    ///
    /// # Returns
    ///
    /// * `Step::Halted` if the current state is a halting state. Nothing is mutated.
    /// * `Step::Stuck(_)` if no rule matches the current state and symbol.
    /// * `Step::Executed` after writing, moving, and changing state.
    pub fn step(&mut self) -> Step {
        if self.is_halted() {
            return Step::Halted;
        }

        let read = self.tape.read();
        let transition = match self.transitions.get(&self.state, read) {
            Some(t) => t.clone(),
            None => {
                let missing = MissingTransition {
                    state: self.state.clone(),
                    symbols: vec![read],
                };
                debug!("{missing}");
                return Step::Stuck(missing);
            }
        };

        trace!(
            "{} '{}' -> {} '{}' {}",
            self.state,
            read,
            transition.next_state,
            transition.write,
            transition.direction
        );

        self.tape.write(transition.write);
        self.tape.shift(transition.direction);
        self.state = transition.next_state;
        self.step_count += 1;

        Step::Executed
    }

    /// Runs the machine until it halts, gets stuck, or the step counter reaches `max_steps`.
    ///
    /// Getting stuck ends the run the same way halting does; check [`state`](Self::state)
    /// or [`is_halted`](Self::is_halted) afterwards to tell them apart. The step counter
    /// is not reset, so a second run continues from where the first stopped.
    pub fn run(&mut self, max_steps: usize) -> Outcome {
        self.drive(max_steps, None)
    }

    /// Same as [`run`](Self::run), calling `observer` after every step with its result
    /// and a snapshot of the configuration.
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

    /// Returns the halting set.
    pub fn halt_states(&self) -> &HashSet<String> {
        &self.halt_states
    }

    /// Returns the total number of executed steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the head position.
    pub fn head(&self) -> usize {
        self.tape.head()
    }

    /// Returns the blank symbol used by this machine.
    pub fn blank(&self) -> char {
        self.tape.blank()
    }

    /// Returns the registered rules.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Returns the tape content with leading and trailing blanks trimmed.
    pub fn tape_content(&self) -> String {
        self.tape.trimmed()
    }

    /// Returns a copy of the current configuration.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            tapes: vec![self.tape.raw()],
            heads: vec![self.tape.head()],
            step_count: self.step_count,
        }
    }
}

impl fmt::Display for TuringMachine {
    /// Renders `State: q0 | Tape: [1] 0  1 `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State: {} | Tape: {}", self.state, self.tape)
    }
}
