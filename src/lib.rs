//! This crate provides the core logic for a Turing Machine simulator.
//! It includes a single-tape engine, a two-tape engine, the tape model they share,
//! typed transition tables, and a collection of predefined programs.

pub mod machine;
pub mod programs;
pub mod table;
pub mod tape;
pub mod two_tape;
pub mod types;

/// Re-exports the single-tape `TuringMachine` from the machine module.
pub use machine::TuringMachine;
/// Re-exports the bundled program builders and catalog from the programs module.
pub use programs::{compare_efficiency, Comparison, ProgramInfo, PROGRAMS};
/// Re-exports the transition tables and their action records.
pub use table::{Transition, TransitionTable, TwoTapeTable, TwoTapeTransition};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the `TwoTapeMachine` struct from the two_tape module.
pub use two_tape::TwoTapeMachine;
/// Re-exports the result, snapshot, and error types from the types module.
pub use types::{
    Direction, MissingTransition, Outcome, Snapshot, Step, TuringMachineError,
    DEFAULT_BLANK_SYMBOL, DEFAULT_HALT_STATE, DEFAULT_INITIAL_STATE, DEFAULT_MAX_STEPS,
};
