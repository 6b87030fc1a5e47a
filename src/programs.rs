//! Ready-made machines built from explicit transition tables, plus the copy benchmark
//! that contrasts a quadratic single-tape copy with a linear two-tape copy.
//!
//! The engines know nothing about these programs; every machine here is configured
//! through the same public API any caller would use.

use crate::machine::TuringMachine;
use crate::two_tape::TwoTapeMachine;
use crate::types::{Direction, Outcome, TuringMachineError, DEFAULT_BLANK_SYMBOL};
use serde::Serialize;

use Direction::{Left, Right, Stay};

/// Symbols the palindrome checker understands.
pub const PALINDROME_ALPHABET: [char; 4] = ['a', 'b', 'c', 'd'];
/// Symbols the copy programs understand.
pub const COPY_ALPHABET: [char; 2] = ['a', 'b'];

/// Describes a bundled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub tapes: usize,
    pub alphabet: &'static str,
}

pub const PROGRAMS: [ProgramInfo; 4] = [
    ProgramInfo {
        name: "binary-increment",
        description: "Adds one to a binary number by scanning right, then propagating the carry left",
        tapes: 1,
        alphabet: "01",
    },
    ProgramInfo {
        name: "palindrome",
        description: "Copies the input to tape 2, rewinds tape 1, then compares both ends inward",
        tapes: 2,
        alphabet: "abcd",
    },
    ProgramInfo {
        name: "single-tape-copy",
        description: "Marks each symbol and carries an uppercase copy to the end of the tape, O(n^2)",
        tapes: 1,
        alphabet: "ab",
    },
    ProgramInfo {
        name: "two-tape-copy",
        description: "Copies tape 1 onto tape 2 in a single pass, O(n)",
        tapes: 2,
        alphabet: "ab",
    },
];

/// Looks up a bundled program by name, ignoring case.
pub fn find_program(name: &str) -> Option<&'static ProgramInfo> {
    PROGRAMS
        .iter()
        .find(|program| program.name.eq_ignore_ascii_case(name))
}

fn check_alphabet(input: &str, alphabet: &[char]) -> Result<(), TuringMachineError> {
    match input.chars().find(|c| !alphabet.contains(c)) {
        Some(c) => Err(TuringMachineError::InvalidInput(format!(
            "symbol '{}' is not in the alphabet {:?}",
            c, alphabet
        ))),
        None => Ok(()),
    }
}

/// Builds a single-tape machine that increments the binary number `input`.
///
/// Halts in `qhalt`; the trimmed tape holds the result (`"1011"` becomes `"1100"`).
pub fn binary_increment(input: &str) -> Result<TuringMachine, TuringMachineError> {
    check_alphabet(input, &['0', '1'])?;

    let mut machine = TuringMachine::new(input, DEFAULT_BLANK_SYMBOL)
        .with_initial_state("q0")
        .with_halt_states(["qhalt"]);

    machine.add_transitions([
        // Scan right to the end of the number
        ("q0", '0', "q0", '0', Right),
        ("q0", '1', "q0", '1', Right),
        ("q0", '_', "q1", '_', Left),
        // Propagate the carry leftwards
        ("q1", '0', "qhalt", '1', Stay),
        ("q1", '1', "q1", '0', Left),
        ("q1", '_', "qhalt", '1', Stay),
    ]);

    Ok(machine)
}

/// Builds a two-tape machine that halts in `accept` when `input` reads the same both
/// ways and in `reject` otherwise.
pub fn palindrome(input: &str) -> Result<TwoTapeMachine, TuringMachineError> {
    check_alphabet(input, &PALINDROME_ALPHABET)?;

    let blank = DEFAULT_BLANK_SYMBOL;
    let mut machine = TwoTapeMachine::new(input, "", blank)
        .with_initial_state("copy")
        .with_halt_states(["accept", "reject"]);

    // Copy tape 1 onto tape 2
    for symbol in PALINDROME_ALPHABET {
        machine.add_transition("copy", symbol, blank, "copy", symbol, Right, symbol, Right);
    }
    machine.add_transition("copy", blank, blank, "reset", blank, Left, blank, Stay);

    // Rewind tape 1 while tape 2 waits past its end
    for symbol in PALINDROME_ALPHABET {
        machine.add_transition("reset", symbol, blank, "reset", symbol, Left, blank, Stay);
    }
    machine.add_transition("reset", blank, blank, "compare", blank, Right, blank, Left);

    // Tape 1 forwards against tape 2 backwards
    for symbol in PALINDROME_ALPHABET {
        machine.add_transition("compare", symbol, symbol, "compare", symbol, Right, symbol, Left);
        for other in PALINDROME_ALPHABET.iter().copied().filter(|&o| o != symbol) {
            machine.add_transition("compare", symbol, other, "reject", symbol, Stay, other, Stay);
        }
    }
    machine.add_transition("compare", blank, blank, "accept", blank, Stay, blank, Stay);

    Ok(machine)
}

/// Builds a single-tape machine that appends an uppercase copy of `input` to the tape.
///
/// Each source symbol is overwritten with `X`, carried right past everything written
/// so far, and dropped on the first blank. The head then walks back to the last `X`.
/// The back-and-forth makes the step count quadratic in the input length.
pub fn single_tape_copy(input: &str) -> Result<TuringMachine, TuringMachineError> {
    check_alphabet(input, &COPY_ALPHABET)?;

    let mut machine = TuringMachine::new(input, DEFAULT_BLANK_SYMBOL)
        .with_initial_state("find")
        .with_halt_states(["done"]);

    machine.add_transitions([
        ("find", 'a', "carry_a", 'X', Right),
        ("find", 'b', "carry_b", 'X', Right),
        ("find", 'X', "find", 'X', Right),
        ("find", 'A', "done", 'A', Stay),
        ("find", 'B', "done", 'B', Stay),
        ("find", '_', "done", '_', Stay),
    ]);

    for (carry, copy) in [("carry_a", 'A'), ("carry_b", 'B')] {
        for symbol in ['a', 'b', 'X', 'A', 'B'] {
            machine.add_transition(carry, symbol, carry, symbol, Right);
        }
        machine.add_transition(carry, '_', "return", copy, Left);
    }

    for symbol in ['a', 'b', 'A', 'B'] {
        machine.add_transition("return", symbol, "return", symbol, Left);
    }
    machine.add_transition("return", 'X', "find", 'X', Right);

    Ok(machine)
}

/// Builds a two-tape machine that copies `input` from tape 1 onto tape 2 in one pass.
pub fn two_tape_copy(input: &str) -> Result<TwoTapeMachine, TuringMachineError> {
    check_alphabet(input, &COPY_ALPHABET)?;

    let blank = DEFAULT_BLANK_SYMBOL;
    let mut machine = TwoTapeMachine::new(input, "", blank)
        .with_initial_state("copy")
        .with_halt_states(["done"]);

    for symbol in COPY_ALPHABET {
        machine.add_transition("copy", symbol, blank, "copy", symbol, Right, symbol, Right);
    }
    machine.add_transition("copy", blank, blank, "done", blank, Stay, blank, Stay);

    Ok(machine)
}

/// One row of the copy benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub size: usize,
    pub single_tape_steps: usize,
    pub two_tape_steps: usize,
    pub single_tape_outcome: Outcome,
    pub two_tape_outcome: Outcome,
}

impl Comparison {
    /// How many times fewer steps the two-tape copy needed. Zero when it took none.
    pub fn speedup(&self) -> f64 {
        if self.two_tape_steps == 0 {
            0.0
        } else {
            self.single_tape_steps as f64 / self.two_tape_steps as f64
        }
    }
}

/// Returns `abab...` of length `size`.
pub fn alternating_input(size: usize) -> String {
    (0..size)
        .map(|i| if i % 2 == 0 { 'a' } else { 'b' })
        .collect()
}

/// Runs both copy programs on an alternating input of each size.
pub fn compare_efficiency(
    sizes: &[usize],
    max_steps: usize,
) -> Result<Vec<Comparison>, TuringMachineError> {
    sizes
        .iter()
        .map(|&size| {
            let input = alternating_input(size);
            let mut single = single_tape_copy(&input)?;
            let mut two = two_tape_copy(&input)?;

            let single_tape_outcome = single.run(max_steps);
            let two_tape_outcome = two.run(max_steps);

            Ok(Comparison {
                size,
                single_tape_steps: single.step_count(),
                two_tape_steps: two.step_count(),
                single_tape_outcome,
                two_tape_outcome,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_MAX_STEPS;

    #[test]
    fn test_program_names() {
        let names: Vec<_> = PROGRAMS.iter().map(|p| p.name).collect();

        assert!(names.contains(&"binary-increment"));
        assert!(names.contains(&"palindrome"));
        assert!(find_program("Palindrome").is_some());
        assert!(find_program("nonexistent").is_none());
    }

    #[test]
    fn test_binary_increment_without_carry() {
        let mut machine = binary_increment("1010").unwrap();

        assert_eq!(machine.run(DEFAULT_MAX_STEPS), Outcome::HaltedNormally);
        assert_eq!(machine.tape_content(), "1011");
    }

    #[test]
    fn test_binary_increment_overflow() {
        let mut machine = binary_increment("111").unwrap();

        assert_eq!(machine.run(DEFAULT_MAX_STEPS), Outcome::HaltedNormally);
        assert_eq!(machine.state(), "qhalt");
        assert_eq!(machine.tape_content(), "1000");
        assert_eq!(machine.step_count(), 8);
    }

    #[test]
    fn test_binary_increment_empty_input() {
        let mut machine = binary_increment("").unwrap();
        machine.run(DEFAULT_MAX_STEPS);

        assert_eq!(machine.tape_content(), "1");
    }

    #[test]
    fn test_binary_increment_rejects_non_binary() {
        let error = binary_increment("102").unwrap_err();

        assert!(matches!(error, TuringMachineError::InvalidInput(_)));
        assert!(error.to_string().contains("'2'"));
    }

    #[test]
    fn test_palindrome_empty_input_accepts() {
        let mut machine = palindrome("").unwrap();
        machine.run(DEFAULT_MAX_STEPS);

        assert_eq!(machine.state(), "accept");
    }

    #[test]
    fn test_palindrome_odd_length() {
        let mut machine = palindrome("abcba").unwrap();
        machine.run(DEFAULT_MAX_STEPS);
        assert_eq!(machine.state(), "accept");

        let mut machine = palindrome("abcda").unwrap();
        machine.run(DEFAULT_MAX_STEPS);
        assert_eq!(machine.state(), "reject");
    }

    #[test]
    fn test_palindrome_rejects_unknown_symbol() {
        assert!(palindrome("xyz").is_err());
    }

    #[test]
    fn test_single_tape_copy_result() {
        let mut machine = single_tape_copy("ab").unwrap();

        assert_eq!(machine.run(DEFAULT_MAX_STEPS), Outcome::HaltedNormally);
        assert_eq!(machine.state(), "done");
        assert_eq!(machine.tape_content(), "XXAB");
    }

    #[test]
    fn test_two_tape_copy_result() {
        let mut machine = two_tape_copy("abab").unwrap();

        assert_eq!(machine.run(DEFAULT_MAX_STEPS), Outcome::HaltedNormally);
        assert_eq!(machine.state(), "done");
        assert_eq!(machine.tape_contents(), ["abab".to_string(), "abab".to_string()]);
        assert_eq!(machine.step_count(), 5);
    }

    #[test]
    fn test_alternating_input() {
        assert_eq!(alternating_input(0), "");
        assert_eq!(alternating_input(5), "ababa");
    }

    #[test]
    fn test_compare_efficiency_grows_apart() {
        let rows = compare_efficiency(&[4, 8, 12], 5000).unwrap();

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.single_tape_outcome, Outcome::HaltedNormally);
            assert_eq!(row.two_tape_outcome, Outcome::HaltedNormally);
            assert_eq!(row.two_tape_steps, row.size + 1);
            assert!(row.single_tape_steps > row.two_tape_steps);
        }
        assert!(rows[2].speedup() > rows[0].speedup());
    }

    #[test]
    fn test_speedup_with_zero_steps() {
        let row = Comparison {
            size: 0,
            single_tape_steps: 0,
            two_tape_steps: 0,
            single_tape_outcome: Outcome::HaltedNormally,
            two_tape_outcome: Outcome::HaltedNormally,
        };

        assert_eq!(row.speedup(), 0.0);
    }
}
