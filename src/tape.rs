//! This module provides the `Tape` type: a lazily materialized, two-way unbounded
//! sequence of symbols together with the head that reads and writes it.

use crate::types::Direction;
use std::collections::VecDeque;
use std::fmt;

/// A growable tape and its read/write head.
///
/// Cells are allocated only when the head visits them, and new cells hold the
/// blank symbol. The tape always has at least one cell and the head is always a
/// valid index into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<char>,
    head: usize,
    blank: char,
}

impl Tape {
    /// Creates a tape holding `content` with the head on the first cell.
    /// An empty `content` yields a single blank cell.
    pub fn new(content: &str, blank: char) -> Self {
        let mut cells: VecDeque<char> = content.chars().collect();
        if cells.is_empty() {
            cells.push_back(blank);
        }

        Self {
            cells,
            head: 0,
            blank,
        }
    }

    /// Returns the symbol under the head.
    pub fn read(&self) -> char {
        self.cells[self.head]
    }

    /// Overwrites the symbol under the head.
    pub fn write(&mut self, symbol: char) {
        self.cells[self.head] = symbol;
    }

    /// Moves the head one cell, materializing a blank cell when it steps off either end.
    ///
    /// Stepping off the left edge prepends a cell, which shifts every existing cell one
    /// index to the right and leaves the head at index 0.
    pub fn shift(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.head == 0 {
                    self.cells.push_front(self.blank);
                } else {
                    self.head -= 1;
                }
            }
            Direction::Right => {
                self.head += 1;
                if self.head >= self.cells.len() {
                    self.cells.push_back(self.blank);
                }
            }
            Direction::Stay => {}
        }
    }

    /// Returns the head index.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the blank symbol of this tape.
    pub fn blank(&self) -> char {
        self.blank
    }

    /// Returns the number of materialized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a tape holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the materialized cells in order.
    pub fn cells(&self) -> Vec<char> {
        self.cells.iter().copied().collect()
    }

    /// Returns the materialized cells as a string, blanks included.
    pub fn raw(&self) -> String {
        self.cells.iter().collect()
    }

    /// Returns the content with leading and trailing blank runs removed.
    /// Interior blanks are kept.
    pub fn trimmed(&self) -> String {
        trim_blanks(&self.raw(), self.blank).to_string()
    }
}

impl fmt::Display for Tape {
    /// Renders every cell, bracketing the one under the head: ` a [b] c `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_cells(f, self.cells.iter().copied(), self.head)
    }
}

/// Writes `cells` with the cell at `head` bracketed and every other cell padded.
pub(crate) fn render_cells(
    f: &mut fmt::Formatter<'_>,
    cells: impl IntoIterator<Item = char>,
    head: usize,
) -> fmt::Result {
    for (i, symbol) in cells.into_iter().enumerate() {
        if i == head {
            write!(f, "[{symbol}]")?;
        } else {
            write!(f, " {symbol} ")?;
        }
    }

    Ok(())
}

/// Strips leading and trailing runs of `blank` from `content`.
pub fn trim_blanks(content: &str, blank: char) -> &str {
    content.trim_matches(blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_one_blank() {
        let tape = Tape::new("", '_');

        assert_eq!(tape.len(), 1);
        assert_eq!(tape.read(), '_');
        assert_eq!(tape.head(), 0);
    }

    #[test]
    fn test_right_growth_appends_blank() {
        let mut tape = Tape::new("ab", '_');

        tape.shift(Direction::Right);
        assert_eq!(tape.head(), 1);
        assert_eq!(tape.len(), 2);

        tape.shift(Direction::Right);
        assert_eq!(tape.head(), 2);
        assert_eq!(tape.cells(), vec!['a', 'b', '_']);
        assert_eq!(tape.read(), '_');
    }

    #[test]
    fn test_left_growth_prepends_blank() {
        let mut tape = Tape::new("ab", '_');

        tape.shift(Direction::Left);
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.raw(), "_ab");

        tape.shift(Direction::Left);
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.raw(), "__ab");
    }

    #[test]
    fn test_stay_keeps_head() {
        let mut tape = Tape::new("x", '_');
        tape.shift(Direction::Stay);

        assert_eq!(tape.head(), 0);
        assert_eq!(tape.len(), 1);
    }

    #[test]
    fn test_write_then_read() {
        let mut tape = Tape::new("0", '_');
        tape.write('1');

        assert_eq!(tape.read(), '1');
    }

    #[test]
    fn test_trimmed_keeps_interior_blanks() {
        let tape = Tape::new("__a_b__", '_');

        assert_eq!(tape.trimmed(), "a_b");
        assert_eq!(trim_blanks(&tape.trimmed(), '_'), "a_b");
    }

    #[test]
    fn test_trimmed_all_blank() {
        let tape = Tape::new("___", '_');

        assert_eq!(tape.trimmed(), "");
    }

    #[test]
    fn test_display_brackets_head() {
        let mut tape = Tape::new("abc", '_');
        tape.shift(Direction::Right);

        assert_eq!(tape.to_string(), " a [b] c ");
    }
}
