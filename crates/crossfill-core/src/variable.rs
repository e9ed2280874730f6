//! Word slots and the overlaps between them.

use crate::{Position, Word};

/// Orientation of a word slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// Left to right.
    #[display("across")]
    Across,
    /// Top to bottom.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, `Across` first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];
}

/// A word slot in the grid.
///
/// Two variables are equal only if all four of start row, start column,
/// direction and length match. The derived ordering is lexicographic over the
/// same fields, so sorting variables sorts them by start position.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Position, Variable};
///
/// let var = Variable::new(1, 2, Direction::Down, 3);
/// let cells: Vec<_> = var.cells().collect();
/// assert_eq!(
///     cells,
///     [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col}) {direction} {length}")]
pub struct Variable {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    /// Creates a slot starting at `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Returns the first cell of the slot.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the slot's orientation.
    #[must_use]
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells in the slot.
    #[must_use]
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the `k`-th cell of the slot, or `None` past its end.
    #[must_use]
    pub const fn cell(&self, k: usize) -> Option<Position> {
        if k >= self.length {
            return None;
        }
        Some(match self.direction {
            Direction::Across => Position::new(self.row, self.col + k),
            Direction::Down => Position::new(self.row + k, self.col),
        })
    }

    /// Returns the cells of the slot in word order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let var = *self;
        (0..var.length).filter_map(move |k| var.cell(k))
    }

    /// Returns the offset of `pos` within the slot, if the slot covers it.
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        match self.direction {
            Direction::Across if pos.row() == self.row && pos.col() >= self.col => {
                Some(pos.col() - self.col).filter(|&k| k < self.length)
            }
            Direction::Down if pos.col() == self.col && pos.row() >= self.row => {
                Some(pos.row() - self.row).filter(|&k| k < self.length)
            }
            _ => None,
        }
    }

    /// Returns `true` if the slot covers `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.offset_of(pos).is_some()
    }

    /// Returns the overlap with another slot, or `None` if they share no cell.
    ///
    /// A slot never overlaps itself.
    #[must_use]
    pub fn overlap_with(&self, other: &Variable) -> Option<Overlap> {
        if self == other {
            return None;
        }
        self.cells().enumerate().find_map(|(first, pos)| {
            other
                .offset_of(pos)
                .map(|second| Overlap::new(first, second))
        })
    }
}

/// The shared cell of two crossing slots `x` and `y`.
///
/// Character `first` of `x`'s word must equal character `second` of `y`'s word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    /// Offset into the first slot's word.
    pub first: usize,
    /// Offset into the second slot's word.
    pub second: usize,
}

impl Overlap {
    /// Creates an overlap from the two offsets.
    #[must_use]
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Returns the same overlap seen from the other slot.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.second, self.first)
    }

    /// Returns `true` if the two words carry the same letter at the shared cell.
    ///
    /// A word too short to reach its offset never agrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossfill_core::{Overlap, Word};
    ///
    /// let overlap = Overlap::new(1, 0);
    /// assert!(overlap.agrees(&Word::new("CAT"), &Word::new("ANT")));
    /// assert!(!overlap.agrees(&Word::new("DOG"), &Word::new("ANT")));
    /// ```
    #[must_use]
    pub fn agrees(self, first: &Word, second: &Word) -> bool {
        match (first.letter(self.first), second.letter(self.second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
