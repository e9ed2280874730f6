//! Crossword grid geometry.

use std::str::FromStr;

use crate::{Direction, Position, StructureError, Variable};

/// Marker for a fillable cell in the text format.
pub const FILLABLE: char = '_';

/// Marker for a blocked cell in the text format.
pub const BLOCKED: char = '#';

/// The fixed shape of a crossword: a rectangular grid of fillable and
/// blocked cells.
///
/// # Text format
///
/// [`Structure::from_str`] reads one grid row per line:
/// - `_` is a fillable cell
/// - `#` is a blocked cell
/// - Leading and trailing whitespace on each line is ignored, as are blank lines
/// - The width is that of the longest row; shorter rows are padded with blocked cells
///
/// # Examples
///
/// ```
/// use crossfill_core::{Position, Structure};
///
/// let structure: Structure = "
///     #___
///     #_##
///     ____
/// "
/// .parse()?;
///
/// assert_eq!(structure.height(), 3);
/// assert_eq!(structure.width(), 4);
/// assert!(structure.is_fillable(Position::new(0, 1)));
/// assert!(!structure.is_fillable(Position::new(1, 2)));
/// assert!(!structure.is_fillable(Position::new(5, 5)));
/// # Ok::<(), crossfill_core::StructureError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Structure {
    /// Builds a structure from row-major cells, `true` meaning fillable.
    ///
    /// # Errors
    ///
    /// - [`StructureError::Empty`] if either dimension is zero.
    /// - [`StructureError::ShapeMismatch`] if `cells` does not hold exactly
    ///   `height * width` entries.
    pub fn from_cells(
        height: usize,
        width: usize,
        cells: Vec<bool>,
    ) -> Result<Self, StructureError> {
        if height == 0 || width == 0 {
            return Err(StructureError::Empty);
        }
        let expected = height * width;
        if cells.len() != expected {
            return Err(StructureError::ShapeMismatch {
                height,
                width,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if `pos` is inside the grid and fillable.
    #[must_use]
    pub fn is_fillable(&self, pos: Position) -> bool {
        pos.row() < self.height
            && pos.col() < self.width
            && self.cells[pos.row() * self.width + pos.col()]
    }

    /// Returns the number of fillable cells.
    #[must_use]
    pub fn fillable_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Scans the grid for word slots.
    ///
    /// A slot is a maximal horizontal or vertical run of fillable cells longer
    /// than one cell. Slots are returned sorted.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = vec![];
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Position::new(row, col);
                if !self.is_fillable(pos) {
                    continue;
                }
                for direction in Direction::ALL {
                    if self.has_fillable_before(pos, direction) {
                        continue;
                    }
                    let length = self.run_length(pos, direction);
                    if length > 1 {
                        variables.push(Variable::new(row, col, direction, length));
                    }
                }
            }
        }
        variables.sort_unstable();
        variables
    }

    fn has_fillable_before(&self, pos: Position, direction: Direction) -> bool {
        match direction {
            Direction::Across => {
                pos.col() > 0 && self.is_fillable(Position::new(pos.row(), pos.col() - 1))
            }
            Direction::Down => {
                pos.row() > 0 && self.is_fillable(Position::new(pos.row() - 1, pos.col()))
            }
        }
    }

    fn run_length(&self, start: Position, direction: Direction) -> usize {
        let limit = match direction {
            Direction::Across => self.width - start.col(),
            Direction::Down => self.height - start.row(),
        };
        (0..limit)
            .take_while(|&k| {
                let pos = match direction {
                    Direction::Across => Position::new(start.row(), start.col() + k),
                    Direction::Down => Position::new(start.row() + k, start.col()),
                };
                self.is_fillable(pos)
            })
            .count()
    }
}

impl FromStr for Structure {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        FILLABLE => Ok(true),
                        BLOCKED => Ok(false),
                        found => Err(StructureError::InvalidCell { row, col, found }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(height * width);
        for mut row in rows {
            row.resize(width, false);
            cells.extend(row);
        }
        Self::from_cells(height, width, cells)
    }
}
