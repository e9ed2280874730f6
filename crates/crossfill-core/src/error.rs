/// Errors produced while parsing or building a [`Structure`](crate::Structure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructureError {
    /// The grid has no rows or no columns.
    #[display("structure has no cells")]
    Empty,
    /// The number of cells does not match `height * width`.
    #[display("structure of {height}x{width} needs {expected} cells, got {actual}")]
    ShapeMismatch {
        /// Grid height.
        height: usize,
        /// Grid width.
        width: usize,
        /// Number of cells implied by the dimensions.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A character that is neither a fillable nor a blocked cell marker.
    #[display("invalid cell {found:?} at row {row}, column {col}")]
    InvalidCell {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The character found.
        found: char,
    },
}

/// Errors produced while building a [`Crossword`](crate::Crossword).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum CrosswordError {
    /// The structure could not be parsed or built.
    #[display("invalid structure: {_0}")]
    Structure(StructureError),
    /// No candidate words were supplied.
    #[display("word list is empty")]
    EmptyWordList,
}
