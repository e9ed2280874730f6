//! Core data structures for crossword filling.
//!
//! This crate describes a crossword puzzle as a constraint-satisfaction
//! problem. It owns everything that is fixed once the puzzle is loaded, plus
//! the assignment type that solvers produce.
//!
//! # Overview
//!
//! 1. **Geometry**
//!    - [`structure`]: The grid of fillable and blocked cells, parsed from text.
//!    - [`position`]: Zero-indexed `(row, col)` grid coordinates.
//!
//! 2. **Puzzle model**
//!    - [`variable`]: Word slots ([`Variable`]), their [`Direction`], and the
//!      [`Overlap`] offsets between crossing slots.
//!    - [`word`]: Candidate words from the dictionary.
//!    - [`crossword`]: The [`Crossword`] itself, which ties a structure and a word
//!      list together and precomputes the constraint graph.
//!
//! 3. **Results**
//!    - [`assignment`]: A mapping from slots to chosen words, with consistency checks.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{Crossword, Direction, Structure};
//!
//! let structure: Structure = "
//!     ___
//!     _##
//!     _##
//! "
//! .parse()?;
//! let crossword = Crossword::new(structure, ["CAT", "COW", "DOG"])?;
//!
//! assert_eq!(crossword.variables().len(), 2);
//! let across = crossword.variable_starting_at(0, 0, Direction::Across).unwrap();
//! let down = crossword.variable_starting_at(0, 0, Direction::Down).unwrap();
//! assert!(crossword.overlap(across, down).is_some());
//! # Ok::<(), crossfill_core::CrosswordError>(())
//! ```

pub mod assignment;
pub mod crossword;
mod error;
pub mod position;
pub mod structure;
pub mod variable;
pub mod word;

pub use self::{
    assignment::Assignment,
    crossword::{Crossword, VariableId},
    error::{CrosswordError, StructureError},
    position::Position,
    structure::Structure,
    variable::{Direction, Overlap, Variable},
    word::{Word, WordId},
};
