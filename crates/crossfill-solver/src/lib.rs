//! Constraint-satisfaction solver for crossword puzzles.
//!
//! The solver works in two phases over a [`Crossword`](crossfill_core::Crossword):
//!
//! 1. **Propagation** - [`Domains`] holds the candidate words of every slot.
//!    [`Domains::enforce_node_consistency`] drops words of the wrong length and
//!    [`Domains::ac3`] removes words that no crossing slot can accommodate.
//! 2. **Search** - [`BacktrackSolver`] assigns slots one at a time, choosing the
//!    slot with the fewest remaining candidates (ties broken by degree) and
//!    trying its least-constraining words first. Every branch works on its own
//!    copy of the domains, re-running arc consistency around the new word.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::Crossword;
//! use crossfill_solver::{BacktrackSolver, SolveOutcome};
//!
//! let crossword = Crossword::new(
//!     "
//!     ___
//!     _##
//!     _##
//!     "
//!     .parse()?,
//!     ["CAT", "COW", "DOG"],
//! )?;
//!
//! let solver = BacktrackSolver::new(&crossword);
//! let (outcome, stats) = solver.solve()?;
//! let SolveOutcome::Solved(assignment) = outcome else {
//!     panic!("expected a solution");
//! };
//! assert!(assignment.is_complete());
//! assert!(assignment.is_consistent());
//! println!("{} assignments tried", stats.assignments());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack_solver::*, domains::*, error::*};

mod backtrack_solver;
mod consistency;
mod domains;
mod error;

#[cfg(test)]
mod testing;
