use crossfill_core::Variable;

/// Errors that stop the solver before it can report an outcome.
///
/// An unsatisfiable puzzle is not an error; it is reported as
/// [`SolveOutcome::NoSolution`](crate::SolveOutcome::NoSolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// No word in the dictionary has the slot's length.
    #[display("no word in the word list fits slot {variable}")]
    NoCandidates {
        /// The slot left without candidates.
        variable: Variable,
    },
    /// The search gave up after backtracking more times than allowed.
    #[display("search exceeded the limit of {limit} backtracks")]
    BacktrackLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

/// Arc consistency emptied a slot's domain: no assignment can satisfy the
/// puzzle from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("domain of slot {variable} became empty")]
pub struct DomainWipeout {
    /// The slot whose domain emptied.
    pub variable: Variable,
}
