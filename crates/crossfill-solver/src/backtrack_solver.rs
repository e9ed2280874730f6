use std::{
    cmp::Reverse,
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use crossfill_core::{Assignment, Crossword, VariableId, WordId};
use rayon::prelude::*;

use crate::{Domains, SolverError};

/// Statistics collected during backtracking search.
///
/// # Examples
///
/// ```
/// use crossfill_core::Crossword;
/// use crossfill_solver::BacktrackSolver;
///
/// let crossword = Crossword::new("___".parse()?, ["CAT", "DOG"])?;
/// let solver = BacktrackSolver::new(&crossword);
///
/// let (outcome, stats) = solver.solve()?;
/// assert!(outcome.is_solved());
/// assert_eq!(stats.assignments(), 1);
/// assert_eq!(stats.backtracks(), 0);
/// assert_eq!(stats.max_depth(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStats {
    assignments: usize,
    backtracks: usize,
    max_depth: usize,
}

impl SolverStats {
    /// Returns the number of words the search committed to a slot.
    ///
    /// Values rejected by the consistency check before being committed are
    /// not counted.
    #[must_use]
    pub fn assignments(&self) -> usize {
        self.assignments
    }

    /// Returns the number of committed words the search later took back.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the largest number of slots assigned at once.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if the search ever had to undo a choice.
    #[must_use]
    pub fn has_backtracked(&self) -> bool {
        self.backtracks > 0
    }
}

/// The result of a completed search.
///
/// A search either finds a full, valid fill or proves there is none. A
/// partial assignment is never reported.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome<'a> {
    /// Every slot holds a word and all constraints hold.
    Solved(Assignment<'a>),
    /// The puzzle cannot be filled from the word list.
    NoSolution,
}

impl<'a> SolveOutcome<'a> {
    /// Returns the assignment if the puzzle was solved.
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment<'a>> {
        match self {
            Self::Solved(assignment) => Some(assignment),
            Self::NoSolution => None,
        }
    }

    /// Consumes the outcome, returning the assignment if the puzzle was solved.
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment<'a>> {
        match self {
            Self::Solved(assignment) => Some(assignment),
            Self::NoSolution => None,
        }
    }
}

/// A backtracking crossword solver with constraint propagation.
///
/// Solving first makes the domains node consistent and arc consistent, then
/// searches:
///
/// 1. Pick the unassigned slot with the fewest candidates, preferring the slot
///    that crosses the most others, then the earliest slot.
/// 2. Try its candidates in least-constraining order, skipping words already
///    placed elsewhere.
/// 3. For each word that is consistent with the assignment, narrow the slot's
///    domain to that word on a copy of the domains, propagate with AC-3 along
///    the arcs into the slot, and recurse.
///
/// The search is exhaustive and deterministic: the same puzzle always yields
/// the same fill.
///
/// # Examples
///
/// ```
/// use crossfill_core::Crossword;
/// use crossfill_solver::{BacktrackSolver, SolveOutcome};
///
/// // Two crossing slots whose middle letters can never match.
/// let crossword = Crossword::new("#_#\n___\n#_#".parse()?, ["CAT", "DOG"])?;
/// let solver = BacktrackSolver::new(&crossword);
///
/// let (outcome, _stats) = solver.solve()?;
/// assert_eq!(outcome, SolveOutcome::NoSolution);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BacktrackSolver<'a> {
    crossword: &'a Crossword,
    backtrack_limit: Option<usize>,
}

impl<'a> BacktrackSolver<'a> {
    /// Creates a solver with no backtrack limit.
    #[must_use]
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            backtrack_limit: None,
        }
    }

    /// Stops the search with [`SolverError::BacktrackLimitExceeded`] once it
    /// has backtracked more than `limit` times.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossfill_core::Crossword;
    /// use crossfill_solver::BacktrackSolver;
    ///
    /// let crossword = Crossword::new("___".parse()?, ["CAT"])?;
    /// let solver = BacktrackSolver::new(&crossword).with_backtrack_limit(1000);
    /// assert_eq!(solver.backtrack_limit(), Some(1000));
    /// # Ok::<(), crossfill_core::CrosswordError>(())
    /// ```
    #[must_use]
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }

    /// Returns the crossword being solved.
    #[must_use]
    pub fn crossword(&self) -> &'a Crossword {
        self.crossword
    }

    /// Returns the configured backtrack limit.
    #[must_use]
    pub fn backtrack_limit(&self) -> Option<usize> {
        self.backtrack_limit
    }

    /// Creates an empty statistics object.
    #[must_use]
    pub fn new_stats(&self) -> SolverStats {
        SolverStats::default()
    }

    /// Builds node- and arc-consistent initial domains.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(domains))` - Propagation succeeded
    /// * `Ok(None)` - Arc consistency proved the puzzle unsatisfiable
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoCandidates`] if some slot has no word of its
    /// length in the dictionary.
    pub fn prepare(&self) -> Result<Option<Domains<'a>>, SolverError> {
        let mut domains = Domains::new(self.crossword);
        domains.enforce_node_consistency();
        if let Some(var) = domains.first_empty() {
            return Err(SolverError::NoCandidates {
                variable: self.crossword.variable(var),
            });
        }
        match domains.ac3() {
            Ok(()) => Ok(Some(domains)),
            Err(wipeout) => {
                log::debug!("initial arc consistency failed: {wipeout}");
                Ok(None)
            }
        }
    }

    /// Fills the crossword.
    ///
    /// # Returns
    ///
    /// Returns a tuple `(outcome, stats)` where:
    /// * `outcome` - [`SolveOutcome::Solved`] with a complete, valid assignment,
    ///   or [`SolveOutcome::NoSolution`]
    /// * `stats` - Statistics about the search
    ///
    /// # Errors
    ///
    /// - [`SolverError::NoCandidates`] if some slot cannot hold any dictionary word.
    /// - [`SolverError::BacktrackLimitExceeded`] if a limit was configured and
    ///   the search exceeded it.
    pub fn solve(&self) -> Result<(SolveOutcome<'a>, SolverStats), SolverError> {
        let mut stats = self.new_stats();
        let outcome = self.solve_with_stats(&mut stats)?;
        Ok((outcome, stats))
    }

    /// Fills the crossword, accumulating statistics into `stats`.
    ///
    /// This is the same as [`solve`](Self::solve), but reuses an existing
    /// statistics object.
    ///
    /// # Errors
    ///
    /// See [`solve`](Self::solve).
    pub fn solve_with_stats(
        &self,
        stats: &mut SolverStats,
    ) -> Result<SolveOutcome<'a>, SolverError> {
        let Some(domains) = self.prepare()? else {
            return Ok(SolveOutcome::NoSolution);
        };
        log::debug!(
            "searching {} slots over {} words",
            self.crossword.variables().len(),
            self.crossword.words().len()
        );

        let mut assignment = Assignment::new(self.crossword);
        let mut search = Search::new(stats, None);
        let solved = self.backtrack(&domains, &mut assignment, &mut search)?;
        log::debug!(
            "search finished: solved={solved}, assignments={}, backtracks={}",
            search.stats.assignments,
            search.backtracks
        );
        Ok(if solved {
            SolveOutcome::Solved(assignment)
        } else {
            SolveOutcome::NoSolution
        })
    }

    /// Fills the crossword, exploring the first slot's candidates in parallel.
    ///
    /// Each candidate of the first selected slot is searched on its own thread
    /// with an independent copy of the domains. The first branch to find a fill
    /// wins; branches still running stop at their next step, so the returned
    /// fill may differ from the one [`solve`](Self::solve) finds. The backtrack
    /// limit applies to each branch separately.
    ///
    /// # Errors
    ///
    /// See [`solve`](Self::solve). A branch error is reported only if no
    /// branch found a fill.
    pub fn solve_parallel(&self) -> Result<SolveOutcome<'a>, SolverError> {
        let Some(domains) = self.prepare()? else {
            return Ok(SolveOutcome::NoSolution);
        };
        let assignment = Assignment::new(self.crossword);
        let Some(var) = self.select_unassigned_variable(&domains, &assignment) else {
            return Ok(SolveOutcome::Solved(assignment));
        };

        let stop = AtomicBool::new(false);
        let failure = OnceLock::new();
        let found = self
            .order_domain_values(&domains, &assignment, var)
            .into_par_iter()
            .find_map_any(|word| {
                let mut assignment = assignment.clone();
                let mut stats = self.new_stats();
                let mut search = Search::new(&mut stats, Some(&stop));
                match self.try_value(&domains, &mut assignment, var, word, &mut search) {
                    Ok(true) => {
                        stop.store(true, Ordering::Relaxed);
                        Some(assignment)
                    }
                    Ok(false) => None,
                    Err(err) => {
                        let _ = failure.set(err);
                        None
                    }
                }
            });

        match (found, failure.into_inner()) {
            (Some(assignment), _) => Ok(SolveOutcome::Solved(assignment)),
            (None, Some(err)) => Err(err),
            (None, None) => Ok(SolveOutcome::NoSolution),
        }
    }

    /// Chooses the next slot to assign.
    ///
    /// Picks the unassigned slot with the fewest remaining candidates. Ties go
    /// to the slot with the most crossing slots, then to the earliest slot in
    /// slot order. Returns `None` if every slot is assigned.
    #[must_use]
    pub fn select_unassigned_variable(
        &self,
        domains: &Domains<'_>,
        assignment: &Assignment<'_>,
    ) -> Option<VariableId> {
        let degree = |var| self.crossword.degree(var);
        self.crossword
            .variable_ids()
            .filter(|&var| !assignment.is_assigned(var))
            .min_by_key(|&var| (domains.len(var), Reverse(degree(var)), var))
    }

    /// Orders the candidates of `var` by how few options they rule out.
    ///
    /// For each candidate, counts the words it would eliminate from the domains
    /// of unassigned crossing slots: the same word, and words disagreeing at the
    /// shared cell. Candidates with lower counts come first; ties keep
    /// alphabetical order. Words already assigned to another slot are left out.
    #[must_use]
    pub fn order_domain_values(
        &self,
        domains: &Domains<'_>,
        assignment: &Assignment<'_>,
        var: VariableId,
    ) -> Vec<WordId> {
        let crossword = self.crossword;
        let neighbors: Vec<_> = crossword
            .neighbors(var)
            .iter()
            .copied()
            .filter(|&z| !assignment.is_assigned(z))
            .filter_map(|z| crossword.overlap(var, z).map(|overlap| (z, overlap)))
            .collect();

        let current = assignment.get(var);
        let mut ranked: Vec<_> = domains
            .candidates(var)
            .filter(|&w| current == Some(w) || !assignment.contains_word(w))
            .map(|w| {
                let word = crossword.word(w);
                let ruled_out: usize = neighbors
                    .iter()
                    .map(|&(z, overlap)| {
                        domains
                            .candidates(z)
                            .filter(|&v| v == w || !overlap.agrees(word, crossword.word(v)))
                            .count()
                    })
                    .sum();
                (ruled_out, w)
            })
            .collect();
        ranked.sort_by_key(|&(ruled_out, _)| ruled_out);
        ranked.into_iter().map(|(_, w)| w).collect()
    }

    fn backtrack(
        &self,
        domains: &Domains<'a>,
        assignment: &mut Assignment<'a>,
        search: &mut Search<'_>,
    ) -> Result<bool, SolverError> {
        if search.is_stopped() {
            return Ok(false);
        }
        let Some(var) = self.select_unassigned_variable(domains, assignment) else {
            return Ok(true);
        };
        for word in self.order_domain_values(domains, assignment, var) {
            if self.try_value(domains, assignment, var, word, search)? {
                return Ok(true);
            }
            if search.is_stopped() {
                return Ok(false);
            }
        }
        Ok(false)
    }

    /// Tries `word` for `var` and searches below it.
    ///
    /// On failure the assignment is restored to its state before the call.
    fn try_value(
        &self,
        domains: &Domains<'a>,
        assignment: &mut Assignment<'a>,
        var: VariableId,
        word: WordId,
        search: &mut Search<'_>,
    ) -> Result<bool, SolverError> {
        if search.is_stopped() || !assignment.is_consistent_with(var, word) {
            return Ok(false);
        }

        assignment.assign(var, word);
        search.stats.assignments += 1;
        search.stats.max_depth = search.stats.max_depth.max(assignment.len());
        log::trace!(
            "assign {} = {} (depth {})",
            self.crossword.variable(var),
            self.crossword.word(word),
            assignment.len()
        );

        let mut branch = domains.clone();
        branch.restrict_to(var, word);
        let arcs = self.crossword.neighbors(var).iter().map(|&z| (z, var));
        let propagated = match branch.ac3_with_arcs(arcs) {
            Ok(()) => true,
            Err(wipeout) => {
                log::trace!("prune {}: {wipeout}", self.crossword.word(word));
                false
            }
        };
        if propagated && self.backtrack(&branch, assignment, search)? {
            return Ok(true);
        }

        assignment.unassign(var);
        search.stats.backtracks += 1;
        search.backtracks += 1;
        log::trace!(
            "backtrack {} = {}",
            self.crossword.variable(var),
            self.crossword.word(word)
        );
        if let Some(limit) = self.backtrack_limit
            && search.backtracks > limit
        {
            return Err(SolverError::BacktrackLimitExceeded { limit });
        }
        Ok(false)
    }
}

/// State of one search run.
struct Search<'s> {
    stats: &'s mut SolverStats,
    /// Backtracks in this run only; `stats` may carry counts from earlier runs.
    backtracks: usize,
    /// Set once any parallel branch has found a fill.
    stop: Option<&'s AtomicBool>,
}

impl<'s> Search<'s> {
    fn new(stats: &'s mut SolverStats, stop: Option<&'s AtomicBool>) -> Self {
        Self {
            stats,
            backtracks: 0,
            stop,
        }
    }

    fn is_stopped(&self) -> bool {
        self.stop.is_some_and(|stop| stop.load(Ordering::Relaxed))
    }
}
