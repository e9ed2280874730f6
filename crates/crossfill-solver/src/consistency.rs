//! Node and arc consistency over [`Domains`].

use std::collections::VecDeque;

use crossfill_core::VariableId;

use crate::{DomainWipeout, Domains};

impl Domains<'_> {
    /// Removes every candidate whose length differs from its slot's length.
    ///
    /// Returns `true` if any candidate was removed. Running it twice changes
    /// nothing the second time.
    pub fn enforce_node_consistency(&mut self) -> bool {
        let crossword = self.crossword;
        let mut changed = false;
        for var in crossword.variable_ids() {
            let length = crossword.variable(var).length();
            let domain = &mut self.candidates[var.index()];
            let before = domain.len();
            domain.retain(|&word| crossword.word(word).len() == length);
            changed |= domain.len() != before;
        }
        changed
    }

    /// Makes `x` arc consistent with `y`.
    ///
    /// Removes every candidate `w` of `x` for which `y` has no candidate `v`
    /// that differs from `w` and carries the same letter at the shared cell.
    /// Slots that do not cross are left alone.
    ///
    /// Returns `true` if the domain of `x` changed.
    pub fn revise(&mut self, x: VariableId, y: VariableId) -> bool {
        let crossword = self.crossword;
        let Some(overlap) = crossword.overlap(x, y) else {
            return false;
        };
        let (xs, ys) = pair_mut(&mut self.candidates, x.index(), y.index());
        let before = xs.len();
        xs.retain(|&w| {
            let word = crossword.word(w);
            ys.iter()
                .any(|&v| v != w && overlap.agrees(word, crossword.word(v)))
        });
        xs.len() != before
    }

    /// Enforces arc consistency over every crossing in the puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`DomainWipeout`] as soon as a slot's domain becomes empty. The
    /// domains are left partially revised in that case.
    pub fn ac3(&mut self) -> Result<(), DomainWipeout> {
        let arcs: Vec<_> = self.crossword.arcs().collect();
        self.ac3_with_arcs(arcs)
    }

    /// Enforces arc consistency starting from the given arcs.
    ///
    /// Each arc `(x, y)` is revised in turn. Whenever `x` loses a candidate,
    /// every arc `(z, x)` with `z` crossing `x` (other than `y`) is queued again.
    /// An arc is never queued twice at the same time.
    ///
    /// # Errors
    ///
    /// Returns [`DomainWipeout`] as soon as a slot's domain becomes empty. The
    /// domains are left partially revised in that case.
    pub fn ac3_with_arcs<I>(&mut self, arcs: I) -> Result<(), DomainWipeout>
    where
        I: IntoIterator<Item = (VariableId, VariableId)>,
    {
        let crossword = self.crossword;
        let n = crossword.variables().len();
        let mut queued = vec![false; n * n];
        let mut queue = VecDeque::new();
        for (x, y) in arcs {
            if !std::mem::replace(&mut queued[x.index() * n + y.index()], true) {
                queue.push_back((x, y));
            }
        }

        while let Some((x, y)) = queue.pop_front() {
            queued[x.index() * n + y.index()] = false;
            if !self.revise(x, y) {
                continue;
            }
            if self.is_empty(x) {
                let variable = crossword.variable(x);
                log::trace!(
                    "ac3: domain of {variable} wiped out by {}",
                    crossword.variable(y)
                );
                return Err(DomainWipeout { variable });
            }
            for &z in crossword.neighbors(x) {
                if z != y && !std::mem::replace(&mut queued[z.index() * n + x.index()], true) {
                    queue.push_back((z, x));
                }
            }
        }
        Ok(())
    }
}

/// Borrows two distinct elements of a slice mutably and immutably.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &T) {
    assert_ne!(a, b, "a slot never crosses itself");
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &left[b])
    }
}
