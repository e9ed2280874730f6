//! Slot-to-word assignments.

use crate::{Crossword, Variable, VariableId, Word, WordId};

/// A partial or complete mapping from slots to chosen words.
///
/// An assignment is tied to the [`Crossword`] it was created for. It does not
/// enforce consistency on its own; [`is_consistent`](Self::is_consistent) and
/// [`is_consistent_with`](Self::is_consistent_with) check it on demand.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Assignment, Crossword, Direction};
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?, ["CAT", "COW"])?;
/// let across = crossword.variable_starting_at(0, 0, Direction::Across).unwrap();
/// let down = crossword.variable_starting_at(0, 0, Direction::Down).unwrap();
/// let cat = crossword.find_word("CAT").unwrap();
/// let cow = crossword.find_word("COW").unwrap();
///
/// let mut assignment = Assignment::new(&crossword);
/// assignment.assign(across, cat);
/// assert!(assignment.is_consistent_with(down, cow));
/// assert!(!assignment.is_consistent_with(down, cat)); // already used
///
/// assignment.assign(down, cow);
/// assert!(assignment.is_complete());
/// assert!(assignment.is_consistent());
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    crossword: &'a Crossword,
    words: Vec<Option<WordId>>,
    assigned: usize,
}

impl<'a> Assignment<'a> {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            words: vec![None; crossword.variables().len()],
            assigned: 0,
        }
    }

    /// Returns the crossword this assignment belongs to.
    #[must_use]
    #[inline]
    pub fn crossword(&self) -> &'a Crossword {
        self.crossword
    }

    /// Assigns `word` to `var`, returning the word it replaces.
    pub fn assign(&mut self, var: VariableId, word: WordId) -> Option<WordId> {
        let previous = self.words[var.index()].replace(word);
        if previous.is_none() {
            self.assigned += 1;
        }
        previous
    }

    /// Removes the word assigned to `var`, returning it.
    pub fn unassign(&mut self, var: VariableId) -> Option<WordId> {
        let previous = self.words[var.index()].take();
        if previous.is_some() {
            self.assigned -= 1;
        }
        previous
    }

    /// Returns the id of the word assigned to `var`.
    #[must_use]
    #[inline]
    pub fn get(&self, var: VariableId) -> Option<WordId> {
        self.words[var.index()]
    }

    /// Returns the word assigned to `var`.
    #[must_use]
    pub fn word(&self, var: VariableId) -> Option<&'a Word> {
        self.get(var).map(|id| self.crossword.word(id))
    }

    /// Returns `true` if `var` has a word.
    #[must_use]
    #[inline]
    pub fn is_assigned(&self, var: VariableId) -> bool {
        self.words[var.index()].is_some()
    }

    /// Returns the number of assigned slots.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.assigned
    }

    /// Returns `true` if no slot has a word.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Returns `true` if every slot has a word.
    #[must_use]
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.assigned == self.words.len()
    }

    /// Returns `true` if some slot already holds `word`.
    #[must_use]
    pub fn contains_word(&self, word: WordId) -> bool {
        self.words.contains(&Some(word))
    }

    /// Returns the assigned slots with their words, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &'a Word)> + '_ {
        self.crossword
            .variable_ids()
            .filter_map(|var| {
                self.word(var)
                    .map(|word| (self.crossword.variable(var), word))
            })
    }

    /// Returns `true` if assigning `word` to `var` keeps the assignment valid.
    ///
    /// Checks that `word` fits the slot length, is not already used by another
    /// slot, and agrees with every assigned crossing slot. Any word currently
    /// assigned to `var` itself is ignored. If the rest of the assignment is
    /// consistent, this is equivalent to assigning and calling
    /// [`is_consistent`](Self::is_consistent).
    #[must_use]
    pub fn is_consistent_with(&self, var: VariableId, word: WordId) -> bool {
        let candidate = self.crossword.word(word);
        if candidate.len() != self.crossword.variable(var).length() {
            return false;
        }
        let used_elsewhere = self
            .words
            .iter()
            .enumerate()
            .any(|(i, assigned)| i != var.index() && *assigned == Some(word));
        if used_elsewhere {
            return false;
        }
        self.crossword.neighbors(var).iter().all(|&neighbor| {
            self.word(neighbor).is_none_or(|other| {
                self.crossword
                    .overlap(var, neighbor)
                    .is_some_and(|overlap| overlap.agrees(candidate, other))
            })
        })
    }

    /// Returns `true` if the whole assignment is valid.
    ///
    /// No two slots hold the same word, every word fits its slot's length,
    /// and every pair of assigned crossing slots agrees on the shared letter.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.crossword.variable_ids().all(|var| {
            self.get(var)
                .is_none_or(|word| self.is_consistent_with(var, word))
        })
    }

    /// Returns the grid of placed letters, `height` rows of `width` cells.
    ///
    /// Blocked cells and cells not covered by an assigned slot are `None`.
    /// Where crossing slots disagree, the later slot in slot order wins.
    #[must_use]
    pub fn letter_grid(&self) -> Vec<Vec<Option<char>>> {
        let mut grid = vec![vec![None; self.crossword.width()]; self.crossword.height()];
        for (var, word) in self.iter() {
            for (pos, &letter) in var.cells().zip(word.letters()) {
                grid[pos.row()][pos.col()] = Some(letter);
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    fn fixture() -> Crossword {
        // Top across crosses a down slot at its middle letter.
        Crossword::new(
            "
            ___
            #_#
            #_#
            "
            .parse()
            .unwrap(),
            ["ANT", "CAT", "DOG", "ART", "TO"],
        )
        .unwrap()
    }

    fn ids(cw: &Crossword) -> (VariableId, VariableId) {
        (
            cw.variable_starting_at(0, 0, Direction::Across).unwrap(),
            cw.variable_starting_at(0, 1, Direction::Down).unwrap(),
        )
    }

    #[test]
    fn test_assign_and_unassign_track_len() {
        let cw = fixture();
        let (across, down) = ids(&cw);
        let cat = cw.find_word("CAT").unwrap();
        let dog = cw.find_word("DOG").unwrap();

        let mut assignment = Assignment::new(&cw);
        assert!(assignment.is_empty());
        assert_eq!(assignment.assign(across, cat), None);
        assert_eq!(assignment.assign(across, dog), Some(cat));
        assert_eq!(assignment.len(), 1);
        assert!(!assignment.is_complete());
        assert!(assignment.contains_word(dog));
        assert!(!assignment.contains_word(cat));

        assert_eq!(assignment.unassign(down), None);
        assert_eq!(assignment.unassign(across), Some(dog));
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_consistent_with_rejects_wrong_length() {
        let cw = fixture();
        let (across, _) = ids(&cw);
        let to = cw.find_word("TO").unwrap();
        let assignment = Assignment::new(&cw);
        assert!(!assignment.is_consistent_with(across, to));
    }

    #[test]
    fn test_consistent_with_rejects_duplicates() {
        let cw = fixture();
        let (across, down) = ids(&cw);
        let ant = cw.find_word("ANT").unwrap();

        let mut assignment = Assignment::new(&cw);
        assignment.assign(across, ant);
        assert!(!assignment.is_consistent_with(down, ant));
        // Re-assigning the same slot is not a duplicate.
        assert!(assignment.is_consistent_with(across, ant));
    }

    #[test]
    fn test_consistent_with_checks_crossing_letters() {
        let cw = fixture();
        let (across, down) = ids(&cw);

        let mut assignment = Assignment::new(&cw);
        assignment.assign(across, cw.find_word("CAT").unwrap());
        // CAT[1] = 'A' must equal the down word's first letter.
        let fits = |text| assignment.is_consistent_with(down, cw.find_word(text).unwrap());
        assert!(fits("ANT"));
        assert!(fits("ART"));
        assert!(!fits("DOG"));
    }

    #[test]
    fn test_is_consistent_detects_conflict() {
        let cw = fixture();
        let (across, down) = ids(&cw);

        let mut assignment = Assignment::new(&cw);
        assignment.assign(across, cw.find_word("CAT").unwrap());
        assignment.assign(down, cw.find_word("DOG").unwrap());
        assert!(assignment.is_complete());
        assert!(!assignment.is_consistent());

        assignment.assign(down, cw.find_word("ART").unwrap());
        assert!(assignment.is_consistent());
    }

    #[test]
    fn test_iter_and_letter_grid() {
        let cw = fixture();
        let (across, down) = ids(&cw);

        let mut assignment = Assignment::new(&cw);
        assignment.assign(down, cw.find_word("ANT").unwrap());
        assignment.assign(across, cw.find_word("CAT").unwrap());

        let pairs: Vec<_> = assignment
            .iter()
            .map(|(var, word)| (var.start(), word.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                (cw.variable(across).start(), "CAT"),
                (cw.variable(down).start(), "ANT"),
            ]
        );

        assert_eq!(
            assignment.letter_grid(),
            [
                vec![Some('C'), Some('A'), Some('T')],
                vec![None, Some('N'), None],
                vec![None, Some('T'), None],
            ]
        );
    }
}
