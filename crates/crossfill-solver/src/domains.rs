use std::collections::BTreeSet;

use crossfill_core::{Crossword, VariableId, Word, WordId};

/// Candidate words for every slot of a crossword.
///
/// `Domains` is the mutable state of the solver. It starts with the full
/// dictionary in every slot and only ever shrinks: node consistency and arc
/// consistency (see [`enforce_node_consistency`](Self::enforce_node_consistency)
/// and [`ac3`](Self::ac3)) remove candidates, and the search narrows a slot to
/// a single word when it commits to it.
///
/// Cloning is the snapshot mechanism: each search branch works on its own
/// copy, so abandoning the branch restores the previous state.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Crossword, Direction};
/// use crossfill_solver::Domains;
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?, ["CAT", "OX", "DOG"])?;
/// let across = crossword.variable_starting_at(0, 0, Direction::Across).unwrap();
///
/// let mut domains = Domains::new(&crossword);
/// assert_eq!(domains.len(across), 3);
///
/// assert!(domains.enforce_node_consistency());
/// let words: Vec<_> = domains.words(across).map(|w| w.as_str()).collect();
/// assert_eq!(words, ["CAT", "DOG"]);
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains<'a> {
    pub(crate) crossword: &'a Crossword,
    pub(crate) candidates: Vec<BTreeSet<WordId>>,
}

impl<'a> Domains<'a> {
    /// Creates domains holding every dictionary word for every slot.
    #[must_use]
    pub fn new(crossword: &'a Crossword) -> Self {
        let all: BTreeSet<WordId> = crossword.word_ids().collect();
        Self {
            crossword,
            candidates: vec![all; crossword.variables().len()],
        }
    }

    /// Returns the crossword these domains belong to.
    #[must_use]
    #[inline]
    pub fn crossword(&self) -> &'a Crossword {
        self.crossword
    }

    /// Returns the number of candidates left for `var`.
    #[must_use]
    #[inline]
    pub fn len(&self, var: VariableId) -> usize {
        self.candidates[var.index()].len()
    }

    /// Returns `true` if `var` has no candidates left.
    #[must_use]
    #[inline]
    pub fn is_empty(&self, var: VariableId) -> bool {
        self.candidates[var.index()].is_empty()
    }

    /// Returns `true` if `word` is still a candidate for `var`.
    #[must_use]
    #[inline]
    pub fn contains(&self, var: VariableId, word: WordId) -> bool {
        self.candidates[var.index()].contains(&word)
    }

    /// Returns the candidate ids for `var`, in alphabetical order of the words.
    pub fn candidates(&self, var: VariableId) -> impl ExactSizeIterator<Item = WordId> + '_ {
        self.candidates[var.index()].iter().copied()
    }

    /// Returns the candidate words for `var`, in alphabetical order.
    pub fn words(&self, var: VariableId) -> impl Iterator<Item = &'a Word> + '_ {
        let crossword = self.crossword;
        self.candidates(var).map(move |id| crossword.word(id))
    }

    /// Returns the first slot, in slot order, whose domain is empty.
    #[must_use]
    pub fn first_empty(&self) -> Option<VariableId> {
        self.crossword
            .variable_ids()
            .find(|&var| self.is_empty(var))
    }

    /// Removes `word` from the domain of `var`, returning whether it was present.
    pub fn remove(&mut self, var: VariableId, word: WordId) -> bool {
        self.candidates[var.index()].remove(&word)
    }

    /// Narrows the domain of `var` to the single `word`.
    ///
    /// Returns `false`, leaving the domain empty, if `word` was not a candidate.
    pub fn restrict_to(&mut self, var: VariableId, word: WordId) -> bool {
        let domain = &mut self.candidates[var.index()];
        let present = domain.contains(&word);
        domain.clear();
        if present {
            domain.insert(word);
        }
        present
    }
}
