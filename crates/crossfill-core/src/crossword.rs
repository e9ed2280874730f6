//! The crossword puzzle model.

use crate::{CrosswordError, Direction, Overlap, Position, Structure, Variable, Word, WordId};

/// Index of a slot in a [`Crossword`]'s sorted variable list.
///
/// Variable ids order the same way as the variables they refer to, i.e. by
/// start position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("v{_0}")]
pub struct VariableId(usize);

impl VariableId {
    /// Creates an id from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A crossword puzzle: grid structure, word slots, dictionary, and the
/// constraint graph between crossing slots.
///
/// Everything here is computed once in [`Crossword::new`] and never changes.
/// Solvers keep their mutable state (candidate domains, assignments)
/// elsewhere and refer to slots and words by [`VariableId`] and [`WordId`].
///
/// # Examples
///
/// ```
/// use crossfill_core::{Crossword, Direction, Overlap};
///
/// let crossword = Crossword::new("___\n_##\n_##".parse()?, ["CAT", "COW", "CAT"])?;
///
/// // Words are deduplicated and sorted.
/// assert_eq!(crossword.words().len(), 2);
///
/// let across = crossword.variable_starting_at(0, 0, Direction::Across).unwrap();
/// let down = crossword.variable_starting_at(0, 0, Direction::Down).unwrap();
/// assert_eq!(crossword.overlap(across, down), Some(Overlap::new(0, 0)));
/// assert_eq!(crossword.neighbors(across), [down]);
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    structure: Structure,
    words: Vec<Word>,
    variables: Vec<Variable>,
    /// `variables.len()` squared, row-major by `(x, y)`.
    overlaps: Vec<Option<Overlap>>,
    neighbors: Vec<Vec<VariableId>>,
}

impl Crossword {
    /// Builds a crossword from a structure and a word list.
    ///
    /// Duplicate words are dropped and the list is sorted, so [`WordId`]s
    /// follow alphabetical order.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::EmptyWordList`] if `words` yields nothing.
    pub fn new<I>(structure: Structure, words: I) -> Result<Self, CrosswordError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut words: Vec<Word> = words.into_iter().map(|w| Word::new(w.as_ref())).collect();
        words.sort_unstable();
        words.dedup();
        if words.is_empty() {
            return Err(CrosswordError::EmptyWordList);
        }

        let variables = structure.variables();
        let n = variables.len();
        let mut overlaps = vec![None; n * n];
        let mut neighbors = vec![vec![]; n];
        for (xi, x) in variables.iter().enumerate() {
            for (yi, y) in variables.iter().enumerate() {
                if let Some(overlap) = x.overlap_with(y) {
                    overlaps[xi * n + yi] = Some(overlap);
                    neighbors[xi].push(VariableId(yi));
                }
            }
        }

        log::debug!(
            "built crossword: {}x{} grid, {} slots, {} crossings, {} words",
            structure.height(),
            structure.width(),
            n,
            overlaps.iter().flatten().count() / 2,
            words.len(),
        );

        Ok(Self {
            structure,
            words,
            variables,
            overlaps,
            neighbors,
        })
    }

    /// Returns the grid structure.
    #[must_use]
    #[inline]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns the grid height.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.structure.height()
    }

    /// Returns the grid width.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.structure.width()
    }

    /// Returns the sorted, deduplicated dictionary.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the word with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this crossword.
    #[must_use]
    #[inline]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// Returns the ids of all words, in alphabetical order.
    pub fn word_ids(&self) -> impl ExactSizeIterator<Item = WordId> + use<> {
        (0..self.words.len()).map(WordId::new)
    }

    /// Looks up a word by its text.
    #[must_use]
    pub fn find_word(&self, text: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|word| word.as_str().cmp(text))
            .ok()
            .map(WordId::new)
    }

    /// Returns all slots, sorted by start position.
    #[must_use]
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns the slot with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this crossword.
    #[must_use]
    #[inline]
    pub fn variable(&self, id: VariableId) -> Variable {
        self.variables[id.index()]
    }

    /// Returns the ids of all slots, in sorted order.
    pub fn variable_ids(&self) -> impl ExactSizeIterator<Item = VariableId> + use<> {
        (0..self.variables.len()).map(VariableId)
    }

    /// Looks up the id of a slot.
    #[must_use]
    pub fn find_variable(&self, var: &Variable) -> Option<VariableId> {
        self.variables.binary_search(var).ok().map(VariableId)
    }

    /// Looks up the slot that starts at `(row, col)` in the given direction.
    #[must_use]
    pub fn variable_starting_at(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<VariableId> {
        let start = Position::new(row, col);
        self.variables
            .iter()
            .position(|var| var.start() == start && var.direction() == direction)
            .map(VariableId)
    }

    /// Returns the overlap between `x` and `y`.
    ///
    /// `None` means the slots share no cell, so the pair carries no binary
    /// constraint and never needs revising.
    #[must_use]
    #[inline]
    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps[x.index() * self.variables.len() + y.index()]
    }

    /// Returns the slots that cross `x`, in sorted order.
    #[must_use]
    #[inline]
    pub fn neighbors(&self, x: VariableId) -> &[VariableId] {
        &self.neighbors[x.index()]
    }

    /// Returns the number of slots that cross `x`.
    #[must_use]
    #[inline]
    pub fn degree(&self, x: VariableId) -> usize {
        self.neighbors[x.index()].len()
    }

    /// Returns every directed arc `(x, y)` whose slots overlap.
    ///
    /// Each crossing contributes two arcs, one per direction.
    pub fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.variable_ids()
            .flat_map(move |x| self.neighbors(x).iter().map(move |&y| (x, y)))
    }
}
