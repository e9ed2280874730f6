//! Test utilities for the solver.
//!
//! Provides fixtures for building small crosswords from text and
//! `#[track_caller]` assertions for the invariants the propagation and search
//! code must uphold.

use crossfill_core::{Assignment, Crossword, VariableId};

use crate::Domains;

/// Installs `env_logger` once so `RUST_LOG=trace cargo test` shows solver logs.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a crossword from a structure string and a word list.
///
/// # Panics
///
/// Panics if the structure cannot be parsed or the word list is empty.
#[track_caller]
pub fn crossword(structure: &str, words: &[&str]) -> Crossword {
    Crossword::new(structure.parse().unwrap(), words).unwrap()
}

/// Asserts that the domain of `var` holds exactly `expected`, in alphabetical order.
#[track_caller]
pub fn assert_domain(domains: &Domains<'_>, var: VariableId, expected: &[&str]) {
    let actual: Vec<_> = domains.words(var).map(|word| word.as_str()).collect();
    assert_eq!(
        actual,
        expected,
        "unexpected domain for slot {}",
        domains.crossword().variable(var)
    );
}

/// Asserts that every candidate has its slot's length.
#[track_caller]
pub fn assert_node_consistent(domains: &Domains<'_>) {
    let crossword = domains.crossword();
    for var in crossword.variable_ids() {
        let length = crossword.variable(var).length();
        for word in domains.words(var) {
            assert_eq!(
                word.len(),
                length,
                "{word} left in slot {}",
                crossword.variable(var)
            );
        }
    }
}

/// Asserts that every candidate of every slot has a distinct, agreeing partner
/// in each crossing slot.
#[track_caller]
pub fn assert_arc_consistent(domains: &Domains<'_>) {
    let crossword = domains.crossword();
    for (x, y) in crossword.arcs() {
        let overlap = crossword.overlap(x, y).unwrap();
        for w in domains.words(x) {
            assert!(
                domains
                    .words(y)
                    .any(|v| v != w && overlap.agrees(w, v)),
                "{w} in slot {} has no partner in slot {}",
                crossword.variable(x),
                crossword.variable(y),
            );
        }
    }
}

/// Asserts that an assignment is a full, valid fill.
#[track_caller]
pub fn assert_valid_solution(assignment: &Assignment<'_>) {
    let crossword = assignment.crossword();
    assert!(assignment.is_complete(), "assignment is incomplete");

    let mut seen = vec![];
    for (var, word) in assignment.iter() {
        assert_eq!(word.len(), var.length(), "{word} does not fit slot {var}");
        assert!(!seen.contains(&word), "{word} is used twice");
        seen.push(word);
    }
    for (x, y) in crossword.arcs() {
        let overlap = crossword.overlap(x, y).unwrap();
        let (wx, wy) = (assignment.word(x).unwrap(), assignment.word(y).unwrap());
        assert!(
            overlap.agrees(wx, wy),
            "{wx} in slot {} clashes with {wy} in slot {}",
            crossword.variable(x),
            crossword.variable(y),
        );
    }
}
