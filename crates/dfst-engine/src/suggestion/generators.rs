// Individual suggestion generators: each applies one class of single edit
// to the misspelled word and validates the candidates through an acceptor.

use dfst_core::suggestion::Weight;

use super::Acceptor;
use super::status::SuggestionStatus;

/// Cost of a candidate that differs only in letter case.
pub const CASE_CHANGE_COST: Weight = 0.0;
/// Cost of transposing two adjacent characters.
pub const SWAP_COST: Weight = 0.9;
/// Cost of deleting one character.
pub const DELETION_COST: Weight = 1.0;
/// Cost of inserting one character.
pub const INSERTION_COST: Weight = 1.0;
/// Cost of replacing one character.
pub const REPLACEMENT_COST: Weight = 1.2;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual suggestion generators.
pub trait SuggestionGenerator {
    /// Generate candidates for the word tracked by `status`, using `acceptor`
    /// to validate them.
    fn generate(&self, acceptor: &dyn Acceptor, status: &mut SuggestionStatus<'_>);
}

// ---------------------------------------------------------------------------
// Shared helper
// ---------------------------------------------------------------------------

/// Look a candidate buffer up and, if the acceptor knows it, record it with
/// `cost` added to its lexicon weight.
pub fn suggest_for_buffer(
    acceptor: &dyn Acceptor,
    status: &mut SuggestionStatus<'_>,
    buffer: &[char],
    cost: Weight,
) {
    if status.should_abort() {
        return;
    }
    let candidate: String = buffer.iter().collect();
    status.charge();
    if let Some(hit) = acceptor.accept(&candidate) {
        status.add_suggestion(candidate, cost + hit.weight, hit.completed);
    }
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// CaseChange
// ---------------------------------------------------------------------------

/// Try the word as-is and fully lowercased.
///
/// Cheap (at most two lookups) and catches words that are right apart from
/// their capitalization.
pub struct CaseChange;

impl SuggestionGenerator for CaseChange {
    fn generate(&self, acceptor: &dyn Acceptor, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        suggest_for_buffer(acceptor, status, word, CASE_CHANGE_COST);

        let lower: Vec<char> = word.iter().flat_map(|c| c.to_lowercase()).collect();
        if lower.as_slice() != word {
            suggest_for_buffer(acceptor, status, &lower, CASE_CHANGE_COST);
        }
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Try transposing each pair of adjacent characters.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn generate(&self, acceptor: &dyn Acceptor, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let mut buffer = word.to_vec();

        for i in 1..word.len() {
            if status.should_abort() {
                break;
            }
            // Swapping equal characters gives the word back.
            if word[i - 1] == word[i] {
                continue;
            }
            buffer.swap(i - 1, i);
            suggest_for_buffer(acceptor, status, &buffer, SWAP_COST);
            buffer.swap(i - 1, i);
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Try deleting one character at each position.
///
/// Skips positions where the deleted character equals its predecessor, since
/// that produces the same candidate as the previous iteration.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, acceptor: &dyn Acceptor, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        if wlen < 2 {
            return;
        }
        let mut buffer = Vec::with_capacity(wlen - 1);

        for i in 0..wlen {
            if status.should_abort() {
                break;
            }
            if i > 0 && word[i] == word[i - 1] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            suggest_for_buffer(acceptor, status, &buffer, DELETION_COST);
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Try inserting every character of the lexicon alphabet at every position.
pub struct Insertion;

impl SuggestionGenerator for Insertion {
    fn generate(&self, acceptor: &dyn Acceptor, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        let mut buffer = Vec::with_capacity(wlen + 1);

        for &ins in acceptor.alphabet() {
            for j in 0..=wlen {
                if status.should_abort() {
                    return;
                }
                // Inserting after an equal character was already tried.
                if j > 0 && word[j - 1] == ins {
                    continue;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..j]);
                buffer.push(ins);
                buffer.extend_from_slice(&word[j..]);
                suggest_for_buffer(acceptor, status, &buffer, INSERTION_COST);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Try replacing each character with every other character of the lexicon
/// alphabet.
pub struct Replacement;

impl SuggestionGenerator for Replacement {
    fn generate(&self, acceptor: &dyn Acceptor, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let mut buffer = word.to_vec();

        for pos in 0..word.len() {
            for &to in acceptor.alphabet() {
                if status.should_abort() {
                    return;
                }
                if to == word[pos] {
                    continue;
                }
                buffer[pos] = to;
                suggest_for_buffer(acceptor, status, &buffer, REPLACEMENT_COST);
            }
            buffer[pos] = word[pos];
        }
    }
}
