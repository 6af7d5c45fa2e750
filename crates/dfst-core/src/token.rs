// Token types and word context records

/// Token types for string tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Run of letters and digits, possibly joined by apostrophes or hyphens.
    Word,
    /// Single punctuation character.
    Punctuation,
    /// Run of whitespace or control characters.
    Whitespace,
    /// Character of no other class (symbols, emoji).
    Unknown,
}

/// A word together with its byte offset in the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedWord {
    pub index: usize,
    pub word: String,
}

impl IndexedWord {
    pub fn new(index: usize, word: impl Into<String>) -> Self {
        Self {
            index,
            word: word.into(),
        }
    }
}

/// The word under a text cursor and up to two words on either side.
///
/// Indices are byte offsets into the concatenation of the text before and
/// after the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordContext {
    pub current: IndexedWord,
    pub first_before: Option<IndexedWord>,
    pub second_before: Option<IndexedWord>,
    pub first_after: Option<IndexedWord>,
    pub second_after: Option<IndexedWord>,
}
