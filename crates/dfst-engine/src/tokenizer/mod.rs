// Word segmentation and cursor context
//
// Text is cut into segments: words (letters and digits, with apostrophes and
// hyphens allowed between them), single punctuation or unclassified
// characters, and runs of whitespace. Offsets are byte offsets into the
// UTF-8 text.

use dfst_core::character::{CharType, get_char_type, is_alphanumeric, is_word_joiner};
use dfst_core::token::{IndexedWord, TokenType, WordContext};

// ============================================================================
// Token scanning
// ============================================================================

/// Byte length of the word starting at the beginning of `text`.
///
/// A joiner only belongs to the word when an alphanumeric follows it, so
/// `don't` is one word while the hyphen in `sámi-` is not part of `sámi`.
fn word_length(text: &str) -> usize {
    let mut chars = text.char_indices().peekable();
    let mut end = 0;
    while let Some((i, c)) = chars.next() {
        if is_alphanumeric(c) {
            end = i + c.len_utf8();
            continue;
        }
        let joins = is_word_joiner(c) && matches!(chars.peek(), Some(&(_, next)) if is_alphanumeric(next));
        if !joins {
            break;
        }
    }
    end
}

fn whitespace_length(text: &str) -> usize {
    text.char_indices()
        .find(|&(_, c)| get_char_type(c) != CharType::Whitespace)
        .map_or(text.len(), |(i, _)| i)
}

/// Find the token starting at byte `pos` of `text`.
///
/// Returns the token type and its byte length, or `None` at the end of the
/// text (or when `pos` is not on a character boundary).
pub fn next_token(text: &str, pos: usize) -> Option<(TokenType, usize)> {
    let rest = text.get(pos..)?;
    let first = rest.chars().next()?;

    let token = match get_char_type(first) {
        CharType::Letter | CharType::Digit => (TokenType::Word, word_length(rest)),
        CharType::Whitespace => (TokenType::Whitespace, whitespace_length(rest)),
        CharType::Punctuation => (TokenType::Punctuation, first.len_utf8()),
        CharType::Unknown => (TokenType::Unknown, first.len_utf8()),
    };
    Some(token)
}

// ============================================================================
// Iterators
// ============================================================================

/// One segment of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub index: usize,
    pub kind: TokenType,
    pub text: &'a str,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenType::Word
    }
}

/// Every segment of a text, in order.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, len) = next_token(self.text, self.pos)?;
        let index = self.pos;
        self.pos += len;
        Some(Token {
            index,
            kind,
            text: &self.text[index..self.pos],
        })
    }
}

/// Non-whitespace segments with their byte offsets.
#[derive(Debug, Clone)]
pub struct WordIndices<'a> {
    tokens: Tokens<'a>,
}

impl<'a> Iterator for WordIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens
            .by_ref()
            .find(|t| t.kind != TokenType::Whitespace)
            .map(|t| (t.index, t.text))
    }
}

pub trait Tokenize {
    fn tokens(&self) -> Tokens<'_>;
    fn word_indices(&self) -> WordIndices<'_>;
}

impl Tokenize for str {
    fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    fn word_indices(&self) -> WordIndices<'_> {
        WordIndices {
            tokens: Tokens::new(self),
        }
    }
}

// ============================================================================
// Owned cursor
// ============================================================================

/// Word cursor that owns its text, for callers that cannot keep the text
/// borrowed between steps.
///
/// Once exhausted it stays exhausted.
#[derive(Debug, Clone)]
pub struct OwnedWordIndices {
    text: String,
    pos: usize,
    done: bool,
}

impl OwnedWordIndices {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
            done: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Iterator for OwnedWordIndices {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some((kind, len)) = next_token(&self.text, self.pos) {
            let index = self.pos;
            self.pos += len;
            if kind != TokenType::Whitespace {
                return Some((index, self.text[index..self.pos].to_string()));
            }
        }
        self.done = true;
        None
    }
}

impl std::iter::FusedIterator for OwnedWordIndices {}

// ============================================================================
// Cursor context
// ============================================================================

/// The word under a cursor placed between `first_half` and `second_half`,
/// with up to two words on each side.
///
/// The segment touching the cursor on each side is always consumed; it only
/// contributes to `current` if it is a word. When no word touches the cursor
/// from the left, `current` is indexed at the cursor position. All indices
/// are byte offsets into `first_half` followed by `second_half`.
pub fn cursor_context(first_half: &str, second_half: &str) -> WordContext {
    let before: Vec<Token<'_>> = first_half.tokens().collect();
    let mut before = before.into_iter().rev();
    let mut after = second_half.tokens();

    let left = before.next().filter(Token::is_word);
    let right = after.next().filter(Token::is_word);

    let current = {
        let left_text = left.map_or("", |t| t.text);
        let right_text = right.map_or("", |t| t.text);
        let index = match left {
            Some(t) => t.index,
            None => first_half.len() + right.map_or(0, |t| t.index),
        };
        IndexedWord::new(index, format!("{left_text}{right_text}"))
    };

    let mut before = before
        .filter(Token::is_word)
        .map(|t| IndexedWord::new(t.index, t.text));
    let offset = first_half.len();
    let mut after = after
        .filter(Token::is_word)
        .map(|t| IndexedWord::new(offset + t.index, t.text));

    WordContext {
        current,
        first_before: before.next(),
        second_before: before.next(),
        first_after: after.next(),
        second_after: after.next(),
    }
}
