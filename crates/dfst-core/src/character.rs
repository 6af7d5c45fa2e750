// Character classification for tokenization

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Control characters (including NUL) classify as whitespace so that they
/// always separate tokens and never end up inside one.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if c.is_whitespace() || c.is_control() {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Letters and digits.
pub fn is_alphanumeric(c: char) -> bool {
    matches!(get_char_type(c), CharType::Letter | CharType::Digit)
}

/// Characters that may join two alphanumeric runs into one word
/// (`don't`, `e-mail`).
pub fn is_word_joiner(c: char) -> bool {
    matches!(
        c,
        '\'' | '-'
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
    )
}

fn is_punctuation_char(c: char) -> bool {
    if c.is_ascii_punctuation() {
        return true;
    }
    matches!(
        c,
        '\u{00A1}' // INVERTED EXCLAMATION MARK
            | '\u{00AB}' // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{00BB}' // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BF}' // INVERTED QUESTION MARK
            | '\u{2010}'..='\u{2027}' // hyphens, dashes, quotes, ellipsis
            | '\u{2039}' | '\u{203A}' // single angle quotation marks
    )
}

/// Uppercase the first character of `word`, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether the first character is uppercase and all others are lowercase
/// (or caseless).
pub fn is_first_upper(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| !c.is_uppercase()),
        _ => false,
    }
}

/// Whether every cased character is uppercase and at least one exists.
pub fn is_all_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_basic_characters() {
        assert_eq!(get_char_type('a'), CharType::Letter);
        assert_eq!(get_char_type('\u{00E1}'), CharType::Letter); // á
        assert_eq!(get_char_type('7'), CharType::Digit);
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2026}'), CharType::Punctuation); // …
        assert_eq!(get_char_type('\u{1F604}'), CharType::Unknown); // emoji
    }

    #[test]
    fn nul_is_whitespace() {
        assert_eq!(get_char_type('\0'), CharType::Whitespace);
    }

    #[test]
    fn joiners() {
        assert!(is_word_joiner('\''));
        assert!(is_word_joiner('-'));
        assert!(!is_word_joiner('.'));
    }

    #[test]
    fn capitalization_helpers() {
        assert_eq!(capitalize_first("s\u{00E1}megiella"), "S\u{00E1}megiella");
        assert_eq!(capitalize_first(""), "");
        assert!(is_first_upper("Boahtin"));
        assert!(!is_first_upper("BOAHTIN"));
        assert!(!is_first_upper("boahtin"));
        assert!(is_all_upper("BOAHTIN"));
        assert!(!is_all_upper("Boahtin"));
        assert!(!is_all_upper("123"));
    }
}
