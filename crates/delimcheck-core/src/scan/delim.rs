//! Delimiter pair definitions.

/// Return the closing symbol matching an opening delimiter.
pub const fn closing_for(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Check if a character is one of the three closing symbols.
pub const fn is_closer(ch: char) -> bool {
    matches!(ch, '}' | ')' | ']')
}

/// Check if a character is a string quote.
pub const fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}
