//! Character and token tables driving the scanner.

/// Characters that need dispatch instead of a verbatim copy: operators,
/// brackets, separators, quote delimiters and whitespace. Whitespace next to
/// any of them can be dropped.
pub const SPECIAL_CHARS: &[char] = &[
    '^', '&', '|', '!', '+', '-', '*', '/', '%', '=', '?', ':', ';', ',', '{', '}', '(', ')',
    '<', '>', '\'', '"', '`', '[', ']', '~', ' ', '\t', '\n', '\r',
];

/// Operators that form a different token when doubled (`+ ++b` vs `+++b`).
pub const DOUBLING_OPS: &[char] = &['+', '-', '/'];

/// Tokens after which `/` opens a regular expression rather than a division.
pub const REGEX_STARTERS: &[&str] = &[
    "(", "=", "<", ">", "?", "[", "{", ",", ";", ":", "!", "&", "|", "+", "-", "%", "~", "^",
    "return", "yield", "else", "throw", "await",
];

/// Whitespace skipped when trimming and when looking back for a regex starter.
pub const BLANK_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Whitespace that starts a collapsible run.
pub const SPACE_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

pub const QUOTE_CHARS: &[char] = &['"', '\'', '`'];

pub fn is_special(ch: char) -> bool {
    SPECIAL_CHARS.contains(&ch)
}

pub fn is_doubling_op(ch: char) -> bool {
    DOUBLING_OPS.contains(&ch)
}

pub fn is_blank(ch: char) -> bool {
    BLANK_CHARS.contains(&ch)
}

pub fn is_space(ch: char) -> bool {
    SPACE_CHARS.contains(&ch)
}

pub fn is_quote(ch: char) -> bool {
    QUOTE_CHARS.contains(&ch)
}
