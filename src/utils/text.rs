//! Text truncation and name formatting utilities
//!
//! Lengths are counted in Unicode scalar values so multi-byte titles are
//! never split mid-character.

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Keep `s` unchanged when it has at most `max_chars` characters, otherwise
/// keep the first `max_chars` characters and append [`ELLIPSIS`].
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}{ELLIPSIS}", &s[..cut]),
    }
}

/// First letter of each whitespace-separated word, uppercased, no separator.
///
/// "Ann Lee" -> "AL", "  bo   kim " -> "BK", "" -> "".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
