//! # Key-Spelling Normalization
//!
//! Payload keys and dynamic method names arrive in `snake_case`,
//! `kebab-case`, or `camelCase`. Declared fields are matched by computing
//! both normal forms of the requested name and checking them against the
//! field table, so all three spellings land on the same field.

/// Converts a name to `camelCase`.
///
/// `_`, `-`, and spaces separate words; the first letter of every word is
/// raised, the words are joined, and the first character of the result is
/// lowered again. Characters that are not at a word boundary keep their
/// case, so an already-camel name passes through unchanged.
pub fn camelize(name: &str) -> String {
    let mut joined = String::with_capacity(name.len());
    let mut raise_next = true;
    for c in name.chars() {
        if c == '_' || c == '-' || c == ' ' {
            raise_next = true;
            continue;
        }
        if raise_next {
            joined.extend(c.to_uppercase());
            raise_next = false;
        } else {
            joined.push(c);
        }
    }
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => joined,
    }
}

/// Converts a name to `snake_case`.
///
/// Inserts `_` before every uppercase letter that follows a word
/// character, then lowers the whole string.
pub fn underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut after_word = false;
    for c in name.chars() {
        if c.is_uppercase() && after_word {
            out.push('_');
        }
        after_word = c.is_alphanumeric() || c == '_';
        out.extend(c.to_lowercase());
    }
    out
}
