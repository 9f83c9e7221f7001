//! Splitting identifiers and comments into checkable words.

/// Characters that mark a comment word as a path, URL or address.
const NON_PROSE: &[char] = &['/', '\\', '@', '.', ':'];

/// Split an identifier into lowercase word segments.
///
/// Splits on anything that is not a letter (`_`, digits, type suffix) and on
/// camelCase boundaries, including the end of an acronym (`HTTPRequest` is
/// `http` + `request`).
#[must_use]
pub fn identifier_segments(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|part| !part.is_empty())
        .flat_map(camel_case_parts)
        .map(|part| part.to_lowercase())
        .collect()
}

fn camel_case_parts(part: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = part.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, current) = chars[i];
        let previous = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());

        let boundary = current.is_uppercase()
            && (previous.is_lowercase() || (previous.is_uppercase() && next_is_lower));
        if boundary {
            parts.push(&part[start..offset]);
            start = offset;
        }
    }

    parts.push(&part[start..]);
    parts
}

/// Remove the `'` or `rem` marker from a comment.
#[must_use]
pub fn comment_body(text: &str) -> &str {
    if let Some(body) = text.strip_prefix('\'') {
        return body;
    }
    match text.get(..3) {
        Some(marker) if marker.eq_ignore_ascii_case("rem") => &text[3..],
        _ => text,
    }
}

/// Prose words of a comment, edge punctuation trimmed.
///
/// Words that look like paths, URLs or addresses and words containing digits
/// are dropped. Inner apostrophes are kept.
#[must_use]
pub fn comment_words(text: &str) -> Vec<&str> {
    comment_body(text)
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .filter(|word| !word.contains(NON_PROSE) && !word.chars().any(|c| c.is_ascii_digit()))
        .collect()
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
