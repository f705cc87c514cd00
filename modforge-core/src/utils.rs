//! Shared naming helpers for generated artifacts.

/// Upper-case the first character and lower-case the rest
/// (e.g., "followup_note" -> "Followup_note", "partnerID" -> "Partnerid")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Replace underscores with spaces (e.g., "followup_note" -> "followup note")
pub fn to_words(s: &str) -> String {
    s.replace('_', " ")
}

/// Human-readable label for an identifier (e.g., "followup_note" -> "Followup note")
pub fn humanize(s: &str) -> String {
    capitalize(&to_words(s))
}

/// Escape a value for use inside a single-quoted Python string literal.
pub fn py_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
